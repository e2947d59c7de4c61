use std::sync::Arc;
use serde::Serialize;
use tracing::warn;

use crate::modules::charges::adapters::outbound::charge_store::ChargeStore;
use crate::modules::charges::adapters::outbound::client_directory::ClientDirectory;
use crate::modules::charges::core::charge::Charge;
use crate::modules::postings::adapters::outbound::expense_store::{ExpenseStore, ExpenseStoreError};
use crate::modules::postings::core::matching::matches_charge;
use crate::modules::postings::core::posting::{ExpensePosting, Origin, postable_amount};
use crate::modules::postings::core::tracker::{PostingStatus, PostingTracker};
use crate::modules::postings::use_cases::post_charge::command::PostCharge;
use crate::shared::core::errors::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostOutcome {
    Posted,
    AlreadyPosted,
}

#[derive(Debug, Clone, Serialize)]
pub struct OriginResult {
    pub origin: Origin,
    pub outcome: PostOutcome,
}

pub struct PostChargeHandler {
    charges: Arc<dyn ChargeStore>,
    clients: Arc<dyn ClientDirectory>,
    expenses: Arc<dyn ExpenseStore>,
    tracker: Arc<PostingTracker>,
}

impl PostChargeHandler {
    pub fn new(
        charges: Arc<dyn ChargeStore>,
        clients: Arc<dyn ClientDirectory>,
        expenses: Arc<dyn ExpenseStore>,
        tracker: Arc<PostingTracker>,
    ) -> Self {
        Self {
            charges,
            clients,
            expenses,
            tracker,
        }
    }

    /// Posts the charge to each requested origin exactly once. An
    /// origin that is already posted, locally or downstream, is skipped
    /// and reported as such; a backend failure reverts the optimistic
    /// claim for that origin and aborts.
    pub async fn handle(&self, command: PostCharge) -> Result<Vec<OriginResult>, LedgerError> {
        let charge = self.charges.get(command.charge_id).await?;
        let amount = postable_amount(&charge)?;
        let client_name = self.clients.name_of(charge.client_id).await?;

        let mut origins = command.origins;
        origins.dedup();
        let mut results = Vec::with_capacity(origins.len());
        for origin in origins {
            // A cold tracker (fresh process) has to consult the store
            // before claiming the transition.
            if self.tracker.status(charge.id, origin).await == PostingStatus::Unposted
                && self.posted_downstream(&charge, origin, &client_name).await?
            {
                self.tracker.seed([(charge.id, origin)]).await;
            }

            if !self.tracker.begin(charge.id, origin).await {
                results.push(OriginResult {
                    origin,
                    outcome: PostOutcome::AlreadyPosted,
                });
                continue;
            }

            let posting = ExpensePosting::for_charge(&charge, origin, &client_name, amount);
            match self.expenses.create(posting).await {
                Ok(()) => results.push(OriginResult {
                    origin,
                    outcome: PostOutcome::Posted,
                }),
                Err(ExpenseStoreError::Duplicate { charge_id, origin }) => {
                    // Race loser: another session posted first. The
                    // store kept one record; report success, keep the
                    // local state Posted.
                    warn!(%charge_id, %origin, "duplicate posting rejected downstream, treating as already posted");
                    results.push(OriginResult {
                        origin,
                        outcome: PostOutcome::AlreadyPosted,
                    });
                }
                Err(ExpenseStoreError::Backend(message)) => {
                    self.tracker.revert(charge.id, origin).await;
                    return Err(LedgerError::NetworkFailure(message));
                }
            }
        }
        Ok(results)
    }

    async fn posted_downstream(
        &self,
        charge: &Charge,
        origin: Origin,
        client_name: &str,
    ) -> Result<bool, LedgerError> {
        let linked = self.expenses.linked_to(charge.id).await?;
        if linked.iter().any(|posting| posting.origin == origin) {
            return Ok(true);
        }
        let unlinked = self.expenses.unlinked().await?;
        Ok(unlinked
            .iter()
            .filter(|posting| posting.origin == origin)
            .any(|posting| matches_charge(posting, charge, client_name)))
    }
}
