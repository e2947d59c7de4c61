// Reconstructs posting state from the downstream ledgers.
//
// The expense records are the authority: a linked posting is a direct
// hit, a historical unlinked posting counts only through the strict
// compatibility match. The withdrawal flag is read from the charge
// itself, which persists it. Reconstructed state seeds the shared
// tracker so subsequent post attempts start from reality.

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::charges::adapters::outbound::charge_store::ChargeStore;
use crate::modules::charges::adapters::outbound::client_directory::ClientDirectory;
use crate::modules::postings::adapters::outbound::expense_store::ExpenseStore;
use crate::modules::postings::core::matching::matches_charge;
use crate::modules::postings::core::posting::{ExpensePosting, Origin};
use crate::modules::postings::core::tracker::PostingTracker;
use crate::shared::core::errors::LedgerError;

#[derive(Debug, Clone, Serialize)]
pub struct ChargePostingState {
    pub charge_id: Uuid,
    #[serde(rename = "client")]
    pub client_posted: bool,
    #[serde(rename = "bureau")]
    pub office_posted: bool,
    #[serde(rename = "retrait_effectue")]
    pub cash_withdrawal_processed: bool,
}

pub struct LoadPostingStatesHandler {
    charges: Arc<dyn ChargeStore>,
    clients: Arc<dyn ClientDirectory>,
    expenses: Arc<dyn ExpenseStore>,
    tracker: Arc<PostingTracker>,
}

impl LoadPostingStatesHandler {
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

    pub async fn handle(
        &self,
        client_id: Uuid,
        year: Option<i32>,
    ) -> Result<Vec<ChargePostingState>, LedgerError> {
        let charges = self.charges.list(client_id, year).await?;
        let client_name = self.clients.name_of(client_id).await?;
        let unlinked = self.expenses.unlinked().await?;

        let mut states = Vec::new();
        let mut posted_keys: Vec<(Uuid, Origin)> = Vec::new();
        for charge in charges.iter().filter(|charge| !charge.carry_forward) {
            let linked = self.expenses.linked_to(charge.id).await?;
            let mut posted_for = |origin: Origin| -> bool {
                let hit = linked.iter().any(|posting| posting.origin == origin)
                    || unlinked
                        .iter()
                        .filter(|posting: &&ExpensePosting| posting.origin == origin)
                        .any(|posting| matches_charge(posting, charge, &client_name));
                if hit {
                    posted_keys.push((charge.id, origin));
                }
                hit
            };
            let client_posted = posted_for(Origin::Client);
            let office_posted = posted_for(Origin::Office);
            states.push(ChargePostingState {
                charge_id: charge.id,
                client_posted,
                office_posted,
                cash_withdrawal_processed: charge.cash_withdrawal_processed,
            });
        }
        self.tracker.seed(posted_keys).await;
        Ok(states)
    }
}
