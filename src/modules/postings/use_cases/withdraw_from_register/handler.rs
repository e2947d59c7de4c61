// One-shot cash withdrawal for a pure expense charge.
//
// The charge's persisted retrait_effectue flag is the authority: once
// true the operation is permanently disabled, and a repeat call is a
// reported no-op, not an error. The register write and the flag write
// belong to one server-side operation; a failed flag write deletes the
// operation it just created.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::cash_register::adapters::outbound::register_store::RegisterStore;
use crate::modules::cash_register::core::operation::{
    CashOperation, OperationKind, resolve_sign,
};
use crate::modules::charges::adapters::outbound::charge_store::ChargeStore;
use crate::modules::charges::adapters::outbound::client_directory::ClientDirectory;
use crate::shared::core::errors::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WithdrawOutcome {
    Withdrawn { operation_id: Uuid },
    AlreadyProcessed,
}

pub struct WithdrawFromRegisterHandler {
    charges: Arc<dyn ChargeStore>,
    clients: Arc<dyn ClientDirectory>,
    register: Arc<dyn RegisterStore>,
}

impl WithdrawFromRegisterHandler {
    pub fn new(
        charges: Arc<dyn ChargeStore>,
        clients: Arc<dyn ClientDirectory>,
        register: Arc<dyn RegisterStore>,
    ) -> Self {
        Self {
            charges,
            clients,
            register,
        }
    }

    pub async fn handle(&self, charge_id: Uuid) -> Result<WithdrawOutcome, LedgerError> {
        let charge = self.charges.get(charge_id).await?;
        if charge.cash_withdrawal_processed {
            info!(%charge_id, "withdrawal already processed, skipping");
            return Ok(WithdrawOutcome::AlreadyProcessed);
        }
        if !charge.withdrawal_eligible() {
            return Err(LedgerError::InvalidAmount(format!(
                "charge {charge_id} is not withdrawable: it requires a strictly positive montant and a zero avance"
            )));
        }
        let client_name = self.clients.name_of(charge.client_id).await?;

        let operation = CashOperation {
            id: Uuid::now_v7(),
            kind: OperationKind::Withdrawal,
            sign: resolve_sign(OperationKind::Withdrawal, None),
            amount: charge.debit,
            comment: format!("{} - {}", charge.label, client_name),
            created_at: Utc::now().timestamp_millis(),
            client_id: Some(charge.client_id),
            charge_id: Some(charge.id),
        };
        self.register.insert(operation.clone()).await?;

        if let Err(flag_err) = self
            .charges
            .set_withdrawal_processed(charge.id, true)
            .await
        {
            // Compensate so the register and the flag stay consistent.
            if let Err(cleanup_err) = self.register.delete(operation.id).await {
                error!(%charge_id, %cleanup_err, "failed to roll back withdrawal operation");
            }
            return Err(flag_err.into());
        }
        info!(%charge_id, operation_id = %operation.id, "cash withdrawal recorded");
        Ok(WithdrawOutcome::Withdrawn {
            operation_id: operation.id,
        })
    }
}
