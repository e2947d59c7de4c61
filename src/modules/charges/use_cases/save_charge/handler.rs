use std::sync::Arc;
use uuid::Uuid;

use crate::modules::charges::adapters::outbound::charge_store::ChargeStore;
use crate::modules::charges::core::charge::Charge;
use crate::modules::charges::core::labels;
use crate::modules::charges::use_cases::save_charge::command::SaveCharge;
use crate::shared::core::errors::LedgerError;
use crate::shared::core::money::round_millimes;

pub struct SaveChargeHandler {
    charges: Arc<dyn ChargeStore>,
}

impl SaveChargeHandler {
    pub fn new(charges: Arc<dyn ChargeStore>) -> Self {
        Self { charges }
    }

    pub async fn create(&self, command: SaveCharge) -> Result<Charge, LedgerError> {
        let label = labels::build_stored_label(&command.base_label, command.detail.as_deref());
        labels::validate_amounts(&label, command.debit, command.credit)?;
        let charge = Charge {
            id: Uuid::now_v7(),
            client_id: command.client_id,
            date: command.date,
            label,
            debit: round_millimes(command.debit),
            credit: round_millimes(command.credit),
            carry_forward: false,
            cash_withdrawal_processed: false,
        };
        self.charges.insert(charge.clone()).await?;
        Ok(charge)
    }

    pub async fn update(&self, id: Uuid, command: SaveCharge) -> Result<Charge, LedgerError> {
        let existing = self.charges.get(id).await?;
        if existing.carry_forward {
            return Err(LedgerError::InvalidAmount(format!(
                "charge {id} is a carry-forward row and is display-only"
            )));
        }
        let label = labels::build_stored_label(&command.base_label, command.detail.as_deref());
        labels::validate_amounts(&label, command.debit, command.credit)?;
        let charge = Charge {
            id,
            client_id: existing.client_id,
            date: command.date,
            label,
            debit: round_millimes(command.debit),
            credit: round_millimes(command.credit),
            carry_forward: false,
            cash_withdrawal_processed: existing.cash_withdrawal_processed,
        };
        self.charges.update(charge.clone()).await?;
        Ok(charge)
    }
}
