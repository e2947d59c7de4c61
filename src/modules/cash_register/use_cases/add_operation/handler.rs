use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cash_register::adapters::outbound::register_store::RegisterStore;
use crate::modules::cash_register::core::operation::{
    CashOperation, OperationKind, OperationSign, resolve_sign,
};
use crate::shared::core::errors::LedgerError;
use crate::shared::core::money::require_positive;

#[derive(Debug, Clone)]
pub struct AddOperation {
    pub kind: OperationKind,
    pub sign: Option<OperationSign>,
    pub amount: rust_decimal::Decimal,
    pub comment: String,
    pub client_id: Option<Uuid>,
    pub charge_id: Option<Uuid>,
}

pub struct AddOperationHandler {
    register: Arc<dyn RegisterStore>,
}

impl AddOperationHandler {
    pub fn new(register: Arc<dyn RegisterStore>) -> Self {
        Self { register }
    }

    pub async fn handle(&self, command: AddOperation) -> Result<CashOperation, LedgerError> {
        let amount = require_positive("montant", command.amount)?;
        let operation = CashOperation {
            id: Uuid::now_v7(),
            kind: command.kind,
            sign: resolve_sign(command.kind, command.sign),
            amount,
            comment: command.comment,
            created_at: Utc::now().timestamp_millis(),
            client_id: command.client_id,
            charge_id: command.charge_id,
        };
        self.register.insert(operation.clone()).await?;
        Ok(operation)
    }
}
