// Port for the charge collaborator.
//
// Purpose
// - Describe what the use cases need from charge persistence, without
//   implementing it.
//
// Boundaries
// - `list` returns rows in storage order; the balance fold relies on
//   that order as the same-month tie-break.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::charges::core::charge::Charge;
use crate::shared::core::errors::LedgerError;

#[derive(Debug, Error)]
pub enum ChargeStoreError {
    #[error("charge {0} not found")]
    NotFound(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<ChargeStoreError> for LedgerError {
    fn from(err: ChargeStoreError) -> Self {
        match err {
            ChargeStoreError::NotFound(id) => LedgerError::NotFound(format!("charge {id}")),
            ChargeStoreError::Backend(message) => LedgerError::NetworkFailure(message),
        }
    }
}

#[async_trait]
pub trait ChargeStore: Send + Sync {
    /// Charges of one client, optionally restricted to a year, in
    /// storage order.
    async fn list(&self, client_id: Uuid, year: Option<i32>) -> Result<Vec<Charge>, ChargeStoreError>;
    async fn get(&self, id: Uuid) -> Result<Charge, ChargeStoreError>;
    async fn insert(&self, charge: Charge) -> Result<(), ChargeStoreError>;
    async fn update(&self, charge: Charge) -> Result<(), ChargeStoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), ChargeStoreError>;
    /// Persists the one-shot cash-withdrawal flag.
    async fn set_withdrawal_processed(&self, id: Uuid, processed: bool) -> Result<(), ChargeStoreError>;
}
