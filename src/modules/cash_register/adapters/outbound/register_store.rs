// Port for cash register persistence.
//
// Boundaries
// - `list` returns operations in creation order; the balance fold and
//   the register screen both rely on it.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::cash_register::core::operation::CashOperation;
use crate::shared::core::errors::LedgerError;

#[derive(Debug, Error)]
pub enum RegisterStoreError {
    #[error("operation {0} not found")]
    NotFound(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<RegisterStoreError> for LedgerError {
    fn from(err: RegisterStoreError) -> Self {
        match err {
            RegisterStoreError::NotFound(id) => LedgerError::NotFound(format!("operation {id}")),
            RegisterStoreError::Backend(message) => LedgerError::NetworkFailure(message),
        }
    }
}

#[async_trait]
pub trait RegisterStore: Send + Sync {
    async fn list(&self) -> Result<Vec<CashOperation>, RegisterStoreError>;
    async fn get(&self, id: Uuid) -> Result<CashOperation, RegisterStoreError>;
    async fn insert(&self, operation: CashOperation) -> Result<(), RegisterStoreError>;
    async fn update(&self, operation: CashOperation) -> Result<(), RegisterStoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), RegisterStoreError>;
}
