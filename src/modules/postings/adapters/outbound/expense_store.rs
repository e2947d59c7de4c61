// Port for the downstream expense ledgers (client and office).
//
// Purpose
// - Create postings and expose the queries the posting state tracker
//   needs to reconstruct its state after a restart.
//
// Boundaries
// - The store, not the caller, owns the (charge_id, origin) uniqueness
//   guarantee; a race loser gets Duplicate back and must treat it as an
//   idempotent no-op.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::postings::core::posting::{ExpensePosting, Origin};
use crate::shared::core::errors::LedgerError;

#[derive(Debug, Error)]
pub enum ExpenseStoreError {
    #[error("charge {charge_id} already has a posting with origin {origin}")]
    Duplicate { charge_id: Uuid, origin: Origin },

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<ExpenseStoreError> for LedgerError {
    fn from(err: ExpenseStoreError) -> Self {
        match err {
            ExpenseStoreError::Duplicate { charge_id, origin } => LedgerError::DuplicatePosting {
                charge_id: charge_id.to_string(),
                origin: origin.to_string(),
            },
            ExpenseStoreError::Backend(message) => LedgerError::NetworkFailure(message),
        }
    }
}

#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Creates a posting, enforcing (charge_id, origin) uniqueness for
    /// linked postings.
    async fn create(&self, posting: ExpensePosting) -> Result<(), ExpenseStoreError>;
    /// Postings explicitly linked to a charge.
    async fn linked_to(&self, charge_id: Uuid) -> Result<Vec<ExpensePosting>, ExpenseStoreError>;
    /// Historical postings without a charge link, candidates for
    /// compatibility matching.
    async fn unlinked(&self) -> Result<Vec<ExpensePosting>, ExpenseStoreError>;
}
