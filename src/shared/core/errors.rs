// Error taxonomy shared by every bounded context.
//
// Validation errors (InvalidAmount, ConflictingAmount) are raised before
// any port call. DuplicatePosting is the race-loser signal from the
// expense store and is never surfaced to callers as a failure.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("label '{label}' does not allow a value in '{field}'")]
    ConflictingAmount { label: String, field: &'static str },

    #[error("charge {charge_id} is already posted to {origin}")]
    DuplicatePosting { charge_id: String, origin: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    NetworkFailure(String),
}
