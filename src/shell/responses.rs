// Maps the error taxonomy onto the wire envelope. Every failure body is
// `{ "success": false, "error": "..." }`; validation errors are 422,
// unknown ids 404, collaborator failures 500.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::shared::core::errors::LedgerError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

pub fn respond_error(err: LedgerError) -> Response {
    let status = match &err {
        LedgerError::InvalidAmount(_) | LedgerError::ConflictingAmount { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
        // Handlers absorb duplicates as idempotent no-ops; reaching this
        // arm means a bug upstream, so flag it loudly.
        LedgerError::DuplicatePosting { .. } => StatusCode::CONFLICT,
        LedgerError::NetworkFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            success: false,
            error: err.to_string(),
        }),
    )
        .into_response()
}
