use axum::{Json, extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::cash_register::core::operation::{CashOperation, balance};
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListOperationsResponse {
    pub success: bool,
    pub operations: Vec<CashOperation>,
    /// Folded from the full operation list on every call.
    #[serde(rename = "solde_actuel", with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.register.list().await {
        Ok(operations) => {
            let current_balance = balance(&operations);
            Json(ListOperationsResponse {
                success: true,
                operations,
                current_balance,
            })
            .into_response()
        }
        Err(err) => respond_error(err.into()),
    }
}
