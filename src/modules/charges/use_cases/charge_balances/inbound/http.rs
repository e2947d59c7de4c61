use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::charges::core::balance::{
    BalanceError, BalanceReport, compute_running_balances, opening_balance_of,
};
use crate::shared::core::errors::LedgerError;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ChargeBalancesParams {
    pub client_id: Uuid,
    pub annee: Option<i32>,
}

#[derive(Serialize)]
pub struct ChargeBalancesResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: BalanceReport,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ChargeBalancesParams>,
) -> impl IntoResponse {
    let charges = match state.charges.list(params.client_id, params.annee).await {
        Ok(charges) => charges,
        Err(err) => return respond_error(err.into()),
    };
    let opening = opening_balance_of(&charges);
    match compute_running_balances(&charges, opening) {
        Ok(report) => Json(ChargeBalancesResponse {
            success: true,
            report,
        })
        .into_response(),
        Err(BalanceError::InvalidAmount(message)) => {
            respond_error(LedgerError::InvalidAmount(message))
        }
        Err(BalanceError::MultipleCarryForward) => respond_error(LedgerError::InvalidAmount(
            "more than one carry-forward row for this year".to_string(),
        )),
    }
}
