use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::charges::core::charge::Charge;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListChargesParams {
    pub client_id: Uuid,
    pub annee: Option<i32>,
}

#[derive(Serialize)]
pub struct ListChargesResponse {
    pub success: bool,
    pub charges: Vec<Charge>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListChargesParams>,
) -> impl IntoResponse {
    match state.charges.list(params.client_id, params.annee).await {
        Ok(charges) => Json(ListChargesResponse {
            success: true,
            charges,
        })
        .into_response(),
        Err(err) => respond_error(err.into()),
    }
}
