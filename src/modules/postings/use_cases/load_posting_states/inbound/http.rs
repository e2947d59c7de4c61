use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::postings::use_cases::load_posting_states::handler::ChargePostingState;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PostingStatesParams {
    pub client_id: Uuid,
    pub annee: Option<i32>,
}

#[derive(Serialize)]
pub struct PostingStatesResponse {
    pub success: bool,
    pub states: Vec<ChargePostingState>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<PostingStatesParams>,
) -> impl IntoResponse {
    match state
        .posting_states
        .handle(params.client_id, params.annee)
        .await
    {
        Ok(states) => Json(PostingStatesResponse {
            success: true,
            states,
        })
        .into_response(),
        Err(err) => respond_error(err),
    }
}
