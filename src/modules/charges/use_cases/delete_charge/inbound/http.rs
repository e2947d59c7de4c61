use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteChargeResponse {
    pub success: bool,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.charges.delete(id).await {
        Ok(()) => Json(DeleteChargeResponse { success: true }).into_response(),
        Err(err) => respond_error(err.into()),
    }
}
