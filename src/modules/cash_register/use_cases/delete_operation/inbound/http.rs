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
pub struct DeleteOperationResponse {
    pub success: bool,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.register.delete(id).await {
        Ok(()) => Json(DeleteOperationResponse { success: true }).into_response(),
        Err(err) => respond_error(err.into()),
    }
}
