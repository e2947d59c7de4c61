use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::postings::core::posting::Origin;
use crate::modules::postings::use_cases::post_charge::command::PostCharge;
use crate::modules::postings::use_cases::post_charge::handler::OriginResult;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PostChargeBody {
    pub origins: Vec<Origin>,
}

#[derive(Serialize)]
pub struct PostChargeResponse {
    pub success: bool,
    pub results: Vec<OriginResult>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<PostChargeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.origins.is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    let command = PostCharge {
        charge_id: id,
        origins: body.origins,
    };
    match state.post_charge.handle(command).await {
        Ok(results) => Json(PostChargeResponse {
            success: true,
            results,
        })
        .into_response(),
        Err(err) => respond_error(err),
    }
}
