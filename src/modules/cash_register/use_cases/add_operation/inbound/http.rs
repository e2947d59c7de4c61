use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::cash_register::core::operation::{CashOperation, OperationKind, OperationSign};
use crate::modules::cash_register::use_cases::add_operation::handler::AddOperation;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddOperationBody {
    pub type_operation: OperationKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant: Decimal,
    #[serde(default)]
    pub operation_sign: Option<OperationSign>,
    #[serde(default)]
    pub commentaire: String,
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub charge_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AddOperationResponse {
    pub success: bool,
    pub operation: CashOperation,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddOperationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = AddOperation {
        kind: body.type_operation,
        sign: body.operation_sign,
        amount: body.montant,
        comment: body.commentaire,
        client_id: body.client_id,
        charge_id: body.charge_id,
    };
    match state.add_operation.handle(command).await {
        Ok(operation) => (
            StatusCode::CREATED,
            Json(AddOperationResponse {
                success: true,
                operation,
            }),
        )
            .into_response(),
        Err(err) => respond_error(err),
    }
}
