use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::cash_register::core::operation::{CashOperation, OperationKind, OperationSign};
use crate::modules::cash_register::use_cases::update_operation::handler::UpdateOperation;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateOperationBody {
    #[serde(default)]
    pub type_operation: Option<OperationKind>,
    #[serde(default)]
    pub montant: Option<f64>,
    #[serde(default)]
    pub operation_sign: Option<OperationSign>,
    #[serde(default)]
    pub commentaire: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateOperationResponse {
    pub success: bool,
    pub operation: CashOperation,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateOperationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let amount = match body.montant.map(Decimal::try_from).transpose() {
        Ok(amount) => amount,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let fields = UpdateOperation {
        kind: body.type_operation,
        sign: body.operation_sign,
        amount,
        comment: body.commentaire,
    };
    match state.update_operation.handle(id, fields).await {
        Ok(operation) => Json(UpdateOperationResponse {
            success: true,
            operation,
        })
        .into_response(),
        Err(err) => respond_error(err),
    }
}

#[cfg(test)]
mod update_operation_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::cash_register::adapters::outbound::register_store::RegisterStore;
    use crate::modules::cash_register::adapters::outbound::register_store_in_memory::InMemoryRegisterStore;
    use crate::modules::cash_register::core::operation::OperationKind;
    use crate::modules::charges::adapters::outbound::charge_store_in_memory::InMemoryChargeStore;
    use crate::modules::charges::adapters::outbound::client_directory::InMemoryClientDirectory;
    use crate::modules::postings::adapters::outbound::expense_store_in_memory::InMemoryExpenseStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::operations::{CashOperationBuilder, amt};

    #[tokio::test]
    async fn it_should_update_the_amount_and_comment() {
        let register = Arc::new(InMemoryRegisterStore::new());
        let operation = CashOperationBuilder::new()
            .kind(OperationKind::Deposit)
            .amount(amt("100.000"))
            .build();
        register.insert(operation.clone()).await.expect("seed");
        let state = AppState::wire(
            Arc::new(InMemoryChargeStore::new()),
            Arc::new(InMemoryClientDirectory::new()),
            Arc::new(InMemoryExpenseStore::new()),
            register.clone(),
        );

        let app = Router::new()
            .route("/update-cash-operation/{id}", put(super::handle))
            .with_state(state);
        let uri = format!("/update-cash-operation/{}", operation.id);
        let response = app
            .oneshot(
                Request::put(uri.as_str())
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"montant":130.0,"commentaire":"corrigé"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["operation"]["montant"], serde_json::json!(130.0));
        assert_eq!(json["operation"]["commentaire"], "corrigé");
        assert_eq!(
            register.get(operation.id).await.expect("get").amount,
            amt("130.000")
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_operation() {
        let app = Router::new()
            .route("/update-cash-operation/{id}", put(super::handle))
            .with_state(AppState::in_memory());
        let response = app
            .oneshot(
                Request::put("/update-cash-operation/018f2f8e-0000-7000-8000-00000000dead")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
