use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::postings::use_cases::withdraw_from_register::handler::WithdrawOutcome;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct WithdrawResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: WithdrawOutcome,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.withdraw.handle(id).await {
        Ok(outcome) => Json(WithdrawResponse {
            success: true,
            outcome,
        })
        .into_response(),
        Err(err) => respond_error(err),
    }
}

#[cfg(test)]
mod withdraw_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::charges::adapters::outbound::charge_store::ChargeStore;
    use crate::modules::charges::adapters::outbound::charge_store_in_memory::InMemoryChargeStore;
    use crate::modules::charges::adapters::outbound::client_directory::InMemoryClientDirectory;
    use crate::modules::cash_register::adapters::outbound::register_store::RegisterStore;
    use crate::modules::cash_register::adapters::outbound::register_store_in_memory::InMemoryRegisterStore;
    use crate::modules::postings::adapters::outbound::expense_store_in_memory::InMemoryExpenseStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::charges::{ChargeBuilder, amt};

    async fn seeded_app() -> (Router, Arc<InMemoryRegisterStore>, uuid::Uuid) {
        let charges = Arc::new(InMemoryChargeStore::new());
        let clients = Arc::new(InMemoryClientDirectory::new());
        let register = Arc::new(InMemoryRegisterStore::new());
        let charge = ChargeBuilder::new().label("CNSS").debit(amt("120.000")).build();
        charges.insert(charge.clone()).await.expect("seed");
        clients.register(charge.client_id, "Slim Trading").await;
        let state = AppState::wire(
            charges,
            clients,
            Arc::new(InMemoryExpenseStore::new()),
            register.clone(),
        );
        let app = Router::new()
            .route("/withdraw-charge/{id}", post(super::handle))
            .with_state(state);
        (app, register, charge.id)
    }

    #[tokio::test]
    async fn it_should_withdraw_once_then_report_already_processed() {
        let (app, register, charge_id) = seeded_app().await;
        let uri = format!("/withdraw-charge/{charge_id}");

        let first = app
            .clone()
            .oneshot(Request::post(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let bytes = first.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["outcome"], "withdrawn");
        assert!(json.get("operation_id").is_some());

        let second = app
            .oneshot(Request::post(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::OK);
        let bytes = second.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["outcome"], "already_processed");
        assert_eq!(register.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_charge() {
        let (app, _, _) = seeded_app().await;
        let response = app
            .oneshot(
                Request::post("/withdraw-charge/018f2f8e-0000-7000-8000-00000000dead")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
