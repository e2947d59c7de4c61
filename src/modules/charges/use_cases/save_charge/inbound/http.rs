use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::charges::core::charge::Charge;
use crate::modules::charges::use_cases::save_charge::command::SaveCharge;
use crate::shell::responses::respond_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SaveChargeBody {
    pub client_id: Uuid,
    pub date: NaiveDate,
    pub libelle: String,
    #[serde(default)]
    pub libelle_detail: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub avance: Decimal,
}

#[derive(Serialize)]
pub struct SaveChargeResponse {
    pub success: bool,
    pub charge: Charge,
}

impl SaveChargeBody {
    fn into_command(self) -> SaveCharge {
        SaveCharge {
            client_id: self.client_id,
            date: self.date,
            base_label: self.libelle,
            detail: self.libelle_detail,
            debit: self.montant,
            credit: self.avance,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SaveChargeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.save_charge.create(body.into_command()).await {
        Ok(charge) => (
            StatusCode::CREATED,
            Json(SaveChargeResponse {
                success: true,
                charge,
            }),
        )
            .into_response(),
        Err(err) => respond_error(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<SaveChargeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.save_charge.update(id, body.into_command()).await {
        Ok(charge) => Json(SaveChargeResponse {
            success: true,
            charge,
        })
        .into_response(),
        Err(err) => respond_error(err),
    }
}
