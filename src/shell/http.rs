use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::modules::cash_register::use_cases::add_operation::inbound::http as add_operation_http;
use crate::modules::cash_register::use_cases::delete_operation::inbound::http as delete_operation_http;
use crate::modules::cash_register::use_cases::list_operations::inbound::http as list_operations_http;
use crate::modules::cash_register::use_cases::update_operation::inbound::http as update_operation_http;
use crate::modules::charges::use_cases::charge_balances::inbound::http as charge_balances_http;
use crate::modules::charges::use_cases::delete_charge::inbound::http as delete_charge_http;
use crate::modules::charges::use_cases::list_charges::inbound::http as list_charges_http;
use crate::modules::charges::use_cases::save_charge::inbound::http as save_charge_http;
use crate::modules::postings::use_cases::load_posting_states::inbound::http as posting_states_http;
use crate::modules::postings::use_cases::post_charge::inbound::http as post_charge_http;
use crate::modules::postings::use_cases::withdraw_from_register::inbound::http as withdraw_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/list-charges", get(list_charges_http::handle))
        .route("/charge-balances", get(charge_balances_http::handle))
        .route("/create-charge", post(save_charge_http::create))
        .route("/update-charge/{id}", put(save_charge_http::update))
        .route("/delete-charge/{id}", delete(delete_charge_http::handle))
        .route("/charge-posting-states", get(posting_states_http::handle))
        .route("/post-charge/{id}", post(post_charge_http::handle))
        .route("/withdraw-charge/{id}", post(withdraw_http::handle))
        .route("/list-cash-operations", get(list_operations_http::handle))
        .route("/create-cash-operation", post(add_operation_http::handle))
        .route(
            "/update-cash-operation/{id}",
            put(update_operation_http::handle),
        )
        .route(
            "/delete-cash-operation/{id}",
            delete(delete_operation_http::handle),
        )
        .with_state(state)
}
