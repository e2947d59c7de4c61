use std::sync::Arc;

use crate::modules::cash_register::adapters::outbound::register_store::RegisterStore;
use crate::modules::cash_register::adapters::outbound::register_store_in_memory::InMemoryRegisterStore;
use crate::modules::cash_register::use_cases::add_operation::handler::AddOperationHandler;
use crate::modules::cash_register::use_cases::update_operation::handler::UpdateOperationHandler;
use crate::modules::charges::adapters::outbound::charge_store::ChargeStore;
use crate::modules::charges::adapters::outbound::charge_store_in_memory::InMemoryChargeStore;
use crate::modules::charges::adapters::outbound::client_directory::{
    ClientDirectory, InMemoryClientDirectory,
};
use crate::modules::charges::use_cases::save_charge::handler::SaveChargeHandler;
use crate::modules::postings::adapters::outbound::expense_store::ExpenseStore;
use crate::modules::postings::adapters::outbound::expense_store_in_memory::InMemoryExpenseStore;
use crate::modules::postings::core::tracker::PostingTracker;
use crate::modules::postings::use_cases::load_posting_states::handler::LoadPostingStatesHandler;
use crate::modules::postings::use_cases::post_charge::handler::PostChargeHandler;
use crate::modules::postings::use_cases::withdraw_from_register::handler::WithdrawFromRegisterHandler;

#[derive(Clone)]
pub struct AppState {
    pub charges: Arc<dyn ChargeStore>,
    pub register: Arc<dyn RegisterStore>,
    pub save_charge: Arc<SaveChargeHandler>,
    pub post_charge: Arc<PostChargeHandler>,
    pub posting_states: Arc<LoadPostingStatesHandler>,
    pub withdraw: Arc<WithdrawFromRegisterHandler>,
    pub add_operation: Arc<AddOperationHandler>,
    pub update_operation: Arc<UpdateOperationHandler>,
}

impl AppState {
    /// Wires the handlers over the given collaborators. The posting
    /// tracker is shared between the posting use cases so reconstructed
    /// state and optimistic claims see each other.
    pub fn wire(
        charges: Arc<dyn ChargeStore>,
        clients: Arc<dyn ClientDirectory>,
        expenses: Arc<dyn ExpenseStore>,
        register: Arc<dyn RegisterStore>,
    ) -> Self {
        let tracker = Arc::new(PostingTracker::new());
        Self {
            charges: charges.clone(),
            register: register.clone(),
            save_charge: Arc::new(SaveChargeHandler::new(charges.clone())),
            post_charge: Arc::new(PostChargeHandler::new(
                charges.clone(),
                clients.clone(),
                expenses.clone(),
                tracker.clone(),
            )),
            posting_states: Arc::new(LoadPostingStatesHandler::new(
                charges.clone(),
                clients.clone(),
                expenses,
                tracker,
            )),
            withdraw: Arc::new(WithdrawFromRegisterHandler::new(
                charges,
                clients,
                register.clone(),
            )),
            add_operation: Arc::new(AddOperationHandler::new(register.clone())),
            update_operation: Arc::new(UpdateOperationHandler::new(register)),
        }
    }

    /// Fully in-memory wiring for tests and local development.
    pub fn in_memory() -> Self {
        Self::wire(
            Arc::new(InMemoryChargeStore::new()),
            Arc::new(InMemoryClientDirectory::new()),
            Arc::new(InMemoryExpenseStore::new()),
            Arc::new(InMemoryRegisterStore::new()),
        )
    }
}
