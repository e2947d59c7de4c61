// In memory implementation of the ChargeStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Keep charges in insertion order, the order the balance fold uses as
//   its same-month tie-break.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::charges::adapters::outbound::charge_store::{ChargeStore, ChargeStoreError};
use crate::modules::charges::core::charge::Charge;

#[derive(Default)]
pub struct InMemoryChargeStore {
    rows: RwLock<Vec<Charge>>,
    offline: bool,
}

impl InMemoryChargeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), ChargeStoreError> {
        if self.offline {
            return Err(ChargeStoreError::Backend("Charge store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ChargeStore for InMemoryChargeStore {
    async fn list(&self, client_id: Uuid, year: Option<i32>) -> Result<Vec<Charge>, ChargeStoreError> {
        self.check_online()?;
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|charge| charge.client_id == client_id)
            .filter(|charge| year.is_none_or(|y| charge.year() == y))
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Charge, ChargeStoreError> {
        self.check_online()?;
        let rows = self.rows.read().await;
        rows.iter()
            .find(|charge| charge.id == id)
            .cloned()
            .ok_or(ChargeStoreError::NotFound(id))
    }

    async fn insert(&self, charge: Charge) -> Result<(), ChargeStoreError> {
        self.check_online()?;
        self.rows.write().await.push(charge);
        Ok(())
    }

    async fn update(&self, charge: Charge) -> Result<(), ChargeStoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|row| row.id == charge.id)
            .ok_or(ChargeStoreError::NotFound(charge.id))?;
        *slot = charge;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ChargeStoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(ChargeStoreError::NotFound(id))?;
        rows.remove(position);
        Ok(())
    }

    async fn set_withdrawal_processed(&self, id: Uuid, processed: bool) -> Result<(), ChargeStoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(ChargeStoreError::NotFound(id))?;
        slot.cash_withdrawal_processed = processed;
        Ok(())
    }
}
