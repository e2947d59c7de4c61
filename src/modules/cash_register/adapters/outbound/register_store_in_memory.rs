// In memory implementation of the RegisterStore port.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::cash_register::adapters::outbound::register_store::{
    RegisterStore, RegisterStoreError,
};
use crate::modules::cash_register::core::operation::CashOperation;

#[derive(Default)]
pub struct InMemoryRegisterStore {
    rows: RwLock<Vec<CashOperation>>,
    offline: bool,
}

impl InMemoryRegisterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), RegisterStoreError> {
        if self.offline {
            return Err(RegisterStoreError::Backend("Register store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RegisterStore for InMemoryRegisterStore {
    async fn list(&self) -> Result<Vec<CashOperation>, RegisterStoreError> {
        self.check_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<CashOperation, RegisterStoreError> {
        self.check_online()?;
        let rows = self.rows.read().await;
        rows.iter()
            .find(|op| op.id == id)
            .cloned()
            .ok_or(RegisterStoreError::NotFound(id))
    }

    async fn insert(&self, operation: CashOperation) -> Result<(), RegisterStoreError> {
        self.check_online()?;
        self.rows.write().await.push(operation);
        Ok(())
    }

    async fn update(&self, operation: CashOperation) -> Result<(), RegisterStoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|row| row.id == operation.id)
            .ok_or(RegisterStoreError::NotFound(operation.id))?;
        *slot = operation;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RegisterStoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RegisterStoreError::NotFound(id))?;
        rows.remove(position);
        Ok(())
    }
}
