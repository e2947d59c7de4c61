// Read port over the client records. Client CRUD lives elsewhere; the
// ledger only needs the display name, which becomes the beneficiary of
// expense postings.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::core::errors::LedgerError;

#[derive(Debug, Error)]
pub enum ClientDirectoryError {
    #[error("client {0} not found")]
    NotFound(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<ClientDirectoryError> for LedgerError {
    fn from(err: ClientDirectoryError) -> Self {
        match err {
            ClientDirectoryError::NotFound(id) => LedgerError::NotFound(format!("client {id}")),
            ClientDirectoryError::Backend(message) => LedgerError::NetworkFailure(message),
        }
    }
}

#[async_trait]
pub trait ClientDirectory: Send + Sync {
    async fn name_of(&self, client_id: Uuid) -> Result<String, ClientDirectoryError>;
}

#[derive(Default)]
pub struct InMemoryClientDirectory {
    names: RwLock<HashMap<Uuid, String>>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, client_id: Uuid, name: impl Into<String>) {
        self.names.write().await.insert(client_id, name.into());
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn name_of(&self, client_id: Uuid) -> Result<String, ClientDirectoryError> {
        self.names
            .read()
            .await
            .get(&client_id)
            .cloned()
            .ok_or(ClientDirectoryError::NotFound(client_id))
    }
}
