// In memory implementation of the ExpenseStore port.
//
// Responsibilities
// - Store postings in memory for tests and local development.
// - Enforce the (charge_id, origin) uniqueness that a durable store
//   would enforce with a unique index.

use std::collections::HashSet;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::postings::adapters::outbound::expense_store::{ExpenseStore, ExpenseStoreError};
use crate::modules::postings::core::posting::{ExpensePosting, Origin};

#[derive(Default)]
pub struct InMemoryExpenseStore {
    rows: Mutex<Vec<ExpensePosting>>,
    seen: Mutex<HashSet<(Uuid, Origin)>>,
    offline: bool,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Seeds a historical posting as-is, bypassing creation-time checks.
    pub async fn seed(&self, posting: ExpensePosting) {
        if let (Some(charge_id), origin) = (posting.charge_id, posting.origin) {
            self.seen.lock().await.insert((charge_id, origin));
        }
        self.rows.lock().await.push(posting);
    }

    pub async fn all(&self) -> Vec<ExpensePosting> {
        self.rows.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn create(&self, posting: ExpensePosting) -> Result<(), ExpenseStoreError> {
        if self.offline {
            return Err(ExpenseStoreError::Backend("Expense store offline".into()));
        }
        if let Some(charge_id) = posting.charge_id {
            let key = (charge_id, posting.origin);
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(ExpenseStoreError::Duplicate {
                    charge_id,
                    origin: posting.origin,
                });
            }
        }
        self.rows.lock().await.push(posting);
        Ok(())
    }

    async fn linked_to(&self, charge_id: Uuid) -> Result<Vec<ExpensePosting>, ExpenseStoreError> {
        if self.offline {
            return Err(ExpenseStoreError::Backend("Expense store offline".into()));
        }
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|posting| posting.charge_id == Some(charge_id))
            .cloned()
            .collect())
    }

    async fn unlinked(&self) -> Result<Vec<ExpensePosting>, ExpenseStoreError> {
        if self.offline {
            return Err(ExpenseStoreError::Backend("Expense store offline".into()));
        }
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|posting| posting.charge_id.is_none())
            .cloned()
            .collect())
    }
}
