// Posting state machine, one cell per (charge, origin).
//
// Unposted -> Posted is the only transition and Posted is terminal;
// deleting the downstream record is an external fact that shows up on
// the next reconstruction, not a transition here. `begin` flips the
// cell optimistically so a second invocation racing the first sees
// Posted before the store write resolves; `revert` undoes the flip when
// that write fails.

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::postings::core::posting::Origin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingStatus {
    Unposted,
    Posted,
}

#[derive(Default)]
pub struct PostingTracker {
    states: RwLock<HashMap<(Uuid, Origin), PostingStatus>>,
}

impl PostingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn status(&self, charge_id: Uuid, origin: Origin) -> PostingStatus {
        self.states
            .read()
            .await
            .get(&(charge_id, origin))
            .copied()
            .unwrap_or(PostingStatus::Unposted)
    }

    /// Optimistically claims the transition. Returns false when the
    /// cell is already Posted; the caller must then skip the write.
    pub async fn begin(&self, charge_id: Uuid, origin: Origin) -> bool {
        let mut states = self.states.write().await;
        let current = states.get(&(charge_id, origin)).copied();
        match current {
            Some(PostingStatus::Posted) => false,
            _ => {
                states.insert((charge_id, origin), PostingStatus::Posted);
                true
            }
        }
    }

    /// Undoes an optimistic claim after a failed downstream write.
    pub async fn revert(&self, charge_id: Uuid, origin: Origin) {
        self.states
            .write()
            .await
            .insert((charge_id, origin), PostingStatus::Unposted);
    }

    /// Loads reconstructed state, e.g. after querying the expense store.
    pub async fn seed<I>(&self, posted: I)
    where
        I: IntoIterator<Item = (Uuid, Origin)>,
    {
        let mut states = self.states.write().await;
        for key in posted {
            states.insert(key, PostingStatus::Posted);
        }
    }
}
