use crate::store::{ProgressStore, StoreError};
use async_trait::async_trait;
use emmaus_types::{Position, ProgressRecord};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`ProgressStore`] for tests and single-process embeddings.
///
/// The conditional update holds the write lock across compare and swap,
/// the same atomicity the trait contract asks a real backend to provide via
/// a conditional single-record update.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    records: RwLock<HashMap<String, ProgressRecord>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn get(&self, user_id: &str) -> Result<Option<ProgressRecord>, StoreError> {
        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn create(&self, record: ProgressRecord) -> Result<ProgressRecord, StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.user_id) {
            return Err(StoreError::AlreadyExists {
                user_id: record.user_id.clone(),
            });
        }
        records.insert(record.user_id.clone(), record.clone());
        Ok(record)
    }

    async fn update_if_position(
        &self,
        record: ProgressRecord,
        expected: Position,
    ) -> Result<ProgressRecord, StoreError> {
        let mut records = self.records.write().await;
        let stored = records
            .get_mut(&record.user_id)
            .ok_or_else(|| StoreError::Missing {
                user_id: record.user_id.clone(),
            })?;
        if stored.position != expected {
            return Err(StoreError::PositionChanged {
                user_id: record.user_id.clone(),
            });
        }
        *stored = record.clone();
        Ok(record)
    }
}
