use crate::error::ServiceError;
use crate::store::{ProgressStore, StoreError};
use chrono::Utc;
use emmaus_progress::{ProgressSnapshot, advance, filter_accessible};
use emmaus_types::{Cohort, Devotional, DevotionalCatalog, Position, ProgressRecord};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of a successful completion, shaped for the boundary: the refreshed
/// projection plus what to show next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionOutcome {
    pub progress: ProgressSnapshot,
    pub next: Position,
}

/// Progress operations for one deployment: a store plus a catalog snapshot.
///
/// The catalog is loaded once by the boundary (the devotional collection
/// changes at publish time, not at request time) and consumed read-only.
/// Every write goes through the store's conditional update, keyed on the
/// position the operation started from.
pub struct ProgressService<S> {
    store: S,
    catalog: DevotionalCatalog,
}

impl<S: ProgressStore> ProgressService<S> {
    pub fn new(store: S, catalog: DevotionalCatalog) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &DevotionalCatalog {
        &self.catalog
    }

    /// Fetch the user's record, creating it at (1,1) on first touch.
    ///
    /// Two concurrent first touches race on `create`; the loser falls back
    /// to the record the winner wrote.
    pub async fn get_or_create(
        &self,
        user_id: &str,
        cohort: Cohort,
    ) -> Result<ProgressRecord, ServiceError> {
        if let Some(record) = self.store.get(user_id).await.map_err(ServiceError::Store)? {
            return Ok(record);
        }

        let fresh = ProgressRecord::new(user_id, cohort, Utc::now());
        match self.store.create(fresh).await {
            Ok(record) => {
                info!(user_id, "created initial progress record");
                Ok(record)
            }
            Err(StoreError::AlreadyExists { .. }) => self
                .store
                .get(user_id)
                .await
                .map_err(ServiceError::Store)?
                .ok_or_else(|| ServiceError::RecordNotFound {
                    user_id: user_id.to_owned(),
                }),
            Err(err) => Err(ServiceError::Store(err)),
        }
    }

    /// Mark the user's current devotional complete and advance their position.
    ///
    /// The write is conditional on the position the record was read at, so a
    /// racing completion for the same user surfaces as
    /// [`ServiceError::Conflict`] instead of a double advancement.
    pub async fn complete_devotional(
        &self,
        user_id: &str,
        week: u8,
        day: u8,
    ) -> Result<CompletionOutcome, ServiceError> {
        let Some(mut record) = self.store.get(user_id).await.map_err(ServiceError::Store)? else {
            return Err(ServiceError::RecordNotFound {
                user_id: user_id.to_owned(),
            });
        };

        let read_position = record.position;
        let advancement =
            match advance::complete_devotional(&mut record, week, day, &self.catalog, Utc::now()) {
                Ok(advancement) => advancement,
                Err(err) => {
                    debug!(user_id, %err, "completion rejected");
                    return Err(ServiceError::Advance(err));
                }
            };

        let record = self
            .write_back(record, read_position)
            .await?;

        info!(
            user_id,
            completed = advancement.devotional_id,
            next = %advancement.next,
            "devotional completed"
        );
        Ok(CompletionOutcome {
            progress: ProgressSnapshot::build(&record, &self.catalog),
            next: advancement.next,
        })
    }

    /// Reset position, counters, and completions; identity and cohort stay.
    pub async fn reset(&self, user_id: &str) -> Result<ProgressSnapshot, ServiceError> {
        let Some(mut record) = self.store.get(user_id).await.map_err(ServiceError::Store)? else {
            return Err(ServiceError::RecordNotFound {
                user_id: user_id.to_owned(),
            });
        };

        let read_position = record.position;
        record.reset(Utc::now());
        let record = self.write_back(record, read_position).await?;

        info!(user_id, "progress reset");
        Ok(ProgressSnapshot::build(&record, &self.catalog))
    }

    /// Current projection for the UI.
    pub async fn snapshot(&self, user_id: &str) -> Result<ProgressSnapshot, ServiceError> {
        let Some(record) = self.store.get(user_id).await.map_err(ServiceError::Store)? else {
            return Err(ServiceError::RecordNotFound {
                user_id: user_id.to_owned(),
            });
        };
        Ok(ProgressSnapshot::build(&record, &self.catalog))
    }

    /// Catalog entries visible at the user's current position, program order.
    pub async fn accessible_devotionals(
        &self,
        user_id: &str,
    ) -> Result<Vec<Devotional>, ServiceError> {
        let Some(record) = self.store.get(user_id).await.map_err(ServiceError::Store)? else {
            return Err(ServiceError::RecordNotFound {
                user_id: user_id.to_owned(),
            });
        };
        let items: Vec<Devotional> = self.catalog.iter().cloned().collect();
        Ok(filter_accessible(items, Some(record.position)))
    }

    async fn write_back(
        &self,
        record: ProgressRecord,
        expected: Position,
    ) -> Result<ProgressRecord, ServiceError> {
        let user_id = record.user_id.clone();
        match self.store.update_if_position(record, expected).await {
            Ok(record) => Ok(record),
            Err(StoreError::PositionChanged { .. }) => {
                warn!(%user_id, "concurrent progress write detected");
                Err(ServiceError::Conflict { user_id })
            }
            Err(StoreError::Missing { .. }) => Err(ServiceError::RecordNotFound { user_id }),
            Err(err) => Err(ServiceError::Store(err)),
        }
    }
}
