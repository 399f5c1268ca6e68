use async_trait::async_trait;
use emmaus_types::{Position, ProgressRecord};

/// Errors produced by progress stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no record stored for user {user_id}")]
    Missing { user_id: String },
    #[error("record for user {user_id} already exists")]
    AlreadyExists { user_id: String },
    #[error("stored position for user {user_id} no longer matches the precondition")]
    PositionChanged { user_id: String },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Interface for progress record persistence.
///
/// One record per user, keyed by the opaque user id issued at the auth
/// boundary. Atomicity lives here, not in the core: `update_if_position` is
/// a single-record conditional write (compare the stored current position,
/// then swap), so at most one advancement applies per logical call even when
/// two completions race.
///
/// # Implementations
///
/// - [`MemoryProgressStore`](crate::memory::MemoryProgressStore): in-memory
///   reference implementation for tests and single-process embeddings.
/// - Database-backed stores belong to the deployment, e.g. a document store
///   conditional update keyed on the current position.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Fetch the record for `user_id`, or `None` if the user has never
    /// touched the program.
    async fn get(&self, user_id: &str) -> Result<Option<ProgressRecord>, StoreError>;

    /// Insert a brand-new record.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if one is present; callers
    /// handling first-touch races fall back to `get`.
    async fn create(&self, record: ProgressRecord) -> Result<ProgressRecord, StoreError>;

    /// Replace the stored record, but only while its current position still
    /// equals `expected`.
    ///
    /// Fails with [`StoreError::PositionChanged`] when the precondition does
    /// not hold and [`StoreError::Missing`] when the record is gone.
    async fn update_if_position(
        &self,
        record: ProgressRecord,
        expected: Position,
    ) -> Result<ProgressRecord, StoreError>;
}
