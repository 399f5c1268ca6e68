use crate::store::StoreError;
use emmaus_progress::AdvanceError;

/// Service-level failures surfaced to the boundary.
///
/// `Advance` variants are expected client conditions and must be translated
/// into distinct client-facing responses; an out-of-sequence rejection
/// carries the authoritative position the client should resynchronize to.
/// `Store` wraps backend faults the client cannot act on.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No progress record exists for the user. Lazy creation belongs to
    /// `get_or_create`, not the completion path.
    #[error("no progress record for user {user_id}")]
    RecordNotFound { user_id: String },
    /// Rejection from the advancement state machine.
    #[error(transparent)]
    Advance(#[from] AdvanceError),
    /// The record changed between read and conditional write.
    #[error("progress for user {user_id} was modified concurrently")]
    Conflict { user_id: String },
    /// Store backend failure.
    #[error("progress store failure")]
    Store(#[source] StoreError),
}
