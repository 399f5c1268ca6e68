//! Position advancement: the completion state machine.
//!
//! One state per grid slot, with [`Position::next`] as the transition
//! function and (5,7) absorbing. A completion request must name the current
//! position exactly; anything ahead or behind is rejected with the
//! authoritative position attached so the client can resynchronize.

use chrono::{DateTime, Utc};
use emmaus_types::{DAYS_PER_WEEK, DevotionalCatalog, Position, ProgressRecord};

/// Outcome of a successful completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advancement {
    /// Id of the devotional that was just completed.
    pub devotional_id: u8,
    /// Slot that was completed.
    pub previous: Position,
    /// New current position. Equals `previous` only in the terminal state.
    pub next: Position,
}

/// Expected, user-facing advancement failures.
///
/// Both are recoverable client conditions: correct the request and resubmit.
/// Neither mutates the record, and neither should be collapsed into a
/// generic server failure at the boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    /// Requested slot does not exist in the devotional collection.
    #[error("no devotional is scheduled for week {week} day {day}")]
    UnknownDevotional { week: u8, day: u8 },
    /// Requested slot is not the user's current position.
    #[error("can only complete the current devotional ({current})")]
    OutOfSequence {
        requested: Position,
        current: Position,
    },
}

/// Validate a completion request against `record` and apply it.
///
/// Contract:
/// 1. `(week, day)` must name a catalog entry, else
///    [`AdvanceError::UnknownDevotional`]. Off-grid values fail the same way;
///    to the client they are equally nonexistent content.
/// 2. The requested slot must equal `record.position` exactly, else
///    [`AdvanceError::OutOfSequence`] carrying the current position.
///    Re-submitting an already-passed day is rejected the same way; there is
///    no no-op success path once the position has advanced.
/// 3. On success the record mutates in one step: week counter bumped (capped
///    at 7), id inserted (set membership, so idempotent), position moved to
///    its successor, `last_accessed_at` set to `now`.
///
/// The record is untouched whenever an error is returned. In the terminal
/// state (5,7 completed) the position no longer moves, so a repeat completion
/// of (5,7) validates and re-applies as a no-op apart from the access
/// timestamp.
pub fn complete_devotional(
    record: &mut ProgressRecord,
    week: u8,
    day: u8,
    catalog: &DevotionalCatalog,
    now: DateTime<Utc>,
) -> Result<Advancement, AdvanceError> {
    let requested =
        Position::new(week, day).map_err(|_| AdvanceError::UnknownDevotional { week, day })?;
    if !catalog.contains(requested) {
        return Err(AdvanceError::UnknownDevotional { week, day });
    }
    if requested != record.position {
        return Err(AdvanceError::OutOfSequence {
            requested,
            current: record.position,
        });
    }

    let devotional_id = requested.devotional_id();
    let next = record.position.next();

    let count = &mut record.week_completed[(week - 1) as usize];
    *count = (*count + 1).min(DAYS_PER_WEEK);
    record.completed_ids.insert(devotional_id);
    record.position = next;
    record.last_accessed_at = now;

    Ok(Advancement {
        devotional_id,
        previous: requested,
        next,
    })
}
