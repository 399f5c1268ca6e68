//! Progress-gating and position-advancement core.
//!
//! Pure over [`emmaus_types`]: no clock, no store, no I/O. The service crate
//! wires these functions to persistence and hands them the current time.
//!
//! - [`gate`]: which scheduled content a user may currently see.
//! - [`advance`]: the completion state machine that moves the position.
//! - [`checks`]: batch invariant diagnostics over persisted records.
//! - [`projection`]: the UI-facing read model.

pub mod advance;
pub mod checks;
pub mod gate;
pub mod projection;

pub use advance::{AdvanceError, Advancement, complete_devotional};
pub use checks::{RecordViolation, validate_record};
pub use gate::{Scheduled, filter_accessible, is_accessible};
pub use projection::{ProgressSnapshot, WeekSummary};
