//! User-facing progress operations over a persistence seam.
//!
//! The boundary (HTTP handlers, jobs) talks to [`ProgressService`]; the
//! service loads records through [`ProgressStore`], runs the pure core from
//! `emmaus-progress`, and writes back with a position precondition so two
//! concurrent completions for the same user can never both advance.

pub mod error;
pub mod memory;
pub mod service;
pub mod store;

pub use error::ServiceError;
pub use memory::MemoryProgressStore;
pub use service::{CompletionOutcome, ProgressService};
pub use store::{ProgressStore, StoreError};
