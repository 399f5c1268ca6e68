pub mod catalog;
pub mod cohort;
pub mod error;
pub mod position;
pub mod record;
pub mod roman;

pub use catalog::{Devotional, DevotionalCatalog};
pub use cohort::Cohort;
pub use error::DomainError;
pub use position::{DAYS_PER_WEEK, Position, TOTAL_DEVOTIONALS, WEEKS};
pub use record::ProgressRecord;
pub use roman::to_roman;
