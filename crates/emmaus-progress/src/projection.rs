//! UI-facing read model.
//!
//! Derived from a record plus the catalog; produced, never parsed, so the
//! types are `Serialize` only.

use chrono::{DateTime, Utc};
use emmaus_types::{DAYS_PER_WEEK, DevotionalCatalog, ProgressRecord, TOTAL_DEVOTIONALS, WEEKS};
use serde::Serialize;

/// Completion summary for one week of the program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub week: u8,
    pub completed: u8,
    pub total: u8,
}

/// Formatted progress projection consumed by the UI.
///
/// Titles come from the catalog; a slot missing from the collection projects
/// as `None` rather than failing the whole snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub user_id: String,
    pub week: u8,
    pub day: u8,
    pub current_title: Option<String>,
    pub cohort_number: u32,
    pub cohort_numeral: String,
    pub weeks: Vec<WeekSummary>,
    pub total_completed: u8,
    pub total_devotionals: u8,
    pub percent_complete: u8,
    pub program_complete: bool,
    pub started_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl ProgressSnapshot {
    /// Build the projection in one pass over the record.
    pub fn build(record: &ProgressRecord, catalog: &DevotionalCatalog) -> Self {
        let weeks = (1..=WEEKS)
            .map(|week| WeekSummary {
                week,
                completed: record.completed_in_week(week),
                total: DAYS_PER_WEEK,
            })
            .collect();
        let total_completed = record.total_completed() as u8;
        let percent_complete =
            (f64::from(total_completed) / f64::from(TOTAL_DEVOTIONALS) * 100.0).round() as u8;

        Self {
            user_id: record.user_id.clone(),
            week: record.position.week(),
            day: record.position.day(),
            current_title: catalog.title_of(record.position).map(str::to_owned),
            cohort_number: record.cohort.number(),
            cohort_numeral: record.cohort.numeral().to_owned(),
            weeks,
            total_completed,
            total_devotionals: TOTAL_DEVOTIONALS,
            percent_complete,
            program_complete: record.is_program_complete(),
            started_at: record.started_at,
            last_accessed_at: record.last_accessed_at,
        }
    }
}
