use crate::cohort::Cohort;
use crate::position::{Position, TOTAL_DEVOTIONALS, WEEKS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-user progress through the curriculum. Persistence-level struct.
///
/// `position` is the next devotional the user has not yet completed.
/// `week_completed[w-1]` counts completed days within week `w`, capped at 7.
/// `completed_ids` is membership-only; insertion order is irrelevant.
///
/// Created lazily at the service boundary on first access and mutated only
/// through advancement or an explicit reset. Deletion is an administrative
/// concern outside this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub user_id: String,
    pub position: Position,
    pub week_completed: [u8; WEEKS as usize],
    pub completed_ids: BTreeSet<u8>,
    pub cohort: Cohort,
    pub started_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl ProgressRecord {
    /// Fresh record at (1,1) with nothing completed.
    pub fn new(user_id: impl Into<String>, cohort: Cohort, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            position: Position::first(),
            week_completed: [0; WEEKS as usize],
            completed_ids: BTreeSet::new(),
            cohort,
            started_at: now,
            last_accessed_at: now,
        }
    }

    /// Reinitialize position, counters, and the completed set.
    ///
    /// Identity and cohort survive a reset; both timestamps restart at `now`.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.position = Position::first();
        self.week_completed = [0; WEEKS as usize];
        self.completed_ids.clear();
        self.started_at = now;
        self.last_accessed_at = now;
    }

    pub fn total_completed(&self) -> usize {
        self.completed_ids.len()
    }

    /// Completed days within `week`, or 0 for a week off the schedule.
    pub fn completed_in_week(&self, week: u8) -> u8 {
        if (1..=WEEKS).contains(&week) {
            self.week_completed[(week - 1) as usize]
        } else {
            0
        }
    }

    /// True once the final devotional has been completed.
    ///
    /// The position alone is not enough: a user sitting at (5,7) has not
    /// finished until id 35 is in the completed set.
    pub fn is_program_complete(&self) -> bool {
        self.position.is_final() && self.completed_ids.contains(&TOTAL_DEVOTIONALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn now() -> DateTime<Utc> {
        "2024-03-01T09:00:00Z".parse().unwrap()
    }

    fn record() -> ProgressRecord {
        ProgressRecord::new("user-1", Cohort::new(3), now())
    }

    #[test]
    fn fresh_record_starts_at_the_first_slot() {
        let record = record();
        assert_eq!(record.position, Position::first());
        assert_eq!(record.week_completed, [0; WEEKS as usize]);
        assert!(record.completed_ids.is_empty());
        assert_eq!(record.started_at, record.last_accessed_at);
        assert!(!record.is_program_complete());
    }

    #[test]
    fn reset_preserves_identity_and_cohort() {
        let mut record = record();
        record.position = Position::new(3, 4).unwrap();
        record.week_completed = [7, 7, 3, 0, 0];
        record.completed_ids = (1..=17).collect();

        let later: DateTime<Utc> = "2024-05-01T12:00:00Z".parse().unwrap();
        record.reset(later);

        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.cohort, Cohort::new(3));
        assert_eq!(record.position, Position::first());
        assert_eq!(record.week_completed, [0; WEEKS as usize]);
        assert!(record.completed_ids.is_empty());
        assert_eq!(record.started_at, later);
        assert_eq!(record.last_accessed_at, later);
    }

    #[test]
    fn program_complete_requires_the_final_id() {
        let mut record = record();
        record.position = Position::last();
        assert!(!record.is_program_complete());

        record.completed_ids = (1..=TOTAL_DEVOTIONALS).collect();
        assert!(record.is_program_complete());
    }

    #[test]
    fn completed_in_week_is_zero_off_the_schedule() {
        let mut record = record();
        record.week_completed = [7, 4, 0, 0, 0];
        assert_eq!(record.completed_in_week(1), 7);
        assert_eq!(record.completed_in_week(2), 4);
        assert_eq!(record.completed_in_week(0), 0);
        assert_eq!(record.completed_in_week(6), 0);
    }

    #[test]
    fn survives_a_storage_round_trip() {
        let mut record = record();
        record.completed_ids = [1, 2, 3].into_iter().collect();
        record.week_completed = [3, 0, 0, 0, 0];
        record.position = Position::new(1, 4).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
