//! Record invariant checking.
//!
//! Batch diagnostics over persisted progress records: one pass that collects
//! every violation instead of stopping at the first. Intended for recovery
//! and ops tooling -- records produced through the typed API cannot violate
//! R-1 or R-2, but records deserialized from storage can.
//!
//! Checks (R-1..R-4):
//! - R-1: per-week completion counters never exceed 7.
//! - R-2: completed ids stay within 1..=35.
//! - R-3: each week's counter agrees with the ids present for that week.
//! - R-4: no completed id sits at or beyond the current position; the
//!   current id itself is legal only in the completed-terminal state.

use emmaus_types::{DAYS_PER_WEEK, Position, ProgressRecord, TOTAL_DEVOTIONALS, WEEKS};
use std::fmt;

/// A specific record invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordViolation {
    /// R-1: a per-week counter exceeds the 7 scheduled days.
    WeekCountExceedsLimit { week: u8, count: u8 },
    /// R-2: a completed id falls outside 1..=35.
    IdOutOfRange { id: u8 },
    /// R-3: a week's counter disagrees with the completed ids for that week.
    WeekCountMismatch { week: u8, recorded: u8, counted: u8 },
    /// R-4: a completed id is at or beyond the current position.
    CompletedAheadOfPosition { id: u8, position: Position },
}

impl fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeekCountExceedsLimit { week, count } => {
                write!(f, "R-1: week {week} counter {count} exceeds 7")
            }
            Self::IdOutOfRange { id } => {
                write!(f, "R-2: completed id {id} outside 1..=35")
            }
            Self::WeekCountMismatch {
                week,
                recorded,
                counted,
            } => write!(
                f,
                "R-3: week {week} counter {recorded} disagrees with {counted} completed ids"
            ),
            Self::CompletedAheadOfPosition { id, position } => {
                write!(f, "R-4: completed id {id} at or beyond position {position}")
            }
        }
    }
}

/// Collect every invariant violation present in `record`.
///
/// All checks run regardless of earlier failures so a corrupt record surfaces
/// its independent problems in a single pass. An empty vec means the record
/// is internally consistent.
pub fn validate_record(record: &ProgressRecord) -> Vec<RecordViolation> {
    let mut violations = Vec::new();

    for week in 1..=WEEKS {
        let recorded = record.week_completed[(week - 1) as usize];
        if recorded > DAYS_PER_WEEK {
            violations.push(RecordViolation::WeekCountExceedsLimit {
                week,
                count: recorded,
            });
        }

        let first = (week - 1) * DAYS_PER_WEEK + 1;
        let last = week * DAYS_PER_WEEK;
        let counted = record
            .completed_ids
            .iter()
            .copied()
            .filter(|id| (first..=last).contains(id))
            .count() as u8;
        if recorded != counted {
            violations.push(RecordViolation::WeekCountMismatch {
                week,
                recorded,
                counted,
            });
        }
    }

    let current = record.position.devotional_id();
    for &id in &record.completed_ids {
        if !(1..=TOTAL_DEVOTIONALS).contains(&id) {
            violations.push(RecordViolation::IdOutOfRange { id });
            continue;
        }
        // The position points at the first uncompleted devotional, so every
        // completed id must precede it. The sole exception is the absorbing
        // terminal slot, whose own id stays in the set after completion.
        if id > current || (id == current && !record.position.is_final()) {
            violations.push(RecordViolation::CompletedAheadOfPosition {
                id,
                position: record.position,
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use emmaus_types::Cohort;

    fn now() -> DateTime<Utc> {
        "2024-03-01T09:00:00Z".parse().unwrap()
    }

    fn pos(week: u8, day: u8) -> Position {
        Position::new(week, day).unwrap()
    }

    fn consistent_record_at(week: u8, day: u8) -> ProgressRecord {
        let mut record = ProgressRecord::new("user-1", Cohort::new(1), now());
        record.position = pos(week, day);
        for id in 1..pos(week, day).devotional_id() {
            record.completed_ids.insert(id);
            let w = Position::from_devotional_id(id).unwrap().week();
            record.week_completed[(w - 1) as usize] += 1;
        }
        record
    }

    #[test]
    fn fresh_and_mid_program_records_are_clean() {
        assert_eq!(validate_record(&consistent_record_at(1, 1)), Vec::new());
        assert_eq!(validate_record(&consistent_record_at(3, 4)), Vec::new());
    }

    #[test]
    fn completed_terminal_record_is_clean() {
        let mut record = consistent_record_at(5, 7);
        record.completed_ids.insert(TOTAL_DEVOTIONALS);
        record.week_completed[4] = 7;
        assert_eq!(validate_record(&record), Vec::new());
    }

    #[test]
    fn counter_past_the_cap_reports_r1_and_r3() {
        let mut record = consistent_record_at(1, 1);
        record.week_completed[1] = 9;
        assert_eq!(
            validate_record(&record),
            vec![
                RecordViolation::WeekCountExceedsLimit { week: 2, count: 9 },
                RecordViolation::WeekCountMismatch {
                    week: 2,
                    recorded: 9,
                    counted: 0,
                },
            ]
        );
    }

    #[test]
    fn id_off_the_curriculum_reports_r2() {
        let mut record = consistent_record_at(1, 1);
        record.completed_ids.insert(40);
        let violations = validate_record(&record);
        assert!(violations.contains(&RecordViolation::IdOutOfRange { id: 40 }));
    }

    #[test]
    fn completed_id_ahead_of_position_reports_r4() {
        let mut record = consistent_record_at(2, 3);
        record.completed_ids.insert(20);
        record.week_completed[2] += 1;
        let violations = validate_record(&record);
        assert!(violations.contains(&RecordViolation::CompletedAheadOfPosition {
            id: 20,
            position: pos(2, 3),
        }));
    }

    #[test]
    fn current_id_in_the_set_is_a_violation_before_terminal() {
        let mut record = consistent_record_at(2, 3);
        let current = pos(2, 3).devotional_id();
        record.completed_ids.insert(current);
        record.week_completed[1] += 1;
        let violations = validate_record(&record);
        assert!(violations.contains(&RecordViolation::CompletedAheadOfPosition {
            id: current,
            position: pos(2, 3),
        }));
    }

    #[test]
    fn violations_render_with_their_tags() {
        let rendered = RecordViolation::WeekCountMismatch {
            week: 2,
            recorded: 9,
            counted: 0,
        }
        .to_string();
        assert_eq!(rendered, "R-3: week 2 counter 9 disagrees with 0 completed ids");
    }
}
