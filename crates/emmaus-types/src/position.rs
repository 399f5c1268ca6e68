use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of weeks in the program.
pub const WEEKS: u8 = 5;
/// Days per week; every week is fully scheduled.
pub const DAYS_PER_WEEK: u8 = 7;
/// Total devotionals in the program (5 weeks x 7 days).
pub const TOTAL_DEVOTIONALS: u8 = WEEKS * DAYS_PER_WEEK;

/// A point in the 5x7 curriculum grid.
///
/// Valid by construction: `week` is 1..=5 and `day` is 1..=7. The derived
/// ordering compares week first, then day: the program's reading order.
///
/// Display: `"w2d3"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    week: u8,
    day: u8,
}

impl Position {
    /// First scheduled slot, (1,1). Starting position for fresh records.
    pub fn first() -> Self {
        Self { week: 1, day: 1 }
    }

    /// Final slot, (5,7). Advancement never moves past it.
    pub fn last() -> Self {
        Self {
            week: WEEKS,
            day: DAYS_PER_WEEK,
        }
    }

    /// Validated constructor.
    pub fn new(week: u8, day: u8) -> Result<Self, DomainError> {
        if !Self::is_valid(week, day) {
            return Err(DomainError::PositionOutOfRange { week, day });
        }
        Ok(Self { week, day })
    }

    /// Raw-input guard: true iff (week, day) lands on the 5x7 grid.
    ///
    /// Use at boundaries before trusting a persisted or client-supplied pair.
    pub fn is_valid(week: u8, day: u8) -> bool {
        (1..=WEEKS).contains(&week) && (1..=DAYS_PER_WEEK).contains(&day)
    }

    pub fn week(&self) -> u8 {
        self.week
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Linear id of the devotional at this position: `(week-1)*7 + day`.
    ///
    /// Bijective over the grid onto 1..=35; [`Self::from_devotional_id`] is
    /// the inverse.
    pub fn devotional_id(&self) -> u8 {
        (self.week - 1) * DAYS_PER_WEEK + self.day
    }

    /// Inverse of [`Self::devotional_id`].
    pub fn from_devotional_id(id: u8) -> Result<Self, DomainError> {
        if !(1..=TOTAL_DEVOTIONALS).contains(&id) {
            return Err(DomainError::IdOutOfRange { id });
        }
        let week = (id - 1) / DAYS_PER_WEEK + 1;
        let day = id - (week - 1) * DAYS_PER_WEEK;
        Ok(Self { week, day })
    }

    /// Successor in program order.
    ///
    /// Crosses the week boundary after day 7. The final slot (5,7) is
    /// absorbing: its successor is itself, not an out-of-range position.
    pub fn next(&self) -> Self {
        if self.day < DAYS_PER_WEEK {
            Self {
                week: self.week,
                day: self.day + 1,
            }
        } else if self.week < WEEKS {
            Self {
                week: self.week + 1,
                day: 1,
            }
        } else {
            *self
        }
    }

    /// Whether this is the final slot of the program.
    pub fn is_final(&self) -> bool {
        *self == Self::last()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}d{}", self.week, self.day)
    }
}
