use thiserror;

/// Range errors from the pure calculators.
///
/// These indicate caller bugs (malformed input reaching a typed API), not
/// user-facing conditions. Boundaries should log them and fail the request
/// rather than retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// (week, day) lands off the 5x7 grid.
    #[error("position w{week}d{day} is outside the 5-week, 7-day schedule")]
    PositionOutOfRange { week: u8, day: u8 },
    /// Devotional id outside 1..=35.
    #[error("devotional id {id} is outside 1..=35")]
    IdOutOfRange { id: u8 },
}
