//! Sequential access gating.
//!
//! Content drips in program order: a slot is visible iff it is at or before
//! the user's current position. Nothing re-locks behind the user and nothing
//! opens ahead of them.

use emmaus_types::{Devotional, Position};

/// Content occupying a slot in the weekly schedule.
///
/// Implemented here for [`Devotional`]; content owned by other layers (video
/// metadata, assignments) implements it at its definition site and gets the
/// same gating for free.
pub trait Scheduled {
    fn position(&self) -> Position;
}

impl Scheduled for Devotional {
    fn position(&self) -> Position {
        self.position
    }
}

/// A slot is accessible iff it is at or before the user's position.
///
/// Inclusive: the current day's content is open.
pub fn is_accessible(item: Position, user: Position) -> bool {
    item <= user
}

/// Stable filter of `items` down to the accessible subsequence.
///
/// Original relative order is preserved; no resort. `None` means the caller
/// could not produce a trustworthy position (absent or malformed progress
/// record) and yields an empty list rather than leaking everything.
pub fn filter_accessible<T: Scheduled>(items: Vec<T>, user: Option<Position>) -> Vec<T> {
    let Some(user) = user else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter(|item| is_accessible(item.position(), user))
        .collect()
}
