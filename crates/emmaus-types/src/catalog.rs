use crate::error::DomainError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One content unit of the curriculum, keyed by its slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devotional {
    pub position: Position,
    pub title: String,
}

impl Devotional {
    /// Linear id derived from the slot, 1..=35.
    pub fn id(&self) -> u8 {
        self.position.devotional_id()
    }
}

/// Read-only lookup table over the devotional collection.
///
/// Built once by the boundary from the persisted collection; the core only
/// needs existence checks and id/title lookups. Keyed by id so iteration
/// follows program order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DevotionalCatalog {
    by_id: BTreeMap<u8, Devotional>,
}

impl DevotionalCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the devotional scheduled at `position`.
    pub fn insert(&mut self, position: Position, title: impl Into<String>) {
        self.by_id.insert(
            position.devotional_id(),
            Devotional {
                position,
                title: title.into(),
            },
        );
    }

    /// Build a catalog from raw (week, day, title) rows.
    ///
    /// Rows off the 5x7 grid are rejected rather than skipped: a malformed
    /// devotional collection is a deployment fault, not user input.
    pub fn from_rows<I, T>(rows: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (u8, u8, T)>,
        T: Into<String>,
    {
        let mut catalog = Self::new();
        for (week, day, title) in rows {
            catalog.insert(Position::new(week, day)?, title);
        }
        Ok(catalog)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.by_id.contains_key(&position.devotional_id())
    }

    pub fn get(&self, position: Position) -> Option<&Devotional> {
        self.by_id.get(&position.devotional_id())
    }

    pub fn by_id(&self, id: u8) -> Option<&Devotional> {
        self.by_id.get(&id)
    }

    pub fn title_of(&self, position: Position) -> Option<&str> {
        self.get(position).map(|d| d.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Devotionals in program order.
    pub fn iter(&self) -> impl Iterator<Item = &Devotional> {
        self.by_id.values()
    }
}
