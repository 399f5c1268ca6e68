use crate::roman::to_roman;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of users progressing through the program together.
///
/// The numeral is display-only, derived from the number at construction and
/// stored alongside it so projections never recompute it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    number: u32,
    numeral: String,
}

impl Cohort {
    pub fn new(number: u32) -> Self {
        Self {
            numeral: to_roman(number),
            number,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn numeral(&self) -> &str {
        &self.numeral
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cohort {}", self.numeral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeral_is_derived_from_the_number() {
        let cohort = Cohort::new(46);
        assert_eq!(cohort.number(), 46);
        assert_eq!(cohort.numeral(), "XLVI");
        assert_eq!(cohort.to_string(), "Cohort XLVI");
    }

    #[test]
    fn serializes_both_forms() {
        let json = serde_json::to_value(Cohort::new(2)).unwrap();
        assert_eq!(json, serde_json::json!({ "number": 2, "numeral": "II" }));
    }
}
