//! The span of calendar dates that currently hold measurements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Earliest and latest calendar dates with stored measurements.
///
/// Both fields are `None` when the store is empty; that is a valid result
/// ("nothing to select"), not an error. On the wire the fields serialize as
/// `"YYYY-MM-DD"` strings or `null`, matching `/api/rainfall/daterange`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DateRange {
    #[serde(default)]
    pub min_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_date: Option<NaiveDate>,
}

impl DateRange {
    /// Both ends, or `None` when the store held no measurements.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds().is_none()
    }
}
