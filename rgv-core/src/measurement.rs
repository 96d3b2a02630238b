//! The wire/domain representation of a single rainfall reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rainfall reading at a specific instant.
///
/// `value` is millimetres of rain recorded for the sampling interval ending
/// at `timestamp`. Timestamps are stored and transported in UTC and
/// serialize as RFC 3339 strings (`"2024-01-05T00:15:00Z"`), so this struct
/// doubles as the JSON shape of the `/api/rainfall` response. Within a query
/// result, timestamps are non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}
