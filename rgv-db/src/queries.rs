//! Typed query methods for retrieving measurements from the store.
//!
//! Both queries are single-shot reads: no retry, no caching, no writes.
//! Results come back as `rgv_core` structs that serialize directly into
//! the API's JSON responses.

use crate::Database;
use chrono::{DateTime, Utc};
use rgv_core::{dates, DateRange, Measurement};
use rusqlite::params;

impl Database {
    /// Get all measurements recorded on one calendar date (UTC), ordered
    /// ascending by timestamp.
    ///
    /// A `None` or empty `date` is the deliberate no-op filter: it returns
    /// an empty series, not an error. A present but unparseable date is an
    /// error, which the HTTP layer surfaces as a retrieval fault.
    pub fn query_measurements(&self, date: Option<&str>) -> anyhow::Result<Vec<Measurement>> {
        let date = match date {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Ok(Vec::new()),
        };
        let day = dates::parse_date(date)
            .map_err(|e| anyhow::anyhow!("invalid date filter {date:?}: {e}"))?;

        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT timestamp, value FROM rainfall
             WHERE date(timestamp) = ?1
             ORDER BY timestamp",
        )?;
        let raw_rows: Vec<(String, f64)> = stmt
            .query_map(params![dates::format_date(&day)], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let rows = raw_rows
            .into_iter()
            .map(|(ts, value)| {
                let timestamp = DateTime::parse_from_rfc3339(&ts)
                    .map_err(|e| anyhow::anyhow!("stored timestamp {ts:?} unreadable: {e}"))?
                    .with_timezone(&Utc);
                Ok(Measurement { timestamp, value })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        log::info!(
            "query: query_measurements returned {} rows for {}",
            rows.len(),
            dates::format_date(&day)
        );
        Ok(rows)
    }

    /// Get the (min, max) calendar dates across all measurements.
    ///
    /// Timestamps are truncated to date granularity (`YYYY-MM-DD`). An
    /// empty store yields a `DateRange` with both bounds `None`; callers
    /// treat that as "no valid date to select".
    pub fn query_date_range(&self) -> anyhow::Result<DateRange> {
        let conn = self.lock()?;
        let (min_date, max_date) = conn.query_row(
            "SELECT date(MIN(timestamp)), date(MAX(timestamp)) FROM rainfall",
            [],
            |row| {
                Ok((
                    row.get::<_, Option<String>>(0)?,
                    row.get::<_, Option<String>>(1)?,
                ))
            },
        )?;

        let parse = |d: Option<String>| -> anyhow::Result<_> {
            d.map(|s| dates::parse_date(&s)).transpose()
        };
        let range = DateRange {
            min_date: parse(min_date)?,
            max_date: parse(max_date)?,
        };
        log::info!(
            "query: query_date_range returned ({:?}, {:?})",
            range.min_date,
            range.max_date
        );
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    /// One day of 15-minute readings plus outliers on neighbouring days,
    /// deliberately out of input order to exercise the ORDER BY.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
2024-01-05T00:30:00Z,0.3
2024-01-05T00:00:00Z,0.1
2024-01-05T00:15:00Z,0.0
2024-01-04T23:45:00Z,1.2
2024-01-07T10:00:00Z,4.5
";
        db.load_measurements(csv).unwrap();
        db
    }

    #[test]
    fn returns_rows_for_the_requested_date_in_timestamp_order() {
        let db = sample_db();
        let series = db.query_measurements(Some("2024-01-05")).unwrap();
        assert_eq!(series.len(), 3);

        let values: Vec<f64> = series.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.1, 0.0, 0.3]);
        assert!(
            series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
            "series must be sorted non-decreasing by timestamp"
        );
    }

    #[test]
    fn date_with_no_rows_is_an_empty_success() {
        let db = sample_db();
        let series = db.query_measurements(Some("2024-02-01")).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn absent_or_blank_date_is_the_no_op_filter() {
        let db = sample_db();
        assert!(db.query_measurements(None).unwrap().is_empty());
        assert!(db.query_measurements(Some("")).unwrap().is_empty());
        assert!(db.query_measurements(Some("   ")).unwrap().is_empty());
    }

    #[test]
    fn unparseable_date_is_an_error() {
        let db = sample_db();
        assert!(db.query_measurements(Some("01/05/2024")).is_err());
        assert!(db.query_measurements(Some("2024-01-32")).is_err());
    }

    #[test]
    fn date_range_spans_all_measurements() {
        let db = sample_db();
        let range = db.query_date_range().unwrap();
        let (min, max) = range.bounds().unwrap();
        assert_eq!(dates::format_date(&min), "2024-01-04");
        assert_eq!(dates::format_date(&max), "2024-01-07");
        assert!(min <= max);
    }

    #[test]
    fn date_range_of_empty_store_has_no_bounds() {
        let db = Database::new().unwrap();
        let range = db.query_date_range().unwrap();
        assert!(range.is_empty(), "empty store is a valid empty range, not an error");
    }

    #[test]
    fn full_pipeline_workflow() {
        let db = sample_db();

        // 1. Discover the range
        let range = db.query_date_range().unwrap();
        let (min, _) = range.bounds().unwrap();

        // 2. Fetch the default day (min_date)
        let series = db
            .query_measurements(Some(&dates::format_date(&min)))
            .unwrap();
        assert_eq!(series.len(), 1);
        assert!((series[0].value - 1.2).abs() < f64::EPSILON);
    }
}
