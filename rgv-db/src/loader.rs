//! CSV fixture loading for the measurement store.
//!
//! The fixture format is two columns, no headers:
//! `timestamp(RFC 3339),value_mm`. Timestamps are normalized to UTC before
//! insertion so that `date(timestamp)` and the wire format agree regardless
//! of the offset the fixture was exported with.

use crate::Database;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::params;

impl Database {
    /// Load rain gauge measurements from a CSV string.
    ///
    /// Rows with an unparseable timestamp or a non-numeric, negative, or
    /// non-finite value are skipped and counted. Duplicate timestamps
    /// replace the earlier row.
    ///
    /// # Example CSV
    /// ```text
    /// 2024-01-05T00:00:00Z,0.1
    /// 2024-01-05T00:15:00Z,0.0
    /// ```
    pub fn load_measurements(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.lock()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let timestamp = r
                .get(0)
                .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
                .map(|t| t.with_timezone(&Utc));
            let value: Option<f64> = r.get(1).and_then(|s| s.trim().parse().ok());

            let (timestamp, value) = match (timestamp, value) {
                (Some(t), Some(v)) if v >= 0.0 && v.is_finite() => (t, v),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            conn.execute(
                "INSERT OR REPLACE INTO rainfall (timestamp, value) VALUES (?1, ?2)",
                params![timestamp.to_rfc3339_opts(SecondsFormat::Secs, true), value],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} measurements, skipped {} invalid", count, skipped);
        Ok(())
    }
}
