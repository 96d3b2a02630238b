//! SQL schema for the measurement store.

/// Returns the full SQL schema as a single batch string.
///
/// One table: `rainfall`, a single gauge's readings keyed by timestamp.
/// Timestamps are RFC 3339 UTC strings, so SQLite's `date()` yields the
/// calendar date used by the per-day query and the range query; the
/// expression index covers that filter.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS rainfall (
        timestamp TEXT PRIMARY KEY,
        value REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_rainfall_day ON rainfall(date(timestamp));
    "#
}
