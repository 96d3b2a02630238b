//! In-memory SQLite store for rain gauge measurements.
//!
//! This crate provides the read side of the measurement pipeline: a CSV
//! fixture is loaded into an in-memory SQLite database at startup and the
//! HTTP layer issues typed queries against it. The pipeline itself never
//! writes; `load_measurements` is the only ingress and runs once before
//! the server starts serving.
//!
//! # Architecture
//!
//! - `Arc<Mutex<Connection>>` wrapper so the store can be shared across
//!   axum request handlers; each query holds the lock only for the
//!   duration of its read
//! - In-memory SQLite via `rusqlite`
//! - Typed query methods returning `rgv_core` structs that serialize
//!   directly into the API's JSON responses
//!
//! # Usage
//!
//! ```rust
//! use rgv_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_measurements("2024-01-05T00:00:00Z,0.1\n2024-01-05T00:15:00Z,0.0\n").unwrap();
//!
//! let series = db.query_measurements(Some("2024-01-05")).unwrap();
//! assert_eq!(series.len(), 2);
//! ```

pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// In-memory SQLite database holding rain gauge measurements.
///
/// Cheaply cloneable (via `Arc`); clones share the same underlying
/// connection, which is what the HTTP handlers rely on.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_measurements`]
    /// to populate it from a CSV fixture.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Take the connection lock for the duration of one read or load.
    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("database lock poisoned"))
    }
}
