//! Core types shared by the rain gauge measurement pipeline.
//!
//! Everything in here compiles for both native targets (the HTTP server)
//! and `wasm32-unknown-unknown` (the chart frontend).

pub mod date_range;
pub mod dates;
pub mod error;
pub mod measurement;

pub use date_range::DateRange;
pub use error::FetchError;
pub use measurement::Measurement;
