//! Error taxonomy for the measurement fetch pipeline.

use thiserror::Error;

/// Failures surfaced by a measurement or range fetch.
///
/// An empty result set is not an error (the query legitimately returns an
/// empty series or a `DateRange` with no bounds), and a stale response is
/// not an error either (the fetch controller discards it silently). What
/// remains is the retrieval-fault family below; none of these are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Store or connectivity fault. The message is propagated verbatim to
    /// the user-visible error state.
    #[error("{0}")]
    Retrieval(String),

    /// The response arrived but did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request exceeded its time budget.
    #[error("request timed out")]
    Timeout,
}
