//! Fetch orchestration for the rainfall chart.
//!
//! [`FetchController`] is a synchronous state machine; the async glue that
//! actually performs HTTP requests lives in the app crate and reports back
//! through [`FetchController::resolve`]. Every issued fetch carries a
//! [`RequestToken`] minted at selection time. A token older than the latest
//! selection is stale and its result is discarded, so the last
//! user-initiated selection determines the displayed state no matter what
//! order responses arrive in.

use chrono::NaiveDate;
use rgv_core::{DateRange, FetchError, Measurement};

/// What the chart area should display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Nothing requested yet, or nothing selectable (empty store).
    #[default]
    Idle,
    /// A range or measurement fetch is outstanding.
    Loading,
    /// The selected day's series, ascending by timestamp.
    Success(Vec<Measurement>),
    /// A fetch failed; the message replaces the chart.
    Error(String),
}

/// Identifies one issued measurement fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Owns the fetch state, the current selection and the discovered range.
///
/// `Success` and `Error` are transient: the next selection always moves the
/// machine back through `Loading`.
#[derive(Debug, Default)]
pub struct FetchController {
    state: FetchState,
    selected_date: Option<NaiveDate>,
    range: DateRange,
    generation: u64,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// One-shot initialization with the discovered range.
    ///
    /// A non-empty range selects `min_date` and moves to `Loading`; the
    /// caller must issue the measurement fetch for the returned date and
    /// token. An empty range means there is no valid date to select: the
    /// machine stays `Idle` and no fetch is owed.
    pub fn seed_range(&mut self, range: DateRange) -> Option<(NaiveDate, RequestToken)> {
        self.range = range;
        match self.range.bounds() {
            Some((min, _)) => {
                let token = self.select(min);
                Some((min, token))
            }
            None => {
                log::info!("no measurements stored, nothing to select");
                self.state = FetchState::Idle;
                None
            }
        }
    }

    /// Range discovery failed: surface it and halt with no selection.
    ///
    /// The message is prefixed so it reads differently from a measurement
    /// fetch failure.
    pub fn fail_range(&mut self, message: &str) {
        self.state = FetchState::Error(format!("date range discovery failed: {message}"));
        self.selected_date = None;
    }

    /// The user picked a date: move to `Loading` and mint the token the
    /// resulting fetch must resolve with.
    pub fn select(&mut self, date: NaiveDate) -> RequestToken {
        self.generation += 1;
        self.selected_date = Some(date);
        self.state = FetchState::Loading;
        RequestToken(self.generation)
    }

    /// Complete the fetch identified by `token`.
    ///
    /// A stale token (superseded by a newer selection) leaves the state
    /// untouched and returns `false` - the one documented case where a
    /// result is silently discarded. A current token moves the machine to
    /// `Success` or `Error` and returns `true`.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Measurement>, FetchError>,
    ) -> bool {
        if token.0 != self.generation {
            log::info!(
                "discarding stale response (token {}, current {})",
                token.0,
                self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(series) => FetchState::Success(series),
            Err(err) => FetchState::Error(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn series_for(day: u32) -> Vec<Measurement> {
        vec![Measurement {
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            value: day as f64,
        }]
    }

    fn full_range() -> DateRange {
        DateRange {
            min_date: Some(date("2024-01-05")),
            max_date: Some(date("2024-01-09")),
        }
    }

    #[test]
    fn seeding_selects_min_date_and_starts_loading() {
        let mut ctl = FetchController::new();
        assert_eq!(*ctl.state(), FetchState::Idle);

        let (selected, _token) = ctl.seed_range(full_range()).unwrap();
        assert_eq!(selected, date("2024-01-05"));
        assert_eq!(ctl.selected_date(), Some(date("2024-01-05")));
        assert!(ctl.is_loading());
    }

    #[test]
    fn seeding_an_empty_range_stays_idle() {
        let mut ctl = FetchController::new();
        assert!(ctl.seed_range(DateRange::default()).is_none());
        assert_eq!(*ctl.state(), FetchState::Idle);
        assert_eq!(ctl.selected_date(), None);
    }

    #[test]
    fn range_failure_is_distinct_and_halts() {
        let mut ctl = FetchController::new();
        ctl.fail_range("connection refused");
        match ctl.state() {
            FetchState::Error(msg) => {
                assert!(msg.starts_with("date range discovery failed:"));
                assert!(msg.contains("connection refused"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
        assert_eq!(ctl.selected_date(), None);
    }

    #[test]
    fn resolve_moves_to_success_or_error() {
        let mut ctl = FetchController::new();
        let token = ctl.select(date("2024-01-05"));
        assert!(ctl.resolve(token, Ok(series_for(5))));
        assert_eq!(*ctl.state(), FetchState::Success(series_for(5)));

        let token = ctl.select(date("2024-01-06"));
        assert!(ctl.is_loading(), "terminal states are transient");
        assert!(ctl.resolve(token, Err(FetchError::Retrieval("boom".into()))));
        assert_eq!(*ctl.state(), FetchState::Error("boom".into()));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctl = FetchController::new();
        let token_a = ctl.select(date("2024-01-05"));
        let token_b = ctl.select(date("2024-01-06"));

        // A's slow response arrives after B was selected: ignored.
        assert!(!ctl.resolve(token_a, Ok(series_for(5))));
        assert!(ctl.is_loading(), "stale resolution must not change state");

        assert!(ctl.resolve(token_b, Ok(series_for(6))));
        assert_eq!(*ctl.state(), FetchState::Success(series_for(6)));
    }

    #[test]
    fn late_stale_response_cannot_overwrite_newer_result() {
        let mut ctl = FetchController::new();
        let token_a = ctl.select(date("2024-01-05"));
        let token_b = ctl.select(date("2024-01-06"));

        // Responses arrive in issue order this time; B lands first anyway
        // because A was slow. Final state must still be B's.
        assert!(ctl.resolve(token_b, Ok(series_for(6))));
        assert!(!ctl.resolve(token_a, Ok(series_for(5))));
        assert_eq!(*ctl.state(), FetchState::Success(series_for(6)));
    }

    #[test]
    fn stale_error_is_also_discarded() {
        let mut ctl = FetchController::new();
        let token_a = ctl.select(date("2024-01-05"));
        let token_b = ctl.select(date("2024-01-06"));

        assert!(!ctl.resolve(token_a, Err(FetchError::Timeout)));
        assert!(ctl.resolve(token_b, Ok(series_for(6))));
        assert_eq!(*ctl.state(), FetchState::Success(series_for(6)));
    }

    #[test]
    fn timeout_surfaces_as_error_state() {
        let mut ctl = FetchController::new();
        let token = ctl.select(date("2024-01-05"));
        assert!(ctl.resolve(token, Err(FetchError::Timeout)));
        assert_eq!(*ctl.state(), FetchState::Error("request timed out".into()));
    }
}
