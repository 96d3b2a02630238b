//! HTTP client for the rainfall endpoints.
//!
//! Responses are deserialized into the typed `rgv_core` structs at the
//! boundary; anything that does not match the expected shape is a
//! [`FetchError::MalformedResponse`], never loose JSON handed onward.
//! Requests carry a timeout so a hung server resolves to
//! [`FetchError::Timeout`] instead of leaving the UI loading forever.

use chrono::NaiveDate;
use rgv_core::{dates, DateRange, FetchError, Measurement};
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for `GET /api/rainfall` and `GET /api/rainfall/daterange`.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch one calendar date's measurements, ascending by timestamp.
    pub async fn fetch_measurements(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Measurement>, FetchError> {
        let url = format!(
            "{}/api/rainfall?date={}",
            self.base_url,
            dates::format_date(&date)
        );
        let body = self.get(&url).await?;
        let series: Vec<Measurement> = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
        validate_series(&series)?;
        Ok(series)
    }

    /// Fetch the min/max available dates.
    pub async fn fetch_date_range(&self) -> Result<DateRange, FetchError> {
        let url = format!("{}/api/rainfall/daterange", self.base_url);
        let body = self.get(&url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        log::info!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(request_error)?;
        if !(200..300).contains(&status) {
            return Err(error_from_response(status, &body));
        }
        Ok(body)
    }
}

fn request_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Retrieval(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a non-2xx response to a retrieval fault, preferring the server's own
/// `{ "error": ... }` message when the body carries one.
fn error_from_response(status: u16, body: &str) -> FetchError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => FetchError::Retrieval(parsed.error),
        Err(_) => FetchError::Retrieval(format!("server returned status {status}")),
    }
}

/// Boundary check on a decoded series: ordering and value sanity.
fn validate_series(series: &[Measurement]) -> Result<(), FetchError> {
    if series
        .windows(2)
        .any(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        return Err(FetchError::MalformedResponse(
            "series not ordered by timestamp".to_string(),
        ));
    }
    if let Some(bad) = series.iter().find(|m| m.value < 0.0 || !m.value.is_finite()) {
        return Err(FetchError::MalformedResponse(format!(
            "invalid value {} at {}",
            bad.value, bad.timestamp
        )));
    }
    Ok(())
}
