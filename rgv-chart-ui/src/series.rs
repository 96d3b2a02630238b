//! Pure helpers that turn an ordered measurement series into chart inputs:
//! hourly tick timestamps, axis/tooltip time labels and value labels.

use chrono::{DateTime, Utc};
use rgv_core::Measurement;

/// Fallback stride for series whose spacing cannot be measured: assumes the
/// gauge's native 15-minute cadence, where every 4th sample is an hour apart.
const DEFAULT_STRIDE: usize = 4;

const SECONDS_PER_HOUR: i64 = 3600;

/// How many samples apart consecutive hourly ticks are.
///
/// Derived from the median positive spacing between consecutive timestamps,
/// so a series recorded at a different cadence still gets roughly one tick
/// per hour. Falls back to [`DEFAULT_STRIDE`] when the series has fewer than
/// two points or no forward time steps.
pub fn tick_stride(series: &[Measurement]) -> usize {
    let mut deltas: Vec<i64> = series
        .windows(2)
        .map(|pair| (pair[1].timestamp - pair[0].timestamp).num_seconds())
        .filter(|&delta| delta > 0)
        .collect();
    if deltas.is_empty() {
        return DEFAULT_STRIDE;
    }
    deltas.sort_unstable();
    let median = deltas[deltas.len() / 2];

    let stride = (SECONDS_PER_HOUR as f64 / median as f64).round() as usize;
    stride.max(1)
}

/// Timestamps of every `stride`-th sample, in original order, for use as
/// x-axis tick anchors.
pub fn hourly_ticks(series: &[Measurement]) -> Vec<DateTime<Utc>> {
    let stride = tick_stride(series);
    series
        .iter()
        .step_by(stride)
        .map(|m| m.timestamp)
        .collect()
}

/// Axis label: "HH:MM", 24-hour, storage timezone.
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Tooltip label: "Time: HH:MM".
pub fn format_time_label(timestamp: &DateTime<Utc>) -> String {
    format!("Time: {}", format_time(timestamp))
}

/// Value label: two decimals plus the unit, e.g. "3.46 mm".
pub fn format_value(value: f64) -> String {
    format!("{value:.2} mm")
}
