//! Daily Rainfall chart.
//!
//! Displays one calendar day of rain gauge readings as a line chart. The
//! user picks a date within the range the store actually covers; the app
//! fetches that day's measurements and renders them with hourly tick marks.
//!
//! Data flow:
//! 1. On mount, a one-shot task asks the API for the available date range.
//! 2. The fetch controller seeds its selection with the earliest date and
//!    the app issues the first measurement fetch.
//! 3. Each date change selects-then-fetches; stale responses are discarded
//!    by the controller, so the newest selection always wins.
//! 4. Successful series go through the series helpers (ticks + labels) and
//!    into the D3 bridge.

use chrono::NaiveDate;
use dioxus::prelude::*;
use rgv_chart_ui::components::{
    ChartContainer, ChartHeader, DatePicker, ErrorDisplay, LoadingSpinner,
};
use rgv_chart_ui::fetch::{FetchState, RequestToken};
use rgv_chart_ui::state::AppState;
use rgv_chart_ui::{api::ApiClient, js_bridge, series};
use rgv_core::dates;

/// Base URL of the rainfall API.
const API_BASE: &str = "http://localhost:5000";

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "rainfall-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("rainfall-root"))
        .launch(App);
}

/// Fetch one day's measurements and hand the result to the controller.
fn spawn_measurement_fetch(mut state: AppState, date: NaiveDate, token: RequestToken) {
    spawn(async move {
        let client = ApiClient::new(API_BASE);
        let result = client.fetch_measurements(date).await;
        if !state.controller.write().resolve(token, result) {
            log::info!("response for {date} arrived after a newer selection");
        }
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-shot init: discover the available range, then fetch the first day.
    // Reads no signals, so it is not re-triggered by renders.
    use_effect(move || {
        spawn(async move {
            let client = ApiClient::new(API_BASE);
            match client.fetch_date_range().await {
                Ok(range) => {
                    let seeded = state.controller.write().seed_range(range);
                    if let Some((date, token)) = seeded {
                        spawn_measurement_fetch(state, date, token);
                    }
                }
                Err(err) => {
                    log::error!("range discovery failed: {err}");
                    state.controller.write().fail_range(&err.to_string());
                }
            }
        });
    });

    // Re-render the chart whenever a new series arrives.
    use_effect(move || {
        let controller = state.controller.read();
        let FetchState::Success(data) = controller.state() else {
            return;
        };
        if data.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }

        js_bridge::init_charts();

        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|m| {
                serde_json::json!({
                    "timestamp": m.timestamp,
                    "value": m.value,
                    "time_label": series::format_time_label(&m.timestamp),
                    "value_label": series::format_value(m.value),
                })
            })
            .collect();
        let ticks: Vec<serde_json::Value> = series::hourly_ticks(data)
            .iter()
            .map(|t| {
                serde_json::json!({
                    "timestamp": t,
                    "label": series::format_time(t),
                })
            })
            .collect();

        log::info!("rendering {} points, {} ticks", rows.len(), ticks.len());

        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "ticks": ticks,
            "xAxisLabel": "Time (Hourly)",
            "yAxisLabel": "Rainfall (mm)",
            "seriesName": "Rainfall at Rain Gauge A (mm)",
        }))
        .unwrap_or_default();

        js_bridge::render_line_chart(CHART_ID, &data_json, &config_json);
    });

    let on_date_change = move |value: String| match dates::parse_date(&value) {
        Ok(date) => {
            let token = state.controller.write().select(date);
            spawn_measurement_fetch(state, date, token);
        }
        Err(err) => log::error!("unusable date input {value:?}: {err}"),
    };

    let controller = state.controller.read();
    let selected = controller
        .selected_date()
        .map(|d| dates::format_date(&d))
        .unwrap_or_default();
    let (min, max) = match controller.range().bounds() {
        Some((min, max)) => (dates::format_date(&min), dates::format_date(&max)),
        None => (String::new(), String::new()),
    };
    let loading = controller.is_loading();
    let error_msg = match controller.state() {
        FetchState::Error(message) => Some(message.clone()),
        _ => None,
    };
    drop(controller);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Rainfall Data".to_string(),
                unit_description: "Rainfall (mm) per 15-minute sampling interval".to_string(),
            }

            if let Some(message) = error_msg {
                ErrorDisplay { message }
            } else if loading {
                LoadingSpinner {}
            } else {
                DatePicker {
                    value: selected,
                    min: min,
                    max: max,
                    on_change: on_date_change,
                }
                ChartContainer {
                    id: CHART_ID.to_string(),
                    min_height: 520,
                }
            }
        }
    }
}
