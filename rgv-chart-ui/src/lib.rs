//! Client-side library for the rainfall chart app.
//!
//! This crate provides:
//! - `fetch`: the fetch-orchestration state machine (loading/error/stale handling)
//! - `series`: pure tick-sampling and label formatting for the chart
//! - `api`: HTTP client for the rainfall endpoints
//! - `state`: reactive AppState shared via Dioxus context
//! - `components`: reusable RSX components (picker, spinner, containers)
//! - `js_bridge`: Rust wrappers for the D3.js line chart via `js_sys::eval()`

pub mod api;
pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod series;
pub mod state;
