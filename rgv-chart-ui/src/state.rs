//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the fetch controller in a signal provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::fetch::FetchController;
use dioxus::prelude::*;

/// Shared state for the rainfall chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The fetch-orchestration state machine.
    pub controller: Signal<FetchController>,
}

impl AppState {
    /// Create a new AppState with an idle controller.
    pub fn new() -> Self {
        Self {
            controller: Signal::new(FetchController::new()),
        }
    }
}
