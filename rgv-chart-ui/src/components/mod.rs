//! Reusable Dioxus RSX components for the rainfall chart app.

mod chart_container;
mod chart_header;
mod date_picker;
mod error_display;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_picker::DatePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
