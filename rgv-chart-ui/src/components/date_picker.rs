//! Single-date picker bounded by the discovered measurement range.

use dioxus::prelude::*;

/// Date input for choosing which day to chart.
///
/// `min`/`max` come from range discovery and may be empty before it
/// resolves; the browser then leaves the input unbounded.
#[component]
pub fn DatePicker(
    value: String,
    min: String,
    max: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "rainfall-date",
                style: "font-weight: bold;",
                "Select Date: "
            }
            input {
                id: "rainfall-date",
                r#type: "date",
                value: "{value}",
                min: "{min}",
                max: "{max}",
                onchange: move |evt: Event<FormData>| {
                    on_change.call(evt.value());
                },
            }
        }
    }
}
