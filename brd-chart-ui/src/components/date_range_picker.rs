//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangePickerProps {
    /// Label shown above the inputs
    #[props(default = "Rentang Waktu".to_string())]
    pub label: String,
}

/// Date range picker bounded by the loaded data's min/max dates.
///
/// Writes raw picker values into `AppState`; reordering and clamping happen
/// when the pipeline runs.
#[component]
pub fn DateRangePicker(props: DateRangePickerProps) -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min = (state.min_date)();
    let max = (state.max_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 8px;",
            span {
                style: "font-weight: bold;",
                "{props.label}"
            }
            label {
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
            label {
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
