//! Status blocks: loading, fatal error and informational notices.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading rental data...".to_string())]
    pub message: String,
}

/// Centered loading indicator shown until the CSV is parsed.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Red box for load failures. The dashboard does not render past it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
}

/// Muted inline notice, e.g. for an empty date selection.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        p {
            style: "margin: 8px 0; color: #666; font-style: italic;",
            "{props.message}"
        }
    }
}
