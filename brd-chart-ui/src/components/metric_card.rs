//! Headline metric card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    /// Metric label, e.g. "Total Rentals"
    pub label: String,
    /// Pre-formatted value
    pub value: String,
}

/// A label over a large value, laid out to share a row with its siblings.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fafafa;",
            div {
                style: "font-size: 13px; color: #666; margin-bottom: 4px;",
                "{props.label}"
            }
            div {
                style: "font-size: 28px; font-weight: 600; color: #212121;",
                "{props.value}"
            }
        }
    }
}
