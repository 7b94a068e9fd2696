//! Reusable Dioxus RSX components for the bike rental dashboard.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod metric_card;
mod status;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use metric_card::MetricCard;
pub use status::{ErrorDisplay, LoadingSpinner, Notice};
