//! Bike Rental Dashboard
//!
//! Shows rental totals, a daily rentals line chart and weather/holiday bar
//! charts for a user-chosen date range.
//!
//! Data flow:
//! 1. `build.rs` copies the rental CSV into OUT_DIR at compile time.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: load it into an `AppContext` once. A load failure is fatal
//!    and is shown instead of the dashboard.
//! 4. On date range change: filter, re-run every aggregator and re-render
//!    all three charts via D3.js.

mod config;

use brd_chart_ui::chart_data::{bar_chart_data, line_chart_data};
use brd_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, LoadingSpinner, MetricCard, Notice,
};
use brd_chart_ui::js_bridge;
use brd_chart_ui::state::AppState;
use brd_core::AppContext;
use brd_data::DashboardView;
use brd_utils::dates::format_date;
use brd_utils::numbers::format_count;
use dioxus::prelude::*;
use std::rc::Rc;

const RENTALS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/rentals.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(config::ROOT_ID))
        .launch(App);
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Push one pipeline result to the three D3 charts.
fn render_charts(view: &DashboardView) {
    if view.is_empty() {
        js_bridge::destroy_chart(config::DAILY_CHART_ID);
        js_bridge::destroy_chart(config::WEATHER_CHART_ID);
        js_bridge::destroy_chart(config::HOLIDAY_CHART_ID);
        return;
    }

    let daily_json = serde_json::to_string(&line_chart_data(&view.daily_total)).unwrap_or_default();
    let daily_config = serde_json::json!({
        "yAxisLabel": "Rentals per day",
        "color": config::DAILY_LINE_COLOR,
    })
    .to_string();
    js_bridge::render_line_chart(config::DAILY_CHART_ID, &daily_json, &daily_config);

    // Colours follow the category, not the bar position.
    let weather_colors: Vec<&str> = view
        .by_weather
        .rows
        .iter()
        .map(|row| config::WEATHER_COLORS[usize::from(row.key.code() - 1)])
        .collect();
    let weather_json = serde_json::to_string(&bar_chart_data(&view.weather_bars)).unwrap_or_default();
    let weather_config = serde_json::json!({
        "yAxisLabel": "Total Rentals",
        "colors": weather_colors,
        "height": 340,
    })
    .to_string();
    js_bridge::render_bar_chart(config::WEATHER_CHART_ID, &weather_json, &weather_config);

    let holiday_json = serde_json::to_string(&bar_chart_data(&view.holiday_bars)).unwrap_or_default();
    let holiday_config = serde_json::json!({
        "yAxisLabel": "Average Rentals",
        "colors": config::HOLIDAY_COLORS,
        "height": 340,
    })
    .to_string();
    js_bridge::render_bar_chart(config::HOLIDAY_CHART_ID, &holiday_json, &holiday_config);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut view: Signal<Option<DashboardView>> = use_signal(|| None);

    // ─── Effect 1: Load the CSV once on mount ───
    use_effect(move || {
        set_document_title(config::TITLE);

        match AppContext::from_csv_str(RENTALS_CSV) {
            Ok(ctx) => {
                let bounds = ctx.bounds();
                let min = format_date(&bounds.start());
                let max = format_date(&bounds.end());
                state.min_date.set(min.clone());
                state.max_date.set(max.clone());
                state.start_date.set(min);
                state.end_date.set(max);
                state.context.set(Some(Rc::new(ctx)));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("[BRD] failed to load rental data: {}", e);
                state.error_msg.set(Some(format!("Failed to load rental data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Re-run the pipeline whenever the date range changes ───
    use_effect(move || {
        let loading = (state.loading)();
        let start = (state.start_date)();
        let end = (state.end_date)();

        if loading {
            return;
        }
        // Clone the Rc out so the read borrow ends before any signal writes.
        let Some(ctx) = state.context.read().clone() else {
            return;
        };

        let next = DashboardView::for_input(&ctx, &start, &end);
        log::info!(
            "[BRD] range {} .. {}: {} records",
            next.start,
            next.end,
            next.record_count
        );
        render_charts(&next);
        view.set(Some(next));
    });

    // ─── Render ───
    let current = view.read().clone();
    let metrics = current.as_ref().map(|v| v.metrics).unwrap_or_default();
    let empty_selection = current.as_ref().is_some_and(|v| v.is_empty());
    let ready = state.context.read().is_some();
    let error = state.error_msg.read().clone();
    let title = config::TITLE;
    let caption = config::CAPTION;

    rsx! {
        div {
            style: "display: flex; gap: 24px; max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            // Sidebar
            aside {
                style: "width: 240px; flex-shrink: 0;",
                img {
                    src: config::BRAND_IMAGE_URL,
                    alt: "Bike rental logo",
                    style: "width: 100%; border-radius: 6px;",
                }
                if ready {
                    DateRangePicker {}
                }
            }

            main {
                style: "flex: 1; min-width: 0;",

                h2 { "{title} ✨" }

                if let Some(err) = error {
                    ErrorDisplay { message: err }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if ready {
                    ChartHeader { title: "Daily Rentals".to_string() }

                    div {
                        style: "display: flex; gap: 12px; flex-wrap: wrap;",
                        MetricCard { label: "Total Rentals".to_string(), value: format_count(metrics.total_rentals) }
                        MetricCard { label: "Total Casual".to_string(), value: format_count(metrics.total_casual) }
                        MetricCard { label: "Total Registered".to_string(), value: format_count(metrics.total_registered) }
                    }

                    if empty_selection {
                        Notice { message: config::EMPTY_SELECTION_NOTICE.to_string() }
                    }

                    ChartContainer { id: config::DAILY_CHART_ID.to_string(), min_height: 420, empty: empty_selection }

                    ChartHeader { title: "Rental by Weather Situation".to_string() }
                    ChartContainer { id: config::WEATHER_CHART_ID.to_string(), min_height: 340, empty: empty_selection }

                    ChartHeader { title: "Average Rental Holiday or Not".to_string() }
                    ChartContainer { id: config::HOLIDAY_CHART_ID.to_string(), min_height: 340, empty: empty_selection }

                    p {
                        style: "font-size: 11px; color: #888; text-align: center; margin-top: 16px;",
                        "{caption}"
                    }
                }
            }
        }
    }
}
