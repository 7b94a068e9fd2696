//! Shared Dioxus components and D3.js bridge for the bike rental dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `chart_data`: JSON payloads for the line and bar charts
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (date picker, metric cards, containers)

pub mod chart_data;
pub mod components;
pub mod js_bridge;
pub mod state;
