//! Aggregation of rental records into chart-ready summaries.
//!
//! This crate turns a filtered slice of [`brd_core::RentalRecord`]s into the
//! daily, weather and holiday rollups and the [`dashboard::DashboardView`]
//! consumed by the web app and the CLI.

pub mod dashboard;
pub mod grouping;
pub mod models;
pub mod rollups;

pub use dashboard::DashboardView;
