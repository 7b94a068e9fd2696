//! Core types for the bike rental dashboard.
//!
//! - `record`: rental records, weather categories and count selectors
//! - `collection`: the sorted in-memory store, its CSV loader and the date filter
//! - `date_range`: inclusive calendar ranges
//! - `context`: the application context built once at startup
//! - `error`: fatal load errors

pub mod collection;
pub mod context;
pub mod date_range;
pub mod error;
pub mod record;

pub use collection::{filter_by_date, RentalCollection};
pub use context::AppContext;
pub use date_range::DateRange;
pub use error::LoadError;
pub use record::{CountField, RentalRecord, WeatherCategory};
