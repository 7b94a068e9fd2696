//! Aggregate result structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use chrono::NaiveDate;
use brd_core::WeatherCategory;
use serde::Serialize;

/// One `(key, value)` pair of an aggregate result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateRow<K, V> {
    pub key: K,
    pub value: V,
}

/// An ordered aggregate result with the label of its value column.
///
/// Rows are ordered ascending by key and hold only keys present in the input.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Rollup<K, V> {
    pub value_label: &'static str,
    pub rows: Vec<AggregateRow<K, V>>,
}

impl<K, V> Rollup<K, V> {
    pub fn new(value_label: &'static str, rows: Vec<AggregateRow<K, V>>) -> Self {
        Self { value_label, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K> Rollup<K, u64> {
    /// Sum of all values; 0 for an empty rollup.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|row| row.value).sum()
    }
}

/// Per-date sums of one count field.
pub type DailyRollup = Rollup<NaiveDate, u64>;

/// Per-weather-category sums of `cnt`.
pub type WeatherRollup = Rollup<WeatherCategory, u64>;

/// Per-holiday-flag mean of `cnt`.
pub type HolidayAverages = Rollup<bool, f64>;

/// A labelled bar for the category charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar<V> {
    pub label: &'static str,
    pub value: V,
}

/// The three headline totals.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Metrics {
    pub total_rentals: u64,
    pub total_casual: u64,
    pub total_registered: u64,
}
