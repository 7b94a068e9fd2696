//! One full pipeline run: filter, every aggregator, chart-ready output.

use crate::models::{Bar, DailyRollup, HolidayAverages, Metrics, WeatherRollup};
use crate::rollups::{
    average_rentals_by_holiday, daily_casual_rentals, daily_registered_rentals, daily_rentals,
    rentals_by_weather,
};
use brd_core::record::holiday_label;
use brd_core::{AppContext, DateRange, RentalRecord};
use brd_utils::dates::parse_date;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the dashboard shows for one date range.
///
/// Recomputed from scratch on every range change; nothing is cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub record_count: usize,
    pub metrics: Metrics,
    pub daily_total: DailyRollup,
    pub daily_casual: DailyRollup,
    pub daily_registered: DailyRollup,
    pub by_weather: WeatherRollup,
    pub by_holiday: HolidayAverages,
    /// Weather bars, ascending by category code.
    pub weather_bars: Vec<Bar<u64>>,
    /// Holiday bars, descending by average.
    pub holiday_bars: Vec<Bar<f64>>,
}

impl DashboardView {
    /// Aggregate `records`, which must already be filtered to `range`.
    pub fn build(range: DateRange, records: &[RentalRecord]) -> Self {
        let daily_total = daily_rentals(records);
        let daily_casual = daily_casual_rentals(records);
        let daily_registered = daily_registered_rentals(records);
        let by_weather = rentals_by_weather(records);
        let by_holiday = average_rentals_by_holiday(records);

        let metrics = Metrics {
            total_rentals: daily_total.total(),
            total_casual: daily_casual.total(),
            total_registered: daily_registered.total(),
        };

        let weather_bars = by_weather
            .rows
            .iter()
            .map(|row| Bar {
                label: row.key.display_label(),
                value: row.value,
            })
            .collect();

        let mut holiday_bars: Vec<Bar<f64>> = by_holiday
            .rows
            .iter()
            .map(|row| Bar {
                label: holiday_label(row.key),
                value: row.value,
            })
            .collect();
        holiday_bars.sort_by(|a, b| b.value.total_cmp(&a.value));

        log::debug!(
            "[BRD] pipeline: {} records from {} to {}, {} days",
            records.len(),
            range.start(),
            range.end(),
            daily_total.len()
        );

        Self {
            start: range.start(),
            end: range.end(),
            record_count: records.len(),
            metrics,
            daily_total,
            daily_casual,
            daily_registered,
            by_weather,
            by_holiday,
            weather_bars,
            holiday_bars,
        }
    }

    /// Clamp the picked range to the data, filter, and aggregate.
    pub fn for_range(ctx: &AppContext, picked: DateRange) -> Self {
        let (range, records) = ctx.select_clamped(picked);
        Self::build(range, records)
    }

    /// Run the pipeline for raw date-picker strings (see [`picked_range`]).
    pub fn for_input(ctx: &AppContext, start: &str, end: &str) -> Self {
        Self::for_range(ctx, picked_range(ctx.bounds(), start, end))
    }

    /// True when the range held no records.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Turn raw "YYYY-MM-DD" picker values into a range.
///
/// An empty or unparseable value falls back to the matching bound, so a
/// half-cleared picker still selects something sensible. The result is not
/// yet clamped; [`DashboardView::for_range`] does that.
pub fn picked_range(bounds: DateRange, start: &str, end: &str) -> DateRange {
    DateRange(
        parse_date(start).unwrap_or(bounds.start()),
        parse_date(end).unwrap_or(bounds.end()),
    )
}
