//! The rental aggregators.
//!
//! Each takes an already filtered, date-sorted slice of records and returns
//! a fresh [`Rollup`]. An empty slice yields an empty rollup.

use crate::grouping::{group_aggregate, Mean, Sum};
use crate::models::{DailyRollup, HolidayAverages, Rollup, WeatherRollup};
use brd_core::{CountField, RentalRecord};

/// Sum `field` per calendar date. Dates without records are omitted.
pub fn daily_rollup(records: &[RentalRecord], field: CountField) -> DailyRollup {
    Rollup::new(
        field.value_label(),
        group_aggregate(records, |r| r.date, |r| field.select(r), &Sum),
    )
}

/// Daily sum of `cnt`.
pub fn daily_rentals(records: &[RentalRecord]) -> DailyRollup {
    daily_rollup(records, CountField::Total)
}

/// Daily sum of `casual`.
pub fn daily_casual_rentals(records: &[RentalRecord]) -> DailyRollup {
    daily_rollup(records, CountField::Casual)
}

/// Daily sum of `registered`.
pub fn daily_registered_rentals(records: &[RentalRecord]) -> DailyRollup {
    daily_rollup(records, CountField::Registered)
}

/// Sum of `cnt` per weather category, ascending by category code.
pub fn rentals_by_weather(records: &[RentalRecord]) -> WeatherRollup {
    Rollup::new(
        CountField::Total.value_label(),
        group_aggregate(records, |r| r.weather_category, |r| r.total_count, &Sum),
    )
}

/// Mean of `cnt` per holiday flag, working days first.
pub fn average_rentals_by_holiday(records: &[RentalRecord]) -> HolidayAverages {
    Rollup::new(
        "average_rental_count",
        group_aggregate(records, |r| r.is_holiday, |r| r.total_count, &Mean),
    )
}
