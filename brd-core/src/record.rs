use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label for working days (`holiday == 0`).
pub const WORKING_DAY_LABEL: &str = "Hari Kerja";

/// Display label for public holidays (`holiday == 1`).
pub const HOLIDAY_LABEL: &str = "Hari Libur";

/// General weather conditions at the time of rental, from the `weathersit` column.
///
/// Ordering follows the numeric code so grouped output is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeatherCategory {
    Clear,
    Misty,
    LightSnowOrRain,
}

impl WeatherCategory {
    /// Map a `weathersit` code to a category. Codes outside 1..=3 are rejected,
    /// including the heavy-rain code 4 of the UCI hourly file.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WeatherCategory::Clear),
            2 => Some(WeatherCategory::Misty),
            3 => Some(WeatherCategory::LightSnowOrRain),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            WeatherCategory::Clear => 1,
            WeatherCategory::Misty => 2,
            WeatherCategory::LightSnowOrRain => 3,
        }
    }

    /// Fixed chart label, keyed by category rather than by bar position.
    pub fn display_label(self) -> &'static str {
        match self {
            WeatherCategory::Clear => "Cerah",
            WeatherCategory::Misty => "Kabut",
            WeatherCategory::LightSnowOrRain => "Salju Ringan",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

/// Chart label for a holiday flag.
pub fn holiday_label(is_holiday: bool) -> &'static str {
    if is_holiday {
        HOLIDAY_LABEL
    } else {
        WORKING_DAY_LABEL
    }
}

/// Which of the three rental counts a rollup sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountField {
    Total,
    Casual,
    Registered,
}

impl CountField {
    /// Source column name in the input file.
    pub fn column(self) -> &'static str {
        match self {
            CountField::Total => "cnt",
            CountField::Casual => "casual",
            CountField::Registered => "registered",
        }
    }

    /// Value label of the daily rollup over this field.
    pub fn value_label(self) -> &'static str {
        match self {
            CountField::Total => "rental_count",
            CountField::Casual => "casual_count",
            CountField::Registered => "registered_count",
        }
    }

    pub fn select(self, record: &RentalRecord) -> u32 {
        match self {
            CountField::Total => record.total_count,
            CountField::Casual => record.casual_count,
            CountField::Registered => record.registered_count,
        }
    }
}

/// A single row of the rental log. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub date: NaiveDate,
    pub weather_category: WeatherCategory,
    pub is_holiday: bool,
    pub total_count: u32,
    pub casual_count: u32,
    pub registered_count: u32,
}

impl RentalRecord {
    /// Build a record whose total is `casual + registered`.
    ///
    /// Returns `None` when the total does not fit in a `u32`.
    pub fn new(
        date: NaiveDate,
        weather_category: WeatherCategory,
        is_holiday: bool,
        casual_count: u32,
        registered_count: u32,
    ) -> Option<Self> {
        Some(Self {
            date,
            weather_category,
            is_holiday,
            total_count: casual_count.checked_add(registered_count)?,
            casual_count,
            registered_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_codes() {
        for category in [
            WeatherCategory::Clear,
            WeatherCategory::Misty,
            WeatherCategory::LightSnowOrRain,
        ] {
            assert_eq!(WeatherCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(WeatherCategory::from_code(0), None);
        assert_eq!(WeatherCategory::from_code(4), None);
    }

    #[test]
    fn test_weather_labels_are_keyed_by_category() {
        assert_eq!(WeatherCategory::Clear.display_label(), "Cerah");
        assert_eq!(WeatherCategory::Misty.display_label(), "Kabut");
        assert_eq!(WeatherCategory::LightSnowOrRain.display_label(), "Salju Ringan");
        assert!(WeatherCategory::Clear < WeatherCategory::LightSnowOrRain);
    }

    #[test]
    fn test_holiday_labels() {
        assert_eq!(holiday_label(false), "Hari Kerja");
        assert_eq!(holiday_label(true), "Hari Libur");
    }

    #[test]
    fn test_count_field_select() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let record = RentalRecord::new(date, WeatherCategory::Misty, false, 331, 654).unwrap();
        assert_eq!(CountField::Total.select(&record), 985);
        assert_eq!(CountField::Casual.select(&record), 331);
        assert_eq!(CountField::Registered.select(&record), 654);
        assert_eq!(CountField::Casual.value_label(), "casual_count");
        assert_eq!(CountField::Total.column(), "cnt");
    }

    #[test]
    fn test_new_rejects_overflowing_total() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        assert_eq!(RentalRecord::new(date, WeatherCategory::Clear, false, u32::MAX, 1), None);
        let max = RentalRecord::new(date, WeatherCategory::Clear, false, u32::MAX - 1, 1).unwrap();
        assert_eq!(max.total_count, u32::MAX);
    }
}
