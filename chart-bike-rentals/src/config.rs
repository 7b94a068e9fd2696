//! Fixed presentation settings for the dashboard.

/// DOM root the app mounts into.
pub const ROOT_ID: &str = "bike-rentals-root";

pub const TITLE: &str = "Bike Rental Dashboard";

/// Decorative sidebar logo.
pub const BRAND_IMAGE_URL: &str = "https://static.vecteezy.com/system/resources/previews/019/030/974/original/bike-rental-logo-with-a-bicycle-and-label-combination-for-any-business-vector.jpg";

pub const CAPTION: &str = "Copyright (c) Dicoding 2024";

pub const DAILY_CHART_ID: &str = "daily-rentals-chart";
pub const WEATHER_CHART_ID: &str = "weather-rentals-chart";
pub const HOLIDAY_CHART_ID: &str = "holiday-rentals-chart";

pub const DAILY_LINE_COLOR: &str = "#90CAF9";

/// Bar colours for the weather chart, in category order.
pub const WEATHER_COLORS: [&str; 3] = ["#440154", "#21918C", "#FDE725"];

/// Bar colours for the holiday chart, in bar order (highest average first).
pub const HOLIDAY_COLORS: [&str; 2] = ["#72BCD4", "#D3D3D3"];

pub const EMPTY_SELECTION_NOTICE: &str = "No rentals in the selected date range.";
