//! `export`: write each aggregate of one pipeline run as its own CSV.

use crate::{build_view, load_context};
use anyhow::Context;
use brd_core::collection::{COL_DATE, COL_HOLIDAY, COL_WEATHER};
use brd_core::record::holiday_label;
use brd_data::models::DailyRollup;
use brd_data::DashboardView;
use brd_utils::dates::format_date;
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const DAILY_RENTALS_FILE: &str = "daily_rentals.csv";
pub const DAILY_CASUAL_FILE: &str = "daily_casual.csv";
pub const DAILY_REGISTERED_FILE: &str = "daily_registered.csv";
pub const BY_WEATHER_FILE: &str = "by_weather.csv";
pub const BY_HOLIDAY_FILE: &str = "by_holiday.csv";

pub fn run_export(
    data: &Path,
    out_dir: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let ctx = load_context(data)?;
    let view = build_view(&ctx, start, end);
    let written = write_aggregates(&view, out_dir)?;
    info!(
        "Exported {} files for {} .. {} to {}",
        written.len(),
        view.start,
        view.end,
        out_dir.display()
    );
    Ok(())
}

/// Write all five aggregate files into `out_dir`, returning their paths.
pub fn write_aggregates(view: &DashboardView, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(5);

    for (file, rollup) in [
        (DAILY_RENTALS_FILE, &view.daily_total),
        (DAILY_CASUAL_FILE, &view.daily_casual),
        (DAILY_REGISTERED_FILE, &view.daily_registered),
    ] {
        let path = out_dir.join(file);
        write_daily(rollup, &path)?;
        written.push(path);
    }

    let path = out_dir.join(BY_WEATHER_FILE);
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    wtr.write_record([COL_WEATHER, "label", view.by_weather.value_label])?;
    for row in &view.by_weather.rows {
        wtr.write_record([
            row.key.code().to_string(),
            row.key.display_label().to_string(),
            row.value.to_string(),
        ])?;
    }
    wtr.flush()?;
    written.push(path);

    let path = out_dir.join(BY_HOLIDAY_FILE);
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    wtr.write_record([COL_HOLIDAY, "label", view.by_holiday.value_label])?;
    for row in &view.by_holiday.rows {
        wtr.write_record([
            u8::from(row.key).to_string(),
            holiday_label(row.key).to_string(),
            row.value.to_string(),
        ])?;
    }
    wtr.flush()?;
    written.push(path);

    Ok(written)
}

fn write_daily(rollup: &DailyRollup, path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    wtr.write_record([COL_DATE, rollup.value_label])?;
    for row in &rollup.rows {
        wtr.write_record([format_date(&row.key), row.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
