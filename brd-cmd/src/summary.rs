//! `summary`: metrics plus weather and holiday tables, or the whole view as JSON.

use crate::{build_view, load_context};
use brd_data::DashboardView;
use brd_utils::numbers::{format_average, format_count};
use chrono::NaiveDate;
use log::info;
use std::io::{self, Write};
use std::path::Path;

pub fn run_summary(
    data: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = load_context(data)?;
    let view = build_view(&ctx, start, end);
    info!(
        "Summarised {} records from {} to {}",
        view.record_count, view.start, view.end
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    } else {
        write_summary(&view, &mut out)?;
    }
    Ok(())
}

/// Human-readable report of one dashboard view.
pub fn write_summary<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    writeln!(out, "Bike Rental Dashboard: {} .. {}", view.start, view.end)?;
    writeln!(out)?;
    writeln!(out, "{:<18}{:>12}", "Total Rentals", format_count(view.metrics.total_rentals))?;
    writeln!(out, "{:<18}{:>12}", "Total Casual", format_count(view.metrics.total_casual))?;
    writeln!(out, "{:<18}{:>12}", "Total Registered", format_count(view.metrics.total_registered))?;

    if view.is_empty() {
        writeln!(out)?;
        writeln!(out, "No rentals in the selected date range.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Rental by Weather Situation")?;
    for bar in &view.weather_bars {
        writeln!(out, "  {:<16}{:>12}", bar.label, format_count(bar.value))?;
    }

    writeln!(out)?;
    writeln!(out, "Average Rental Holiday or Not")?;
    for bar in &view.holiday_bars {
        writeln!(out, "  {:<16}{:>12}", bar.label, format_average(bar.value))?;
    }
    Ok(())
}
