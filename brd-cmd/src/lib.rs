//! Command implementations for the BRD CLI.
//!
//! Every subcommand loads the rental CSV once into an `AppContext` and runs
//! the same filter and aggregation pipeline as the dashboard.

use anyhow::Context;
use brd_core::{AppContext, DateRange};
use brd_data::DashboardView;
use brd_utils::dates::parse_date;
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod export;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print rental totals and category breakdowns for a date range
    Summary {
        /// Path to the rental CSV (UCI day.csv layout)
        #[arg(short = 'd', long)]
        data: PathBuf,

        /// First date to include (YYYY-MM-DD); defaults to the earliest date in the data
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD); defaults to the latest date in the data
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,

        /// Print the full dashboard view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write every aggregate for a date range as CSV files
    Export {
        /// Path to the rental CSV (UCI day.csv layout)
        #[arg(short = 'd', long)]
        data: PathBuf,

        /// Directory to write the aggregate CSVs into (created if missing)
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// First date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// Print the date bounds and record count of a rental CSV
    Bounds {
        /// Path to the rental CSV
        #[arg(short = 'd', long)]
        data: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            data,
            start,
            end,
            json,
        } => summary::run_summary(&data, start, end, json),
        Command::Export {
            data,
            out_dir,
            start,
            end,
        } => export::run_export(&data, &out_dir, start, end),
        Command::Bounds { data } => {
            let ctx = load_context(&data)?;
            let bounds = ctx.bounds();
            println!(
                "{} .. {} ({} records)",
                bounds.start(),
                bounds.end(),
                ctx.collection().len()
            );
            Ok(())
        }
    }
}

/// Load the rental CSV, attaching the path to any error.
pub fn load_context(path: &Path) -> anyhow::Result<AppContext> {
    AppContext::from_path(path)
        .with_context(|| format!("failed to load rental data from {}", path.display()))
}

/// Fill missing CLI bounds from the data.
pub fn resolve_range(ctx: &AppContext, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
    let bounds = ctx.bounds();
    DateRange(start.unwrap_or(bounds.start()), end.unwrap_or(bounds.end()))
}

/// Run the pipeline on the range given on the command line.
///
/// The range is used as given, not clamped: a reversed range or one outside
/// the data selects no records.
pub fn build_view(ctx: &AppContext, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DashboardView {
    let range = resolve_range(ctx, start, end);
    DashboardView::build(range, ctx.select(range))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_csv;

    #[test]
    fn test_load_context_sample() {
        let ctx = load_context(&sample_csv()).unwrap();
        assert_eq!(ctx.collection().len(), 11);
        assert_eq!(ctx.bounds().start(), NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(ctx.bounds().end(), NaiveDate::from_ymd_opt(2011, 1, 17).unwrap());
    }

    #[test]
    fn test_load_context_error_names_path() {
        let err = load_context(Path::new("/nonexistent/day.csv")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/day.csv"));
    }

    #[test]
    fn test_resolve_range_defaults_to_bounds() {
        let ctx = load_context(&sample_csv()).unwrap();
        assert_eq!(resolve_range(&ctx, None, None), ctx.bounds());
        let start = NaiveDate::from_ymd_opt(2011, 1, 5).unwrap();
        assert_eq!(resolve_range(&ctx, Some(start), None), DateRange(start, ctx.bounds().end()));
    }

    #[test]
    fn test_build_view_after_bounds_is_empty() {
        let ctx = load_context(&sample_csv()).unwrap();
        let view = build_view(
            &ctx,
            NaiveDate::from_ymd_opt(2013, 1, 1),
            NaiveDate::from_ymd_opt(2013, 2, 1),
        );
        assert!(view.is_empty());
        assert_eq!(view.metrics.total_rentals, 0);
        assert_eq!(view.start, NaiveDate::from_ymd_opt(2013, 1, 1).unwrap());
        assert!(view.daily_total.is_empty());
        assert!(view.by_weather.is_empty());
        assert!(view.by_holiday.is_empty());
    }

    #[test]
    fn test_build_view_reversed_is_empty() {
        let ctx = load_context(&sample_csv()).unwrap();
        let view = build_view(
            &ctx,
            NaiveDate::from_ymd_opt(2011, 1, 5),
            NaiveDate::from_ymd_opt(2011, 1, 2),
        );
        assert!(view.is_empty());
        assert_eq!(view.metrics.total_rentals, 0);
    }
}
