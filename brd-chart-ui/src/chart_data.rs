//! Conversion of aggregate results into the JSON arrays the D3 scripts read.

use brd_data::models::{Bar, DailyRollup};
use brd_utils::dates::format_date;
use serde::Serialize;
use serde_json::{json, Value};

/// Upper bound on line chart points; above it the series is thinned.
pub const MAX_LINE_POINTS: usize = 2000;

/// Keep roughly `max_points` evenly spaced points, always including the last one.
pub fn downsample<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if points.len() <= max_points || max_points == 0 {
        return points.to_vec();
    }
    let step = points.len() as f64 / max_points as f64;
    let mut result = Vec::with_capacity(max_points + 1);
    let mut idx = 0.0;
    let mut last_taken = 0;
    while (idx as usize) < points.len() {
        last_taken = idx as usize;
        result.push(points[last_taken].clone());
        idx += step;
    }
    if last_taken != points.len() - 1 {
        if let Some(last) = points.last() {
            result.push(last.clone());
        }
    }
    result
}

/// `[{"date": "YYYY-MM-DD", "value": n}, ...]` for the daily line chart.
pub fn line_chart_data(rollup: &DailyRollup) -> Vec<Value> {
    let points: Vec<Value> = rollup
        .rows
        .iter()
        .map(|row| {
            json!({
                "date": format_date(&row.key),
                "value": row.value,
            })
        })
        .collect();
    downsample(&points, MAX_LINE_POINTS)
}

/// `[{"label": "...", "value": n}, ...]` for a category bar chart, in bar order.
pub fn bar_chart_data<V: Serialize>(bars: &[Bar<V>]) -> Vec<Value> {
    bars.iter()
        .map(|bar| {
            json!({
                "label": bar.label,
                "value": bar.value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brd_data::models::{AggregateRow, Rollup};
    use chrono::NaiveDate;

    #[test]
    fn test_downsample_short_series_untouched() {
        let points: Vec<u32> = (0..10).collect();
        assert_eq!(downsample(&points, 20), points);
    }

    #[test]
    fn test_downsample_keeps_first_and_last() {
        let points: Vec<u32> = (0..5001).collect();
        let thinned = downsample(&points, 2000);
        assert!(thinned.len() <= 2001);
        assert_eq!(thinned.first(), Some(&0));
        assert_eq!(thinned.last(), Some(&5000));
        assert!(thinned.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_line_chart_data() {
        let rollup = Rollup::new(
            "rental_count",
            vec![AggregateRow {
                key: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                value: 985u64,
            }],
        );
        let data = line_chart_data(&rollup);
        assert_eq!(data, vec![json!({"date": "2011-01-01", "value": 985})]);
    }

    #[test]
    fn test_bar_chart_data_keeps_order() {
        let bars = vec![
            Bar { label: "Hari Kerja", value: 4330.5 },
            Bar { label: "Hari Libur", value: 3735.0 },
        ];
        let data = bar_chart_data(&bars);
        assert_eq!(data[0]["label"], "Hari Kerja");
        assert_eq!(data[1]["value"], 3735.0);
    }
}
