//! Shared utility functions for bike rental dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Canonical date format used by the date picker, the CLI and D3.js.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Date formats accepted in the `dteday` column, tried in order.
    pub const CSV_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

    /// Datetime formats accepted in the `dteday` column; the time part is dropped.
    pub const CSV_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)?)
    }

    /// Parse a `dteday` cell. Accepts the formats in [`CSV_DATE_FORMATS`]
    /// and, failing those, a full datetime truncated to its date.
    pub fn parse_csv_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        CSV_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                CSV_DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2011, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2011-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_rejects_other_layouts() {
            assert!(parse_date("06/15/2011").is_err());
            assert!(parse_date("").is_err());
        }

        #[test]
        fn test_parse_csv_date_formats() {
            let expected = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();
            assert_eq!(parse_csv_date("2012-02-29"), Some(expected));
            assert_eq!(parse_csv_date("2012/02/29"), Some(expected));
            assert_eq!(parse_csv_date("02/29/2012"), Some(expected));
            assert_eq!(parse_csv_date(" 2012-02-29 00:00:00 "), Some(expected));
        }

        #[test]
        fn test_parse_csv_date_invalid() {
            assert_eq!(parse_csv_date("2011-02-29"), None);
            assert_eq!(parse_csv_date("yesterday"), None);
        }
    }
}

/// Number formatting for metric cards and reports
pub mod numbers {
    /// Format a count with comma thousands separators, e.g. `3292679` -> `"3,292,679"`.
    pub fn format_count(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format an average with two decimals and thousands separators.
    pub fn format_average(value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        let whole = rounded.trunc() as u64;
        let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;
        format!("{}.{:02}", format_count(whole), cents)
    }

}
