//! The in-memory record store and the date range filter.
//!
//! # CSV Format
//!
//! Delimited text with a header row. Columns are located by name, so
//! extra columns and any column order are accepted. Required columns:
//!
//! ```text
//! dteday,weathersit,holiday,casual,registered,cnt
//! 2011-01-01,2,0,331,654,985
//! ```

use crate::date_range::DateRange;
use crate::error::{LoadError, Result};
use crate::record::{CountField, RentalRecord, WeatherCategory};
use brd_utils::dates::parse_csv_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

pub const COL_DATE: &str = "dteday";
pub const COL_WEATHER: &str = "weathersit";
pub const COL_HOLIDAY: &str = "holiday";

/// Delimiters considered when sniffing the header line.
const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Ordered, read-only collection of rental records.
///
/// Records are sorted ascending by date once, at construction. Nothing
/// mutates the collection afterwards, which keeps [`filter_by_date`]
/// valid on any slice of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalCollection {
    records: Vec<RentalRecord>,
}

impl RentalCollection {
    /// Build a collection from records in any order.
    ///
    /// The sort is stable, so rows sharing a date keep their file order.
    pub fn from_records(mut records: Vec<RentalRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// Load the rental CSV at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load rental CSV data from a string (typically `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load rental CSV data from any buffered reader.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let delimiter = {
            let head = reader.fill_buf()?;
            let first_line = head.split(|b| *b == b'\n').next().unwrap_or_default();
            sniff_delimiter(first_line)
        };
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(delimiter)
            .from_reader(reader);
        parse_records(rdr)
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `[min(date), max(date)]`, or `None` for an empty collection.
    pub fn bounds(&self) -> Option<DateRange> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some(DateRange(first.date, last.date)),
            _ => None,
        }
    }

    /// Records with `range.start() <= date <= range.end()`.
    pub fn filter(&self, range: DateRange) -> &[RentalRecord] {
        filter_by_date(&self.records, range)
    }
}

/// Select the contiguous run of `records` whose date lies in `range`.
///
/// `records` must be sorted ascending by date, as every slice of a
/// [`RentalCollection`] is. The result borrows from the input and keeps its
/// order; an empty or out-of-bounds range yields an empty slice.
pub fn filter_by_date(records: &[RentalRecord], range: DateRange) -> &[RentalRecord] {
    if range.is_empty() {
        return &[];
    }
    let lo = records.partition_point(|r| r.date < range.start());
    let hi = records.partition_point(|r| r.date <= range.end());
    &records[lo..hi.max(lo)]
}

/// Pick the candidate delimiter that occurs most often in the header line.
fn sniff_delimiter(header: &[u8]) -> u8 {
    CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .max_by_key(|d| header.iter().filter(|b| *b == d).count())
        .filter(|d| header.contains(d))
        .unwrap_or(b',')
}

/// Header positions of the required columns.
struct Columns {
    date: usize,
    weather: usize,
    holiday: usize,
    casual: usize,
    registered: usize,
    total: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            date: find(COL_DATE)?,
            weather: find(COL_WEATHER)?,
            holiday: find(COL_HOLIDAY)?,
            casual: find(CountField::Casual.column())?,
            registered: find(CountField::Registered.column())?,
            total: find(CountField::Total.column())?,
        })
    }
}

fn parse_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<RentalCollection> {
    let columns = Columns::locate(rdr.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let r = result?;
        if r.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(parse_row(&r, row, &columns)?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let collection = RentalCollection::from_records(records);
    if let Some(bounds) = collection.bounds() {
        log::info!(
            "[BRD] loader: Loaded {} rental records from {} to {}",
            collection.len(),
            bounds.start(),
            bounds.end()
        );
    }
    Ok(collection)
}

fn parse_row(r: &StringRecord, row: usize, columns: &Columns) -> Result<RentalRecord> {
    let field = |idx: usize, column: &'static str| {
        r.get(idx)
            .filter(|s| !s.is_empty())
            .ok_or(LoadError::MissingValue { row, column })
    };
    let number = |idx: usize, column: &'static str| -> Result<u32> {
        let value = field(idx, column)?;
        value.parse::<u32>().map_err(|_| LoadError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        })
    };
    let code = |idx: usize, column: &'static str| -> Result<u8> {
        let value = field(idx, column)?;
        value.parse::<u8>().map_err(|_| LoadError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        })
    };

    let date_str = field(columns.date, COL_DATE)?;
    let date = parse_csv_date(date_str).ok_or_else(|| LoadError::DateParse {
        row,
        value: date_str.to_string(),
    })?;

    let weather_code = code(columns.weather, COL_WEATHER)?;
    let weather_category = WeatherCategory::from_code(weather_code)
        .ok_or(LoadError::UnknownWeatherCode { row, code: weather_code })?;

    let is_holiday = match code(columns.holiday, COL_HOLIDAY)? {
        0 => false,
        1 => true,
        value => return Err(LoadError::InvalidHolidayFlag { row, value }),
    };

    let casual = number(columns.casual, CountField::Casual.column())?;
    let registered = number(columns.registered, CountField::Registered.column())?;
    let total = number(columns.total, CountField::Total.column())?;

    RentalRecord::new(date, weather_category, is_holiday, casual, registered)
        .filter(|record| record.total_count == total)
        .ok_or(LoadError::CountMismatch {
            row,
            total,
            casual,
            registered,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const DAY_CSV: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,120,1229,1349
17,2011-01-17,1,0,1,1,1,0,2,0.175833,0.176771,0.5375,0.194017,117,883,1000
";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, cnt: u32) -> RentalRecord {
        RentalRecord::new(date, WeatherCategory::Clear, false, 0, cnt).unwrap()
    }

    #[test]
    fn test_load_day_csv() {
        let collection = RentalCollection::from_csv_str(DAY_CSV).unwrap();
        assert_eq!(collection.len(), 4);
        let first = &collection.records()[0];
        assert_eq!(first.date, ymd(2011, 1, 1));
        assert_eq!(first.weather_category, WeatherCategory::Misty);
        assert!(!first.is_holiday);
        assert_eq!(
            (first.casual_count, first.registered_count, first.total_count),
            (331, 654, 985)
        );
        assert!(collection.records()[3].is_holiday);
        assert_eq!(
            collection.bounds(),
            Some(DateRange(ymd(2011, 1, 1), ymd(2011, 1, 17)))
        );
    }

    #[test]
    fn test_load_sorts_by_date() {
        let csv = "dteday,weathersit,holiday,casual,registered,cnt
2011-01-03,1,0,1,2,3
2011-01-01,1,0,4,5,9
2011-01-02,1,0,6,7,13
";
        let collection = RentalCollection::from_csv_str(csv).unwrap();
        let dates: Vec<NaiveDate> = collection.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![ymd(2011, 1, 1), ymd(2011, 1, 2), ymd(2011, 1, 3)]);
    }

    #[test]
    fn test_load_semicolon_delimited() {
        let csv = "dteday;weathersit;holiday;casual;registered;cnt\n2011-01-01;3;1;10;20;30\n";
        let collection = RentalCollection::from_csv_str(csv).unwrap();
        assert_eq!(collection.records()[0].weather_category, WeatherCategory::LightSnowOrRain);
        assert_eq!(collection.records()[0].total_count, 30);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "dteday,weathersit,holiday,casual,registered\n2011-01-01,1,0,1,2\n";
        let err = RentalCollection::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("cnt")));
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let csv = "dteday,weathersit,holiday,casual,registered,cnt\n2011-13-01,1,0,1,2,3\n";
        let err = RentalCollection::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, LoadError::DateParse { row: 1, .. }));
    }

    #[test]
    fn test_bad_values_are_fatal() {
        let header = "dteday,weathersit,holiday,casual,registered,cnt\n";

        let err = RentalCollection::from_csv_str(&format!("{header}2011-01-01,4,0,1,2,3\n")).unwrap_err();
        assert!(matches!(err, LoadError::UnknownWeatherCode { row: 1, code: 4 }));

        let err = RentalCollection::from_csv_str(&format!("{header}2011-01-01,1,2,1,2,3\n")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidHolidayFlag { row: 1, value: 2 }));

        let err = RentalCollection::from_csv_str(&format!("{header}2011-01-01,1,0,-1,2,1\n")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { column: "casual", .. }));

        let err = RentalCollection::from_csv_str(&format!("{header}2011-01-01,1,0,1,,3\n")).unwrap_err();
        assert!(matches!(err, LoadError::MissingValue { column: "registered", .. }));
    }

    #[test]
    fn test_count_mismatch_is_fatal() {
        let csv = "dteday,weathersit,holiday,casual,registered,cnt
2011-01-01,1,0,1,2,3
2011-01-02,1,0,1,2,4
";
        let err = RentalCollection::from_csv_str(csv).unwrap_err();
        assert!(matches!(
            err,
            LoadError::CountMismatch { row: 2, total: 4, casual: 1, registered: 2 }
        ));
    }

    #[test]
    fn test_count_overflow_is_mismatch() {
        let csv = "dteday,weathersit,holiday,casual,registered,cnt\n2011-01-01,1,0,4294967295,1,0\n";
        let err = RentalCollection::from_csv_str(csv).unwrap_err();
        assert!(matches!(
            err,
            LoadError::CountMismatch { row: 1, total: 0, casual: u32::MAX, registered: 1 }
        ));
    }

    #[test]
    fn test_hour_layout_shares_dates() {
        let csv = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16
2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40
3,2011-01-02,1,0,1,0,0,0,0,2,0.46,0.4545,0.88,0.2985,4,13,17
";
        let collection = RentalCollection::from_csv_str(csv).unwrap();
        assert_eq!(collection.len(), 3);
        let day = ymd(2011, 1, 1);
        assert_eq!(collection.filter(DateRange(day, day)).len(), 2);
    }

    #[test]
    fn test_hour_layout_heavy_rain_is_rejected() {
        // The UCI hourly file has a few `weathersit = 4` rows; only 1..=3 are accepted.
        let csv = "instant,dteday,hr,holiday,weathersit,casual,registered,cnt
1,2011-01-01,0,0,1,3,13,16
2,2011-01-26,16,0,4,1,35,36
";
        let err = RentalCollection::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, LoadError::UnknownWeatherCode { row: 2, code: 4 }));
    }

    #[test]
    fn test_header_only_is_empty_error() {
        let csv = "dteday,weathersit,holiday,casual,registered,cnt\n";
        assert!(matches!(
            RentalCollection::from_csv_str(csv).unwrap_err(),
            LoadError::Empty
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RentalCollection::from_path("/nonexistent/day.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_filter_inclusive_and_ordered() {
        let collection = RentalCollection::from_records(vec![
            record(ymd(2011, 1, 1), 1),
            record(ymd(2011, 1, 2), 2),
            record(ymd(2011, 1, 2), 3),
            record(ymd(2011, 1, 3), 4),
            record(ymd(2011, 1, 5), 5),
        ]);
        let filtered = collection.filter(DateRange(ymd(2011, 1, 2), ymd(2011, 1, 3)));
        let counts: Vec<u32> = filtered.iter().map(|r| r.total_count).collect();
        assert_eq!(counts, vec![2, 3, 4]);
    }

    #[test]
    fn test_filter_single_day() {
        let collection = RentalCollection::from_records(vec![
            record(ymd(2011, 1, 1), 1),
            record(ymd(2011, 1, 2), 2),
            record(ymd(2011, 1, 2), 3),
            record(ymd(2011, 1, 3), 4),
        ]);
        let day = ymd(2011, 1, 2);
        let filtered = collection.filter(DateRange(day, day));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.date == day));
    }

    #[test]
    fn test_filter_outside_bounds_is_empty() {
        let collection = RentalCollection::from_records(vec![
            record(ymd(2011, 1, 1), 1),
            record(ymd(2011, 1, 2), 2),
        ]);
        assert!(collection.filter(DateRange(ymd(2010, 1, 1), ymd(2010, 12, 31))).is_empty());
        assert!(collection.filter(DateRange(ymd(2011, 2, 1), ymd(2011, 2, 28))).is_empty());
        assert!(collection.filter(DateRange(ymd(2011, 1, 2), ymd(2011, 1, 1))).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let collection = RentalCollection::from_records(
            DateRange(ymd(2011, 1, 1), ymd(2011, 3, 31))
                .enumerate()
                .map(|(i, d)| record(d, i as u32))
                .collect(),
        );
        let inner = DateRange(ymd(2011, 2, 1), ymd(2011, 2, 28));
        let once = collection.filter(inner);
        let outer = DateRange(ymd(2011, 1, 15), ymd(2011, 3, 15));
        assert_eq!(filter_by_date(once, outer), once);
        assert_eq!(filter_by_date(once, inner), once);
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter(b"a,b,c"), b',');
        assert_eq!(sniff_delimiter(b"a;b;c"), b';');
        assert_eq!(sniff_delimiter(b"a\tb\tc"), b'\t');
        assert_eq!(sniff_delimiter(b"abc"), b',');
    }
}
