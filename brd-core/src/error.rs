/// Error types for loading rental data
use thiserror::Error;

/// Fatal errors raised while loading the rental CSV.
///
/// Row numbers are 1-based data rows (the header is not counted).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to open or read the input file
    #[error("Failed to read rental data: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A row has no value for a required column
    #[error("Row {row}: missing value for column {column}")]
    MissingValue { row: usize, column: &'static str },

    /// Date parsing failed
    #[error("Row {row}: failed to parse date {value:?}")]
    DateParse { row: usize, value: String },

    /// A count or code column is not a non-negative integer
    #[error("Row {row}: invalid number {value:?} in column {column}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// `weathersit` is outside the known categories
    #[error("Row {row}: unknown weather code {code}")]
    UnknownWeatherCode { row: usize, code: u8 },

    /// `holiday` is not 0 or 1
    #[error("Row {row}: holiday flag must be 0 or 1, got {value}")]
    InvalidHolidayFlag { row: usize, value: u8 },

    /// `cnt` disagrees with `casual + registered`
    #[error("Row {row}: cnt {total} != casual {casual} + registered {registered}")]
    CountMismatch {
        row: usize,
        total: u32,
        casual: u32,
        registered: u32,
    },

    /// The file has a header but no data rows
    #[error("No rental records found")]
    Empty,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
