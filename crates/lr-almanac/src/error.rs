//! Error types for the almanac.

use thiserror::Error;

/// Result type for almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// Errors from calendar conversion.
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// The year falls outside the packed table (1900-2100).
    #[error("year {0} is outside the supported range 1900-2100")]
    YearOutOfRange(i32),

    /// The month is not 1-12.
    #[error("month {0} is not a lunar month number (1-12)")]
    MonthOutOfRange(u32),

    /// The civil date precedes the table epoch (1900-01-31).
    #[error("date precedes the almanac epoch (1900-01-31)")]
    BeforeEpoch,
}
