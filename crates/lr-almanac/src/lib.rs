//! Chinese lunisolar calendar support.
//!
//! Converts civil (Gregorian) dates to lunar dates, reports lunar month
//! lengths and leap months, and maps clock hours to the twelve double-hour
//! buckets. Covers 1900 through 2100 via a packed month-length table.

pub mod error;
pub mod hours;
pub mod lunar;
pub mod table;

pub use error::{AlmanacError, AlmanacResult};
pub use hours::{branch_name, hour_bucket, time_range};
pub use lunar::LunarDate;
pub use table::{leap_month, month_days};
