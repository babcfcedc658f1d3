//! The twelve double-hour buckets (时辰).
//!
//! Bucket 0 is 子时, spanning 23:00-01:00; a clock hour of 23 already
//! belongs to the next bucket cycle, hence the `(h + 1)` shift.

/// Earthly branch names in bucket order.
const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Clock ranges per bucket.
const TIME_RANGES: [&str; 12] = [
    "23:00-01:00",
    "01:00-03:00",
    "03:00-05:00",
    "05:00-07:00",
    "07:00-09:00",
    "09:00-11:00",
    "11:00-13:00",
    "13:00-15:00",
    "15:00-17:00",
    "17:00-19:00",
    "19:00-21:00",
    "21:00-23:00",
];

/// Map a clock hour (0-23) to its double-hour bucket (0-11).
pub fn hour_bucket(hour: u32) -> u8 {
    (((hour + 1) % 24) / 2) as u8
}

/// Earthly branch name of a bucket, e.g. `子` for bucket 0.
pub fn branch_name(bucket: u8) -> &'static str {
    BRANCH_NAMES[bucket as usize % 12]
}

/// Clock range text of a bucket, e.g. `23:00-01:00` for bucket 0.
pub fn time_range(bucket: u8) -> &'static str {
    TIME_RANGES[bucket as usize % 12]
}
