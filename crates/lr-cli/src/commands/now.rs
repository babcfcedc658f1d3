use std::path::Path;

use chrono::{Local, Timelike};

use lr_almanac::{LunarDate, branch_name, hour_bucket, time_range};
use lr_core::{DivinationRecord, ElementOverrides, RecordMeta, ThreePalaces, TimeInfo};

pub fn run(
    query: Option<String>,
    no_save: bool,
    overrides: &ElementOverrides,
    db: &Path,
    passphrase: &str,
) -> Result<(), String> {
    let now = Local::now();
    let lunar = LunarDate::from_solar(now.date_naive()).map_err(|e| e.to_string())?;
    let bucket = hour_bucket(now.hour());

    let palaces = ThreePalaces::from_calendar(
        i64::from(lunar.month),
        i64::from(lunar.day),
        i64::from(bucket),
        overrides,
    );

    println!(
        "  {} {}时 ({})",
        lunar.display_text(),
        branch_name(bucket),
        time_range(bucket)
    );

    let record = DivinationRecord::assemble(
        palaces,
        RecordMeta {
            time_based: true,
            time_info: Some(TimeInfo {
                lunar_date: lunar.display_text(),
                hour_bucket: bucket,
                lunar_month: Some(lunar.month),
            }),
            numbers: None,
            query,
        },
    );

    super::finish(&record, no_save, db, passphrase)
}
