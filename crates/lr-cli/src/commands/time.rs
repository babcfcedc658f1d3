use std::path::Path;

use colored::Colorize;

use lr_almanac::lunar::{day_name, month_name};
use lr_almanac::month_days;
use lr_core::{DivinationRecord, ElementOverrides, RecordMeta, ThreePalaces, TimeInfo};

#[allow(clippy::too_many_arguments)]
pub fn run(
    month: i64,
    day: i64,
    hour: i64,
    year: Option<i32>,
    query: Option<String>,
    no_save: bool,
    overrides: &ElementOverrides,
    db: &Path,
    passphrase: &str,
) -> Result<(), String> {
    // With a year we can check the day against the actual month length;
    // the calculation still proceeds either way, wrapping as it always does.
    // Years outside the almanac table fall back to the longest month.
    if let Some(year) = year {
        if let (Ok(m @ 1..=12), Ok(d)) = (u32::try_from(month), u32::try_from(day)) {
            let days = month_days(year, m).unwrap_or(30);
            if d > days {
                eprintln!(
                    "{}",
                    format!("note: lunar {year}-{month} has only {days} days").yellow()
                );
            }
        }
    }

    let palaces = ThreePalaces::from_calendar(month, day, hour, overrides);

    let lunar_date = match (u32::try_from(month), u32::try_from(day)) {
        (Ok(m), Ok(d)) if (1..=12).contains(&m) && (1..=30).contains(&d) => {
            format!("{}{}", month_name(m, false), day_name(d))
        }
        _ => format!("{month}月{day}日"),
    };

    let record = DivinationRecord::assemble(
        palaces,
        RecordMeta {
            time_based: true,
            time_info: Some(TimeInfo {
                lunar_date,
                hour_bucket: hour.rem_euclid(12) as u8,
                lunar_month: u32::try_from(month).ok(),
            }),
            numbers: None,
            query,
        },
    );

    super::finish(&record, no_save, db, passphrase)
}
