//! Lunar dates and civil-to-lunar conversion.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};
use crate::table::{self, FIRST_YEAR, LAST_YEAR};

/// Chinese month names, 1-indexed (正月 through 腊月).
const MONTH_NAMES: [&str; 13] = [
    "", "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

/// Day-of-month names for 初一 through 三十.
const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DAY_ONES: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Table epoch: 1900-01-31 is lunar 1900-01-01. Checked at compile time.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 31) {
    Some(d) => d,
    None => panic!("invalid epoch date"),
};

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year (aligned to the new year, not the civil year).
    pub year: i32,
    /// Lunar month, 1-12.
    pub month: u32,
    /// Lunar day, 1-30.
    pub day: u32,
    /// Whether this falls in the year's leap month.
    pub leap: bool,
}

impl LunarDate {
    /// Convert a civil date to its lunar date.
    ///
    /// Walks day counts from the table epoch (1900-01-31 = lunar 1900-01-01),
    /// inserting the leap month after its ordinal month.
    pub fn from_solar(date: NaiveDate) -> AlmanacResult<Self> {
        let mut offset = (date - EPOCH).num_days();
        if offset < 0 {
            return Err(AlmanacError::BeforeEpoch);
        }

        let mut year = FIRST_YEAR;
        loop {
            if year > LAST_YEAR {
                return Err(AlmanacError::YearOutOfRange(date.year()));
            }
            let days = i64::from(table::year_days(year)?);
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let leap_month = table::leap_month(year)?;
        let mut month = 1;
        let mut leap = false;
        loop {
            let days = if leap {
                i64::from(table::leap_month_days(year)?)
            } else {
                i64::from(table::month_days(year, month)?)
            };
            if offset < days {
                break;
            }
            offset -= days;
            if leap {
                // Leave the leap month; resume regular counting.
                leap = false;
                month += 1;
            } else if leap_month == Some(month) {
                leap = true;
            } else {
                month += 1;
            }
        }

        Ok(Self {
            year,
            month,
            day: offset as u32 + 1,
            leap,
        })
    }

    /// Chinese month name, e.g. `正月` or `闰六月`.
    pub fn month_name(&self) -> String {
        month_name(self.month, self.leap)
    }

    /// Chinese day name, e.g. `初一`, `十五`, `廿三`, `三十`.
    pub fn day_name(&self) -> String {
        day_name(self.day)
    }

    /// Full display text, e.g. `正月初一`.
    pub fn display_text(&self) -> String {
        format!("{}{}", self.month_name(), self.day_name())
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

/// Chinese name of a lunar month (1-12), with 闰 prefix for leap months.
pub fn month_name(month: u32, leap: bool) -> String {
    let prefix = if leap { "闰" } else { "" };
    if (1..=12).contains(&month) {
        format!("{prefix}{}月", MONTH_NAMES[month as usize])
    } else {
        format!("{month}月")
    }
}

/// Chinese name of a lunar day (1-30).
pub fn day_name(day: u32) -> String {
    match day {
        1..=10 => format!("初{}", DAY_ONES[day as usize % 10]),
        20 => "二十".to_string(),
        30 => "三十".to_string(),
        11..=29 => format!(
            "{}{}",
            DAY_TENS[day as usize / 10],
            DAY_ONES[day as usize % 10]
        ),
        _ => day.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_lunar_new_year_1900() {
        let l = LunarDate::from_solar(solar(1900, 1, 31)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.leap), (1900, 1, 1, false));
    }

    #[test]
    fn millennium_new_year() {
        // Chinese New Year 2000 fell on February 5.
        let l = LunarDate::from_solar(solar(2000, 2, 5)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.leap), (2000, 1, 1, false));
        // The day before is the last day of the previous lunar year.
        let prev = LunarDate::from_solar(solar(2000, 2, 4)).unwrap();
        assert_eq!(prev.year, 1999);
        assert_eq!(prev.month, 12);
    }

    #[test]
    fn recent_new_years() {
        let l = LunarDate::from_solar(solar(2024, 2, 10)).unwrap();
        assert_eq!((l.year, l.month, l.day), (2024, 1, 1));
        let l = LunarDate::from_solar(solar(2023, 1, 22)).unwrap();
        assert_eq!((l.year, l.month, l.day), (2023, 1, 1));
        let l = LunarDate::from_solar(solar(2025, 1, 29)).unwrap();
        assert_eq!((l.year, l.month, l.day), (2025, 1, 1));
    }

    #[test]
    fn dragon_boat_festival_2024() {
        // Lunar 5/5 fell on June 10, 2024.
        let l = LunarDate::from_solar(solar(2024, 6, 10)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.leap), (2024, 5, 5, false));
    }

    #[test]
    fn leap_month_is_flagged() {
        // 2023 had a leap second month. Regular month 2 of 2023 began
        // 2023-02-20; it has 30 days, so the leap month begins 30 days later
        // on 2023-03-22.
        let l = LunarDate::from_solar(solar(2023, 3, 22)).unwrap();
        assert_eq!((l.month, l.day, l.leap), (2, 1, true));
        let before = LunarDate::from_solar(solar(2023, 3, 21)).unwrap();
        assert!(!before.leap);
        assert_eq!(before.month, 2);
    }

    #[test]
    fn dates_before_the_epoch_error() {
        assert!(matches!(
            LunarDate::from_solar(solar(1900, 1, 30)),
            Err(AlmanacError::BeforeEpoch)
        ));
    }

    #[test]
    fn conversion_is_monotone_within_a_month() {
        // Consecutive civil days never decrease the lunar day except at a
        // month boundary, where it resets to 1.
        let mut prev = LunarDate::from_solar(solar(2024, 3, 1)).unwrap();
        for d in 2..=31 {
            let cur = LunarDate::from_solar(solar(2024, 3, d)).unwrap();
            if cur.day != 1 {
                assert_eq!(cur.day, prev.day + 1);
            }
            prev = cur;
        }
    }

    #[test]
    fn month_names_follow_tradition() {
        assert_eq!(month_name(1, false), "正月");
        assert_eq!(month_name(6, true), "闰六月");
        assert_eq!(month_name(11, false), "冬月");
        assert_eq!(month_name(12, false), "腊月");
    }

    #[test]
    fn day_names_follow_tradition() {
        assert_eq!(day_name(1), "初一");
        assert_eq!(day_name(10), "初十");
        assert_eq!(day_name(11), "十一");
        assert_eq!(day_name(15), "十五");
        assert_eq!(day_name(20), "二十");
        assert_eq!(day_name(21), "廿一");
        assert_eq!(day_name(29), "廿九");
        assert_eq!(day_name(30), "三十");
    }

    #[test]
    fn display_text_combines_month_and_day() {
        let l = LunarDate {
            year: 2024,
            month: 1,
            day: 1,
            leap: false,
        };
        assert_eq!(l.display_text(), "正月初一");
    }

    #[test]
    fn serde_roundtrip() {
        let l = LunarDate::from_solar(solar(2024, 6, 10)).unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: LunarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(l, back);
    }
}
