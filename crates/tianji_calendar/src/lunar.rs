//! Lunar (lunisolar) month and day from new-moon instants.
//!
//! A lunar month runs from the civil day containing one new moon up to the
//! day before the next. Its number is named by the principal solar term it
//! contains; a month containing none repeats the previous number and is
//! flagged as leap.
//!
//! New moons use the mean lunation of Meeus ch. 49 plus its seven largest
//! periodic terms, which keeps the instant within roughly a quarter hour.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::julian::julian_day_number;
use crate::solar::{month_of_principal_term, principal_term_between, sun_apparent_longitude_deg};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

/// Mean new moon of 2000-01-06 (JDE, lunation k = 0).
const NEW_MOON_EPOCH_JD: f64 = 2_451_550.097_66;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Gregorian year in which this lunar year began.
    pub year: i32,
    /// Month number, 1..=12.
    pub month: u8,
    /// Day of month, 1..=30.
    pub day: u8,
    /// Whether this is an intercalary month.
    pub leap: bool,
}

/// Julian Date of new moon number `k` (k = 0 is January 2000).
pub fn new_moon_jd(k: i64) -> f64 {
    let k = k as f64;
    let mean = NEW_MOON_EPOCH_JD + SYNODIC_MONTH * k;
    let m = (2.5534 + 29.105_356_70 * k).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k).to_radians();
    let f = (160.7108 + 390.670_502_84 * k).to_radians();
    mean - 0.407_20 * mp.sin() + 0.172_41 * m.sin() + 0.016_08 * (2.0 * mp).sin()
        + 0.010_39 * (2.0 * f).sin()
        + 0.007_39 * (mp - m).sin()
        - 0.005_14 * (mp + m).sin()
        + 0.002_08 * (2.0 * m).sin()
}

/// Civil-day number (JDN) on which new moon `k` falls, in a zone
/// `utc_offset_hours` ahead of UTC.
fn new_moon_day(k: i64, utc_offset_hours: f64) -> i64 {
    (new_moon_jd(k) + 0.5 + utc_offset_hours / 24.0).floor() as i64
}

/// Julian Date (UT) of local midnight opening civil day `jdn`.
fn local_midnight_jd(jdn: i64, utc_offset_hours: f64) -> f64 {
    jdn as f64 - 0.5 - utc_offset_hours / 24.0
}

/// Index of the lunation whose first civil day is on or before `jdn`.
fn lunation_containing(jdn: i64, utc_offset_hours: f64) -> i64 {
    let mut k = ((jdn as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH).floor() as i64;
    while new_moon_day(k + 1, utc_offset_hours) <= jdn {
        k += 1;
    }
    while new_moon_day(k, utc_offset_hours) > jdn {
        k -= 1;
    }
    k
}

/// Month number of lunation `k`, and whether it is leap.
fn lunation_month(k: i64, utc_offset_hours: f64) -> (u8, bool) {
    // A leap month never follows another leap month, so one step back suffices;
    // the bound guards against a malformed solar series.
    for back in 0..3 {
        let start = local_midnight_jd(new_moon_day(k - back, utc_offset_hours), utc_offset_hours);
        let end = local_midnight_jd(new_moon_day(k - back + 1, utc_offset_hours), utc_offset_hours);
        let term = principal_term_between(
            sun_apparent_longitude_deg(start),
            sun_apparent_longitude_deg(end),
        );
        if let Some(lon) = term {
            return (month_of_principal_term(lon), back > 0);
        }
    }
    (month_of_principal_term(sun_apparent_longitude_deg(new_moon_jd(k))), false)
}

/// Lunar date of a civil date, with civil days bounded by local midnight.
pub fn lunar_date(date: NaiveDate, utc_offset_hours: f64) -> Result<LunarDate, CalendarError> {
    let jdn = julian_day_number(date);
    let k = lunation_containing(jdn, utc_offset_hours);
    let day = jdn - new_moon_day(k, utc_offset_hours) + 1;
    let day = u8::try_from(day)
        .ok()
        .filter(|d| (1..=30).contains(d))
        .ok_or_else(|| CalendarError::Conversion(format!("lunar day {day} out of range")))?;
    let (month, leap) = lunation_month(k, utc_offset_hours);

    // Months 11 and 12 that fall in January or February belong to the
    // previous lunar year.
    let year = if month >= 11 && date.month() <= 2 {
        date.year() - 1
    } else {
        date.year()
    };

    Ok(LunarDate {
        year,
        month,
        day,
        leap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CST: f64 = 8.0;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_moon_jan_2000() {
        // True new moon 2000-01-06 18:14 TT.
        let jd = new_moon_jd(0);
        assert!((jd - 2_451_550.26).abs() < 0.05, "jd = {jd}");
    }

    #[test]
    fn chinese_new_year_2024() {
        let d = lunar_date(date(2024, 2, 10), CST).unwrap();
        assert_eq!((d.year, d.month, d.day, d.leap), (2024, 1, 1, false));
    }

    #[test]
    fn eve_of_new_year_2024() {
        let d = lunar_date(date(2024, 2, 9), CST).unwrap();
        assert_eq!((d.year, d.month, d.day), (2023, 12, 30));
    }

    #[test]
    fn lichun_2024_is_twelfth_month_25th() {
        let d = lunar_date(date(2024, 2, 4), CST).unwrap();
        assert_eq!((d.year, d.month, d.day), (2023, 12, 25));
    }

    #[test]
    fn mid_autumn_2023() {
        let d = lunar_date(date(2023, 9, 29), CST).unwrap();
        assert_eq!((d.month, d.day, d.leap), (8, 15, false));
    }

    #[test]
    fn leap_second_month_2023() {
        // 2023 has an intercalary second month starting 2023-03-22.
        let d = lunar_date(date(2023, 4, 1), CST).unwrap();
        assert_eq!((d.month, d.day, d.leap), (2, 11, true));
    }

    #[test]
    fn days_stay_in_range_over_a_year() {
        let mut d = date(2024, 1, 1);
        for _ in 0..366 {
            let l = lunar_date(d, CST).unwrap();
            assert!((1..=30).contains(&l.day));
            assert!((1..=12).contains(&l.month));
            d = d.succ_opt().unwrap();
        }
    }
}
