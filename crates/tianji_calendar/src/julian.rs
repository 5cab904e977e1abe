//! Julian day numbers for civil dates.

use chrono::{Datelike, NaiveDate};

use crate::civil::CivilDateTime;

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Offset between chrono's day count from 0001-01-01 (day 1) and the JDN.
const CE_TO_JDN: i64 = 1_721_425;

/// Julian day number of a Gregorian date (the JD at noon of that date).
pub fn julian_day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + CE_TO_JDN
}

/// Gregorian date of a Julian day number.
pub fn date_from_jdn(jdn: i64) -> Option<NaiveDate> {
    i32::try_from(jdn - CE_TO_JDN)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Julian Date (UT) of a wall-clock instant in a zone `utc_offset_hours`
/// ahead of UTC.
pub fn civil_to_jd(at: &CivilDateTime, utc_offset_hours: f64) -> f64 {
    let jdn = julian_day_number(at.date()) as f64;
    jdn - 0.5 + at.seconds_of_day() as f64 / 86_400.0 - utc_offset_hours / 24.0
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_date() {
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day_number(d), 2_451_545);
    }

    #[test]
    fn gregorian_reform_boundary() {
        let d = NaiveDate::from_ymd_opt(1582, 10, 15).unwrap();
        assert_eq!(julian_day_number(d), 2_299_161);
    }

    #[test]
    fn jdn_round_trip() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap();
        assert_eq!(date_from_jdn(julian_day_number(d)), Some(d));
    }

    #[test]
    fn civil_noon_utc_is_integral() {
        let at = CivilDateTime::new(2000, 1, 1, 12, 0).unwrap();
        assert!((civil_to_jd(&at, 0.0) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn civil_with_offset() {
        // 20:00 at UTC+8 is 12:00 UTC.
        let at = CivilDateTime::new(2000, 1, 1, 20, 0).unwrap();
        assert!((civil_to_jd(&at, 8.0) - J2000_JD).abs() < 1e-9);
    }
}
