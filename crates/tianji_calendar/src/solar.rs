//! Low-precision apparent solar longitude and solar-term sectors.
//!
//! The 24 solar terms sit at multiples of 15° of apparent solar longitude.
//! The twelve "sectional" terms (節) at 315° + 30°·k open the solar months;
//! the twelve "principal" terms (中氣) at 30°·k decide lunar month numbers.
//!
//! Longitude follows the short solar series (mean longitude plus equation of
//! centre, aberration and a one-term nutation), good to about 0.01°, i.e. a
//! quarter of an hour on term boundaries. Sources: Meeus, *Astronomical
//! Algorithms*, 2nd ed., ch. 25. Public domain formulas.

use crate::julian::jd_to_centuries;

/// Apparent geocentric ecliptic longitude of the Sun in degrees, `[0, 360)`.
pub fn sun_apparent_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let t2 = t * t;

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();

    let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();
    apparent.rem_euclid(360.0)
}

/// Solar-month sector of a longitude: 0 for the month opened by 立春 (315°),
/// 11 for the month opened by 小寒 (285°).
pub fn solar_month_sector(longitude_deg: f64) -> u8 {
    let from_lichun = (longitude_deg - 315.0).rem_euclid(360.0);
    ((from_lichun / 30.0).floor() as u8).min(11)
}

/// Lunar month number (1..=12) named by a principal term at `longitude_deg`
/// (a multiple of 30°): 雨水 330° → 1, 春分 0° → 2, 冬至 270° → 11.
pub fn month_of_principal_term(longitude_deg: f64) -> u8 {
    let k = (longitude_deg.rem_euclid(360.0) / 30.0).round() as u8 % 12;
    (k + 1) % 12 + 1
}

/// The first principal term crossed in `[start, end)` of solar longitude,
/// where `end` may have wrapped past 360°.
pub fn principal_term_between(start_deg: f64, end_deg: f64) -> Option<f64> {
    let start = start_deg.rem_euclid(360.0);
    let mut end = end_deg.rem_euclid(360.0);
    if end < start {
        end += 360.0;
    }
    let term = (start / 30.0).ceil() * 30.0;
    (term < end).then(|| term.rem_euclid(360.0))
}
