//! Civil (wall-clock) date and time.
//!
//! `CivilDateTime` is the canonical input type for every chart. It carries no
//! zone; the converter decides which UTC offset the wall clock refers to.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Wall-clock date and time, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    /// Build from calendar fields, rejecting impossible dates and times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CalendarError::invalid(format!("no such date {year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| CalendarError::invalid(format!("no such time {hour:02}:{minute:02}")))?;
        Ok(Self(date.and_time(time)))
    }

    /// Parse a date (`YYYY-MM-DD`) and a time (`HH:MM` or `HH:MM:SS`).
    pub fn parse(date: &str, time: &str) -> Result<Self, CalendarError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| CalendarError::invalid(format!("date {date:?}: {e}")))?;
        let time = parse_time(time)?;
        Ok(Self(date.and_time(time)))
    }

    pub const fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Hour of day, `0..24`.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds elapsed since local midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Shift by a signed number of seconds.
    pub fn shifted_seconds(&self, seconds: i64) -> Self {
        Self(self.0 + Duration::seconds(seconds))
    }
}

fn parse_time(time: &str) -> Result<NaiveTime, CalendarError> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|e| CalendarError::invalid(format!("time {time:?}: {e}")))
}

impl FromStr for CivilDateTime {
    type Err = CalendarError;

    /// Accepts `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD HH:MM[:SS]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| CalendarError::invalid(format!("datetime {s:?}: missing time part")))?;
        Self::parse(date, time)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_and_time() {
        let dt = CivilDateTime::parse("2024-02-04", "12:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 4);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn parse_with_seconds() {
        let dt = CivilDateTime::parse("1998-07-31", "14:10:30").unwrap();
        assert_eq!(dt.seconds_of_day(), 14 * 3600 + 10 * 60 + 30);
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(matches!(
            CivilDateTime::parse("2024-13-01", "12:00"),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(CivilDateTime::parse("2023-02-29", "12:00").is_err());
        assert!(CivilDateTime::parse("yesterday", "12:00").is_err());
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(CivilDateTime::parse("2024-02-04", "24:00").is_err());
        assert!(CivilDateTime::parse("2024-02-04", "noon").is_err());
    }

    #[test]
    fn from_str_accepts_both_separators() {
        let a: CivilDateTime = "2024-02-04T12:00".parse().unwrap();
        let b: CivilDateTime = "2024-02-04 12:00:00".parse().unwrap();
        assert_eq!(a, b);
        assert!("2024-02-04".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn new_rejects_impossible_fields() {
        assert!(CivilDateTime::new(2024, 2, 30, 0, 0).is_err());
        assert!(CivilDateTime::new(2024, 2, 3, 25, 0).is_err());
    }

    #[test]
    fn shift_crosses_midnight() {
        let dt = CivilDateTime::new(2024, 2, 4, 23, 50).unwrap();
        let next = dt.shifted_seconds(20 * 60);
        assert_eq!(next.day(), 5);
        assert_eq!(next.hour(), 0);
        assert_eq!(next.minute(), 10);
    }
}
