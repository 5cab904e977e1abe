//! Civil time → sexagenary pillars and lunar date.
//!
//! [`CalendarConverter`] is the seam behind which any solar/lunar conversion
//! service can sit. [`MeanCycleConverter`] is the in-process reference
//! implementation:
//!
//! - Day pillar: exact, from the Julian day number (`(JDN + 49) mod 60`).
//! - Year pillar: switches at 立春 (apparent solar longitude 315°).
//! - Month pillar: solar-month sector from apparent longitude; stem by the
//!   five-tigers rule (year stem group → stem of the 寅 month).
//! - Hour pillar: two-hour branch slot; stem by the five-rats rule (day stem
//!   group → stem of the 子 hour).
//! - Lunar date: new moons plus principal terms (see [`crate::lunar`]).
//!
//! Solar-term instants come from a short solar series, so births within a
//! quarter hour of a term boundary may land in the neighbouring month.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tianji_cycle::{Branch, Pillar, Stem, wrap10};

use crate::civil::CivilDateTime;
use crate::error::CalendarError;
use crate::julian::{civil_to_jd, julian_day_number};
use crate::lunar::{LunarDate, lunar_date};
use crate::solar::{solar_month_sector, sun_apparent_longitude_deg};

/// Offset such that `(JDN + 49) mod 60` is the day's position in the 60-cycle.
const DAY_CYCLE_OFFSET: i64 = 49;

/// How the late Zi hour (23:00–23:59) is assigned to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiHourMode {
    /// The day pillar stays on the civil day; only the hour stem looks ahead.
    #[default]
    Modern,
    /// The day pillar already belongs to the next day from 23:00.
    Traditional,
}

/// Calendar coordinates of one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarSexagenary {
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    /// Pillar of the lunar year (begins at the lunar new year, not 立春).
    pub lunar_year_pillar: Pillar,
    pub lunar: LunarDate,
    /// Two-hour slot index in `[0, 12)`, 0 = Zi.
    pub hour_index: u8,
    /// Wall clock after solar-time correction.
    pub solar_time: CivilDateTime,
}

impl LunarSexagenary {
    /// Stem of the lunar year.
    pub const fn year_stem(&self) -> Stem {
        self.lunar_year_pillar.stem
    }

    /// The four pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [
            self.year_pillar,
            self.month_pillar,
            self.day_pillar,
            self.hour_pillar,
        ]
    }
}

/// Converts a civil timestamp into calendar coordinates.
pub trait CalendarConverter: Send + Sync {
    /// Convert `at`, optionally correcting to local solar time at
    /// `longitude_deg` (east positive).
    fn convert(
        &self,
        at: &CivilDateTime,
        longitude_deg: Option<f64>,
    ) -> Result<LunarSexagenary, CalendarError>;
}

/// Configuration for [`MeanCycleConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Hours the wall clock runs ahead of UTC.
    pub utc_offset_hours: f64,
    /// Longitude whose mean solar time the wall clock keeps.
    pub standard_meridian_deg: f64,
    /// Whether to shift the clock to local mean solar time when a longitude
    /// is supplied.
    pub apply_solar_time: bool,
    pub zi_hour_mode: ZiHourMode,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 8.0,
            standard_meridian_deg: 120.0,
            apply_solar_time: true,
            zi_hour_mode: ZiHourMode::Modern,
        }
    }
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(-12.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(CalendarError::InvalidConfig(
                "utc_offset_hours must be within [-12, 14]",
            ));
        }
        if !(-180.0..=180.0).contains(&self.standard_meridian_deg) {
            return Err(CalendarError::InvalidConfig(
                "standard_meridian_deg must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}

/// Reference converter built on the exact day count and short solar/lunar
/// series.
#[derive(Debug, Clone, Default)]
pub struct MeanCycleConverter {
    config: ConverterConfig,
}

impl MeanCycleConverter {
    pub fn new(config: ConverterConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Wall clock shifted to local mean solar time.
    ///
    /// Each degree east of the standard meridian adds four minutes.
    pub fn solar_time(
        &self,
        at: &CivilDateTime,
        longitude_deg: Option<f64>,
    ) -> Result<CivilDateTime, CalendarError> {
        match longitude_deg {
            None => Ok(*at),
            Some(lon) if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) => Err(
                CalendarError::InvalidInput(format!("longitude {lon} outside [-180, 180]")),
            ),
            Some(_) if !self.config.apply_solar_time => Ok(*at),
            Some(lon) => {
                let seconds = ((lon - self.config.standard_meridian_deg) * 240.0).round() as i64;
                Ok(at.shifted_seconds(seconds))
            }
        }
    }
}

/// Day pillar of a civil date.
pub fn day_pillar(date: chrono::NaiveDate) -> Pillar {
    let jdn = julian_day_number(date);
    Pillar::from_cycle_index(((jdn + DAY_CYCLE_OFFSET).rem_euclid(60)) as i32)
}

/// Pillar of a Gregorian year counted from 甲子 = 1984 (also 4 CE).
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(year - 4)
}

/// Month pillar for a solar-month sector (0 = 寅 month) in a year with
/// stem `year_stem`.
///
/// Five tigers: 甲己 → 丙寅, 乙庚 → 戊寅, 丙辛 → 庚寅, 丁壬 → 壬寅, 戊癸 → 甲寅.
pub fn month_pillar(year_stem: Stem, sector: u8) -> Pillar {
    let tiger_stem = wrap10((year_stem.index() % 5) as i32 * 2 + 2);
    Pillar {
        stem: Stem::from_index(tiger_stem as i32 + sector as i32),
        branch: Branch::from_index(2 + sector as i32),
    }
}

/// Hour pillar for a branch slot on a day with stem `day_stem`.
///
/// Five rats: 甲己 → 甲子, 乙庚 → 丙子, 丙辛 → 戊子, 丁壬 → 庚子, 戊癸 → 壬子.
pub fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> Pillar {
    let rat_stem = (day_stem.index() % 5) as i32 * 2;
    Pillar {
        stem: Stem::from_index(rat_stem + hour_branch.index() as i32),
        branch: hour_branch,
    }
}

impl CalendarConverter for MeanCycleConverter {
    fn convert(
        &self,
        at: &CivilDateTime,
        longitude_deg: Option<f64>,
    ) -> Result<LunarSexagenary, CalendarError> {
        let solar = self.solar_time(at, longitude_deg)?;

        // Year and month follow the Sun, so they use the true instant.
        let jd = civil_to_jd(at, self.config.utc_offset_hours);
        let sun_lon = sun_apparent_longitude_deg(jd);
        let sector = solar_month_sector(sun_lon);
        let solar_year = if at.month() <= 2 && sector >= 10 {
            at.year() - 1
        } else {
            at.year()
        };
        let year = year_pillar(solar_year);
        let month = month_pillar(year.stem, sector);

        // Day and hour follow the local solar clock.
        let hour_branch = Branch::from_hour(solar.hour());
        let late_zi = solar.hour() == 23;
        let civil_day = day_pillar(solar.date());
        let day = match self.config.zi_hour_mode {
            ZiHourMode::Traditional if late_zi => civil_day.succ(),
            _ => civil_day,
        };
        let hour_day_stem = if late_zi { civil_day.succ().stem } else { civil_day.stem };
        let hour = hour_pillar(hour_day_stem, hour_branch);

        let lunar_civil_date = match self.config.zi_hour_mode {
            ZiHourMode::Traditional if late_zi => solar.shifted_seconds(3600).date(),
            _ => solar.date(),
        };
        let lunar = lunar_date(lunar_civil_date, self.config.utc_offset_hours)?;

        debug!(
            at = %at,
            solar = %solar,
            sun_lon,
            year = %year,
            month = %month,
            day = %day,
            hour = %hour,
            "converted civil time"
        );

        Ok(LunarSexagenary {
            year_pillar: year,
            month_pillar: month,
            day_pillar: day,
            hour_pillar: hour,
            lunar_year_pillar: year_pillar(lunar.year),
            lunar,
            hour_index: hour_branch.index(),
            solar_time: solar,
        })
    }
}
