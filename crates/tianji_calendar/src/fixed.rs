//! A converter that answers with preset coordinates.
//!
//! Lets chart builders be exercised against known pillars and lunar dates
//! without depending on solar-term boundaries.

use tianji_cycle::{Branch, Pillar};

use crate::civil::CivilDateTime;
use crate::converter::{CalendarConverter, LunarSexagenary, hour_pillar};
use crate::error::CalendarError;
use crate::lunar::LunarDate;

/// Returns the same year, month and day coordinates for every instant.
///
/// The hour slot still follows the requested wall clock, so engines keyed on
/// the hour of day see the hour they asked for.
#[derive(Debug, Clone)]
pub struct FixedConverter {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    lunar_year: Pillar,
    lunar: LunarDate,
}

impl FixedConverter {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, lunar: LunarDate) -> Self {
        Self {
            year,
            month,
            day,
            lunar_year: year,
            lunar,
        }
    }

    /// Override the lunar-year pillar when it differs from the solar year.
    pub fn with_lunar_year(mut self, lunar_year: Pillar) -> Self {
        self.lunar_year = lunar_year;
        self
    }
}

impl CalendarConverter for FixedConverter {
    fn convert(
        &self,
        at: &CivilDateTime,
        longitude_deg: Option<f64>,
    ) -> Result<LunarSexagenary, CalendarError> {
        if let Some(lon) = longitude_deg {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(CalendarError::InvalidInput(format!(
                    "longitude {lon} outside [-180, 180]"
                )));
            }
        }
        let branch = Branch::from_hour(at.hour());
        Ok(LunarSexagenary {
            year_pillar: self.year,
            month_pillar: self.month,
            day_pillar: self.day,
            hour_pillar: hour_pillar(self.day.stem, branch),
            lunar_year_pillar: self.lunar_year,
            lunar: self.lunar,
            hour_index: branch.index(),
            solar_time: *at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_follows_clock() {
        let conv = FixedConverter::new(
            Pillar::from_cycle_index(0),
            Pillar::from_cycle_index(2),
            Pillar::from_cycle_index(0),
            LunarDate {
                year: 1984,
                month: 1,
                day: 1,
                leap: false,
            },
        );
        let at = CivilDateTime::parse("2000-01-01", "13:00").unwrap();
        let c = conv.convert(&at, None).unwrap();
        assert_eq!(c.hour_index, 7);
        assert_eq!(c.hour_pillar.glyphs(), "辛未");
        assert_eq!(c.day_pillar, Pillar::from_cycle_index(0));
    }
}
