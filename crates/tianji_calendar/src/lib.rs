//! Calendar conversion for the tianji chart engine.
//!
//! This crate provides:
//! - `CivilDateTime`, the validated wall-clock input type
//! - Julian day numbers and a short apparent-solar-longitude series
//! - Lunisolar month/day from new moons and principal solar terms
//! - The `CalendarConverter` trait and its `MeanCycleConverter` reference
//!   implementation, plus `FixedConverter` for preset coordinates

pub mod civil;
pub mod converter;
pub mod error;
pub mod fixed;
pub mod julian;
pub mod lunar;
pub mod solar;

pub use civil::CivilDateTime;
pub use converter::{
    CalendarConverter, ConverterConfig, LunarSexagenary, MeanCycleConverter, ZiHourMode,
    day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use error::CalendarError;
pub use fixed::FixedConverter;
pub use julian::{J2000_JD, civil_to_jd, julian_day_number};
pub use lunar::{LunarDate, SYNODIC_MONTH, lunar_date, new_moon_jd};
pub use solar::sun_apparent_longitude_deg;
