//! Convenience facade for the tianji chart engine.
//!
//! Wraps the calendar converter, chart builders, Qimen cooldown gate and
//! advisory client behind one [`Tianji`] value built from a [`TianjiConfig`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tianji_rs::*;
//!
//! let engine = Tianji::new(&TianjiConfig::default())?;
//! let chart = engine.compute_bazi("2024-02-04", "12:00", Some(120.0), Gender::Male)?;
//! println!("day master: {}", chart.day_master.glyph());
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{QimenConfig, TianjiConfig};
pub use engine::Tianji;
pub use error::TianjiError;

// Re-export the types the facade hands out so callers need only this crate.
pub use tianji_advisory::{Advice, AdvisoryConfig, AdvisoryError, AdvisoryReport, PLACEHOLDER};
pub use tianji_calendar::{CivilDateTime, ConverterConfig, LunarDate, ZiHourMode};
pub use tianji_charts::{
    BaziChart, Bureau, ChartError, ChartPillar, Door, Gender, LifeArea, LuckDirection,
    NinePalace, PillarSlot, QimenOutcome, QimenResult, QuestionCategory, SeasonStatus, Signal,
    Star, StarKind, Strength, ZiweiChart, ZiweiPalace,
};
pub use tianji_cycle::{Branch, Element, ElementRelation, FiveElementHistogram, Pillar, Stem};
