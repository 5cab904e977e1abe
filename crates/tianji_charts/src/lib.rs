//! Chart builders for the tianji engine.
//!
//! This crate provides:
//! - BaZi (four pillars) charts with strength, season status and void
//!   branches
//! - The Qimen decision engine, its palace/door derivation seam and the
//!   cooldown-locked gate
//! - Ziwei Dou Shu charts: life/body palaces, bureau, 14 major stars,
//!   auxiliaries and decade ranges
//! - Cooldown lock stores (in-memory and JSON file)
//!
//! Every builder takes a [`tianji_calendar::CalendarConverter`] so callers
//! choose the calendar source.

pub mod bazi;
pub mod cooldown;
pub mod error;
pub mod gender;
pub mod qimen;
pub mod ziwei;

pub use bazi::{
    BaziChart, BaziInput, ChartPillar, LuckDirection, PillarSlot, STRONG_SUPPORT_MIN,
    SeasonStatus, Strength, StrengthAssessment, WEAK_SUPPORT_MAX, assess_strength, compute_bazi,
    season_status,
};
pub use cooldown::{
    CooldownStore, DEFAULT_COOLDOWN_HOURS, InMemoryCooldownStore, JsonFileCooldownStore,
    lock_active,
};
pub use error::ChartError;
pub use gender::Gender;
pub use qimen::{
    Door, DoorClass, HourCycleStub, NinePalace, PalaceAssignment, PalaceDerivation, QimenGate,
    QimenOutcome, QimenResult, QuestionCategory, Signal, compute_qimen,
};
pub use ziwei::{Bureau, LifeArea, Star, StarCategory, StarKind, ZiweiChart, ZiweiPalace, compute_ziwei};
