//! Qimen decision engine.
//!
//! - [`palace`]: the nine palaces and their elements
//! - [`door`]: the eight doors and their weights
//! - [`derivation`]: hour → palace/door assignment behind a trait
//! - [`engine`]: scoring, signal and validity window
//! - [`gate`]: cooldown-locked consultation

pub mod derivation;
pub mod door;
pub mod engine;
pub mod gate;
pub mod palace;
pub mod types;

pub use derivation::{HourCycleStub, PalaceAssignment, PalaceDerivation};
pub use door::{ALL_DOORS, Door, DoorClass};
pub use engine::{
    BASE_SCORE, GREEN_MIN, RED_MAX, classify_signal, compute_qimen, relation_adjustment,
    validity_deadline,
};
pub use gate::{QimenGate, QimenOutcome};
pub use palace::{ALL_PALACES, NinePalace};
pub use types::{ALL_CATEGORIES, QimenResult, QuestionCategory, Signal};
