//! Hour → palace/door assignment.
//!
//! The full Qimen plate (earth/heaven plates, duty star, nine stars) is not
//! laid out here. A [`PalaceDerivation`] supplies just the day palace, hour
//! palace and active door the engine scores; [`HourCycleStub`] is the
//! deterministic rule used by default.

use serde::Serialize;

use crate::qimen::door::{ALL_DOORS, Door};
use crate::qimen::palace::NinePalace;

/// Palaces and door active at an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceAssignment {
    /// Palace of "the self".
    pub day_palace: NinePalace,
    /// Palace of "the matter".
    pub hour_palace: NinePalace,
    pub door: Door,
}

/// Source of palace/door assignments.
pub trait PalaceDerivation: Send + Sync {
    /// Assignment for `hour` of day.
    ///
    /// # Panics
    /// Implementations panic when `hour` is not in `0..24`.
    fn derive(&self, hour: u32) -> PalaceAssignment;
}

/// Hour-keyed stand-in for a full plate layout.
///
/// - day palace: `hour mod 9`
/// - hour palace: `(hour / 2) mod 9`
/// - door: `hour / 3` into the 休…开 cycle (one door per three hours)
#[derive(Debug, Clone, Copy, Default)]
pub struct HourCycleStub;

impl PalaceDerivation for HourCycleStub {
    fn derive(&self, hour: u32) -> PalaceAssignment {
        assert!(hour < 24, "hour of day must be in 0..24, got {hour}");
        PalaceAssignment {
            day_palace: NinePalace::from_index((hour % 9) as i32),
            hour_palace: NinePalace::from_index(((hour / 2) % 9) as i32),
            door: ALL_DOORS[(hour / 3) as usize],
        }
    }
}
