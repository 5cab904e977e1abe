//! Stem-branch pillars and the sexagenary (60-fold) cycle.
//!
//! A stem and a branch only pair up when their indices share parity, which
//! yields 60 valid combinations. Cycle index 0 is Jia-Zi (甲子).

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::error::CycleError;
use crate::stem::Stem;
use crate::util::{SEXAGENARY_CYCLE, cyclic, wrap12};

/// One stem-branch pair (year, month, day or hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch.
    ///
    /// Returns `CycleError::ParityMismatch` for combinations that never occur
    /// in the sexagenary cycle (e.g. Jia with Chou).
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, CycleError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(CycleError::ParityMismatch { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at position `index` of the 60-cycle (wraps).
    pub const fn from_cycle_index(index: i32) -> Self {
        let i = cyclic(index, SEXAGENARY_CYCLE) as i32;
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position of this pillar in the 60-cycle, `[0, 60)`.
    pub const fn cycle_index(self) -> u8 {
        // Solve i ≡ s (mod 10), i ≡ b (mod 12): i = s + 10k with 10k ≡ b - s (mod 12).
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        let k = (wrap12(b - s) / 2) as i32 * 5;
        cyclic(s + 10 * k, SEXAGENARY_CYCLE)
    }

    /// The next pillar in the 60-cycle.
    pub const fn succ(self) -> Self {
        Self::from_cycle_index(self.cycle_index() as i32 + 1)
    }

    /// The two void branches (空亡) of the ten-day decade this pillar belongs to.
    ///
    /// A decade starts at a Jia stem and covers ten branches; the two branches
    /// left over are void.
    pub const fn void_branches(self) -> [Branch; 2] {
        let decade_start = self.branch.index() as i32 - self.stem.index() as i32;
        [
            Branch::from_index(decade_start + 10),
            Branch::from_index(decade_start + 11),
        ]
    }

    /// Chinese glyphs, e.g. "甲子".
    pub fn glyphs(self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}
