//! Qimen request and result types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use tianji_calendar::CivilDateTime;
use tianji_cycle::{ElementRelation, Stem};

use crate::error::ChartError;
use crate::qimen::door::{Door, DoorClass};
use crate::qimen::palace::NinePalace;

/// The matter being asked about. A label only; it keys the cooldown lock
/// but does not change the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Career,
    Wealth,
    Relationship,
    Travel,
    Study,
    Health,
}

pub const ALL_CATEGORIES: [QuestionCategory; 6] = [
    QuestionCategory::Career,
    QuestionCategory::Wealth,
    QuestionCategory::Relationship,
    QuestionCategory::Travel,
    QuestionCategory::Study,
    QuestionCategory::Health,
];

impl QuestionCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Relationship => "relationship",
            Self::Travel => "travel",
            Self::Study => "study",
            Self::Health => "health",
        }
    }

    /// Cooldown store key for this category.
    pub fn lock_key(self) -> String {
        format!("qimen_lock_{}", self.name())
    }
}

impl FromStr for QuestionCategory {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.name() == needle)
            .ok_or_else(|| ChartError::InvalidInput(format!("unknown question category {s:?}")))
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Traffic-light verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Yellow,
    Red,
}

impl Signal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

/// One Qimen reading. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QimenResult {
    pub category: QuestionCategory,
    pub signal: Signal,
    pub score: i32,
    pub summary: String,
    pub factors: Vec<String>,
    /// Deadline rendered `HH:00`.
    pub valid_until: String,
    pub day_stem: Stem,
    pub hour_stem: Stem,
    pub day_palace: NinePalace,
    pub hour_palace: NinePalace,
    pub door: Door,
    pub door_class: DoorClass,
    /// Relation of the day palace ("self") toward the hour palace ("matter").
    pub relation: ElementRelation,
    pub computed_at: CivilDateTime,
}
