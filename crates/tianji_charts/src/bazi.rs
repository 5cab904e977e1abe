//! BaZi (four pillars) chart builder.
//!
//! The chart is a pure function of (civil time, longitude, gender): four
//! pillars from the calendar converter, the day-master (day stem) as "the
//! self", the five-element histogram over all 8 symbols, and a few derived
//! facts (strength, season status, void branches, luck direction).

use serde::Serialize;
use tracing::info;

use tianji_calendar::{CalendarConverter, CivilDateTime, LunarDate};
use tianji_cycle::{
    Branch, Element, ElementRelation, FiveElementHistogram, Pillar, Stem, Zodiac, relation,
};

use crate::error::ChartError;
use crate::gender::Gender;

/// Support count at or above which the day-master is strong.
pub const STRONG_SUPPORT_MIN: u8 = 5;

/// Support count at or below which the day-master is weak.
pub const WEAK_SUPPORT_MAX: u8 = 2;

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

/// The four slots in chart order.
pub const ALL_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

impl PillarSlot {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// A pillar placed in the chart, with its void marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPillar {
    pub slot: PillarSlot,
    pub pillar: Pillar,
    /// Branch falls in the void pair of the day pillar's decade.
    pub void: bool,
}

/// Coarse strength of the day-master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Balanced,
    Strong,
}

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
        }
    }
}

/// Strength verdict with the counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthAssessment {
    pub strength: Strength,
    /// Symbols of the day-master's element plus symbols of the element
    /// generating it.
    pub support: u8,
    pub dominant: Element,
}

/// Season status (旺相休囚死) of the day-master in the birth month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonStatus {
    /// Same element as the season (旺).
    Prosperous,
    /// Generated by the season (相).
    Prime,
    /// Generates the season (休).
    Resting,
    /// Controls the season (囚).
    Trapped,
    /// Controlled by the season (死).
    Dead,
}

impl SeasonStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prosperous => "prosperous",
            Self::Prime => "prime",
            Self::Resting => "resting",
            Self::Trapped => "trapped",
            Self::Dead => "dead",
        }
    }
}

/// Direction of the ten-year luck cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Request for a BaZi chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaziInput {
    pub at: CivilDateTime,
    /// East-positive longitude for solar-time correction.
    pub longitude_deg: Option<f64>,
    pub gender: Gender,
}

impl BaziInput {
    /// Parse date and time strings into a request.
    pub fn parse(
        date: &str,
        time: &str,
        longitude_deg: Option<f64>,
        gender: Gender,
    ) -> Result<Self, ChartError> {
        Ok(Self {
            at: CivilDateTime::parse(date, time)?,
            longitude_deg,
            gender,
        })
    }
}

/// A complete BaZi chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziChart {
    pub pillars: [ChartPillar; 4],
    pub day_master: Stem,
    pub day_master_element: Element,
    pub histogram: FiveElementHistogram,
    pub strength: StrengthAssessment,
    pub season: SeasonStatus,
    pub void_branches: [Branch; 2],
    pub zodiac: Zodiac,
    pub gender: Gender,
    pub luck_direction: LuckDirection,
    pub lunar: LunarDate,
    pub solar_time: CivilDateTime,
}

impl BaziChart {
    pub fn pillar(&self, slot: PillarSlot) -> Pillar {
        self.pillars[slot as usize].pillar
    }

    /// Plain pillars in year, month, day, hour order.
    pub fn plain_pillars(&self) -> [Pillar; 4] {
        self.pillars.map(|p| p.pillar)
    }
}

/// Strength of a day-master element given the chart histogram.
pub fn assess_strength(histogram: &FiveElementHistogram, day_master: Element) -> StrengthAssessment {
    let support = histogram.count(day_master) + histogram.count(day_master.generated_by());
    let strength = if support >= STRONG_SUPPORT_MIN {
        Strength::Strong
    } else if support <= WEAK_SUPPORT_MAX {
        Strength::Weak
    } else {
        Strength::Balanced
    };
    StrengthAssessment {
        strength,
        support,
        dominant: histogram.dominant(),
    }
}

/// Season status of `element` in the month ruled by `month_branch`.
pub fn season_status(element: Element, month_branch: Branch) -> SeasonStatus {
    match relation(month_branch.element(), element) {
        ElementRelation::Same => SeasonStatus::Prosperous,
        ElementRelation::Generates => SeasonStatus::Prime,
        ElementRelation::GeneratedBy => SeasonStatus::Resting,
        ElementRelation::ControlledBy => SeasonStatus::Trapped,
        ElementRelation::Controls => SeasonStatus::Dead,
    }
}

/// Build a BaZi chart.
pub fn compute_bazi(
    converter: &dyn CalendarConverter,
    input: &BaziInput,
) -> Result<BaziChart, ChartError> {
    let coords = converter.convert(&input.at, input.longitude_deg)?;
    let plain = coords.pillars();

    let void_branches = coords.day_pillar.void_branches();
    let pillars = std::array::from_fn(|i| ChartPillar {
        slot: ALL_SLOTS[i],
        pillar: plain[i],
        void: void_branches.contains(&plain[i].branch),
    });

    let histogram = FiveElementHistogram::from_pillars(&plain);
    let day_master = coords.day_pillar.stem;
    let day_master_element = day_master.element();
    let luck_direction = if input.gender.runs_forward(coords.year_pillar.stem.polarity()) {
        LuckDirection::Forward
    } else {
        LuckDirection::Backward
    };

    let chart = BaziChart {
        pillars,
        day_master,
        day_master_element,
        histogram,
        strength: assess_strength(&histogram, day_master_element),
        season: season_status(day_master_element, coords.month_pillar.branch),
        void_branches,
        zodiac: coords.year_pillar.branch.zodiac(),
        gender: input.gender,
        luck_direction,
        lunar: coords.lunar,
        solar_time: coords.solar_time,
    };

    info!(
        at = %input.at,
        pillars = %plain.map(|p| p.glyphs()).join(" "),
        day_master = day_master.glyph(),
        strength = chart.strength.strength.name(),
        "computed bazi chart"
    );
    Ok(chart)
}
