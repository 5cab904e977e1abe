//! Ziwei chart assembly.

use tracing::info;

use tianji_calendar::{CalendarConverter, CivilDateTime};
use tianji_cycle::{Branch, Stem, wrap10, wrap12};

use crate::error::ChartError;
use crate::gender::Gender;
use crate::ziwei::stars::{
    auxiliary_star_positions, major_star_positions, mansion_star_index, purple_star_index,
};
use crate::ziwei::types::{
    ALL_LIFE_AREAS, Bureau, DecadeRange, Star, ZiweiChart, ZiweiPalace,
};

/// Bureaus keyed by `[stem / 2][(branch / 2) % 3]`.
///
/// Rows are the stem pairs 甲乙, 丙丁, 戊己, 庚辛, 壬癸; columns the branch
/// pairs 子丑/午未, 寅卯/申酉, 辰巳/戌亥.
const BUREAU_MATRIX: [[Bureau; 3]; 5] = {
    use Bureau::*;
    [
        [Metal4, Water2, Fire6],
        [Water2, Fire6, Earth5],
        [Fire6, Earth5, Wood3],
        [Earth5, Wood3, Metal4],
        [Wood3, Metal4, Water2],
    ]
};

/// Life palace branch index.
///
/// Count from 寅 forward to the lunar month, then back by the hour slot.
pub const fn life_palace_index(lunar_month: u8, hour_index: u8) -> u8 {
    wrap12(2 + (lunar_month as i32 - 1) - hour_index as i32)
}

/// Body palace branch index: as the life palace, but forward by the hour.
pub const fn body_palace_index(lunar_month: u8, hour_index: u8) -> u8 {
    wrap12(2 + (lunar_month as i32 - 1) + hour_index as i32)
}

/// Heavenly stem of the palace at `branch_index` in a year with stem
/// `year_stem` (five tigers: the 寅 palace takes the 寅-month stem).
///
/// Stems run forward from 寅 through 丑, so 子 and 丑 are the 11th and 12th
/// palaces of the sequence, not the two before 寅.
pub const fn palace_stem(year_stem: Stem, branch_index: u8) -> Stem {
    let tiger = (year_stem.index() % 5) as i32 * 2 + 2;
    let from_yin = wrap12(branch_index as i32 - 2) as i32;
    Stem::from_index(wrap10(tiger + from_yin) as i32)
}

/// Bureau of a palace pillar.
pub const fn bureau_for(stem: Stem, branch: Branch) -> Bureau {
    BUREAU_MATRIX[(stem.index() / 2) as usize][((branch.index() / 2) % 3) as usize]
}

/// Build a Ziwei chart for the instant `at`.
///
/// Uses the lunar month and day, the lunar-year stem and the hour slot. A
/// leap month is placed as its ordinary month number.
pub fn compute_ziwei(
    converter: &dyn CalendarConverter,
    at: &CivilDateTime,
    longitude_deg: Option<f64>,
    gender: Gender,
) -> Result<ZiweiChart, ChartError> {
    let coords = converter.convert(at, longitude_deg)?;
    let lunar = coords.lunar;
    let month = lunar.month;
    let hour_index = coords.hour_index;
    let year_stem = coords.year_stem();

    if !(1..=12).contains(&month) || !(1..=30).contains(&lunar.day) || hour_index >= 12 {
        return Err(ChartError::InvalidInput(format!(
            "lunar coordinates out of range: month {month}, day {}, hour slot {hour_index}",
            lunar.day
        )));
    }

    let life = life_palace_index(month, hour_index);
    let body = body_palace_index(month, hour_index);

    let life_branch = Branch::from_index(life as i32);
    let bureau = bureau_for(palace_stem(year_stem, life), life_branch);

    let purple = purple_star_index(bureau, lunar.day);
    let mansion = mansion_star_index(purple);

    let forward = gender.runs_forward(year_stem.polarity());
    let direction: i32 = if forward { 1 } else { -1 };

    let mut palaces: Vec<ZiweiPalace> = (0..12u8)
        .map(|i| {
            let area = ALL_LIFE_AREAS[wrap12(life as i32 - i as i32) as usize];
            ZiweiPalace {
                branch: Branch::from_index(i as i32),
                stem: palace_stem(year_stem, i),
                area,
                is_body: i == body,
                stars: Vec::new(),
                decade: DecadeRange { start: 0, end: 0 },
            }
        })
        .collect();

    for k in 0..12u8 {
        let idx = wrap12(life as i32 + direction * k as i32) as usize;
        let start = bureau.number() + 10 * k;
        palaces[idx].decade = DecadeRange {
            start,
            end: start + 9,
        };
    }

    for (kind, pos) in major_star_positions(purple, mansion)
        .into_iter()
        .chain(auxiliary_star_positions(month, hour_index, year_stem))
    {
        palaces[pos as usize]
            .stars
            .push(Star::at(kind, Branch::from_index(pos as i32)));
    }

    let chart = ZiweiChart {
        palaces,
        life_index: life,
        body_index: body,
        bureau,
        purple_index: purple,
        mansion_index: mansion,
        year_stem,
        lunar,
        hour_index,
        gender,
        decades_forward: forward,
    };

    info!(
        at = %at,
        life = life_branch.glyph(),
        bureau = bureau.label(),
        purple = Branch::from_index(purple as i32).glyph(),
        "computed ziwei chart"
    );
    Ok(chart)
}
