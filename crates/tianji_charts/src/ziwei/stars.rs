//! Star placement.
//!
//! The Purple Star is seeded from (bureau, lunar day); the Heavenly Mansion
//! mirrors it across the 寅–申 axis. The other twelve major stars follow at
//! fixed offsets from those two seeds. Auxiliaries key on month, hour or
//! year stem.

use tianji_cycle::{Stem, wrap12};

use crate::ziwei::types::{Bureau, StarKind};

/// Offsets of the Purple-Star series from the Purple Star.
pub const PURPLE_SERIES: [(StarKind, i32); 6] = [
    (StarKind::ZiWei, 0),
    (StarKind::TianJi, -1),
    (StarKind::TaiYang, -3),
    (StarKind::WuQu, -4),
    (StarKind::TianTong, -5),
    (StarKind::LianZhen, -8),
];

/// Offsets of the Heavenly-Mansion series from the Heavenly Mansion.
pub const MANSION_SERIES: [(StarKind, i32); 8] = [
    (StarKind::TianFu, 0),
    (StarKind::TaiYin, 1),
    (StarKind::TanLang, 2),
    (StarKind::JuMen, 3),
    (StarKind::TianXiang, 4),
    (StarKind::TianLiang, 5),
    (StarKind::QiSha, 6),
    (StarKind::PoJun, 10),
];

/// Salary Star branch by year stem (甲 → 寅 … 癸 → 子).
const SALARY_BY_STEM: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// Branch index of the Purple Star.
///
/// Find the smallest quotient `q` with `q * bureau >= day`; the borrowed
/// amount `q * bureau - day` moves the star back from the `q`-th palace
/// (counted from 寅) when odd and forward when even.
///
/// # Panics
/// When `lunar_day` is not in `1..=30`.
pub fn purple_star_index(bureau: Bureau, lunar_day: u8) -> u8 {
    assert!(
        (1..=30).contains(&lunar_day),
        "lunar day must be in 1..=30, got {lunar_day}"
    );
    let b = bureau.number() as i32;
    let day = lunar_day as i32;
    let q = (day + b - 1) / b;
    let borrowed = q * b - day;
    let base = 2 + (q - 1);
    if borrowed % 2 == 1 {
        wrap12(base - borrowed)
    } else {
        wrap12(base + borrowed)
    }
}

/// Branch index of the Heavenly Mansion.
pub const fn mansion_star_index(purple: u8) -> u8 {
    wrap12(4 - purple as i32)
}

/// Branch positions of all fourteen major stars.
pub fn major_star_positions(purple: u8, mansion: u8) -> Vec<(StarKind, u8)> {
    PURPLE_SERIES
        .iter()
        .map(|&(kind, off)| (kind, wrap12(purple as i32 + off)))
        .chain(
            MANSION_SERIES
                .iter()
                .map(|&(kind, off)| (kind, wrap12(mansion as i32 + off))),
        )
        .collect()
}

/// Branch positions of the auxiliary stars.
///
/// `lunar_month` is 1-based; `hour_index` is the two-hour slot (0 = 子).
pub fn auxiliary_star_positions(
    lunar_month: u8,
    hour_index: u8,
    year_stem: Stem,
) -> Vec<(StarKind, u8)> {
    let m = lunar_month as i32 - 1;
    let h = hour_index as i32;
    let salary = SALARY_BY_STEM[year_stem.index() as usize] as i32;
    let (noble, honor) = noble_positions(year_stem);
    vec![
        (StarKind::ZuoFu, wrap12(4 + m)),
        (StarKind::YouBi, wrap12(10 - m)),
        (StarKind::WenChang, wrap12(10 - h)),
        (StarKind::WenQu, wrap12(4 + h)),
        (StarKind::DiKong, wrap12(11 - h)),
        (StarKind::DiJie, wrap12(11 + h)),
        (StarKind::LuCun, wrap12(salary)),
        (StarKind::QingYang, wrap12(salary + 1)),
        (StarKind::TuoLuo, wrap12(salary - 1)),
        (StarKind::TianKui, noble),
        (StarKind::TianYue, honor),
    ]
}

/// Heavenly Noble / Heavenly Honor branches for a year stem.
const fn noble_positions(year_stem: Stem) -> (u8, u8) {
    match year_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => (1, 7),
        Stem::Yi | Stem::Ji => (0, 8),
        Stem::Bing | Stem::Ding => (11, 9),
        Stem::Xin => (6, 2),
        Stem::Ren | Stem::Gui => (3, 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purple_star_known_cases() {
        // Fire 6, day 25 → 丑.
        assert_eq!(purple_star_index(Bureau::Fire6, 25), 1);
        // Water 2, day 1 → 丑; day 2 → 寅.
        assert_eq!(purple_star_index(Bureau::Water2, 1), 1);
        assert_eq!(purple_star_index(Bureau::Water2, 2), 2);
        // Wood 3, day 1 → 辰 (borrow 2, forward).
        assert_eq!(purple_star_index(Bureau::Wood3, 1), 4);
        // Metal 4, day 30 → 亥 (q 8, borrow 2).
        assert_eq!(purple_star_index(Bureau::Metal4, 30), 11);
    }

    #[test]
    fn purple_star_in_range_for_all_inputs() {
        for n in 2..=6 {
            let bureau = Bureau::from_number(n).unwrap();
            for day in 1..=30 {
                assert!(purple_star_index(bureau, day) < 12);
            }
        }
    }

    #[test]
    fn mansion_mirrors_purple() {
        assert_eq!(mansion_star_index(2), 2);
        assert_eq!(mansion_star_index(8), 8);
        assert_eq!(mansion_star_index(1), 3);
        assert_eq!(mansion_star_index(0), 4);
        assert_eq!(mansion_star_index(5), 11);
    }

    #[test]
    fn fourteen_majors() {
        let stars = major_star_positions(1, 3);
        assert_eq!(stars.len(), 14);
        assert!(stars.contains(&(StarKind::LianZhen, 5)));
        assert!(stars.contains(&(StarKind::PoJun, 1)));
    }

    #[test]
    fn auxiliaries_first_month_zi_hour() {
        let aux = auxiliary_star_positions(1, 0, Stem::Jia);
        assert!(aux.contains(&(StarKind::ZuoFu, 4)));
        assert!(aux.contains(&(StarKind::YouBi, 10)));
        assert!(aux.contains(&(StarKind::WenChang, 10)));
        assert!(aux.contains(&(StarKind::WenQu, 4)));
        assert!(aux.contains(&(StarKind::DiKong, 11)));
        assert!(aux.contains(&(StarKind::DiJie, 11)));
        assert!(aux.contains(&(StarKind::LuCun, 2)));
        assert!(aux.contains(&(StarKind::QingYang, 3)));
        assert!(aux.contains(&(StarKind::TuoLuo, 1)));
        assert!(aux.contains(&(StarKind::TianKui, 1)));
        assert!(aux.contains(&(StarKind::TianYue, 7)));
    }
}
