//! Golden BaZi charts from the reference converter.

use tianji_calendar::MeanCycleConverter;
use tianji_charts::{
    BaziInput, Gender, LuckDirection, PillarSlot, SeasonStatus, Strength, compute_bazi,
};
use tianji_cycle::{Branch, Element, Stem, Zodiac};

fn chart(date: &str, time: &str, lon: Option<f64>, gender: Gender) -> tianji_charts::BaziChart {
    let input = BaziInput::parse(date, time, lon, gender).unwrap();
    compute_bazi(&MeanCycleConverter::default(), &input).unwrap()
}

#[test]
fn lichun_2024_noon() {
    let c = chart("2024-02-04", "12:00", Some(120.0), Gender::Male);
    let glyphs: Vec<String> = c.plain_pillars().iter().map(|p| p.glyphs()).collect();
    assert_eq!(glyphs, ["癸卯", "乙丑", "戊戌", "戊午"]);

    assert_eq!(c.day_master, Stem::Wu);
    assert_eq!(c.day_master_element, Element::Earth);
    let counts: Vec<u8> = c.histogram.iter().map(|(_, n)| n).collect();
    assert_eq!(counts, [2, 1, 4, 0, 1]);
    assert_eq!(c.histogram.missing(), [Element::Metal]);
    assert_eq!(c.histogram.total(), 8);

    assert_eq!(c.strength.support, 5);
    assert_eq!(c.strength.strength, Strength::Strong);
    assert_eq!(c.strength.dominant, Element::Earth);
    assert_eq!(c.season, SeasonStatus::Prosperous);

    assert_eq!(c.void_branches, [Branch::Chen, Branch::Si]);
    assert!(c.pillars.iter().all(|p| !p.void));
    assert_eq!(c.zodiac, Zodiac::Rabbit);
    assert_eq!(c.luck_direction, LuckDirection::Backward);

    assert_eq!((c.lunar.year, c.lunar.month, c.lunar.day), (2023, 12, 25));
    assert!(!c.lunar.leap);
}

#[test]
fn lichun_2024_evening_switches_year_and_month() {
    let c = chart("2024-02-04", "18:00", Some(120.0), Gender::Female);
    assert_eq!(c.pillar(PillarSlot::Year).glyphs(), "甲辰");
    assert_eq!(c.pillar(PillarSlot::Month).glyphs(), "丙寅");
    assert_eq!(c.pillar(PillarSlot::Day).glyphs(), "戊戌");
    assert_eq!(c.zodiac, Zodiac::Dragon);
    // Yang year, female.
    assert_eq!(c.luck_direction, LuckDirection::Backward);
}

#[test]
fn deterministic_across_calls() {
    let a = chart("2024-02-04", "12:00", Some(120.0), Gender::Male);
    let b = chart("2024-02-04", "12:00", Some(120.0), Gender::Male);
    assert_eq!(a, b);
}

#[test]
fn histogram_always_sums_to_eight() {
    for (date, time) in [
        ("1965-07-15", "00:00"),
        ("1949-10-01", "06:30"),
        ("1984-02-02", "23:15"),
        ("2000-01-01", "12:00"),
        ("2033-12-31", "17:45"),
    ] {
        let c = chart(date, time, None, Gender::Male);
        assert_eq!(c.histogram.total(), 8, "{date} {time}");
    }
}
