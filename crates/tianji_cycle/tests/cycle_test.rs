//! Property sweeps over the symbol tables.

use tianji_cycle::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Element, ElementRelation, Pillar, Stem,
    element_histogram, relation,
};

#[test]
fn sixty_pillars_are_distinct_and_roundtrip() {
    let mut seen = std::collections::HashSet::new();
    for i in 0..60 {
        let p = Pillar::from_cycle_index(i);
        assert_eq!(p.cycle_index() as i32, i);
        assert_eq!(Pillar::new(p.stem, p.branch), Ok(p));
        assert!(seen.insert(p));
    }
    assert_eq!(seen.len(), 60);
    assert_eq!(Pillar::from_cycle_index(59).succ(), Pillar::from_cycle_index(0));
}

#[test]
fn mismatched_parity_never_pairs() {
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            assert_eq!(
                Pillar::new(s, b).is_ok(),
                s.index() % 2 == b.index() % 2,
                "{}{}",
                s.glyph(),
                b.glyph()
            );
        }
    }
}

#[test]
fn void_pairs_are_outside_the_decade() {
    for i in 0..60 {
        let p = Pillar::from_cycle_index(i);
        let decade_start = i - p.stem.index() as i32;
        let covered: Vec<Branch> = (0..10)
            .map(|k| Pillar::from_cycle_index(decade_start + k).branch)
            .collect();
        for v in p.void_branches() {
            assert!(!covered.contains(&v), "{} void {}", p, v.glyph());
        }
    }
}

#[test]
fn relations_are_a_function_with_inverse() {
    for a in ALL_ELEMENTS {
        let mut kinds = std::collections::HashSet::new();
        for b in ALL_ELEMENTS {
            let r = relation(a, b);
            assert_eq!(relation(b, a), r.inverse());
            kinds.insert(r);
        }
        // Each subject meets every relation exactly once.
        assert_eq!(kinds.len(), 5);
    }
    assert_eq!(relation(Element::Water, Element::Wood), ElementRelation::Generates);
    assert_eq!(relation(Element::Water, Element::Fire), ElementRelation::Controls);
}

#[test]
fn every_symbol_classifies() {
    let stems: Vec<&str> = ALL_STEMS.iter().map(|s| s.glyph()).collect();
    let branches: Vec<&str> = ALL_BRANCHES.iter().map(|b| b.glyph()).collect();
    assert_eq!(element_histogram(&stems).total(), 10);
    assert_eq!(element_histogram(&branches).total(), 12);
    // Pinyin works too.
    assert_eq!(Stem::parse("geng"), Some(Stem::Geng));
    assert_eq!(Branch::parse("You"), Some(Branch::You));
}

#[test]
fn unknown_symbols_are_skipped() {
    let h = element_histogram(&["甲", "?", "子", "", "X", "午"]);
    assert_eq!(h.total(), 3);
    assert_eq!(h.count(Element::Wood), 1);
    assert_eq!(h.count(Element::Water), 1);
    assert_eq!(h.count(Element::Fire), 1);
}

#[test]
fn serialized_names_are_stable() {
    let names: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|e| serde_json::to_string(e).unwrap())
        .collect();
    assert_eq!(
        names,
        ["\"wood\"", "\"fire\"", "\"earth\"", "\"metal\"", "\"water\""]
    );
    assert_eq!(
        serde_json::to_string(&ElementRelation::GeneratedBy).unwrap(),
        "\"generated_by\""
    );
    assert_eq!(
        serde_json::to_string(&ElementRelation::ControlledBy).unwrap(),
        "\"controlled_by\""
    );
    let hist = serde_json::to_value(element_histogram(&["甲", "子", "午"])).unwrap();
    assert_eq!(hist["counts"], serde_json::json!([1, 1, 0, 0, 1]));
    let pillar = serde_json::to_value(Pillar::from_cycle_index(0)).unwrap();
    assert_eq!(pillar["stem"], "Jia");
    assert_eq!(pillar["branch"], "Zi");
}
