//! The five elements and their generation/control cycles.
//!
//! Generation: wood → fire → earth → metal → water → wood.
//! Control:    wood → earth → water → fire → metal → wood.
//!
//! Both cycles are expressed as index steps over [`ALL_ELEMENTS`]: an element
//! generates the element one step ahead and controls the element two steps
//! ahead. Any ordered pair therefore falls into exactly one [`ElementRelation`].

use serde::Serialize;

use crate::util::cyclic;

/// One of the five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in display order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at `index` modulo 5.
    pub const fn from_index(index: i32) -> Self {
        ALL_ELEMENTS[cyclic(index, 5) as usize]
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() as i32 + 1)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() as i32 - 1)
    }

    /// The element this one controls (overcomes).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() as i32 + 2)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() as i32 - 2)
    }

    /// All five elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

/// Relation of one element (the subject) toward another (the object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// Same element (比和).
    Same,
    /// Subject generates object (我生).
    Generates,
    /// Object generates subject (生我).
    GeneratedBy,
    /// Subject controls object (我克).
    Controls,
    /// Object controls subject (克我).
    ControlledBy,
}

/// All relations, in resolver order.
pub const ALL_RELATIONS: [ElementRelation; 5] = [
    ElementRelation::Same,
    ElementRelation::Generates,
    ElementRelation::GeneratedBy,
    ElementRelation::Controls,
    ElementRelation::ControlledBy,
];

impl ElementRelation {
    /// Stable identifier used in factor tags.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Generates => "generates",
            Self::GeneratedBy => "generated_by",
            Self::Controls => "controls",
            Self::ControlledBy => "controlled_by",
        }
    }

    /// The same relation seen from the object's side.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Same => Self::Same,
            Self::Generates => Self::GeneratedBy,
            Self::GeneratedBy => Self::Generates,
            Self::Controls => Self::ControlledBy,
            Self::ControlledBy => Self::Controls,
        }
    }
}

/// Resolve how `subject` relates to `object`.
///
/// The distance `object - subject` over the five-element ring decides the
/// relation uniquely: 0 same, 1 generates, 2 controls, 3 controlled-by,
/// 4 generated-by.
pub const fn relation(subject: Element, object: Element) -> ElementRelation {
    let step = cyclic(object.index() as i32 - subject.index() as i32, 5);
    match step {
        0 => ElementRelation::Same,
        1 => ElementRelation::Generates,
        2 => ElementRelation::Controls,
        3 => ElementRelation::ControlledBy,
        _ => ElementRelation::GeneratedBy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generation_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn control_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn reverse_lookups_invert() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn relation_examples() {
        assert_eq!(relation(Element::Water, Element::Wood), ElementRelation::Generates);
        assert_eq!(relation(Element::Wood, Element::Water), ElementRelation::GeneratedBy);
        assert_eq!(relation(Element::Metal, Element::Wood), ElementRelation::Controls);
        assert_eq!(relation(Element::Wood, Element::Metal), ElementRelation::ControlledBy);
        assert_eq!(relation(Element::Earth, Element::Earth), ElementRelation::Same);
    }

    #[test]
    fn every_pair_has_exactly_one_relation() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let matches = [
                    a == b,
                    a.generates() == b,
                    b.generates() == a,
                    a.controls() == b,
                    b.controls() == a,
                ];
                assert_eq!(
                    matches.iter().filter(|m| **m).count(),
                    1,
                    "{a:?} vs {b:?}"
                );
                let expected = ALL_RELATIONS[matches.iter().position(|m| *m).unwrap()];
                assert_eq!(relation(a, b), expected, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn relation_inverse_is_symmetric() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert_eq!(relation(a, b).inverse(), relation(b, a));
            }
        }
    }
}
