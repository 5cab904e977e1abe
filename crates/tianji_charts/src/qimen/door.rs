//! The eight doors and their fixed weights.

use serde::Serialize;

/// A Qimen door, in the cycle order 休 生 伤 杜 景 死 惊 开.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Door {
    Rest,
    Life,
    Harm,
    Block,
    View,
    Death,
    Fear,
    Open,
}

pub const ALL_DOORS: [Door; 8] = [
    Door::Rest,
    Door::Life,
    Door::Harm,
    Door::Block,
    Door::View,
    Door::Death,
    Door::Fear,
    Door::Open,
];

/// Coarse quality of a door, from the sign of its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorClass {
    Auspicious,
    Inauspicious,
    Neutral,
}

impl DoorClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "auspicious",
            Self::Inauspicious => "inauspicious",
            Self::Neutral => "neutral",
        }
    }
}

impl Door {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rest => "Rest",
            Self::Life => "Life",
            Self::Harm => "Harm",
            Self::Block => "Block",
            Self::View => "View",
            Self::Death => "Death",
            Self::Fear => "Fear",
            Self::Open => "Open",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rest => "休门",
            Self::Life => "生门",
            Self::Harm => "伤门",
            Self::Block => "杜门",
            Self::View => "景门",
            Self::Death => "死门",
            Self::Fear => "惊门",
            Self::Open => "开门",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Score contribution, within `[-20, 20]`.
    pub const fn weight(self) -> i32 {
        match self {
            Self::Rest => 10,
            Self::Life => 20,
            Self::Harm => -15,
            Self::Block => 0,
            Self::View => 0,
            Self::Death => -20,
            Self::Fear => -10,
            Self::Open => 15,
        }
    }

    pub const fn class(self) -> DoorClass {
        let w = self.weight();
        if w > 0 {
            DoorClass::Auspicious
        } else if w < 0 {
            DoorClass::Inauspicious
        } else {
            DoorClass::Neutral
        }
    }

    pub const fn all() -> &'static [Door; 8] {
        &ALL_DOORS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_counts() {
        let count = |c| ALL_DOORS.iter().filter(|d| d.class() == c).count();
        assert_eq!(count(DoorClass::Auspicious), 3);
        assert_eq!(count(DoorClass::Inauspicious), 3);
        assert_eq!(count(DoorClass::Neutral), 2);
    }

    #[test]
    fn weights_bounded() {
        for d in ALL_DOORS {
            assert!((-20..=20).contains(&d.weight()), "{}", d.name());
        }
    }
}
