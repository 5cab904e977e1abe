//! The nine Luo Shu palaces.

use serde::Serialize;

use tianji_cycle::{Element, NINE_PALACE_CYCLE, cyclic};

/// A Qimen palace, ordered by Luo Shu number (坎 = 1 … 离 = 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NinePalace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Center,
    Qian,
    Dui,
    Gen,
    Li,
}

pub const ALL_PALACES: [NinePalace; 9] = [
    NinePalace::Kan,
    NinePalace::Kun,
    NinePalace::Zhen,
    NinePalace::Xun,
    NinePalace::Center,
    NinePalace::Qian,
    NinePalace::Dui,
    NinePalace::Gen,
    NinePalace::Li,
];

impl NinePalace {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "Kan",
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Center => "Center",
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Gen => "Gen",
            Self::Li => "Li",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Kan => "坎",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Center => "中",
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
        }
    }

    /// 0-based index (Luo Shu number − 1).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Luo Shu number, 1..=9.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Palace at `index`, normalized into `[0, 9)`.
    pub const fn from_index(index: i32) -> Self {
        ALL_PALACES[cyclic(index, NINE_PALACE_CYCLE) as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Kan => Element::Water,
            Self::Kun | Self::Center | Self::Gen => Element::Earth,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
        }
    }

    pub const fn all() -> &'static [NinePalace; 9] {
        &ALL_PALACES
    }
}

impl std::fmt::Display for NinePalace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
            assert_eq!(NinePalace::from_index(i as i32), *p);
        }
        assert_eq!(NinePalace::from_index(-1), NinePalace::Li);
        assert_eq!(NinePalace::from_index(9), NinePalace::Kan);
    }

    #[test]
    fn element_table() {
        assert_eq!(NinePalace::Kan.element(), Element::Water);
        assert_eq!(NinePalace::Li.element(), Element::Fire);
        assert_eq!(NinePalace::Center.element(), Element::Earth);
        assert_eq!(NinePalace::Qian.element(), Element::Metal);
        assert_eq!(NinePalace::Zhen.element(), Element::Wood);
    }
}
