//! The twelve earthly branches (地支) and their zodiac animals.
//!
//! Branch index 0 is Zi (子). The same index doubles as the position of a
//! palace in the 12-slot Ziwei board and as the two-hour time slot.

use serde::Serialize;

use crate::element::Element;
use crate::stem::Polarity;
use crate::util::wrap12;

/// The twelve earthly branches, starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animal paired 1:1 with a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl Branch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self.index() as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index` modulo 12.
    pub const fn from_index(index: i32) -> Self {
        ALL_BRANCHES[wrap12(index) as usize]
    }

    /// Branch of the two-hour slot containing `hour` (23:00–00:59 is Zi).
    ///
    /// # Panics
    /// Panics if `hour` is not in `0..24`.
    pub const fn from_hour(hour: u32) -> Self {
        assert!(hour < 24, "hour of day must be in 0..24");
        Self::from_index(((hour + 1) / 2) as i32)
    }

    /// Element of the branch.
    ///
    /// 寅卯 wood, 巳午 fire, 申酉 metal, 亥子 water, and the four
    /// storehouse branches 辰戌丑未 earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal of the branch.
    pub const fn zodiac(self) -> Zodiac {
        match self {
            Self::Zi => Zodiac::Rat,
            Self::Chou => Zodiac::Ox,
            Self::Yin => Zodiac::Tiger,
            Self::Mao => Zodiac::Rabbit,
            Self::Chen => Zodiac::Dragon,
            Self::Si => Zodiac::Snake,
            Self::Wu => Zodiac::Horse,
            Self::Wei => Zodiac::Goat,
            Self::Shen => Zodiac::Monkey,
            Self::You => Zodiac::Rooster,
            Self::Xu => Zodiac::Dog,
            Self::Hai => Zodiac::Pig,
        }
    }

    /// Branch `offset` steps further along the cycle.
    pub const fn offset(self, offset: i32) -> Self {
        Self::from_index(self.index() as i32 + offset)
    }

    /// Parse a glyph (子) or a case-insensitive pinyin name (zi).
    pub fn parse(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.glyph() == symbol || b.name().eq_ignore_ascii_case(symbol))
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as i32), *b);
        }
    }

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(-12), Branch::Zi);
    }

    #[test]
    fn hour_slots() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
        assert_eq!(Branch::from_hour(2), Branch::Chou);
        assert_eq!(Branch::from_hour(11), Branch::Wu);
        assert_eq!(Branch::from_hour(12), Branch::Wu);
        assert_eq!(Branch::from_hour(22), Branch::Hai);
    }

    #[test]
    #[should_panic(expected = "hour of day must be in 0..24")]
    fn hour_out_of_range_panics() {
        let _ = Branch::from_hour(24);
    }

    #[test]
    fn earth_branches_are_storehouses() {
        let earth: Vec<Branch> = ALL_BRANCHES
            .iter()
            .copied()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earth, vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]);
    }

    #[test]
    fn zodiac_follows_index() {
        assert_eq!(Branch::Zi.zodiac(), Zodiac::Rat);
        assert_eq!(Branch::Chen.zodiac(), Zodiac::Dragon);
        assert_eq!(Branch::Hai.zodiac(), Zodiac::Pig);
    }

    #[test]
    fn parse_glyph_and_pinyin() {
        assert_eq!(Branch::parse("午"), Some(Branch::Wu));
        assert_eq!(Branch::parse("chou"), Some(Branch::Chou));
        assert_eq!(Branch::parse("甲"), None);
    }
}
