//! Ziwei chart value types.

use serde::Serialize;

use tianji_calendar::LunarDate;
use tianji_cycle::{Branch, Element, Stem};

use crate::gender::Gender;

/// The twelve life areas, in the order they are laid out from the life
/// palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeArea {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

pub const ALL_LIFE_AREAS: [LifeArea; 12] = [
    LifeArea::Life,
    LifeArea::Siblings,
    LifeArea::Spouse,
    LifeArea::Children,
    LifeArea::Wealth,
    LifeArea::Health,
    LifeArea::Travel,
    LifeArea::Friends,
    LifeArea::Career,
    LifeArea::Property,
    LifeArea::Fortune,
    LifeArea::Parents,
];

impl LifeArea {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::Siblings => "siblings",
            Self::Spouse => "spouse",
            Self::Children => "children",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Friends => "friends",
            Self::Career => "career",
            Self::Property => "property",
            Self::Fortune => "fortune",
            Self::Parents => "parents",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarCategory {
    Major,
    Minor,
    Good,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Bright,
    Dim,
}

/// Every star the builder places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarKind {
    // Purple-Star series.
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    // Heavenly-Mansion series.
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    // Auxiliaries.
    ZuoFu,
    YouBi,
    WenChang,
    WenQu,
    DiKong,
    DiJie,
    LuCun,
    QingYang,
    TuoLuo,
    TianKui,
    TianYue,
}

impl StarKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "Purple Star",
            Self::TianJi => "Heavenly Secret",
            Self::TaiYang => "Sun",
            Self::WuQu => "Military Song",
            Self::TianTong => "Heavenly Unity",
            Self::LianZhen => "Chastity",
            Self::TianFu => "Heavenly Mansion",
            Self::TaiYin => "Moon",
            Self::TanLang => "Greedy Wolf",
            Self::JuMen => "Great Gate",
            Self::TianXiang => "Heavenly Minister",
            Self::TianLiang => "Heavenly Beam",
            Self::QiSha => "Seven Killings",
            Self::PoJun => "Army Breaker",
            Self::ZuoFu => "Left Assistant",
            Self::YouBi => "Right Assistant",
            Self::WenChang => "Literary Star",
            Self::WenQu => "Literary Craft",
            Self::DiKong => "Earth Void",
            Self::DiJie => "Earth Robbery",
            Self::LuCun => "Salary Star",
            Self::QingYang => "Ram Blade",
            Self::TuoLuo => "Spinning Top",
            Self::TianKui => "Heavenly Noble",
            Self::TianYue => "Heavenly Honor",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::LuCun => "禄存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
        }
    }

    pub const fn category(self) -> StarCategory {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarCategory::Major,
            Self::ZuoFu | Self::YouBi | Self::WenChang | Self::WenQu => StarCategory::Minor,
            Self::LuCun | Self::TianKui | Self::TianYue => StarCategory::Good,
            Self::DiKong | Self::DiJie | Self::QingYang | Self::TuoLuo => StarCategory::Bad,
        }
    }
}

/// A star placed in a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Star {
    pub kind: StarKind,
    pub category: StarCategory,
    /// Only the Sun and Moon carry a brightness.
    pub brightness: Option<Brightness>,
}

impl Star {
    /// Place `kind` at `branch`, resolving its brightness.
    pub fn at(kind: StarKind, branch: Branch) -> Self {
        let i = branch.index();
        let brightness = match kind {
            // Daytime branches 寅..未.
            StarKind::TaiYang if (2..=7).contains(&i) => Some(Brightness::Bright),
            StarKind::TaiYang => Some(Brightness::Dim),
            // Night branches 申..丑.
            StarKind::TaiYin if !(2..=7).contains(&i) => Some(Brightness::Bright),
            StarKind::TaiYin => Some(Brightness::Dim),
            _ => None,
        };
        Self {
            kind,
            category: kind.category(),
            brightness,
        }
    }
}

/// Inclusive age span of a decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeRange {
    pub start: u8,
    pub end: u8,
}

impl DecadeRange {
    pub const fn contains(self, age: u8) -> bool {
        age >= self.start && age <= self.end
    }
}

impl std::fmt::Display for DecadeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Five-element bureau (五行局).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

impl Bureau {
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            2 => Some(Self::Water2),
            3 => Some(Self::Wood3),
            4 => Some(Self::Metal4),
            5 => Some(Self::Earth5),
            6 => Some(Self::Fire6),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Label such as `水二局`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }
}

/// One of the twelve branch-indexed palaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZiweiPalace {
    pub branch: Branch,
    pub stem: Stem,
    pub area: LifeArea,
    pub is_body: bool,
    pub stars: Vec<Star>,
    pub decade: DecadeRange,
}

impl ZiweiPalace {
    pub fn has_star(&self, kind: StarKind) -> bool {
        self.stars.iter().any(|s| s.kind == kind)
    }
}

/// A complete Ziwei chart. `palaces[i]` sits at branch `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZiweiChart {
    pub palaces: Vec<ZiweiPalace>,
    pub life_index: u8,
    pub body_index: u8,
    pub bureau: Bureau,
    pub purple_index: u8,
    pub mansion_index: u8,
    pub year_stem: Stem,
    pub lunar: LunarDate,
    pub hour_index: u8,
    pub gender: Gender,
    /// Decades advance clockwise from the life palace.
    pub decades_forward: bool,
}

impl ZiweiChart {
    pub fn life_palace(&self) -> &ZiweiPalace {
        &self.palaces[self.life_index as usize]
    }

    pub fn body_palace(&self) -> &ZiweiPalace {
        &self.palaces[self.body_index as usize]
    }

    pub fn palace_of(&self, area: LifeArea) -> Option<&ZiweiPalace> {
        self.palaces.iter().find(|p| p.area == area)
    }

    /// Branch index holding `kind`.
    pub fn star_position(&self, kind: StarKind) -> Option<u8> {
        self.palaces
            .iter()
            .find(|p| p.has_star(kind))
            .map(|p| p.branch.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_moon_brightness() {
        assert_eq!(Star::at(StarKind::TaiYang, Branch::Wu).brightness, Some(Brightness::Bright));
        assert_eq!(Star::at(StarKind::TaiYang, Branch::Zi).brightness, Some(Brightness::Dim));
        assert_eq!(Star::at(StarKind::TaiYin, Branch::Zi).brightness, Some(Brightness::Bright));
        assert_eq!(Star::at(StarKind::TaiYin, Branch::Yin).brightness, Some(Brightness::Dim));
        assert_eq!(Star::at(StarKind::ZiWei, Branch::Zi).brightness, None);
    }

    #[test]
    fn bureau_numbers() {
        for n in 2..=6 {
            assert_eq!(Bureau::from_number(n).map(Bureau::number), Some(n));
        }
        assert_eq!(Bureau::from_number(7), None);
    }

    #[test]
    fn decade_display() {
        assert_eq!(DecadeRange { start: 6, end: 15 }.to_string(), "6-15");
    }
}
