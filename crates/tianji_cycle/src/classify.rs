//! Element classifier and five-element histogram.
//!
//! A chart yields 8 symbols (stem and branch of four pillars). Counting their
//! elements gives the histogram that drives strength and balance analysis.

use serde::Serialize;
use tracing::debug;

use crate::branch::Branch;
use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Pillar;
use crate::stem::Stem;

/// A stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Symbol {
    pub const fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Branch(b) => b.element(),
        }
    }

    /// Parse a stem or branch from its glyph or pinyin name.
    ///
    /// Stems are tried first, so the ambiguous pinyin "wu" resolves to the
    /// stem 戊; use the glyph 午 for the branch.
    pub fn parse(symbol: &str) -> Option<Self> {
        Stem::parse(symbol)
            .map(Self::Stem)
            .or_else(|| Branch::parse(symbol).map(Self::Branch))
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Stem(s) => s.glyph(),
            Self::Branch(b) => b.glyph(),
        }
    }
}

/// The 8 symbols of four pillars, stem before branch, in pillar order.
pub fn pillar_symbols(pillars: &[Pillar; 4]) -> [Symbol; 8] {
    let mut out = [Symbol::Stem(Stem::Jia); 8];
    for (i, p) in pillars.iter().enumerate() {
        out[2 * i] = Symbol::Stem(p.stem);
        out[2 * i + 1] = Symbol::Branch(p.branch);
    }
    out
}

/// Count of symbols per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FiveElementHistogram {
    counts: [u8; 5],
}

impl FiveElementHistogram {
    /// Histogram over typed symbols. Every symbol is classified.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut hist = Self::default();
        for s in symbols {
            hist.add(s.element());
        }
        hist
    }

    /// Histogram over the 8 symbols of four pillars.
    pub fn from_pillars(pillars: &[Pillar; 4]) -> Self {
        Self::from_symbols(&pillar_symbols(pillars))
    }

    fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    /// Count for one element.
    pub const fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Sum over all elements.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// Element with the highest count; ties go to the earlier element in
    /// display order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.count(e) > self.count(best) {
                best = e;
            }
        }
        best
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS.iter().copied().filter(|&e| self.count(e) == 0).collect()
    }

    /// `(element, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.count(e)))
    }
}

/// Histogram over textual symbols (glyphs or pinyin).
///
/// Unrecognised symbols are skipped and logged; they never abort the count,
/// so the total can fall short of the input length.
pub fn element_histogram<S: AsRef<str>>(symbols: &[S]) -> FiveElementHistogram {
    let mut hist = FiveElementHistogram::default();
    for raw in symbols {
        match Symbol::parse(raw.as_ref()) {
            Some(symbol) => hist.add(symbol.element()),
            None => debug!(symbol = raw.as_ref(), "skipping unclassified symbol"),
        }
    }
    hist
}
