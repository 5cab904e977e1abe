//! Symbolic foundations for the tianji chart engine.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches, with their elements,
//!   polarity and zodiac animals
//! - Five-element generation/control cycles and the pairwise relation resolver
//! - Stem-branch pillars over the 60-fold cycle, including void branches
//! - The element classifier and five-element histogram
//! - A single normalize-to-non-negative helper for all cyclic arithmetic
//!
//! Everything here is pure table lookup and modular arithmetic; no I/O.

pub mod branch;
pub mod classify;
pub mod element;
pub mod error;
pub mod pillar;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, Branch, Zodiac};
pub use classify::{FiveElementHistogram, Symbol, element_histogram, pillar_symbols};
pub use element::{ALL_ELEMENTS, ALL_RELATIONS, Element, ElementRelation, relation};
pub use error::CycleError;
pub use pillar::Pillar;
pub use stem::{ALL_STEMS, Polarity, Stem};
pub use util::{
    BRANCH_CYCLE, NINE_PALACE_CYCLE, SEXAGENARY_CYCLE, STEM_CYCLE, cyclic, wrap10, wrap12,
};
