//! Ziwei Dou Shu chart builder.

pub mod chart;
pub mod stars;
pub mod types;

pub use chart::{bureau_for, body_palace_index, compute_ziwei, life_palace_index, palace_stem};
pub use stars::{
    MANSION_SERIES, PURPLE_SERIES, auxiliary_star_positions, major_star_positions,
    mansion_star_index, purple_star_index,
};
pub use types::{
    ALL_LIFE_AREAS, Brightness, Bureau, DecadeRange, LifeArea, Star, StarCategory, StarKind,
    ZiweiChart, ZiweiPalace,
};
