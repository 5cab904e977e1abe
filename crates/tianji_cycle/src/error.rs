//! Error types for cycle arithmetic.

use thiserror::Error;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from constructing cyclic symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch of different parity never form a pillar.
    #[error("{} and {} do not form a sexagenary pillar", .stem.glyph(), .branch.glyph())]
    ParityMismatch { stem: Stem, branch: Branch },
}
