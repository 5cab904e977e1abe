//! Error types for calendar conversion.

use thiserror::Error;

use tianji_cycle::CycleError;

/// Errors from parsing civil time or converting it to calendar coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Malformed or out-of-range date, time or longitude.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Converter configuration rejected at construction time.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The underlying conversion service could not produce a result.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

impl CalendarError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<CycleError> for CalendarError {
    fn from(e: CycleError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tianji_cycle::{Branch, Pillar, Stem};

    #[test]
    fn parity_mismatch_is_invalid_input() {
        let err: CalendarError = Pillar::new(Stem::Jia, Branch::Chou).unwrap_err().into();
        assert!(matches!(err, CalendarError::InvalidInput(_)));
    }
}
