//! Error types for chart construction.

use thiserror::Error;

use tianji_calendar::CalendarError;

/// Errors from building a chart or touching the cooldown store.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed date, time, longitude or tag. Fatal to the request.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Calendar conversion failed for a reason other than bad input.
    #[error("calendar error: {0}")]
    Calendar(CalendarError),
    /// The cooldown store could not be read or written.
    #[error("cooldown store error: {0}")]
    Store(String),
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::Calendar(other),
        }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(e: std::io::Error) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Store(e.to_string())
    }
}
