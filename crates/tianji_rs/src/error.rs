//! Facade error type.

use thiserror::Error;

use tianji_advisory::AdvisoryError;
use tianji_calendar::CalendarError;
use tianji_charts::ChartError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TianjiError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Advisory(#[from] AdvisoryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CalendarError> for TianjiError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            other => Self::Chart(other.into()),
        }
    }
}

impl From<toml::de::Error> for TianjiError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl TianjiError {
    /// Whether the request itself was malformed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Chart(ChartError::InvalidInput(_)))
    }
}
