//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [calendar]
//! standard_meridian_deg = 120.0
//! apply_solar_time = true
//! zi_hour_mode = "modern"
//!
//! [qimen]
//! cooldown_hours = 6
//! lock_file = "locks.json"
//!
//! [advisory]
//! endpoint = "https://api.openai.com/v1"
//! model = "gpt-4o-mini"
//! ```
//!
//! Every section is optional. Without `[advisory]` the advisory service is
//! disabled.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use tianji_advisory::AdvisoryConfig;
use tianji_calendar::ConverterConfig;
use tianji_charts::DEFAULT_COOLDOWN_HOURS;

use crate::error::TianjiError;

/// Qimen gate settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QimenConfig {
    pub cooldown_hours: u32,
    /// JSON lock file; absent keeps locks in memory.
    pub lock_file: Option<PathBuf>,
}

impl Default for QimenConfig {
    fn default() -> Self {
        Self {
            cooldown_hours: DEFAULT_COOLDOWN_HOURS,
            lock_file: None,
        }
    }
}

impl QimenConfig {
    pub fn validate(&self) -> Result<(), TianjiError> {
        if self.cooldown_hours == 0 {
            return Err(TianjiError::InvalidConfig("cooldown_hours must be > 0"));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TianjiConfig {
    pub calendar: ConverterConfig,
    pub qimen: QimenConfig,
    pub advisory: Option<AdvisoryConfig>,
}

impl TianjiConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TianjiError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, TianjiError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), TianjiError> {
        self.calendar.validate()?;
        self.qimen.validate()?;
        if let Some(advisory) = &self.advisory {
            advisory.validate()?;
        }
        Ok(())
    }

    /// Override the advisory API key, enabling the default advisory section
    /// if none was configured.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.advisory.get_or_insert_with(AdvisoryConfig::default).api_key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tianji_calendar::ZiHourMode;

    #[test]
    fn empty_file_is_default() {
        let c = TianjiConfig::from_toml_str("").unwrap();
        assert_eq!(c, TianjiConfig::default());
        assert_eq!(c.qimen.cooldown_hours, 6);
        assert!(c.advisory.is_none());
    }

    #[test]
    fn full_file() {
        let c = TianjiConfig::from_toml_str(
            r#"
            [calendar]
            standard_meridian_deg = 135.0
            zi_hour_mode = "traditional"

            [qimen]
            cooldown_hours = 3
            lock_file = "/tmp/locks.json"

            [advisory]
            endpoint = "http://localhost:11434/v1"
            model = "llama3.2"
            max_tokens = 1024
            "#,
        )
        .unwrap();
        assert_eq!(c.calendar.standard_meridian_deg, 135.0);
        assert!(c.calendar.apply_solar_time);
        assert_eq!(c.calendar.zi_hour_mode, ZiHourMode::Traditional);
        assert_eq!(c.qimen.cooldown_hours, 3);
        assert_eq!(c.qimen.lock_file, Some(PathBuf::from("/tmp/locks.json")));
        let adv = c.advisory.unwrap();
        assert_eq!(adv.model, "llama3.2");
        assert_eq!(adv.timeout_secs, 30);
        assert_eq!(adv.max_tokens, 1024);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            TianjiConfig::from_toml_str("[qimen]\ncooldown_hours = 0\n"),
            Err(TianjiError::InvalidConfig(_))
        ));
        assert!(matches!(
            TianjiConfig::from_toml_str("[calendar]\nstandard_meridian_deg = 200.0\n"),
            Err(TianjiError::InvalidConfig(_))
        ));
        assert!(matches!(
            TianjiConfig::from_toml_str("[calendar\n"),
            Err(TianjiError::Config(_))
        ));
    }

    #[test]
    fn api_key_override() {
        let c = TianjiConfig::default().with_api_key("sk-test");
        assert_eq!(c.advisory.unwrap().api_key.as_deref(), Some("sk-test"));
    }
}
