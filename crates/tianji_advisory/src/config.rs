//! Text-service client configuration.

use serde::Deserialize;

use crate::error::AdvisoryError;

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Base URL; `/chat/completions` is appended.
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
            max_tokens: 2048,
        }
    }
}

impl AdvisoryConfig {
    pub fn validate(&self) -> Result<(), AdvisoryError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(AdvisoryError::InvalidConfig(
                "endpoint must be an http(s) URL",
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AdvisoryError::InvalidConfig("model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AdvisoryError::InvalidConfig("timeout_secs must be > 0"));
        }
        if self.max_tokens == 0 {
            return Err(AdvisoryError::InvalidConfig("max_tokens must be > 0"));
        }
        Ok(())
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        AdvisoryConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_values() {
        let bad = AdvisoryConfig {
            endpoint: "ftp://x".into(),
            ..AdvisoryConfig::default()
        };
        assert!(bad.validate().is_err());
        let bad = AdvisoryConfig {
            timeout_secs: 0,
            ..AdvisoryConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn url_joins_cleanly() {
        let c = AdvisoryConfig {
            endpoint: "http://localhost:11434/v1/".into(),
            ..AdvisoryConfig::default()
        };
        assert_eq!(c.completions_url(), "http://localhost:11434/v1/chat/completions");
    }
}
