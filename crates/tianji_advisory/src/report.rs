//! Advisory report validation.

use serde::Serialize;
use serde_json::Value;

use crate::error::AdvisoryError;
use crate::extract::extract_json_object;
use crate::prompt::REPORT_FIELDS;

/// Text shown for any section the service did not provide.
pub const PLACEHOLDER: &str = "This section is not available right now. Please try again later.";

/// Narrative sections of an advisory reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryReport {
    pub overview: String,
    pub personality: String,
    pub career: String,
    pub wealth: String,
    pub relationships: String,
    pub health: String,
    pub study: String,
    pub family: String,
    pub luck_cycle: String,
    pub annual_outlook: String,
    pub favorable_elements: String,
    pub advice: String,
    /// Fields that were absent, empty or not strings and hold the placeholder.
    pub missing_fields: Vec<String>,
}

impl AdvisoryReport {
    /// Report with every section set to the placeholder.
    pub fn placeholder() -> Self {
        let mut report = Self::from_fields(|_| None);
        report.missing_fields = REPORT_FIELDS.iter().map(|f| f.to_string()).collect();
        report
    }

    /// Parse the first JSON object found in `raw`.
    ///
    /// Fails only when there is no object or it is not valid JSON. Missing
    /// sections are filled with [`PLACEHOLDER`] and listed in
    /// `missing_fields`.
    pub fn from_json(raw: &str) -> Result<Self, AdvisoryError> {
        let object = extract_json_object(raw).ok_or(AdvisoryError::MissingJson)?;
        let value: Value = serde_json::from_str(object)?;

        let mut missing = Vec::new();
        let mut report = Self::from_fields(|field| {
            let text = value
                .get(field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            if text.is_none() {
                missing.push(field.to_string());
            }
            text
        });
        report.missing_fields = missing;
        Ok(report)
    }

    /// Whether every section came from the service.
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }

    /// Section text by field name.
    pub fn section(&self, field: &str) -> Option<&str> {
        let text = match field {
            "overview" => &self.overview,
            "personality" => &self.personality,
            "career" => &self.career,
            "wealth" => &self.wealth,
            "relationships" => &self.relationships,
            "health" => &self.health,
            "study" => &self.study,
            "family" => &self.family,
            "luck_cycle" => &self.luck_cycle,
            "annual_outlook" => &self.annual_outlook,
            "favorable_elements" => &self.favorable_elements,
            "advice" => &self.advice,
            _ => return None,
        };
        Some(text)
    }

    fn from_fields(mut lookup: impl FnMut(&'static str) -> Option<String>) -> Self {
        let mut take = |field| lookup(field).unwrap_or_else(|| PLACEHOLDER.to_string());
        Self {
            overview: take("overview"),
            personality: take("personality"),
            career: take("career"),
            wealth: take("wealth"),
            relationships: take("relationships"),
            health: take("health"),
            study: take("study"),
            family: take("family"),
            luck_cycle: take("luck_cycle"),
            annual_outlook: take("annual_outlook"),
            favorable_elements: take("favorable_elements"),
            advice: take("advice"),
            missing_fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_reply() {
        let body = REPORT_FIELDS
            .iter()
            .map(|f| format!("\"{f}\": \"text for {f}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let r = AdvisoryReport::from_json(&format!("Sure! {{{body}}}")).unwrap();
        assert!(r.is_complete());
        assert_eq!(r.career, "text for career");
        assert_eq!(r.section("luck_cycle"), Some("text for luck_cycle"));
    }

    #[test]
    fn partial_reply_gets_placeholders() {
        let r = AdvisoryReport::from_json(
            r#"{"overview": "ok", "career": 42, "wealth": "   ", "bogus": "x"}"#,
        )
        .unwrap();
        assert_eq!(r.overview, "ok");
        assert_eq!(r.career, PLACEHOLDER);
        assert_eq!(r.wealth, PLACEHOLDER);
        assert_eq!(r.missing_fields.len(), REPORT_FIELDS.len() - 1);
        assert!(r.missing_fields.contains(&"career".to_string()));
        assert!(!r.missing_fields.contains(&"overview".to_string()));
    }

    #[test]
    fn no_json_is_an_error() {
        assert_eq!(
            AdvisoryReport::from_json("I cannot help with that."),
            Err(AdvisoryError::MissingJson)
        );
        assert!(matches!(
            AdvisoryReport::from_json("{\"overview\": }"),
            Err(AdvisoryError::Parse(_))
        ));
    }

    #[test]
    fn placeholder_lists_everything() {
        let r = AdvisoryReport::placeholder();
        assert_eq!(r.missing_fields.len(), 12);
        assert_eq!(r.advice, PLACEHOLDER);
        assert_eq!(r.section("nope"), None);
    }
}
