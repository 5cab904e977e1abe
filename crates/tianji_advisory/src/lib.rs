//! Narrative advisory reports for tianji charts.
//!
//! This crate provides:
//! - A prompt builder over a BaZi chart summary and a target year
//! - The `TextGenerator` seam and an OpenAI-compatible HTTP client
//! - Balanced-JSON extraction from free-form model output
//! - Report validation that fills missing sections with placeholder text
//!
//! Failures here never fail a chart request: [`Advisor::advise_or_placeholder`]
//! always returns a report.

pub mod advisor;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod report;

pub use advisor::{Advice, Advisor};
pub use client::{HttpTextGenerator, TextGenerator};
pub use config::AdvisoryConfig;
pub use error::AdvisoryError;
pub use extract::extract_json_object;
pub use prompt::{ChartSummary, REPORT_FIELDS, build_prompt};
pub use report::{AdvisoryReport, PLACEHOLDER};
