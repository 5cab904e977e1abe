//! Chart → advisory report orchestration.

use serde::Serialize;
use tracing::{info, warn};

use tianji_charts::BaziChart;

use crate::client::TextGenerator;
use crate::error::AdvisoryError;
use crate::prompt::{ChartSummary, build_prompt};
use crate::report::AdvisoryReport;

/// A report plus the error that forced placeholders, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub report: AdvisoryReport,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "display_error")]
    pub error: Option<AdvisoryError>,
}

fn display_error<S: serde::Serializer>(
    error: &Option<AdvisoryError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_str(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Sends one prompt per chart to a [`TextGenerator`]. No retries.
pub struct Advisor<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Advisor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate and validate a report for `chart` looking at `target_year`.
    pub async fn advise(
        &self,
        chart: &BaziChart,
        target_year: i32,
    ) -> Result<AdvisoryReport, AdvisoryError> {
        let prompt = build_prompt(&ChartSummary::from_chart(chart), target_year);
        let raw = self.generator.generate(&prompt).await?;
        let report = AdvisoryReport::from_json(&raw)?;
        if report.is_complete() {
            info!(target_year, "advisory report complete");
        } else {
            warn!(missing = ?report.missing_fields, "advisory report missing sections");
        }
        Ok(report)
    }

    /// As [`Advisor::advise`], but never fails: errors are logged and a
    /// placeholder report is returned alongside the error.
    pub async fn advise_or_placeholder(&self, chart: &BaziChart, target_year: i32) -> Advice {
        match self.advise(chart, target_year).await {
            Ok(report) => Advice {
                report,
                error: None,
            },
            Err(error) => {
                warn!(%error, "advisory service failed; using placeholder report");
                Advice {
                    report: AdvisoryReport::placeholder(),
                    error: Some(error),
                }
            }
        }
    }
}
