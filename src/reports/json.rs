//! JSON report generator.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::engine::{
    Assessment, BenchmarkComparison, BudgetPlan, HardwareRefreshAdvisory, MatrixPoint,
    MaturityTier, Projection, Recommendation, RecommendationCounts,
};
use crate::error::{AuditError, ReportErrorKind, Result};
use crate::model::{Benchmark, ClientInfo};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, report: &T) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
        .map_err(|e| {
            AuditError::report(
                "serializing JSON report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_assessment_report(
        &self,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String> {
        let limit = config.recommendation_limit(assessment.recommendations.len());
        let report = JsonAssessmentReport {
            metadata: JsonReportMetadata::from_config(config),
            client: &config.client,
            summary: JsonSummary {
                maturity: assessment.maturity,
                tier: assessment.tier,
                tier_label: assessment.tier.label(),
                answered: assessment.answered,
                question_count: assessment.question_count,
                completion_percent: assessment.completion_percent(),
                weakest_domains: &assessment.weakest_domains,
            },
            domain_scores: &assessment.domain_scores,
            counts: &assessment.counts,
            recommendations: &assessment.recommendations[..limit],
            omitted_recommendations: assessment.recommendations.len() - limit,
            budget: &assessment.budget,
            benchmark: assessment.benchmark.as_ref(),
            comparison: assessment.comparison.as_ref(),
            quick_wins: &assessment.quick_wins,
            hardware_advisory: assessment.hardware_advisory.as_ref(),
        };
        self.serialize(&report)
    }

    fn generate_projection_report(
        &self,
        projection: &Projection,
        config: &ReportConfig,
    ) -> Result<String> {
        let report = JsonProjectionReport {
            metadata: JsonReportMetadata::from_config(config),
            client: &config.client,
            domain_gains: projection.domain_gains().collect(),
            projection,
        };
        self.serialize(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON structures
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_path: Option<&'a str>,
}

impl<'a> JsonReportMetadata<'a> {
    fn from_config(config: &'a ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: config
                .metadata
                .generated_at
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            session_path: config.metadata.session_path.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAssessmentReport<'a> {
    metadata: JsonReportMetadata<'a>,
    client: &'a ClientInfo,
    summary: JsonSummary<'a>,
    domain_scores: &'a IndexMap<String, u8>,
    counts: &'a RecommendationCounts,
    recommendations: &'a [Recommendation],
    #[serde(skip_serializing_if = "is_zero")]
    omitted_recommendations: usize,
    budget: &'a BudgetPlan,
    benchmark: Option<&'a Benchmark>,
    comparison: Option<&'a BenchmarkComparison>,
    quick_wins: &'a [MatrixPoint],
    hardware_advisory: Option<&'a HardwareRefreshAdvisory>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary<'a> {
    maturity: u8,
    tier: MaturityTier,
    tier_label: &'static str,
    answered: usize,
    question_count: usize,
    completion_percent: u8,
    weakest_domains: &'a [(String, u8)],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonProjectionReport<'a> {
    metadata: JsonReportMetadata<'a>,
    client: &'a ClientInfo,
    projection: &'a Projection,
    domain_gains: IndexMap<&'a str, i16>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &usize) -> bool {
    *n == 0
}
