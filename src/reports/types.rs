//! Report type definitions.

use crate::model::ClientInfo;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Colored terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
    /// CSV for spreadsheet import
    Csv,
}

impl ReportFormat {
    /// Conventional file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Summary => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Organization the report is written for
    pub client: ClientInfo,
    /// Maximum recommendations listed (all when `None`)
    pub max_recommendations: Option<usize>,
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    #[must_use]
    pub fn for_client(client: ClientInfo) -> Self {
        Self {
            client,
            metadata: ReportMetadata::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_recommendations(mut self, max: Option<usize>) -> Self {
        self.max_recommendations = max;
        self
    }

    /// Title, falling back to one built from the client name.
    #[must_use]
    pub fn title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        if self.client.has_name() {
            format!("Cybersecurity maturity assessment: {}", self.client.name.trim())
        } else {
            "Cybersecurity maturity assessment".to_string()
        }
    }

    /// How many of `total` recommendations to list.
    #[must_use]
    pub fn recommendation_limit(&self, total: usize) -> usize {
        self.max_recommendations.map_or(total, |max| max.min(total))
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Session file the answers came from
    pub session_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_session_path(mut self, path: impl Into<String>) -> Self {
        self.session_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let parsed = ReportFormat::from_str(&format.to_string(), true).unwrap();
            assert_eq!(parsed, *format);
        }
        assert_eq!(
            ReportFormat::from_str("md", true).unwrap(),
            ReportFormat::Markdown
        );
    }

    #[test]
    fn test_title_fallbacks() {
        let config = ReportConfig::for_client(ClientInfo::named("  Town hall "));
        assert_eq!(config.title(), "Cybersecurity maturity assessment: Town hall");
        assert_eq!(
            ReportConfig::default().title(),
            "Cybersecurity maturity assessment"
        );
    }

    #[test]
    fn test_recommendation_limit() {
        let config = ReportConfig::default().with_max_recommendations(Some(3));
        assert_eq!(config.recommendation_limit(10), 3);
        assert_eq!(config.recommendation_limit(2), 2);
        assert_eq!(ReportConfig::default().recommendation_limit(7), 7);
    }
}
