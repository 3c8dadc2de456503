//! Configuration types for cyber-maturity.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Alternate catalog files
    pub catalogs: CatalogConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags and thresholds
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn max_recommendations(mut self, max: Option<usize>) -> Self {
        self.config.output.max_recommendations = max;
        self
    }

    pub const fn strict_answers(mut self, strict: bool) -> Self {
        self.config.behavior.strict_answers = strict;
        self
    }

    /// Fail (exit 1) when maturity is below this value.
    pub const fn min_maturity(mut self, min: Option<u8>) -> Self {
        self.config.behavior.min_maturity = min;
        self
    }

    /// Fail (exit 1) when any critical recommendation is raised.
    pub const fn fail_on_critical(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_critical = fail;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    pub fn questions_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalogs.questions = path;
        self
    }

    pub fn budget_items_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalogs.budget_items = path;
        self
    }

    pub fn benchmarks_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalogs.benchmarks = path;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// Catalog files replacing the built-in ones (YAML or JSON, by extension).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Questionnaire file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<PathBuf>,
    /// Budget items file, keyed by question id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_items: Option<PathBuf>,
    /// Sector benchmark file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<PathBuf>,
}

impl CatalogConfig {
    /// Whether any built-in catalog is replaced.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.questions.is_some() || self.budget_items.is_some() || self.benchmarks.is_some()
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Limit the recommendations listed in reports (all when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub max_recommendations: Option<usize>,
}

/// Behavior flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Reject sessions containing out-of-range answers
    pub strict_answers: bool,
    /// Exit with code 1 when maturity is below this percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub min_maturity: Option<u8>,
    /// Exit with code 1 when critical recommendations are raised
    pub fail_on_critical: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            strict_answers: true,
            min_maturity: None,
            fail_on_critical: false,
            quiet: false,
        }
    }
}

/// Configuration for the `assess` command
#[derive(Debug, Clone)]
pub struct AssessConfig {
    /// Session file to assess
    pub session: PathBuf,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
    pub catalogs: CatalogConfig,
}

impl AssessConfig {
    #[must_use]
    pub fn from_app_config(session: PathBuf, config: &AppConfig) -> Self {
        Self {
            session,
            output: config.output.clone(),
            behavior: config.behavior.clone(),
            catalogs: config.catalogs.clone(),
        }
    }
}

/// Configuration for the `simulate` command
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Session file to project
    pub session: PathBuf,
    /// Phase indices assumed delivered
    pub phases: Vec<usize>,
    pub output: OutputConfig,
    pub strict_answers: bool,
    pub quiet: bool,
    pub catalogs: CatalogConfig,
}

impl SimulateConfig {
    #[must_use]
    pub fn from_app_config(session: PathBuf, phases: Vec<usize>, config: &AppConfig) -> Self {
        Self {
            session,
            phases,
            output: config.output.clone(),
            strict_answers: config.behavior.strict_answers,
            quiet: config.behavior.quiet,
            catalogs: config.catalogs.clone(),
        }
    }
}
