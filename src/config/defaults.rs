//! Configuration presets for cyber-maturity.

use super::types::{AppConfig, BehaviorConfig, CatalogConfig, OutputConfig};
use crate::reports::ReportFormat;

/// Maturity floor applied by the CI/CD preset.
pub const CI_MIN_MATURITY: u8 = 50;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Strict answer validation, terminal summary
    Default,
    /// Live group sessions: tolerate stray answers, Markdown handout
    Workshop,
    /// Machine-readable output with failing thresholds
    CiCd,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Workshop => "workshop",
            Self::CiCd => "ci-cd",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "workshop" | "interview" => Some(Self::Workshop),
            "ci-cd" | "cicd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Strict answer validation with a colored terminal summary",
            Self::Workshop => "Lenient answer import with a Markdown report to share",
            Self::CiCd => "JSON output that fails below 50% maturity or on critical gaps",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Workshop, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Workshop => Self::workshop_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Workshop preset.
    ///
    /// - Out-of-range answers are dropped instead of failing the import
    /// - Markdown output
    #[must_use]
    pub fn workshop_preset() -> Self {
        Self {
            catalogs: CatalogConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Markdown,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                strict_answers: false,
                ..BehaviorConfig::default()
            },
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail below [`CI_MIN_MATURITY`] or on any critical recommendation
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            catalogs: CatalogConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                strict_answers: true,
                min_maturity: Some(CI_MIN_MATURITY),
                fail_on_critical: true,
                quiet: true,
            },
        }
    }
}
