//! Configuration module for cyber-maturity.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - Layering: preset, then config file, then CLI arguments
//!
//! # Quick Start
//!
//! ```rust
//! use cyber_maturity::config::{AppConfig, ConfigPreset};
//! use cyber_maturity::reports::ReportFormat;
//!
//! let config = AppConfig::from_preset(ConfigPreset::Workshop);
//! assert!(!config.behavior.strict_answers);
//!
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Json)
//!     .min_maturity(Some(60))
//!     .fail_on_critical(true)
//!     .build();
//! assert_eq!(config.behavior.min_maturity, Some(60));
//! ```
//!
//! # Configuration File
//!
//! Place a `.cyber-maturity.yaml` file in the working directory or
//! `~/.config/cyber-maturity/`:
//!
//! ```yaml
//! output:
//!   format: markdown
//! behavior:
//!   strict_answers: false
//!   min_maturity: 50
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, CI_MIN_MATURITY};
pub use types::{
    AppConfig, AppConfigBuilder, AssessConfig, BehaviorConfig, CatalogConfig, OutputConfig,
    SimulateConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    apply_config_file, default_config_path, discover_config_file, generate_full_example_config,
    load_config_document, load_config_file, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete
/// `.cyber-maturity.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        for section in ["catalogs", "output", "behavior", "strict_answers"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
