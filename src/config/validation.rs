//! Configuration validation for cyber-maturity.

use super::types::{AppConfig, BehaviorConfig, CatalogConfig, OutputConfig};
use crate::error::{AuditError, Result};
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.catalogs.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("catalogs.questions", &self.questions),
            ("catalogs.budget_items", &self.budget_items),
            ("catalogs.benchmarks", &self.benchmarks),
        ]
        .into_iter()
        .filter_map(|(field, path)| {
            let path = path.as_deref()?;
            (!path.exists())
                .then(|| ConfigError::new(field, format!("File not found: {}", path.display())))
        })
        .collect()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(file_path) = &self.file {
            if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !Path::new(parent).exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if self.max_recommendations == Some(0) {
            errors.push(ConfigError::new(
                "output.max_recommendations",
                "Must be at least 1 (omit to list every recommendation)",
            ));
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_maturity {
            if min > 100 {
                errors.push(ConfigError::new(
                    "behavior.min_maturity",
                    format!("Must be between 0 and 100, got {min}"),
                ));
            }
        }
        errors
    }
}

impl AppConfig {
    /// The config itself, or an [`AuditError::Config`] listing every problem.
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(AuditError::config(messages.join("; ")))
    }
}
