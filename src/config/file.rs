//! Configuration file loading and discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".cyber-maturity.yaml",
    ".cyber-maturity.yml",
    "cyber-maturity.yaml",
    "cyber-maturity.yml",
];

/// Directory under the user config dir holding a global config file.
const CONFIG_DIR_NAME: &str = "cyber-maturity";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/cyber-maturity/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    let user_dir = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME));
    let home = dirs::home_dir();

    [cwd, user_dir, home]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Where `config init` writes a new file: the user config directory, or
/// the current directory when none is available.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(CONFIG_FILE_NAMES[2]),
        |d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAMES[2]),
    )
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Read a config file as a raw YAML document.
///
/// An empty file yields `Value::Null`.
pub fn load_config_document(path: &Path) -> Result<Value, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    let mut config = AppConfig::default();
    config.overlay(&load_config_document(path)?)?;
    Ok(config)
}

/// Layer the discovered config file over `config`.
///
/// Returns the path that was applied. A file that fails to load is
/// skipped with a warning and leaves `config` untouched.
pub fn apply_config_file(config: &mut AppConfig, explicit_path: Option<&Path>) -> Option<PathBuf> {
    let path = discover_config_file(explicit_path)?;
    let applied = load_config_document(&path).and_then(|document| {
        let mut layered = config.clone();
        layered.overlay(&document)?;
        Ok(layered)
    });

    match applied {
        Ok(layered) => {
            tracing::debug!("Loaded config from {}", path.display());
            *config = layered;
            Some(path)
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            None
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Overlay a config file document onto this config.
    ///
    /// Every key present in `document` wins, including keys set back to
    /// their default value. Keys the document omits are kept.
    pub fn overlay(&mut self, document: &Value) -> Result<(), serde_yaml::Error> {
        if document.is_null() {
            return Ok(());
        }
        let mut merged = serde_yaml::to_value(&*self)?;
        overlay_value(&mut merged, document);
        *self = serde_yaml::from_value(merged)?;
        Ok(())
    }

    /// Merge CLI overrides into this config, with `other` taking precedence.
    ///
    /// Only values that differ from their defaults override, so an
    /// untouched CLI flag never erases a file setting.
    pub fn merge(&mut self, other: &Self) {
        // Catalogs
        if other.catalogs.questions.is_some() {
            self.catalogs.questions.clone_from(&other.catalogs.questions);
        }
        if other.catalogs.budget_items.is_some() {
            self.catalogs.budget_items.clone_from(&other.catalogs.budget_items);
        }
        if other.catalogs.benchmarks.is_some() {
            self.catalogs.benchmarks.clone_from(&other.catalogs.benchmarks);
        }

        // Output
        if other.output.format != ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.max_recommendations.is_some() {
            self.output.max_recommendations = other.output.max_recommendations;
        }

        // Behavior
        if !other.behavior.strict_answers {
            self.behavior.strict_answers = false;
        }
        if other.behavior.min_maturity.is_some() {
            self.behavior.min_maturity = other.behavior.min_maturity;
        }
        if other.behavior.fail_on_critical {
            self.behavior.fail_on_critical = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }
}

/// Recursive mapping merge; any non-mapping value in `layer` replaces.
fn overlay_value(base: &mut Value, layer: &Value) {
    match (base, layer) {
        (Value::Mapping(base), Value::Mapping(layer)) => {
            for (key, value) in layer {
                match base.get_mut(key) {
                    Some(slot) => overlay_value(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# cyber-maturity configuration file
# ==================================
#
# Place it at:
#   - .cyber-maturity.yaml in the working directory
#   - ~/.config/cyber-maturity/cyber-maturity.yaml for global config
#
# CLI arguments always override file settings.

# Replacement catalogs (YAML or JSON, chosen by extension)
# catalogs:
#   questions: ./catalogs/questions.yaml
#   budget_items: ./catalogs/budget.yaml
#   benchmarks: ./catalogs/benchmarks.yaml

# Output configuration
output:
  # Format: summary, json, markdown, csv
  format: summary
  # Output file path (omit for stdout)
  # file: report.md
  # Disable colored output
  no_color: false
  # Only list the first N recommendations
  # max_recommendations: 10

# Behavior flags
behavior:
  # Reject sessions with out-of-range answers (false drops them with a warning)
  strict_answers: true
  # Exit with code 1 below this maturity percentage
  # min_maturity: 50
  # Exit with code 1 when critical recommendations are raised
  fail_on_critical: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
