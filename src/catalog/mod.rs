//! Static reference catalogs.
//!
//! The questionnaire, budget items and sector benchmarks ship built in.
//! Any of them can be replaced by a YAML or JSON file through
//! [`CatalogConfig`](crate::config::CatalogConfig), which keeps the engine
//! free of global state: every computation borrows a [`Catalogs`] bundle.
//!
//! # Example
//!
//! ```
//! use cyber_maturity::catalog::Catalogs;
//!
//! let catalogs = Catalogs::builtin();
//! assert!(catalogs.check().is_empty());
//! assert_eq!(catalogs.questions.categories.len(), 9);
//! ```

mod benchmarks;
mod budget_items;
mod questions;

pub use questions::{SERVER_AGE_QUESTION, STORAGE_SUPPORT_QUESTION};

use crate::config::CatalogConfig;
use crate::error::{AuditError, CatalogErrorKind, ErrorContext, Result};
use crate::model::{BenchmarkTable, BudgetCatalog, QuestionCatalog, PHASE_COUNT};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

/// The three reference tables every assessment is computed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogs {
    pub questions: QuestionCatalog,
    pub budget: BudgetCatalog,
    pub benchmarks: BenchmarkTable,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogs {
    /// The catalogs compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            questions: questions::builtin_questions(),
            budget: budget_items::builtin_budget_items(),
            benchmarks: benchmarks::builtin_benchmarks(),
        }
    }

    #[must_use]
    pub const fn new(
        questions: QuestionCatalog,
        budget: BudgetCatalog,
        benchmarks: BenchmarkTable,
    ) -> Self {
        Self {
            questions,
            budget,
            benchmarks,
        }
    }

    /// Built-in catalogs with any configured files substituted in.
    ///
    /// The result is checked; a catalog with violations is rejected with
    /// the first one found.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let catalogs = Self::load_unchecked(config)?;
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// Like [`load`](Self::load), without the consistency check.
    pub fn load_unchecked(config: &CatalogConfig) -> Result<Self> {
        let mut catalogs = Self::builtin();

        if let Some(path) = &config.questions {
            catalogs.questions = load_catalog_file(path)?;
        }
        if let Some(path) = &config.budget_items {
            catalogs.budget = load_catalog_file(path)?;
        }
        if let Some(path) = &config.benchmarks {
            catalogs.benchmarks = load_catalog_file(path)?;
        }
        Ok(catalogs)
    }

    /// Every consistency violation, in catalog order.
    ///
    /// Scores are keyed by category title and answers by question id, so
    /// both must be unique.
    #[must_use]
    pub fn check(&self) -> Vec<CatalogErrorKind> {
        let mut violations = Vec::new();
        let mut titles = HashSet::new();
        let mut ids = HashSet::new();

        for category in &self.questions.categories {
            if !titles.insert(category.title.as_str()) {
                violations.push(CatalogErrorKind::DuplicateCategoryTitle(category.title.clone()));
            }
            for question in &category.questions {
                if !ids.insert(question.id.as_str()) {
                    violations.push(CatalogErrorKind::DuplicateQuestionId(question.id.clone()));
                }
                if question.options.len() < 2 {
                    violations.push(CatalogErrorKind::TooFewOptions {
                        id: question.id.clone(),
                        count: question.options.len(),
                    });
                }
                if question.weight == 0 {
                    violations.push(CatalogErrorKind::ZeroWeight(question.id.clone()));
                }
                for rating in [question.effort, question.impact].into_iter().flatten() {
                    if !(1..=3).contains(&rating) {
                        violations.push(CatalogErrorKind::InvalidRating {
                            id: question.id.clone(),
                            value: rating,
                        });
                    }
                }
            }
        }

        for (id, item) in self.budget.iter() {
            if item.phase >= PHASE_COUNT {
                violations.push(CatalogErrorKind::InvalidPhase {
                    id: id.to_string(),
                    phase: item.phase,
                });
            }
            if !ids.contains(id) {
                violations.push(CatalogErrorKind::UnknownBudgetQuestion(id.to_string()));
            }
        }

        violations
    }

    /// Fail on the first violation reported by [`check`](Self::check).
    pub fn validate(&self) -> Result<()> {
        let violations = self.check();
        match violations.into_iter().next() {
            None => Ok(()),
            Some(first) => Err(AuditError::catalog("consistency check", first)),
        }
    }
}

/// Deserialize a catalog file, choosing the format by extension.
pub fn load_catalog_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parsed = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        other => {
            return Err(AuditError::catalog(
                path.display().to_string(),
                CatalogErrorKind::InvalidFormat(format!(
                    "unrecognized extension {:?}, expected .json, .yaml or .yml",
                    other.unwrap_or("")
                )),
            ))
        }
    };

    let value = parsed
        .map_err(|message| AuditError::catalog("parsing", CatalogErrorKind::InvalidFormat(message)))
        .with_context(|| format!("loading {}", path.display()))?;
    tracing::debug!("Loaded catalog file {}", path.display());
    Ok(value)
}
