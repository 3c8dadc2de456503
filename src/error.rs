//! Unified error types for cyber-maturity.
//!
//! The assessment engine itself is total over valid input, so errors only
//! surface at the boundaries: loading catalogs, importing saved sessions,
//! rendering reports and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cyber-maturity operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    /// Catalog loading or consistency errors
    #[error("Invalid catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while importing a saved session
    #[error("Failed to import session: {context}")]
    Session {
        context: String,
        #[source]
        source: SessionErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Catalog consistency violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("Duplicate category title: {0}")]
    DuplicateCategoryTitle(String),

    #[error("Question '{id}' has {count} option(s), at least 2 are required")]
    TooFewOptions { id: String, count: usize },

    #[error("Question '{0}' has a zero weight")]
    ZeroWeight(String),

    #[error("Question '{id}' has an effort/impact rating of {value}, expected 1-3")]
    InvalidRating { id: String, value: u8 },

    #[error("Budget item for '{id}' has phase {phase}, expected 0, 1 or 2")]
    InvalidPhase { id: String, phase: usize },

    #[error("Budget item keyed by unknown question id: {0}")]
    UnknownBudgetQuestion(String),

    #[error("Unsupported catalog format: {0}")]
    InvalidFormat(String),
}

/// Session import error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Answer for '{id}' is not a non-negative integer: {value}")]
    NonIntegerAnswer { id: String, value: String },

    #[error("Answer for '{id}' is out of range: index {index}, question has {options} options")]
    AnswerOutOfRange {
        id: String,
        index: i64,
        options: usize,
    },

    #[error("Unsupported session version: {version} (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },
}

/// Report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for cyber-maturity operations
pub type Result<T> = std::result::Result<T, AuditError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AuditError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a session import error with context
    pub fn session(context: impl Into<String>, source: SessionErrorKind) -> Self {
        Self::Session {
            context: context.into(),
            source,
        }
    }

    /// Create a session error for a missing top-level field
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::session(
            "missing required field",
            SessionErrorKind::MissingField(field.into()),
        )
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::session(
            "JSON deserialization",
            SessionErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error raised deep inside session
/// import reads like `loading workshop.json: parsing answers: ...`.
///
/// # Example
///
/// ```ignore
/// use cyber_maturity::error::ErrorContext;
///
/// fn load(path: &Path, catalog: &QuestionCatalog) -> Result<SessionRecord> {
///     let content = std::fs::read_to_string(path)
///         .context("reading session file")?;
///
///     SessionRecord::from_json(&content, catalog, AnswerValidation::Strict)
///         .with_context(|| format!("importing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AuditError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: AuditError, new_ctx: &str) -> AuditError {
    match err {
        AuditError::Catalog {
            context: existing,
            source,
        } => AuditError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Session {
            context: existing,
            source,
        } => AuditError::Session {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Report {
            context: existing,
            source,
        } => AuditError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Io {
            path,
            message,
            source,
        } => AuditError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AuditError::Config(msg) => AuditError::Config(chain_context(new_ctx, &msg)),
        AuditError::Validation(msg) => AuditError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing was there yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::missing_field("clientInfo");
        let display = err.to_string();
        assert!(
            display.contains("import session"),
            "Error message should mention session import: {}",
            display
        );

        let err = AuditError::catalog(
            "checking catalog",
            CatalogErrorKind::DuplicateQuestionId("gov-1".to_string()),
        );
        assert!(err.to_string().contains("Invalid catalog"));
    }

    #[test]
    fn test_source_chain_reaches_kind() {
        use std::error::Error as _;

        let err = AuditError::session(
            "answers",
            SessionErrorKind::AnswerOutOfRange {
                id: "gov-1".to_string(),
                index: 7,
                options: 4,
            },
        );
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("gov-1"));
        assert!(source.contains("index 7"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AuditError::io("/path/to/session.json", io_err);

        assert!(err.to_string().contains("/path/to/session.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AuditError::session(
                "base",
                SessionErrorKind::InvalidJson("eof".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(AuditError::Session { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Session error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(AuditError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
