//! Pipeline orchestration for assessment commands.
//!
//! Shared load → assess → report logic, so CLI handlers stay thin:
//! catalogs and sessions are loaded with path context, reports are
//! rendered and written to stdout or a file.

mod load;
mod output;
mod report_stage;

pub use load::{load_catalogs, load_session};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{output_assessment, output_projection};

use crate::error::AuditError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Catalog files could not be read or failed integrity checks
    #[error("Catalog load failed: {source}")]
    CatalogLoadFailed {
        #[source]
        source: AuditError,
    },

    /// Session file could not be read, parsed or validated
    #[error("Session load failed for {path}: {source}")]
    SessionLoadFailed {
        path: String,
        #[source]
        source: AuditError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success, every threshold met
    pub const SUCCESS: i32 = 0;
    /// Maturity below `--min-maturity`, critical gaps with
    /// `--fail-on-critical`, or a failed catalog check
    pub const CHECK_FAILED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
