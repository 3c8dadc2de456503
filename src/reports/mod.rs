//! Report generation for assessments and projections.
//!
//! This module renders an [`Assessment`] or a [`Projection`] in one of the
//! supported output formats:
//! - Summary: colored terminal output
//! - JSON: structured data for programmatic integration
//! - Markdown: a shareable written report
//! - CSV: recommendations and budget lines for spreadsheets
//!
//! # Security
//!
//! Catalog text and client details can come from user-supplied files. The
//! `escape` module must be used before embedding them in Markdown or CSV.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::engine::{Assessment, Projection};
use crate::error::Result;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a full assessment
    fn generate_assessment_report(
        &self,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String>;

    /// Render a post-remediation projection
    fn generate_projection_report(
        &self,
        projection: &Projection,
        config: &ReportConfig,
    ) -> Result<String>;

    /// Write an assessment report to a writer
    fn write_assessment_report(
        &self,
        assessment: &Assessment,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate_assessment_report(assessment, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

/// Format a whole-currency amount with space-separated thousands.
pub(crate) fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Signed point change, always with a sign.
pub(crate) fn format_delta(delta: i16) -> String {
    format!("{delta:+}")
}
