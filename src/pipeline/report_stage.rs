//! Report output stage.

use super::{should_use_color, write_output, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::engine::{Assessment, Projection};
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;

/// Render an assessment in the configured format and write it out.
pub fn output_assessment(
    assessment: &Assessment,
    report_config: &ReportConfig,
    output: &OutputConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter =
        create_reporter_with_options(output.format, should_use_color(output.no_color, &target));
    let report = reporter
        .generate_assessment_report(assessment, report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &target, quiet)
}

/// Render a projection in the configured format and write it out.
pub fn output_projection(
    projection: &Projection,
    report_config: &ReportConfig,
    output: &OutputConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter =
        create_reporter_with_options(output.format, should_use_color(output.no_color, &target));
    let report = reporter
        .generate_projection_report(projection, report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &target, quiet)
}
