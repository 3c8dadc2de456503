//! Simulate command handler.
//!
//! Implements the `simulate` subcommand: project maturity assuming the
//! selected budget phases are fully delivered.

use crate::config::SimulateConfig;
use crate::engine::AssessmentEngine;
use crate::model::PHASE_COUNT;
use crate::pipeline::{exit_codes, load_catalogs, load_session, output_projection};
use crate::reports::{ReportConfig, ReportMetadata};
use crate::session::AnswerValidation;
use anyhow::{bail, Result};

/// Run the simulate command, returning the desired exit code.
pub fn run_simulate(config: SimulateConfig) -> Result<i32> {
    if let Some(phase) = config.phases.iter().find(|p| **p >= PHASE_COUNT) {
        bail!(
            "Unknown phase {phase}. Valid phases: 0 to {}",
            PHASE_COUNT - 1
        );
    }

    let catalogs = load_catalogs(&config.catalogs, config.quiet)?;
    let mode = AnswerValidation::from_strict(config.strict_answers);
    let record = load_session(&config.session, &catalogs, mode, config.quiet)?;

    let projection = AssessmentEngine::new(&catalogs).project(&record.answers, &config.phases);
    if !config.quiet {
        tracing::info!(
            "Projected maturity {}% -> {}% with phases {:?}",
            projection.actual_maturity,
            projection.maturity,
            projection.selected_phases
        );
    }

    let report_config = ReportConfig {
        metadata: ReportMetadata::new()
            .with_session_path(config.session.display().to_string()),
        ..ReportConfig::for_client(record.client_info)
    };
    output_projection(&projection, &report_config, &config.output, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, OutputConfig};
    use std::path::PathBuf;

    #[test]
    fn test_rejects_unknown_phase() {
        let config = SimulateConfig {
            session: PathBuf::from("/nonexistent/audit.json"),
            phases: vec![0, 3],
            output: OutputConfig::default(),
            strict_answers: true,
            quiet: true,
            catalogs: CatalogConfig::default(),
        };
        let err = run_simulate(config).unwrap_err();
        assert!(err.to_string().contains("Unknown phase 3"));
    }
}
