//! Assess command handler.
//!
//! Implements the `assess` subcommand: load a session, run the full
//! assessment and render the report.

use crate::config::AssessConfig;
use crate::engine::{Assessment, AssessmentEngine};
use crate::pipeline::{exit_codes, load_catalogs, load_session, output_assessment};
use crate::reports::{ReportConfig, ReportMetadata};
use crate::session::AnswerValidation;
use anyhow::Result;

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let catalogs = load_catalogs(&config.catalogs, quiet)?;
    let mode = AnswerValidation::from_strict(config.behavior.strict_answers);
    let record = load_session(&config.session, &catalogs, mode, quiet)?;

    let engine = AssessmentEngine::new(&catalogs);
    let assessment = engine.assess(&record.answers, &record.client_info);

    let report_config = ReportConfig {
        metadata: ReportMetadata::new()
            .with_session_path(config.session.display().to_string()),
        ..ReportConfig::for_client(record.client_info)
    }
    .with_max_recommendations(config.output.max_recommendations);

    output_assessment(&assessment, &report_config, &config.output, quiet)?;

    Ok(threshold_exit_code(
        &assessment,
        config.behavior.min_maturity,
        config.behavior.fail_on_critical,
    ))
}

/// Exit code for the CI thresholds, logging each failure.
#[must_use]
pub fn threshold_exit_code(
    assessment: &Assessment,
    min_maturity: Option<u8>,
    fail_on_critical: bool,
) -> i32 {
    let mut failed = false;

    if let Some(min) = min_maturity {
        if assessment.maturity < min {
            tracing::error!(
                "Maturity {}% is below the minimum of {}%",
                assessment.maturity,
                min
            );
            failed = true;
        }
    }

    if fail_on_critical && assessment.counts.critical > 0 {
        tracing::error!(
            "{} critical recommendations raised",
            assessment.counts.critical
        );
        failed = true;
    }

    if failed {
        exit_codes::CHECK_FAILED
    } else {
        exit_codes::SUCCESS
    }
}
