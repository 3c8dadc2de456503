//! Catalog and session loading.

use super::PipelineError;
use crate::catalog::Catalogs;
use crate::config::CatalogConfig;
use crate::session::{AnswerValidation, SessionRecord};
use std::path::Path;

/// Load the catalogs named in `config`, falling back to the built-in ones.
pub fn load_catalogs(config: &CatalogConfig, quiet: bool) -> Result<Catalogs, PipelineError> {
    if !config.is_custom() {
        return Ok(Catalogs::builtin());
    }

    let catalogs =
        Catalogs::load(config).map_err(|source| PipelineError::CatalogLoadFailed { source })?;
    if !quiet {
        tracing::info!(
            "Loaded custom catalogs: {} questions, {} budget items, {} benchmarks",
            catalogs.questions.question_count(),
            catalogs.budget.len(),
            catalogs.benchmarks.len()
        );
    }
    Ok(catalogs)
}

/// Load and validate a session record against the question catalog.
pub fn load_session(
    path: &Path,
    catalogs: &Catalogs,
    mode: AnswerValidation,
    quiet: bool,
) -> Result<SessionRecord, PipelineError> {
    if !quiet {
        tracing::info!("Loading session: {}", path.display());
    }

    let record = SessionRecord::load(path, &catalogs.questions, mode).map_err(|source| {
        PipelineError::SessionLoadFailed {
            path: path.display().to_string(),
            source,
        }
    })?;

    if !quiet {
        tracing::info!(
            "Loaded {} answers for '{}'",
            record.answers.len(),
            record.client_info.name
        );
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answers, ClientInfo};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalogs_by_default() {
        let catalogs = load_catalogs(&CatalogConfig::default(), true).unwrap();
        assert_eq!(catalogs, Catalogs::builtin());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = CatalogConfig {
            benchmarks: Some(PathBuf::from("/nonexistent/benchmarks.yaml")),
            ..CatalogConfig::default()
        };
        let err = load_catalogs(&config, true).unwrap_err();
        assert!(matches!(err, PipelineError::CatalogLoadFailed { .. }));
    }

    #[test]
    fn test_session_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audit.json");
        let answers: Answers = [("gov-1", 2)].into_iter().collect();
        SessionRecord::new(ClientInfo::named("Town hall"), answers)
            .save(&path)
            .unwrap();

        let catalogs = Catalogs::builtin();
        let record = load_session(&path, &catalogs, AnswerValidation::Strict, true).unwrap();
        assert_eq!(record.answers.get("gov-1"), Some(2));
    }

    #[test]
    fn test_session_error_names_path() {
        let catalogs = Catalogs::builtin();
        let err = load_session(
            Path::new("/nonexistent/audit.json"),
            &catalogs,
            AnswerValidation::Strict,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/audit.json"));
    }
}
