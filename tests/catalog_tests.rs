//! Catalog loading and integrity checks.

use cyber_maturity::catalog::{load_catalog_file, Catalogs};
use cyber_maturity::config::CatalogConfig;
use cyber_maturity::error::{AuditError, CatalogErrorKind};
use cyber_maturity::model::{BenchmarkTable, QuestionCatalog};
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn catalog_fixture(name: &str) -> PathBuf {
    PathBuf::from(FIXTURES_DIR).join("catalogs").join(name)
}

#[test]
fn test_builtin_ids_and_titles_are_unique() {
    let catalogs = Catalogs::builtin();

    let mut titles = HashSet::new();
    for category in &catalogs.questions.categories {
        assert!(titles.insert(&category.title), "duplicate title {}", category.title);
    }

    let mut ids = HashSet::new();
    for (_, question) in catalogs.questions.questions() {
        assert!(ids.insert(&question.id), "duplicate id {}", question.id);
        assert!(question.options.len() >= 2);
        assert!(question.weight > 0);
    }

    for (id, item) in catalogs.budget.iter() {
        assert!(catalogs.questions.contains(id), "budget key {id} has no question");
        assert!(item.phase < 3);
    }
}

#[test]
fn test_broken_catalog_reports_every_violation() {
    let catalogs = Catalogs::load_unchecked(&CatalogConfig {
        questions: Some(catalog_fixture("broken.yaml")),
        ..CatalogConfig::default()
    })
    .unwrap();

    let violations = catalogs.check();
    for expected in [
        CatalogErrorKind::DuplicateQuestionId("q1".to_string()),
        CatalogErrorKind::TooFewOptions {
            id: "q1".to_string(),
            count: 1,
        },
        CatalogErrorKind::ZeroWeight("q1".to_string()),
        CatalogErrorKind::DuplicateCategoryTitle("Governance".to_string()),
    ] {
        assert!(violations.contains(&expected), "missing {expected}");
    }

    // built-in budget items now point at questions that no longer exist
    assert!(violations
        .iter()
        .any(|v| matches!(v, CatalogErrorKind::UnknownBudgetQuestion(id) if id == "gov-1")));
}

#[test]
fn test_checked_load_rejects_broken_catalog() {
    let err = Catalogs::load(&CatalogConfig {
        questions: Some(catalog_fixture("broken.yaml")),
        ..CatalogConfig::default()
    })
    .unwrap_err();

    assert!(matches!(err, AuditError::Catalog { .. }));
}

#[test]
fn test_partial_override_keeps_other_builtins() {
    let builtin = Catalogs::builtin();
    let catalogs = Catalogs::load_unchecked(&CatalogConfig {
        benchmarks: Some(catalog_fixture("two_questions_benchmarks.json")),
        ..CatalogConfig::default()
    })
    .unwrap();

    assert_eq!(catalogs.questions, builtin.questions);
    assert_eq!(catalogs.budget, builtin.budget);
    assert_eq!(catalogs.benchmarks.keys().collect::<Vec<_>>(), ["Health", "Municipality"]);
}

#[test]
fn test_json_and_yaml_exports_load_back() {
    let dir = TempDir::new().unwrap();
    let builtin = Catalogs::builtin();

    let json_path = dir.path().join("questions.json");
    std::fs::write(&json_path, serde_json::to_string(&builtin.questions).unwrap()).unwrap();
    let from_json: QuestionCatalog = load_catalog_file(&json_path).unwrap();
    assert_eq!(from_json, builtin.questions);

    let yaml_path = dir.path().join("benchmarks.yml");
    std::fs::write(&yaml_path, serde_yaml::to_string(&builtin.benchmarks).unwrap()).unwrap();
    let from_yaml: BenchmarkTable = load_catalog_file(&yaml_path).unwrap();
    assert_eq!(from_yaml, builtin.benchmarks);
}

#[test]
fn test_unknown_extension_and_missing_file() {
    let dir = TempDir::new().unwrap();
    let toml_path = dir.path().join("questions.toml");
    std::fs::write(&toml_path, "categories = []").unwrap();

    let err = load_catalog_file::<QuestionCatalog>(&toml_path).unwrap_err();
    assert!(matches!(
        err,
        AuditError::Catalog {
            source: CatalogErrorKind::InvalidFormat(_),
            ..
        }
    ));

    let err = load_catalog_file::<QuestionCatalog>(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, AuditError::Io { .. }));
}

#[test]
fn test_malformed_yaml_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.yaml");
    std::fs::write(&path, "categories:\n  - title: [unclosed\n").unwrap();

    let err = load_catalog_file::<QuestionCatalog>(&path).unwrap_err();
    assert!(err.to_string().contains("questions.yaml"));
}
