//! Report output tests across all formats.

use cyber_maturity::catalog::Catalogs;
use cyber_maturity::config::{CatalogConfig, OutputConfig};
use cyber_maturity::engine::{Assessment, AssessmentEngine};
use cyber_maturity::model::{Answers, ClientInfo};
use cyber_maturity::pipeline::output_assessment;
use cyber_maturity::reports::{
    create_reporter, create_reporter_with_options, CsvReporter, ReportConfig, ReportFormat,
    ReportGenerator, SummaryReporter,
};
use std::path::PathBuf;
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn two_question_catalogs() -> Catalogs {
    let dir = PathBuf::from(FIXTURES_DIR).join("catalogs");
    Catalogs::load(&CatalogConfig {
        questions: Some(dir.join("two_questions.yaml")),
        budget_items: Some(dir.join("two_questions_budget.yaml")),
        benchmarks: Some(dir.join("two_questions_benchmarks.json")),
    })
    .expect("fixture catalogs load")
}

fn scenario_answers() -> Answers {
    [("q1", 0), ("q2", 3)].into_iter().collect()
}

fn builtin_assessment(client: &ClientInfo) -> Assessment {
    let catalogs = Catalogs::builtin();
    let answers: Answers = [("gov-1", 3), ("gov-2", 1), ("net-1", 0), ("obs-1", 3), ("obs-2", 3)]
        .into_iter()
        .collect();
    AssessmentEngine::new(&catalogs).assess(&answers, client)
}

#[test]
fn test_every_format_renders() {
    let client = ClientInfo::named("Town hall").with_type("Préfecture");
    let assessment = builtin_assessment(&client);
    let config = ReportConfig::for_client(client);

    for format in [
        ReportFormat::Summary,
        ReportFormat::Json,
        ReportFormat::Markdown,
        ReportFormat::Csv,
    ] {
        let reporter = create_reporter(format);
        assert_eq!(reporter.format(), format);
        let report = reporter
            .generate_assessment_report(&assessment, &config)
            .unwrap_or_else(|e| panic!("{format} failed: {e}"));
        assert!(!report.is_empty(), "{format} report is empty");
    }
}

#[test]
fn test_csv_for_scenario() {
    let catalogs = two_question_catalogs();
    let assessment =
        AssessmentEngine::new(&catalogs).assess(&scenario_answers(), &ClientInfo::default());

    let csv = CsvReporter::new()
        .generate_assessment_report(&assessment, &ReportConfig::default())
        .unwrap();

    let expected = "\
# Domains
Domain,Score
\"Governance\",25

# Recommendations
Level,Priority,Domain,Question ID,Question,Current,Target,Effort,Impact,Regulatory
Critical,3,\"Governance\",\"q1\",\"Is a security policy formalized?\",\"No\",\"Current and known\",1,3,yes

# Budget
Phase,Item,One-time,Recurring,Certified,Market Ref
1,\"Security policy drafting support\",5000,,no,
";
    assert_eq!(csv, expected);
}

#[test]
fn test_summary_projection_snapshot() {
    let catalogs = two_question_catalogs();
    let projection = AssessmentEngine::new(&catalogs).project(&scenario_answers(), &[0]);
    let config = ReportConfig::for_client(ClientInfo::named("Town hall"));

    let report = SummaryReporter::new()
        .no_color()
        .generate_projection_report(&projection, &config)
        .unwrap();

    insta::assert_snapshot!(report, @r"
    Cybersecurity maturity assessment: Town hall (projection)
    ────────────────────────────────────────────────────────────
    Phases:  1
    Maturity:  25% -> 100% (+75)

    Domains:
      Governance                      25% -> 100%  +75
    ");
}

#[test]
fn test_summary_for_scenario() {
    let catalogs = two_question_catalogs();
    let client = ClientInfo::named("Town hall")
        .with_type("Municipality")
        .with_sector("Health");
    let assessment = AssessmentEngine::new(&catalogs).assess(&scenario_answers(), &client);

    let report = create_reporter_with_options(ReportFormat::Summary, false)
        .generate_assessment_report(&assessment, &ReportConfig::for_client(client))
        .unwrap();

    assert!(report.contains("Profile:  Municipality / Health"));
    assert!(report.contains("Maturity:  25% (Initial)"));
    assert!(report.contains("Progress:  2/2 questions answered"));
    assert!(report.contains("Benchmark:  15 points below the Health average of 40%"));
    assert!(report.contains("Recommendations: 1 critical, 0 important (1 regulatory)"));
    assert!(report.contains("[CRITICAL]  q1 Is a security policy formalized? §"));
    assert!(report.contains("Quick wins: q1"));
    assert!(!report.contains("Hardware refresh advised:"));
}

#[test]
fn test_markdown_for_scenario() {
    let catalogs = two_question_catalogs();
    let client = ClientInfo::named("Town hall").with_sector("Health");
    let assessment = AssessmentEngine::new(&catalogs).assess(&scenario_answers(), &client);

    let md = create_reporter(ReportFormat::Markdown)
        .generate_assessment_report(&assessment, &ReportConfig::for_client(client))
        .unwrap();

    assert!(md.starts_with("# Cybersecurity maturity assessment: Town hall\n"));
    assert!(md.contains("| Governance | 25% |"));
    assert!(md.contains("- Ransomware"));
    assert!(md.contains("Is a security policy formalized? (regulatory)"));
    assert!(md.contains("**Total one-time budget:** 5 000"));
    assert!(md.contains("*Nothing to fund in this phase.*"));
}

#[test]
fn test_json_for_scenario() {
    let catalogs = two_question_catalogs();
    let client = ClientInfo::named("Town hall").with_type("Municipality");
    let assessment = AssessmentEngine::new(&catalogs).assess(&scenario_answers(), &client);

    let json = create_reporter(ReportFormat::Json)
        .generate_assessment_report(&assessment, &ReportConfig::for_client(client))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["maturity"], 25);
    assert_eq!(value["domainScores"]["Governance"], 25);
    assert_eq!(value["recommendations"][0]["questionId"], "q1");
    assert_eq!(value["budget"]["total"], 5000);
    assert_eq!(value["comparison"]["key"], "Municipality");
    assert_eq!(value["comparison"]["delta"], -5);
    assert!(value["hardwareAdvisory"].is_null());
}

#[test]
fn test_recommendation_limit_in_summary() {
    let client = ClientInfo::named("Town hall");
    let assessment = builtin_assessment(&client);
    let total = assessment.recommendations.len();
    let config = ReportConfig::for_client(client).with_max_recommendations(Some(3));

    let report = SummaryReporter::new()
        .no_color()
        .generate_assessment_report(&assessment, &config)
        .unwrap();

    let listed = report
        .lines()
        .filter(|l| l.contains("[CRITICAL]") || l.contains("[IMPORTANT]"))
        .count();
    assert_eq!(listed, 3);
    assert!(report.contains(&format!("... and {} more recommendations", total - 3)));
}

#[test]
fn test_output_to_file_is_uncolored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    let client = ClientInfo::named("Town hall");
    let assessment = builtin_assessment(&client);

    let output = OutputConfig {
        format: ReportFormat::Summary,
        file: Some(path.clone()),
        no_color: false,
        max_recommendations: None,
    };
    output_assessment(&assessment, &ReportConfig::for_client(client), &output, true).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Cybersecurity maturity assessment: Town hall"));
    assert!(!written.contains('\x1b'));
}
