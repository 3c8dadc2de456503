//! CSV report generator.
//!
//! Emits domain scores, recommendations and budget lines as separate
//! `#`-headed sections, suitable for spreadsheet import.

use super::escape::csv_field;
use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::engine::{Assessment, Projection, Recommendation};
use crate::error::Result;
use crate::model::BudgetItem;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_assessment_report(
        &self,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut content = String::new();

        content.push_str("# Domains\n");
        content.push_str("Domain,Score\n");
        for (title, score) in &assessment.domain_scores {
            content.push_str(&format!("{},{score}\n", csv_field(title)));
        }

        content.push_str("\n# Recommendations\n");
        content.push_str(
            "Level,Priority,Domain,Question ID,Question,Current,Target,Effort,Impact,Regulatory\n",
        );
        let limit = config.recommendation_limit(assessment.recommendations.len());
        for rec in assessment.recommendations.iter().take(limit) {
            write_recommendation_line(&mut content, rec);
        }

        content.push_str("\n# Budget\n");
        content.push_str("Phase,Item,One-time,Recurring,Certified,Market Ref\n");
        for phase in &assessment.budget.phases {
            for item in &phase.items {
                write_budget_line(&mut content, phase.index + 1, item);
            }
        }

        Ok(content)
    }

    fn generate_projection_report(
        &self,
        projection: &Projection,
        _config: &ReportConfig,
    ) -> Result<String> {
        let mut content = String::new();

        content.push_str("Domain,Current,Projected,Change\n");
        for (title, gain) in projection.domain_gains() {
            content.push_str(&format!(
                "{},{},{},{gain}\n",
                csv_field(title),
                projection.actual_domain_scores.get(title).copied().unwrap_or(0),
                projection.domain_scores.get(title).copied().unwrap_or(0),
            ));
        }
        content.push_str(&format!(
            "{},{},{},{}\n",
            csv_field("Overall"),
            projection.actual_maturity,
            projection.maturity,
            projection.gain
        ));

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn write_recommendation_line(content: &mut String, rec: &Recommendation) {
    let rating = |r: Option<u8>| r.map_or_else(String::new, |v| v.to_string());
    content.push_str(&format!(
        "{},{},{},{},{},{},{},{},{},{}\n",
        rec.level,
        rec.priority,
        csv_field(&rec.category),
        csv_field(&rec.question_id),
        csv_field(&rec.question),
        csv_field(&rec.current_state),
        csv_field(&rec.target_state),
        rating(rec.effort),
        rating(rec.impact),
        if rec.regulatory { "yes" } else { "no" }
    ));
}

fn write_budget_line(content: &mut String, phase: usize, item: &BudgetItem) {
    content.push_str(&format!(
        "{phase},{},{},{},{},{}\n",
        csv_field(&item.name),
        item.cost,
        item.recurrent_cost.map_or_else(String::new, |c| c.to_string()),
        if item.regulatory_certified { "yes" } else { "no" },
        item.market_ref.as_deref().map(csv_field).unwrap_or_default()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::engine::AssessmentEngine;
    use crate::model::{Answers, ClientInfo};

    #[test]
    fn test_sections_and_row_counts() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let assessment = engine.assess(&Answers::new(), &ClientInfo::default());

        let csv = CsvReporter::new()
            .generate_assessment_report(&assessment, &ReportConfig::default())
            .unwrap();

        let sections: Vec<&str> = csv.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(sections, ["# Domains", "# Recommendations", "# Budget"]);

        let critical_rows = csv.lines().filter(|l| l.starts_with("Critical,")).count();
        assert_eq!(critical_rows, assessment.counts.critical);
        let budget_rows = csv
            .lines()
            .filter(|l| l.starts_with(['1', '2', '3']))
            .count();
        assert_eq!(budget_rows, assessment.budget.item_count());
    }

    #[test]
    fn test_projection_overall_row() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let projection = engine.project(&Answers::new(), &[]);

        let csv = CsvReporter::new()
            .generate_projection_report(&projection, &ReportConfig::default())
            .unwrap();
        assert_eq!(csv.lines().last(), Some("\"Overall\",0,0,0"));
    }
}
