//! Markdown report generator.
//!
//! Produces the written deliverable handed to the client: executive
//! summary, domain table, ranked recommendations and the phased budget.

use super::escape::{
    escape_markdown_inline, escape_markdown_list, escape_markdown_table, escape_md_opt,
};
use super::{format_amount, format_delta, ReportConfig, ReportFormat, ReportGenerator};
use crate::engine::{Assessment, BenchmarkPosition, Projection, Quadrant};
use crate::error::Result;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the quick-win matrix section
    include_matrix: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_matrix: true,
        }
    }

    /// Leave out the effort/impact matrix
    #[must_use]
    pub const fn without_matrix(mut self) -> Self {
        self.include_matrix = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_assessment_report(
        &self,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut md = String::new();
        let client = &config.client;

        md.push_str(&format!("# {}\n\n", escape_markdown_inline(&config.title())));

        if !client.org_type.is_empty() || !client.sector.is_empty() {
            md.push_str("| Field | Value |\n|-------|-------|\n");
            for (field, value) in [
                ("Type", client.org_type.as_str()),
                ("Sector", client.sector.as_str()),
                ("Size", client.size.as_str()),
                ("Contact", client.contact.as_str()),
            ] {
                if !value.is_empty() {
                    md.push_str(&format!("| {field} | {} |\n", escape_markdown_table(value)));
                }
            }
            md.push('\n');
        }

        // Executive summary
        md.push_str("## Executive summary\n\n");
        md.push_str(&format!(
            "- **Maturity:** {}% ({}: {})\n",
            assessment.maturity,
            assessment.tier,
            assessment.tier.description()
        ));
        md.push_str(&format!(
            "- **Progress:** {} of {} questions answered ({}%)\n",
            assessment.answered,
            assessment.question_count,
            assessment.completion_percent()
        ));
        if let Some(comparison) = &assessment.comparison {
            let position = match comparison.position {
                BenchmarkPosition::AtOrAbove => "at or above",
                BenchmarkPosition::Below => "below",
            };
            md.push_str(&format!(
                "- **Benchmark:** {} points {position} the {} average of {}%\n",
                comparison.gap(),
                escape_markdown_list(&comparison.key),
                comparison.sector_average
            ));
        }
        if !assessment.weakest_domains.is_empty() {
            let weakest: Vec<String> = assessment
                .weakest_domains
                .iter()
                .map(|(title, score)| format!("{} ({score}%)", escape_markdown_list(title)))
                .collect();
            md.push_str(&format!("- **Weakest domains:** {}\n", weakest.join(", ")));
        }
        md.push_str(&format!(
            "- **Recommendations:** {} critical, {} important, {} on regulatory requirements\n",
            assessment.counts.critical, assessment.counts.important, assessment.counts.regulatory
        ));
        md.push_str(&format!(
            "- **Budget:** {} one-time, {} recurring per year\n\n",
            format_amount(assessment.budget.total),
            format_amount(assessment.budget.recurrent_total)
        ));

        if let Some(benchmark) = &assessment.benchmark {
            if !benchmark.top_risks.is_empty() {
                md.push_str("### Sector risks\n\n");
                for risk in &benchmark.top_risks {
                    md.push_str(&format!("- {}\n", escape_markdown_list(risk)));
                }
                md.push('\n');
            }
        }

        // Domains
        md.push_str("## Domain scores\n\n");
        md.push_str("| Domain | Score |\n|--------|------:|\n");
        for (title, score) in &assessment.domain_scores {
            md.push_str(&format!("| {} | {score}% |\n", escape_markdown_table(title)));
        }
        md.push('\n');

        // Recommendations
        md.push_str("## Recommendations\n\n");
        if assessment.recommendations.is_empty() {
            md.push_str("*No gaps found.*\n\n");
        } else {
            md.push_str("| Level | Domain | Question | Current | Target | Remediation |\n");
            md.push_str("|-------|--------|----------|---------|--------|-------------|\n");
            let limit = config.recommendation_limit(assessment.recommendations.len());
            for rec in assessment.recommendations.iter().take(limit) {
                let question = if rec.regulatory {
                    format!("{} (regulatory)", escape_markdown_table(&rec.question))
                } else {
                    escape_markdown_table(&rec.question)
                };
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    rec.level,
                    escape_markdown_table(&rec.category),
                    question,
                    escape_markdown_table(&rec.current_state),
                    escape_markdown_table(&rec.target_state),
                    escape_md_opt(rec.remediation.as_ref().map(|r| r.name.as_str())),
                ));
            }
            if limit < assessment.recommendations.len() {
                md.push_str(&format!(
                    "\n*{} further recommendations omitted.*\n",
                    assessment.recommendations.len() - limit
                ));
            }
            md.push('\n');
        }

        // Quick-win matrix
        if self.include_matrix && !assessment.quick_wins.is_empty() {
            md.push_str("## Effort / impact matrix\n\n");
            for quadrant in Quadrant::all() {
                let points: Vec<String> = assessment
                    .quick_wins
                    .iter()
                    .filter(|p| p.quadrant == quadrant)
                    .map(|p| escape_markdown_list(&p.question))
                    .collect();
                if points.is_empty() {
                    continue;
                }
                md.push_str(&format!("### {}\n\n", quadrant.label()));
                for point in points {
                    md.push_str(&format!("- {point}\n"));
                }
                md.push('\n');
            }
        }

        // Budget
        md.push_str("## Remediation budget\n\n");
        for phase in &assessment.budget.phases {
            md.push_str(&format!(
                "### {} ({}, {})\n\n{}\n\n",
                phase.name,
                phase.period,
                phase.priority.label(),
                phase.description
            ));
            if phase.is_empty() {
                md.push_str("*Nothing to fund in this phase.*\n\n");
                continue;
            }
            md.push_str("| Item | One-time | Recurring | Market ref |\n");
            md.push_str("|------|---------:|----------:|------------|\n");
            for item in &phase.items {
                let name = if item.regulatory_certified {
                    format!("{} (certified)", escape_markdown_table(&item.name))
                } else {
                    escape_markdown_table(&item.name)
                };
                md.push_str(&format!(
                    "| {name} | {} | {} | {} |\n",
                    format_amount(item.cost),
                    item.recurrent_cost.map_or_else(|| "-".to_string(), format_amount),
                    escape_md_opt(item.market_ref.as_deref()),
                ));
            }
            md.push_str(&format!(
                "| **Total** | **{}** | **{}** | |\n\n",
                format_amount(phase.total),
                format_amount(phase.recurrent_total)
            ));
        }
        md.push_str(&format!(
            "**Total one-time budget:** {}\n\n",
            format_amount(assessment.budget.total)
        ));

        if let Some(advisory) = &assessment.hardware_advisory {
            md.push_str("## Hardware refresh\n\n");
            for item in &advisory.items {
                md.push_str(&format!("- **{}:** {}\n", item.title(), item.rationale()));
            }
            md.push('\n');
        }

        md.push_str(&format!(
            "---\n*Generated by {} {}*\n",
            env!("CARGO_PKG_NAME"),
            config.metadata.tool_version
        ));

        Ok(md)
    }

    fn generate_projection_report(
        &self,
        projection: &Projection,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut md = String::new();

        md.push_str(&format!(
            "# {} (projection)\n\n",
            escape_markdown_inline(&config.title())
        ));

        let phases: Vec<String> = projection
            .selected_phases
            .iter()
            .map(|p| format!("phase {}", p + 1))
            .collect();
        md.push_str(&format!(
            "Assuming {} fully delivered: maturity moves from {}% to {}% ({} points).\n\n",
            if phases.is_empty() {
                "no phase".to_string()
            } else {
                phases.join(", ")
            },
            projection.actual_maturity,
            projection.maturity,
            format_delta(projection.gain)
        ));

        md.push_str("| Domain | Current | Projected | Change |\n");
        md.push_str("|--------|--------:|----------:|-------:|\n");
        for (title, gain) in projection.domain_gains() {
            md.push_str(&format!(
                "| {} | {}% | {}% | {} |\n",
                escape_markdown_table(title),
                projection.actual_domain_scores.get(title).copied().unwrap_or(0),
                projection.domain_scores.get(title).copied().unwrap_or(0),
                format_delta(gain)
            ));
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::engine::AssessmentEngine;
    use crate::model::{Answers, ClientInfo};

    #[test]
    fn test_markdown_sections() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let client = ClientInfo::named("Town hall").with_type("Préfecture");
        let assessment = engine.assess(&Answers::new(), &client);

        let md = MarkdownReporter::new()
            .generate_assessment_report(&assessment, &ReportConfig::for_client(client))
            .unwrap();

        for heading in [
            "# Cybersecurity maturity assessment: Town hall",
            "## Executive summary",
            "### Sector risks",
            "## Domain scores",
            "## Recommendations",
            "## Effort / impact matrix",
            "## Remediation budget",
            "## Hardware refresh",
        ] {
            assert!(md.contains(heading), "missing {heading}");
        }
        assert!(md.contains("points below the Préfecture average of 52%"));
    }

    #[test]
    fn test_client_text_is_escaped() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let client = ClientInfo::named("**Evil** [corp]").with_type("a | b");
        let assessment = engine.assess(&Answers::new(), &client);

        let md = MarkdownReporter::new()
            .without_matrix()
            .generate_assessment_report(&assessment, &ReportConfig::for_client(client))
            .unwrap();

        assert!(md.contains("\\*\\*Evil\\*\\* \\[corp\\]"));
        assert!(md.contains("| Type | a \\| b |"));
        assert!(!md.contains("## Effort / impact matrix"));
    }

    #[test]
    fn test_projection_table() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let projection = engine.project(&Answers::new(), &[0, 1, 2]);

        let md = MarkdownReporter::new()
            .generate_projection_report(&projection, &ReportConfig::default())
            .unwrap();

        assert!(md.contains("Assuming phase 1, phase 2, phase 3 fully delivered"));
        assert_eq!(
            md.lines().filter(|l| l.starts_with("| ")).count(),
            catalogs.questions.categories.len() + 1
        );
    }
}
