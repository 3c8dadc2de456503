//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{format_amount, format_delta, ReportConfig, ReportFormat, ReportGenerator};
use crate::engine::{
    Assessment, BenchmarkPosition, MaturityTier, Projection, Quadrant, RecommendationLevel,
};
use crate::error::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the domain name column.
const DOMAIN_COLUMN: usize = 30;
/// Cells in a score bar.
const BAR_WIDTH: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_color(score: u8) -> &'static str {
        match MaturityTier::from_score(score) {
            MaturityTier::Initial => "red",
            MaturityTier::Managed => "yellow",
            MaturityTier::Optimized => "green",
        }
    }

    fn domain_line(&self, title: &str, score: u8) -> String {
        format!(
            "  {} {} {}",
            pad_display(&truncate(title, DOMAIN_COLUMN), DOMAIN_COLUMN),
            self.color(&format!("{score:>3}%"), Self::score_color(score)),
            self.color(&score_bar(score), "dim")
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_assessment_report(
        &self,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color(&config.title(), "bold"));
        lines.push(self.color("─".repeat(60).as_str(), "dim"));

        let client = &config.client;
        let profile: Vec<&str> = [client.org_type.as_str(), client.sector.as_str()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if !profile.is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Profile:", "cyan"),
                profile.join(" / ")
            ));
        }

        lines.push(format!(
            "{}  {} ({})",
            self.color("Maturity:", "cyan"),
            self.color(
                &format!("{}%", assessment.maturity),
                Self::score_color(assessment.maturity)
            ),
            assessment.tier
        ));
        lines.push(format!(
            "{}  {}/{} questions answered",
            self.color("Progress:", "cyan"),
            assessment.answered,
            assessment.question_count
        ));

        if let Some(comparison) = &assessment.comparison {
            let position = match comparison.position {
                BenchmarkPosition::AtOrAbove => self.color(
                    &format!("{} points at or above", comparison.gap()),
                    "green",
                ),
                BenchmarkPosition::Below => {
                    self.color(&format!("{} points below", comparison.gap()), "red")
                }
            };
            lines.push(format!(
                "{}  {position} the {} average of {}%",
                self.color("Benchmark:", "cyan"),
                comparison.key,
                comparison.sector_average
            ));
        }

        if !assessment.weakest_domains.is_empty() {
            let weakest: Vec<String> = assessment
                .weakest_domains
                .iter()
                .map(|(title, score)| format!("{title} ({score}%)"))
                .collect();
            lines.push(format!(
                "{}  {}",
                self.color("Weakest:", "cyan"),
                weakest.join(", ")
            ));
        }

        // Domains
        lines.push(String::new());
        lines.push(self.color("Domains:", "bold"));
        for (title, score) in &assessment.domain_scores {
            lines.push(self.domain_line(title, *score));
        }

        // Recommendations
        lines.push(String::new());
        let counts = &assessment.counts;
        lines.push(format!(
            "{} {} critical, {} important ({} regulatory)",
            self.color("Recommendations:", "bold"),
            counts.critical,
            counts.important,
            counts.regulatory
        ));
        if assessment.recommendations.is_empty() {
            lines.push(format!("  {}", self.color("No gaps found", "dim")));
        }

        let limit = config.recommendation_limit(assessment.recommendations.len());
        for rec in assessment.recommendations.iter().take(limit) {
            let tag = match rec.level {
                RecommendationLevel::Critical => self.color("[CRITICAL] ", "red"),
                RecommendationLevel::Important => self.color("[IMPORTANT]", "yellow"),
            };
            let regulatory = if rec.regulatory { " §" } else { "" };
            lines.push(format!(
                "  {tag} {} {}{regulatory}",
                self.color(&rec.question_id, "cyan"),
                rec.question
            ));
            lines.push(self.color(
                &format!("      {} -> {}", rec.current_state, rec.target_state),
                "dim",
            ));
        }
        if limit < assessment.recommendations.len() {
            lines.push(self.color(
                &format!(
                    "  ... and {} more recommendations",
                    assessment.recommendations.len() - limit
                ),
                "dim",
            ));
        }

        // Budget
        lines.push(String::new());
        lines.push(self.color("Budget:", "bold"));
        let budget = &assessment.budget;
        for phase in &budget.phases {
            let header = format!("{} ({})", phase.name, phase.period);
            lines.push(format!(
                "  {} {:>10} {}",
                pad_display(&header, 52),
                format_amount(phase.total),
                plural(phase.items.len(), "item")
            ));
        }
        lines.push(format!(
            "  {} {:>10}",
            pad_display("Total one-time", 52),
            self.color(&format_amount(budget.total), "bold")
        ));
        if budget.recurrent_total > 0 {
            lines.push(format!(
                "  {} {:>10}",
                pad_display("Total recurring per year", 52),
                format_amount(budget.recurrent_total)
            ));
        }

        if !assessment.quick_wins.is_empty() {
            lines.push(String::new());
            let ids: Vec<&str> = assessment
                .quick_wins
                .iter()
                .filter(|p| p.quadrant == Quadrant::QuickWin)
                .map(|p| p.question_id.as_str())
                .collect();
            if !ids.is_empty() {
                lines.push(format!(
                    "{} {}",
                    self.color("Quick wins:", "bold"),
                    ids.join(", ")
                ));
            }
        }

        if let Some(advisory) = &assessment.hardware_advisory {
            lines.push(String::new());
            lines.push(self.color("Hardware refresh advised:", "bold"));
            for item in &advisory.items {
                lines.push(format!(
                    "  {} {}",
                    self.color(&format!("! {}:", item.title()), "yellow"),
                    item.rationale()
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_projection_report(
        &self,
        projection: &Projection,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(self.color(&format!("{} (projection)", config.title()), "bold"));
        lines.push(self.color("─".repeat(60).as_str(), "dim"));

        let phases: Vec<String> = projection
            .selected_phases
            .iter()
            .map(|p| (p + 1).to_string())
            .collect();
        lines.push(format!(
            "{}  {}",
            self.color("Phases:", "cyan"),
            if phases.is_empty() {
                "none".to_string()
            } else {
                phases.join(", ")
            }
        ));
        lines.push(format!(
            "{}  {}% -> {}% ({})",
            self.color("Maturity:", "cyan"),
            projection.actual_maturity,
            self.color(
                &format!("{}%", projection.maturity),
                Self::score_color(projection.maturity)
            ),
            self.color(&format_delta(projection.gain), gain_color(projection.gain))
        ));

        lines.push(String::new());
        lines.push(self.color("Domains:", "bold"));
        for (title, gain) in projection.domain_gains() {
            let actual = projection.actual_domain_scores.get(title).copied().unwrap_or(0);
            let projected = projection.domain_scores.get(title).copied().unwrap_or(0);
            lines.push(format!(
                "  {} {:>3}% -> {:>3}% {}",
                pad_display(&truncate(title, DOMAIN_COLUMN), DOMAIN_COLUMN),
                actual,
                projected,
                self.color(&format!("{:>4}", format_delta(gain)), gain_color(gain))
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

const fn gain_color(gain: i16) -> &'static str {
    if gain > 0 {
        "green"
    } else {
        "dim"
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Fixed-width bar, one cell per five points.
fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Right-pad to `width` terminal columns.
fn pad_display(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    if used >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - used))
    }
}

/// Truncate to at most `max_width` terminal columns, ending in `...`.
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::engine::AssessmentEngine;
    use crate::model::{Answers, ClientInfo};

    #[test]
    fn test_pad_display_counts_columns() {
        assert_eq!(pad_display("abc", 5), "abc  ");
        // wide CJK characters take two columns each
        assert_eq!(UnicodeWidthStr::width(pad_display("日本", 6).as_str()), 6);
        assert_eq!(pad_display("toolong", 3), "toolong");
    }

    #[test]
    fn test_truncate_by_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Incident detection", 10), "Inciden...");
        assert_eq!(truncate("Sécurité réseau", 8), "Sécur...");
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0), "░".repeat(20));
        assert_eq!(score_bar(100), "█".repeat(20));
        assert_eq!(score_bar(50).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_no_color_has_no_escapes() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let assessment = engine.assess(&Answers::new(), &ClientInfo::named("Town hall"));
        let config = ReportConfig::for_client(ClientInfo::named("Town hall"));

        let plain = SummaryReporter::new()
            .no_color()
            .generate_assessment_report(&assessment, &config)
            .unwrap();
        assert!(!plain.contains('\x1b'));
        assert!(plain.starts_with("Cybersecurity maturity assessment: Town hall"));
        assert!(plain.contains("Maturity:  0% (Initial)"));
        assert!(plain.contains("Hardware refresh advised:"));

        let colored = SummaryReporter::new()
            .generate_assessment_report(&assessment, &config)
            .unwrap();
        assert!(colored.contains("\x1b[31m"));
    }

    #[test]
    fn test_recommendation_limit_footer() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let assessment = engine.assess(&Answers::new(), &ClientInfo::default());
        let config = ReportConfig::default().with_max_recommendations(Some(1));

        let out = SummaryReporter::new()
            .no_color()
            .generate_assessment_report(&assessment, &config)
            .unwrap();
        let more = assessment.recommendations.len() - 1;
        assert!(out.contains(&format!("... and {more} more recommendations")));
        assert_eq!(out.matches("[CRITICAL]").count(), 1);
    }

    #[test]
    fn test_projection_summary() {
        let catalogs = Catalogs::builtin();
        let engine = AssessmentEngine::new(&catalogs);
        let projection = engine.project(&Answers::new(), &[]);

        let out = SummaryReporter::new()
            .no_color()
            .generate_projection_report(&projection, &ReportConfig::default())
            .unwrap();
        assert!(out.contains("Phases:  none"));
        assert!(out.contains("Maturity:  0% -> 0% (+0)"));
    }
}
