//! Catalog command handlers.
//!
//! `catalog check` lists every consistency violation, `catalog list`
//! prints the questionnaire outline.

use crate::catalog::Catalogs;
use crate::config::CatalogConfig;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the consistency checks, returning the desired exit code.
pub fn run_catalog_check(config: &CatalogConfig) -> Result<i32> {
    let catalogs = Catalogs::load_unchecked(config).context("Failed to load catalogs")?;
    let violations = catalogs.check();

    if violations.is_empty() {
        write_output(
            &format!(
                "Catalogs OK: {} categories, {} questions, {} budget items, {} benchmarks",
                catalogs.questions.categories.len(),
                catalogs.questions.question_count(),
                catalogs.budget.len(),
                catalogs.benchmarks.len()
            ),
            &OutputTarget::Stdout,
            true,
        )?;
        return Ok(exit_codes::SUCCESS);
    }

    let mut lines = vec![format!("{} catalog violations:", violations.len())];
    lines.extend(violations.iter().map(|v| format!("  - {v}")));
    write_output(&lines.join("\n"), &OutputTarget::Stdout, true)?;
    Ok(exit_codes::CHECK_FAILED)
}

/// Print categories with their question ids and weights.
pub fn run_catalog_list(config: &CatalogConfig, output_file: Option<PathBuf>) -> Result<i32> {
    let catalogs = Catalogs::load_unchecked(config).context("Failed to load catalogs")?;
    let outline = catalog_outline(&catalogs);
    write_output(&outline, &OutputTarget::from_option(output_file), false)?;
    Ok(exit_codes::SUCCESS)
}

fn catalog_outline(catalogs: &Catalogs) -> String {
    let mut lines = Vec::new();
    for category in &catalogs.questions.categories {
        lines.push(format!(
            "{} {} ({} questions)",
            category.icon,
            category.title,
            category.questions.len()
        ));
        for question in &category.questions {
            let budget = catalogs
                .budget
                .get(&question.id)
                .map(|item| format!(" [phase {}]", item.phase + 1))
                .unwrap_or_default();
            lines.push(format!(
                "  {:<10} w{} {}{budget}",
                question.id, question.weight, question.text
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_lists_every_question() {
        let catalogs = Catalogs::builtin();
        let outline = catalog_outline(&catalogs);
        let question_lines = outline.lines().filter(|l| l.starts_with("  ")).count();
        assert_eq!(question_lines, catalogs.questions.question_count());
        assert!(outline.contains("[phase 1]"));
    }

    #[test]
    fn test_builtin_check_passes() {
        assert_eq!(
            run_catalog_check(&CatalogConfig::default()).unwrap(),
            exit_codes::SUCCESS
        );
    }
}
