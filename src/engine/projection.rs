//! Post-remediation projection.
//!
//! Projection never scores on its own: it patches a copy of the answers
//! and hands it to the same functions a normal assessment uses.

use super::{compute_domain_scores, compute_maturity, DomainScores};
use crate::model::{Answers, BudgetCatalog, QuestionCatalog};
use serde::{Deserialize, Serialize};

/// Projected scores assuming the selected phases are fully delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub selected_phases: Vec<usize>,
    pub actual_maturity: u8,
    pub maturity: u8,
    pub domain_scores: DomainScores,
    pub actual_domain_scores: DomainScores,
    /// `maturity - actual_maturity`
    pub gain: i16,
}

impl Projection {
    /// Per-category change, in catalog order.
    pub fn domain_gains(&self) -> impl Iterator<Item = (&str, i16)> {
        self.domain_scores.iter().map(|(title, projected)| {
            let actual = self.actual_domain_scores.get(title).copied().unwrap_or(0);
            (title.as_str(), i16::from(*projected) - i16::from(actual))
        })
    }
}

/// Copy of `answers` with every question budgeted in one of
/// `selected_phases` raised to its best option.
///
/// Questions without a budget item, or budgeted in other phases, keep
/// their current answer (or stay unanswered).
#[must_use]
pub fn patched_answers(
    answers: &Answers,
    selected_phases: &[usize],
    budget: &BudgetCatalog,
    catalog: &QuestionCatalog,
) -> Answers {
    let mut patched = answers.clone();
    for (_, question) in catalog.questions() {
        let selected = budget
            .get(&question.id)
            .is_some_and(|item| selected_phases.contains(&item.phase));
        if selected {
            patched.set(question.id.clone(), question.max_index());
        }
    }
    patched
}

/// Score `answers` as they would stand after the selected phases.
#[must_use]
pub fn project(
    answers: &Answers,
    selected_phases: &[usize],
    budget: &BudgetCatalog,
    catalog: &QuestionCatalog,
) -> Projection {
    let patched = patched_answers(answers, selected_phases, budget, catalog);
    let actual_maturity = compute_maturity(answers, catalog);
    let maturity = compute_maturity(&patched, catalog);

    let mut phases = selected_phases.to_vec();
    phases.sort_unstable();
    phases.dedup();

    Projection {
        selected_phases: phases,
        actual_maturity,
        maturity,
        domain_scores: compute_domain_scores(&patched, catalog),
        actual_domain_scores: compute_domain_scores(answers, catalog),
        gain: i16::from(maturity) - i16::from(actual_maturity),
    }
}
