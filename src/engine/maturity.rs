//! Weighted maturity scoring.
//!
//! Every question contributes `(option_count - 1) * weight` to the maximum
//! score whether or not it is answered. An unanswered question therefore
//! lowers the percentage: an audit that is half complete, with every
//! answered question at its best option, scores 50, not 100.

use crate::model::{Answers, Question, QuestionCatalog};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maturity percentage per category title, in catalog order.
pub type DomainScores = IndexMap<String, u8>;

/// Running totals for one scoring partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScoreAccumulator {
    total: u64,
    max: u64,
}

impl ScoreAccumulator {
    fn add(&mut self, question: &Question, answers: &Answers) {
        self.max += question.max_contribution();
        if let Some(index) = answers.get(&question.id) {
            self.total += index as u64 * u64::from(question.weight);
        }
    }

    /// `round(100 * total / max)` with halves rounded up, or 0 for an
    /// empty partition.
    fn percentage(self) -> u8 {
        if self.max == 0 {
            return 0;
        }
        let rounded = (200 * u128::from(self.total) + u128::from(self.max)) / (2 * u128::from(self.max));
        u8::try_from(rounded).unwrap_or(u8::MAX)
    }
}

/// Global maturity percentage (0-100) over the whole catalog.
///
/// Answers for ids outside the catalog are ignored. Indices are assumed
/// to be in range (see [`Answers::validate`]).
#[must_use]
pub fn compute_maturity(answers: &Answers, catalog: &QuestionCatalog) -> u8 {
    let mut acc = ScoreAccumulator::default();
    for (_, question) in catalog.questions() {
        acc.add(question, answers);
    }
    acc.percentage()
}

/// Maturity percentage per category, each with its own denominator.
///
/// A category whose questions carry no weight scores 0 on its own
/// without affecting the others.
#[must_use]
pub fn compute_domain_scores(answers: &Answers, catalog: &QuestionCatalog) -> DomainScores {
    catalog
        .categories
        .iter()
        .map(|category| {
            let mut acc = ScoreAccumulator::default();
            for question in &category.questions {
                acc.add(question, answers);
            }
            (category.title.clone(), acc.percentage())
        })
        .collect()
}

/// Categories with the lowest scores, lowest first.
///
/// Ties keep catalog order.
#[must_use]
pub fn weakest_domains(scores: &DomainScores, count: usize) -> Vec<(String, u8)> {
    let mut ranked: Vec<(String, u8)> = scores.iter().map(|(k, v)| (k.clone(), *v)).collect();
    ranked.sort_by_key(|(_, score)| *score);
    ranked.truncate(count);
    ranked
}

/// Qualitative maturity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MaturityTier {
    /// Below 40
    Initial,
    /// 40-69
    Managed,
    /// 70 and above
    Optimized,
}

impl MaturityTier {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Self::Initial,
            40..=69 => Self::Managed,
            _ => Self::Optimized,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Initial => "Security is handled reactively; core controls are missing",
            Self::Managed => "Core controls exist but coverage and testing are uneven",
            Self::Optimized => "Controls are in place, measured and continuously improved",
        }
    }
}

impl std::fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn four(id: &str, weight: u32) -> Question {
        Question::new(id, id, ["0", "1", "2", "3"], weight)
    }

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Category::new("A", "", "").with_questions(vec![four("q1", 3), four("q2", 1)]),
            Category::new("B", "", "").with_questions(vec![four("q3", 2)]),
        ])
    }

    #[test]
    fn test_reference_scenario() {
        let catalog = QuestionCatalog::new(vec![
            Category::new("Only", "", "").with_questions(vec![four("q1", 3), four("q2", 1)]),
        ]);
        let answers: Answers = [("q1", 0), ("q2", 3)].into_iter().collect();
        assert_eq!(compute_maturity(&answers, &catalog), 25);
    }

    #[test]
    fn test_empty_answers_score_zero() {
        assert_eq!(compute_maturity(&Answers::new(), &catalog()), 0);
    }

    #[test]
    fn test_unanswered_questions_count_in_denominator() {
        // q1 and q2 at best, q3 unanswered: 12 of 18 points
        let answers: Answers = [("q1", 3), ("q2", 3)].into_iter().collect();
        assert_eq!(compute_maturity(&answers, &catalog()), 67);
    }

    #[test]
    fn test_degenerate_catalog_scores_zero() {
        assert_eq!(compute_maturity(&Answers::new(), &QuestionCatalog::default()), 0);
        let zero_weight = QuestionCatalog::new(vec![
            Category::new("Z", "", "").with_questions(vec![four("z", 0)]),
        ]);
        let answers: Answers = [("z", 3)].into_iter().collect();
        assert_eq!(compute_maturity(&answers, &zero_weight), 0);
    }

    #[test]
    fn test_rounds_halves_up() {
        // 1 of 8 points is 12.5%
        let catalog = QuestionCatalog::new(vec![Category::new("H", "", "").with_questions(vec![
            Question::new("h1", "", ["0", "1", "2", "3", "4", "5", "6", "7", "8"], 1),
        ])]);
        let answers: Answers = [("h1", 1)].into_iter().collect();
        assert_eq!(compute_maturity(&answers, &catalog), 13);
    }

    #[test]
    fn test_domain_scores_use_own_denominator() {
        let answers: Answers = [("q1", 3), ("q2", 3), ("q3", 0)].into_iter().collect();
        let scores = compute_domain_scores(&answers, &catalog());
        assert_eq!(scores.get("A"), Some(&100));
        assert_eq!(scores.get("B"), Some(&0));
        assert_eq!(scores.keys().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let answers: Answers = [("q3", 3), ("nope", 99)].into_iter().collect();
        assert_eq!(compute_maturity(&answers, &catalog()), 33);
    }

    #[test]
    fn test_weakest_domains_stable() {
        let scores: DomainScores = [("a", 50), ("b", 10), ("c", 10), ("d", 80)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let weakest = weakest_domains(&scores, 2);
        assert_eq!(weakest, vec![("b".to_string(), 10), ("c".to_string(), 10)]);
    }

    #[test]
    fn test_tier_from_score() {
        assert_eq!(MaturityTier::from_score(0), MaturityTier::Initial);
        assert_eq!(MaturityTier::from_score(39), MaturityTier::Initial);
        assert_eq!(MaturityTier::from_score(40), MaturityTier::Managed);
        assert_eq!(MaturityTier::from_score(69), MaturityTier::Managed);
        assert_eq!(MaturityTier::from_score(70), MaturityTier::Optimized);
        assert_eq!(MaturityTier::from_score(100).label(), "Optimized");
    }
}
