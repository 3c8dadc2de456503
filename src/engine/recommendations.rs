//! Remediation recommendations for weak answers.

use crate::model::{Answers, QuestionCatalog, RemediationProduct};
use serde::{Deserialize, Serialize};

/// Answers strictly below this option index are flagged.
pub const RECOMMENDATION_THRESHOLD: usize = 2;

/// Severity of a recommendation. `Critical` orders first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationLevel {
    /// Question answered at its weakest option (or not answered)
    Critical,
    /// Question answered at its second-weakest option
    Important,
}

impl RecommendationLevel {
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Critical),
            1 => Some(Self::Important),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Important => "Important",
        }
    }
}

impl std::fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A flagged question with what it takes to fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Source category title
    pub category: String,
    pub category_icon: String,
    /// Question prompt
    pub question: String,
    pub question_id: String,
    pub level: RecommendationLevel,
    /// The question's weight
    pub priority: u32,
    /// Label of the current (effective) option
    pub current_state: String,
    /// Label of the best option
    pub target_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<RemediationProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<u8>,
    #[serde(default)]
    pub regulatory: bool,
}

impl Recommendation {
    /// Quick-win placement, when both ratings are known.
    #[must_use]
    pub fn quadrant(&self) -> Option<Quadrant> {
        match (self.effort, self.impact) {
            (Some(effort), Some(impact)) => Some(Quadrant::classify(effort, impact)),
            _ => None,
        }
    }
}

/// Flag every question answered below [`RECOMMENDATION_THRESHOLD`].
///
/// An unanswered question is treated as index 0 and flagged critical.
/// This is stricter than [`compute_maturity`](super::compute_maturity),
/// which leaves unanswered questions out of the numerator only: gaps must
/// stay visible even while the audit is in progress.
///
/// Output is ordered critical first, then by descending priority; equal
/// entries keep catalog order.
#[must_use]
pub fn generate_recommendations(answers: &Answers, catalog: &QuestionCatalog) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = catalog
        .questions()
        .filter_map(|(category, question)| {
            let index = answers.get(&question.id).unwrap_or(0);
            let level = RecommendationLevel::from_index(index)?;

            Some(Recommendation {
                category: category.title.clone(),
                category_icon: category.icon.clone(),
                question: question.text.clone(),
                question_id: question.id.clone(),
                level,
                priority: question.weight,
                current_state: question.option_label(index).unwrap_or_default().to_string(),
                target_state: question.best_option().unwrap_or_default().to_string(),
                remediation: question.remediation.clone(),
                effort: question.effort,
                impact: question.impact,
                regulatory: question.regulatory,
            })
        })
        .collect();

    // stable
    recommendations.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| b.priority.cmp(&a.priority)));
    recommendations
}

/// Tallies shown in the executive summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCounts {
    pub critical: usize,
    pub important: usize,
    /// Recommendations on questions tied to a regulatory obligation
    pub regulatory: usize,
}

impl RecommendationCounts {
    #[must_use]
    pub fn tally(recommendations: &[Recommendation]) -> Self {
        recommendations.iter().fold(Self::default(), |mut counts, rec| {
            match rec.level {
                RecommendationLevel::Critical => counts.critical += 1,
                RecommendationLevel::Important => counts.important += 1,
            }
            if rec.regulatory {
                counts.regulatory += 1;
            }
            counts
        })
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.important
    }
}

/// Effort/impact quadrant of the quick-win matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Low effort, high impact
    QuickWin,
    /// High effort, high impact
    MajorProject,
    /// Low effort, low impact
    SimpleTask,
    /// High effort, low impact
    ComplexTask,
}

impl Quadrant {
    #[must_use]
    pub const fn classify(effort: u8, impact: u8) -> Self {
        match (effort <= 2, impact >= 2) {
            (true, true) => Self::QuickWin,
            (false, true) => Self::MajorProject,
            (true, false) => Self::SimpleTask,
            (false, false) => Self::ComplexTask,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::QuickWin => "Quick win",
            Self::MajorProject => "Major project",
            Self::SimpleTask => "Simple task",
            Self::ComplexTask => "Complex task",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::QuickWin,
            Self::MajorProject,
            Self::SimpleTask,
            Self::ComplexTask,
        ]
    }
}

/// One recommendation placed on the quick-win matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixPoint {
    pub question_id: String,
    pub question: String,
    pub effort: u8,
    pub impact: u8,
    pub quadrant: Quadrant,
}

/// Place every rated recommendation; unrated ones are left out.
#[must_use]
pub fn quick_win_matrix(recommendations: &[Recommendation]) -> Vec<MatrixPoint> {
    recommendations
        .iter()
        .filter_map(|rec| {
            let (effort, impact) = (rec.effort?, rec.impact?);
            Some(MatrixPoint {
                question_id: rec.question_id.clone(),
                question: rec.question.clone(),
                effort,
                impact,
                quadrant: Quadrant::classify(effort, impact),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Question};

    fn four(id: &str, weight: u32) -> Question {
        Question::new(id, id, ["worst", "weak", "good", "best"], weight)
    }

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Category::new("A", "a", "").with_questions(vec![four("a1", 1), four("a2", 3)]),
            Category::new("B", "b", "").with_questions(vec![four("b1", 3), four("b2", 2).with_ratings(1, 3)]),
        ])
    }

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.question_id.as_str()).collect()
    }

    #[test]
    fn test_threshold_and_levels() {
        let answers: Answers = [("a1", 0), ("a2", 1), ("b1", 2), ("b2", 3)].into_iter().collect();
        let recs = generate_recommendations(&answers, &catalog());
        assert_eq!(ids(&recs), ["a1", "a2"]);
        assert_eq!(recs[0].level, RecommendationLevel::Critical);
        assert_eq!(recs[0].current_state, "worst");
        assert_eq!(recs[0].target_state, "best");
        assert_eq!(recs[1].level, RecommendationLevel::Important);
        assert_eq!(recs[1].priority, 3);
    }

    #[test]
    fn test_unanswered_is_flagged_critical() {
        let recs = generate_recommendations(&Answers::new(), &catalog());
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|r| r.level == RecommendationLevel::Critical));
        // weight 3 first in catalog order, then 2, then 1
        assert_eq!(ids(&recs), ["a2", "b1", "b2", "a1"]);
    }

    #[test]
    fn test_critical_precedes_heavier_important() {
        let answers: Answers = [("a1", 0), ("a2", 1), ("b1", 1), ("b2", 0)].into_iter().collect();
        let recs = generate_recommendations(&answers, &catalog());
        assert_eq!(ids(&recs), ["b2", "a1", "a2", "b1"]);
    }

    #[test]
    fn test_counts() {
        let answers: Answers = [("a1", 0), ("a2", 1)].into_iter().collect();
        let mut recs = generate_recommendations(&answers, &catalog());
        recs[0].regulatory = true;
        let counts = RecommendationCounts::tally(&recs);
        assert_eq!(counts.critical, 3);
        assert_eq!(counts.important, 1);
        assert_eq!(counts.regulatory, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_quadrant_boundaries() {
        assert_eq!(Quadrant::classify(1, 3), Quadrant::QuickWin);
        assert_eq!(Quadrant::classify(2, 2), Quadrant::QuickWin);
        assert_eq!(Quadrant::classify(3, 2), Quadrant::MajorProject);
        assert_eq!(Quadrant::classify(2, 1), Quadrant::SimpleTask);
        assert_eq!(Quadrant::classify(3, 1), Quadrant::ComplexTask);
    }

    #[test]
    fn test_matrix_skips_unrated() {
        let recs = generate_recommendations(&Answers::new(), &catalog());
        let matrix = quick_win_matrix(&recs);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].question_id, "b2");
        assert_eq!(matrix[0].quadrant, Quadrant::QuickWin);
    }
}
