//! Full assessment over one answer set.

use super::{
    compute_domain_scores, compute_maturity, generate_budget, generate_recommendations, project,
    quick_win_matrix, resolve_benchmark_entry, weakest_domains, BenchmarkComparison, BudgetPlan,
    DomainScores, HardwareRefreshAdvisory, MatrixPoint, MaturityTier, Projection, Recommendation,
    RecommendationCounts,
};
use crate::catalog::Catalogs;
use crate::model::{Answers, Benchmark, ClientInfo};
use serde::{Deserialize, Serialize};

/// Number of weakest categories named in the executive summary.
pub const WEAKEST_DOMAIN_COUNT: usize = 2;

/// Everything derived from (answers, client, catalogs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct Assessment {
    /// Global maturity (0-100)
    pub maturity: u8,
    pub tier: MaturityTier,
    pub domain_scores: DomainScores,
    /// Ranked, critical first
    pub recommendations: Vec<Recommendation>,
    pub counts: RecommendationCounts,
    pub budget: BudgetPlan,
    pub benchmark: Option<Benchmark>,
    pub comparison: Option<BenchmarkComparison>,
    pub quick_wins: Vec<MatrixPoint>,
    pub hardware_advisory: Option<HardwareRefreshAdvisory>,
    /// Lowest-scoring categories, lowest first
    pub weakest_domains: Vec<(String, u8)>,
    /// Catalog questions with an answer
    pub answered: usize,
    /// Catalog questions in total
    pub question_count: usize,
}

impl Assessment {
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        if self.question_count == 0 {
            return 0;
        }
        u8::try_from(self.answered * 100 / self.question_count).unwrap_or(100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    answers: Answers,
    org_type: String,
    sector: String,
}

impl CacheKey {
    fn new(answers: &Answers, client: &ClientInfo) -> Self {
        Self {
            answers: answers.clone(),
            org_type: client.org_type.clone(),
            sector: client.sector.clone(),
        }
    }
}

/// Runs assessments against one set of catalogs.
///
/// # Example
///
/// ```
/// use cyber_maturity::catalog::Catalogs;
/// use cyber_maturity::engine::AssessmentEngine;
/// use cyber_maturity::model::{Answers, ClientInfo};
///
/// let catalogs = Catalogs::builtin();
/// let engine = AssessmentEngine::new(&catalogs);
/// let assessment = engine.assess(&Answers::new(), &ClientInfo::named("Town hall"));
/// assert_eq!(assessment.maturity, 0);
/// assert_eq!(assessment.budget.phases.len(), 3);
/// ```
#[derive(Debug)]
pub struct AssessmentEngine<'a> {
    catalogs: &'a Catalogs,
    last: Option<(CacheKey, Assessment)>,
}

impl<'a> AssessmentEngine<'a> {
    #[must_use]
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self {
            catalogs,
            last: None,
        }
    }

    #[must_use]
    pub const fn catalogs(&self) -> &'a Catalogs {
        self.catalogs
    }

    pub fn assess(&self, answers: &Answers, client: &ClientInfo) -> Assessment {
        compute(self.catalogs, answers, client)
    }

    /// Memoized [`assess`](Self::assess), keyed on the answers and the two
    /// client fields that influence results. Only the latest snapshot is
    /// kept.
    pub fn assess_cached(&mut self, answers: &Answers, client: &ClientInfo) -> &Assessment {
        let key = CacheKey::new(answers, client);
        if self.last.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.last = None;
        }
        let catalogs = self.catalogs;
        &self
            .last
            .get_or_insert_with(|| (key, compute(catalogs, answers, client)))
            .1
    }

    /// Whether [`assess_cached`](Self::assess_cached) would reuse its
    /// stored result for this input.
    #[must_use]
    pub fn is_cached(&self, answers: &Answers, client: &ClientInfo) -> bool {
        self.last
            .as_ref()
            .is_some_and(|(cached, _)| *cached == CacheKey::new(answers, client))
    }

    pub fn clear_cache(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn project(&self, answers: &Answers, selected_phases: &[usize]) -> Projection {
        project(
            answers,
            selected_phases,
            &self.catalogs.budget,
            &self.catalogs.questions,
        )
    }
}

fn compute(catalogs: &Catalogs, answers: &Answers, client: &ClientInfo) -> Assessment {
    let questions = &catalogs.questions;

    for id in answers.unknown_ids(questions) {
        tracing::debug!("Ignoring answer for unknown question '{id}'");
    }

    let maturity = compute_maturity(answers, questions);
    let domain_scores = compute_domain_scores(answers, questions);
    let recommendations = generate_recommendations(answers, questions);
    let budget = generate_budget(&recommendations, &catalogs.budget);

    let resolved = resolve_benchmark_entry(client, &catalogs.benchmarks);
    let comparison = resolved.map(|(key, bench)| BenchmarkComparison::new(key, maturity, bench));
    let benchmark = resolved.map(|(_, bench)| bench.clone());

    tracing::info!(
        "Assessed {} answers: maturity {}%, {} recommendations, budget {}",
        answers.len(),
        maturity,
        recommendations.len(),
        budget.total
    );

    Assessment {
        maturity,
        tier: MaturityTier::from_score(maturity),
        weakest_domains: weakest_domains(&domain_scores, WEAKEST_DOMAIN_COUNT),
        domain_scores,
        counts: RecommendationCounts::tally(&recommendations),
        quick_wins: quick_win_matrix(&recommendations),
        hardware_advisory: HardwareRefreshAdvisory::evaluate(answers, questions),
        recommendations,
        budget,
        benchmark,
        comparison,
        answered: answers.answered_count(questions),
        question_count: questions.question_count(),
    }
}
