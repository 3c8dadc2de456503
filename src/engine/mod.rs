//! Assessment engine.
//!
//! Pure functions from (answers, client, catalogs) to scores,
//! recommendations and a budget plan:
//!
//! - [`compute_maturity`] / [`compute_domain_scores`]: weighted maturity
//! - [`generate_recommendations`]: ranked remediation list
//! - [`generate_budget`]: three-phase deduplicated budget
//! - [`resolve_benchmark`]: sector baseline lookup
//! - [`project`]: scores after selected phases are delivered
//!
//! Nothing here mutates its inputs or returns an error. Out-of-range
//! answer indices must be rejected before reaching the engine
//! ([`Answers::validate`](crate::model::Answers::validate) or session
//! import); the engine never panics on them but its scores are then
//! meaningless.
//!
//! [`AssessmentEngine`] bundles all of the above into one [`Assessment`].

mod advisory;
mod assessment;
mod benchmark;
mod budget;
mod maturity;
mod projection;
mod recommendations;

pub use advisory::{HardwareRefreshAdvisory, RefreshItem};
pub use assessment::{Assessment, AssessmentEngine, WEAKEST_DOMAIN_COUNT};
pub use benchmark::{
    resolve_benchmark, resolve_benchmark_entry, BenchmarkComparison, BenchmarkPosition,
};
pub use budget::{generate_budget, BudgetPhase, BudgetPlan, PhaseDefinition, PhasePriority, PHASES};
pub use maturity::{
    compute_domain_scores, compute_maturity, weakest_domains, DomainScores, MaturityTier,
};
pub use projection::{patched_answers, project, Projection};
pub use recommendations::{
    generate_recommendations, quick_win_matrix, MatrixPoint, Quadrant, Recommendation,
    RecommendationCounts, RecommendationLevel, RECOMMENDATION_THRESHOLD,
};
