//! **Cybersecurity maturity self-assessment for small organizations.**
//!
//! `cyber-maturity` turns the answers of a questionnaire session into a
//! maturity percentage, per-domain scores, ranked recommendations, a
//! three-phase remediation budget and a comparison against a sector
//! benchmark. It powers both a command-line tool and a Rust library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: questionnaire, budget and benchmark catalogs plus the
//!   per-session [`Answers`] and [`ClientInfo`].
//! - **[`catalog`]**: the built-in reference tables and loading of
//!   replacement catalogs from YAML or JSON.
//! - **[`engine`]**: pure functions from answers to results, gathered
//!   behind [`AssessmentEngine`].
//! - **[`session`]**: import and export of saved sessions.
//! - **[`reports`]**: summary, JSON, Markdown and CSV generators.
//! - **[`pipeline`]**: load, assess and write stages used by the CLI.
//!
//! ## Getting Started
//!
//! ```
//! use cyber_maturity::{Answers, AssessmentEngine, Catalogs, ClientInfo};
//!
//! let catalogs = Catalogs::builtin();
//! let engine = AssessmentEngine::new(&catalogs);
//!
//! let mut answers = Answers::new();
//! answers.set("gov-1", 3);
//!
//! let client = ClientInfo::named("Town hall").with_type("Collectivité territoriale");
//! let assessment = engine.assess(&answers, &client);
//!
//! assert!(assessment.maturity <= 100);
//! assert_eq!(assessment.budget.phases.len(), 3);
//! ```
//!
//! ### Importing a saved session
//!
//! ```no_run
//! use std::path::Path;
//! use cyber_maturity::{AnswerValidation, AssessmentEngine, Catalogs, SessionRecord};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalogs = Catalogs::builtin();
//!     let session = SessionRecord::load(
//!         Path::new("audit_town_hall_2026-03-02.json"),
//!         &catalogs.questions,
//!         AnswerValidation::Strict,
//!     )?;
//!
//!     let engine = AssessmentEngine::new(&catalogs);
//!     let assessment = engine.assess(&session.answers, &session.client_info);
//!     println!("{}: {}%", session.client_info.name, assessment.maturity);
//!     Ok(())
//! }
//! ```
//!
//! ### Simulating budget phases
//!
//! ```
//! use cyber_maturity::{Answers, AssessmentEngine, Catalogs};
//!
//! let catalogs = Catalogs::builtin();
//! let engine = AssessmentEngine::new(&catalogs);
//!
//! let projection = engine.project(&Answers::new(), &[0, 1]);
//! assert!(projection.maturity >= projection.actual_maturity);
//! ```

// Lint to discourage unwrap() in production code
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::too_many_lines
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod session;

// Re-export main types for convenience
pub use catalog::Catalogs;
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, Validatable};
pub use engine::{
    compute_domain_scores, compute_maturity, generate_budget, generate_recommendations,
    resolve_benchmark, Assessment, AssessmentEngine, BudgetPlan, MaturityTier, Projection,
    Recommendation, RecommendationLevel,
};
pub use error::{AuditError, ErrorContext, Result};
pub use model::{Answers, BenchmarkTable, BudgetCatalog, ClientInfo, QuestionCatalog};
pub use reports::{ReportConfig, ReportFormat, ReportGenerator};
pub use session::{AnswerValidation, SessionRecord};
