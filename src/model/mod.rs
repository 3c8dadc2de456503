//! Data model for the questionnaire and its static reference tables.
//!
//! Catalog types ([`QuestionCatalog`], [`BudgetCatalog`], [`BenchmarkTable`])
//! are immutable once loaded. [`Answers`] and [`ClientInfo`] are the
//! per-session inputs; the engine only ever borrows them.

mod answers;
mod benchmark;
mod budget;
mod catalog;
mod client;

pub use answers::*;
pub use benchmark::*;
pub use budget::*;
pub use catalog::*;
pub use client::*;
