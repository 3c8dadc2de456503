//! Answer sets keyed by question id.

use super::QuestionCatalog;
use crate::error::{AuditError, Result, SessionErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chosen option index per question id.
///
/// A question without an entry is unanswered. Entries for ids the catalog
/// does not know are kept (so re-exported sessions stay intact) but are
/// ignored by every scoring function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, usize>);

impl Answers {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record an answer, returning the previous one.
    pub fn set(&mut self, question_id: impl Into<String>, index: usize) -> Option<usize> {
        self.0.insert(question_id.into(), index)
    }

    pub fn clear(&mut self, question_id: &str) -> Option<usize> {
        self.0.remove(question_id)
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.0.get(question_id).copied()
    }

    #[must_use]
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Ids that do not belong to `catalog`.
    pub fn unknown_ids<'a>(&'a self, catalog: &'a QuestionCatalog) -> impl Iterator<Item = &'a str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(move |id| !catalog.contains(id))
    }

    /// Number of catalog questions that have an answer.
    #[must_use]
    pub fn answered_count(&self, catalog: &QuestionCatalog) -> usize {
        catalog
            .questions()
            .filter(|(_, q)| self.is_answered(&q.id))
            .count()
    }

    /// Check that every answer to a known question names one of its options.
    ///
    /// The scoring functions assume this holds; callers building answers
    /// by hand should run it before assessing.
    pub fn validate(&self, catalog: &QuestionCatalog) -> Result<()> {
        for (_, question) in catalog.questions() {
            if let Some(index) = self.get(&question.id) {
                if !question.accepts(index) {
                    return Err(AuditError::session(
                        "validating answers",
                        SessionErrorKind::AnswerOutOfRange {
                            id: question.id.clone(),
                            index: i64::try_from(index).unwrap_or(i64::MAX),
                            options: question.options.len(),
                        },
                    ));
                }
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, usize)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
