//! Questionnaire structure: categories, questions and remediation products.

use serde::{Deserialize, Serialize};

/// A procurement-ready product suggested when a question is answered weakly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationProduct {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub vendors: Vec<String>,
    /// Reference in the public purchasing marketplace, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_ref: Option<String>,
}

impl RemediationProduct {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            vendors: Vec::new(),
            market_ref: None,
        }
    }

    #[must_use]
    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors = vendors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_market_ref(mut self, market_ref: impl Into<String>) -> Self {
        self.market_ref = Some(market_ref.into());
        self
    }
}

/// One multiple-choice question.
///
/// Options are ordered from weakest (index 0) to strongest (last index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub help: String,
    pub options: Vec<String>,
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<RemediationProduct>,
    /// Effort rating, 1 (low) to 3 (high)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<u8>,
    /// Impact rating, 1 (low) to 3 (high)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<u8>,
    /// Set when the question maps to a regulatory obligation
    #[serde(default)]
    pub regulatory: bool,
}

impl Question {
    pub fn new<I, S>(id: impl Into<String>, text: impl Into<String>, options: I, weight: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            text: text.into(),
            help: String::new(),
            options: options.into_iter().map(Into::into).collect(),
            weight,
            remediation: None,
            effort: None,
            impact: None,
            regulatory: false,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    #[must_use]
    pub fn with_remediation(mut self, product: RemediationProduct) -> Self {
        self.remediation = Some(product);
        self
    }

    #[must_use]
    pub const fn with_ratings(mut self, effort: u8, impact: u8) -> Self {
        self.effort = Some(effort);
        self.impact = Some(impact);
        self
    }

    #[must_use]
    pub const fn with_regulatory_flag(mut self) -> Self {
        self.regulatory = true;
        self
    }

    /// Index of the strongest option.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.options.len().saturating_sub(1)
    }

    /// Weighted points the question contributes to a maximum score.
    #[must_use]
    pub fn max_contribution(&self) -> u64 {
        self.max_index() as u64 * u64::from(self.weight)
    }

    /// Whether `index` names one of this question's options.
    #[must_use]
    pub fn accepts(&self, index: usize) -> bool {
        index < self.options.len()
    }

    #[must_use]
    pub fn option_label(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn best_option(&self) -> Option<&str> {
        self.options.last().map(String::as_str)
    }
}

/// A themed group of questions; its title doubles as its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            color: color.into(),
            description: String::new(),
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }
}

/// The ordered list of categories making up the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub categories: Vec<Category>,
}

impl QuestionCatalog {
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Every question paired with its category, in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = (&Category, &Question)> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter().map(move |q| (c, q)))
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().map(|(_, q)| q).find(|q| q.id == id)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.question(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Category::new("Governance", "shield", "blue").with_questions(vec![
                Question::new("g1", "Policy?", ["No", "Draft", "Yes"], 3),
                Question::new("g2", "Officer?", ["No", "Yes"], 2),
            ]),
            Category::new("Network", "net", "green")
                .with_questions(vec![Question::new("n1", "Firewall?", ["No", "Partial", "Basic", "Full"], 5)]),
        ])
    }

    #[test]
    fn test_max_contribution() {
        let q = Question::new("q", "?", ["a", "b", "c", "d"], 4);
        assert_eq!(q.max_index(), 3);
        assert_eq!(q.max_contribution(), 12);
        assert!(q.accepts(3));
        assert!(!q.accepts(4));
        assert_eq!(q.best_option(), Some("d"));
    }

    #[test]
    fn test_catalog_lookup_and_order() {
        let catalog = sample();
        assert_eq!(catalog.question_count(), 3);
        let ids: Vec<_> = catalog.questions().map(|(_, q)| q.id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2", "n1"]);
        assert_eq!(catalog.question("n1").map(|q| q.weight), Some(5));
        assert!(!catalog.contains("missing"));
    }

    #[test]
    fn test_question_deserializes_with_defaults() {
        let json = r#"{"id":"x","text":"T","options":["a","b"],"weight":1}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.remediation.is_none());
        assert!(q.effort.is_none());
        assert!(!q.regulatory);
    }
}
