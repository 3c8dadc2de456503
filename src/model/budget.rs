//! Costed remediation line items.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of budget phases.
pub const PHASE_COUNT: usize = 3;

/// A costed line item, keyed by question id in [`BudgetCatalog`].
///
/// Its `name` is the natural key for deduplication inside a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub name: String,
    /// Phase index, 0 to 2
    pub phase: usize,
    /// One-time cost in whole currency units
    pub cost: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrent_cost: Option<u64>,
    #[serde(default)]
    pub description: String,
    /// Product holds a national security certification
    #[serde(default)]
    pub regulatory_certified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_ref: Option<String>,
}

impl BudgetItem {
    pub fn new(name: impl Into<String>, phase: usize, cost: u64) -> Self {
        Self {
            name: name.into(),
            phase,
            cost,
            recurrent_cost: None,
            description: String::new(),
            regulatory_certified: false,
            market_ref: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn with_recurrent_cost(mut self, cost: u64) -> Self {
        self.recurrent_cost = Some(cost);
        self
    }

    #[must_use]
    pub const fn certified(mut self) -> Self {
        self.regulatory_certified = true;
        self
    }

    #[must_use]
    pub fn with_market_ref(mut self, market_ref: impl Into<String>) -> Self {
        self.market_ref = Some(market_ref.into());
        self
    }
}

/// Budget items keyed by the question id whose weakness triggers them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetCatalog {
    items: IndexMap<String, BudgetItem>,
}

impl BudgetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, item: BudgetItem) -> Option<BudgetItem> {
        self.items.insert(question_id.into(), item)
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&BudgetItem> {
        self.items.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BudgetItem)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, BudgetItem)> for BudgetCatalog {
    fn from_iter<T: IntoIterator<Item = (K, BudgetItem)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog: BudgetCatalog = [
            ("b", BudgetItem::new("Firewall", 0, 10)),
            ("a", BudgetItem::new("SIEM", 1, 20)),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = catalog.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_item_deserializes_camel_case() {
        let json = r#"{"name":"EDR","phase":0,"cost":100,"recurrentCost":20,"regulatoryCertified":true}"#;
        let item: BudgetItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.recurrent_cost, Some(20));
        assert!(item.regulatory_certified);
        assert!(item.market_ref.is_none());
    }
}
