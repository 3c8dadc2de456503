//! Sector reference maturity values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    /// Average maturity observed for the sector, 0 to 100
    pub avg_maturity: u8,
    #[serde(default)]
    pub top_risks: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Benchmarks keyed by sector or organization type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    entries: IndexMap<String, Benchmark>,
}

impl BenchmarkTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, benchmark: Benchmark) -> Option<Benchmark> {
        self.entries.insert(key.into(), benchmark)
    }

    /// Exact-match lookup, returning the stored key alongside the value.
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<(&str, &Benchmark)> {
        self.entries.get_key_value(key).map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Benchmark> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Benchmark)> for BenchmarkTable {
    fn from_iter<T: IntoIterator<Item = (K, Benchmark)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
