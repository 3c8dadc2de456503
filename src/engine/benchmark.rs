//! Sector benchmark lookup and comparison.

use crate::model::{Benchmark, BenchmarkTable, ClientInfo};
use serde::{Deserialize, Serialize};

/// Find the benchmark for a client: sector first, then organization type.
///
/// Absence is `None`, never a zero-valued benchmark, since 0 is a
/// legitimate average.
#[must_use]
pub fn resolve_benchmark<'a>(client: &ClientInfo, table: &'a BenchmarkTable) -> Option<&'a Benchmark> {
    resolve_benchmark_entry(client, table).map(|(_, benchmark)| benchmark)
}

/// Like [`resolve_benchmark`], also returning the key that matched.
#[must_use]
pub fn resolve_benchmark_entry<'a>(
    client: &ClientInfo,
    table: &'a BenchmarkTable,
) -> Option<(&'a str, &'a Benchmark)> {
    [client.sector.as_str(), client.org_type.as_str()]
        .into_iter()
        .filter(|key| !key.is_empty())
        .find_map(|key| table.get_entry(key))
}

/// Where the client stands against its sector average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchmarkPosition {
    AtOrAbove,
    Below,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    /// Key of the benchmark that matched
    pub key: String,
    pub sector_average: u8,
    /// Maturity minus the sector average
    pub delta: i16,
    pub position: BenchmarkPosition,
}

impl BenchmarkComparison {
    #[must_use]
    pub fn new(key: impl Into<String>, maturity: u8, benchmark: &Benchmark) -> Self {
        let delta = i16::from(maturity) - i16::from(benchmark.avg_maturity);
        Self {
            key: key.into(),
            sector_average: benchmark.avg_maturity,
            delta,
            position: if delta >= 0 {
                BenchmarkPosition::AtOrAbove
            } else {
                BenchmarkPosition::Below
            },
        }
    }

    /// Absolute point gap to the average.
    #[must_use]
    pub const fn gap(&self) -> u16 {
        self.delta.unsigned_abs()
    }
}
