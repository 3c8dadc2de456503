//! Built-in sector benchmarks.
//!
//! Keys are the sector and organization-type labels stored in client
//! records, so they stay in the language those records use.

use crate::model::{Benchmark, BenchmarkTable};

fn benchmark(avg_maturity: u8, top_risks: [&str; 3], description: &str) -> Benchmark {
    Benchmark {
        avg_maturity,
        top_risks: top_risks.iter().map(ToString::to_string).collect(),
        description: description.to_string(),
    }
}

pub(crate) fn builtin_benchmarks() -> BenchmarkTable {
    [
        (
            "Collectivité territoriale",
            benchmark(
                45,
                ["Ransomware", "Phishing", "Data leak"],
                "Based on local authorities of similar size.",
            ),
        ),
        (
            "Ministère",
            benchmark(
                65,
                ["State espionage", "Targeted attacks (APT)", "Denial of service"],
                "Based on ministries and central agencies.",
            ),
        ),
        (
            "Établissement public",
            benchmark(
                50,
                ["CEO fraud", "Ransomware", "Intellectual property theft"],
                "Public bodies and state operators.",
            ),
        ),
        (
            "Agence d'État",
            benchmark(
                55,
                ["Ransomware", "Denial of service", "Supply chain attacks"],
                "Specialized agencies and operators.",
            ),
        ),
        (
            "Préfecture",
            benchmark(
                52,
                ["Spear phishing", "Personal data leak", "Ransomware"],
                "Devolved state services.",
            ),
        ),
        (
            "Autre",
            benchmark(
                48,
                ["Ransomware", "Phishing", "Data theft"],
                "Average across all public sectors.",
            ),
        ),
    ]
    .into_iter()
    .collect()
}
