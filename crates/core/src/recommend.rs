use std::cmp::Reverse;

use crate::model::{DiagnosticCounters, Fundamental};

/// One entry of the ranked remediation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub fundamental: Fundamental,
    pub miss_count: u32,
}

/// Rank fundamentals by mistake count, worst first.
///
/// The result is always a permutation of the four fundamentals. The sort is
/// stable, so ties keep the fixed enumeration order of
/// [`Fundamental::ALL`]; the same counters always produce the same list.
#[must_use]
pub fn rank(counters: &DiagnosticCounters) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = counters
        .iter()
        .map(|(fundamental, miss_count)| Recommendation {
            fundamental,
            miss_count,
        })
        .collect();
    ranked.sort_by_key(|entry| Reverse(entry.miss_count));
    ranked
}
