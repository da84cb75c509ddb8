//! Sorted collection of analysis records for one run

use super::{DependencyResult, RiskTier, TierFilter};
use serde::{Deserialize, Serialize};

/// Number of records per risk tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SummaryCounts {
    /// Total number of records counted
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    /// Count for a single tier
    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
        }
    }
}

/// All records of one analysis run, ordered by risk tier then name.
///
/// Contents only change through [`ResultSet::replace_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    results: Vec<DependencyResult>,
}

impl ResultSet {
    /// Creates an empty ResultSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ResultSet holding a sorted copy of `results`
    pub fn from_results(results: Vec<DependencyResult>) -> Self {
        let mut set = Self::new();
        set.replace_all(results);
        set
    }

    /// Discard the current contents and store `results` sorted.
    ///
    /// Sorting is stable: records with equal tier and name keep their
    /// input order.
    pub fn replace_all(&mut self, mut results: Vec<DependencyResult>) {
        results.sort_by(|a, b| {
            a.risk
                .rank()
                .cmp(&b.risk.rank())
                .then_with(|| a.name.cmp(&b.name))
        });
        self.results = results;
    }

    /// Records passing `filter`, in stored order
    pub fn filter(&self, filter: TierFilter) -> Vec<&DependencyResult> {
        self.results
            .iter()
            .filter(|r| filter.matches(r.risk))
            .collect()
    }

    /// Per-tier counts over the whole set
    pub fn summary_counts(&self) -> SummaryCounts {
        let mut counts = SummaryCounts::default();
        for result in &self.results {
            match result.risk {
                RiskTier::High => counts.high += 1,
                RiskTier::Medium => counts.medium += 1,
                RiskTier::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the set holds no records
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over records in stored order
    pub fn iter(&self) -> impl Iterator<Item = &DependencyResult> {
        self.results.iter()
    }

    /// Records as a slice
    pub fn as_slice(&self) -> &[DependencyResult] {
        &self.results
    }

    /// Number of records that came from a failed registry lookup
    pub fn degraded_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_degraded()).count()
    }
}
