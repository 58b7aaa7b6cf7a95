//! Usage Tracker Module
//!
//! Tracks per-term hit counts for popularity ranking and least-used eviction.

use std::collections::HashMap;

// == Usage Tracker ==
/// Per-term usage counter backing popularity ranking and eviction order.
///
/// Counts are monotonically non-decreasing; a term's counter only
/// disappears when the term itself is evicted or the cache is cleared.
/// Ties in either ranking direction are broken lexicographically on the
/// normalized term so ordering never depends on map iteration order.
#[derive(Debug, Default)]
pub struct UsageTracker {
    /// Normalized term -> hit count
    counts: HashMap<String, u64>,
}

impl UsageTracker {
    // == Constructor ==
    /// Creates a new empty usage tracker.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    // == Record ==
    /// Increments the counter for a term, creating it at 1 if absent.
    pub fn record(&mut self, term: &str) {
        *self.counts.entry(term.to_string()).or_insert(0) += 1;
    }

    // == Count ==
    /// Returns the current count for a term (0 if never recorded).
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    // == Remove ==
    /// Drops a term's counter, if tracked.
    pub fn remove(&mut self, term: &str) {
        self.counts.remove(term);
    }

    // == Ranked ==
    /// All terms ordered by count descending, term ascending on ties.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(term, count)| (term.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    // == Popular ==
    /// Terms whose count meets the threshold, in ranked order.
    pub fn popular(&self, threshold: u64) -> Vec<(String, u64)> {
        self.ranked()
            .into_iter()
            .filter(|(_, count)| *count >= threshold)
            .collect()
    }

    // == Least Used ==
    /// The `n` terms with the lowest counts (count ascending, term
    /// ascending on ties). Eviction candidates for the size-bound pass.
    pub fn least_used(&self, n: usize) -> Vec<String> {
        let mut entries: Vec<(&String, &u64)> = self.counts.iter().collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(n)
            .map(|(term, _)| term.clone())
            .collect()
    }

    // == Length ==
    /// Returns the number of tracked terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    // == Clear ==
    /// Drops all counters.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
