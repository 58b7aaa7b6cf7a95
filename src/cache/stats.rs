//! Cache Statistics Module
//!
//! Tracks cache performance metrics and builds read-only snapshots of the
//! cache state for the stats endpoint.

use serde::Serialize;

// == Term Count ==
/// One (term, count) pair in the most-searched ranking.
#[derive(Debug, Clone, Serialize)]
pub struct TermCount {
    /// Normalized search term
    pub term: String,
    /// Number of stores and cache hits recorded for the term
    pub count: u64,
}

// == Cache Stats ==
/// Read-only snapshot of the cache state.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Number of cached search results
    pub total_entries: usize,
    /// Size of the per-group existence index
    pub cache_size: usize,
    /// Union of the groups behind the top popular terms
    pub popular_groups: Vec<String>,
    /// Top-5 terms by usage count
    pub most_searched: Vec<TermCount>,
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (absent or stale)
    pub misses: u64,
    /// Number of terms evicted by the size-bound cleanup pass
    pub evictions: u64,
    /// Timestamp of the most recent cleanup run (Unix milliseconds)
    pub last_cleanup: u64,
}

// == Cache Metrics ==
/// Running hit/miss/eviction counters.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (absent or stale)
    pub misses: u64,
    /// Number of terms evicted by the size-bound cleanup pass
    pub evictions: u64,
}

impl CacheMetrics {
    // == Constructor ==
    /// Creates a new CacheMetrics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Evictions ==
    /// Adds size-bound eviction removals to the eviction counter.
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }
}
