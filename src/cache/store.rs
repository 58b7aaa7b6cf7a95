//! Cache Store Module
//!
//! Main cache engine: a dual-indexed TTL cache mapping normalized search
//! terms to group lists, with usage-frequency tracking, popularity ranking,
//! and a bounded size enforced by a two-pass cleanup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::cache::{
    CacheMetrics, CacheStats, Clock, GroupEntry, SearchEntry, SystemClock, TermCount, UsageTracker,
};

// == Cleanup Report ==
/// Counts of entries removed by one [`GroupLookupCache::cleanup`] run.
#[derive(Debug, Clone, Default)]
pub struct CleanupReport {
    /// Search entries removed because their TTL elapsed
    pub expired_terms: usize,
    /// Group index entries removed because their TTL elapsed
    pub expired_groups: usize,
    /// Search entries force-evicted by the size-bound pass
    pub evicted_terms: usize,
}

impl CleanupReport {
    /// Total number of removals across both passes.
    pub fn total(&self) -> usize {
        self.expired_terms + self.expired_groups + self.evicted_terms
    }
}

// == Group Lookup Cache ==
/// Bounded TTL cache for directory group searches.
///
/// Holds three structures: the search index (normalized term -> groups),
/// the group existence index (normalized group name -> original casing),
/// and the per-term usage counter driving popularity ranking and eviction.
#[derive(Debug)]
pub struct GroupLookupCache {
    /// Normalized search term -> cached result
    search_entries: HashMap<String, SearchEntry>,
    /// Normalized group name -> existence record
    group_entries: HashMap<String, GroupEntry>,
    /// Per-term usage counts
    usage: UsageTracker,
    /// Hit/miss/eviction counters
    metrics: CacheMetrics,
    /// Maximum number of search entries allowed
    max_entries: usize,
    /// Entry time-to-live in milliseconds
    ttl_ms: u64,
    /// Usage count at which a term counts as popular
    popular_threshold: u64,
    /// Timestamp of the most recent cleanup run
    last_cleanup: u64,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl GroupLookupCache {
    // == Constructor ==
    /// Creates a new GroupLookupCache on the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of search entries the cache can hold
    /// * `ttl_secs` - Entry time-to-live in seconds
    /// * `popular_threshold` - Usage count at which a term counts as popular
    pub fn new(max_entries: usize, ttl_secs: u64, popular_threshold: u64) -> Self {
        Self::with_clock(
            max_entries,
            ttl_secs,
            popular_threshold,
            Arc::new(SystemClock),
        )
    }

    /// Creates a new GroupLookupCache reading time from the given clock.
    pub fn with_clock(
        max_entries: usize,
        ttl_secs: u64,
        popular_threshold: u64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let last_cleanup = clock.now_ms();
        Self {
            search_entries: HashMap::new(),
            group_entries: HashMap::new(),
            usage: UsageTracker::new(),
            metrics: CacheMetrics::new(),
            max_entries,
            ttl_ms: ttl_secs * 1000,
            popular_threshold,
            last_cleanup,
            clock,
        }
    }

    // == Get ==
    /// Looks up the cached result for a search term.
    ///
    /// The term is case-folded before lookup. Returns the cached groups
    /// only if the entry exists and its TTL has not elapsed; a stale entry
    /// is reported as a plain miss and left in place (physical removal is
    /// `cleanup`'s job). The term's usage counter is incremented on a hit,
    /// never on a miss.
    pub fn get(&mut self, term: &str) -> Option<Vec<String>> {
        let normalized = term.to_lowercase();
        let now = self.clock.now_ms();

        match self.search_entries.get(&normalized) {
            Some(entry) if entry.is_fresh(now, self.ttl_ms) => {
                let groups = entry.groups.clone();
                self.usage.record(&normalized);
                self.metrics.record_hit();
                Some(groups)
            }
            _ => {
                self.metrics.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores the result of a directory search.
    ///
    /// If the cache is already at capacity, a cleanup runs before the
    /// insert. The size check happens before insertion, so when cleanup
    /// frees nothing (possible only with `max_entries < 3`, where the
    /// eviction quota floors to zero) the cache briefly holds one entry
    /// over the bound.
    ///
    /// Every group in the result also refreshes its record in the group
    /// existence index, keeping the original casing as payload.
    pub fn set(&mut self, term: &str, groups: Vec<String>) {
        let normalized = term.to_lowercase();

        if self.search_entries.len() >= self.max_entries {
            self.cleanup();
        }

        let now = self.clock.now_ms();

        for group in &groups {
            self.group_entries
                .insert(group.to_lowercase(), GroupEntry::new(group.clone(), now));
        }

        self.search_entries
            .insert(normalized.clone(), SearchEntry::new(groups, now));
        self.usage.record(&normalized);
    }

    // == Popular Groups ==
    /// Union of the groups behind the most-used search terms.
    ///
    /// Takes the first `limit` terms whose usage count meets the
    /// popularity threshold (count descending, lexicographic tie-break),
    /// maps each through the raw search index, flattens the results, and
    /// deduplicates keeping first-seen order. A term whose entry was
    /// evicted is skipped silently; staleness is not checked here.
    pub fn popular_groups(&self, limit: usize) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut groups = Vec::new();

        for (term, _) in self
            .usage
            .popular(self.popular_threshold)
            .into_iter()
            .take(limit)
        {
            if let Some(entry) = self.search_entries.get(&term) {
                for group in &entry.groups {
                    if seen.insert(group.clone()) {
                        groups.push(group.clone());
                    }
                }
            }
        }

        groups
    }

    // == Has Group ==
    /// Checks whether a group appeared in any stored result within the
    /// TTL window. Case-insensitive; does not touch usage counters.
    pub fn has_group(&self, group_name: &str) -> bool {
        let now = self.clock.now_ms();
        self.group_entries
            .get(&group_name.to_lowercase())
            .map(|entry| entry.is_fresh(now, self.ttl_ms))
            .unwrap_or(false)
    }

    // == Cleanup ==
    /// Removes expired entries, then enforces the size bound.
    ///
    /// Pass 1 drops every search entry (with its usage counter) and every
    /// group record whose TTL elapsed; the two indexes expire
    /// independently. Pass 2 runs only if the search index is still at or
    /// over capacity: the least-used third of the terms
    /// (`max_entries / 3`, count ascending) is removed. Group records are
    /// untouched by pass 2.
    pub fn cleanup(&mut self) -> CleanupReport {
        let now = self.clock.now_ms();
        let ttl = self.ttl_ms;

        let expired_terms: Vec<String> = self
            .search_entries
            .iter()
            .filter(|(_, entry)| !entry.is_fresh(now, ttl))
            .map(|(term, _)| term.clone())
            .collect();

        for term in &expired_terms {
            self.search_entries.remove(term);
            self.usage.remove(term);
        }

        let groups_before = self.group_entries.len();
        self.group_entries
            .retain(|_, entry| entry.is_fresh(now, ttl));
        let expired_groups = groups_before - self.group_entries.len();

        let mut evicted_terms = 0;
        if self.search_entries.len() >= self.max_entries {
            let victims = self.usage.least_used(self.max_entries / 3);
            for term in &victims {
                self.search_entries.remove(term);
                self.usage.remove(term);
            }
            evicted_terms = victims.len();
            self.metrics.record_evictions(evicted_terms as u64);
        }

        self.last_cleanup = now;

        CleanupReport {
            expired_terms: expired_terms.len(),
            expired_groups,
            evicted_terms,
        }
    }

    // == Clear ==
    /// Empties the search index, the group index, and all usage counters.
    pub fn clear(&mut self) {
        self.search_entries.clear();
        self.group_entries.clear();
        self.usage.clear();
    }

    // == Stats ==
    /// Returns a read-only snapshot of the cache state.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.search_entries.len(),
            cache_size: self.group_entries.len(),
            popular_groups: self.popular_groups(5),
            most_searched: self
                .usage
                .ranked()
                .into_iter()
                .take(5)
                .map(|(term, count)| TermCount { term, count })
                .collect(),
            hits: self.metrics.hits,
            misses: self.metrics.misses,
            evictions: self.metrics.evictions,
            last_cleanup: self.last_cleanup,
        }
    }

    // == Length ==
    /// Returns the current number of cached search results.
    pub fn len(&self) -> usize {
        self.search_entries.len()
    }

    // == Is Empty ==
    /// Returns true if no search results are cached.
    pub fn is_empty(&self) -> bool {
        self.search_entries.is_empty()
    }
}
