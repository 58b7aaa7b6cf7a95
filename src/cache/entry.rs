//! Cache Entry Module
//!
//! Defines the two entry kinds held by the group lookup cache: per-term
//! search results and the per-group existence index derived from them.

// == Search Entry ==
/// A cached search result: the groups returned for one normalized term.
#[derive(Debug, Clone)]
pub struct SearchEntry {
    /// Group names in the order the directory returned them
    pub groups: Vec<String>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl SearchEntry {
    // == Constructor ==
    /// Creates a new search entry stamped with the given instant.
    pub fn new(groups: Vec<String>, now_ms: u64) -> Self {
        Self {
            groups,
            created_at: now_ms,
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still within its TTL window.
    ///
    /// Boundary condition: an entry is stale once its age is greater than
    /// or equal to the TTL, so freshness requires `age < ttl` strictly.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at) < ttl_ms
    }
}

// == Group Entry ==
/// One entry in the per-group existence index.
///
/// Keyed by the case-folded group name; the payload keeps the original
/// casing as the directory reported it. The timestamp is replaced every
/// time the group reappears in a stored search result.
#[derive(Debug, Clone)]
pub struct GroupEntry {
    /// Group name with original casing
    pub name: String,
    /// Timestamp of the most recent store that contained this group
    pub created_at: u64,
}

impl GroupEntry {
    // == Constructor ==
    /// Creates a new group entry stamped with the given instant.
    pub fn new(name: String, now_ms: u64) -> Self {
        Self {
            name,
            created_at: now_ms,
        }
    }

    // == Is Fresh ==
    /// Same TTL rule as [`SearchEntry::is_fresh`].
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at) < ttl_ms
    }
}
