//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, TermCount};

/// Response body for a cached search lookup (GET /search/:term)
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The requested term
    pub term: String,
    /// The cached group names
    pub groups: Vec<String>,
}

impl SearchResponse {
    /// Creates a new SearchResponse
    pub fn new(term: impl Into<String>, groups: Vec<String>) -> Self {
        Self {
            term: term.into(),
            groups,
        }
    }
}

/// Response body for storing a search result (PUT /search)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The term the result was stored under
    pub term: String,
    /// Number of groups stored
    pub group_count: usize,
}

impl StoreResponse {
    /// Creates a new StoreResponse
    pub fn new(term: impl Into<String>, group_count: usize) -> Self {
        let term = term.into();
        Self {
            message: format!("Stored {} group(s) for term '{}'", group_count, term),
            term,
            group_count,
        }
    }
}

/// Response body for the popular-groups endpoint (GET /popular)
#[derive(Debug, Clone, Serialize)]
pub struct PopularResponse {
    /// Union of the groups behind the most-used search terms
    pub groups: Vec<String>,
}

impl PopularResponse {
    /// Creates a new PopularResponse
    pub fn new(groups: Vec<String>) -> Self {
        Self { groups }
    }
}

/// Response body for the group existence probe (GET /groups/:name)
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    /// The probed group name
    pub group: String,
    /// Whether the group appeared in a fresh cached result
    pub exists: bool,
}

impl ExistsResponse {
    /// Creates a new ExistsResponse
    pub fn new(group: impl Into<String>, exists: bool) -> Self {
        Self {
            group: group.into(),
            exists,
        }
    }
}

/// Response body for clearing the cache (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cached search results
    pub total_entries: usize,
    /// Size of the per-group existence index
    pub cache_size: usize,
    /// Union of the groups behind the top popular terms
    pub popular_groups: Vec<String>,
    /// Top terms by usage count
    pub most_searched: Vec<TermCount>,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of size-bound evictions
    pub evictions: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Most recent cleanup run in ISO 8601 format
    pub last_cleanup: String,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn from_stats(stats: CacheStats) -> Self {
        let total_lookups = stats.hits + stats.misses;
        let hit_rate = if total_lookups > 0 {
            stats.hits as f64 / total_lookups as f64
        } else {
            0.0
        };
        let last_cleanup = chrono::DateTime::from_timestamp_millis(stats.last_cleanup as i64)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();
        Self {
            total_entries: stats.total_entries,
            cache_size: stats.cache_size,
            popular_groups: stats.popular_groups,
            most_searched: stats.most_searched,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            hit_rate,
            last_cleanup,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    #[allow(dead_code)]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
