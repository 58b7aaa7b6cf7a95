//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::GroupLookupCache;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, ExistsResponse, HealthResponse, PopularParams, PopularResponse, SearchResponse,
    StatsResponse, StoreResponse, StoreSearchRequest,
};

/// Default number of popular terms unioned by GET /popular
const DEFAULT_POPULAR_LIMIT: usize = 10;

/// Application state shared across all handlers.
///
/// Contains the group lookup cache wrapped in Arc<RwLock<>> for
/// thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe group lookup cache
    pub cache: Arc<RwLock<GroupLookupCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: GroupLookupCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the cache with parameters from the Config.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = GroupLookupCache::new(
            config.max_cache_size,
            config.cache_ttl,
            config.popular_threshold,
        );
        Self::new(cache)
    }
}

/// Handler for PUT /search
///
/// Stores the result of a directory group search.
pub async fn store_search_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreSearchRequest>,
) -> Result<Json<StoreResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let group_count = req.groups.len();

    // Acquire write lock and store the result
    let mut cache = state.cache.write().await;
    cache.set(&req.term, req.groups);

    Ok(Json(StoreResponse::new(req.term, group_count)))
}

/// Handler for GET /search/:term
///
/// Returns the cached result for a term, or 404 on a miss. A miss tells
/// the caller to query the directory itself and store the result back.
pub async fn search_handler(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<SearchResponse>> {
    // Acquire write lock (a hit bumps the term's usage counter)
    let mut cache = state.cache.write().await;
    match cache.get(&term) {
        Some(groups) => Ok(Json(SearchResponse::new(term, groups))),
        None => Err(CacheError::NotFound(term)),
    }
}

/// Handler for GET /popular
///
/// Returns the union of the groups behind the most-used search terms.
pub async fn popular_handler(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Json<PopularResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_POPULAR_LIMIT);

    let cache = state.cache.read().await;
    Json(PopularResponse::new(cache.popular_groups(limit)))
}

/// Handler for GET /groups/:name
///
/// Probes whether a group appeared in any fresh cached result.
pub async fn exists_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<ExistsResponse> {
    let cache = state.cache.read().await;
    let exists = cache.has_group(&name);

    Json(ExistsResponse::new(name, exists))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(stats))
}

/// Handler for DELETE /cache
///
/// Empties the cache unconditionally.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();

    Json(ClearResponse::cleared())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(GroupLookupCache::new(100, 600, 3))
    }

    #[tokio::test]
    async fn test_store_and_search_handler() {
        let state = test_state();

        let req = StoreSearchRequest {
            term: "VPN".to_string(),
            groups: vec!["VPN-Users".to_string(), "VPN-Admins".to_string()],
        };
        let result = store_search_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        // Lookup is case-insensitive
        let result = search_handler(State(state.clone()), Path("vpn".to_string())).await;
        let response = result.unwrap();
        assert_eq!(response.groups.len(), 2);
        assert_eq!(response.groups[0], "VPN-Users");
    }

    #[tokio::test]
    async fn test_search_miss() {
        let state = test_state();

        let result = search_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_invalid_request() {
        let state = test_state();

        let req = StoreSearchRequest {
            term: "".to_string(),
            groups: vec![],
        };
        let result = store_search_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_exists_handler() {
        let state = test_state();

        let req = StoreSearchRequest {
            term: "VPN".to_string(),
            groups: vec!["VPN-Users".to_string()],
        };
        store_search_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        let response = exists_handler(State(state.clone()), Path("vpn-users".to_string())).await;
        assert!(response.exists);

        let response = exists_handler(State(state), Path("unknown".to_string())).await;
        assert!(!response.exists);
    }

    #[tokio::test]
    async fn test_popular_handler() {
        let state = test_state();

        let req = StoreSearchRequest {
            term: "VPN".to_string(),
            groups: vec!["VPN-Users".to_string()],
        };
        store_search_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        // Two hits push the term to the popularity threshold
        for _ in 0..2 {
            search_handler(State(state.clone()), Path("vpn".to_string()))
                .await
                .unwrap();
        }

        let response = popular_handler(
            State(state),
            Query(PopularParams { limit: Some(5) }),
        )
        .await;
        assert_eq!(response.groups, vec!["VPN-Users".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state();

        let req = StoreSearchRequest {
            term: "VPN".to_string(),
            groups: vec!["VPN-Users".to_string()],
        };
        store_search_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        clear_handler(State(state.clone())).await;

        let result = search_handler(State(state), Path("vpn".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.total_entries, 0);
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
