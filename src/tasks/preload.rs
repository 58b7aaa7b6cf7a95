//! Preload Task
//!
//! Warms the cache with a fixed set of common search terms by invoking an
//! injected directory fetch function.

use std::future::Future;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::GroupLookupCache;

// == Preload Terms ==
/// Search terms warmed on preload, most common first.
pub const PRELOAD_TERMS: [&str; 7] = [
    "VPN",
    "Internet",
    "Administrators",
    "Users",
    "Domain Users",
    "Domain Admins",
    "Remote Desktop Users",
];

/// Warms the cache by fetching each preload term through `fetch`.
///
/// Terms are fetched sequentially, never concurrently, to preserve request
/// ordering against whatever rate limits the directory service imposes.
/// A non-empty result is stored; an empty result is skipped. A failed
/// fetch is logged as a warning and iteration continues - a single term's
/// failure never aborts the pass and is never surfaced to the caller.
///
/// Retry and timeout policy, if any, belong to the injected `fetch`.
///
/// # Arguments
/// * `cache` - Shared cache to warm (the write lock is held per store,
///   never across an await)
/// * `fetch` - Directory lookup returning the groups matching a term
pub async fn preload_popular_groups<F, Fut>(cache: &RwLock<GroupLookupCache>, fetch: F)
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = anyhow::Result<Vec<String>>>,
{
    for term in PRELOAD_TERMS {
        match fetch(term.to_string()).await {
            Ok(groups) if !groups.is_empty() => {
                debug!("Preloaded {} group(s) for term '{}'", groups.len(), term);
                cache.write().await.set(term, groups);
            }
            Ok(_) => {
                debug!("Preload for term '{}' returned no groups, skipping", term);
            }
            Err(error) => {
                warn!("Preload for term '{}' failed: {:#}", term, error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_cache() -> RwLock<GroupLookupCache> {
        RwLock::new(GroupLookupCache::new(100, 600, 3))
    }

    #[tokio::test]
    async fn test_preload_stores_all_terms() {
        let cache = test_cache();

        preload_popular_groups(&cache, |term: String| async move {
            Ok(vec![format!("{term}-Group")])
        })
        .await;

        let mut guard = cache.write().await;
        for term in PRELOAD_TERMS {
            assert!(guard.get(term).is_some(), "term '{term}' should be cached");
        }
        assert_eq!(guard.len(), PRELOAD_TERMS.len());
    }

    #[tokio::test]
    async fn test_preload_continues_past_failures() {
        let cache = test_cache();

        // One term fails; every other term must still land
        preload_popular_groups(&cache, |term: String| async move {
            if term == "Domain Admins" {
                Err(anyhow!("directory unavailable"))
            } else {
                Ok(vec![format!("{term}-Group")])
            }
        })
        .await;

        let mut guard = cache.write().await;
        assert!(guard.get("Domain Admins").is_none());
        for term in PRELOAD_TERMS.iter().filter(|t| **t != "Domain Admins") {
            assert!(guard.get(term).is_some(), "term '{term}' should be cached");
        }
    }

    #[tokio::test]
    async fn test_preload_skips_empty_results() {
        let cache = test_cache();

        preload_popular_groups(&cache, |_term: String| async { Ok(Vec::new()) }).await;

        assert!(cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_preload_fetches_sequentially() {
        let cache = test_cache();
        let in_flight = AtomicUsize::new(0);

        preload_popular_groups(&cache, |_term: String| {
            let entered = in_flight.fetch_add(1, Ordering::SeqCst);
            let in_flight = &in_flight;
            async move {
                // No other fetch may be in flight while this one runs
                assert_eq!(entered, 0, "fetches overlapped");
                tokio::task::yield_now().await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(vec!["G".to_string()])
            }
        })
        .await;

        assert_eq!(cache.read().await.len(), PRELOAD_TERMS.len());
    }
}
