//! Cleanup Sweep Task
//!
//! Background task that periodically evicts expired cache entries.
//! Advisory housekeeping only: staleness is also checked lazily on every
//! read, so correctness never depends on this task running.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::GroupLookupCache;

/// Spawns a background task that periodically runs the cache cleanup.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs. It acquires a write lock on the cache for each sweep, so
/// a single sweep can never overlap with itself.
///
/// # Arguments
/// * `cache` - Arc<RwLock<GroupLookupCache>> shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<GroupLookupCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cleanup sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and evict expired entries
            let report = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup()
            };

            // Log cleanup statistics
            if report.total() > 0 {
                info!(
                    "Cleanup sweep: {} expired terms, {} expired groups, {} evicted terms",
                    report.expired_terms, report.expired_groups, report.evicted_terms
                );
            } else {
                debug!("Cleanup sweep: nothing to remove");
            }
        }
    })
}
