//! Dircache - An in-memory cache for directory group lookups
//!
//! Maps search terms to directory group lists with TTL expiration,
//! usage-frequency tracking, and popularity-aware size eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::GroupLookupCache;
pub use config::Config;
pub use tasks::{preload_popular_groups, spawn_cleanup_task};
