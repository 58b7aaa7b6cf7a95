//! Background Tasks Module
//!
//! Contains tasks that run alongside request handling during server
//! operation.
//!
//! # Tasks
//! - Cleanup sweep: evicts expired cache entries at configured intervals
//! - Preload: warms the cache with common search terms via an injected
//!   directory fetch function

mod cleanup;
mod preload;

pub use cleanup::spawn_cleanup_task;
pub use preload::{preload_popular_groups, PRELOAD_TERMS};
