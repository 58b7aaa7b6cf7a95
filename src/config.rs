//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{DEFAULT_MAX_CACHE_SIZE, DEFAULT_POPULAR_THRESHOLD, DEFAULT_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached search results
    pub max_cache_size: usize,
    /// Entry time-to-live in seconds
    pub cache_ttl: u64,
    /// Usage count at which a term counts as popular
    pub popular_threshold: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_CACHE_SIZE` - Maximum cached search results (default: 100)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 600)
    /// - `POPULAR_THRESHOLD` - Popularity threshold (default: 3)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            max_cache_size: env::var("MAX_CACHE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CACHE_SIZE),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            popular_threshold: env::var("POPULAR_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POPULAR_THRESHOLD),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cache_size: DEFAULT_MAX_CACHE_SIZE,
            cache_ttl: DEFAULT_TTL_SECS,
            popular_threshold: DEFAULT_POPULAR_THRESHOLD,
            server_port: 3000,
            cleanup_interval: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_cache_size, 100);
        assert_eq!(config.cache_ttl, 600);
        assert_eq!(config.popular_threshold, 3);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 300);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_CACHE_SIZE");
        env::remove_var("CACHE_TTL");
        env::remove_var("POPULAR_THRESHOLD");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.max_cache_size, 100);
        assert_eq!(config.cache_ttl, 600);
        assert_eq!(config.popular_threshold, 3);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 300);
    }
}
