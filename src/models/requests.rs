//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Maximum allowed search-term length in characters
pub const MAX_TERM_LENGTH: usize = 256;

/// Request body for storing a search result (PUT /search)
///
/// # Fields
/// - `term`: The search term the result belongs to
/// - `groups`: The group names the directory returned for the term
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSearchRequest {
    /// The search term
    pub term: String,
    /// Group names returned by the directory lookup (may be empty)
    #[serde(default)]
    pub groups: Vec<String>,
}

impl StoreSearchRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.term.trim().is_empty() {
            return Some("Search term cannot be empty".to_string());
        }
        if self.term.len() > MAX_TERM_LENGTH {
            return Some(format!(
                "Search term exceeds maximum length of {} characters",
                MAX_TERM_LENGTH
            ));
        }
        None
    }
}

/// Query parameters for the popular-groups endpoint (GET /popular)
#[derive(Debug, Clone, Deserialize)]
pub struct PopularParams {
    /// Maximum number of popular terms to union (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}
