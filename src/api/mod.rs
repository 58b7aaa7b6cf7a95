//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /search` - Store a directory search result
//! - `GET /search/:term` - Retrieve a cached result by term
//! - `GET /popular` - Union of groups behind the most-used terms
//! - `GET /groups/:name` - Probe whether a group is in a fresh result
//! - `GET /stats` - Get cache statistics
//! - `DELETE /cache` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
