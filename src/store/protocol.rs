//! Store Wire Protocol
//!
//! Endpoints and DTOs of the document store's HTTP API. All paths are relative
//! to `{uri}/{database}`; record payloads are plain JSON objects.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Reachability probe, issued once when a connection is opened.
pub const ENDPOINT_PING: &str = "/ping";
/// Record count for a collection, appended to `/{collection}`.
pub const ENDPOINT_COUNT: &str = "/count";
/// Projected, paginated retrieval for a collection, appended to `/{collection}`.
pub const ENDPOINT_FIND: &str = "/find";

// --- Data Transfer Objects ---

/// Response of the count endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
