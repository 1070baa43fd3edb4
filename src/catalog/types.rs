use serde::{Deserialize, Serialize};

/// Acknowledgement for a reload trigger. Returned before the cycle finishes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub status: String,
}

/// Readiness and size of the committed snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub entities: usize,
}
