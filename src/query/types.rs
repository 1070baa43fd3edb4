use crate::schema::types::{EntityId, EntityType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Lookup body: requested ids per type. A `BTreeMap` keeps the flattened
/// response order deterministic across types.
pub type LookupRequest = BTreeMap<EntityType, Vec<EntityId>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
