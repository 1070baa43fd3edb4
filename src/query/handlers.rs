use super::service::{QueryError, QueryService};
use super::types::{ErrorResponse, LookupRequest, SearchParams};
use crate::schema::types::Entity;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<QueryService>>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    let query = params.query.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Err(bad_request("Missing query"));
    }

    let mut results = service.search(query).await.map_err(not_ready)?;

    if let Some(offset) = params.offset {
        results = results.into_iter().skip(offset).collect();
    }
    if let Some(limit) = params.limit {
        results.truncate(limit);
    }

    Ok(Json(results))
}

pub async fn handle_lookup(
    Extension(service): Extension<Arc<QueryService>>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    if request.is_empty() {
        return Err(bad_request("Missing lookup types"));
    }

    let mut results = Vec::new();
    for (kind, ids) in &request {
        let matches = service.lookup(*kind, ids).await.map_err(not_ready)?;
        results.extend(matches);
    }

    Ok(Json(results))
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn not_ready(err: QueryError) -> ApiError {
    tracing::warn!("Rejecting query: {}", err);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
