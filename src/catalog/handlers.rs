use super::service::Catalog;
use super::types::{ReloadResponse, StatusResponse};

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// Triggers a reload cycle in the background and acknowledges immediately.
///
/// Failures stay inside the spawned cycle: they are logged and the previous
/// snapshot keeps serving. Nothing store-related ever reaches this response.
pub async fn handle_reload(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> (StatusCode, Json<ReloadResponse>) {
    tokio::spawn(async move {
        match catalog.reload().await {
            Ok(total) => tracing::info!("Reload finished with {} entities", total),
            Err(e) => tracing::error!("Reload failed: {:#}", e),
        }
    });

    (
        StatusCode::OK,
        Json(ReloadResponse {
            status: "reloading".to_string(),
        }),
    )
}

pub async fn handle_status(Extension(catalog): Extension<Arc<Catalog>>) -> Json<StatusResponse> {
    let entities = catalog
        .current()
        .map(|snapshot| snapshot.entities.len())
        .unwrap_or(0);

    Json(StatusResponse {
        ready: catalog.is_ready(),
        entities,
    })
}
