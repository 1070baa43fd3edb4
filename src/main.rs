use armory_search::catalog::handlers::{handle_reload, handle_status};
use armory_search::catalog::service::Catalog;
use armory_search::query::handlers::{handle_lookup, handle_search};
use armory_search::query::service::QueryService;
use armory_search::store::client::StoreConfig;

use anyhow::Context;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Configuration:
    let store_uri = std::env::var("STORE_URI").context("STORE_URI is not set")?;
    let store_db = std::env::var("STORE_DB").context("STORE_DB is not set")?;
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .context("PORT must be a port number")?;

    let config = StoreConfig {
        uri: store_uri,
        database: store_db,
    };

    // 2. Catalog and query service:
    let catalog = Catalog::new(config);
    let service = QueryService::new(catalog.clone());

    // 3. Initial load, in the background so the server comes up immediately.
    //    Queries arriving before it commits wait inside the query service.
    let initial = catalog.clone();
    tokio::spawn(async move {
        if let Err(e) = initial.reload().await {
            tracing::error!("Initial reload failed: {:#}", e);
        }
    });

    // 4. HTTP router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/lookup", post(handle_lookup))
        .route("/reload", get(handle_reload))
        .route("/status", get(handle_status))
        .layer(Extension(catalog))
        .layer(Extension(service));

    // 5. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
