use super::protocol::{CountResponse, ENDPOINT_COUNT, ENDPOINT_FIND, ENDPOINT_PING};

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_ATTEMPTS: usize = 3;

/// Errors at the store boundary. `Connect` aborts a cycle before any fetch;
/// the other variants abort it mid-fetch. Neither is ever surfaced to readers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("store request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("store returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Connection parameters, taken from the environment at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
}

/// A live store handle, exclusively owned by one reload cycle.
pub struct StoreClient {
    http: reqwest::Client,
    base: String,
}

impl StoreClient {
    /// Opens a handle and verifies the store answers before any fetch starts.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::new();
        let base = format!("{}/{}", config.uri.trim_end_matches('/'), config.database);

        let url = format!("{}{}", base, ENDPOINT_PING);
        let response = get_with_retry(&http, &url, REQUEST_TIMEOUT, RETRY_ATTEMPTS)
            .await
            .map_err(StoreError::Connect)?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                url,
            });
        }

        tracing::debug!("Connected to document store at {}", base);
        Ok(Self { http, base })
    }

    /// Total record count of a collection, used to size the page set up front.
    pub async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let url = format!("{}/{}{}", self.base, collection, ENDPOINT_COUNT);

        let response = get_with_retry(&self.http, &url, REQUEST_TIMEOUT, RETRY_ATTEMPTS)
            .await
            .map_err(StoreError::Request)?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                url,
            });
        }

        let body: CountResponse = response.json().await.map_err(StoreError::Request)?;
        Ok(body.count)
    }

    /// One page of a collection, restricted to the given projection fields.
    pub async fn find_page(
        &self,
        collection: &str,
        fields: &[&str],
        limit: u64,
        skip: u64,
    ) -> Result<Vec<Value>, StoreError> {
        let url = format!(
            "{}/{}{}?fields={}&limit={}&skip={}",
            self.base,
            collection,
            ENDPOINT_FIND,
            fields.join(","),
            limit,
            skip
        );

        let response = get_with_retry(&self.http, &url, REQUEST_TIMEOUT, RETRY_ATTEMPTS)
            .await
            .map_err(StoreError::Request)?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                url,
            });
        }

        response.json().await.map_err(StoreError::Request)
    }

    /// Releases the handle. Pooled connections are torn down on drop.
    pub fn close(self) {
        tracing::debug!("Store connection closed");
    }
}

async fn get_with_retry(
    http: &reqwest::Client,
    url: &str,
    timeout: Duration,
    attempts: usize,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut delay_ms = 150u64;
    let mut attempt = 0;

    loop {
        match http.get(url).timeout(timeout).send().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                attempt += 1;
                if attempt >= attempts {
                    return Err(e);
                }
                // Simple jitter to prevent thundering herd
                let jitter = rand::random::<u64>() % 50;
                tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                delay_ms = (delay_ms * 2).min(1200);
            }
        }
    }
}
