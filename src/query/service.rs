use crate::catalog::service::Catalog;
use crate::catalog::snapshot::Snapshot;
use crate::schema::types::{Entity, EntityId, EntityType};

use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// No snapshot was committed within the wait bound. Distinguishable from
    /// client-input errors; surfaced as 503 at the HTTP boundary.
    #[error("index not ready after {0:?}")]
    NotReady(Duration),
}

/// Retry cadence for callers that arrive before the first commit.
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub deadline: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(1600),
            deadline: Duration::from_secs(30),
        }
    }
}

/// Answers queries against the latest committed snapshot.
pub struct QueryService {
    catalog: Arc<Catalog>,
    wait: WaitPolicy,
}

impl QueryService {
    pub fn new(catalog: Arc<Catalog>) -> Arc<Self> {
        Self::with_policy(catalog, WaitPolicy::default())
    }

    pub fn with_policy(catalog: Arc<Catalog>, wait: WaitPolicy) -> Arc<Self> {
        Arc::new(Self { catalog, wait })
    }

    /// Ranked fuzzy matches for a query string.
    pub async fn search(&self, query: &str) -> Result<Vec<Entity>, QueryError> {
        let snapshot = self.snapshot().await?;

        Ok(snapshot
            .index
            .query(query)
            .into_iter()
            .map(|hit| snapshot.entities[hit.position].clone())
            .collect())
    }

    /// Entities of the given type whose id is in `ids`, in the order they
    /// appear in the committed entity list.
    pub async fn lookup(
        &self,
        kind: EntityType,
        ids: &[EntityId],
    ) -> Result<Vec<Entity>, QueryError> {
        let snapshot = self.snapshot().await?;

        Ok(snapshot
            .entities
            .iter()
            .filter(|entity| entity.kind == kind && ids.contains(&entity.id))
            .cloned()
            .collect())
    }

    /// Resolves one snapshot for the duration of a call.
    ///
    /// While the catalog has never committed, retries with exponential backoff
    /// up to the configured deadline, then fails with [`QueryError::NotReady`].
    async fn snapshot(&self) -> Result<Arc<Snapshot>, QueryError> {
        if let Some(snapshot) = self.catalog.current() {
            return Ok(snapshot);
        }

        let started = Instant::now();
        let mut delay = self.wait.initial_delay;

        loop {
            if started.elapsed() >= self.wait.deadline {
                return Err(QueryError::NotReady(self.wait.deadline));
            }

            tracing::debug!("Index not ready, retrying in {:?}", delay);
            tokio::time::sleep(delay).await;

            if let Some(snapshot) = self.catalog.current() {
                return Ok(snapshot);
            }

            delay = (delay * 2).min(self.wait.max_delay);
        }
    }
}
