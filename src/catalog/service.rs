use super::fetcher::{PAGE_SIZE, fetch_category};
use super::snapshot::Snapshot;
use crate::schema::table::CATEGORIES;
use crate::store::client::{StoreClient, StoreConfig};

use anyhow::{Context, Result};
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::time::Instant;

/// Owner of the committed snapshot and of the reload lifecycle.
///
/// Starts with no snapshot (uninitialized); the first successful [`reload`]
/// makes it ready. Readers only ever touch committed snapshots, never the
/// store, so the store handle stays exclusive to the cycle that opened it.
///
/// [`reload`]: Catalog::reload
pub struct Catalog {
    config: StoreConfig,
    snapshot: ArcSwapOption<Snapshot>,
}

impl Catalog {
    pub fn new(config: StoreConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            snapshot: ArcSwapOption::const_empty(),
        })
    }

    /// The latest committed snapshot, if any reload has ever completed.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.load_full()
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot.load().is_some()
    }

    /// Runs one full fetch cycle and commits the result.
    ///
    /// Open connection → fetch every category → build index → commit → close.
    /// All fetches complete before the build, and the build completes before the
    /// commit. Overlapping calls race freely and the last commit wins; each
    /// commit is internally consistent because the pair is assembled before the
    /// single atomic swap. Any error aborts the cycle before commit, leaving the
    /// previous snapshot (if any) live.
    pub async fn reload(&self) -> Result<usize> {
        let started = Instant::now();

        let client = StoreClient::connect(&self.config)
            .await
            .context("opening store connection")?;

        let mut entities = Vec::new();
        for category in CATEGORIES {
            let batch = fetch_category(&client, category, PAGE_SIZE)
                .await
                .with_context(|| format!("fetching {}", category.collection))?;
            tracing::info!("Fetched {} {} records", batch.len(), category.collection);
            entities.extend(batch);
        }

        let snapshot = Snapshot::build(entities);
        let total = snapshot.entities.len();
        self.commit(snapshot);

        client.close();

        tracing::info!(
            "Catalog reloaded: {} entities in {:?}",
            total,
            started.elapsed()
        );
        Ok(total)
    }

    /// Replaces the committed snapshot in one atomic reference swap.
    pub(crate) fn commit(&self, snapshot: Snapshot) {
        self.snapshot.store(Some(Arc::new(snapshot)));
    }
}
