use crate::schema::table::Category;
use crate::schema::types::Entity;
use crate::store::client::StoreClient;

use anyhow::Result;
use futures::future::try_join_all;

/// Records pulled per store round-trip. Bounds peak memory during a fetch
/// cycle regardless of collection size.
pub const PAGE_SIZE: u64 = 1000;

/// Retrieves one category completely and normalizes it.
///
/// The record count is taken up front and the resulting `ceil(count / page_size)`
/// pages are fetched as one concurrent set, each requesting only the projection
/// fields the schema table declares. Any page failure fails the whole call, so a
/// partially fetched category never reaches a snapshot.
pub async fn fetch_category(
    client: &StoreClient,
    category: &Category,
    page_size: u64,
) -> Result<Vec<Entity>> {
    let count = client.count(category.collection).await?;
    let pages = count.div_ceil(page_size);

    let fetches = (0..pages).map(|page| {
        client.find_page(
            category.collection,
            category.projection,
            page_size,
            page * page_size,
        )
    });
    let batches = try_join_all(fetches).await?;

    let mut entities = Vec::with_capacity(count as usize);
    for record in batches.into_iter().flatten() {
        match category.normalize(&record) {
            Some(entity) => entities.push(entity),
            None => tracing::warn!("Dropping {} record without id or name", category.collection),
        }
    }

    Ok(entities)
}
