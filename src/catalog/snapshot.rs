use crate::schema::types::Entity;
use crate::search::engine::SearchIndex;

/// An immutable (entity list, search index) pair produced by one reload cycle.
///
/// The index is built from exactly the entities stored alongside it; the pair
/// is committed and discarded as a unit, never mixed across cycles. Hit
/// positions returned by the index refer to `entities`.
pub struct Snapshot {
    pub entities: Vec<Entity>,
    pub index: SearchIndex,
}

impl Snapshot {
    pub fn build(entities: Vec<Entity>) -> Self {
        let index = SearchIndex::build(&entities);
        Self { entities, index }
    }
}
