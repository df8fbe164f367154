use crate::data::Recipe;
use dashmap::DashMap;
use std::sync::Arc;

/// Process-lifetime memo of resolved recipe trees, keyed by item id.
///
/// Entries are never invalidated. Two workers populating the same id race
/// harmlessly: the first stored tree wins and both callers receive it.
#[derive(Debug, Default)]
pub struct RecipeCache {
    entries: DashMap<u64, Arc<Recipe>>,
}

impl RecipeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: u64) -> Option<Arc<Recipe>> {
        self.entries.get(&item_id).map(|entry| Arc::clone(&entry))
    }

    /// Stores `recipe` unless the id is already cached, and returns the stored tree.
    pub fn insert_if_absent(&self, item_id: u64, recipe: Recipe) -> Arc<Recipe> {
        Arc::clone(&self.entries.entry(item_id).or_insert_with(|| Arc::new(recipe)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
