use super::RecipeCache;
use crate::catalog::CatalogSource;
use crate::data::{IngredientRef, Recipe};
use crate::error::ResolveError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Expands an item's recipe into a full tree, resolving every ingredient that
/// has its own recipe.
pub struct RecipeResolver<'a, S: CatalogSource + ?Sized> {
    source: &'a S,
    cache: RecipeCache,
}

impl<'a, S: CatalogSource + ?Sized> RecipeResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self::with_cache(source, RecipeCache::new())
    }

    pub fn with_cache(source: &'a S, cache: RecipeCache) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &RecipeCache {
        &self.cache
    }

    /// Resolves the recipe tree of `item_id`.
    ///
    /// Results are memoized per id. A recipe that (transitively) requires
    /// itself fails with [`ResolveError::CycleDetected`].
    pub fn resolve(&self, item_id: u64) -> Result<Arc<Recipe>, ResolveError> {
        let mut path = Vec::new();
        self.resolve_on_path(item_id, &mut path)
    }

    fn resolve_on_path(
        &self,
        item_id: u64,
        path: &mut Vec<u64>,
    ) -> Result<Arc<Recipe>, ResolveError> {
        if let Some(cached) = self.cache.get(item_id) {
            return Ok(cached);
        }
        if path.contains(&item_id) {
            let mut cycle = path.clone();
            cycle.push(item_id);
            return Err(ResolveError::CycleDetected { path: cycle });
        }

        path.push(item_id);
        let built = self.build_recipe(item_id, path);
        path.pop();

        Ok(self.cache.insert_if_absent(item_id, built?))
    }

    fn build_recipe(&self, item_id: u64, path: &mut Vec<u64>) -> Result<Recipe, ResolveError> {
        let record = self.source.recipe(item_id)?;
        if record.ingredient_ids.len() != record.quantities.len() {
            warn!(
                item_id,
                ids = record.ingredient_ids.len(),
                quantities = record.quantities.len(),
                "Recipe lists differ in length, extra entries are ignored"
            );
        }

        let mut ingredients = Vec::with_capacity(record.ingredient_ids.len());
        for (&ingredient_id, &quantity) in record.ingredient_ids.iter().zip(&record.quantities) {
            let details =
                record
                    .ingredient(ingredient_id)
                    .ok_or(ResolveError::IngredientNotFound {
                        item_id,
                        ingredient_id,
                    })?;

            let sub_recipe = if details.has_recipe {
                Some(Recipe::clone(&*self.resolve_on_path(ingredient_id, path)?))
            } else {
                None
            };

            ingredients.push(IngredientRef {
                name: details.name.fr.clone(),
                quantity,
                has_recipe: details.has_recipe,
                is_secret_recipe: details.is_secret_recipe,
                img: details.img.clone(),
                sub_recipe,
            });
        }

        debug!(item_id, job = %record.job.name.fr, lines = ingredients.len(), "Resolved recipe");
        Ok(Recipe {
            job: record.job.name.fr,
            ingredients,
        })
    }
}
