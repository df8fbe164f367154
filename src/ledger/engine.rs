use super::{EquipmentEntry, IngredientEntry, LedgerSet, RecipeEntry, UNPRICED};
use crate::data::{IngredientRef, JobExtraction, Recipe};
use std::collections::btree_map::Entry;
use tracing::{info, warn};

/// Builds a [`LedgerSet`] from a forest of resolved recipe trees.
///
/// Equipment must be seeded before any tree is walked: whether a crafted
/// ingredient counts as equipment depends only on the seeded entries.
#[derive(Debug, Default)]
pub struct LedgerAggregator {
    ledgers: LedgerSet,
}

impl LedgerAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one equipment entry per top-level item, with a stock quantity of 1.
    pub fn seed(&mut self, forest: &[JobExtraction]) {
        for job in forest {
            let items = self.ledgers.equipments.entry(job.name.clone()).or_default();
            for item in &job.items {
                items.insert(item.name.clone(), EquipmentEntry::new(&item.img));
            }
        }
    }

    /// Walks the recipe of every top-level item.
    pub fn walk(&mut self, forest: &[JobExtraction]) {
        for item in forest.iter().flat_map(|job| &job.items) {
            match &item.recipe {
                Some(recipe) => self.process_ingredients(&recipe.ingredients),
                None => warn!(item = %item.name, "Item has no recipe, nothing to aggregate"),
            }
        }
    }

    pub fn finish(self) -> LedgerSet {
        self.ledgers
    }

    /// Depth-first over a recipe's ingredient list.
    fn process_ingredients(&mut self, ingredients: &[IngredientRef]) {
        for ingredient in ingredients {
            match &ingredient.sub_recipe {
                Some(recipe) => self.record_crafted(ingredient, recipe),
                None => {
                    if ingredient.has_recipe {
                        warn!(
                            ingredient = %ingredient.name,
                            "Ingredient is marked craftable but carries no recipe, counted as raw"
                        );
                    }
                    self.record_raw(ingredient);
                }
            }
        }
    }

    fn record_raw(&mut self, ingredient: &IngredientRef) {
        match self.ledgers.ingredients.entry(ingredient.name.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().quantity += ingredient.quantity,
            Entry::Vacant(entry) => {
                entry.insert(IngredientEntry {
                    price: UNPRICED,
                    quantity: ingredient.quantity,
                    img: ingredient.img.clone(),
                });
            }
        }
    }

    /// Records a crafted ingredient after its own ingredients.
    ///
    /// An ingredient that is also seeded equipment under the recipe's job gets
    /// its equipment demand raised, and one extra crafted unit on the first
    /// sighting for the stocked copy.
    fn record_crafted(&mut self, ingredient: &IngredientRef, recipe: &Recipe) {
        self.process_ingredients(&recipe.ingredients);

        let equipment = self
            .ledgers
            .equipments
            .get_mut(&recipe.job)
            .and_then(|items| items.get_mut(&ingredient.name));
        let is_equipment = equipment.is_some();
        if let Some(entry) = equipment {
            entry.quantity += ingredient.quantity;
        }

        match self.ledgers.recipes.entry(ingredient.name.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().quantity += ingredient.quantity,
            Entry::Vacant(entry) => {
                let stock = u32::from(is_equipment);
                entry.insert(RecipeEntry {
                    price: UNPRICED,
                    job: recipe.job.clone(),
                    quantity: ingredient.quantity + stock,
                    is_equipment,
                    img: ingredient.img.clone(),
                });
            }
        }
    }
}

/// Builds the equipment, ingredient and recipe ledgers of a whole extraction.
///
/// Quantities accumulate over every occurrence of a name across the forest.
/// The result depends only on the forest's contents, not on ingredient order.
pub fn aggregate(forest: &[JobExtraction]) -> LedgerSet {
    let mut aggregator = LedgerAggregator::new();
    aggregator.seed(forest);
    aggregator.walk(forest);
    let ledgers = aggregator.finish();

    info!(
        equipments = ledgers.equipment_count(),
        ingredients = ledgers.ingredients.len(),
        recipes = ledgers.recipes.len(),
        "Built ledgers"
    );
    ledgers
}
