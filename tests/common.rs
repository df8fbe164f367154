//! Common test utilities: an in-memory catalog and builders for recipe trees.
use ahash::AHashMap;
use craftledger::catalog::{
    CatalogSource, IngredientRecord, ItemEffectRecord, ItemRecord, ItemsPage, JobRecord,
    LevelRange, PAGE_SIZE, RecipeRecord,
};
use craftledger::prelude::*;
use std::result::Result;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A catalog served from memory. Unknown ids answer with a 404 status.
#[derive(Default)]
pub struct MockCatalog {
    pub categories: AHashMap<u32, Vec<ItemRecord>>,
    pub effects: AHashMap<u64, String>,
    pub recipes: AHashMap<u64, RecipeRecord>,
    pub recipe_calls: AtomicUsize,
    pub effect_calls: AtomicUsize,
    pub page_requests: Mutex<Vec<(u32, u32)>>,
}

#[allow(dead_code)]
impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category_id: u32, items: Vec<ItemRecord>) -> Self {
        self.categories.insert(category_id, items);
        self
    }

    pub fn with_effect(mut self, effect_id: u64, description: &str) -> Self {
        self.effects.insert(effect_id, description.to_string());
        self
    }

    pub fn with_recipe(mut self, item_id: u64, recipe: RecipeRecord) -> Self {
        self.recipes.insert(item_id, recipe);
        self
    }

    pub fn recipe_calls(&self) -> usize {
        self.recipe_calls.load(Ordering::SeqCst)
    }

    pub fn effect_calls(&self) -> usize {
        self.effect_calls.load(Ordering::SeqCst)
    }

    pub fn skips_requested(&self, category_id: u32) -> Vec<u32> {
        let mut skips: Vec<u32> = self
            .page_requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(category, _)| *category == category_id)
            .map(|(_, skip)| *skip)
            .collect();
        skips.sort_unstable();
        skips
    }

    fn not_found(url: String) -> FetchError {
        FetchError::Status { url, status: 404 }
    }
}

impl CatalogSource for MockCatalog {
    fn items_page(
        &self,
        category_id: u32,
        levels: LevelRange,
        skip: u32,
    ) -> Result<ItemsPage, FetchError> {
        self.page_requests
            .lock()
            .unwrap()
            .push((category_id, skip));
        let items = self
            .categories
            .get(&category_id)
            .ok_or_else(|| Self::not_found(format!("mock://items?category={}", category_id)))?;

        let mut matching: Vec<ItemRecord> = items
            .iter()
            .filter(|item| item.level >= levels.min() && item.level <= levels.max())
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.level.cmp(&a.level));

        let total = matching.len() as u32;
        let data = matching
            .into_iter()
            .skip(skip as usize)
            .take(PAGE_SIZE as usize)
            .collect();
        Ok(ItemsPage { total, data })
    }

    fn effect_description(&self, effect_id: u64) -> Result<String, FetchError> {
        self.effect_calls.fetch_add(1, Ordering::SeqCst);
        self.effects
            .get(&effect_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("mock://effects/{}", effect_id)))
    }

    fn recipe(&self, item_id: u64) -> Result<RecipeRecord, FetchError> {
        self.recipe_calls.fetch_add(1, Ordering::SeqCst);
        self.recipes
            .get(&item_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("mock://recipes/{}", item_id)))
    }
}

// --- Wire record builders ---

/// A destructible item with a public recipe and the given `(effect_id, from, to)` lines.
#[allow(dead_code)]
pub fn item_record(id: u64, name: &str, level: u32, effects: &[(u64, i64, i64)]) -> ItemRecord {
    ItemRecord {
        id,
        name: name.into(),
        level,
        img: format!("img/{}.png", id),
        effects: effects
            .iter()
            .map(|&(effect_id, from, to)| ItemEffectRecord {
                effect_id,
                from,
                to,
            })
            .collect(),
        has_recipe: true,
        is_destructible: true,
        is_secret_recipe: false,
    }
}

#[allow(dead_code)]
pub fn ingredient_record(id: u64, name: &str, has_recipe: bool) -> IngredientRecord {
    IngredientRecord {
        id,
        name: name.into(),
        img: format!("img/{}.png", id),
        has_recipe,
        is_secret_recipe: false,
    }
}

/// A recipe record whose ingredient list contains exactly the referenced ingredients.
#[allow(dead_code)]
pub fn recipe_record(job: &str, lines: &[(IngredientRecord, u32)]) -> RecipeRecord {
    RecipeRecord {
        job: JobRecord { name: job.into() },
        ingredient_ids: lines.iter().map(|(ingredient, _)| ingredient.id).collect(),
        quantities: lines.iter().map(|(_, quantity)| *quantity).collect(),
        ingredients: lines.iter().map(|(ingredient, _)| ingredient.clone()).collect(),
    }
}

// --- Model builders ---

#[allow(dead_code)]
pub fn raw(name: &str, quantity: u32) -> IngredientRef {
    IngredientRef {
        name: name.to_string(),
        quantity,
        has_recipe: false,
        is_secret_recipe: false,
        img: format!("img/{}.png", name),
        sub_recipe: None,
    }
}

#[allow(dead_code)]
pub fn crafted(name: &str, quantity: u32, job: &str, ingredients: Vec<IngredientRef>) -> IngredientRef {
    IngredientRef {
        name: name.to_string(),
        quantity,
        has_recipe: true,
        is_secret_recipe: false,
        img: format!("img/{}.png", name),
        sub_recipe: Some(recipe(job, ingredients)),
    }
}

#[allow(dead_code)]
pub fn recipe(job: &str, ingredients: Vec<IngredientRef>) -> Recipe {
    Recipe {
        job: job.to_string(),
        ingredients,
    }
}

#[allow(dead_code)]
pub fn item(name: &str, level: u32, recipe: Option<Recipe>) -> Item {
    Item {
        name: name.to_string(),
        level,
        img: format!("img/{}.png", name),
        effects: vec![Effect {
            name: "Vitalité".to_string(),
            value_low: 10,
            value_high: 20,
        }],
        recipe,
    }
}

#[allow(dead_code)]
pub fn job(name: &str, items: Vec<Item>) -> JobExtraction {
    JobExtraction {
        name: name.to_string(),
        items,
    }
}

/// Sword (Smith) needs 2 Iron Ingot and 1 Hilt; Hilt needs 3 Iron Ingot and is
/// itself listed as Smith equipment (without its own tree at top level).
#[allow(dead_code)]
pub fn create_sword_forest() -> Vec<JobExtraction> {
    let sword = item(
        "Sword",
        50,
        Some(recipe(
            "Smith",
            vec![
                raw("Iron Ingot", 2),
                crafted("Hilt", 1, "Smith", vec![raw("Iron Ingot", 3)]),
            ],
        )),
    );
    let hilt = item("Hilt", 20, None);
    vec![job("Smith", vec![sword, hilt])]
}

/// Reverses every ingredient list in the forest, at every depth.
#[allow(dead_code)]
pub fn reverse_ingredient_order(forest: &[JobExtraction]) -> Vec<JobExtraction> {
    fn reverse_recipe(recipe: &mut Recipe) {
        recipe.ingredients.reverse();
        for ingredient in &mut recipe.ingredients {
            if let Some(sub) = ingredient.sub_recipe.as_mut() {
                reverse_recipe(sub);
            }
        }
    }

    let mut reversed = forest.to_vec();
    for job in &mut reversed {
        job.items.reverse();
        for item in &mut job.items {
            if let Some(recipe) = item.recipe.as_mut() {
                reverse_recipe(recipe);
            }
        }
    }
    reversed
}
