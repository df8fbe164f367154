//! Wire records returned by the remote API.
//!
//! These structs match the API's JSON shape and are only used to build the
//! crate's own model (see [`crate::data`]).

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LocalizedText {
    #[serde(default)]
    pub fr: String,
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self {
            fr: text.to_string(),
        }
    }
}

/// One page of an item listing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemsPage {
    pub total: u32,
    #[serde(default)]
    pub data: Vec<ItemRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemRecord {
    pub id: u64,
    pub name: LocalizedText,
    pub level: u32,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub effects: Vec<ItemEffectRecord>,
    #[serde(default, alias = "hasRecipe")]
    pub has_recipe: bool,
    #[serde(default, alias = "isDestructible")]
    pub is_destructible: bool,
    #[serde(default, alias = "secretRecipe", alias = "isSecretRecipe")]
    pub is_secret_recipe: bool,
}

/// A raw effect line on an item: an effect id and its bounds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ItemEffectRecord {
    #[serde(alias = "effectId")]
    pub effect_id: u64,
    pub from: i64,
    #[serde(default)]
    pub to: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EffectRecord {
    pub description: LocalizedText,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobRecord {
    pub name: LocalizedText,
}

/// The recipe of one item. `ingredient_ids` and `quantities` are parallel lists;
/// `ingredients` holds the details of each referenced item.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecipeRecord {
    pub job: JobRecord,
    #[serde(alias = "ingredientIds")]
    pub ingredient_ids: Vec<u64>,
    pub quantities: Vec<u32>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IngredientRecord {
    pub id: u64,
    pub name: LocalizedText,
    #[serde(default)]
    pub img: String,
    #[serde(default, alias = "hasRecipe")]
    pub has_recipe: bool,
    #[serde(default, alias = "secretRecipe", alias = "isSecretRecipe")]
    pub is_secret_recipe: bool,
}

impl RecipeRecord {
    /// Finds the details of an ingredient by id.
    pub fn ingredient(&self, id: u64) -> Option<&IngredientRecord> {
        self.ingredients.iter().find(|i| i.id == id)
    }
}
