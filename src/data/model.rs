use serde::{Deserialize, Serialize};

/// A crafting profession and the item categories it produces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub name: String,
    pub category_id: Vec<u32>,
}

/// A named effect with its value range, after normalization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Effect {
    pub name: String,
    pub value_low: i64,
    pub value_high: i64,
}

/// A fully resolved recipe. Ingredients with their own recipe carry it in `sub_recipe`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    pub job: String,
    pub ingredients: Vec<IngredientRef>,
}

/// One line of a recipe: an ingredient and how many are needed per crafted unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IngredientRef {
    pub name: String,
    pub quantity: u32,
    pub has_recipe: bool,
    #[serde(default)]
    pub is_secret_recipe: bool,
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_recipe: Option<Recipe>,
}

/// A craftable equipment item with its resolved recipe tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub level: u32,
    pub img: String,
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
}

/// Everything extracted for one job, in display order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobExtraction {
    pub name: String,
    pub items: Vec<Item>,
}

impl Recipe {
    /// Total number of ingredient lines in this tree, sub-recipes included.
    pub fn line_count(&self) -> usize {
        self.ingredients
            .iter()
            .map(|ingredient| {
                1 + ingredient
                    .sub_recipe
                    .as_ref()
                    .map_or(0, Recipe::line_count)
            })
            .sum()
    }
}
