//! Pricing ledgers built from the extracted recipe trees.
//!
//! Three ledgers are produced, each keyed by item name:
//!
//! * **equipments**: the craftable items themselves, grouped by job.
//! * **ingredients**: raw materials that have no recipe.
//! * **recipes**: intermediate crafted ingredients.
//!
//! Prices start at [`UNPRICED`] and are filled in by a later pricing pass.

use crate::data::store::{read_json, write_json};
use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

mod engine;

pub use engine::{LedgerAggregator, aggregate};

/// Sentinel for a price (or breakage rate) that has not been set yet.
pub const UNPRICED: i64 = -1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EquipmentEntry {
    pub price: i64,
    pub breakage_rate: i64,
    pub quantity: u32,
    pub img: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IngredientEntry {
    pub price: i64,
    pub quantity: u32,
    pub img: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeEntry {
    pub price: i64,
    pub job: String,
    pub quantity: u32,
    pub is_equipment: bool,
    pub img: String,
}

/// `job -> item name -> entry`
pub type EquipmentLedger = BTreeMap<String, BTreeMap<String, EquipmentEntry>>;
/// `ingredient name -> entry`
pub type IngredientLedger = BTreeMap<String, IngredientEntry>;
/// `recipe name -> entry`
pub type RecipeLedger = BTreeMap<String, RecipeEntry>;

impl EquipmentEntry {
    pub fn new(img: &str) -> Self {
        Self {
            price: UNPRICED,
            breakage_rate: UNPRICED,
            quantity: 1,
            img: img.to_string(),
        }
    }
}

/// The three ledgers of one extraction run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSet {
    pub equipments: EquipmentLedger,
    pub ingredients: IngredientLedger,
    pub recipes: RecipeLedger,
}

/// Where each ledger is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    pub equipments: PathBuf,
    pub ingredients: PathBuf,
    pub recipes: PathBuf,
}

impl LedgerSet {
    /// Looks up an equipment entry by job and name.
    pub fn equipment(&self, job: &str, name: &str) -> Option<&EquipmentEntry> {
        self.equipments.get(job).and_then(|items| items.get(name))
    }

    pub fn equipment_count(&self) -> usize {
        self.equipments.values().map(|items| items.len()).sum()
    }

    /// Number of entries across all ledgers whose price is still [`UNPRICED`].
    pub fn unpriced_count(&self) -> usize {
        let equipments = self
            .equipments
            .values()
            .flat_map(|items| items.values())
            .filter(|e| e.price == UNPRICED)
            .count();
        let ingredients = self
            .ingredients
            .values()
            .filter(|e| e.price == UNPRICED)
            .count();
        let recipes = self
            .recipes
            .values()
            .filter(|e| e.price == UNPRICED)
            .count();
        equipments + ingredients + recipes
    }

    /// Writes each ledger to its own pretty-printed JSON file.
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), FileError> {
        write_json(&paths.equipments, &self.equipments)?;
        write_json(&paths.ingredients, &self.ingredients)?;
        write_json(&paths.recipes, &self.recipes)
    }

    /// Loads ledgers previously written by [`LedgerSet::save`].
    pub fn load(paths: &LedgerPaths) -> Result<Self, FileError> {
        Ok(Self {
            equipments: read_json(&paths.equipments)?,
            ingredients: read_json(&paths.ingredients)?,
            recipes: read_json(&paths.recipes)?,
        })
    }
}
