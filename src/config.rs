use crate::catalog::DEFAULT_API_URL;
use crate::ledger::LedgerPaths;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data/json";

pub const JOBS_FILE: &str = "jobs.json";
pub const EFFECTS_FILE: &str = "effects.json";
pub const RESULTS_FILE: &str = "results.json";
pub const EQUIPMENTS_FILE: &str = "equipments.json";
pub const INGREDIENTS_PRICE_FILE: &str = "ingredients_price.json";
pub const RECIPES_PRICE_FILE: &str = "recipes_price.json";

/// Runtime settings: where the JSON files live and which API to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn new(data_dir: impl Into<PathBuf>, api_url: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            api_url: api_url.into(),
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn jobs_path(&self) -> PathBuf {
        self.file(JOBS_FILE)
    }

    pub fn effects_path(&self) -> PathBuf {
        self.file(EFFECTS_FILE)
    }

    pub fn results_path(&self) -> PathBuf {
        self.file(RESULTS_FILE)
    }

    pub fn ledger_paths(&self) -> LedgerPaths {
        LedgerPaths {
            equipments: self.file(EQUIPMENTS_FILE),
            ingredients: self.file(INGREDIENTS_PRICE_FILE),
            recipes: self.file(RECIPES_PRICE_FILE),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
