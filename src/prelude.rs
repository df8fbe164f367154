//! Prelude module for convenient imports
//!
//! Re-exports the types needed to run an extraction and build ledgers.
//!
//! # Example
//!
//! ```rust,no_run
//! use craftledger::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let settings = Settings::default();
//! let forest: Vec<JobExtraction> = read_json(&settings.results_path())?;
//! let ledgers = aggregate(&forest);
//! ledgers.save(&settings.ledger_paths())?;
//! # Ok(())
//! # }
//! ```

// Extraction
pub use crate::catalog::{CatalogSource, HttpCatalog, LevelRange};
pub use crate::orchestrator::{Extractor, JobSelection};
pub use crate::recipe::{RecipeCache, RecipeResolver};

// Data model and files
pub use crate::config::Settings;
pub use crate::data::store::{file_exists, read_json, write_json};
pub use crate::data::{Effect, IngredientRef, Item, JobConfig, JobExtraction, Recipe};

// Ledgers
pub use crate::ledger::{LedgerPaths, LedgerSet, UNPRICED, aggregate};

// Error types
pub use crate::error::{ExtractError, FetchError, FileError, ResolveError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
