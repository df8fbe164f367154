//! # craftledger - Recipe Trees and Ingredient-Demand Ledgers
//!
//! **craftledger** pulls craftable equipment from a public item/recipe API,
//! expands every recipe into its full tree of sub-recipes, and flattens the
//! whole forest into three pricing ledgers: equipment, raw ingredients and
//! intermediate recipes. Quantities are accumulated across every item so the
//! ledgers read as a shopping list for crafting everything once.
//!
//! ## Core Workflow
//!
//! 1.  **Configure**: Load the job list and the accepted effect names (see [`config::Settings`]).
//! 2.  **Extract**: Use an [`orchestrator::Extractor`] over a [`catalog::CatalogSource`] to fetch
//!     each job's categories in parallel, keep craftable items and resolve their recipe trees.
//! 3.  **Aggregate**: Call [`ledger::aggregate`] on the extracted forest to build the ledgers.
//! 4.  **Persist**: Write the extraction and the ledgers as JSON for the pricing pass.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use craftledger::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let settings = Settings::default();
//!     let jobs: Vec<JobConfig> = read_json(&settings.jobs_path())?;
//!     let accepted: Vec<String> = read_json(&settings.effects_path())?;
//!
//!     let catalog = HttpCatalog::new(&settings.api_url);
//!     let extractor = Extractor::new(&catalog, &jobs, accepted);
//!
//!     let levels = LevelRange::new(150, 200)?;
//!     let forest = extractor.extract_jobs(&JobSelection::All, levels)?;
//!     write_json(&settings.results_path(), &forest)?;
//!
//!     let ledgers = aggregate(&forest);
//!     ledgers.save(&settings.ledger_paths())?;
//!     println!("{} entries waiting for a price", ledgers.unpriced_count());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod effects;
pub mod error;
pub mod ledger;
pub mod orchestrator;
pub mod prelude;
pub mod recipe;
