use crate::error::{ExtractError, FetchError};
use tracing::debug;

mod http;
pub mod records;

pub use http::{DEFAULT_API_URL, HttpCatalog};
pub use records::*;

/// Number of items the API returns per listing page.
pub const PAGE_SIZE: u32 = 10;

/// Highest item level in the game.
pub const MAX_LEVEL: u32 = 200;

/// Item type excluded from every listing.
pub const EXCLUDED_TYPE_ID: u32 = 203;

/// An inclusive item level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    min: u32,
    max: u32,
}

impl LevelRange {
    pub const FULL: LevelRange = LevelRange {
        min: 0,
        max: MAX_LEVEL,
    };

    pub fn new(min: u32, max: u32) -> Result<Self, ExtractError> {
        if min > max || max > MAX_LEVEL {
            return Err(ExtractError::InvalidLevelRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

/// The remote item catalog.
///
/// Each method performs exactly one request. Implementations must be shareable
/// across worker threads; tests provide an in-memory implementation.
pub trait CatalogSource: Send + Sync {
    /// Lists one page of items of a category within a level range, highest level first.
    fn items_page(
        &self,
        category_id: u32,
        levels: LevelRange,
        skip: u32,
    ) -> Result<ItemsPage, FetchError>;

    /// Returns the raw (uncleaned) description of an effect.
    fn effect_description(&self, effect_id: u64) -> Result<String, FetchError>;

    /// Returns the recipe record of an item.
    fn recipe(&self, item_id: u64) -> Result<RecipeRecord, FetchError>;
}

/// Fetches every page of a category listing.
///
/// The first page reports the total; the remaining pages are requested at
/// offsets `PAGE_SIZE, 2 * PAGE_SIZE, ...` up to and including the total.
pub fn fetch_category<S: CatalogSource + ?Sized>(
    source: &S,
    category_id: u32,
    levels: LevelRange,
) -> Result<Vec<ItemRecord>, FetchError> {
    let first = source.items_page(category_id, levels, 0)?;
    let total = first.total;
    let mut items = first.data;

    for skip in (PAGE_SIZE..=total).step_by(PAGE_SIZE as usize) {
        let page = source.items_page(category_id, levels, skip)?;
        items.extend(page.data);
    }

    debug!(
        category_id,
        total,
        fetched = items.len(),
        "Fetched category listing"
    );
    Ok(items)
}
