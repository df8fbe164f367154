//! Per-job extraction: fetch every category of a job in parallel, keep the
//! craftable items, resolve their recipe trees and merge the results.

use crate::catalog::{CatalogSource, LevelRange, fetch_category};
use crate::data::{Item, JobConfig, JobExtraction, Recipe};
use crate::effects::{EffectNormalizer, has_public_recipe, is_craftable};
use crate::error::ExtractError;
use crate::recipe::RecipeResolver;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, info};

/// Which jobs an extraction run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSelection {
    All,
    Named(String),
}

/// Looks up a job by its exact name.
pub fn find_job<'j>(jobs: &'j [JobConfig], name: &str) -> Result<&'j JobConfig, ExtractError> {
    jobs.iter()
        .find(|job| job.name == name)
        .ok_or_else(|| ExtractError::JobNotFound(name.to_string()))
}

/// Orders items by level (highest first), then by name ignoring case.
pub fn sort_items(items: impl IntoIterator<Item = Item>) -> Vec<Item> {
    items
        .into_iter()
        .sorted_by(|a, b| {
            b.level
                .cmp(&a.level)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        })
        .collect()
}

/// Drives the catalog, the effect normalizer and the recipe resolver for a set of jobs.
///
/// Both the effect-name cache and the recipe cache are shared by every worker
/// for the lifetime of the extractor.
pub struct Extractor<'a, S: CatalogSource + ?Sized> {
    source: &'a S,
    jobs: &'a [JobConfig],
    normalizer: EffectNormalizer<'a, S>,
    resolver: RecipeResolver<'a, S>,
}

impl<'a, S: CatalogSource + ?Sized> Extractor<'a, S> {
    pub fn new(
        source: &'a S,
        jobs: &'a [JobConfig],
        accepted_effects: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            source,
            jobs,
            normalizer: EffectNormalizer::new(source, accepted_effects),
            resolver: RecipeResolver::new(source),
        }
    }

    pub fn resolver(&self) -> &RecipeResolver<'a, S> {
        &self.resolver
    }

    pub fn normalizer(&self) -> &EffectNormalizer<'a, S> {
        &self.normalizer
    }

    /// Fetches one category and returns its craftable items with resolved recipes.
    pub fn extract_category(
        &self,
        category_id: u32,
        levels: LevelRange,
    ) -> Result<Vec<Item>, ExtractError> {
        let records = fetch_category(self.source, category_id, levels)?;
        let mut items = Vec::new();

        for record in records {
            if !has_public_recipe(&record) {
                continue;
            }
            let effects = self.normalizer.normalize(&record.effects)?;
            if !is_craftable(&record, &effects) {
                debug!(item = %record.name.fr, "Skipping item without recognized effects");
                continue;
            }
            let recipe = self.resolver.resolve(record.id)?;
            items.push(Item {
                name: record.name.fr,
                level: record.level,
                img: record.img,
                effects,
                recipe: Some(Recipe::clone(&recipe)),
            });
        }

        debug!(category_id, craftable = items.len(), "Processed category");
        Ok(items)
    }

    /// Extracts every category of one job in parallel.
    ///
    /// The first failing category aborts the job; no partial result is returned.
    pub fn extract_job(
        &self,
        job_name: &str,
        levels: LevelRange,
    ) -> Result<JobExtraction, ExtractError> {
        let job = find_job(self.jobs, job_name)?;
        info!(job = %job.name, categories = ?job.category_id, "Processing job");

        let batches = job
            .category_id
            .par_iter()
            .map(|&category_id| self.extract_category(category_id, levels))
            .collect::<Result<Vec<_>, _>>()?;

        let items = sort_items(batches.into_iter().flatten());
        info!(job = %job.name, items = items.len(), "Finished job");
        Ok(JobExtraction {
            name: job.name.clone(),
            items,
        })
    }

    /// Extracts the selected jobs in parallel, in job-config order.
    pub fn extract_jobs(
        &self,
        selection: &JobSelection,
        levels: LevelRange,
    ) -> Result<Vec<JobExtraction>, ExtractError> {
        let names: Vec<&str> = match selection {
            JobSelection::All => self.jobs.iter().map(|job| job.name.as_str()).collect(),
            JobSelection::Named(name) => vec![name.as_str()],
        };

        names
            .par_iter()
            .map(|name| self.extract_job(name, levels))
            .collect()
    }
}
