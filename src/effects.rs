//! Effect cleanup and filtering.
//!
//! The API describes effects with template strings such as
//! `"#1{~1~2 à }#2 Vitalité"`. These are reduced to a plain effect name
//! (`"Vitalité"`) and matched against an allowlist of accepted names.

use crate::catalog::{CatalogSource, ItemEffectRecord, ItemRecord};
use crate::data::Effect;
use crate::error::FetchError;
use ahash::AHashSet;
use dashmap::DashMap;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Effect whose values are meaningless and always recorded as `(1, 1)`.
pub const HUNTING_WEAPON: &str = "Arme de chasse";

static BRACE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("valid brace pattern"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+").expect("valid placeholder pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Reduces a raw effect description to its effect name.
pub fn clean_effect_name(raw: &str) -> String {
    let mut text = raw.to_string();
    // Brace groups can nest, strip innermost first until none remain.
    while BRACE_GROUP.is_match(&text) {
        text = BRACE_GROUP.replace_all(&text, "").into_owned();
    }
    let text = PLACEHOLDER.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().trim_start_matches('+').trim_start().to_string()
}

/// Maps raw item effects to accepted, named effects.
pub struct EffectNormalizer<'a, S: CatalogSource + ?Sized> {
    source: &'a S,
    accepted: AHashSet<String>,
    names: DashMap<u64, String>,
}

impl<'a, S: CatalogSource + ?Sized> EffectNormalizer<'a, S> {
    pub fn new(source: &'a S, accepted: impl IntoIterator<Item = String>) -> Self {
        Self {
            source,
            accepted: accepted.into_iter().collect(),
            names: DashMap::new(),
        }
    }

    pub fn is_accepted(&self, name: &str) -> bool {
        self.accepted.contains(name)
    }

    /// Returns the cleaned name of an effect, fetching it on first use.
    pub fn effect_name(&self, effect_id: u64) -> Result<String, FetchError> {
        if let Some(name) = self.names.get(&effect_id) {
            return Ok(name.clone());
        }
        let name = clean_effect_name(&self.source.effect_description(effect_id)?);
        trace!(effect_id, name = %name, "Resolved effect name");
        Ok(self.names.entry(effect_id).or_insert(name).clone())
    }

    /// Applies the effect rules: negative lower bounds are dropped, a zero upper
    /// bound collapses onto the lower one, the hunting weapon effect is forced to
    /// `(1, 1)` and names outside the allowlist are dropped.
    pub fn normalize(&self, raw: &[ItemEffectRecord]) -> Result<Vec<Effect>, FetchError> {
        let mut effects = Vec::new();
        for record in raw {
            if record.from < 0 {
                continue;
            }
            let name = self.effect_name(record.effect_id)?;
            if !self.is_accepted(&name) {
                continue;
            }
            let (value_low, value_high) = if name == HUNTING_WEAPON {
                (1, 1)
            } else if record.to == 0 {
                (record.from, record.from)
            } else {
                (record.from, record.to)
            };
            effects.push(Effect {
                name,
                value_low,
                value_high,
            });
        }
        Ok(effects)
    }
}

/// True when the item has a recipe that is not secret and the item can be destroyed.
pub fn has_public_recipe(record: &ItemRecord) -> bool {
    record.has_recipe && !record.is_secret_recipe && record.is_destructible
}

/// An item is craftable when it has a public recipe, can be destroyed and
/// carries at least one recognized effect.
pub fn is_craftable(record: &ItemRecord, effects: &[Effect]) -> bool {
    has_public_recipe(record) && !effects.is_empty()
}
