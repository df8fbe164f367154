use itertools::Itertools;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to the remote item/effect/recipe API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to '{url}' failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to '{url}' could not be sent: {message}")]
    Transport { url: String, message: String },

    #[error("Response from '{url}' could not be decoded: {message}")]
    Decode { url: String, message: String },
}

/// Errors that can occur while expanding an item's recipe tree.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Recipe of item {item_id} references ingredient {ingredient_id}, which is missing from its ingredient list")]
    IngredientNotFound { item_id: u64, ingredient_id: u64 },

    #[error("Recipe cycle detected: {}", format_path(.path))]
    CycleDetected { path: Vec<u64> },
}

/// Errors that abort the extraction of a job.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Job '{0}' not found in the job configuration")]
    JobNotFound(String),

    #[error("Invalid level range {min}..={max}: bounds must satisfy 0 <= min <= max <= 200")]
    InvalidLevelRange { min: u32, max: u32 },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors related to the local JSON files.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("File '{}' not found", .0.display())]
    Missing(PathBuf),

    #[error("Could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not decode JSON from '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not write '{}': {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

fn format_path(path: &[u64]) -> String {
    path.iter().join(" -> ")
}
