//! Library configuration.
//!
//! # Responsibility
//! - Name the spreadsheet location and failure-caching policy.
//! - Resolve overrides from process environment.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as paths.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the spreadsheet path.
pub const DATA_PATH_ENV: &str = "BIOPAPERS_DATA_PATH";
/// Environment variable enabling `FailurePolicy::CacheEmpty` (`1|true|yes`).
pub const CACHE_FAILURES_ENV: &str = "BIOPAPERS_CACHE_FAILURES";
/// Default spreadsheet location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/research-papers.xlsx";

/// What a failed load leaves behind in the library cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Cache nothing; the next load reads the source again.
    #[default]
    Retry,
    /// Pin an empty collection; the source is never read again.
    CacheEmpty,
}

/// Paper library settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub data_path: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl LibraryConfig {
    /// Defaults overridden by `BIOPAPERS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            config.data_path = PathBuf::from(path.trim());
        }
        if let Some(flag) = lookup(CACHE_FAILURES_ENV) {
            config.failure_policy = if is_truthy(&flag) {
                FailurePolicy::CacheEmpty
            } else {
                FailurePolicy::Retry
            };
        }
        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
