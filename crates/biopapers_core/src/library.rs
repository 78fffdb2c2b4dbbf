//! Load-once paper library.
//!
//! # Responsibility
//! - Own the lazily loaded, immutable paper collection behind one accessor.
//! - Turn every data-unavailable failure into an empty collection.
//!
//! # Invariants
//! - After a successful load the collection never changes for this owner.
//! - `load()` never fails and never panics; failures are logged.
//! - With `FailurePolicy::Retry` a failed load caches nothing.
//! - With `FailurePolicy::CacheEmpty` a failed load pins an empty collection.

use crate::config::{FailurePolicy, LibraryConfig};
use crate::model::paper::PaperRecord;
use crate::source::{records_from_table, PaperSource, SheetFile, SourceError, SourceResult};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Shared, immutable view of one loaded collection.
pub type Papers = Arc<[PaperRecord]>;

/// Owner of one paper collection and the source it is read from.
pub struct PaperLibrary<S: PaperSource> {
    source: S,
    failure_policy: FailurePolicy,
    papers: OnceCell<Papers>,
}

impl PaperLibrary<SheetFile> {
    /// Builds a file-backed library from configuration.
    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(SheetFile::new(config.data_path.clone()), config.failure_policy)
    }
}

impl<S: PaperSource> PaperLibrary<S> {
    /// Creates an unloaded library; nothing is read until the first load.
    pub fn new(source: S, failure_policy: FailurePolicy) -> Self {
        Self {
            source,
            failure_policy,
            papers: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached collection, reading the source on first use.
    ///
    /// Failures surface as an empty collection.
    pub fn load(&self) -> Papers {
        let loaded = self.papers.get_or_try_init(|| match self.read_papers() {
            Ok(papers) => Ok(papers),
            Err(err) => match self.failure_policy {
                FailurePolicy::Retry => Err(err),
                FailurePolicy::CacheEmpty => Ok(empty_papers()),
            },
        });
        match loaded {
            Ok(papers) => Arc::clone(papers),
            Err(_) => empty_papers(),
        }
    }

    /// Like [`PaperLibrary::load`] but reports why the source was unavailable.
    ///
    /// A cached collection is returned without touching the source.
    ///
    /// # Errors
    /// - Returns the source error when the first successful read has not
    ///   happened yet and reading fails again. The failure policy still
    ///   applies: under `CacheEmpty` the empty collection is pinned.
    pub fn try_load(&self) -> SourceResult<Papers> {
        if let Some(papers) = self.papers.get() {
            return Ok(Arc::clone(papers));
        }
        match self.read_papers() {
            Ok(papers) => Ok(Arc::clone(self.papers.get_or_init(|| papers))),
            Err(err) => {
                if self.failure_policy == FailurePolicy::CacheEmpty {
                    let _ = self.papers.set(empty_papers());
                }
                Err(err)
            }
        }
    }

    /// Returns whether a collection (possibly a pinned empty one) is cached.
    pub fn is_loaded(&self) -> bool {
        self.papers.get().is_some()
    }

    fn read_papers(&self) -> Result<Papers, SourceError> {
        let source = self.source.describe();
        match self.source.read_table() {
            Ok(table) => {
                let records = records_from_table(&table);
                info!(
                    "event=papers_load module=library status=ok source={} count={}",
                    source,
                    records.len()
                );
                Ok(Papers::from(records))
            }
            Err(err) => {
                error!(
                    "event=papers_load module=library status=error source={} policy={:?} error={}",
                    source, self.failure_policy, err
                );
                Err(err)
            }
        }
    }
}

fn empty_papers() -> Papers {
    Papers::from(Vec::new())
}
