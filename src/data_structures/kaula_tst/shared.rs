//! Thread-safe handle around a Kaula tree.
//!
//! The tree itself is single-threaded. This wrapper serializes writers and
//! lets readers run in parallel behind a single `RwLock`, so a query never
//! observes a half-finished insert.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{KaulaTst, KaulaTstConfig, KaulaTstResult};

/// A cloneable, lock-protected [`KaulaTst`].
#[derive(Debug, Clone, Default)]
pub struct SharedKaulaTst {
    inner: Arc<RwLock<KaulaTst>>,
}

impl SharedKaulaTst {
    /// Creates an empty shared tree with default configuration.
    pub fn new() -> Self {
        Self::from_tst(KaulaTst::new())
    }

    /// Creates an empty shared tree with the specified configuration.
    pub fn with_config(config: KaulaTstConfig) -> Self {
        Self::from_tst(KaulaTst::with_config(config))
    }

    /// Wraps an already populated tree.
    pub fn from_tst(tst: KaulaTst) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tst)),
        }
    }

    /// See [`KaulaTst::insert`].
    pub fn insert(&self, word: &str, frequency: u32) -> bool {
        self.inner.write().insert(word, frequency)
    }

    /// See [`KaulaTst::try_insert`].
    pub fn try_insert(&self, word: &str, frequency: u32) -> KaulaTstResult<()> {
        self.inner.write().try_insert(word, frequency)
    }

    /// See [`KaulaTst::find`].
    pub fn find(&self, word: &str) -> bool {
        self.inner.read().find(word)
    }

    /// See [`KaulaTst::frequency`].
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.inner.read().frequency(word)
    }

    /// See [`KaulaTst::len`].
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// See [`KaulaTst::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// See [`KaulaTst::predict_completions`].
    pub fn predict_completions(&self, prefix: &str, max_results: usize) -> Vec<String> {
        self.inner.read().predict_completions(prefix, max_results)
    }

    /// See [`KaulaTst::predict_underscores`].
    pub fn predict_underscores(&self, pattern: &str, max_results: usize) -> Vec<String> {
        self.inner.read().predict_underscores(pattern, max_results)
    }
}
