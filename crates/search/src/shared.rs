//! Thread-safe handle over a [`TypeaheadIndex`]
//!
//! The index itself mutates in place with no internal locking. `SharedIndex`
//! puts the whole index behind one `parking_lot::RwLock`: mutations take the
//! write lock, queries take the read lock. Clones share the same index.

use crate::engine::{IndexStats, TypeaheadIndex};
use crate::matcher::ScoredKey;
use parking_lot::RwLock;
use std::sync::Arc;
use typeahead_core::{IndexConfig, MatchMode, Result};

/// Cloneable, lock-protected typeahead index
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<TypeaheadIndex>>,
}

impl SharedIndex {
    /// Create a shared index with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared index from a configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        Ok(Self::from(TypeaheadIndex::with_config(config)?))
    }

    /// See [`TypeaheadIndex::add`]
    pub fn add(&self, text: &str, key: Option<&str>) -> &Self {
        self.inner.write().add(text, key);
        self
    }

    /// See [`TypeaheadIndex::remove`]
    pub fn remove(&self, text: &str, key: Option<&str>) -> &Self {
        self.inner.write().remove(text, key);
        self
    }

    /// See [`TypeaheadIndex::clear`]
    pub fn clear(&self) -> &Self {
        self.inner.write().clear();
        self
    }

    /// See [`TypeaheadIndex::reset`]
    pub fn reset(&self) -> &Self {
        self.inner.write().reset();
        self
    }

    /// See [`TypeaheadIndex::search`]
    pub fn search(&self, query: &str, mode: MatchMode) -> Vec<String> {
        self.inner.read().search(query, mode)
    }

    /// See [`TypeaheadIndex::search_scored`]
    pub fn search_scored(&self, query: &str, mode: MatchMode) -> Vec<ScoredKey> {
        self.inner.read().search_scored(query, mode)
    }

    /// See [`TypeaheadIndex::words`]
    pub fn words(&self) -> Vec<String> {
        self.inner.read().words()
    }

    /// See [`TypeaheadIndex::stats`]
    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Run `f` with shared access to the index
    pub fn read<R>(&self, f: impl FnOnce(&TypeaheadIndex) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the index.
    ///
    /// Use for several mutations that must not interleave with other writers.
    pub fn write<R>(&self, f: impl FnOnce(&mut TypeaheadIndex) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<TypeaheadIndex> for SharedIndex {
    fn from(index: TypeaheadIndex) -> Self {
        SharedIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }
}
