//! The typeahead index
//!
//! Data flow:
//! - add/remove: text → Indexer → Collection (+ KeyStore when keyed)
//! - search: query → Indexer → QueryExpansion → match_keys → keys
//!
//! All operations are synchronous and never fail. Degenerate input yields an
//! empty contribution or an empty result. Share across threads with
//! [`SharedIndex`](crate::SharedIndex).

use crate::collection::{Collection, WordEntry};
use crate::expander::QueryExpansion;
use crate::indexer::{Indexer, WordIndex};
use crate::key_store::KeyStore;
use crate::matcher::{match_keys, matching_keys, ScoredKey};
use crate::normalizer::Normalizer;
use crate::scorer::relevance;
use serde::Serialize;
use tracing::{debug, trace};
use typeahead_core::{IndexConfig, MatchMode, Result};

/// Point-in-time sizes of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Indexed words
    pub words: usize,
    /// Stored document texts
    pub documents: usize,
}

/// In-memory prefix search index
///
/// # Example
///
/// ```
/// use typeahead_search::{MatchMode, TypeaheadIndex};
///
/// let mut index = TypeaheadIndex::new();
/// index
///     .add("Instant search in Google is awesome!", Some("quote"))
///     .add("It will work fine after you install that patch.", Some("instruction"));
///
/// assert_eq!(index.search("inst", MatchMode::All), vec!["quote", "instruction"]);
/// ```
#[derive(Debug, Clone)]
pub struct TypeaheadIndex {
    indexer: Indexer,
    collection: Collection,
    key_store: KeyStore,
}

impl Default for TypeaheadIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeaheadIndex {
    /// Create an index with the default stop list and minimum word length
    pub fn new() -> Self {
        TypeaheadIndex {
            indexer: Indexer::default(),
            collection: Collection::new(),
            key_store: KeyStore::new(),
        }
    }

    /// Create an index from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        let normalizer = Normalizer::new(config.stop_words);
        Ok(TypeaheadIndex {
            indexer: Indexer::new(normalizer, config.min_word_len),
            collection: Collection::new(),
            key_store: KeyStore::new(),
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Index `text`, associating its words with `key`.
    pub fn add(&mut self, text: &str, key: Option<&str>) -> &mut Self {
        let index = self.indexer.index(text);
        let added = self.collection.merge(&index, key);
        if let Some(key) = key {
            self.key_store.insert(key, text);
        }
        debug!(
            target: "typeahead::index",
            key = ?key,
            words = index.len(),
            new_words = added,
            size = self.collection.len(),
            "Document added"
        );
        self
    }

    /// Undo an `add`.
    ///
    /// Must be given the exact text/key pair passed to `add`. Words never
    /// added are ignored, and nothing is unmerged from an empty collection.
    /// The stored text for `key` is always dropped, so adding a text with no
    /// indexable words and removing it again leaves no trace.
    pub fn remove(&mut self, text: &str, key: Option<&str>) -> &mut Self {
        if let Some(key) = key {
            self.key_store.remove(key);
        }
        if self.collection.is_empty() {
            return self;
        }
        let index = self.indexer.index(text);
        let deleted = self.collection.unmerge(&index, key);
        debug!(
            target: "typeahead::index",
            key = ?key,
            deleted_words = deleted,
            size = self.collection.len(),
            "Document removed"
        );
        self
    }

    /// Remove every indexed word.
    ///
    /// Stored document texts are kept: relevance scoring for a key still
    /// sees its old text until that key is added or removed again. Use
    /// [`reset`](Self::reset) to drop them too.
    pub fn clear(&mut self) -> &mut Self {
        self.collection.clear();
        debug!(target: "typeahead::index", "Collection cleared");
        self
    }

    /// Remove every indexed word and every stored document text.
    pub fn reset(&mut self) -> &mut Self {
        self.collection.clear();
        self.key_store.clear();
        debug!(target: "typeahead::index", "Index reset");
        self
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Keys of documents matching `query`.
    ///
    /// ALL mode returns keys in document order; ANY mode ranks by relevance.
    pub fn search(&self, query: &str, mode: MatchMode) -> Vec<String> {
        let expansion = self.expand(query);
        let results = matching_keys(&expansion, &self.collection, &self.key_store, query, mode);
        trace!(
            target: "typeahead::index",
            mode = %mode,
            expanded = expansion.len(),
            hits = results.len(),
            "Search complete"
        );
        results
    }

    /// Like [`search`](Self::search), with each key's relevance score.
    pub fn search_scored(&self, query: &str, mode: MatchMode) -> Vec<ScoredKey> {
        let expansion = self.expand(query);
        let results = match_keys(&expansion, &self.collection, &self.key_store, query, mode);
        trace!(
            target: "typeahead::index",
            mode = %mode,
            expanded = expansion.len(),
            query_words = expansion.query_word_count(),
            hits = results.len(),
            "Search complete"
        );
        results
    }

    /// Expand the words of `query` against the indexed words.
    pub fn expand(&self, query: &str) -> QueryExpansion {
        QueryExpansion::expand(&self.indexer.index(query), &self.collection)
    }

    /// Relevance of the document stored under `key` for `query`.
    ///
    /// Zero if no text is stored for `key`.
    pub fn relevance(&self, key: &str, query: &str) -> u64 {
        self.key_store
            .get(key)
            .map(|text| relevance(text, query))
            .unwrap_or(0)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Normalize a single token with this index's stop list
    pub fn normalize(&self, token: &str) -> String {
        self.indexer.normalizer().normalize(token)
    }

    /// Index a text without touching the collection
    pub fn index(&self, text: &str) -> WordIndex {
        self.indexer.index(text)
    }

    /// All indexed words, in lexicographic order
    pub fn words(&self) -> Vec<String> {
        self.collection.words()
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Check if no word is indexed
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Check if a normalized word is indexed
    pub fn contains_word(&self, word: &str) -> bool {
        self.collection.contains(word)
    }

    /// Entry for a normalized word
    pub fn word_entry(&self, word: &str) -> Option<&WordEntry> {
        self.collection.get(word)
    }

    /// Original text stored for a key
    pub fn document(&self, key: &str) -> Option<&str> {
        self.key_store.get(key)
    }

    /// Current sizes
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.collection.len(),
            documents: self.key_store.len(),
        }
    }

    /// The word collection
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The stored document texts
    pub fn key_store(&self) -> &KeyStore {
        &self.key_store
    }
}
