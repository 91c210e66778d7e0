//! Matching and ranking
//!
//! Combines a query expansion with the collection's key lists:
//! 1. For each document key, collect the distinct query words it satisfies
//! 2. ALL: keep keys satisfying every query word
//!    ANY: keep keys satisfying at least one, ranked by relevance
//!
//! # Result order
//!
//! Keys are first put in document order: the order in which keys were first
//! stored in the key store. Keys without stored text follow, in the order
//! they were discovered (expanded words in lexicographic order, then each
//! word's key list). ANY mode then sorts by relevance, highest first, keeping
//! document order among equal scores.

use crate::collection::Collection;
use crate::expander::QueryExpansion;
use crate::key_store::KeyStore;
use crate::scorer::relevance;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use typeahead_core::MatchMode;

/// A matched document key and its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredKey {
    /// Document key
    pub key: String,
    /// Relevance against the raw query
    pub score: u64,
}

/// Distinct query words satisfied per document key, in discovery order
struct Satisfied<'a> {
    keys: Vec<(&'a str, FxHashSet<&'a str>)>,
    positions: FxHashMap<&'a str, usize>,
}

impl<'a> Satisfied<'a> {
    fn collect(expansion: &'a QueryExpansion, collection: &'a Collection) -> Self {
        let mut satisfied = Satisfied {
            keys: Vec::new(),
            positions: FxHashMap::default(),
        };
        for (word, exp) in expansion.iter() {
            let Some(entry) = collection.get(word) else {
                continue;
            };
            for key in &entry.keys {
                satisfied.insert(key, &exp.orig);
            }
        }
        satisfied
    }

    fn insert(&mut self, key: &'a str, orig: &'a str) {
        let pos = match self.positions.get(key) {
            Some(&pos) => pos,
            None => {
                self.positions.insert(key, self.keys.len());
                self.keys.push((key, FxHashSet::default()));
                self.keys.len() - 1
            }
        };
        self.keys[pos].1.insert(orig);
    }
}

/// Qualifying keys in document order, before any ranking
fn qualifying_keys<'a>(
    expansion: &'a QueryExpansion,
    collection: &'a Collection,
    key_store: &KeyStore,
    mode: MatchMode,
) -> Vec<&'a str> {
    let satisfied = Satisfied::collect(expansion, collection);
    let required = expansion.query_word_count();

    let mut qualifying: Vec<&str> = satisfied
        .keys
        .iter()
        .filter(|(_, origs)| match mode {
            MatchMode::All => origs.len() == required,
            MatchMode::Any => !origs.is_empty(),
        })
        .map(|(key, _)| *key)
        .collect();

    // Stable: keys without stored text keep discovery order at the end
    qualifying.sort_by_key(|key| key_store.position(key).unwrap_or(u64::MAX));
    qualifying
}

/// Match an expanded query against the collection, with scores.
///
/// `query` is the raw query text, used for relevance scoring.
pub fn match_keys(
    expansion: &QueryExpansion,
    collection: &Collection,
    key_store: &KeyStore,
    query: &str,
    mode: MatchMode,
) -> Vec<ScoredKey> {
    let mut results: Vec<ScoredKey> = qualifying_keys(expansion, collection, key_store, mode)
        .into_iter()
        .map(|key| ScoredKey {
            key: key.to_string(),
            score: key_store
                .get(key)
                .map(|text| relevance(text, query))
                .unwrap_or(0),
        })
        .collect();

    if mode == MatchMode::Any {
        results.sort_by(|a, b| b.score.cmp(&a.score));
    }

    results
}

/// Match an expanded query against the collection, keys only.
///
/// Same order as [`match_keys`]. ALL mode never reads stored texts.
pub fn matching_keys(
    expansion: &QueryExpansion,
    collection: &Collection,
    key_store: &KeyStore,
    query: &str,
    mode: MatchMode,
) -> Vec<String> {
    match mode {
        MatchMode::All => qualifying_keys(expansion, collection, key_store, mode)
            .into_iter()
            .map(str::to_string)
            .collect(),
        MatchMode::Any => match_keys(expansion, collection, key_store, query, mode)
            .into_iter()
            .map(|scored| scored.key)
            .collect(),
    }
}
