//! Prefix expansion of query words
//!
//! Every normalized query word ("partial") is expanded to all collection
//! words it is a literal prefix of. The partial itself is always part of the
//! expansion, so an exact full-word match is found alongside longer words.
//!
//! # Tie-break
//!
//! When several partials prefix the same collection word, the partial that
//! comes LAST in the query wins the word. Expansions are kept in
//! lexicographic order of the expanded word.

use crate::collection::Collection;
use crate::indexer::WordIndex;
use std::collections::BTreeMap;

// ============================================================================
// Expansion
// ============================================================================

/// One expanded word and the query word it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Query word this expansion satisfies
    pub orig: String,
    /// Length in characters of the query word
    pub weight: usize,
    /// Occurrences of the query word (1 for prefix expansions)
    pub count: u32,
}

// ============================================================================
// QueryExpansion
// ============================================================================

/// Expanded word -> Expansion mapping for one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryExpansion {
    entries: BTreeMap<String, Expansion>,
}

impl QueryExpansion {
    /// Expand query words against the collection
    pub fn expand(partials: &WordIndex, collection: &Collection) -> Self {
        let mut entries = BTreeMap::new();

        for (partial, stats) in partials.iter() {
            entries.insert(
                partial.to_string(),
                Expansion {
                    orig: partial.to_string(),
                    weight: stats.weight,
                    count: stats.count,
                },
            );
        }

        for partial in partials.words() {
            let weight = partial.chars().count();
            for (word, _) in collection.with_prefix(partial) {
                entries.insert(
                    word.to_string(),
                    Expansion {
                        orig: partial.to_string(),
                        weight,
                        count: 1,
                    },
                );
            }
        }

        QueryExpansion { entries }
    }

    /// Number of query words a document must satisfy in ALL mode.
    ///
    /// Counts entries still tagged with their own word. A partial whose own
    /// entry was taken over by a later, shorter partial is not counted; that
    /// shorter partial covers it.
    pub fn query_word_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(word, exp)| **word == exp.orig)
            .count()
    }

    /// Look up an expanded word
    pub fn get(&self, word: &str) -> Option<&Expansion> {
        self.entries.get(word)
    }

    /// Iterate expansions in lexicographic order of the expanded word
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expansion)> {
        self.entries.iter().map(|(w, e)| (w.as_str(), e))
    }

    /// Number of expanded words, seeds included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the query had no usable word
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::Indexer;

    fn collection_of(texts: &[&str]) -> Collection {
        let indexer = Indexer::default();
        let mut collection = Collection::new();
        for text in texts {
            collection.merge(&indexer.index(text), None);
        }
        collection
    }

    fn expand(query: &str, collection: &Collection) -> QueryExpansion {
        QueryExpansion::expand(&Indexer::default().index(query), collection)
    }

    #[test]
    fn test_seeds_partials() {
        let collection = Collection::new();
        let exp = expand("inst", &collection);

        assert_eq!(exp.len(), 1);
        let seed = exp.get("inst").unwrap();
        assert_eq!(seed.orig, "inst");
        assert_eq!(seed.weight, 4);
        assert_eq!(exp.query_word_count(), 1);
    }

    #[test]
    fn test_expands_prefixes() {
        let collection = collection_of(&["instant install inside"]);
        let exp = expand("inst", &collection);

        let words: Vec<&str> = exp.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["inst", "install", "instant"]);

        let install = exp.get("install").unwrap();
        assert_eq!(install.orig, "inst");
        assert_eq!(install.weight, 4);
        assert_eq!(install.count, 1);
        assert_eq!(exp.query_word_count(), 1);
    }

    #[test]
    fn test_prefix_not_substring() {
        let collection = collection_of(&["reinstall"]);
        let exp = expand("inst", &collection);
        assert!(exp.get("reinstall").is_none());
    }

    #[test]
    fn test_exact_word_is_its_own_expansion() {
        let collection = collection_of(&["red car"]);
        let exp = expand("red car", &collection);
        assert_eq!(exp.len(), 2);
        assert_eq!(exp.query_word_count(), 2);
    }

    #[test]
    fn test_last_partial_wins() {
        let collection = collection_of(&["abcd"]);

        let exp = expand("ab abc", &collection);
        assert_eq!(exp.get("abcd").unwrap().orig, "abc");

        let exp = expand("abc ab", &collection);
        assert_eq!(exp.get("abcd").unwrap().orig, "ab");
    }

    #[test]
    fn test_shorter_later_partial_absorbs_seed() {
        let collection = collection_of(&["abc"]);
        let exp = expand("abc ab", &collection);

        // "abc" is an indexed word and "ab" prefixes it last
        assert_eq!(exp.get("abc").unwrap().orig, "ab");
        assert_eq!(exp.query_word_count(), 1);
    }

    #[test]
    fn test_empty_query() {
        let collection = collection_of(&["hello"]);
        let exp = expand("", &collection);
        assert!(exp.is_empty());
        assert_eq!(exp.query_word_count(), 0);

        // Stop words and single letters do not expand
        let exp = expand("the a", &collection);
        assert!(exp.is_empty());
    }

    #[test]
    fn test_seed_keeps_query_count() {
        let collection = Collection::new();
        let exp = expand("zz zz", &collection);
        assert_eq!(exp.get("zz").unwrap().count, 2);
    }
}
