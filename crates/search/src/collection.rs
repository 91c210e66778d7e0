//! Inverted index over normalized words
//!
//! This module provides:
//! - WordEntry with document frequency and associated keys
//! - Collection mapping word -> WordEntry, with merge/unmerge
//!
//! # Ordering
//!
//! Words are kept in lexicographic order, so `words()` and prefix scans are
//! deterministic. Keys within an entry keep the order they were merged in.

use crate::indexer::WordIndex;
use std::collections::BTreeMap;
use std::ops::Bound;

// ============================================================================
// WordEntry
// ============================================================================

/// One indexed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Length in characters when first inserted; never recomputed
    pub weight: usize,
    /// Number of merges that contributed this word
    pub count: u32,
    /// Document keys containing this word, in merge order
    pub keys: Vec<String>,
}

impl WordEntry {
    fn new(weight: usize, key: Option<&str>) -> Self {
        WordEntry {
            weight,
            count: 1,
            keys: key.map(|k| vec![k.to_string()]).unwrap_or_default(),
        }
    }

    /// Remove the last occurrence of a key. Returns true if one was removed.
    fn remove_key(&mut self, key: &str) -> bool {
        match self.keys.iter().rposition(|k| k == key) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Collection
// ============================================================================

/// Word -> WordEntry mapping
///
/// `size` is tracked explicitly and always equals the number of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    words: BTreeMap<String, WordEntry>,
    size: usize,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.size, self.words.len());
        self.size
    }

    /// Check if no word is indexed
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Look up a word
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    /// Check if a word is indexed
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// All indexed words, in lexicographic order
    pub fn words(&self) -> Vec<String> {
        self.words.keys().cloned().collect()
    }

    /// Iterate words starting with `prefix`, in lexicographic order
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a WordEntry)> + 'a {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(word, _)| word.starts_with(prefix))
            .map(|(word, entry)| (word.as_str(), entry))
    }

    /// Merge one document's words into the collection.
    ///
    /// An existing word gains one count per merge regardless of how often it
    /// occurred in the document. Returns the number of new words.
    pub fn merge(&mut self, index: &WordIndex, key: Option<&str>) -> usize {
        let mut added = 0;
        for (word, stats) in index.iter() {
            match self.words.get_mut(word) {
                Some(entry) => {
                    entry.count += 1;
                    if let Some(key) = key {
                        entry.keys.push(key.to_string());
                    }
                }
                None => {
                    self.words
                        .insert(word.to_string(), WordEntry::new(stats.weight, key));
                    self.size += 1;
                    added += 1;
                }
            }
        }
        added
    }

    /// Undo a merge.
    ///
    /// Words not in the collection are ignored. A word whose count drops to
    /// zero is deleted. Returns the number of deleted words.
    pub fn unmerge(&mut self, index: &WordIndex, key: Option<&str>) -> usize {
        if self.size == 0 {
            return 0;
        }
        let mut deleted = 0;
        for word in index.words() {
            let Some(entry) = self.words.get_mut(word) else {
                continue;
            };
            entry.count = entry.count.saturating_sub(1);
            if let Some(key) = key {
                entry.remove_key(key);
            }
            if entry.count == 0 {
                self.words.remove(word);
                self.size -= 1;
                deleted += 1;
            }
        }
        deleted
    }

    /// Remove every word
    pub fn clear(&mut self) {
        self.words.clear();
        self.size = 0;
    }
}
