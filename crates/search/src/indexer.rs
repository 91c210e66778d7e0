//! Per-document indexer
//!
//! Turns one piece of text into a word → stats mapping. The indexer never
//! touches the collection; merging is a separate step.

use crate::normalizer::Normalizer;
use rustc_hash::FxHashMap;

// ============================================================================
// WordStats
// ============================================================================

/// Occurrence statistics for one word within a single indexing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStats {
    /// Length in characters at first occurrence
    pub weight: usize,
    /// Occurrences within this call
    pub count: u32,
}

// ============================================================================
// WordIndex
// ============================================================================

/// Result of indexing one text.
///
/// Words are kept in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: Vec<(String, WordStats)>,
    positions: FxHashMap<String, usize>,
}

impl WordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a normalized word
    fn record(&mut self, word: String) {
        if let Some(&pos) = self.positions.get(&word) {
            self.words[pos].1.count += 1;
            return;
        }
        let stats = WordStats {
            weight: word.chars().count(),
            count: 1,
        };
        self.positions.insert(word.clone(), self.words.len());
        self.words.push((word, stats));
    }

    /// Stats for a word, if it occurred
    pub fn get(&self, word: &str) -> Option<&WordStats> {
        self.positions.get(word).map(|&pos| &self.words[pos].1)
    }

    /// Check if a word occurred
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Iterate words in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStats)> {
        self.words.iter().map(|(w, s)| (w.as_str(), s))
    }

    /// Distinct words, in first-occurrence order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|(w, _)| w.as_str())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no word survived normalization
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ============================================================================
// Indexer
// ============================================================================

/// Splits text on single spaces and normalizes each token
#[derive(Debug, Clone)]
pub struct Indexer {
    normalizer: Normalizer,
    min_word_len: usize,
}

impl Indexer {
    /// Create an indexer
    pub fn new(normalizer: Normalizer, min_word_len: usize) -> Self {
        Indexer {
            normalizer,
            min_word_len,
        }
    }

    /// The normalizer used for each token
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Minimum length of an indexed word
    pub fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    /// Index a piece of text.
    ///
    /// Splits on every single space (runs of spaces yield empty tokens that
    /// are skipped), normalizes each token and keeps words of at least
    /// `min_word_len` characters.
    ///
    /// # Example
    ///
    /// ```
    /// use typeahead_search::{Indexer, Normalizer};
    ///
    /// let indexer = Indexer::new(Normalizer::default(), 2);
    /// let index = indexer.index("I bought a red car.");
    /// let words: Vec<&str> = index.words().collect();
    /// assert_eq!(words, vec!["bought", "red", "car"]);
    /// ```
    pub fn index(&self, text: &str) -> WordIndex {
        let mut index = WordIndex::new();
        if text.is_empty() {
            return index;
        }
        for token in text.split(' ') {
            let word = self.normalizer.normalize(token);
            if word.chars().count() < self.min_word_len {
                continue;
            }
            index.record(word);
        }
        index
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Indexer::new(Normalizer::default(), typeahead_core::DEFAULT_MIN_WORD_LEN)
    }
}
