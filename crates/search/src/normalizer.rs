//! Word normalizer
//!
//! Pipeline: lowercase → strip characters outside `[a-z0-9_-\s]` → trim
//!           → drop stop words
//!
//! No stemming: "searches" and "search" are distinct keys.

use rustc_hash::FxHashSet;
use typeahead_core::{is_word_char, DEFAULT_STOP_WORDS};

/// Converts a raw token into its canonical indexing key.
///
/// The stop list is fixed at construction.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: FxHashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl Normalizer {
    /// Create a normalizer with the given stop list
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Normalizer {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalize a single token.
    ///
    /// Returns an empty string when the token should be discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use typeahead_search::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.normalize("Awesome!"), "awesome");
    /// assert_eq!(normalizer.normalize("The"), "");
    /// ```
    pub fn normalize(&self, token: &str) -> String {
        let lowered: String = token
            .to_lowercase()
            .chars()
            .filter(|c| is_word_char(*c))
            .collect();
        let trimmed = lowered.trim();
        if self.is_stop_word(trimmed) {
            return String::new();
        }
        trimmed.to_string()
    }

    /// Check if a normalized word is on the stop list.
    #[inline]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
