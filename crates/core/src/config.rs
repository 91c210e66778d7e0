//! Index configuration
//!
//! The stop list and the minimum word length are fixed when an index is
//! constructed and cannot be changed afterwards. Both can be given in code
//! or as a TOML document:
//!
//! ```toml
//! min_word_len = 2
//! stop_words = ["a", "an", "the"]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Standard English stop words (Lucene's default set).
///
/// These high-frequency words carry little value for autocomplete and are
/// never indexed.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Words shorter than this many characters are never indexed.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

/// Characters that survive normalization.
///
/// Everything else is stripped from a token after lower-casing.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' || c.is_whitespace()
}

/// Configuration for a typeahead index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Normalized words that are discarded instead of indexed.
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    /// Minimum length, in characters, of an indexed word.
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_min_word_len() -> usize {
    DEFAULT_MIN_WORD_LEN
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            min_word_len: default_min_word_len(),
        }
    }
}

impl IndexConfig {
    /// Builder: replace the stop list
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: index every word, including common ones
    pub fn without_stop_words(mut self) -> Self {
        self.stop_words.clear();
        self
    }

    /// Builder: set minimum word length
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Check the configuration can be used to build an index.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `min_word_len` is zero or a stop word
    /// is not a single normalized word (it could never match).
    pub fn validate(&self) -> Result<()> {
        if self.min_word_len == 0 {
            return Err(Error::InvalidConfig(
                "min_word_len must be at least 1".to_string(),
            ));
        }
        for word in &self.stop_words {
            // Tokens are split on spaces, so a stop word is a single token
            let normalized = word
                .chars()
                .all(|c| is_word_char(c) && !c.is_whitespace());
            if word.is_empty() || !normalized {
                return Err(Error::InvalidConfig(format!(
                    "stop word '{}' is not a single normalized word (lowercase a-z, 0-9, '_', '-')",
                    word
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParse` on malformed TOML or unknown fields, and
    /// `Error::InvalidConfig` if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default config document with comments.
    pub fn default_toml() -> &'static str {
        r#"# Typeahead index configuration
#
# Words shorter than this (in characters) are never indexed. Default: 2
min_word_len = 2

# Normalized words that are never indexed.
# Omit to use the standard English stop list, or set to [] to index everything.
# stop_words = ["a", "an", "and", "the"]
"#
    }
}
