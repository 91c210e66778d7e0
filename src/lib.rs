//! Typeahead - in-memory prefix search for autocomplete
//!
//! Typeahead indexes short documents under caller-chosen keys and answers
//! trailing-wildcard queries: every query word matches the indexed words it
//! is a prefix of.
//!
//! # Quick Start
//!
//! ```
//! use typeahead::{MatchMode, TypeaheadIndex};
//!
//! let mut index = TypeaheadIndex::new();
//! index
//!     .add("Instant search in Google is awesome!", Some("quote"))
//!     .add("It will work fine after you install that patch.", Some("instruction"));
//!
//! assert_eq!(index.search("inst", MatchMode::All), vec!["quote", "instruction"]);
//!
//! index.remove("Instant search in Google is awesome!", Some("quote"));
//! assert_eq!(index.search("inst", MatchMode::All), vec!["instruction"]);
//! ```
//!
//! # Architecture
//!
//! The engine lives in `typeahead-search`; configuration, errors and the
//! match mode live in `typeahead-core`. This crate only re-exports them.

pub use typeahead_core::{
    is_word_char, Error, IndexConfig, MatchMode, Result, DEFAULT_MIN_WORD_LEN, DEFAULT_STOP_WORDS,
};
pub use typeahead_search::{
    scorer, Collection, Expansion, IndexStats, Indexer, KeyStore, Normalizer, QueryExpansion,
    ScoredKey, SharedIndex, TypeaheadIndex, WordEntry, WordIndex, WordStats,
};
