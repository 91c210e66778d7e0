//! Prefix search index for autocomplete
//!
//! This crate provides:
//! - Normalizer and Indexer turning raw text into normalized words
//! - Collection: the inverted index, mutated by merge/unmerge
//! - QueryExpansion: trailing-wildcard expansion of query words
//! - match_keys: ALL/ANY matching with relevance ranking
//! - TypeaheadIndex: the public engine, and SharedIndex for threads
//!
//! # Usage
//!
//! ```
//! use typeahead_search::{MatchMode, TypeaheadIndex};
//!
//! let mut index = TypeaheadIndex::new();
//! index.add("I bought a red car.", Some("mid-life crisis"));
//!
//! assert_eq!(index.search("red car", MatchMode::All), vec!["mid-life crisis"]);
//! assert!(index.search("red bus", MatchMode::All).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod engine;
pub mod expander;
pub mod indexer;
pub mod key_store;
pub mod matcher;
pub mod normalizer;
pub mod scorer;
pub mod shared;

// Re-export commonly used types
pub use collection::{Collection, WordEntry};
pub use engine::{IndexStats, TypeaheadIndex};
pub use expander::{Expansion, QueryExpansion};
pub use indexer::{Indexer, WordIndex, WordStats};
pub use key_store::KeyStore;
pub use matcher::{match_keys, matching_keys, ScoredKey};
pub use normalizer::Normalizer;
pub use shared::SharedIndex;
pub use typeahead_core::{Error, IndexConfig, MatchMode, Result};
