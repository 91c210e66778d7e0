//! Core types for the typeahead index
//!
//! This crate defines the foundational types shared by the search crate:
//! - Error: Error type for the configuration surface
//! - IndexConfig: Stop list and minimum word length
//! - MatchMode: ALL / ANY match semantics
//! - DEFAULT_STOP_WORDS: Standard English stop list

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{is_word_char, IndexConfig, DEFAULT_MIN_WORD_LEN, DEFAULT_STOP_WORDS};
pub use error::{Error, Result};
pub use types::MatchMode;
