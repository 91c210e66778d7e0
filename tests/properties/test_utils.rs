//! Test utilities for the property suite
//!
//! Provides index construction and proptest strategies for documents.

use proptest::prelude::*;
pub use typeahead::{MatchMode, TypeaheadIndex, DEFAULT_STOP_WORDS};

/// Install a fmt subscriber once so `RUST_LOG`-style output shows up in
/// failing tests. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A raw token: mixed case letters, optionally with trailing punctuation
pub fn raw_token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z0-9_-]{1,8}[.,!?]?",
        // Small pool so words repeat within and across documents
        1 => prop::sample::select(&["red", "car", "red-car", "x_1", "2024"][..])
            .prop_map(String::from),
    ]
}

/// A raw document: up to 8 tokens, sometimes joined by double spaces
pub fn raw_document() -> impl Strategy<Value = String> {
    (prop::collection::vec(raw_token(), 0..8), any::<bool>())
        .prop_map(|(tokens, wide)| tokens.join(if wide { "  " } else { " " }))
}

/// A stop-word-only document
pub fn stop_word_document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(DEFAULT_STOP_WORDS), 0..8)
        .prop_map(|words| words.join(" "))
}

/// Build an index from documents keyed `base0`, `base1`, ...
pub fn build_index(docs: &[String]) -> TypeaheadIndex {
    let mut index = TypeaheadIndex::new();
    for (i, doc) in docs.iter().enumerate() {
        index.add(doc, Some(&format!("base{}", i)));
    }
    index
}
