//! Tier 1: Mutation Invariants
//!
//! add/remove/clear must leave the index in a predictable state.

use crate::test_utils::*;
use proptest::prelude::*;

proptest! {
    /// add(T, K) then remove(T, K) restores collection and key store
    #[test]
    fn add_remove_round_trip(
        base in prop::collection::vec(raw_document(), 0..6),
        text in raw_document(),
    ) {
        init_tracing();
        let mut index = build_index(&base);
        let collection_before = index.collection().clone();
        let key_store_before = index.key_store().clone();
        let size_before = index.len();

        index.add(&text, Some("added"));
        index.remove(&text, Some("added"));

        prop_assert_eq!(index.len(), size_before);
        prop_assert_eq!(index.collection(), &collection_before);
        prop_assert_eq!(index.key_store(), &key_store_before);
    }

    /// Unkeyed add/remove round trips too
    #[test]
    fn unkeyed_round_trip(
        base in prop::collection::vec(raw_document(), 0..6),
        text in raw_document(),
    ) {
        let mut index = build_index(&base);
        let before = index.collection().clone();

        index.add(&text, None);
        index.remove(&text, None);

        prop_assert_eq!(index.collection(), &before);
    }

    /// clear twice equals clear once, and leaves nothing indexed
    #[test]
    fn clear_is_idempotent(docs in prop::collection::vec(raw_document(), 0..6)) {
        let mut once = build_index(&docs);
        once.clear();

        let mut twice = build_index(&docs);
        twice.clear().clear();

        prop_assert!(once.words().is_empty());
        prop_assert_eq!(once.len(), 0);
        prop_assert_eq!(once.collection(), twice.collection());
        prop_assert_eq!(once.key_store(), twice.key_store());
    }

    /// Stop-word-only text adds no words
    #[test]
    fn stop_words_are_never_indexed(
        base in prop::collection::vec(raw_document(), 0..4),
        text in stop_word_document(),
    ) {
        let mut index = build_index(&base);
        let size_before = index.len();

        index.add(&text, Some("stops"));

        prop_assert_eq!(index.len(), size_before);
    }

    /// The size counter always equals the number of words
    #[test]
    fn size_tracks_words(docs in prop::collection::vec(raw_document(), 0..8)) {
        let mut index = build_index(&docs);
        prop_assert_eq!(index.len(), index.words().len());

        for (i, doc) in docs.iter().enumerate().step_by(2) {
            index.remove(doc, Some(&format!("base{}", i)));
            prop_assert_eq!(index.len(), index.words().len());
        }
    }

    /// Every indexed word is in normalized form
    #[test]
    fn indexed_words_are_normalized(docs in prop::collection::vec(raw_document(), 0..6)) {
        let index = build_index(&docs);
        for word in index.words() {
            prop_assert!(word.chars().count() >= 2);
            prop_assert_eq!(index.normalize(&word), word.clone());
            prop_assert!(!DEFAULT_STOP_WORDS.contains(&word.as_str()));
        }
    }
}

/// Removing every document in any order empties the collection
#[test]
fn remove_all_documents_empties_collection() {
    let docs = [
        "Instant search in Google is awesome!",
        "It will work fine after you install that patch.",
        "I bought a red car.",
        "red red red",
    ];
    let mut index = TypeaheadIndex::new();
    for (i, doc) in docs.iter().enumerate() {
        index.add(doc, Some(&format!("doc{}", i)));
    }
    for (i, doc) in docs.iter().enumerate().rev() {
        index.remove(doc, Some(&format!("doc{}", i)));
    }
    assert!(index.is_empty());
    assert_eq!(index.stats().documents, 0);
}
