//! Tier 2: Matching Invariants
//!
//! Prefix containment, ALL/ANY monotonicity, and fixed scenarios.

use crate::test_utils::*;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Any prefix (2+ chars) of an indexed word finds every key of that word
    #[test]
    fn prefix_containment(
        docs in prop::collection::vec(raw_document(), 1..6),
        pick in any::<prop::sample::Index>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let index = build_index(&docs);
        let words = index.words();
        prop_assume!(!words.is_empty());

        let word = &words[pick.index(words.len())];
        let len = 2 + cut.index(word.len() - 1);
        let prefix = &word[..len];
        prop_assume!(index.normalize(prefix) == prefix);

        let results: HashSet<String> = index.search(prefix, MatchMode::All).into_iter().collect();
        for key in &index.word_entry(word).unwrap().keys {
            prop_assert!(results.contains(key), "{} missing for prefix {}", key, prefix);
        }
    }

    /// ALL results are always a subset of ANY results
    #[test]
    fn all_is_subset_of_any(
        docs in prop::collection::vec(raw_document(), 0..8),
        query in raw_document(),
    ) {
        let index = build_index(&docs);
        let any: HashSet<String> = index.search(&query, MatchMode::Any).into_iter().collect();
        for key in index.search(&query, MatchMode::All) {
            prop_assert!(any.contains(&key));
        }
    }

    /// ANY results are sorted by relevance, highest first
    #[test]
    fn any_results_sorted_by_score(
        docs in prop::collection::vec(raw_document(), 0..8),
        query in raw_document(),
    ) {
        let index = build_index(&docs);
        let results = index.search_scored(&query, MatchMode::Any);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// No key appears twice in a result
    #[test]
    fn results_have_unique_keys(
        docs in prop::collection::vec(raw_document(), 0..8),
        query in raw_document(),
    ) {
        let index = build_index(&docs);
        for mode in [MatchMode::All, MatchMode::Any] {
            let results = index.search(&query, mode);
            let unique: HashSet<&String> = results.iter().collect();
            prop_assert_eq!(unique.len(), results.len());
        }
    }
}

#[test]
fn scenario_prefix_then_remove() {
    init_tracing();
    let mut index = TypeaheadIndex::new();
    index.add("Instant search in Google is awesome!", Some("quote"));
    index.add("It will work fine after you install that patch.", Some("instruction"));
    assert_eq!(index.search("inst", MatchMode::All), vec!["quote", "instruction"]);

    index.remove("Instant search in Google is awesome!", Some("quote"));
    assert_eq!(index.search("inst", MatchMode::All), vec!["instruction"]);
}

#[test]
fn scenario_all_mode_two_words() {
    let mut index = TypeaheadIndex::new();
    index.add("I bought a red car.", Some("mid-life crisis"));
    assert_eq!(index.search("red car", MatchMode::All), vec!["mid-life crisis"]);
    assert!(index.search("red bus", MatchMode::All).is_empty());
}
