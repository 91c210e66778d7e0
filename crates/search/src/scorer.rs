//! Relevance scoring for ANY-mode results
//!
//! A substring-frequency heuristic over the ORIGINAL document text:
//!
//! score = Σ occurrences(raw query token, document text)
//!
//! squared when the whole query equals the document text. Matching is
//! case-sensitive and not word-boundary aware. There is no length or rarity
//! normalization.

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Empty needles count as zero.
pub fn count_occurrences(haystack: &str, needle: &str) -> u64 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u64
}

/// Score a document text against a raw query.
///
/// # Example
///
/// ```
/// use typeahead_search::scorer::relevance;
///
/// assert_eq!(relevance("red car, red bus", "red"), 2);
/// assert_eq!(relevance("red car", "red car"), 4);
/// ```
pub fn relevance(text: &str, query: &str) -> u64 {
    let nb_found: u64 = query
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| count_occurrences(text, token))
        .sum();

    if query == text {
        nb_found * nb_found
    } else {
        nb_found
    }
}
