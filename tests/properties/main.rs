//! Index Property Test Suite
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Mutation Invariants**
//!   add/remove round trips, clear idempotence, stop-word exclusion.
//!
//! - **Tier 2: Matching Invariants**
//!   prefix containment, ALL results contained in ANY results, scenarios.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test properties
//!
//! # More proptest cases
//! PROPTEST_CASES=2000 cargo test --test properties
//! ```

// Test utilities
mod test_utils;

// Tier 1: Mutation Invariants
mod mutation_invariants;

// Tier 2: Matching Invariants
mod matching_invariants;
