//! End-to-end completion scenarios for the match engine.

use super::common::{complete_strings, phrases_starting_with, run_to_vec, CAT_TIERS, NYC_HOMOGRAPHS};

// ============================================================================
// ACRONYMS
// ============================================================================

#[test]
fn test_all_caps_acronym_lists_homographs_in_insertion_order() {
    let hits = complete_strings(NYC_HOMOGRAPHS, "NYC");
    assert_eq!(hits, vec!["new york city", "not yet confirmed"]);
}

#[test]
fn test_acronym_order_follows_vocabulary_not_alphabet() {
    let hits = complete_strings(&["not yet confirmed", "new york city"], "NYC");
    assert_eq!(hits, vec!["not yet confirmed", "new york city"]);
}

#[test]
fn test_lowercase_acronym_still_found_after_containment() {
    let hits = complete_strings(&["rate of change", "return of capital"], "roc");
    assert_eq!(hits, vec!["rate of change", "return of capital"]);
}

// ============================================================================
// CONTAINMENT
// ============================================================================

#[test]
fn test_boundary_match_outranks_interior_match() {
    let hits = complete_strings(CAT_TIERS, "cat");
    assert_eq!(hits, vec!["the cat sat", "concatenate strings"]);
}

#[test]
fn test_boundary_outranks_interior_regardless_of_vocabulary_order() {
    let hits = complete_strings(&["concatenate strings", "the cat sat"], "cat");
    assert_eq!(hits, vec!["the cat sat", "concatenate strings"]);
}

#[test]
fn test_multi_word_fragment_matches_literal_substring() {
    let hits = complete_strings(&["new york city", "york city"], "york ci");
    assert_eq!(hits, vec!["new york city", "york city"]);
}

// ============================================================================
// CAPS AND MISSES
// ============================================================================

#[test]
fn test_fifteen_boundary_matches_cap_at_ten() {
    let phrases = phrases_starting_with("ab", 15);
    let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
    let hits = complete_strings(&refs, "ab");
    assert_eq!(hits.len(), 10);
    assert_eq!(hits, phrases[..10].to_vec());
}

#[test]
fn test_single_letter_fragment_is_still_capped() {
    let phrases = phrases_starting_with("a", 15);
    let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
    assert_eq!(complete_strings(&refs, "a").len(), 10);
}

#[test]
fn test_no_match_produces_no_output_pair() {
    let out = run_to_vec(&["new york city", "the cat sat"], &["abc"]);
    assert!(out.is_empty());
}

#[test]
fn test_case_matters_for_lowercase_vocabulary() {
    // Mixed-case tokens are folded only because they carry a capital.
    assert_eq!(complete_strings(&["the cat sat"], "Cat"), vec!["the cat sat"]);
    // Multi-word fragments are never folded.
    assert!(complete_strings(&["the cat sat"], "The cat").is_empty());
}
