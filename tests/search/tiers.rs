//! Boundary vs. interior tier placement.

use acronymic::search::{containment_search, has_word_boundary_before};
use acronymic::Vocabulary;

#[test]
fn test_phrase_start_is_a_boundary() {
    assert!(has_word_boundary_before("catalog", "cat"));
}

#[test]
fn test_any_whitespace_counts_as_boundary() {
    assert!(has_word_boundary_before("the  cat", "cat"));
    assert!(has_word_boundary_before("the\tcat", "cat"));
}

#[test]
fn test_only_the_boundary_occurrence_needs_to_exist() {
    // First occurrence is mid-word, the second starts a word.
    assert!(has_word_boundary_before("bobcat cathedral", "cat"));
    assert!(!has_word_boundary_before("bobcat wildcat", "cat"));
}

#[test]
fn test_tiers_keep_enumeration_order_within_tier() {
    let vocab: Vocabulary = ["wildcat", "cat b", "bobcat", "cat a"].into_iter().collect();
    let hits = containment_search("cat", &vocab, 10);
    assert_eq!(hits, vec!["cat b", "cat a", "wildcat", "bobcat"]);
}

#[test]
fn test_interior_tier_only_fills_leftover_room() {
    let vocab: Vocabulary = ["wildcat", "cat b", "bobcat", "cat a"].into_iter().collect();
    assert_eq!(containment_search("cat", &vocab, 3), vec!["cat b", "cat a", "wildcat"]);
    assert_eq!(containment_search("cat", &vocab, 2), vec!["cat b", "cat a"]);
}

#[test]
fn test_no_containment_means_no_tier() {
    let vocab: Vocabulary = ["dog", "horse"].into_iter().collect();
    assert!(containment_search("cat", &vocab, 10).is_empty());
}
