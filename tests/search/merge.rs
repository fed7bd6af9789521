//! Merging strategy results: caps and duplicates.

use acronymic::testing::build_fixture;
use acronymic::{complete, Completer};
use std::collections::HashSet;

#[test]
fn test_duplicate_across_strategies_kept_once() {
    // "ab bx" is both a literal match for "ab" and the expansion of acronym "ab".
    let (vocab, index) = build_fixture(&["ab bx"]);
    let hits = complete("ab", &vocab, &index, 10);
    assert_eq!(hits.into_vec(), vec!["ab bx"]);
}

#[test]
fn test_duplicates_do_not_shorten_the_list() {
    // Containment finds "ab bx" first; acronym search finds it again plus two more.
    let (vocab, index) = build_fixture(&["ab bx", "a b", "a bee"]);
    let hits = complete("ab", &vocab, &index, 3);
    assert_eq!(hits.into_vec(), vec!["ab bx", "a b", "a bee"]);
}

#[test]
fn test_custom_cap() {
    let (vocab, index) = build_fixture(&["cat a", "cat b", "cat c", "cat d"]);
    let completer = Completer::new(&vocab, &index).with_max_hits(3);
    let hits = completer.complete("cat");
    assert_eq!(hits.len(), 3);
    assert_eq!(hits.cap(), 3);
}

#[test]
fn test_no_duplicates_in_large_overlap() {
    let phrases: Vec<String> = (0..30)
        .map(|i| format!("ab {}", ["x", "y", "z"][i % 3].repeat(i / 3 + 1)))
        .collect();
    let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
    let (vocab, index) = build_fixture(&refs);

    for fragment in ["ab", "AB", "AX", "ax"] {
        let hits = complete(fragment, &vocab, &index, 10);
        let unique: HashSet<&str> = hits.iter().collect();
        assert_eq!(unique.len(), hits.len(), "duplicate in hits for {}", fragment);
        assert!(hits.len() <= 10);
    }
}
