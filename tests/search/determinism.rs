//! Repeated completion must be order-stable.

use acronymic::testing::build_fixture;
use acronymic::Completer;

#[test]
fn test_repeated_complete_is_identical() {
    let phrases: Vec<String> = (0..200)
        .map(|i| format!("word{} part{} tail", i % 17, i))
        .map(|s| s.replace(|c: char| c.is_ascii_digit(), "x"))
        .collect();
    let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
    let (vocab, index) = build_fixture(&refs);
    let completer = Completer::new(&vocab, &index);

    for fragment in ["word", "WPT", "art", "part tail", "xx"] {
        let first = completer.complete(fragment);
        for _ in 0..5 {
            assert_eq!(completer.complete(fragment), first, "unstable for {}", fragment);
        }
    }
}

#[test]
fn test_rebuilt_index_gives_same_hits() {
    let phrases = ["rate of change", "return of capital", "rock on", "roc"];
    let (vocab_a, index_a) = build_fixture(&phrases);
    let (vocab_b, index_b) = build_fixture(&phrases);
    assert_eq!(index_a, index_b);
    assert_eq!(
        Completer::new(&vocab_a, &index_a).complete("RO"),
        Completer::new(&vocab_b, &index_b).complete("RO"),
    );
}
