//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::acronym::AcronymIndex;
use crate::search::Completer;
use crate::session::run_session;
use crate::types::Vocabulary;

/// Build a vocabulary and its acronym index from phrases.
///
/// This is the canonical fixture used across all tests.
pub fn build_fixture(phrases: &[&str]) -> (Vocabulary, AcronymIndex) {
    let vocabulary: Vocabulary = phrases.iter().copied().collect();
    let index = AcronymIndex::build(&vocabulary);
    (vocabulary, index)
}

/// Complete one fragment with the default cap and return owned hits.
pub fn complete_strings(phrases: &[&str], fragment: &str) -> Vec<String> {
    let (vocabulary, index) = build_fixture(phrases);
    Completer::new(&vocabulary, &index)
        .complete(fragment)
        .into_vec()
}

/// Run a whole session into memory.
pub fn run_to_vec(phrases: &[&str], fragments: &[&str]) -> Vec<(String, Vec<String>)> {
    let (vocabulary, index) = build_fixture(phrases);
    let completer = Completer::new(&vocabulary, &index);
    let mut out = Vec::new();
    run_session(fragments.iter().copied(), &completer, &mut out)
        .expect("in-memory sink never fails");
    out
}

/// Generate `count` phrases that all start with `word`.
pub fn phrases_starting_with(word: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{} item{}", word, letters(i))).collect()
}

/// Letters-only suffix for generated phrases (`0 -> a`, `25 -> z`, `26 -> ba`).
fn letters(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
