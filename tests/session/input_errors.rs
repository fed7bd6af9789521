//! Structural input failures.

use acronymic::{parse_input, read_input_file, Config, InputError};
use std::path::Path;

#[test]
fn test_missing_file() {
    let err = read_input_file(Path::new("/definitely/not/here.txt"), &Config::default()).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.txt"));
}

#[test]
fn test_no_breaker_at_all() {
    let err = parse_input("just words\nmore words\n", &Config::default()).unwrap_err();
    assert!(matches!(err, InputError::MissingBreaker { found: 0, .. }));
}

#[test]
fn test_dictionary_of_only_invalid_lines() {
    let err = parse_input("abc1\nx-y\n===\nab\n===\n", &Config::default()).unwrap_err();
    assert!(matches!(err, InputError::EmptyDictionary));
}

#[test]
fn test_fragments_all_too_short() {
    let err = parse_input("abc\n===\na\nb\n===\n", &Config::default()).unwrap_err();
    assert!(matches!(err, InputError::EmptyFragments));
}

#[test]
fn test_breaker_must_match_whole_line() {
    // "=== " is not the breaker, and fails validation as a phrase.
    let err = parse_input("abc\n=== \nab\n===\n", &Config::default()).unwrap_err();
    assert!(matches!(err, InputError::MissingBreaker { found: 1, .. }));
}
