// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for input parsing.
//!
//! Arbitrary text through `parse_input` must either fail cleanly or produce a
//! vocabulary and fragment set that already satisfy every ingestion rule.

#![no_main]

use acronymic::{parse_input, validate_line, Config, MIN_FRAGMENT_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let Ok(input) = parse_input(&text, &Config::default()) else {
        return;
    };

    // INVARIANT 1: both sections are non-empty on success
    assert!(!input.vocabulary.is_empty());
    assert!(!input.fragments.is_empty());

    // INVARIANT 2: every phrase is valid and lower-cased
    for phrase in input.vocabulary.iter() {
        assert!(validate_line(phrase).is_ok(), "invalid phrase {:?}", phrase);
        assert_eq!(phrase, phrase.to_lowercase());
    }

    // INVARIANT 3: every fragment is valid and long enough
    for fragment in input.fragments() {
        assert!(validate_line(fragment).is_ok(), "invalid fragment {:?}", fragment);
        assert!(fragment.len() >= MIN_FRAGMENT_LEN);
    }
});
