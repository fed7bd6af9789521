// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the match engine.
//!
//! Random vocabularies and fragments, including ones ingestion would reject.
//! The engine is total: it must never panic, never exceed the cap, never
//! repeat a phrase, and never return a phrase that matches by neither strategy.

#![no_main]

use acronymic::{acronym_of, complete, AcronymIndex, Vocabulary};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
struct Case {
    phrases: Vec<String>,
    fragment: String,
    cap: u8,
}

fuzz_target!(|case: Case| {
    if case.fragment.is_empty() {
        return;
    }
    let vocabulary: Vocabulary = case.phrases.iter().take(64).collect();
    let index = AcronymIndex::build(&vocabulary);
    let cap = usize::from(case.cap % 16);

    let hits = complete(&case.fragment, &vocabulary, &index, cap);

    // INVARIANT 1: bounded by cap
    assert!(hits.len() <= cap);

    // INVARIANT 2: no duplicates
    let unique: HashSet<&str> = hits.iter().collect();
    assert_eq!(unique.len(), hits.len());

    // INVARIANT 3: every hit is explained by one of the strategies
    let lowered = case.fragment.to_lowercase();
    for hit in hits.iter() {
        let literal = hit.contains(case.fragment.as_str()) || hit.contains(lowered.as_str());
        let acronym = acronym_of(hit).is_some_and(|a| a == case.fragment || a == lowered);
        assert!(literal || acronym, "unexplained hit {:?} for {:?}", hit, case.fragment);
    }
});
