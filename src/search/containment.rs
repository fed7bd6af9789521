// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Containment search: literal substring matches, split into two tiers.
//!
//! "cat" appears in both "the cat sat" and "concatenate strings", but only the
//! first one has a word that *starts* with it. Boundary matches (start of the
//! phrase, or right after whitespace) always rank above interior matches,
//! whatever order the vocabulary enumerates them in.
//!
//! Matching is plain `str` containment. No pattern engine is involved, so a
//! needle like `a.b` or `(x` means exactly those characters.

use crate::types::Vocabulary;

/// True iff `needle` occurs anywhere in `haystack`.
#[inline]
pub fn contains_literal(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// True iff `needle` occurs at index 0 or immediately after a whitespace character.
///
/// Every boundary position is checked, not just the first occurrence: in
/// "concat cat" the first "cat" is mid-word but the second starts a word.
pub fn has_word_boundary_before(haystack: &str, needle: &str) -> bool {
    if haystack.starts_with(needle) {
        return true;
    }
    haystack
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .any(|(i, c)| haystack[i + c.len_utf8()..].starts_with(needle))
}

/// Phrases containing `word`, boundary tier first, at most `cap` of them.
///
/// Each tier keeps vocabulary enumeration order. The scan stops early once the
/// boundary tier alone fills `cap`.
pub fn containment_search<'v>(word: &str, vocabulary: &'v Vocabulary, cap: usize) -> Vec<&'v str> {
    if cap == 0 {
        return Vec::new();
    }

    let mut boundary = Vec::new();
    let mut interior = Vec::new();

    for phrase in vocabulary.iter() {
        if !contains_literal(phrase, word) {
            continue;
        }
        if has_word_boundary_before(phrase, word) {
            boundary.push(phrase);
            if boundary.len() == cap {
                return boundary;
            }
        } else if interior.len() < cap {
            interior.push(phrase);
        }
    }

    let room = cap - boundary.len();
    boundary.extend(interior.into_iter().take(room));
    boundary
}
