// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Acronym index: initials → the phrases that spell them.
//!
//! "rate of change" and "return of capital" both collapse to `roc`. Typing
//! `ROC` should offer both, in the order the vocabulary introduced them. The
//! index is built once from the `Vocabulary` and then only read.
//!
//! **Invariant**: every phrase stored under key `A` re-derives to exactly `A`
//! through `acronym_of`. Single-word phrases have no acronym and never appear.
//!
//! **Verified by**:
//! - `prop_indexed_phrases_rederive_their_key` (tests/property.rs)
//! - `test_single_word_phrases_are_not_indexed` (below)

use crate::types::Vocabulary;
use indexmap::IndexMap;
use tracing::debug;

/// Split a phrase into words the way ingestion does: on spaces, dropping empties.
#[inline]
pub fn words(phrase: &str) -> impl Iterator<Item = &str> {
    phrase.split(' ').filter(|w| !w.is_empty())
}

/// Lower-cased first letters of every word, or `None` for fewer than two words.
pub fn acronym_of(phrase: &str) -> Option<String> {
    let mut acronym = String::new();
    let mut count = 0usize;
    for word in words(phrase) {
        if let Some(first) = word.chars().next() {
            acronym.extend(first.to_lowercase());
            count += 1;
        }
    }
    (count >= 2).then_some(acronym)
}

/// Map from acronym to phrases, in first-observed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymIndex {
    entries: IndexMap<String, Vec<String>>,
}

impl AcronymIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every multi-word phrase in the vocabulary, in enumeration order.
    pub fn build(vocabulary: &Vocabulary) -> Self {
        let mut index = Self::new();
        for phrase in vocabulary.iter() {
            index.record(phrase);
        }
        debug!(
            phrases = vocabulary.len(),
            acronyms = index.len(),
            "built acronym index"
        );
        index
    }

    /// Add a phrase under its acronym. No-op for single-word phrases.
    ///
    /// Recording the same phrase twice keeps a single entry.
    pub fn record(&mut self, phrase: &str) {
        let Some(acronym) = acronym_of(phrase) else {
            return;
        };
        debug!("{} --> {}", phrase, acronym);
        let phrases = self.entries.entry(acronym).or_default();
        if !phrases.iter().any(|p| p == phrase) {
            phrases.push(phrase.to_string());
        }
    }

    /// Phrases recorded under `acronym`, empty if none.
    pub fn lookup(&self, acronym: &str) -> &[String] {
        self.entries.get(acronym).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct acronyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(acronym, phrases)` pairs in first-observed order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
