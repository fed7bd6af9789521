// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a completion session.
//!
//! Two containers hold everything the engine reads: a `Vocabulary` of known
//! phrases and the ordered set of query fragments. Both are filled once during
//! ingestion and never touched again, so the query phase can share them freely
//! (including across rayon workers).
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Vocabulary**: phrases are stored lower-cased and unique. Inserting the same
//!   phrase twice is a no-op; the first insertion fixes its enumeration position.
//!
//! - **HitList**: `len() ≤ cap` and no phrase appears twice. Both are enforced by
//!   `HitList::push`, so callers can't get it wrong.

use indexmap::IndexSet;
use serde::Serialize;

// =============================================================================
// LIMITS
// =============================================================================

/// Default maximum number of hits returned for one fragment.
pub const DEFAULT_MAX_HITS: usize = 10;

/// Longest word (in characters) ingestion accepts.
pub const MAX_WORD_LEN: usize = 50;

/// Shortest fragment ingestion submits to the engine.
pub const MIN_FRAGMENT_LEN: usize = 2;

// =============================================================================
// VOCABULARY
// =============================================================================

/// The set of known phrases, case-normalized.
///
/// Backed by an `IndexSet` so enumeration follows first-insertion order. That
/// order is what containment search walks, which keeps hit lists stable across
/// runs instead of depending on a hasher seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    phrases: IndexSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a phrase, lower-casing it first.
    ///
    /// Returns `false` when the normalized phrase was already present.
    pub fn insert(&mut self, phrase: &str) -> bool {
        self.phrases.insert(phrase.to_lowercase())
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    /// Phrases in enumeration (first-insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.phrases.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for phrase in iter {
            vocabulary.insert(phrase.as_ref());
        }
        vocabulary
    }
}

// =============================================================================
// HIT LIST
// =============================================================================

/// Ranked, size-capped completions for one fragment.
///
/// Created fresh per fragment and handed to a sink; never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HitList {
    #[serde(skip)]
    cap: usize,
    hits: Vec<String>,
}

impl HitList {
    /// Empty list that will hold at most `cap` phrases.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap,
            hits: Vec::with_capacity(cap.min(DEFAULT_MAX_HITS)),
        }
    }

    /// Append a phrase unless the list is full or already holds it.
    ///
    /// Returns `true` if the phrase was added.
    pub fn push(&mut self, phrase: &str) -> bool {
        if self.is_full() || self.contains(phrase) {
            return false;
        }
        self.hits.push(phrase.to_string());
        true
    }

    /// Append phrases in order until the list fills up.
    pub fn extend_from<'a>(&mut self, phrases: impl IntoIterator<Item = &'a str>) {
        for phrase in phrases {
            if self.is_full() {
                break;
            }
            self.push(phrase);
        }
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.hits.iter().any(|hit| hit == phrase)
    }

    pub fn is_full(&self) -> bool {
        self.hits.len() >= self.cap
    }

    /// How many more phrases fit.
    pub fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.hits.len())
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.hits.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.hits
    }

    pub fn into_vec(self) -> Vec<String> {
        self.hits
    }
}

impl Default for HitList {
    fn default() -> Self {
        Self::with_cap(DEFAULT_MAX_HITS)
    }
}
