// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match engine: one fragment in, one ranked hit list out.
//!
//! Two strategies do the finding. Acronym search is an O(1) index lookup that
//! turns `NYC` into "new york city". Containment search scans the vocabulary for
//! literal substrings and ranks word-start matches above mid-word ones. The
//! fragment's shape decides which strategy runs first; the second only fills
//! whatever room the first left.
//!
//! Everything here is a pure function of (fragment, vocabulary, index). No I/O,
//! no interior mutability, no failure mode: a fragment nobody matches just gets
//! an empty list.

pub mod containment;
pub mod merge;
pub mod shape;

pub use containment::{containment_search, contains_literal, has_word_boundary_before};
pub use merge::HitMerger;
pub use shape::{FragmentShape, Strategy};

use crate::acronym::AcronymIndex;
use crate::types::{HitList, Vocabulary, DEFAULT_MAX_HITS};
use tracing::trace;

/// Phrases recorded under `acronym`, at most `cap` of them, in index order.
pub fn acronym_search<'i>(acronym: &str, index: &'i AcronymIndex, cap: usize) -> Vec<&'i str> {
    index
        .lookup(acronym)
        .iter()
        .take(cap)
        .map(String::as_str)
        .collect()
}

/// Complete one fragment against a vocabulary and its acronym index.
///
/// Callers must not pass an empty fragment: it is a substring of everything.
pub fn complete(
    fragment: &str,
    vocabulary: &Vocabulary,
    index: &AcronymIndex,
    max_hits: usize,
) -> HitList {
    let shape = FragmentShape::classify(fragment);
    let query = shape.query_text(fragment);
    let mut merger = HitMerger::new(max_hits);

    for strategy in shape.strategies() {
        if merger.is_full() {
            break;
        }
        let cap = merger.request_size();
        match strategy {
            Strategy::Acronym => merger.merge(acronym_search(&query, index, cap)),
            Strategy::Containment => merger.merge(containment_search(&query, vocabulary, cap)),
        }
    }

    let hits = merger.finish();
    trace!(fragment, ?shape, hits = hits.len(), "completed fragment");
    hits
}

/// Read-only view over a built vocabulary and acronym index.
///
/// Cheap to copy; share one across threads freely.
#[derive(Debug, Clone, Copy)]
pub struct Completer<'a> {
    vocabulary: &'a Vocabulary,
    index: &'a AcronymIndex,
    max_hits: usize,
}

impl<'a> Completer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, index: &'a AcronymIndex) -> Self {
        Self {
            vocabulary,
            index,
            max_hits: DEFAULT_MAX_HITS,
        }
    }

    pub fn with_max_hits(mut self, max_hits: usize) -> Self {
        self.max_hits = max_hits;
        self
    }

    pub fn complete(&self, fragment: &str) -> HitList {
        complete(fragment, self.vocabulary, self.index, self.max_hits)
    }
}
