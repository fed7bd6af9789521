// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fragment classification: which strategies run, and in what order.
//!
//! | Shape       | Example  | Query text   | Strategies                 |
//! |-------------|----------|--------------|----------------------------|
//! | `AllUpper`  | `NYC`    | lower-cased  | acronym → containment      |
//! | `Token`     | `cat`    | as-is        | containment → acronym      |
//! | `MultiWord` | `new yo` | as-is        | containment                |
//!
//! Acronyms never contain spaces, so a multi-word fragment can only ever be a
//! literal substring. A single token with any capital letter is read as
//! "probably initials"; everything else is read as "probably literal".

use std::borrow::Cow;

/// One search strategy of the match engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exact lookup in the acronym index.
    Acronym,
    /// Literal substring scan over the vocabulary, boundary tier first.
    Containment,
}

/// How a fragment is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentShape {
    /// No spaces and at least one upper-case Latin letter.
    AllUpper,
    /// No spaces, no upper-case letters.
    Token,
    /// Contains a space.
    MultiWord,
}

impl FragmentShape {
    pub fn classify(fragment: &str) -> Self {
        if fragment.contains(' ') {
            FragmentShape::MultiWord
        } else if fragment.bytes().any(|b| b.is_ascii_uppercase()) {
            FragmentShape::AllUpper
        } else {
            FragmentShape::Token
        }
    }

    /// Strategies to run, highest priority first.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            FragmentShape::AllUpper => &[Strategy::Acronym, Strategy::Containment],
            FragmentShape::Token => &[Strategy::Containment, Strategy::Acronym],
            FragmentShape::MultiWord => &[Strategy::Containment],
        }
    }

    /// Text the strategies search with. Only `AllUpper` is case-folded.
    pub fn query_text(self, fragment: &str) -> Cow<'_, str> {
        match self {
            FragmentShape::AllUpper => Cow::Owned(fragment.to_lowercase()),
            FragmentShape::Token | FragmentShape::MultiWord => Cow::Borrowed(fragment),
        }
    }
}
