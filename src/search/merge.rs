// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strategy results merged into a single capped, duplicate-free hit list.
//!
//! A phrase can be found twice for one fragment: "ab bx" is both the expansion
//! of `ab` and a literal match for "ab". It should still appear once, at the
//! rank of whichever strategy found it first.
//!
//! **Invariant**: each phrase appears at most once, and `len() ≤ cap`.
//!
//! **Verified by**:
//! - `prop_hit_list_never_exceeds_cap` (tests/property.rs)
//! - `test_duplicate_across_strategies_kept_once` (tests/search/merge.rs)

use crate::types::HitList;

/// Merges strategy outputs in priority order.
///
/// Earlier merges outrank later ones. Each strategy is handed the full cap
/// so that duplicates dropped here never leave the list short.
pub struct HitMerger {
    hits: HitList,
}

impl HitMerger {
    pub fn new(cap: usize) -> Self {
        Self {
            hits: HitList::with_cap(cap),
        }
    }

    /// How many phrases a strategy should return.
    pub fn request_size(&self) -> usize {
        self.hits.cap()
    }

    pub fn is_full(&self) -> bool {
        self.hits.is_full()
    }

    /// Append a strategy's results, skipping duplicates, until full.
    pub fn merge<'a>(&mut self, results: impl IntoIterator<Item = &'a str>) {
        self.hits.extend_from(results);
    }

    pub fn finish(self) -> HitList {
        self.hits
    }
}
