// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session driver: every fragment, in order, through the match engine.
//!
//! The driver owns nothing. Vocabulary, index and sink all come in as
//! arguments, so the same session runs against a file, stdout or a `Vec` in a
//! test. Fragments with no hits produce no output at all.
//!
//! With the `parallel` feature, `run_session_parallel` spreads matching over
//! rayon workers and then emits in the original order, so its output is
//! byte-identical to the sequential driver's.

use crate::search::Completer;
use crate::types::HitList;
use std::io;
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Receives `(fragment, hits)` pairs. Only called for non-empty hit lists.
pub trait CompletionSink {
    fn emit(&mut self, fragment: &str, hits: &HitList) -> io::Result<()>;

    /// Called once after the last fragment.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory sink, mostly for tests and the `query` command.
impl CompletionSink for Vec<(String, Vec<String>)> {
    fn emit(&mut self, fragment: &str, hits: &HitList) -> io::Result<()> {
        self.push((fragment.to_string(), hits.as_slice().to_vec()));
        Ok(())
    }
}

impl<S: CompletionSink + ?Sized> CompletionSink for &mut S {
    fn emit(&mut self, fragment: &str, hits: &HitList) -> io::Result<()> {
        (**self).emit(fragment, hits)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Fragments evaluated.
    pub fragments: usize,
    /// Fragments that produced at least one hit.
    pub completed: usize,
    /// Total hits emitted.
    pub hits: usize,
}

impl SessionStats {
    fn record(&mut self, hits: &HitList) {
        self.fragments += 1;
        if !hits.is_empty() {
            self.completed += 1;
            self.hits += hits.len();
        }
    }
}

/// Complete each fragment in order and hand non-empty results to `sink`.
pub fn run_session<'f, S: CompletionSink>(
    fragments: impl IntoIterator<Item = &'f str>,
    completer: &Completer<'_>,
    mut sink: S,
) -> io::Result<SessionStats> {
    info!("start autocompleting");
    let mut stats = SessionStats::default();

    for fragment in fragments {
        let hits = completer.complete(fragment);
        stats.record(&hits);
        if !hits.is_empty() {
            sink.emit(fragment, &hits)?;
        }
    }

    sink.finish()?;
    info!(
        fragments = stats.fragments,
        completed = stats.completed,
        "autocompleting is finished"
    );
    Ok(stats)
}

/// Same as `run_session`, with matching spread over the rayon pool.
///
/// Emission still happens on the calling thread, in fragment order.
#[cfg(feature = "parallel")]
pub fn run_session_parallel<S: CompletionSink>(
    fragments: &[&str],
    completer: &Completer<'_>,
    mut sink: S,
) -> io::Result<SessionStats> {
    info!(fragments = fragments.len(), "start autocompleting (parallel)");
    let results: Vec<HitList> = fragments
        .par_iter()
        .map(|fragment| completer.complete(fragment))
        .collect();

    let mut stats = SessionStats::default();
    for (fragment, hits) in fragments.iter().zip(&results) {
        stats.record(hits);
        if !hits.is_empty() {
            sink.emit(fragment, hits)?;
        }
    }

    sink.finish()?;
    info!(
        fragments = stats.fragments,
        completed = stats.completed,
        "autocompleting is finished"
    );
    Ok(stats)
}
