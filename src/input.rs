// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input parsing: dictionary section, breaker, fragment section, breaker.
//!
//! ```text
//! new york city        ┐
//! rate of change       │ dictionary (lower-cased, deduplicated)
//! return of capital    ┘
//! ===
//! NYC                  ┐
//! roc                  │ fragments (kept raw, deduplicated)
//! ===                  ┘
//! anything after the second breaker is ignored
//! ```
//!
//! Every non-breaker line must be Latin-letter words of at most 50 characters.
//! A line that fails validation is dropped whole; it never half-reaches the
//! engine. Fragments shorter than two characters are dropped too, since an
//! empty-ish fragment matches everything.

use crate::config::Config;
use crate::types::{Vocabulary, MAX_WORD_LEN, MIN_FRAGMENT_LEN};
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Why an input file could not be used.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the structure of input file is incorrect: expected two '{breaker}' lines, found {found}")]
    MissingBreaker { breaker: String, found: usize },
    #[error("the dictionary list is empty, check dictionary part of input file")]
    EmptyDictionary,
    #[error("the autocomplete list is empty, check autocomplete part of input file")]
    EmptyFragments,
}

/// Why a single line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRejection {
    /// No words at all.
    Blank,
    /// A word contains something other than `a-z` / `A-Z`.
    IllegalCharacter { word: String },
    /// A word is longer than `MAX_WORD_LEN`.
    WordTooLong { word: String, len: usize },
}

/// Check that every space-separated word is Latin letters only and short enough.
pub fn validate_line(line: &str) -> Result<(), LineRejection> {
    let mut any = false;
    for word in crate::acronym::words(line) {
        any = true;
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(LineRejection::IllegalCharacter {
                word: word.to_string(),
            });
        }
        if word.len() > MAX_WORD_LEN {
            return Err(LineRejection::WordTooLong {
                word: word.to_string(),
                len: word.len(),
            });
        }
    }
    if any {
        Ok(())
    } else {
        Err(LineRejection::Blank)
    }
}

/// Everything a session needs, as read from one input.
#[derive(Debug, Clone, Default)]
pub struct CompletionInput {
    pub vocabulary: Vocabulary,
    /// Raw fragments in first-seen order.
    pub fragments: IndexSet<String>,
}

impl CompletionInput {
    pub fn fragments(&self) -> impl Iterator<Item = &str> + '_ {
        self.fragments.iter().map(String::as_str)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Dictionary,
    Fragments,
}

/// Parse the two-section input format.
pub fn parse_input(text: &str, config: &Config) -> Result<CompletionInput, InputError> {
    let mut input = CompletionInput::default();
    let mut section = Section::Dictionary;
    let mut breakers = 0usize;

    info!("reading dictionary strings");
    for line in text.lines() {
        if line == config.breaker {
            breakers += 1;
            if section == Section::Dictionary {
                section = Section::Fragments;
                info!("reading autocomplete strings");
                continue;
            }
            break;
        }

        if let Err(reason) = validate_line(line) {
            debug!(line, ?reason, "rejected line");
            continue;
        }

        match section {
            Section::Dictionary => {
                input.vocabulary.insert(line);
                debug!(line, "dictionary");
            }
            Section::Fragments => {
                if line.len() >= MIN_FRAGMENT_LEN {
                    input.fragments.insert(line.to_string());
                    debug!(line, "fragment");
                } else {
                    debug!(line, "fragment too short");
                }
            }
        }
    }

    if breakers < 2 {
        return Err(InputError::MissingBreaker {
            breaker: config.breaker.clone(),
            found: breakers,
        });
    }
    if input.vocabulary.is_empty() {
        return Err(InputError::EmptyDictionary);
    }
    if input.fragments.is_empty() {
        return Err(InputError::EmptyFragments);
    }

    info!(
        phrases = input.vocabulary.len(),
        fragments = input.fragments.len(),
        "structure of input file is correct"
    );
    Ok(input)
}

/// Read only the dictionary section: lines up to the first breaker, or all
/// lines when there is none. Used for ad-hoc queries.
pub fn parse_vocabulary(text: &str, config: &Config) -> Result<Vocabulary, InputError> {
    let vocabulary: Vocabulary = text
        .lines()
        .take_while(|line| *line != config.breaker)
        .filter(|line| validate_line(line).is_ok())
        .collect();
    if vocabulary.is_empty() {
        return Err(InputError::EmptyDictionary);
    }
    Ok(vocabulary)
}

/// Read and parse an input file.
pub fn read_input_file(path: &Path, config: &Config) -> Result<CompletionInput, InputError> {
    info!(path = %path.display(), "read input file");
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_input(&text, config)
}

/// Read an input file's dictionary section only.
pub fn read_vocabulary_file(path: &Path, config: &Config) -> Result<Vocabulary, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vocabulary(&text, config)
}
