// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase completion by literal substring and acronym initials.
//!
//! Given a vocabulary of phrases and a list of fragments, this crate returns,
//! per fragment, up to ten phrases that plausibly complete it: either the
//! fragment occurs literally inside the phrase, or the fragment spells the
//! phrase's initials (`NYC` → "new york city").
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  input.rs   │────▶│  types.rs    │────▶│ acronym.rs  │────▶│  search/    │
//! │ (parse,     │     │ (Vocabulary, │     │ (Acronym-   │     │ (complete,  │
//! │  validate)  │     │  HitList)    │     │  Index)     │     │  Completer) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                                     │
//!                                                                     ▼
//!                     ┌──────────────┐                         ┌─────────────┐
//!                     │  output.rs   │◀────────────────────────│ session.rs  │
//!                     │ (Text/Json)  │                         │ (run_session)│
//!                     └──────────────┘                         └─────────────┘
//! ```
//!
//! # Ranking
//!
//! | Fragment shape        | First strategy | Then            |
//! |-----------------------|----------------|-----------------|
//! | single token, capital | acronym        | containment     |
//! | single token, lower   | containment    | acronym         |
//! | several words         | containment    | -               |
//!
//! Within containment, phrases where the fragment starts a word always outrank
//! phrases where it only appears mid-word.
//!
//! # Usage
//!
//! ```
//! use acronymic::{AcronymIndex, Completer, Vocabulary};
//!
//! let vocab: Vocabulary = ["new york city", "not yet confirmed"].into_iter().collect();
//! let index = AcronymIndex::build(&vocab);
//! let hits = Completer::new(&vocab, &index).complete("NYC");
//! assert_eq!(hits.as_slice(), &["new york city", "not yet confirmed"]);
//! ```

pub mod acronym;
pub mod config;
pub mod input;
pub mod output;
pub mod search;
pub mod session;
pub mod types;

#[doc(hidden)]
pub mod testing;

pub use acronym::{acronym_of, AcronymIndex};
pub use config::{Config, ConfigError, ConfigOverrides};
pub use input::{
    parse_input, parse_vocabulary, read_input_file, read_vocabulary_file, validate_line,
    CompletionInput, InputError, LineRejection,
};
pub use output::{JsonSink, TextSink};
pub use search::{complete, Completer, FragmentShape, Strategy};
pub use session::{run_session, CompletionSink, SessionStats};
#[cfg(feature = "parallel")]
pub use session::run_session_parallel;
pub use types::{HitList, Vocabulary, DEFAULT_MAX_HITS, MAX_WORD_LEN, MIN_FRAGMENT_LEN};
