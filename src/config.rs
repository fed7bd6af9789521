// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session configuration: section breaker, hit cap and output markers.
//!
//! Every field has a default, so an empty `{}` (or no file at all) gives the
//! classic behaviour: `===` between sections, ten hits, `[fragment]` headers.
//! CLI flags are applied on top with `Config::with_overrides`.

use crate::types::DEFAULT_MAX_HITS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_hits must be at least 1")]
    ZeroMaxHits,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Line separating the dictionary section from the fragment section.
    pub breaker: String,
    /// Maximum hits per fragment.
    pub max_hits: usize,
    /// Printed before the fragment in text output.
    pub start_marker: String,
    /// Printed after the fragment in text output.
    pub end_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breaker: "===".to_string(),
            max_hits: DEFAULT_MAX_HITS,
            start_marker: "[".to_string(),
            end_marker: "]".to_string(),
        }
    }
}

/// Optional per-field overrides, typically from CLI flags.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub breaker: Option<String>,
    pub max_hits: Option<usize>,
    pub start_marker: Option<String>,
    pub end_marker: Option<String>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(breaker) = overrides.breaker {
            self.breaker = breaker;
        }
        if let Some(max_hits) = overrides.max_hits {
            self.max_hits = max_hits;
        }
        if let Some(start) = overrides.start_marker {
            self.start_marker = start;
        }
        if let Some(end) = overrides.end_marker {
            self.end_marker = end;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_hits == 0 {
            return Err(ConfigError::ZeroMaxHits);
        }
        Ok(self)
    }
}
