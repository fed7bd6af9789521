// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the acronymic command-line interface.
//!
//! Two subcommands: `complete` runs a whole input file (dictionary plus
//! fragments) and writes every non-empty hit list, `query` completes ad-hoc
//! fragments against an input file's dictionary and prints them.

pub mod display;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "acronymic",
    about = "Phrase completion by substring and acronym initials",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output encoding for hit lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[fragment]` header followed by one hit per line
    Text,
    /// One JSON object per fragment
    Json,
}

/// Flags shared by every subcommand that reads an input file.
#[derive(clap::Args, Debug)]
pub struct SessionArgs {
    /// Input file: dictionary lines, breaker, fragment lines, breaker
    pub input: PathBuf,

    /// JSON config file (breaker, max_hits, start_marker, end_marker)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of hits per fragment
    #[arg(short = 'n', long)]
    pub max_hits: Option<usize>,

    /// Line separating the input sections
    #[arg(long)]
    pub breaker: Option<String>,

    /// Output encoding
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Complete every fragment in an input file
    Complete {
        #[command(flatten)]
        session: SessionArgs,

        /// Output file (created or truncated); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Marker written before each fragment
        #[arg(long)]
        start: Option<String>,

        /// Marker written after each fragment
        #[arg(long)]
        end: Option<String>,

        /// Evaluate fragments on the rayon thread pool
        #[arg(long)]
        parallel: bool,

        /// Print a summary box to stderr when done
        #[arg(long)]
        stats: bool,
    },

    /// Complete ad-hoc fragments against an input file's dictionary
    Query {
        #[command(flatten)]
        session: SessionArgs,

        /// Fragments to complete
        #[arg(required = true)]
        fragments: Vec<String>,
    },
}
