// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

#[cfg(feature = "parallel")]
use acronymic::run_session_parallel;
use acronymic::{
    read_input_file, read_vocabulary_file, run_session, validate_line, AcronymIndex, Completer,
    CompletionInput, CompletionSink, Config, ConfigOverrides, JsonSink, SessionStats, TextSink,
    MIN_FRAGMENT_LEN,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands, OutputFormat, SessionArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Complete {
            session,
            output,
            start,
            end,
            parallel,
            stats,
        } => run_complete(session, output, start, end, parallel, stats),
        Commands::Query { session, fragments } => run_query(session, &fragments),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &SessionArgs, start: Option<String>, end: Option<String>) -> Result<Config> {
    let base = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let overrides = ConfigOverrides {
        breaker: args.breaker.clone(),
        max_hits: args.max_hits,
        start_marker: start,
        end_marker: end,
    };
    Ok(base.with_overrides(overrides)?)
}

fn run_complete(
    args: SessionArgs,
    output: Option<PathBuf>,
    start: Option<String>,
    end: Option<String>,
    parallel: bool,
    show_stats: bool,
) -> Result<()> {
    let config = load_config(&args, start, end)?;
    let input = read_input_file(&args.input, &config)?;
    let index = AcronymIndex::build(&input.vocabulary);
    let completer = Completer::new(&input.vocabulary, &index).with_max_hits(config.max_hits);

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let stats = match args.format {
        OutputFormat::Text => {
            complete_into(&input, &completer, TextSink::new(writer, &config), parallel)
        }
        OutputFormat::Json => complete_into(&input, &completer, JsonSink::new(writer), parallel),
    }
    .context("Failed to write completions")?;

    if show_stats {
        eprintln!("{}", display::section_top("Summary"));
        eprintln!("{}", display::stat_row("phrases", input.vocabulary.len()));
        eprintln!("{}", display::stat_row("acronyms", index.len()));
        eprintln!("{}", display::stat_row("fragments", stats.fragments));
        eprintln!("{}", display::stat_row("fragments with hits", stats.completed));
        eprintln!("{}", display::stat_row("hits written", stats.hits));
        eprintln!("{}", display::section_bot());
    }
    Ok(())
}

fn complete_into<S: CompletionSink>(
    input: &CompletionInput,
    completer: &Completer<'_>,
    sink: S,
    parallel: bool,
) -> io::Result<SessionStats> {
    if parallel {
        complete_parallel(input, completer, sink)
    } else {
        run_session(input.fragments(), completer, sink)
    }
}

#[cfg(feature = "parallel")]
fn complete_parallel<S: CompletionSink>(
    input: &CompletionInput,
    completer: &Completer<'_>,
    sink: S,
) -> io::Result<SessionStats> {
    let fragments: Vec<&str> = input.fragments().collect();
    run_session_parallel(&fragments, completer, sink)
}

#[cfg(not(feature = "parallel"))]
fn complete_parallel<S: CompletionSink>(
    input: &CompletionInput,
    completer: &Completer<'_>,
    sink: S,
) -> io::Result<SessionStats> {
    tracing::warn!("built without the `parallel` feature; running sequentially");
    run_session(input.fragments(), completer, sink)
}

fn run_query(args: SessionArgs, fragments: &[String]) -> Result<()> {
    let config = load_config(&args, None, None)?;
    let vocabulary = read_vocabulary_file(&args.input, &config)?;
    let index = AcronymIndex::build(&vocabulary);
    let completer = Completer::new(&vocabulary, &index).with_max_hits(config.max_hits);
    let fragments: Vec<&str> = fragments
        .iter()
        .map(String::as_str)
        .filter(|fragment| accept_fragment(fragment))
        .collect();

    match args.format {
        OutputFormat::Json => {
            let sink = JsonSink::new(BufWriter::new(io::stdout().lock()));
            run_session(fragments.iter().copied(), &completer, sink)
                .context("Failed to write completions")?;
        }
        OutputFormat::Text => {
            for fragment in fragments {
                let hits = completer.complete(fragment);
                if hits.is_empty() {
                    println!("{}", display::no_hits(fragment));
                    continue;
                }
                println!(
                    "{}",
                    display::fragment_header(&config.start_marker, fragment, &config.end_marker)
                );
                for (rank, hit) in hits.iter().enumerate() {
                    println!("{}", display::hit_line(rank + 1, hit));
                }
            }
        }
    }
    Ok(())
}

/// Apply the ingestion rules to a fragment given on the command line.
fn accept_fragment(fragment: &str) -> bool {
    if fragment.len() < MIN_FRAGMENT_LEN {
        tracing::warn!(
            fragment,
            "skipping fragment shorter than {} characters",
            MIN_FRAGMENT_LEN
        );
        return false;
    }
    if let Err(reason) = validate_line(fragment) {
        tracing::warn!(fragment, ?reason, "skipping invalid fragment");
        return false;
    }
    true
}
