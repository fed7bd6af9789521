// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output sinks: bracketed text blocks or JSON lines.

use crate::config::Config;
use crate::session::CompletionSink;
use crate::types::HitList;
use serde::Serialize;
use std::io::{self, Write};

/// Writes `"{start}{fragment}{end}"` followed by one hit per line.
pub struct TextSink<W: Write> {
    writer: W,
    start: String,
    end: String,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W, config: &Config) -> Self {
        Self {
            writer,
            start: config.start_marker.clone(),
            end: config.end_marker.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CompletionSink for TextSink<W> {
    fn emit(&mut self, fragment: &str, hits: &HitList) -> io::Result<()> {
        writeln!(self.writer, "{}{}{}", self.start, fragment, self.end)?;
        for hit in hits.iter() {
            writeln!(self.writer, "{}", hit)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    fragment: &'a str,
    hits: &'a HitList,
}

/// Writes one JSON object per fragment: `{"fragment": ..., "hits": [...]}`.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CompletionSink for JsonSink<W> {
    fn emit(&mut self, fragment: &str, hits: &HitList) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, &JsonRecord { fragment, hits })?;
        writeln!(self.writer)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
