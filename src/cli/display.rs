// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the acronymic CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `ACRONYMIC_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely for `NO_COLOR` and for non-TTY output, so piping `query`
//! into another tool gives plain text.

use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("ACRONYMIC_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stream `stream`
fn colors_for(stream: atty::Stream) -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(stream)
}

/// Colors for stdout output
pub fn use_colors() -> bool {
    colors_for(atty::Stream::Stdout)
}

/// Colors for stderr output (summary box)
pub fn use_colors_stderr() -> bool {
    colors_for(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers when `enabled`
pub fn themed(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// HIT LISTS
// ═══════════════════════════════════════════════════════════════════════════

/// `[fragment]` header for interactive output
pub fn fragment_header(start: &str, fragment: &str, end: &str) -> String {
    themed(use_colors(), CYAN, &[BOLD], &format!("{}{}{}", start, fragment, end))
}

/// One hit, numbered by rank
pub fn hit_line(rank: usize, hit: &str) -> String {
    format!("{} {}", themed(use_colors(), GRAY, &[], &format!("{:>3}.", rank)), hit)
}

/// Dimmed note for fragments without hits
pub fn no_hits(fragment: &str) -> String {
    themed(use_colors(), YELLOW, &[], &format!("no completions for '{}'", fragment))
}

// ═══════════════════════════════════════════════════════════════════════════
// SUMMARY BOX (stderr)
// ═══════════════════════════════════════════════════════════════════════════

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let colors = use_colors_stderr();
    let border = if colors { GRAY() } else { String::new() };
    let reset = if colors { RESET } else { "" };
    let label_part = format!("─ {} ", themed(colors, CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("{}┌{}{}{}{}┐{}", border, reset, label_part, border, "─".repeat(remaining), reset)
}

/// Content line: │ label        value │
pub fn stat_row(label: &str, value: usize) -> String {
    let colors = use_colors_stderr();
    let border = if colors { GRAY() } else { String::new() };
    let reset = if colors { RESET } else { "" };
    let value = themed(colors, GREEN, &[BOLD], &value.to_string());
    let content = format!(" {:<24}{}", label, value);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
    format!("{}│{}{}{}{}│{}", border, reset, content, " ".repeat(pad), border, reset)
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    let colors = use_colors_stderr();
    let border = if colors { GRAY() } else { String::new() };
    let reset = if colors { RESET } else { "" };
    format!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
