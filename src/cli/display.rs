// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the lectern CLI.
//!
//! OneDark on dark terminals and One Light on light ones. The background is
//! guessed from `LECTERN_THEME` ("dark" / "light") first, then from
//! `COLORFGBG`, and falls back to dark. Color is dropped entirely when
//! `NO_COLOR` is set or stdout is not a terminal, so piped output stays plain.

use lectern::SearchType;
use std::sync::OnceLock;

/// Inner width of a box, between the two border characters.
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LECTERN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8, dark gray) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! palette_color {
    ($($name:ident),* $(,)?) => {
        $(
            #[allow(non_snake_case)]
            pub fn $name() -> String {
                rgb(match theme() {
                    Theme::Dark => onedark::$name,
                    Theme::Light => onelight::$name,
                })
            }
        )*
    };
}

palette_color!(RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, GRAY, BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

/// Color is on unless `NO_COLOR` is set or stdout is not a TTY.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a palette color plus modifiers, or return it plain.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Character count with ANSI escape sequences skipped.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match (in_escape, c) {
            (_, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => len += 1,
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Replace inline `open`/`close` highlight markers with bold yellow.
///
/// Without color the markers are left in place so the emphasis survives.
pub fn render_highlights(excerpt: &str, open: &str, close: &str) -> String {
    if !use_colors() || open.is_empty() || close.is_empty() {
        return excerpt.to_string();
    }
    let on = format!("{}{}", BOLD, BRIGHT_YELLOW());
    let mut out = String::with_capacity(excerpt.len());
    let mut rest = excerpt;
    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&on);
        out.push_str(&after_open[..end]);
        out.push_str(RESET);
        rest = &after_open[end + close.len()..];
    }
    out.push_str(rest);
    out
}

/// Greedy word wrap to `width` visible characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && visible_len(&line) + 1 + visible_len(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// ┌─ LABEL ───────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}┐{}", border(), label_part, border(), "─".repeat(remaining), reset());
}

/// │ content       │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{}│{} {}{}{}│{}", border(), reset(), content, " ".repeat(pad), border(), reset());
}

/// └───────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded result kind: `[word]`, `[phrase]`, ...
pub fn kind_badge(kind: SearchType) -> String {
    let label = format!("[{}]", kind);
    let color: fn() -> String = match kind {
        SearchType::Word => GREEN,
        SearchType::Phrase => BLUE,
        SearchType::Chapter => MAGENTA,
        SearchType::Verse => YELLOW,
        SearchType::All => GRAY,
    };
    themed(color, &[], &label)
}

/// Theme score with a ten-cell bar, colored by strength.
pub fn score_bar(score: f64) -> String {
    let filled = ((score / 10.0).round() as usize).min(10);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
    let color: fn() -> String = if score >= 60.0 {
        GREEN
    } else if score >= 25.0 {
        YELLOW
    } else if score > 0.0 {
        RED
    } else {
        GRAY
    };
    format!("{} {}", themed(color, &[], &bar), themed(color, &[BOLD], &format!("{:>5.1}", score)))
}

pub fn dim(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}
