// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands, keys, figures: light grey
    pub const LITERAL: u8 = 250;
    /// Defaults, dates, secondary values: medium grey
    pub const CONTEXT: u8 = 245;
    /// Outliers and unmapped statuses: soft orange
    pub const ALERT: u8 = 173;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn alert(text: &str) -> String {
    paint(codes::ALERT, text)
}

/// A palette that is either live or a no-op, so renderers stay pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Palette following [`should_colorize`].
    pub fn detect() -> Self {
        Palette::new(should_colorize())
    }

    fn apply(&self, f: fn(&str) -> String, text: &str) -> String {
        if self.enabled {
            f(text)
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.apply(header, text)
    }

    pub fn literal(&self, text: &str) -> String {
        self.apply(literal, text)
    }

    pub fn context(&self, text: &str) -> String {
        self.apply(context, text)
    }

    pub fn alert(&self, text: &str) -> String {
        self.apply(alert, text)
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` become headers. For `command    description` lines
/// the command is literal and `<placeholders>` inside it are context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    colorize_command(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize a command line: words as literal, `<placeholders>` as context.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') && word.ends_with('>') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let gap = line.find("  ")?;
    (!line[gap..].trim().is_empty()).then_some(gap)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
