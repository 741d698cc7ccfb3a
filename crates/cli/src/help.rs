// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors::{self, Palette};
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
        .invalid(fg(colors::codes::ALERT))
}

/// Main help template.
pub fn template() -> String {
    let palette = Palette::detect();
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{}
{{positionals}}

{}
{{options}}{{after-help}}",
        palette.header("Arguments:"),
        palette.header("Options:")
    )
}

/// Examples and environment shown after options.
pub fn examples() -> String {
    colors::examples(
        "\
Examples:
  kanban-metrics 2024-01-01 2024-01-31 -i issues.json        Text report for January
  kanban-metrics 01/01/2024 31/01/2024 -o json < issues.json  JSON report from stdin
  kanban-metrics 2024-01-01 2024-03-31 -i x.json -o scatter   Lead time scatter rows
  kanban-metrics 2024-01-01 2024-01-31 -b det.toml --debug    Custom board, replay log

Environment:
  KM_BOARD  Board file used when --board is not given
  KM_LOG    Log filter, e.g. km_core=debug
  NO_COLOR  Set to 1 to disable colors",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
