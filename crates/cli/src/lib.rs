// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kmrs - the `kanban-metrics` command-line layer.
//!
//! Loads a board file and an issue export, runs the [`km_core`] analysis for
//! a date window, and renders the result.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parsing
//! - [`BoardConfig`] - Board file mapping statuses to categories
//! - [`input`] - Issue export loading
//! - [`display`] - Text, JSON, and scatter rendering
//! - [`Error`] - Error types for all operations

mod cli;
pub mod colors;
pub mod display;
pub mod env;
pub mod help;
pub mod input;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{parse_date, Cli, OutputFormat};
pub use config::BoardConfig;
pub use error::{Error, Result};

use chrono::Utc;
use km_core::{analyze, Analysis, AnalysisWindow};

use crate::colors::Palette;

/// Renders an analysis in the requested format.
pub fn report(analysis: &Analysis, format: OutputFormat, palette: Palette) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(display::render_text(analysis, palette)),
        OutputFormat::Json => display::render_json(analysis),
        OutputFormat::Scatter => Ok(display::render_scatter(analysis)),
    }
}

/// Loads inputs and analyzes the window, without printing anything.
pub fn analyze_window(cli: &Cli) -> Result<Analysis> {
    let board_path = config::resolve_board_path(cli.board.clone());
    let board = BoardConfig::load(&board_path)?;
    for status in board.overlapping_statuses() {
        tracing::warn!(
            "status '{}' is listed in more than one category in {}",
            status,
            board_path.display()
        );
    }

    let window = AnalysisWindow::new(cli.start, cli.end)?;
    let issues = input::load_issues(&cli.input)?;
    let now = Utc::now().fixed_offset();

    Ok(analyze(
        &board.project,
        &issues,
        &board.catalog(),
        window,
        now,
        cli.strict,
    )?)
}

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let analysis = analyze_window(&cli)?;
    let palette = match cli.output {
        OutputFormat::Text => Palette::detect(),
        OutputFormat::Json | OutputFormat::Scatter => Palette::new(false),
    };
    let output = report(&analysis, cli.output, palette)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
