// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::Error;
use crate::help;

/// Output format for the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Full analysis as JSON
    Json,
    /// Lead time scatter plot rows
    Scatter,
}

/// Accepts `YYYY-MM-DD` or `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    let value = s.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .map_err(|_| Error::InvalidDate {
            value: s.to_string(),
        })
}

#[derive(Parser, Debug)]
#[command(name = "kanban-metrics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kanban flow metrics from issue tracker changelogs")]
#[command(
    long_about = "Kanban flow metrics from issue tracker changelogs.\n\n\
    Replays each issue's status history against a board mapping and reports time per \
    status, throughput, WIP, and lead time for the window. Weekend days are never counted."
)]
#[command(help_template = help::template())]
#[command(after_help = help::examples())]
#[command(styles = help::styles())]
pub struct Cli {
    /// First day of the window
    #[arg(value_name = "START", value_parser = parse_date)]
    pub start: NaiveDate,

    /// Last day of the window (inclusive)
    #[arg(value_name = "END", value_parser = parse_date)]
    pub end: NaiveDate,

    /// Exported issues as JSON, `-` for stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Board mapping file [default: $KM_BOARD or board.toml]
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Report format
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Fail on the first malformed issue instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Log replay details to stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
