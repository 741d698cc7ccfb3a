// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board configuration.
//!
//! A board file maps the tracker's workflow statuses onto the four flow
//! categories, e.g.:
//!
//! ```toml
//! project = "DET"
//! open = ["Open", "Backlog"]
//! wip = ["Dev", "QA"]
//! idle = ["Dev-Wait"]
//! done = ["Resolved", "Closed"]
//! ```

use km_core::StatusCatalog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

/// Board file looked up in the current directory when no path is given.
pub const DEFAULT_BOARD_FILE: &str = "board.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Project key, only used in report headings.
    pub project: String,
    #[serde(default)]
    pub open: Vec<String>,
    #[serde(default)]
    pub wip: Vec<String>,
    #[serde(default)]
    pub idle: Vec<String>,
    #[serde(default)]
    pub done: Vec<String>,
}

impl BoardConfig {
    /// Loads a board file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Parses board TOML.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Builds the immutable status catalog for this board.
    pub fn catalog(&self) -> StatusCatalog {
        StatusCatalog::new(&self.open, &self.wip, &self.idle, &self.done)
    }

    /// Status names that appear in more than one category.
    ///
    /// Lookup resolves these in Open, Wip, Idle, Done order.
    pub fn overlapping_statuses(&self) -> Vec<String> {
        let mut groups: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for (index, group) in [&self.open, &self.wip, &self.idle, &self.done]
            .into_iter()
            .enumerate()
        {
            for name in group {
                groups
                    .entry(name.trim().to_lowercase())
                    .or_default()
                    .insert(index);
            }
        }
        groups
            .into_iter()
            .filter(|(_, seen_in)| seen_in.len() > 1)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Resolves the board file: explicit flag, then `KM_BOARD`, then `board.toml`.
pub fn resolve_board_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(env::board_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BOARD_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
