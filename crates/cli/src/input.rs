// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading exported issue changelogs.

use km_core::RawIssue;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Path value that selects standard input.
pub const STDIN: &str = "-";

/// Parses a JSON array of exported issues.
pub fn parse_issues(content: &str) -> Result<Vec<RawIssue>> {
    Ok(serde_json::from_str(content)?)
}

/// Reads issues from `path`, or from stdin when `path` is `-`.
pub fn load_issues(path: &Path) -> Result<Vec<RawIssue>> {
    let content = if path.as_os_str() == STDIN {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::Input {
                source_name: "stdin".to_string(),
                reason: e.to_string(),
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| Error::Input {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?
    };

    let issues = parse_issues(&content)?;
    tracing::debug!("loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
