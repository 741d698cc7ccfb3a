// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for km-core operations.

use thiserror::Error;

/// All possible errors that can occur in km-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed timestamp '{value}' in issue {issue}: {reason}\n  hint: expected 2006-01-02T15:04:05.000-0700 or RFC 3339")]
    MalformedTimestamp {
        issue: String,
        value: String,
        reason: String,
    },

    #[error("invalid analysis window: start {start} is after end {end}")]
    InvalidWindow { start: String, end: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for km-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
