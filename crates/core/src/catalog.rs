// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board column mapping: which status names count as Open, Wip, Idle, Done.
//!
//! A [`StatusCatalog`] is built once per run from the board configuration and
//! never changes afterwards. Statuses the board does not mention are collected
//! in an [`UnmappedStatuses`] set owned by the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Board category a status belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Not started.
    Open,
    /// Actively being worked on.
    Wip,
    /// Started but waiting (blocked, queued for QA, etc.).
    Idle,
    /// Finished.
    Done,
    /// Present in the data but absent from every configured set.
    Unmapped,
}

impl Category {
    /// Categories in matching priority order.
    pub const MAPPED: [Category; 4] = [Category::Open, Category::Wip, Category::Idle, Category::Done];

    /// Returns the string representation used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Open => "Open",
            Category::Wip => "Wip",
            Category::Idle => "Idle",
            Category::Done => "Done",
            Category::Unmapped => "Not Mapped",
        }
    }

    /// Wip and Idle both count toward lead time.
    pub fn is_active(&self) -> bool {
        matches!(self, Category::Wip | Category::Idle)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable status-to-category mapping for one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCatalog {
    open: Vec<String>,
    wip: Vec<String>,
    idle: Vec<String>,
    done: Vec<String>,
}

fn normalize<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl StatusCatalog {
    /// Creates a catalog from the four configured status lists.
    pub fn new<I, S>(open: I, wip: I, idle: I, done: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StatusCatalog {
            open: normalize(open),
            wip: normalize(wip),
            idle: normalize(idle),
            done: normalize(done),
        }
    }

    fn set(&self, category: Category) -> &[String] {
        match category {
            Category::Open => &self.open,
            Category::Wip => &self.wip,
            Category::Idle => &self.idle,
            Category::Done => &self.done,
            Category::Unmapped => &[],
        }
    }

    /// Category of `status`, matched case-insensitively.
    ///
    /// When the sets overlap the first match in Open, Wip, Idle, Done order wins.
    pub fn category_of(&self, status: &str) -> Category {
        let needle = status.trim().to_lowercase();
        Category::MAPPED
            .into_iter()
            .find(|category| self.set(*category).iter().any(|s| *s == needle))
            .unwrap_or(Category::Unmapped)
    }

    /// Like [`category_of`](Self::category_of), recording unmapped names in `unmapped`.
    pub fn categorize(&self, status: &str, unmapped: &mut UnmappedStatuses) -> Category {
        let category = self.category_of(status);
        if category == Category::Unmapped {
            unmapped.record(status);
        }
        category
    }

    /// Returns true if `status` is in the Wip or Idle set.
    pub fn is_active(&self, status: &str) -> bool {
        self.category_of(status).is_active()
    }

    /// Returns true if `status` is in the Done set.
    pub fn is_done(&self, status: &str) -> bool {
        self.category_of(status) == Category::Done
    }
}

/// Status names seen in the data that the board does not map, each kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnmappedStatuses(BTreeSet<String>);

impl UnmappedStatuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status`. Returns true the first time a name is seen,
    /// ignoring case; the first spelling is the one kept.
    pub fn record(&mut self, status: &str) -> bool {
        if self.contains(status) {
            return false;
        }
        tracing::warn!("status '{}' is not mapped in the board config", status);
        self.0.insert(status.to_string())
    }

    pub fn contains(&self, status: &str) -> bool {
        let needle = status.trim().to_lowercase();
        self.0.iter().any(|seen| seen.trim().to_lowercase() == needle)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
