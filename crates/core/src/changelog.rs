// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue changelogs as exported from the tracker, and the ordered timelines
//! the replay engine consumes.
//!
//! [`RawIssue`] mirrors the export format with timestamps left as strings.
//! [`IssueTimeline::from_raw`] parses and orders them; a timestamp that does
//! not parse fails the whole issue, since a bad cursor cannot be recovered
//! from mid-replay.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::Timestamp;
use crate::error::{Error, Result};

pub const STATUS_FIELD: &str = "status";
pub const EPIC_LINK_FIELD: &str = "Epic Link";
pub const SPRINT_FIELD: &str = "Sprint";
pub const FLAGGED_FIELD: &str = "Flagged";

/// Jira's REST timestamp layout, e.g. `2024-01-31T14:05:00.000-0300`.
const JIRA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// One field change from an exported changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransition {
    pub field: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    pub timestamp: String,
}

/// One issue as exported from the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<RawTransition>,
}

/// A status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub at: Timestamp,
    pub from: String,
    pub to: String,
}

impl Transition {
    pub fn new(at: Timestamp, from: impl Into<String>, to: impl Into<String>) -> Self {
        Transition {
            at,
            from: from.into(),
            to: to.into(),
        }
    }

    /// A change to the status it already had.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// A span during which the issue carried the Flagged marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagInterval {
    pub start: Timestamp,
    /// `None` while the flag is still raised.
    pub end: Option<Timestamp>,
}

/// One issue's history, ordered and ready for replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTimeline {
    pub key: String,
    pub issue_type: String,
    pub summary: Option<String>,
    pub created: Timestamp,
    pub labels: Vec<String>,
    pub epic_link: Option<String>,
    pub sprint: Option<String>,
    pub flags: Vec<FlagInterval>,
    /// Status transitions in chronological order.
    pub transitions: Vec<Transition>,
}

/// Parses a tracker timestamp in Jira's layout or RFC 3339.
pub fn parse_timestamp(value: &str) -> std::result::Result<Timestamp, chrono::ParseError> {
    let value = value.trim();
    DateTime::parse_from_str(value, JIRA_TIME_FORMAT).or_else(|_| DateTime::parse_from_rfc3339(value))
}

fn parse_for(issue: &str, value: &str) -> Result<Timestamp> {
    parse_timestamp(value).map_err(|e| Error::MalformedTimestamp {
        issue: issue.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl IssueTimeline {
    /// Creates a timeline with no history beyond its creation.
    pub fn new(key: impl Into<String>, issue_type: impl Into<String>, created: Timestamp) -> Self {
        IssueTimeline {
            key: key.into(),
            issue_type: issue_type.into(),
            summary: None,
            created,
            labels: Vec::new(),
            epic_link: None,
            sprint: None,
            flags: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Adds a status transition, keeping chronological order.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self.transitions.sort_by_key(|t| t.at);
        self
    }

    /// Parses an exported issue.
    ///
    /// Changelog order from the tracker is not trusted: entries are sorted by
    /// timestamp, ties keeping export order.
    pub fn from_raw(raw: &RawIssue) -> Result<Self> {
        let created = parse_for(&raw.key, &raw.created)?;

        let mut changes = raw
            .transitions
            .iter()
            .map(|t| Ok((parse_for(&raw.key, &t.timestamp)?, t)))
            .collect::<Result<Vec<_>>>()?;
        changes.sort_by_key(|(at, _)| *at);

        let mut timeline = IssueTimeline::new(&raw.key, &raw.issue_type, created);
        timeline.summary = raw.summary.clone();
        timeline.labels = raw.labels.clone();

        let mut open_flag: Option<Timestamp> = None;
        for (at, change) in changes {
            match change.field.as_str() {
                STATUS_FIELD => timeline.transitions.push(Transition::new(
                    at,
                    change.from.clone().unwrap_or_default(),
                    change.to.clone().unwrap_or_default(),
                )),
                EPIC_LINK_FIELD => timeline.epic_link = non_empty(change.to.as_ref()),
                SPRINT_FIELD => timeline.sprint = non_empty(change.to.as_ref()),
                FLAGGED_FIELD => match (non_empty(change.to.as_ref()), open_flag) {
                    (Some(_), None) => open_flag = Some(at),
                    (None, Some(start)) => {
                        timeline.flags.push(FlagInterval {
                            start,
                            end: Some(at),
                        });
                        open_flag = None;
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        if let Some(start) = open_flag {
            timeline.flags.push(FlagInterval { start, end: None });
        }

        Ok(timeline)
    }

    /// Drops history recorded after `end`.
    ///
    /// Transitions exactly at `end` are kept. Flags raised after `end` are
    /// dropped and flags cleared after it are treated as still raised.
    pub fn clip_to(&mut self, end: Timestamp) {
        self.transitions.retain(|t| t.at <= end);
        self.flags.retain(|f| f.start <= end);
        for flag in &mut self.flags {
            if flag.end.is_some_and(|e| e > end) {
                flag.end = None;
            }
        }
    }

    /// Status the issue held right after its last transition, if any.
    pub fn last_status(&self) -> Option<&str> {
        self.transitions.last().map(|t| t.to.as_str())
    }
}

/// An issue left out of the batch, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedIssue {
    pub key: String,
    pub reason: String,
}

/// Parsed timelines for a batch, plus the issues that could not be parsed.
#[derive(Debug, Clone, Default)]
pub struct TimelineBatch {
    pub timelines: Vec<IssueTimeline>,
    pub skipped: Vec<SkippedIssue>,
}

/// Parses every issue of an export.
///
/// With `strict` the first malformed issue aborts the batch. Otherwise it is
/// logged, listed in [`TimelineBatch::skipped`], and the rest continue.
pub fn build_timelines(raw: &[RawIssue], strict: bool) -> Result<TimelineBatch> {
    let mut batch = TimelineBatch::default();
    for issue in raw {
        match IssueTimeline::from_raw(issue) {
            Ok(timeline) => batch.timelines.push(timeline),
            Err(e) if !strict => {
                tracing::warn!("skipping {}: {}", issue.key, e);
                batch.skipped.push(SkippedIssue {
                    key: issue.key.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(batch)
}

#[cfg(test)]
#[path = "changelog_tests.rs"]
mod tests;
