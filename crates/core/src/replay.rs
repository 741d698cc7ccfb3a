// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status-transition replay.
//!
//! Walks one issue's transitions in order with a cursor holding the time and
//! status of the last real change. Each interval between the cursor and the
//! next transition is measured with [`business_duration`] and charged to the
//! status being left. Whatever follows the last transition, up to the cutoff,
//! is charged to the current status unless that status is Done.
//!
//! History after the cutoff must already be removed (see
//! [`IssueTimeline::clip_to`]).

use chrono::Duration;
use std::collections::BTreeMap;

use crate::calendar::{business_duration, Timestamp};
use crate::catalog::StatusCatalog;
use crate::changelog::IssueTimeline;

/// Status an issue is assumed to hold before its first transition.
pub const INITIAL_STATUS: &str = "Open";

/// Outcome of replaying one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Business time spent in each status, unrounded.
    pub duration_by_status: BTreeMap<String, Duration>,
    /// Status after the last non-no-op transition.
    pub last_status: String,
    /// When the issue entered `last_status` (creation if it never moved).
    pub last_change_at: Timestamp,
    /// First transition into a Wip or Idle status.
    pub first_wip_at: Option<Timestamp>,
    /// Set when `last_status` is Done.
    pub resolved_at: Option<Timestamp>,
}

impl Replay {
    /// Sum of all attributed time.
    pub fn total(&self) -> Duration {
        self.duration_by_status
            .values()
            .fold(Duration::zero(), |acc, d| acc + *d)
    }
}

/// Replays `timeline` up to `cutoff`.
pub fn replay(timeline: &IssueTimeline, cutoff: Timestamp, catalog: &StatusCatalog) -> Replay {
    let mut duration_by_status: BTreeMap<String, Duration> = BTreeMap::new();
    let mut cursor_at = timeline.created;
    let mut cursor_status = INITIAL_STATUS.to_string();
    let mut first_wip_at = None;

    for transition in &timeline.transitions {
        if transition.is_noop() {
            continue;
        }

        // The transition's own origin is authoritative; the cursor only fills
        // in when the tracker omitted it.
        let origin = if transition.from.is_empty() {
            cursor_status.as_str()
        } else {
            transition.from.as_str()
        };
        let delta = business_duration(cursor_at, transition.at);
        tracing::debug!(
            issue = %timeline.key,
            "{} -> {} at {}: {}m in {}",
            origin,
            transition.to,
            transition.at,
            delta.num_minutes(),
            origin
        );
        *duration_by_status
            .entry(origin.to_string())
            .or_insert_with(Duration::zero) += delta;

        if first_wip_at.is_none() && catalog.is_active(&transition.to) {
            first_wip_at = Some(transition.at);
        }

        cursor_at = transition.at;
        cursor_status = transition.to.clone();
    }

    let resolved = catalog.is_done(&cursor_status);
    if cursor_at < cutoff && !resolved {
        let tail = business_duration(cursor_at, cutoff);
        tracing::debug!(
            issue = %timeline.key,
            "still in {} at cutoff {}: {}m",
            cursor_status,
            cutoff,
            tail.num_minutes()
        );
        *duration_by_status
            .entry(cursor_status.clone())
            .or_insert_with(Duration::zero) += tail;
    }

    Replay {
        duration_by_status,
        last_status: cursor_status,
        last_change_at: cursor_at,
        first_wip_at,
        resolved_at: resolved.then_some(cursor_at),
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
