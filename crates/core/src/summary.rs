// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue summaries folded from a replay.

use chrono::Duration;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::calendar::{business_duration, hours, minutes, round_days, Timestamp};
use crate::catalog::{Category, StatusCatalog, UnmappedStatuses};
use crate::changelog::IssueTimeline;
use crate::replay::{replay, Replay};

/// Flag spans shorter than this are ignored.
const MIN_FLAG_HOURS: f64 = 4.0;

/// Tolerance before first-WIP-to-resolution and summed WIP are considered to disagree.
const WIP_MISMATCH_TOLERANCE_HOURS: f64 = 1.0;

/// Whole days for display: zero stays zero, anything measurable is at least one.
pub fn display_days(duration: Duration) -> i64 {
    if duration <= Duration::zero() {
        return 0;
    }
    round_days(duration).max(1)
}

/// What one issue contributed during the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueSummary {
    pub key: String,
    pub issue_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint: Option<String>,
    pub created: Timestamp,
    #[serde(serialize_with = "minutes::serialize_map")]
    pub duration_by_status: BTreeMap<String, Duration>,
    /// Includes [`Category::Unmapped`] when any status was unmapped.
    #[serde(serialize_with = "minutes::serialize_map")]
    pub duration_by_category: BTreeMap<Category, Duration>,
    /// Time in Wip and Idle statuses.
    #[serde(serialize_with = "minutes::serialize")]
    pub wip_duration: Duration,
    /// Time in Wip statuses only.
    #[serde(serialize_with = "minutes::serialize")]
    pub wip_only_duration: Duration,
    /// Time in any mapped status.
    #[serde(serialize_with = "minutes::serialize")]
    pub categorized_duration: Duration,
    #[serde(serialize_with = "minutes::serialize")]
    pub unmapped_duration: Duration,
    #[serde(serialize_with = "minutes::serialize")]
    pub flag_duration: Duration,
    pub flag_days: i64,
    pub last_status: String,
    pub resolved: bool,
    pub resolved_date: Option<Timestamp>,
    pub first_wip_date: Option<Timestamp>,
}

impl IssueSummary {
    /// Lead time in whole days (Wip and Idle).
    pub fn wip_days(&self) -> i64 {
        display_days(self.wip_duration)
    }

    /// Days in Wip alone.
    pub fn wip_only_days(&self) -> i64 {
        display_days(self.wip_only_duration)
    }

    /// Category total, zero when absent.
    pub fn category_duration(&self, category: Category) -> Duration {
        self.duration_by_category
            .get(&category)
            .copied()
            .unwrap_or_else(Duration::zero)
    }
}

fn flag_totals(timeline: &IssueTimeline, cutoff: Timestamp) -> (Duration, i64) {
    timeline
        .flags
        .iter()
        .fold((Duration::zero(), 0), |(total, days), flag| {
            let end = flag.end.unwrap_or(cutoff).min(cutoff);
            let flagged = business_duration(flag.start, end);
            if hours(flagged) >= MIN_FLAG_HOURS {
                (total + flagged, days + round_days(flagged).max(1))
            } else {
                (total + flagged, days)
            }
        })
}

/// Folds a replay into a summary, recording unmapped statuses.
pub fn summarize(
    timeline: &IssueTimeline,
    replay: Replay,
    cutoff: Timestamp,
    catalog: &StatusCatalog,
    unmapped: &mut UnmappedStatuses,
) -> IssueSummary {
    let mut duration_by_category: BTreeMap<Category, Duration> = BTreeMap::new();
    for (status, duration) in &replay.duration_by_status {
        let category = catalog.categorize(status, unmapped);
        *duration_by_category
            .entry(category)
            .or_insert_with(Duration::zero) += *duration;
    }

    let sum_of = |categories: &[Category]| {
        categories
            .iter()
            .filter_map(|c| duration_by_category.get(c))
            .fold(Duration::zero(), |acc, d| acc + *d)
    };
    let wip_duration = sum_of(&[Category::Wip, Category::Idle]);
    let wip_only_duration = sum_of(&[Category::Wip]);
    let categorized_duration = sum_of(&Category::MAPPED);
    let unmapped_duration = sum_of(&[Category::Unmapped]);

    if let (Some(start), Some(end)) = (replay.first_wip_at, replay.resolved_at) {
        let span = business_duration(start, end);
        if hours(wip_duration - span).abs() > WIP_MISMATCH_TOLERANCE_HOURS {
            tracing::warn!(
                "{} has a strange status transition: {}m in WIP but {}m from first WIP to resolution",
                timeline.key,
                wip_duration.num_minutes(),
                span.num_minutes()
            );
        }
    }

    let (flag_duration, flag_days) = flag_totals(timeline, cutoff);
    let resolved = replay.resolved_at.is_some();

    IssueSummary {
        key: timeline.key.clone(),
        issue_type: timeline.issue_type.clone(),
        summary: timeline.summary.clone(),
        labels: timeline.labels.clone(),
        epic_link: timeline.epic_link.clone(),
        sprint: timeline.sprint.clone(),
        created: timeline.created,
        duration_by_status: replay.duration_by_status,
        duration_by_category,
        wip_duration,
        wip_only_duration,
        categorized_duration,
        unmapped_duration,
        flag_duration,
        flag_days,
        last_status: replay.last_status,
        resolved,
        resolved_date: replay.resolved_at,
        first_wip_date: replay.first_wip_at,
    }
}

/// Clips, replays, and summarizes one issue.
pub fn summarize_issue(
    timeline: &IssueTimeline,
    cutoff: Timestamp,
    catalog: &StatusCatalog,
    unmapped: &mut UnmappedStatuses,
) -> IssueSummary {
    let mut clipped = timeline.clone();
    clipped.clip_to(cutoff);
    let replayed = replay(&clipped, cutoff, catalog);
    summarize(&clipped, replayed, cutoff, catalog, unmapped)
}

/// Summaries for a whole batch, plus every unmapped status seen along the way.
pub fn summarize_all(
    timelines: &[IssueTimeline],
    cutoff: Timestamp,
    catalog: &StatusCatalog,
) -> (Vec<IssueSummary>, UnmappedStatuses) {
    let mut unmapped = UnmappedStatuses::new();
    let summaries = timelines
        .iter()
        .map(|t| summarize_issue(t, cutoff, catalog, &mut unmapped))
        .collect();
    (summaries, unmapped)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
