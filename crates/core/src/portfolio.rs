// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-issue flow metrics: where time went, what got delivered, and how
//! long delivery took per issue type.
//!
//! [`aggregate`] only reads its input; calling it twice on the same summaries
//! yields the same metrics. Every ratio whose denominator can be zero is an
//! `Option`, `None` meaning "not computable".

use chrono::Duration;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::calendar::{hours, minutes, AnalysisWindow, Timestamp};
use crate::catalog::{Category, StatusCatalog};
use crate::stats::{confidence_bound_90, mean, median};
use crate::summary::IssueSummary;

/// Label used for the all-types lead time row.
pub const ALL_TYPES: &str = "All";

const WORK_DAYS_PER_WEEK: f64 = 5.0;

/// Minimum Wip+Idle time for an issue to count as having been in progress.
const MIN_WIP_HOURS: f64 = 1.0;

/// Time spent in one status across the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: String,
    pub category: Category,
    #[serde(serialize_with = "minutes::serialize")]
    pub duration: Duration,
    /// Percent of all mapped time. `None` for unmapped statuses.
    pub share_of_total: Option<f64>,
    /// Percent of Wip+Idle time. `None` outside Wip and Idle.
    pub share_of_wip: Option<f64>,
}

/// Time spent in one category across the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    #[serde(serialize_with = "minutes::serialize")]
    pub duration: Duration,
    pub share_of_total: Option<f64>,
    pub share_of_wip: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCount {
    pub issue_type: String,
    pub count: usize,
    pub percent: Option<f64>,
}

/// Resolved issues in the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Throughput {
    pub total: usize,
    pub by_type: Vec<TypeCount>,
    pub daily: Option<f64>,
    pub weekly: Option<f64>,
}

/// Lead time distribution over resolved issues, in whole WIP days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadTime {
    pub issue_type: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// `mean + 1.644854 * sample std dev`; needs two or more issues.
    pub confidence_bound_90: Option<f64>,
    /// Keys of issues whose WIP days exceed the rounded bound.
    pub outliers: Vec<String>,
}

impl LeadTime {
    /// Returns true if `wip_days` lies beyond this type's rounded bound.
    pub fn is_outlier(&self, wip_days: i64) -> bool {
        self.confidence_bound_90
            .is_some_and(|bound| wip_days as f64 > (bound + 0.5).floor())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WipStats {
    /// Issues with more than an hour of Wip+Idle time.
    pub issues_in_wip: usize,
    pub total_wip_days: i64,
    /// Total WIP days per weekday of the window.
    pub average_daily: Option<f64>,
}

/// One dot of a lead time scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub key: String,
    pub issue_type: String,
    pub first_wip_date: Option<Timestamp>,
    pub resolved_date: Option<Timestamp>,
    pub wip_days: i64,
    pub epic_link: Option<String>,
    pub outlier: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioMetrics {
    pub issue_count: usize,
    pub by_status: Vec<StatusShare>,
    pub by_category: Vec<CategoryShare>,
    pub throughput: Throughput,
    /// One row per issue type with resolved issues, sorted by type.
    pub lead_time: Vec<LeadTime>,
    pub overall_lead_time: LeadTime,
    pub wip: WipStats,
    pub scatter: Vec<ScatterPoint>,
    pub unmapped_statuses: Vec<String>,
}

fn percent(part: Duration, whole: Duration) -> Option<f64> {
    if whole <= Duration::zero() {
        return None;
    }
    Some(100.0 * part.num_seconds() as f64 / whole.num_seconds() as f64)
}

fn ratio(count: f64, over: u32) -> Option<f64> {
    (over > 0).then(|| count / f64::from(over))
}

fn sum(durations: impl Iterator<Item = Duration>) -> Duration {
    durations.fold(Duration::zero(), |acc, d| acc + d)
}

fn lead_time(issue_type: &str, resolved: &[&IssueSummary]) -> LeadTime {
    let days: Vec<f64> = resolved.iter().map(|s| s.wip_days() as f64).collect();
    let mut row = LeadTime {
        issue_type: issue_type.to_string(),
        count: resolved.len(),
        mean: mean(&days),
        median: median(&days),
        confidence_bound_90: confidence_bound_90(&days),
        outliers: Vec::new(),
    };
    let outliers = resolved
        .iter()
        .filter(|s| row.is_outlier(s.wip_days()))
        .map(|s| s.key.clone())
        .collect();
    row.outliers = outliers;
    row
}

fn status_shares(
    summaries: &[IssueSummary],
    catalog: &StatusCatalog,
    total: Duration,
    wip_total: Duration,
) -> Vec<StatusShare> {
    let mut by_status: BTreeMap<&str, Duration> = BTreeMap::new();
    for summary in summaries {
        for (status, duration) in &summary.duration_by_status {
            *by_status
                .entry(status.as_str())
                .or_insert_with(Duration::zero) += *duration;
        }
    }

    let mut shares: Vec<StatusShare> = by_status
        .into_iter()
        .map(|(status, duration)| {
            let category = catalog.category_of(status);
            StatusShare {
                status: status.to_string(),
                category,
                duration,
                share_of_total: (category != Category::Unmapped)
                    .then(|| percent(duration, total))
                    .flatten(),
                share_of_wip: category
                    .is_active()
                    .then(|| percent(duration, wip_total))
                    .flatten(),
            }
        })
        .collect();
    shares.sort_by(|a, b| b.duration.cmp(&a.duration).then_with(|| a.status.cmp(&b.status)));
    shares
}

fn category_shares(
    summaries: &[IssueSummary],
    total: Duration,
    wip_total: Duration,
) -> Vec<CategoryShare> {
    let mut by_category: BTreeMap<Category, Duration> = BTreeMap::new();
    for summary in summaries {
        for (category, duration) in &summary.duration_by_category {
            *by_category.entry(*category).or_insert_with(Duration::zero) += *duration;
        }
    }

    by_category
        .into_iter()
        .map(|(category, duration)| CategoryShare {
            category,
            duration,
            share_of_total: (category != Category::Unmapped)
                .then(|| percent(duration, total))
                .flatten(),
            share_of_wip: category
                .is_active()
                .then(|| percent(duration, wip_total))
                .flatten(),
        })
        .collect()
}

fn throughput(resolved: &[&IssueSummary], week_days: u32) -> Throughput {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for summary in resolved {
        *counts.entry(summary.issue_type.as_str()).or_default() += 1;
    }
    let total = resolved.len();
    let daily = ratio(total as f64, week_days);

    Throughput {
        total,
        by_type: counts
            .into_iter()
            .map(|(issue_type, count)| TypeCount {
                issue_type: issue_type.to_string(),
                count,
                percent: (total > 0).then(|| 100.0 * count as f64 / total as f64),
            })
            .collect(),
        daily,
        weekly: daily.map(|d| d * WORK_DAYS_PER_WEEK),
    }
}

fn resolved_before(summary: &IssueSummary, start: Timestamp) -> bool {
    summary.resolved_date.is_some_and(|at| at < start)
}

/// Combines per-issue summaries into batch metrics.
///
/// Issues resolved before the window start count toward time shares only.
pub fn aggregate(
    summaries: &[IssueSummary],
    catalog: &StatusCatalog,
    window: &AnalysisWindow,
) -> PortfolioMetrics {
    let week_days = window.week_days();
    let total = sum(summaries.iter().map(|s| s.categorized_duration));
    let wip_total = sum(summaries.iter().map(|s| s.wip_duration));

    let start = window.start_at();
    let resolved: Vec<&IssueSummary> = summaries
        .iter()
        .filter(|s| s.resolved && !resolved_before(s, start))
        .collect();
    let mut resolved_by_type: BTreeMap<&str, Vec<&IssueSummary>> = BTreeMap::new();
    for &summary in &resolved {
        resolved_by_type
            .entry(summary.issue_type.as_str())
            .or_default()
            .push(summary);
    }
    let lead_times: Vec<LeadTime> = resolved_by_type
        .iter()
        .map(|(issue_type, issues)| lead_time(issue_type, issues))
        .collect();

    let scatter = summaries
        .iter()
        .map(|s| {
            let wip_days = s.wip_days();
            let outlier = s.resolved
                && !resolved_before(s, start)
                && lead_times
                    .iter()
                    .find(|row| row.issue_type == s.issue_type)
                    .is_some_and(|row| row.is_outlier(wip_days));
            ScatterPoint {
                key: s.key.clone(),
                issue_type: s.issue_type.clone(),
                first_wip_date: s.first_wip_date,
                resolved_date: s.resolved_date,
                wip_days,
                epic_link: s.epic_link.clone(),
                outlier,
            }
        })
        .collect();

    let active: Vec<&IssueSummary> = summaries
        .iter()
        .filter(|s| !resolved_before(s, start))
        .collect();
    let total_wip_days: i64 = active.iter().map(|s| s.wip_days()).sum();
    let wip = WipStats {
        issues_in_wip: active
            .iter()
            .filter(|s| hours(s.wip_duration) > MIN_WIP_HOURS)
            .count(),
        total_wip_days,
        average_daily: ratio(total_wip_days as f64, week_days),
    };

    let by_status = status_shares(summaries, catalog, total, wip_total);
    let mut unmapped_by_name: BTreeMap<String, &str> = BTreeMap::new();
    for share in by_status.iter().filter(|s| s.category == Category::Unmapped) {
        unmapped_by_name
            .entry(share.status.trim().to_lowercase())
            .or_insert(share.status.as_str());
    }
    let mut unmapped_statuses: Vec<String> =
        unmapped_by_name.into_values().map(str::to_string).collect();
    unmapped_statuses.sort();

    PortfolioMetrics {
        issue_count: summaries.len(),
        by_status,
        by_category: category_shares(summaries, total, wip_total),
        throughput: throughput(&resolved, week_days),
        overall_lead_time: lead_time(ALL_TYPES, &resolved),
        lead_time: lead_times,
        wip,
        scatter,
        unmapped_statuses,
    }
}

#[cfg(test)]
#[path = "portfolio_tests.rs"]
mod tests;
