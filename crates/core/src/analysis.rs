// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One full run: parse, replay, summarize, aggregate.

use serde::Serialize;

use crate::calendar::{AnalysisWindow, Timestamp};
use crate::catalog::{StatusCatalog, UnmappedStatuses};
use crate::changelog::{build_timelines, RawIssue, SkippedIssue};
use crate::error::Result;
use crate::portfolio::{aggregate, PortfolioMetrics};
use crate::summary::{summarize_all, IssueSummary};

/// Everything a report needs from one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub project: String,
    pub window: AnalysisWindow,
    pub summaries: Vec<IssueSummary>,
    pub metrics: PortfolioMetrics,
    pub unmapped: UnmappedStatuses,
    pub skipped: Vec<SkippedIssue>,
}

/// Analyzes an exported batch of issues.
///
/// `now` caps the replay cutoff for windows that have not ended yet. With
/// `strict`, a malformed issue fails the run instead of being skipped.
pub fn analyze(
    project: &str,
    issues: &[RawIssue],
    catalog: &StatusCatalog,
    window: AnalysisWindow,
    now: Timestamp,
    strict: bool,
) -> Result<Analysis> {
    let batch = build_timelines(issues, strict)?;
    let cutoff = window.cutoff(now);
    tracing::debug!(
        "analyzing {} issues of {} up to {}",
        batch.timelines.len(),
        project,
        cutoff
    );

    let (summaries, unmapped) = summarize_all(&batch.timelines, cutoff, catalog);
    let metrics = aggregate(&summaries, catalog, &window);

    Ok(Analysis {
        project: project.to_string(),
        window,
        summaries,
        metrics,
        unmapped,
        skipped: batch.skipped,
    })
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
