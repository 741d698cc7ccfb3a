// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! km-core: Kanban flow metrics engine.
//!
//! Replays each issue's status changelog against a board's column mapping to
//! find how long it spent in every status, then folds those durations into
//! per-issue summaries and batch metrics (throughput, WIP, lead time). All
//! durations skip weekend days. The crate does no I/O.

pub mod analysis;
pub mod calendar;
pub mod catalog;
pub mod changelog;
pub mod error;
pub mod portfolio;
pub mod replay;
pub mod stats;
pub mod summary;

pub use analysis::{analyze, Analysis};
pub use calendar::{business_duration, AnalysisWindow, Timestamp};
pub use catalog::{Category, StatusCatalog, UnmappedStatuses};
pub use changelog::{IssueTimeline, RawIssue, RawTransition, SkippedIssue, Transition};
pub use error::{Error, Result};
pub use portfolio::{aggregate, PortfolioMetrics};
pub use replay::{replay, Replay};
pub use summary::{summarize, IssueSummary};
