// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering: text, JSON, and scatter rows.
//!
//! Renderers return strings and never touch stdout, so colors are decided by
//! the caller through a [`Palette`].

use chrono::Duration;
use km_core::calendar::hours;
use km_core::portfolio::{LeadTime, ScatterPoint};
use km_core::{Analysis, Category, IssueSummary, Timestamp};
use std::collections::BTreeMap;

use crate::colors::Palette;
use crate::error::Result;

/// Shown wherever a ratio has no denominator.
pub const NOT_COMPUTABLE: &str = "n/a";

/// Calendar day in the `DD/MM/YYYY` layout, `-` when unset.
pub fn format_date(at: Option<Timestamp>) -> String {
    at.map(|t| t.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Business time as fractional days, e.g. `3.5d`.
pub fn format_days(duration: Duration) -> String {
    format!("{:.1}d", hours(duration) / 24.0)
}

pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_COMPUTABLE.to_string(), |v| format!("{v:.2}"))
}

pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_COMPUTABLE.to_string(), |v| format!("{v:.2}%"))
}

/// `key;first_wip;resolved;wip_days;epic;type;outlier`
pub fn scatter_line(point: &ScatterPoint) -> String {
    let date = |at: Option<Timestamp>| at.map(|t| t.format("%d/%m/%Y").to_string()).unwrap_or_default();
    format!(
        "{};{};{};{};{};{};{}",
        point.key,
        date(point.first_wip_date),
        date(point.resolved_date),
        point.wip_days,
        point.epic_link.as_deref().unwrap_or_default(),
        point.issue_type,
        point.outlier
    )
}

pub fn render_scatter(analysis: &Analysis) -> String {
    analysis
        .metrics
        .scatter
        .iter()
        .map(scatter_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

fn issue_line(summary: &IssueSummary, outlier: bool, palette: Palette) -> String {
    let mut parts = vec![palette.literal(&summary.key)];
    if let Some(text) = &summary.summary {
        parts.push(text.clone());
    }
    parts.push(format!("Created: {}", palette.context(&format_date(Some(summary.created)))));
    parts.push(format!("Start: {}", palette.context(&format_date(summary.first_wip_date))));
    parts.push(format!("End: {}", palette.context(&format_date(summary.resolved_date))));

    let wip = format!("WIP days: {} (WIP only: {})", summary.wip_days(), summary.wip_only_days());
    parts.push(if outlier { palette.alert(&wip) } else { wip });

    if summary.flag_days > 0 {
        parts.push(format!("Flagged days: {}", summary.flag_days));
    }
    if let Some(epic) = &summary.epic_link {
        parts.push(format!("Epic link: {epic}"));
    }
    if !summary.labels.is_empty() {
        parts.push(format!("Labels: {}", summary.labels.join(", ")));
    }
    parts.push(if summary.resolved {
        "(Done)".to_string()
    } else {
        format!("({})", summary.last_status)
    });
    parts.join(" | ")
}

fn issues_section(analysis: &Analysis, palette: Palette) -> Vec<String> {
    let mut by_type: BTreeMap<&str, Vec<(&IssueSummary, bool)>> = BTreeMap::new();
    for (summary, point) in analysis.summaries.iter().zip(&analysis.metrics.scatter) {
        by_type
            .entry(summary.issue_type.as_str())
            .or_default()
            .push((summary, point.outlier));
    }

    let mut lines = vec![palette.header("> Issues by type")];
    for (issue_type, issues) in by_type {
        lines.push(String::new());
        lines.push(palette.header(&format!(">> {issue_type}")));
        lines.extend(
            issues
                .into_iter()
                .map(|(summary, outlier)| issue_line(summary, outlier, palette)),
        );
    }
    lines
}

fn share_line(name: &str, category: Category, duration: Duration, total: Option<f64>, wip: Option<f64>) -> String {
    let share = if category == Category::Unmapped {
        "not mapped".to_string()
    } else {
        format_percent(total)
    };
    let mut line = format!("{name} = {share} [{}]", format_days(duration));
    if let Some(wip) = wip {
        line.push_str(&format!(" ({wip:.2}% of WIP)"));
    }
    line
}

fn time_sections(analysis: &Analysis, palette: Palette) -> Vec<String> {
    let metrics = &analysis.metrics;
    let mut lines = vec![palette.header("> Time by status")];
    lines.extend(metrics.by_status.iter().map(|s| {
        let line = share_line(&s.status, s.category, s.duration, s.share_of_total, s.share_of_wip);
        if s.category == Category::Unmapped {
            palette.alert(&line)
        } else {
            line
        }
    }));

    lines.push(String::new());
    lines.push(palette.header("> Time by category"));
    lines.extend(metrics.by_category.iter().map(|c| {
        share_line(c.category.as_str(), c.category, c.duration, c.share_of_total, c.share_of_wip)
    }));
    lines
}

fn throughput_section(analysis: &Analysis, palette: Palette) -> Vec<String> {
    let throughput = &analysis.metrics.throughput;
    let mut lines = vec![
        palette.header("> Throughput"),
        format!("Total: {} tasks delivered", throughput.total),
        format!("Weekly: {} tasks", format_ratio(throughput.weekly)),
        format!("Daily: {} tasks", format_ratio(throughput.daily)),
    ];
    if !throughput.by_type.is_empty() {
        lines.push("By issue type:".to_string());
        lines.extend(throughput.by_type.iter().map(|t| {
            format!("- {}: {} tasks ({})", t.issue_type, t.count, format_percent(t.percent))
        }));
    }
    lines
}

fn wip_section(analysis: &Analysis, palette: Palette) -> Vec<String> {
    let wip = &analysis.metrics.wip;
    vec![
        palette.header("> WIP"),
        format!("Issues in WIP: {}", wip.issues_in_wip),
        format!("Total WIP days: {}", wip.total_wip_days),
        format!("Average: {} tasks", format_ratio(wip.average_daily)),
    ]
}

fn lead_time_line(row: &LeadTime, palette: Palette) -> String {
    let mut line = format!(
        "- {}: {} resolved, mean {}, median {}, 90% bound {}",
        row.issue_type,
        row.count,
        format_ratio(row.mean),
        format_ratio(row.median),
        format_ratio(row.confidence_bound_90)
    );
    if !row.outliers.is_empty() {
        line.push_str(&format!(", outliers: {}", palette.alert(&row.outliers.join(", "))));
    }
    line
}

fn lead_time_section(analysis: &Analysis, palette: Palette) -> Vec<String> {
    let overall = &analysis.metrics.overall_lead_time;
    let mut lines = vec![
        palette.header("> Lead time (WIP days)"),
        format!(
            "Overall: mean {}, median {}",
            format_ratio(overall.mean),
            format_ratio(overall.median)
        ),
    ];
    lines.extend(analysis.metrics.lead_time.iter().map(|row| lead_time_line(row, palette)));
    lines
}

/// Full human-readable report.
pub fn render_text(analysis: &Analysis, palette: Palette) -> String {
    let window = &analysis.window;
    let mut heading = format!(
        "Kanban metrics for {}, {} to {}\nIssues: {}",
        analysis.project,
        window.start.format("%d/%m/%Y"),
        window.end.format("%d/%m/%Y"),
        analysis.summaries.len()
    );
    if !analysis.skipped.is_empty() {
        heading.push_str(&format!(" ({} skipped)", analysis.skipped.len()));
    }

    let mut sections = vec![vec![heading]];
    if !analysis.summaries.is_empty() {
        sections.push(issues_section(analysis, palette));
        sections.push(time_sections(analysis, palette));
    }
    sections.push(throughput_section(analysis, palette));
    sections.push(wip_section(analysis, palette));
    sections.push(lead_time_section(analysis, palette));

    if !analysis.unmapped.is_empty() {
        let mut lines = vec![palette.header("> Not mapped statuses")];
        lines.extend(
            analysis
                .unmapped
                .iter()
                .map(|s| format!("{} = not mapped in the board file, please update it", palette.alert(s))),
        );
        sections.push(lines);
    }
    if !analysis.skipped.is_empty() {
        let mut lines = vec![palette.header("> Skipped issues")];
        lines.extend(analysis.skipped.iter().map(|s| format!("{}: {}", s.key, s.reason)));
        sections.push(lines);
    }

    sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
