// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn board() -> StatusCatalog {
    StatusCatalog::new(
        vec!["Open", "Backlog"],
        vec!["Dev", "QA"],
        vec!["Dev-Wait"],
        vec!["Resolved", "Closed"],
    )
}

#[parameterized(
    open = { "Open", Category::Open },
    backlog_lower = { "backlog", Category::Open },
    dev = { "Dev", Category::Wip },
    qa_upper = { "QA", Category::Wip },
    qa_lower = { "qa", Category::Wip },
    idle = { "DEV-WAIT", Category::Idle },
    done = { "Resolved", Category::Done },
    padded = { "  Closed ", Category::Done },
    unknown = { "Deploy", Category::Unmapped },
    empty = { "", Category::Unmapped },
)]
fn category_of_matches_case_insensitively(status: &str, expected: Category) {
    assert_eq!(board().category_of(status), expected);
}

#[test]
fn overlapping_sets_take_first_in_priority_order() {
    let catalog = StatusCatalog::new(
        vec!["Ready"],
        vec!["Ready", "Dev"],
        vec!["Dev"],
        vec!["Dev", "Done"],
    );
    assert_eq!(catalog.category_of("Ready"), Category::Open);
    assert_eq!(catalog.category_of("Dev"), Category::Wip);
}

#[test]
fn categorize_records_unmapped_once() {
    let catalog = board();
    let mut unmapped = UnmappedStatuses::new();

    assert_eq!(catalog.categorize("Deploy", &mut unmapped), Category::Unmapped);
    assert_eq!(catalog.categorize("Deploy", &mut unmapped), Category::Unmapped);
    assert_eq!(catalog.categorize("Dev", &mut unmapped), Category::Wip);

    assert_eq!(unmapped.len(), 1);
    assert!(unmapped.contains("Deploy"));
}

#[test]
fn unmapped_statuses_ignore_case() {
    let catalog = board();
    let mut unmapped = UnmappedStatuses::new();

    assert_eq!(catalog.categorize("Deploy", &mut unmapped), Category::Unmapped);
    assert_eq!(catalog.categorize("deploy", &mut unmapped), Category::Unmapped);
    assert!(!unmapped.record(" DEPLOY "));

    assert_eq!(unmapped.len(), 1);
    assert!(unmapped.contains("deploy"));
    assert_eq!(unmapped.iter().collect::<Vec<_>>(), vec!["Deploy"]);
}

#[test]
fn record_reports_first_sighting_only() {
    let mut unmapped = UnmappedStatuses::new();
    assert!(unmapped.record("Staging"));
    assert!(!unmapped.record("Staging"));
    assert!(unmapped.record("Canary"));
    assert_eq!(unmapped.iter().collect::<Vec<_>>(), vec!["Canary", "Staging"]);
}

#[test]
fn empty_catalog_maps_nothing() {
    let catalog = StatusCatalog::default();
    assert_eq!(catalog.category_of("Open"), Category::Unmapped);
}

#[parameterized(
    open = { Category::Open, false },
    wip = { Category::Wip, true },
    idle = { Category::Idle, true },
    done = { Category::Done, false },
    unmapped = { Category::Unmapped, false },
)]
fn category_is_active(category: Category, expected: bool) {
    assert_eq!(category.is_active(), expected);
}

#[test]
fn catalog_status_predicates() {
    let catalog = board();
    assert!(catalog.is_active("Dev-Wait"));
    assert!(!catalog.is_active("Open"));
    assert!(catalog.is_done("closed"));
    assert!(!catalog.is_done("QA"));
}
