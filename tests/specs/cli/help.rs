// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for help and version output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

#[parameterized(
    long = { "--help" },
    short = { "-h" },
)]
fn help_lists_arguments_and_examples(flag: &str) {
    km().arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: kanban-metrics"))
        .stdout(predicate::str::contains("<START>"))
        .stdout(predicate::str::contains("<END>"))
        .stdout(predicate::str::contains("--board"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("KM_BOARD"));
}

#[test]
fn help_has_no_color_when_disabled() {
    km().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn version_flag() {
    km().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kanban-metrics "));
}

#[test]
fn no_arguments_is_usage_error() {
    km().assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
