// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for locating and validating the board file.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn board_defaults_to_current_directory() {
    let temp = init_temp();
    january(&temp, &["-o", "scatter"]).success();
}

#[test]
fn missing_board_fails_with_path() {
    let temp = init_temp();
    std::fs::remove_file(temp.path().join("board.toml")).unwrap();

    january(&temp, &[])
        .failure()
        .stderr(predicate::str::contains("config error: failed to read board.toml"));
}

#[test]
fn board_flag_overrides_default() {
    let temp = init_temp();
    std::fs::rename(temp.path().join("board.toml"), temp.path().join("det.toml")).unwrap();

    january(&temp, &["--board", "det.toml", "-o", "scatter"]).success();
}

#[test]
fn board_from_environment() {
    let temp = init_temp();
    std::fs::rename(temp.path().join("board.toml"), temp.path().join("env.toml")).unwrap();

    km().args(["2024-01-01", "2024-01-31", "--input", "issues.json"])
        .env("KM_BOARD", "env.toml")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Kanban metrics for DET"));
}

#[test]
fn flag_wins_over_environment() {
    let temp = init_temp();
    km().args(["2024-01-01", "2024-01-31", "--input", "issues.json", "--board", "board.toml"])
        .env("KM_BOARD", "absent.toml")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn invalid_board_fails() {
    let temp = init_temp();
    std::fs::write(temp.path().join("board.toml"), "project = [").unwrap();

    january(&temp, &[])
        .failure()
        .stderr(predicate::str::contains("failed to parse board.toml"));
}

#[test]
fn statuses_match_case_insensitively() {
    let temp = init_temp();
    let board = BOARD.replace("\"Dev\"", "\"dev\"").replace("\"Resolved\"", "\"RESOLVED\"");
    std::fs::write(temp.path().join("board.toml"), board).unwrap();

    january(&temp, &["-o", "scatter"])
        .success()
        .stdout(predicate::str::contains("DET-1;02/01/2024;08/01/2024;4;"));
}

#[test]
fn overlapping_statuses_are_warned() {
    let temp = init_temp();
    let board = BOARD.replace("done = [\"Resolved\", \"Closed\"]", "done = [\"Resolved\", \"Closed\", \"QA\"]");
    std::fs::write(temp.path().join("board.toml"), board).unwrap();

    january(&temp, &["-o", "scatter"])
        .success()
        .stderr(predicate::str::contains("status 'qa' is listed in more than one category"));
}

#[test]
fn unmapped_only_board_still_reports() {
    let temp = init_temp();
    std::fs::write(temp.path().join("board.toml"), "project = \"DET\"\n").unwrap();

    january(&temp, &[])
        .success()
        .stdout(predicate::str::contains("Total: 0 tasks delivered"))
        .stdout(predicate::str::contains("Overall: mean n/a, median n/a"));
}
