// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the report formats.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

#[test]
fn text_report_has_every_section() {
    let temp = init_temp();
    january(&temp, &[])
        .success()
        .stdout(predicate::str::starts_with(
            "Kanban metrics for DET, 01/01/2024 to 31/01/2024\nIssues: 3",
        ))
        .stdout(predicate::str::contains("> Issues by type"))
        .stdout(predicate::str::contains("> Time by status"))
        .stdout(predicate::str::contains("> Time by category"))
        .stdout(predicate::str::contains("> Throughput"))
        .stdout(predicate::str::contains("> WIP"))
        .stdout(predicate::str::contains("> Lead time (WIP days)"))
        .stdout(predicate::str::contains("> Not mapped statuses"));
}

#[test]
fn text_report_figures() {
    let temp = init_temp();
    january(&temp, &[])
        .success()
        .stdout(predicate::str::contains("Total: 2 tasks delivered"))
        .stdout(predicate::str::contains(
            "DET-1 | Checkout page | Created: 01/01/2024 | Start: 02/01/2024 | End: 08/01/2024",
        ))
        .stdout(predicate::str::contains("Flagged days: 1"))
        .stdout(predicate::str::contains("Epic link: DET-100"))
        .stdout(predicate::str::contains("Overall: mean 3.00, median 3.00"));
}

#[test]
fn unmapped_status_is_warned_on_stderr() {
    let temp = init_temp();
    january(&temp, &[])
        .success()
        .stderr(predicate::str::contains("status 'Deploy' is not mapped"));
}

#[test]
fn scatter_rows() {
    let temp = init_temp();
    january(&temp, &["-o", "scatter"])
        .success()
        .stdout(
            "DET-1;02/01/2024;08/01/2024;4;DET-100;Story;false\n\
             DET-2;;;0;;Story;false\n\
             DET-3;09/01/2024;11/01/2024;2;;Bug;false\n",
        );
}

#[test]
fn json_report() {
    let temp = init_temp();
    let output = january(&temp, &["--output", "json"]).success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["project"], "DET");
    assert_eq!(json["window"]["start"], "2024-01-01");
    assert_eq!(json["metrics"]["issue_count"], 3);
    assert_eq!(json["metrics"]["throughput"]["total"], 2);
    assert_eq!(json["unmapped"], serde_json::json!(["Deploy"]));
    assert_eq!(json["summaries"][2]["flag_days"], 1);
}

#[test]
fn scatter_lists_every_issue() {
    let temp = init_temp();
    let output = january(&temp, &["-o", "scatter"]).success();

    assert_output(
        &output.get_output().stdout,
        "DET-1;02/01/2024;08/01/2024;4;DET-100;Story;false\n\
         DET-2;;;0;;Story;false\n\
         DET-3;09/01/2024;11/01/2024;2;;Bug;false",
    );
}

#[test]
fn reads_stdin_by_default() {
    let temp = init_temp();
    km().args(["2024-01-01", "2024-01-31", "-o", "scatter"])
        .current_dir(temp.path())
        .write_stdin(EXPORT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("DET-1;"));
}

#[parameterized(
    iso = { "2024-01-01", "2024-01-31" },
    brazilian = { "01/01/2024", "31/01/2024" },
    mixed = { "2024-01-01", "31/01/2024" },
)]
fn date_layouts(start: &str, end: &str) {
    let temp = init_temp();
    km().args([start, end, "--input", "issues.json", "-o", "scatter"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DET-3;09/01/2024;11/01/2024"));
}

#[test]
fn window_end_limits_history() {
    let temp = init_temp();
    km().args(["2024-01-01", "2024-01-05", "--input", "issues.json", "-o", "scatter"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DET-1;02/01/2024;;4;DET-100;Story;false"));
}

#[test]
fn reversed_window_fails() {
    let temp = init_temp();
    km().args(["2024-02-01", "2024-01-01", "--input", "issues.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid analysis window"));
}

#[test]
fn bad_date_fails() {
    let temp = init_temp();
    km().args(["01/31/2024", "2024-02-01"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("01/31/2024"));
}

#[test]
fn malformed_issue_is_skipped_unless_strict() {
    let temp = init_temp();
    let export = EXPORT.replace("2024-01-08T09:00:00.000-0300", "08/01/2024");
    std::fs::write(temp.path().join("issues.json"), export).unwrap();

    january(&temp, &[])
        .success()
        .stdout(predicate::str::contains("Issues: 2 (1 skipped)"))
        .stdout(predicate::str::contains("> Skipped issues"))
        .stderr(predicate::str::contains("skipping DET-3"));

    january(&temp, &["--strict"])
        .failure()
        .stderr(predicate::str::contains("malformed timestamp '08/01/2024' in issue DET-3"));
}

#[test]
fn missing_input_file_fails() {
    let temp = init_temp();
    km().args(["2024-01-01", "2024-01-31", "--input", "absent.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read issues from absent.json"));
}

#[test]
fn debug_flag_logs_replay() {
    let temp = init_temp();
    january(&temp, &["--debug", "-o", "scatter"])
        .success()
        .stderr(predicate::str::contains("Open -> Dev"));
}
