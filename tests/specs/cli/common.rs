// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const BOARD: &str = r#"
project = "DET"
open = ["Open", "Backlog"]
wip = ["Dev", "QA"]
idle = ["Dev-Wait"]
done = ["Resolved", "Closed"]
"#;

/// Two stories and a bug. DET-1 and DET-3 resolve in January, DET-2 sits in
/// an unmapped status.
pub const EXPORT: &str = r#"[
  {
    "key": "DET-1", "type": "Story", "summary": "Checkout page",
    "created": "2024-01-01T09:00:00.000+0000", "labels": ["web"],
    "transitions": [
      {"field": "status", "from": "Open", "to": "Dev", "timestamp": "2024-01-02T09:00:00.000+0000"},
      {"field": "Epic Link", "from": null, "to": "DET-100", "timestamp": "2024-01-02T09:30:00.000+0000"},
      {"field": "status", "from": "Dev", "to": "Resolved", "timestamp": "2024-01-08T09:00:00.000+0000"}
    ]
  },
  {
    "key": "DET-2", "type": "Story",
    "created": "2024-01-01T09:00:00.000+0000",
    "transitions": [
      {"field": "status", "from": "Open", "to": "Deploy", "timestamp": "2024-01-03T09:00:00.000+0000"}
    ]
  },
  {
    "key": "DET-3", "type": "Bug",
    "created": "2024-01-08T09:00:00.000-0300",
    "transitions": [
      {"field": "status", "from": "Open", "to": "QA", "timestamp": "2024-01-09T09:00:00.000-0300"},
      {"field": "Flagged", "from": null, "to": "Impediment", "timestamp": "2024-01-09T10:00:00.000-0300"},
      {"field": "Flagged", "from": "Impediment", "to": null, "timestamp": "2024-01-10T10:00:00.000-0300"},
      {"field": "status", "from": "QA", "to": "Closed", "timestamp": "2024-01-11T09:00:00.000-0300"}
    ]
  }
]"#;

pub fn km() -> Command {
    let mut cmd = cargo_bin_cmd!("kanban-metrics");
    cmd.env_remove("KM_BOARD")
        .env_remove("KM_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Temp directory holding `board.toml` and `issues.json`.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("board.toml"), BOARD).unwrap();
    std::fs::write(temp.path().join("issues.json"), EXPORT).unwrap();
    temp
}

/// Compares whole outputs with a line diff on failure.
pub fn assert_output(actual: &[u8], expected: &str) {
    let actual = String::from_utf8_lossy(actual);
    similar_asserts::assert_eq!(actual.trim(), expected.trim());
}

/// Runs a January report in `temp` with extra arguments.
pub fn january(temp: &TempDir, extra: &[&str]) -> assert_cmd::assert::Assert {
    km().args(["2024-01-01", "2024-01-31", "--input", "issues.json"])
        .args(extra)
        .current_dir(temp.path())
        .assert()
}
