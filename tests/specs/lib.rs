// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the `kanban-metrics` binary.
//!
//! The specs themselves live under `cli/` and are registered as test targets
//! of the `kanban-metrics` crate so they can locate the built binary.
