// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_LEVEL: &str = "warn";
const DEBUG_LEVEL: &str = "debug";

/// Filter directives: `KM_LOG` wins, then `--debug`, then warnings only.
pub fn directives(from_env: Option<String>, debug: bool) -> String {
    let fallback = if debug { DEBUG_LEVEL } else { DEFAULT_LEVEL };
    from_env.unwrap_or_else(|| fallback.to_string())
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    let directives = directives(env::log_filter(), debug);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && !env::no_color())
        .with_target(debug)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
