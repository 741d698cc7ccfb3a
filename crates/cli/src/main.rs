// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use kmrs::Cli;

fn main() {
    let cli = Cli::parse();
    kmrs::logging::init(cli.debug);
    if let Err(e) = kmrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
