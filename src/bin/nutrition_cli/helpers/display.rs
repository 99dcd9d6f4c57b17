// ABOUTME: Output formatting helpers for nutrition-cli
// ABOUTME: Writes reports to stdout as pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_tracker::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Print a report as pretty JSON on stdout
pub fn print_json<T: Serialize>(report: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(report)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
