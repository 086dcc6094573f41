// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output and input helpers for ride-outfit
// ABOUTME: Pretty-prints JSON documents to stdout and reads documents from a path or stdin

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write to stdout")?;
    Ok(())
}

/// Read a whole document from `path`, or from stdin when `path` is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
