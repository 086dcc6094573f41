// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Rule table check command for ride-outfit
// ABOUTME: Prints table summaries and defects as JSON and fails when any defect exists

use anyhow::{bail, Result};
use ride_outfit::outfit_engine::rules::TableSummary;
use ride_outfit::outfit_engine::{check_rule_tables, RuleTableSet, TableDefect};
use serde::Serialize;
use tracing::{error, info};

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct TableReport {
    ok: bool,
    defects: Vec<TableDefect>,
    tables: Vec<TableSummary>,
}

/// Run the consistency check and print the report
pub fn check(tables: &RuleTableSet) -> Result<()> {
    let defects = check_rule_tables(tables);
    for defect in &defects {
        error!(slot = %defect.slot, row = ?defect.row, "Rule table defect: {defect}");
    }

    let defect_count = defects.len();
    let report = TableReport {
        ok: defects.is_empty(),
        defects,
        tables: tables.summaries(),
    };
    print_json(&report)?;

    if defect_count > 0 {
        bail!("{defect_count} rule table defect(s) found");
    }
    info!("All rule tables are well formed");
    Ok(())
}
