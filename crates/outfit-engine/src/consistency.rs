// ABOUTME: Offline consistency check over the ten rule tables and the precipitation overrides
// ABOUTME: Reports ordering, threshold, catch-all, and domain defects before any recommendation runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rule table consistency
//!
//! A well-formed table is non-empty, ordered by non-decreasing finite
//! `max_temp`, and ends in an unbounded, unconstrained row whose value lies
//! in the slot's domain. Those properties make first-match selection total
//! and monotone, so they are checked up front rather than discovered as
//! fallbacks at recommendation time.

use std::fmt;

use outfit_core::errors::{AppError, AppResult};
use outfit_core::garments::{GarmentDomain, GarmentSlot};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::rules::tables::{RAIN_SHELL, WATERPROOF_COVER};
use crate::rules::{RuleTableSet, TableSummary};

/// What is wrong with a table or row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DefectKind {
    /// Table has no rows
    EmptyTable,
    /// Row's bound is lower than an earlier row's bound
    OrderViolation {
        /// Highest bound seen before this row
        previous_max_temp: f64,
        /// This row's bound
        max_temp: f64,
    },
    /// Bounded row sits after an unbounded one
    BoundAfterUnbounded,
    /// Row's bound is NaN or infinite
    NonFiniteThreshold,
    /// Last row carries a temperature bound
    MissingCatchAll,
    /// Last row carries a wind, activity, or extremity constraint
    ConstrainedCatchAll,
    /// Row's value belongs to another slot or is not accepted by its own
    ValueOutsideDomain {
        /// Offending wire value
        value: &'static str,
    },
    /// A precipitation override value is not accepted by its slot
    OverrideOutsideDomain {
        /// Offending wire value
        value: &'static str,
    },
}

/// One defect found by [`check_rule_tables`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDefect {
    /// Slot whose table is defective
    pub slot: GarmentSlot,
    /// Row index, when the defect is tied to one row
    pub row: Option<usize>,
    /// Defect description
    pub kind: DefectKind,
}

impl fmt::Display for TableDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{} row {row}: ", self.slot)?,
            None => write!(f, "{}: ", self.slot)?,
        }
        match &self.kind {
            DefectKind::EmptyTable => f.write_str("table is empty"),
            DefectKind::OrderViolation {
                previous_max_temp,
                max_temp,
            } => write!(
                f,
                "max_temp {max_temp} is below earlier bound {previous_max_temp}"
            ),
            DefectKind::BoundAfterUnbounded => f.write_str("bounded row follows an unbounded row"),
            DefectKind::NonFiniteThreshold => f.write_str("max_temp is not finite"),
            DefectKind::MissingCatchAll => f.write_str("final row is not unbounded"),
            DefectKind::ConstrainedCatchAll => f.write_str("final row carries a constraint"),
            DefectKind::ValueOutsideDomain { value } => {
                write!(f, "value '{value}' is outside the slot's domain")
            }
            DefectKind::OverrideOutsideDomain { value } => {
                write!(f, "precipitation override '{value}' is outside the slot's domain")
            }
        }
    }
}

/// Inspect every table and both precipitation overrides, returning all defects
#[must_use]
pub fn check_rule_tables(tables: &RuleTableSet) -> Vec<TableDefect> {
    let mut defects: Vec<TableDefect> = tables
        .summaries()
        .iter()
        .flat_map(check_table)
        .collect();

    defects.extend(check_override(RAIN_SHELL, GarmentSlot::TorsoOuter));
    defects.extend(check_override(WATERPROOF_COVER, GarmentSlot::FeetCovers));

    defects
}

/// Run [`check_rule_tables`] and fail on any defect
///
/// # Errors
///
/// Returns a `RuleTableDefect` error listing every defect when any table is malformed
pub fn ensure_rule_tables(tables: &RuleTableSet) -> AppResult<()> {
    let defects = check_rule_tables(tables);
    if defects.is_empty() {
        return Ok(());
    }

    for defect in &defects {
        error!(slot = %defect.slot, row = ?defect.row, "Rule table defect: {defect}");
    }

    let descriptions: Vec<String> = defects.iter().map(ToString::to_string).collect();
    Err(AppError::rule_table(format!(
        "{} rule table defect(s): {}",
        defects.len(),
        descriptions.join("; ")
    ))
    .with_details(json!({ "defects": defects })))
}

fn check_override<G: GarmentDomain>(value: G, slot: GarmentSlot) -> Option<TableDefect> {
    let value = value.as_str();
    (G::SLOT != slot || !slot.accepts(value)).then_some(TableDefect {
        slot,
        row: None,
        kind: DefectKind::OverrideOutsideDomain { value },
    })
}

fn check_table(table: &TableSummary) -> Vec<TableDefect> {
    let slot = table.slot;
    let defect = |row: Option<usize>, kind: DefectKind| TableDefect { slot, row, kind };

    let Some(last) = table.rows.last() else {
        return vec![defect(None, DefectKind::EmptyTable)];
    };

    let mut defects = Vec::new();
    let mut highest_bound: Option<f64> = None;
    let mut seen_unbounded = false;

    for row in &table.rows {
        if row.value_slot != slot || !slot.accepts(row.value) {
            defects.push(defect(
                Some(row.index),
                DefectKind::ValueOutsideDomain { value: row.value },
            ));
        }

        let Some(max_temp) = row.max_temp else {
            seen_unbounded = true;
            continue;
        };
        if !max_temp.is_finite() {
            defects.push(defect(Some(row.index), DefectKind::NonFiniteThreshold));
            continue;
        }
        if seen_unbounded {
            defects.push(defect(Some(row.index), DefectKind::BoundAfterUnbounded));
        }
        match highest_bound {
            Some(previous_max_temp) if max_temp < previous_max_temp => defects.push(defect(
                Some(row.index),
                DefectKind::OrderViolation {
                    previous_max_temp,
                    max_temp,
                },
            )),
            _ => highest_bound = Some(max_temp),
        }
    }

    if last.max_temp.is_some() {
        defects.push(defect(Some(last.index), DefectKind::MissingCatchAll));
    }
    if last.constrained {
        defects.push(defect(Some(last.index), DefectKind::ConstrainedCatchAll));
    }

    defects
}
