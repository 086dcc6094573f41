// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Domain listing command for ride-outfit
// ABOUTME: Prints the accepted garment values of every zone, keyed by zone path

use anyhow::Result;
use ride_outfit::garments::GarmentSlot;
use serde_json::{Map, Value};

use crate::helpers::display::print_json;

/// Print every slot's accepted values
pub fn run() -> Result<()> {
    let domains: Map<String, Value> = GarmentSlot::ALL
        .iter()
        .map(|slot| (slot.field_path().to_owned(), Value::from(slot.accepted_values())))
        .collect();
    print_json(&domains)
}
