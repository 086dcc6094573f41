// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Worn-outfit validation command for ride-outfit
// ABOUTME: Parses a submitted outfit document and prints the typed outfit or every rejected field

use anyhow::{anyhow, Result};
use ride_outfit::errors::{AppError, ErrorResponse};
use ride_outfit::garments::{validate_worn_outfit, WornOutfit};
use serde_json::json;
use std::path::Path;
use tracing::warn;

use crate::helpers::display::{print_json, read_input};

/// Validate the worn-outfit document at `input`
pub fn run(input: &Path) -> Result<()> {
    let document = read_input(input)?;
    let worn: WornOutfit = serde_json::from_str(&document).map_err(AppError::from)?;

    match validate_worn_outfit(&worn) {
        Ok(outfit) => print_json(&json!({ "valid": true, "outfit": outfit })),
        Err(rejection) => {
            warn!(rejected = rejection.rejections.len(), "Worn outfit rejected");
            let message = rejection.to_string();
            print_json(&ErrorResponse::from(AppError::from(rejection)))?;
            Err(anyhow!(message))
        }
    }
}
