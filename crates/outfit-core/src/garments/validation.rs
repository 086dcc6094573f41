// ABOUTME: Validates rider-submitted "what I actually wore" outfits against the garment domains
// ABOUTME: Collects every rejected field and converts accepted submissions into typed outfits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Worn-outfit validation
//!
//! The feedback form submits free strings. They are accepted only if they
//! parse into the same enumerated domains the recommender emits, which keeps
//! recommended and worn outfits directly comparable.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use tracing::debug;

use super::{
    ArmCoverage, BaseLayer, GarmentDomain, GarmentSlot, HandWear, HeadGear, LegWear, MidLayer,
    NeckWear, OuterLayer, ShoeCover, SockType,
};
use crate::errors::{AppError, ErrorCode};
use crate::models::{FeetOutfit, OutfitRecommendation, TorsoOutfit};

/// Submitted torso layers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WornTorso {
    /// Base layer
    pub base: String,
    /// Mid layer
    pub mid: String,
    /// Outer layer
    pub outer: String,
}

/// Submitted feet garments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WornFeet {
    /// Socks
    pub socks: String,
    /// Covers
    pub covers: String,
}

/// Outfit as submitted by a rider, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WornOutfit {
    /// Head covering
    pub head: String,
    /// Torso layers
    pub torso: WornTorso,
    /// Arm coverage
    pub arms: String,
    /// Gloves
    pub hands: String,
    /// Leg coverage
    pub legs: String,
    /// Socks and covers
    pub feet: WornFeet,
    /// Neck covering
    pub neck: String,
}

impl From<&OutfitRecommendation> for WornOutfit {
    fn from(outfit: &OutfitRecommendation) -> Self {
        Self {
            head: outfit.head.as_str().to_owned(),
            torso: WornTorso {
                base: outfit.torso.base.as_str().to_owned(),
                mid: outfit.torso.mid.as_str().to_owned(),
                outer: outfit.torso.outer.as_str().to_owned(),
            },
            arms: outfit.arms.as_str().to_owned(),
            hands: outfit.hands.as_str().to_owned(),
            legs: outfit.legs.as_str().to_owned(),
            feet: WornFeet {
                socks: outfit.feet.socks.as_str().to_owned(),
                covers: outfit.feet.covers.as_str().to_owned(),
            },
            neck: outfit.neck.as_str().to_owned(),
        }
    }
}

/// A single field the validator refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedGarment {
    /// Slot the value was submitted for
    pub slot: GarmentSlot,
    /// Value as submitted
    pub submitted: String,
    /// Values the slot accepts
    pub accepted: Vec<&'static str>,
}

impl fmt::Display for RejectedGarment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' is not one of [{}]",
            self.slot,
            self.submitted,
            self.accepted.join(", ")
        )
    }
}

/// Worn-outfit validation failure listing every rejected field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("worn outfit has {} invalid field(s): {}", .rejections.len(), describe(.rejections))]
pub struct WornOutfitError {
    /// Rejected fields in slot order
    pub rejections: Vec<RejectedGarment>,
}

fn describe(rejections: &[RejectedGarment]) -> String {
    rejections
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<WornOutfitError> for AppError {
    fn from(error: WornOutfitError) -> Self {
        let fields: Vec<_> = error
            .rejections
            .iter()
            .map(|rejection| {
                json!({
                    "field": rejection.slot.field_path(),
                    "submitted": rejection.submitted,
                    "accepted": rejection.accepted,
                })
            })
            .collect();
        Self::new(ErrorCode::ValueOutOfRange, error.to_string())
            .with_details(json!({ "rejected_fields": fields }))
    }
}

/// Parses fields one at a time, remembering every rejection
#[derive(Default)]
struct FieldCollector {
    rejections: Vec<RejectedGarment>,
}

impl FieldCollector {
    fn field<G: GarmentDomain>(&mut self, submitted: &str) -> G {
        G::parse(submitted).unwrap_or_else(|| {
            self.rejections.push(RejectedGarment {
                slot: G::SLOT,
                submitted: submitted.to_owned(),
                accepted: G::accepted_values(),
            });
            G::NONE
        })
    }
}

/// Validate a submitted outfit against the garment domains
///
/// # Errors
///
/// Returns `WornOutfitError` listing every field whose value is empty or not
/// in its slot's domain.
pub fn validate_worn_outfit(worn: &WornOutfit) -> Result<OutfitRecommendation, WornOutfitError> {
    let mut collector = FieldCollector::default();

    let outfit = OutfitRecommendation {
        head: collector.field::<HeadGear>(&worn.head),
        torso: TorsoOutfit {
            base: collector.field::<BaseLayer>(&worn.torso.base),
            mid: collector.field::<MidLayer>(&worn.torso.mid),
            outer: collector.field::<OuterLayer>(&worn.torso.outer),
        },
        arms: collector.field::<ArmCoverage>(&worn.arms),
        hands: collector.field::<HandWear>(&worn.hands),
        legs: collector.field::<LegWear>(&worn.legs),
        feet: FeetOutfit {
            socks: collector.field::<SockType>(&worn.feet.socks),
            covers: collector.field::<ShoeCover>(&worn.feet.covers),
        },
        neck: collector.field::<NeckWear>(&worn.neck),
    };

    if collector.rejections.is_empty() {
        Ok(outfit)
    } else {
        debug!(
            rejected = collector.rejections.len(),
            "Worn outfit failed domain validation"
        );
        Err(WornOutfitError {
            rejections: collector.rejections,
        })
    }
}
