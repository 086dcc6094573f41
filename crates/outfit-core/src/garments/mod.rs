// ABOUTME: Closed per-zone garment value domains shared by recommender and feedback validator
// ABOUTME: Defines the GarmentDomain trait, the ten garment slots, and accepted value lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Garment Domains
//!
//! Every garment slot has a closed set of accepted values. The rule tables
//! return values of these types and the worn-outfit validator parses
//! rider-submitted strings into the same types, so there is exactly one list
//! of accepted values per zone.
//!
//! Each domain contains a designated `none` value. "none" is a garment choice
//! (wear nothing in this zone), not a missing value.

/// The ten enumerated garment domains
pub mod domains;
/// Validation of rider-submitted "what I actually wore" outfits
pub mod validation;

pub use domains::{
    ArmCoverage, BaseLayer, HandWear, HeadGear, LegWear, MidLayer, NeckWear, OuterLayer, ShoeCover,
    SockType,
};
pub use validation::{
    validate_worn_outfit, RejectedGarment, WornFeet, WornOutfit, WornOutfitError, WornTorso,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A closed set of garment values for one slot
pub trait GarmentDomain: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Slot this domain belongs to
    const SLOT: GarmentSlot;
    /// Designated "wear nothing here" value
    const NONE: Self;
    /// Every accepted value, `NONE` first
    const ALL: &'static [Self];

    /// Canonical wire string
    fn as_str(self) -> &'static str;

    /// Parse a submitted value, ignoring surrounding whitespace and ASCII case
    ///
    /// Empty strings are rejected: an absent value is not "none".
    fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|garment| garment.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// Accepted wire strings in declaration order
    #[must_use]
    fn accepted_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|garment| garment.as_str()).collect()
    }

    /// Whether this is the designated none value
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// One of the ten independently decided garment positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentSlot {
    /// Under-helmet head covering
    Head,
    /// Next-to-skin torso layer
    TorsoBase,
    /// Jersey / insulating torso layer
    TorsoMid,
    /// Outer torso shell
    TorsoOuter,
    /// Arm coverage
    Arms,
    /// Gloves and mitts
    Hands,
    /// Shorts, tights, warmers
    Legs,
    /// Socks
    FeetSocks,
    /// Overshoes and toe covers
    FeetCovers,
    /// Neck covering
    Neck,
}

impl GarmentSlot {
    /// All slots in output order
    pub const ALL: [Self; 10] = [
        Self::Head,
        Self::TorsoBase,
        Self::TorsoMid,
        Self::TorsoOuter,
        Self::Arms,
        Self::Hands,
        Self::Legs,
        Self::FeetSocks,
        Self::FeetCovers,
        Self::Neck,
    ];

    /// Dotted path of the slot in the 7-zone outfit (`torso.base`, `feet.covers`)
    #[must_use]
    pub const fn field_path(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::TorsoBase => "torso.base",
            Self::TorsoMid => "torso.mid",
            Self::TorsoOuter => "torso.outer",
            Self::Arms => "arms",
            Self::Hands => "hands",
            Self::Legs => "legs",
            Self::FeetSocks => "feet.socks",
            Self::FeetCovers => "feet.covers",
            Self::Neck => "neck",
        }
    }

    /// Accepted values for this slot, for form rendering and validation messages
    #[must_use]
    pub fn accepted_values(self) -> Vec<&'static str> {
        match self {
            Self::Head => HeadGear::accepted_values(),
            Self::TorsoBase => BaseLayer::accepted_values(),
            Self::TorsoMid => MidLayer::accepted_values(),
            Self::TorsoOuter => OuterLayer::accepted_values(),
            Self::Arms => ArmCoverage::accepted_values(),
            Self::Hands => HandWear::accepted_values(),
            Self::Legs => LegWear::accepted_values(),
            Self::FeetSocks => SockType::accepted_values(),
            Self::FeetCovers => ShoeCover::accepted_values(),
            Self::Neck => NeckWear::accepted_values(),
        }
    }

    /// Whether `value` is accepted for this slot
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Head => HeadGear::parse(value).is_some(),
            Self::TorsoBase => BaseLayer::parse(value).is_some(),
            Self::TorsoMid => MidLayer::parse(value).is_some(),
            Self::TorsoOuter => OuterLayer::parse(value).is_some(),
            Self::Arms => ArmCoverage::parse(value).is_some(),
            Self::Hands => HandWear::parse(value).is_some(),
            Self::Legs => LegWear::parse(value).is_some(),
            Self::FeetSocks => SockType::parse(value).is_some(),
            Self::FeetCovers => ShoeCover::parse(value).is_some(),
            Self::Neck => NeckWear::parse(value).is_some(),
        }
    }
}

impl fmt::Display for GarmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_path())
    }
}
