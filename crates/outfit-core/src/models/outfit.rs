// ABOUTME: Seven-zone outfit structure produced by the recommender and parsed from feedback
// ABOUTME: Packs ten garment slots into head, torso, arms, hands, legs, feet, and neck zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::garments::{
    ArmCoverage, BaseLayer, GarmentDomain, GarmentSlot, HandWear, HeadGear, LegWear, MidLayer,
    NeckWear, OuterLayer, ShoeCover, SockType,
};

/// Torso zone: three stacked layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TorsoOutfit {
    /// Next-to-skin layer
    pub base: BaseLayer,
    /// Jersey or insulating layer
    pub mid: MidLayer,
    /// Shell
    pub outer: OuterLayer,
}

/// Feet zone: socks plus covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeetOutfit {
    /// Socks
    pub socks: SockType,
    /// Overshoes or toe covers
    pub covers: ShoeCover,
}

/// A complete outfit: exactly seven zones, every field populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// Head covering
    pub head: HeadGear,
    /// Torso layers
    pub torso: TorsoOutfit,
    /// Arm coverage
    pub arms: ArmCoverage,
    /// Gloves
    pub hands: HandWear,
    /// Leg coverage
    pub legs: LegWear,
    /// Socks and covers
    pub feet: FeetOutfit,
    /// Neck covering
    pub neck: NeckWear,
}

impl OutfitRecommendation {
    /// Wire string chosen for a slot
    #[must_use]
    pub fn slot_value(&self, slot: GarmentSlot) -> &'static str {
        match slot {
            GarmentSlot::Head => self.head.as_str(),
            GarmentSlot::TorsoBase => self.torso.base.as_str(),
            GarmentSlot::TorsoMid => self.torso.mid.as_str(),
            GarmentSlot::TorsoOuter => self.torso.outer.as_str(),
            GarmentSlot::Arms => self.arms.as_str(),
            GarmentSlot::Hands => self.hands.as_str(),
            GarmentSlot::Legs => self.legs.as_str(),
            GarmentSlot::FeetSocks => self.feet.socks.as_str(),
            GarmentSlot::FeetCovers => self.feet.covers.as_str(),
            GarmentSlot::Neck => self.neck.as_str(),
        }
    }

    /// `(slot, value)` pairs for all ten slots in output order
    pub fn slots(&self) -> impl Iterator<Item = (GarmentSlot, &'static str)> + '_ {
        GarmentSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.slot_value(slot)))
    }

    /// Slots whose value differs between two outfits
    #[must_use]
    pub fn differing_slots(&self, other: &Self) -> Vec<GarmentSlot> {
        GarmentSlot::ALL
            .into_iter()
            .filter(|slot| self.slot_value(*slot) != other.slot_value(*slot))
            .collect()
    }
}
