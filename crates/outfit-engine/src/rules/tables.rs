// ABOUTME: Standard per-slot rule tables for cycling outfit decisions
// ABOUTME: Ordered by non-decreasing maximum effective temperature, each ending in a catch-all
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Standard rule tables
//!
//! Temperatures are effective temperatures in degrees Celsius. Within a
//! temperature band, constrained rows (cold hands, wind, low intensity)
//! precede the generic row for the same band so they win first-match.

use outfit_core::garments::{
    ArmCoverage, BaseLayer, HandWear, HeadGear, LegWear, MidLayer, NeckWear, OuterLayer,
    ShoeCover, SockType,
};
use outfit_core::models::ActivityType;

use super::Rule;

/// Activities calm enough to warrant insulating layers
pub const LOW_INTENSITY: &[ActivityType] = &[ActivityType::Recovery, ActivityType::Easy];

/// Value returned for the outer layer when precipitation overrides the table
pub const RAIN_SHELL: OuterLayer = OuterLayer::RainShell;

/// Value returned for shoe covers when precipitation overrides the table
pub const WATERPROOF_COVER: ShoeCover = ShoeCover::WaterproofOvershoes;

/// Head covering; wind earns a headband in the mild band
pub const HEAD_RULES: &[Rule<HeadGear>] = &[
    Rule::up_to(-2.0, HeadGear::Balaclava),
    Rule::up_to(5.0, HeadGear::ThermalCap),
    Rule::up_to(10.0, HeadGear::Headband),
    Rule::up_to(16.0, HeadGear::Headband).with_min_wind(25.0),
    Rule::up_to(20.0, HeadGear::CyclingCap),
    Rule::catch_all(HeadGear::None),
];

/// Next-to-skin layer
pub const TORSO_BASE_RULES: &[Rule<BaseLayer>] = &[
    Rule::up_to(0.0, BaseLayer::ThermalBase),
    Rule::up_to(10.0, BaseLayer::LongSleeveBase),
    Rule::up_to(15.0, BaseLayer::ShortSleeveBase),
    Rule::up_to(22.0, BaseLayer::MeshBase),
    Rule::catch_all(BaseLayer::None),
];

/// Jersey layer; insulation only for low-intensity rides
pub const TORSO_MID_RULES: &[Rule<MidLayer>] = &[
    Rule::up_to(0.0, MidLayer::InsulatedMidlayer).for_activities(LOW_INTENSITY),
    Rule::up_to(5.0, MidLayer::ThermalJersey),
    Rule::up_to(10.0, MidLayer::ThermalJersey).for_activities(LOW_INTENSITY),
    Rule::up_to(15.0, MidLayer::LongSleeveJersey),
    Rule::catch_all(MidLayer::ShortSleeveJersey),
];

/// Outer shell when precipitation does not override
pub const TORSO_OUTER_RULES: &[Rule<OuterLayer>] = &[
    Rule::up_to(0.0, OuterLayer::InsulatedJacket),
    Rule::up_to(8.0, OuterLayer::SoftshellJacket),
    Rule::up_to(12.0, OuterLayer::WindJacket),
    Rule::up_to(16.0, OuterLayer::WindVest).with_min_wind(20.0),
    Rule::catch_all(OuterLayer::None),
];

/// Arm coverage
pub const ARMS_RULES: &[Rule<ArmCoverage>] = &[
    Rule::up_to(5.0, ArmCoverage::ThermalArmWarmers),
    Rule::up_to(16.0, ArmCoverage::ArmWarmers),
    Rule::catch_all(ArmCoverage::None),
];

/// Gloves; riders with cold hands move up one glove per band
pub const HANDS_RULES: &[Rule<HandWear>] = &[
    Rule::up_to(-5.0, HandWear::LobsterMitts),
    Rule::up_to(0.0, HandWear::LobsterMitts).when_cold_hands(true),
    Rule::up_to(0.0, HandWear::WinterGloves),
    Rule::up_to(5.0, HandWear::WinterGloves).when_cold_hands(true),
    Rule::up_to(5.0, HandWear::ThermalGloves),
    Rule::up_to(12.0, HandWear::ThermalGloves).when_cold_hands(true),
    Rule::up_to(12.0, HandWear::FullFingerGloves),
    Rule::catch_all(HandWear::FingerlessGloves),
];

/// Leg coverage
pub const LEGS_RULES: &[Rule<LegWear>] = &[
    Rule::up_to(5.0, LegWear::ThermalBibTights),
    Rule::up_to(10.0, LegWear::BibTights),
    Rule::up_to(14.0, LegWear::LegWarmers),
    Rule::up_to(18.0, LegWear::KneeWarmers),
    Rule::catch_all(LegWear::BibShorts),
];

/// Socks
pub const FEET_SOCKS_RULES: &[Rule<SockType>] = &[
    Rule::up_to(0.0, SockType::ThermalSocks),
    Rule::up_to(5.0, SockType::ThermalSocks).when_cold_feet(true),
    Rule::up_to(12.0, SockType::WoolSocks),
    Rule::catch_all(SockType::CyclingSocks),
];

/// Shoe covers when precipitation does not override; milder bands need cold feet
pub const FEET_COVERS_RULES: &[Rule<ShoeCover>] = &[
    Rule::up_to(0.0, ShoeCover::WinterOvershoes),
    Rule::up_to(5.0, ShoeCover::WinterOvershoes).when_cold_feet(true),
    Rule::up_to(8.0, ShoeCover::NeopreneOvershoes),
    Rule::up_to(14.0, ShoeCover::ToeCovers).when_cold_feet(true),
    Rule::catch_all(ShoeCover::None),
];

/// Neck covering; wind earns a gaiter in the mild band
pub const NECK_RULES: &[Rule<NeckWear>] = &[
    Rule::up_to(0.0, NeckWear::ThermalNeckGaiter),
    Rule::up_to(8.0, NeckWear::NeckGaiter),
    Rule::up_to(15.0, NeckWear::NeckGaiter).with_min_wind(20.0),
    Rule::catch_all(NeckWear::None),
];
