// ABOUTME: Core data models for outfit recommendations
// ABOUTME: Re-exports weather, activity, rider profile, and outfit structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models consumed and produced by the outfit decision engine.
//!
//! Every model is an immutable value constructed per request.

/// Planned activity type and context
pub mod activity;
/// Seven-zone outfit structure
pub mod outfit;
/// Rider thermal profile and personalization snapshot
pub mod rider;
/// Weather readings
pub mod weather;

pub use activity::{ActivityContext, ActivityType};
pub use outfit::{FeetOutfit, OutfitRecommendation, TorsoOutfit};
pub use rider::{PersonalizationSnapshot, RiderThermalProfile, ThermalSensitivity};
pub use weather::WeatherConditions;
