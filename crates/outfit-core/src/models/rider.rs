// ABOUTME: Rider thermal profile and the externally computed personalization snapshot
// ABOUTME: Carries the per-rider temperature offset plus cold-hands and cold-feet flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// General cold/heat sensitivity reported by the rider
///
/// Not consumed by the current rule tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalSensitivity {
    /// Feels cold easily
    RunsCold,
    /// No strong tendency
    #[default]
    Neutral,
    /// Overheats easily
    RunsHot,
}

/// Versioned personalization offset handed to the engine by its caller
///
/// The engine reads `offset_celsius` once per computation and never caches
/// the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationSnapshot {
    /// Signed temperature shift; negative for riders who run cold
    pub offset_celsius: f64,
    /// Monotonic version, bumped on each recomputation
    pub version: u32,
    /// Feedback count the offset was computed from
    pub feedback_count: u32,
    /// When the offset was computed
    pub computed_at: DateTime<Utc>,
}

/// Rider thermal profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderThermalProfile {
    /// Personalization offset in degrees Celsius
    pub personalization_offset: f64,
    /// General sensitivity (reserved)
    pub sensitivity: ThermalSensitivity,
    /// Rider's hands get cold easily
    pub cold_hands: bool,
    /// Rider's feet get cold easily
    pub cold_feet: bool,
    /// Temperature below which the rider wants a head covering (informational)
    pub head_covering_threshold_celsius: Option<f64>,
}

impl Default for RiderThermalProfile {
    /// The "no profile yet" rider: zero offset, no cold extremities
    fn default() -> Self {
        Self {
            personalization_offset: 0.0,
            sensitivity: ThermalSensitivity::Neutral,
            cold_hands: false,
            cold_feet: false,
            head_covering_threshold_celsius: None,
        }
    }
}

impl RiderThermalProfile {
    /// Profile for a possibly absent rider record
    #[must_use]
    pub fn or_default(profile: Option<&Self>) -> Self {
        profile.copied().unwrap_or_default()
    }

    /// Set the personalization offset
    #[must_use]
    pub const fn with_offset(mut self, offset_celsius: f64) -> Self {
        self.personalization_offset = offset_celsius;
        self
    }

    /// Apply a personalization snapshot
    #[must_use]
    pub const fn with_snapshot(self, snapshot: &PersonalizationSnapshot) -> Self {
        self.with_offset(snapshot.offset_celsius)
    }

    /// Set the cold-hands flag
    #[must_use]
    pub const fn with_cold_hands(mut self, cold_hands: bool) -> Self {
        self.cold_hands = cold_hands;
        self
    }

    /// Set the cold-feet flag
    #[must_use]
    pub const fn with_cold_feet(mut self, cold_feet: bool) -> Self {
        self.cold_feet = cold_feet;
        self
    }

    /// Set the general sensitivity
    #[must_use]
    pub const fn with_sensitivity(mut self, sensitivity: ThermalSensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }
}
