// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default thresholds and adjustments for outfit decisions, organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Defaults for the engine configuration. The runtime values live in
//! `OutfitEngineConfig`; these are what it starts from.

/// Effective temperature shift per planned activity intensity (degrees Celsius)
pub mod activity_adjustments {
    /// Recovery rides generate little heat
    pub const RECOVERY_CELSIUS: f64 = -2.0;
    /// Easy endurance is the neutral baseline
    pub const EASY_CELSIUS: f64 = 0.0;
    /// Tempo efforts
    pub const TEMPO_CELSIUS: f64 = 3.0;
    /// Interval sessions generate the most heat
    pub const INTERVALS_CELSIUS: f64 = 5.0;
}

/// Raw precipitation thresholds that override temperature-driven choices
pub mod precipitation {
    /// Above this many millimetres the outer layer is always a rain shell
    pub const RAIN_SHELL_THRESHOLD_MM: f64 = 5.0;
    /// Above this many millimetres shoe covers are always waterproof
    pub const WATERPROOF_COVER_THRESHOLD_MM: f64 = 3.0;
}

/// Personalization offset recomputation policy defaults
pub mod personalization {
    /// Recompute the offset every time the feedback count reaches a multiple of this
    pub const RECOMPUTE_INTERVAL: u32 = 5;
    /// Number of most recent feedback entries considered
    pub const FEEDBACK_WINDOW: usize = 20;
    /// Largest magnitude the offset may take (degrees Celsius)
    pub const MAX_ABS_OFFSET_CELSIUS: f64 = 5.0;
}

/// Physical bounds used when validating weather readings
pub mod weather_bounds {
    /// Lowest humidity percentage
    pub const MIN_HUMIDITY_PERCENT: f64 = 0.0;
    /// Highest humidity percentage
    pub const MAX_HUMIDITY_PERCENT: f64 = 100.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name for the recommendation CLI
    pub const RIDE_OUTFIT: &str = "ride-outfit";
}
