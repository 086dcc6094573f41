// ABOUTME: Planned ride intensity enumeration and activity context
// ABOUTME: Defines the closed activity type set with lenient parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Planned ride intensity
///
/// Higher intensities produce more body heat, which shifts the effective
/// temperature up and selects lighter garments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Very low intensity spin
    Recovery,
    /// Endurance pace (neutral baseline)
    #[default]
    Easy,
    /// Sustained threshold-ish effort
    Tempo,
    /// Repeated hard efforts
    Intervals,
}

impl ActivityType {
    /// Every activity type, lowest intensity first
    pub const ALL: [Self; 4] = [Self::Recovery, Self::Easy, Self::Tempo, Self::Intervals];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recovery => "recovery",
            Self::Easy => "easy",
            Self::Tempo => "tempo",
            Self::Intervals => "intervals",
        }
    }

    /// Parse a caller-supplied activity name, returning `None` for unknown names
    ///
    /// Unknown names are not an error for the engine: they fall back to the
    /// neutral `Easy` adjustment.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Resolve an optional activity to the one the engine uses
    #[must_use]
    pub fn or_default(activity: Option<Self>) -> Self {
        activity.unwrap_or_default()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recovery" => Ok(Self::Recovery),
            "easy" | "endurance" => Ok(Self::Easy),
            "tempo" => Ok(Self::Tempo),
            "intervals" | "interval" => Ok(Self::Intervals),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity type: '{other}'. Valid options: recovery, easy, tempo, intervals"
            ))),
        }
    }
}

/// Planned ride for one recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityContext {
    /// Planned intensity; `None` when the caller could not classify it
    pub activity_type: Option<ActivityType>,
    /// Planned duration in minutes (informational)
    pub duration_minutes: u32,
}

impl ActivityContext {
    /// Create an activity context
    #[must_use]
    pub const fn new(activity_type: ActivityType, duration_minutes: u32) -> Self {
        Self {
            activity_type: Some(activity_type),
            duration_minutes,
        }
    }

    /// Context whose intensity is unknown
    #[must_use]
    pub const fn unclassified(duration_minutes: u32) -> Self {
        Self {
            activity_type: None,
            duration_minutes,
        }
    }

    /// Intensity the engine applies (`Easy` when unclassified)
    #[must_use]
    pub fn effective_activity(&self) -> ActivityType {
        ActivityType::or_default(self.activity_type)
    }
}

impl Default for ActivityContext {
    fn default() -> Self {
        Self::new(ActivityType::Easy, 60)
    }
}
