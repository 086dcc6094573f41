// ABOUTME: Outfit engine configuration with environment overrides and validation
// ABOUTME: Activity adjustments, precipitation override thresholds, and personalization policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Outfit Engine Configuration
//!
//! Defaults reproduce the standard decision behaviour. Environment variables
//! (`OUTFIT_*`) may override individual values; the result is validated
//! before use and invalid configurations fall back to defaults.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use outfit_core::constants::{activity_adjustments, personalization, precipitation};
use outfit_core::models::ActivityType;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static OUTFIT_ENGINE_CONFIG: OnceLock<OutfitEngineConfig> = OnceLock::new();

/// Effective temperature shift per activity type, in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityAdjustments {
    /// Recovery ride adjustment
    pub recovery: f64,
    /// Easy ride adjustment (also used for unclassified rides)
    pub easy: f64,
    /// Tempo ride adjustment
    pub tempo: f64,
    /// Interval session adjustment
    pub intervals: f64,
}

impl ActivityAdjustments {
    /// Adjustment for an activity type
    #[must_use]
    pub const fn for_activity(&self, activity: ActivityType) -> f64 {
        match activity {
            ActivityType::Recovery => self.recovery,
            ActivityType::Easy => self.easy,
            ActivityType::Tempo => self.tempo,
            ActivityType::Intervals => self.intervals,
        }
    }
}

impl Default for ActivityAdjustments {
    fn default() -> Self {
        Self {
            recovery: activity_adjustments::RECOVERY_CELSIUS,
            easy: activity_adjustments::EASY_CELSIUS,
            tempo: activity_adjustments::TEMPO_CELSIUS,
            intervals: activity_adjustments::INTERVALS_CELSIUS,
        }
    }
}

/// Raw precipitation thresholds above which a slot ignores its temperature table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationOverrides {
    /// Outer layer becomes a rain shell above this (mm)
    pub rain_shell_threshold_mm: f64,
    /// Shoe covers become waterproof above this (mm)
    pub waterproof_cover_threshold_mm: f64,
}

impl Default for PrecipitationOverrides {
    fn default() -> Self {
        Self {
            rain_shell_threshold_mm: precipitation::RAIN_SHELL_THRESHOLD_MM,
            waterproof_cover_threshold_mm: precipitation::WATERPROOF_COVER_THRESHOLD_MM,
        }
    }
}

/// When and how the personalization offset is recomputed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationPolicy {
    /// Recompute whenever the feedback count reaches a multiple of this
    pub recompute_interval: u32,
    /// Most recent feedback entries considered
    pub feedback_window: usize,
    /// Offset magnitude cap in degrees Celsius
    pub max_abs_offset_celsius: f64,
}

impl Default for PersonalizationPolicy {
    fn default() -> Self {
        Self {
            recompute_interval: personalization::RECOMPUTE_INTERVAL,
            feedback_window: personalization::FEEDBACK_WINDOW,
            max_abs_offset_celsius: personalization::MAX_ABS_OFFSET_CELSIUS,
        }
    }
}

/// Main outfit engine configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitEngineConfig {
    /// Activity intensity adjustments
    pub activity_adjustments: ActivityAdjustments,
    /// Precipitation override thresholds
    pub precipitation: PrecipitationOverrides,
    /// Personalization recomputation policy
    pub personalization: PersonalizationPolicy,
}

impl OutfitEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        OUTFIT_ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load outfit engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for negative or non-finite thresholds, unordered
    /// activity adjustments, or a degenerate personalization policy
    pub fn validate(&self) -> Result<(), ConfigError> {
        let adjustments = &self.activity_adjustments;
        let all_adjustments = [
            adjustments.recovery,
            adjustments.easy,
            adjustments.tempo,
            adjustments.intervals,
        ];
        if all_adjustments.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "activity adjustments must be finite",
            ));
        }
        if all_adjustments.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidOrdering(
                "activity adjustments must satisfy recovery <= easy <= tempo <= intervals",
            ));
        }

        let precipitation = &self.precipitation;
        for threshold in [
            precipitation.rain_shell_threshold_mm,
            precipitation.waterproof_cover_threshold_mm,
        ] {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::InvalidRange(
                    "precipitation thresholds must be finite and >= 0 mm",
                ));
            }
        }

        let policy = &self.personalization;
        if policy.recompute_interval == 0 {
            return Err(ConfigError::InvalidRange(
                "personalization recompute interval must be >= 1",
            ));
        }
        if policy.feedback_window == 0 {
            return Err(ConfigError::InvalidRange(
                "personalization feedback window must be >= 1",
            ));
        }
        if !policy.max_abs_offset_celsius.is_finite() || policy.max_abs_offset_celsius <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "personalization max offset must be finite and > 0",
            ));
        }

        Ok(())
    }

    /// Apply a single environment variable override if present
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity adjustments
        Self::apply_env_var(
            "OUTFIT_ADJUSTMENT_RECOVERY",
            &mut self.activity_adjustments.recovery,
        )?;
        Self::apply_env_var("OUTFIT_ADJUSTMENT_EASY", &mut self.activity_adjustments.easy)?;
        Self::apply_env_var("OUTFIT_ADJUSTMENT_TEMPO", &mut self.activity_adjustments.tempo)?;
        Self::apply_env_var(
            "OUTFIT_ADJUSTMENT_INTERVALS",
            &mut self.activity_adjustments.intervals,
        )?;

        // Precipitation overrides
        Self::apply_env_var(
            "OUTFIT_RAIN_SHELL_THRESHOLD_MM",
            &mut self.precipitation.rain_shell_threshold_mm,
        )?;
        Self::apply_env_var(
            "OUTFIT_WATERPROOF_COVER_THRESHOLD_MM",
            &mut self.precipitation.waterproof_cover_threshold_mm,
        )?;

        // Personalization policy
        Self::apply_env_var(
            "OUTFIT_PERSONALIZATION_INTERVAL",
            &mut self.personalization.recompute_interval,
        )?;
        Self::apply_env_var(
            "OUTFIT_PERSONALIZATION_WINDOW",
            &mut self.personalization.feedback_window,
        )?;
        Self::apply_env_var(
            "OUTFIT_PERSONALIZATION_MAX_OFFSET",
            &mut self.personalization.max_abs_offset_celsius,
        )?;

        Ok(self)
    }
}
