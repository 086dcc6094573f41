// ABOUTME: Environment configuration for the ride outfit CLI
// ABOUTME: Combines deployment environment, logging settings, and validated engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::logging::LoggingConfig;
use outfit_engine::config::{ConfigError, OutfitEngineConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
            Self::Testing => f.write_str("testing"),
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Engine configuration (defaults when `OUTFIT_*` overrides are invalid)
    pub engine: OutfitEngineConfig,
    /// Why the engine configuration fell back to defaults, if it did
    pub engine_fallback: Option<ConfigError>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Invalid engine overrides are replaced by defaults and kept in
    /// `engine_fallback`; [`AppConfig::log_summary`] reports them once a
    /// subscriber is installed.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let (engine, engine_fallback) = match OutfitEngineConfig::load() {
            Ok(engine) => (engine, None),
            Err(e) => (OutfitEngineConfig::default(), Some(e)),
        };

        Self {
            environment,
            logging: LoggingConfig::from_env(),
            engine,
            engine_fallback,
        }
    }

    /// Log a summary of the loaded configuration, warning about any fallback
    pub fn log_summary(&self) {
        if let Some(error) = &self.engine_fallback {
            warn!(
                error = %error,
                "Invalid outfit engine configuration, using defaults"
            );
        }

        let adjustments = &self.engine.activity_adjustments;
        let precipitation = &self.engine.precipitation;
        info!(
            environment = %self.environment,
            adjustment.recovery = adjustments.recovery,
            adjustment.easy = adjustments.easy,
            adjustment.tempo = adjustments.tempo,
            adjustment.intervals = adjustments.intervals,
            rain_shell_threshold_mm = precipitation.rain_shell_threshold_mm,
            waterproof_cover_threshold_mm = precipitation.waterproof_cover_threshold_mm,
            "Configuration loaded"
        );
    }
}
