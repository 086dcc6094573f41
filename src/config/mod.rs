// ABOUTME: Configuration module for the ride outfit CLI and library consumers
// ABOUTME: Gathers runtime environment, logging settings, and the engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Ride Outfit
//!
//! All configuration comes from environment variables:
//!
//! - **Environment**: deployment environment and logging settings
//! - **Engine**: activity adjustments, precipitation thresholds, and
//!   personalization policy (`OUTFIT_*`), owned by `outfit-engine`

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
pub use outfit_engine::config::{
    ActivityAdjustments, ConfigError, OutfitEngineConfig, PersonalizationPolicy,
    PrecipitationOverrides,
};
