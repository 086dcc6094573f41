// ABOUTME: Shared test utilities and fixtures for ride outfit integration tests
// ABOUTME: Provides quiet logging setup, temperature grids, and standard request builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `ride_outfit`

use outfit_core::models::{ActivityContext, ActivityType, RiderThermalProfile, WeatherConditions};
use outfit_engine::{OutfitAssembler, OutfitEngineConfig};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Lowest temperature of the property sweeps
pub const SWEEP_MIN_CELSIUS: f64 = -30.0;
/// Highest temperature of the property sweeps
pub const SWEEP_MAX_CELSIUS: f64 = 45.0;
/// Step of the property sweeps
pub const SWEEP_STEP_CELSIUS: f64 = 0.5;

/// Temperatures from -30 to 45 degrees in 0.5 degree steps, ascending
pub fn temperature_grid() -> Vec<f64> {
    let steps = ((SWEEP_MAX_CELSIUS - SWEEP_MIN_CELSIUS) / SWEEP_STEP_CELSIUS) as usize;
    (0..=steps)
        .map(|step| SWEEP_MIN_CELSIUS + step as f64 * SWEEP_STEP_CELSIUS)
        .collect()
}

/// Assembler with default configuration and standard tables
pub fn default_assembler() -> OutfitAssembler {
    init_test_logging();
    OutfitAssembler::with_config(OutfitEngineConfig::default())
}

/// Rider flag combinations exercised by the sweeps
pub fn rider_profiles() -> Vec<RiderThermalProfile> {
    vec![
        RiderThermalProfile::default(),
        RiderThermalProfile::default().with_cold_hands(true),
        RiderThermalProfile::default().with_cold_feet(true),
        RiderThermalProfile::default()
            .with_cold_hands(true)
            .with_cold_feet(true),
    ]
}

/// Activity contexts exercised by the sweeps, including an unclassified ride
pub fn activity_contexts() -> Vec<ActivityContext> {
    let mut contexts: Vec<ActivityContext> = ActivityType::ALL
        .into_iter()
        .map(|activity| ActivityContext::new(activity, 90))
        .collect();
    contexts.push(ActivityContext::unclassified(90));
    contexts
}

/// Wind speeds exercised by the sweeps (calm, breezy, windy)
pub const WIND_SPEEDS_KMH: [f64; 3] = [0.0, 20.0, 35.0];

/// Dry weather at `temperature` with `wind` km/h
pub const fn dry(temperature: f64, wind: f64) -> WeatherConditions {
    WeatherConditions::new(temperature, wind, 0.0)
}
