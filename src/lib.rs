// ABOUTME: Main library entry point for the ride outfit recommendation platform
// ABOUTME: Re-exports the core domain and decision engine alongside logging and configuration setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ride Outfit
//!
//! Deterministic cycling clothing recommendations. Given a weather snapshot,
//! the planned ride, and an optional rider thermal profile, the engine picks
//! one garment for each of ten slots and returns a seven-zone outfit.
//!
//! ## Architecture
//!
//! - **`outfit-core`**: errors, constants, models, and the closed garment
//!   domains shared with the worn-outfit validator
//! - **`outfit-engine`**: effective temperature, rule tables, the zone
//!   engine, the assembler, the table consistency check, and the
//!   personalization policy
//! - **this crate**: logging and environment configuration for the
//!   `ride-outfit` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ride_outfit::models::{ActivityContext, ActivityType, WeatherConditions};
//! use ride_outfit::outfit_engine::OutfitAssembler;
//!
//! let assembler = OutfitAssembler::new();
//! let weather = WeatherConditions::new(8.0, 12.0, 0.0);
//! let activity = ActivityContext::new(ActivityType::Tempo, 90);
//! let outfit = assembler.recommend(&weather, &activity, None);
//! println!("{}", outfit.torso.outer);
//! ```

pub use outfit_core;
pub use outfit_engine;

pub use outfit_core::{constants, errors, garments, models};

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;
