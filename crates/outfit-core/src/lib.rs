// ABOUTME: Core types and constants for the ride outfit recommendation platform
// ABOUTME: Foundation crate with error handling, domain models, garment domains, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Outfit Core
//!
//! Foundation crate providing shared types and constants for cycling outfit
//! recommendations. This crate is designed to change infrequently so both the
//! decision engine and the feedback validator can depend on a single
//! definition of every garment value.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Engine defaults organized by domain
//! - **models**: Weather, activity, rider profile, and outfit structures
//! - **garments**: Closed per-zone garment domains and the worn-outfit validator

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (weather, activity, rider profile, outfit)
pub mod models;

/// Closed garment value domains shared by the engine and the feedback validator
pub mod garments;
