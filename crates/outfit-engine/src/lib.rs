// ABOUTME: Outfit decision engine mapping weather, activity, and rider profile to garments
// ABOUTME: Exposes rule tables, the effective temperature calculator, zone engine, and assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Outfit Engine
//!
//! Deterministic mapping from (weather, activity, rider thermal profile) to a
//! seven-zone cycling outfit.
//!
//! Control flow is strictly downward:
//! [`OutfitAssembler`] computes the effective temperature once with
//! [`EffectiveTemperatureCalculator`], then asks the zone engine
//! ([`zone_engine::select`]) for each of the ten garment slots, reading the
//! static [`rules::tables`]. Nothing performs I/O and nothing is mutated, so
//! any number of recommendations may run in parallel.

/// Engine configuration (activity adjustments, precipitation overrides, personalization policy)
pub mod config;

/// Effective temperature calculation
pub mod temperature;

/// Rule rows and the static per-slot rule tables
pub mod rules;

/// Generic first-match rule selection
pub mod zone_engine;

/// Orchestration across all slots and output assembly
pub mod assembler;

/// Offline rule table well-formedness and domain containment checks
pub mod consistency;

/// Personalization offset recomputation policy
pub mod personalization;

pub use assembler::{
    DecisionSource, OutfitAssembler, OutfitRequest, RecommendationTrace, SlotDecision,
};
pub use config::{ConfigError, OutfitEngineConfig};
pub use consistency::{check_rule_tables, ensure_rule_tables, DefectKind, TableDefect};
pub use personalization::{compute_offset, should_recompute, ComfortRating, FeedbackEntry};
pub use rules::{Rule, RuleTableSet};
pub use temperature::EffectiveTemperatureCalculator;
pub use zone_engine::RuleContext;
