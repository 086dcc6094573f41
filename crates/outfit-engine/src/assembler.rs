// ABOUTME: Outfit assembler orchestrating effective temperature and per-slot rule selection
// ABOUTME: Applies precipitation overrides, packs ten slots into seven zones, supports batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Outfit assembly
//!
//! The assembler computes the effective temperature once, decides each of
//! the ten slots, and shapes them into the seven-zone
//! [`OutfitRecommendation`]. Two slots have precipitation precedence: the
//! outer layer above the rain-shell threshold and shoe covers above the
//! waterproof-cover threshold ignore their temperature tables.
//!
//! The assembler never fails. A table with no matching row degrades to the
//! slot's `none` value and is logged as a configuration error.

use outfit_core::garments::{GarmentDomain, GarmentSlot};
use outfit_core::models::{
    ActivityContext, ActivityType, FeetOutfit, OutfitRecommendation, RiderThermalProfile,
    TorsoOutfit, WeatherConditions,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::OutfitEngineConfig;
use crate::rules::tables::{RAIN_SHELL, WATERPROOF_COVER};
use crate::rules::{Rule, RuleTableSet};
use crate::temperature::EffectiveTemperatureCalculator;
use crate::zone_engine::{select_rule, RuleContext};

/// Where a slot's value came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionSource {
    /// A rule table row matched
    Rule {
        /// Row position in the slot's table
        index: usize,
        /// Row's maximum temperature (`None` = unbounded)
        max_temp: Option<f64>,
    },
    /// Precipitation exceeded the slot's override threshold
    PrecipitationOverride {
        /// Raw precipitation in mm
        precipitation_mm: f64,
        /// Threshold that was exceeded
        threshold_mm: f64,
    },
    /// No row matched; the slot fell back to `none`
    Fallback,
}

/// One slot's decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotDecision {
    /// Slot decided
    pub slot: GarmentSlot,
    /// Wire value chosen
    pub value: &'static str,
    /// How it was chosen
    pub source: DecisionSource,
}

/// Explanation of a recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationTrace {
    /// Effective temperature every table was keyed on
    pub effective_temperature: f64,
    /// Activity the adjustment and allow-lists used
    pub activity: ActivityType,
    /// Per-slot decisions in output order
    pub slots: Vec<SlotDecision>,
}

impl RecommendationTrace {
    /// Decision for a slot
    #[must_use]
    pub fn decision(&self, slot: GarmentSlot) -> Option<&SlotDecision> {
        self.slots.iter().find(|decision| decision.slot == slot)
    }

    /// Slots that fell back to `none` because no row matched
    #[must_use]
    pub fn fallbacks(&self) -> Vec<GarmentSlot> {
        self.slots
            .iter()
            .filter(|decision| decision.source == DecisionSource::Fallback)
            .map(|decision| decision.slot)
            .collect()
    }
}

/// Inputs for one recommendation, used by batch evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutfitRequest {
    /// Weather snapshot
    pub weather: WeatherConditions,
    /// Planned ride
    pub activity: ActivityContext,
    /// Rider profile, absent for riders without one yet
    pub profile: Option<RiderThermalProfile>,
}

/// Orchestrates the calculator and the zone engine across all slots
#[derive(Debug, Clone, Copy)]
pub struct OutfitAssembler {
    config: OutfitEngineConfig,
    calculator: EffectiveTemperatureCalculator,
    tables: RuleTableSet,
}

impl Default for OutfitAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl OutfitAssembler {
    /// Create an assembler with the global configuration and standard tables
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(*OutfitEngineConfig::global())
    }

    /// Create with an explicit configuration and the standard tables
    #[must_use]
    pub const fn with_config(config: OutfitEngineConfig) -> Self {
        Self::with_tables(config, RuleTableSet::standard())
    }

    /// Create with an explicit configuration and rule tables
    #[must_use]
    pub const fn with_tables(config: OutfitEngineConfig, tables: RuleTableSet) -> Self {
        Self {
            config,
            calculator: EffectiveTemperatureCalculator::new(config.activity_adjustments),
            tables,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &OutfitEngineConfig {
        &self.config
    }

    /// Rule tables in use
    #[must_use]
    pub const fn tables(&self) -> &RuleTableSet {
        &self.tables
    }

    /// Effective temperature for a request
    #[must_use]
    pub fn effective_temperature(
        &self,
        weather: &WeatherConditions,
        activity: &ActivityContext,
        profile: Option<&RiderThermalProfile>,
    ) -> f64 {
        let profile = RiderThermalProfile::or_default(profile);
        self.calculator.calculate(
            weather.temperature_celsius,
            profile.personalization_offset,
            activity.activity_type,
        )
    }

    /// Recommend an outfit
    #[must_use]
    pub fn recommend(
        &self,
        weather: &WeatherConditions,
        activity: &ActivityContext,
        profile: Option<&RiderThermalProfile>,
    ) -> OutfitRecommendation {
        self.recommend_with_trace(weather, activity, profile).0
    }

    /// Recommend an outfit for a bundled request
    #[must_use]
    pub fn recommend_request(&self, request: &OutfitRequest) -> OutfitRecommendation {
        self.recommend(&request.weather, &request.activity, request.profile.as_ref())
    }

    /// Recommend outfits for independent requests in parallel, preserving input order
    #[must_use]
    pub fn recommend_batch(&self, requests: &[OutfitRequest]) -> Vec<OutfitRecommendation> {
        requests
            .par_iter()
            .map(|request| self.recommend_request(request))
            .collect()
    }

    /// Recommend an outfit and explain every slot's decision
    #[must_use]
    pub fn recommend_with_trace(
        &self,
        weather: &WeatherConditions,
        activity: &ActivityContext,
        profile: Option<&RiderThermalProfile>,
    ) -> (OutfitRecommendation, RecommendationTrace) {
        let profile = RiderThermalProfile::or_default(profile);
        let effective_temperature = self.calculator.calculate(
            weather.temperature_celsius,
            profile.personalization_offset,
            activity.activity_type,
        );
        let context = RuleContext::from_inputs(weather, activity, &profile);
        let mut decisions = Vec::with_capacity(GarmentSlot::ALL.len());

        let head = decide(self.tables.head, effective_temperature, &context, &mut decisions);
        let base = decide(
            self.tables.torso_base,
            effective_temperature,
            &context,
            &mut decisions,
        );
        let mid = decide(
            self.tables.torso_mid,
            effective_temperature,
            &context,
            &mut decisions,
        );
        let outer = precipitation_override(
            RAIN_SHELL,
            self.config.precipitation.rain_shell_threshold_mm,
            &context,
            &mut decisions,
        )
        .unwrap_or_else(|| {
            decide(
                self.tables.torso_outer,
                effective_temperature,
                &context,
                &mut decisions,
            )
        });
        let arms = decide(self.tables.arms, effective_temperature, &context, &mut decisions);
        let hands = decide(self.tables.hands, effective_temperature, &context, &mut decisions);
        let legs = decide(self.tables.legs, effective_temperature, &context, &mut decisions);
        let socks = decide(
            self.tables.feet_socks,
            effective_temperature,
            &context,
            &mut decisions,
        );
        let covers = precipitation_override(
            WATERPROOF_COVER,
            self.config.precipitation.waterproof_cover_threshold_mm,
            &context,
            &mut decisions,
        )
        .unwrap_or_else(|| {
            decide(
                self.tables.feet_covers,
                effective_temperature,
                &context,
                &mut decisions,
            )
        });
        let neck = decide(self.tables.neck, effective_temperature, &context, &mut decisions);

        let outfit = OutfitRecommendation {
            head,
            torso: TorsoOutfit { base, mid, outer },
            arms,
            hands,
            legs,
            feet: FeetOutfit { socks, covers },
            neck,
        };

        debug!(
            raw_temperature = weather.temperature_celsius,
            effective_temperature,
            activity = %context.activity,
            wind_speed_kmh = weather.wind_speed_kmh,
            precipitation_mm = weather.precipitation_mm,
            "Outfit recommended"
        );

        let trace = RecommendationTrace {
            effective_temperature,
            activity: context.activity,
            slots: decisions,
        };
        (outfit, trace)
    }
}

/// Run the zone engine for one slot and record the decision
fn decide<G: GarmentDomain>(
    table: &[Rule<G>],
    effective_temperature: f64,
    context: &RuleContext,
    decisions: &mut Vec<SlotDecision>,
) -> G {
    let (value, source) = match select_rule(table, effective_temperature, context) {
        Some((index, rule)) => (
            rule.value,
            DecisionSource::Rule {
                index,
                max_temp: rule.max_temp,
            },
        ),
        None => {
            error!(
                slot = %G::SLOT,
                effective_temperature,
                rows = table.len(),
                "No rule matched; rule table is missing its catch-all row, falling back to none"
            );
            (G::NONE, DecisionSource::Fallback)
        }
    };
    decisions.push(SlotDecision {
        slot: G::SLOT,
        value: value.as_str(),
        source,
    });
    value
}

/// `value` when raw precipitation exceeds `threshold_mm`
fn precipitation_override<G: GarmentDomain>(
    value: G,
    threshold_mm: f64,
    context: &RuleContext,
    decisions: &mut Vec<SlotDecision>,
) -> Option<G> {
    if context.precipitation_mm <= threshold_mm {
        return None;
    }
    decisions.push(SlotDecision {
        slot: G::SLOT,
        value: value.as_str(),
        source: DecisionSource::PrecipitationOverride {
            precipitation_mm: context.precipitation_mm,
            threshold_mm,
        },
    });
    Some(value)
}
