// ABOUTME: Generic first-match rule selection over a slot's ordered rule table
// ABOUTME: Applies temperature, wind, activity, cold-hands, and cold-feet constraints uniformly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Zone rule engine
//!
//! One matcher interprets every slot's table. A row is eligible when every
//! constraint it declares holds; the first eligible row wins. Selection is
//! pure and total: a table without a matching row yields the domain's `none`
//! value, which callers report as a configuration defect.

use outfit_core::garments::GarmentDomain;
use outfit_core::models::{ActivityContext, ActivityType, RiderThermalProfile, WeatherConditions};

use crate::rules::Rule;

/// Conditions every row constraint is evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleContext {
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Resolved activity type (unclassified rides are `Easy`)
    pub activity: ActivityType,
    /// Rider's cold-hands flag
    pub cold_hands: bool,
    /// Rider's cold-feet flag
    pub cold_feet: bool,
    /// Raw, unadjusted precipitation in mm
    pub precipitation_mm: f64,
}

impl RuleContext {
    /// Build the context for one request
    #[must_use]
    pub fn from_inputs(
        weather: &WeatherConditions,
        activity: &ActivityContext,
        profile: &RiderThermalProfile,
    ) -> Self {
        Self {
            wind_speed_kmh: weather.wind_speed_kmh,
            activity: activity.effective_activity(),
            cold_hands: profile.cold_hands,
            cold_feet: profile.cold_feet,
            precipitation_mm: weather.precipitation_mm,
        }
    }
}

impl Default for RuleContext {
    fn default() -> Self {
        Self {
            wind_speed_kmh: 0.0,
            activity: ActivityType::Easy,
            cold_hands: false,
            cold_feet: false,
            precipitation_mm: 0.0,
        }
    }
}

impl<G: Copy + 'static> Rule<G> {
    /// Whether this row is eligible at `effective_temperature` in `context`
    #[must_use]
    pub fn matches(&self, effective_temperature: f64, context: &RuleContext) -> bool {
        let within_temperature = self
            .max_temp
            .is_none_or(|max_temp| effective_temperature <= max_temp);
        let windy_enough = self
            .min_wind_kmh
            .is_none_or(|min_wind| context.wind_speed_kmh >= min_wind);
        let activity_allowed = self
            .activities
            .is_none_or(|allowed| allowed.contains(&context.activity));
        let hands_match = self
            .cold_hands
            .is_none_or(|required| required == context.cold_hands);
        let feet_match = self
            .cold_feet
            .is_none_or(|required| required == context.cold_feet);

        within_temperature && windy_enough && activity_allowed && hands_match && feet_match
    }
}

/// First eligible row and its position, or `None` when no row matches
#[must_use]
pub fn select_rule<'a, G: Copy + 'static>(
    table: &'a [Rule<G>],
    effective_temperature: f64,
    context: &RuleContext,
) -> Option<(usize, &'a Rule<G>)> {
    table
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(effective_temperature, context))
}

/// Garment selected by the first eligible row, or the domain's `none` value
#[must_use]
pub fn select<G: GarmentDomain>(
    table: &[Rule<G>],
    effective_temperature: f64,
    context: &RuleContext,
) -> G {
    select_rule(table, effective_temperature, context).map_or(G::NONE, |(_, rule)| rule.value)
}
