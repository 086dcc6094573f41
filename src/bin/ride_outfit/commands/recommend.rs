// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recommend command for ride-outfit
// ABOUTME: Builds a request from flags, runs the assembler, and prints the outfit as JSON

use anyhow::Result;
use clap::Args;
use ride_outfit::models::{
    ActivityContext, ActivityType, OutfitRecommendation, RiderThermalProfile, WeatherConditions,
};
use ride_outfit::outfit_engine::{OutfitAssembler, RecommendationTrace};
use serde::Serialize;
use tracing::{info, warn};

use crate::helpers::display::print_json;

/// Flags for one recommendation
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Air temperature in degrees Celsius
    #[arg(long, allow_hyphen_values = true)]
    temperature: f64,

    /// Feels-like temperature (informational; defaults to the air temperature)
    #[arg(long, allow_hyphen_values = true)]
    feels_like: Option<f64>,

    /// Wind speed in km/h
    #[arg(long, default_value_t = 0.0)]
    wind: f64,

    /// Relative humidity in percent
    #[arg(long, default_value_t = 50.0)]
    humidity: f64,

    /// Precipitation in mm
    #[arg(long, default_value_t = 0.0)]
    precipitation: f64,

    /// Planned activity (recovery, easy, tempo, intervals)
    #[arg(long)]
    activity: Option<String>,

    /// Planned duration in minutes
    #[arg(long, default_value_t = 60)]
    duration: u32,

    /// Personalization offset in degrees Celsius (negative for riders who run cold)
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    offset: f64,

    /// Rider's hands get cold easily
    #[arg(long)]
    cold_hands: bool,

    /// Rider's feet get cold easily
    #[arg(long)]
    cold_feet: bool,

    /// Include the per-slot rule trace
    #[arg(long)]
    trace: bool,
}

#[derive(Serialize)]
struct RecommendOutput {
    effective_temperature: f64,
    activity: ActivityType,
    outfit: OutfitRecommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<RecommendationTrace>,
}

impl RecommendArgs {
    fn weather(&self) -> WeatherConditions {
        WeatherConditions::new(self.temperature, self.wind, self.precipitation)
            .with_feels_like(self.feels_like.unwrap_or(self.temperature))
            .with_humidity(self.humidity)
    }

    fn activity(&self) -> ActivityContext {
        let activity_type = self.activity.as_deref().and_then(|name| {
            let parsed = ActivityType::parse_lenient(name);
            if parsed.is_none() {
                warn!(activity = %name, "Unrecognized activity type, using easy adjustment");
            }
            parsed
        });
        ActivityContext {
            activity_type,
            duration_minutes: self.duration,
        }
    }

    fn profile(&self) -> RiderThermalProfile {
        RiderThermalProfile::default()
            .with_offset(self.offset)
            .with_cold_hands(self.cold_hands)
            .with_cold_feet(self.cold_feet)
    }
}

/// Run the recommend command
pub fn run(assembler: &OutfitAssembler, args: &RecommendArgs) -> Result<()> {
    let weather = args.weather();
    weather.validate()?;
    let activity = args.activity();
    let profile = args.profile();

    let (outfit, trace) = assembler.recommend_with_trace(&weather, &activity, Some(&profile));
    let fallbacks = trace.fallbacks();
    if !fallbacks.is_empty() {
        warn!(?fallbacks, "Some slots fell back to none");
    }
    info!(
        effective_temperature = trace.effective_temperature,
        activity = %trace.activity,
        "Recommendation ready"
    );

    let output = RecommendOutput {
        effective_temperature: trace.effective_temperature,
        activity: trace.activity,
        outfit,
        trace: args.trace.then_some(trace),
    };
    print_json(&output)
}
