// ABOUTME: Unit tests for first-match rule selection in the zone engine
// ABOUTME: Covers temperature bounds, wind minimums, activity allow-lists, extremity flags, and fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use outfit_core::garments::{HandWear, HeadGear, MidLayer, ShoeCover};
use outfit_core::models::{ActivityContext, ActivityType, RiderThermalProfile, WeatherConditions};
use outfit_engine::rules::tables::{
    FEET_COVERS_RULES, HANDS_RULES, HEAD_RULES, LOW_INTENSITY, TORSO_MID_RULES,
};
use outfit_engine::zone_engine::{select, select_rule};
use outfit_engine::{Rule, RuleContext};

const GAPPY_TABLE: &[Rule<HeadGear>] = &[
    Rule::up_to(0.0, HeadGear::Balaclava),
    Rule::up_to(10.0, HeadGear::Headband).with_min_wind(30.0),
];

fn context() -> RuleContext {
    common::init_test_logging();
    RuleContext::default()
}

#[test]
fn test_boundary_is_inclusive() {
    let ctx = context();
    assert_eq!(select(HEAD_RULES, 5.0, &ctx), HeadGear::ThermalCap);
    assert_eq!(select(HEAD_RULES, 5.01, &ctx), HeadGear::Headband);
}

#[test]
fn test_catch_all_above_every_bound() {
    let ctx = context();
    assert_eq!(select(HEAD_RULES, 40.0, &ctx), HeadGear::None);
    let (index, rule) = select_rule(HEAD_RULES, 40.0, &ctx).unwrap();
    assert_eq!(index, HEAD_RULES.len() - 1);
    assert!(rule.max_temp.is_none());
}

#[test]
fn test_wind_minimum_gates_row() {
    let calm = context();
    let windy = RuleContext {
        wind_speed_kmh: 25.0,
        ..calm
    };
    assert_eq!(select(HEAD_RULES, 14.0, &calm), HeadGear::CyclingCap);
    assert_eq!(select(HEAD_RULES, 14.0, &windy), HeadGear::Headband);
}

#[test]
fn test_activity_allow_list() {
    let easy = context();
    let tempo = RuleContext {
        activity: ActivityType::Tempo,
        ..easy
    };
    assert!(LOW_INTENSITY.contains(&easy.activity));
    assert_eq!(select(TORSO_MID_RULES, -2.0, &easy), MidLayer::InsulatedMidlayer);
    assert_eq!(select(TORSO_MID_RULES, -2.0, &tempo), MidLayer::ThermalJersey);
    assert_eq!(select(TORSO_MID_RULES, 8.0, &easy), MidLayer::ThermalJersey);
    assert_eq!(select(TORSO_MID_RULES, 8.0, &tempo), MidLayer::LongSleeveJersey);
}

#[test]
fn test_unclassified_activity_sees_easy_allow_list() {
    common::init_test_logging();
    let weather = WeatherConditions::calm(-2.0);
    let ctx = RuleContext::from_inputs(
        &weather,
        &ActivityContext::unclassified(60),
        &RiderThermalProfile::default(),
    );
    assert_eq!(ctx.activity, ActivityType::Easy);
    assert_eq!(select(TORSO_MID_RULES, -2.0, &ctx), MidLayer::InsulatedMidlayer);
}

#[test]
fn test_cold_hands_rule_wins_before_generic_row() {
    let ctx = RuleContext {
        cold_hands: true,
        wind_speed_kmh: 5.0,
        ..context()
    };
    let (index, rule) = select_rule(HANDS_RULES, 2.0, &ctx).unwrap();
    assert_eq!(rule.value, HandWear::WinterGloves);
    assert_eq!(rule.cold_hands, Some(true));
    assert_eq!(HANDS_RULES[index].max_temp, Some(5.0));

    let generic = RuleContext {
        cold_hands: false,
        ..ctx
    };
    assert_eq!(select(HANDS_RULES, 2.0, &generic), HandWear::ThermalGloves);
}

#[test]
fn test_cold_feet_flag_gates_toe_covers() {
    let ctx = context();
    let cold_feet = RuleContext {
        cold_feet: true,
        ..ctx
    };
    assert_eq!(select(FEET_COVERS_RULES, 12.0, &ctx), ShoeCover::None);
    assert_eq!(select(FEET_COVERS_RULES, 12.0, &cold_feet), ShoeCover::ToeCovers);
    assert_eq!(select(FEET_COVERS_RULES, 3.0, &ctx), ShoeCover::NeopreneOvershoes);
    assert_eq!(select(FEET_COVERS_RULES, 3.0, &cold_feet), ShoeCover::WinterOvershoes);
}

#[test]
fn test_no_match_falls_back_to_none() {
    let ctx = context();
    assert!(select_rule(GAPPY_TABLE, 5.0, &ctx).is_none());
    assert_eq!(select(GAPPY_TABLE, 5.0, &ctx), HeadGear::None);
    assert_eq!(select(GAPPY_TABLE, -1.0, &ctx), HeadGear::Balaclava);
}

#[test]
fn test_empty_table_falls_back_to_none() {
    let ctx = context();
    let empty: &[Rule<HandWear>] = &[];
    assert_eq!(select(empty, 0.0, &ctx), HandWear::None);
}

#[test]
fn test_row_matches_requires_every_constraint() {
    let row = Rule::up_to(10.0, HeadGear::Headband)
        .with_min_wind(20.0)
        .for_activities(LOW_INTENSITY)
        .when_cold_hands(true);
    let ctx = RuleContext {
        wind_speed_kmh: 25.0,
        cold_hands: true,
        ..context()
    };
    assert!(row.matches(9.0, &ctx));
    assert!(!row.matches(11.0, &ctx));
    assert!(!row.matches(
        9.0,
        &RuleContext {
            wind_speed_kmh: 10.0,
            ..ctx
        }
    ));
    assert!(!row.matches(
        9.0,
        &RuleContext {
            activity: ActivityType::Intervals,
            ..ctx
        }
    ));
    assert!(!row.matches(
        9.0,
        &RuleContext {
            cold_hands: false,
            ..ctx
        }
    ));
}
