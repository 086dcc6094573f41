// ABOUTME: Unit tests for the effective temperature calculator
// ABOUTME: Validates per-activity adjustments, offsets, defaults, and non-finite offset handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use outfit_core::models::ActivityType;
use outfit_engine::config::ActivityAdjustments;
use outfit_engine::EffectiveTemperatureCalculator;

fn calculator() -> EffectiveTemperatureCalculator {
    common::init_test_logging();
    EffectiveTemperatureCalculator::new(ActivityAdjustments::default())
}

#[test]
fn test_activity_adjustments() {
    let calc = calculator();
    assert!((calc.calculate(10.0, 0.0, Some(ActivityType::Recovery)) - 8.0).abs() < f64::EPSILON);
    assert!((calc.calculate(10.0, 0.0, Some(ActivityType::Easy)) - 10.0).abs() < f64::EPSILON);
    assert!((calc.calculate(10.0, 0.0, Some(ActivityType::Tempo)) - 13.0).abs() < f64::EPSILON);
    assert!((calc.calculate(10.0, 0.0, Some(ActivityType::Intervals)) - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_absent_activity_uses_easy_adjustment() {
    let calc = calculator();
    let unclassified = calc.calculate(4.0, 0.0, None);
    let easy = calc.calculate(4.0, 0.0, Some(ActivityType::Easy));
    assert!((unclassified - easy).abs() < f64::EPSILON);
    assert!((unclassified - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_offset_is_added_without_rounding() {
    let calc = calculator();
    let effective = calc.calculate(7.3, -1.7, Some(ActivityType::Tempo));
    assert!((effective - 8.6).abs() < 1e-9);
}

#[test]
fn test_negative_offset_lowers_effective_temperature() {
    let calc = calculator();
    let neutral = calc.calculate(12.0, 0.0, Some(ActivityType::Easy));
    let runs_cold = calc.calculate(12.0, -3.0, Some(ActivityType::Easy));
    assert!(runs_cold < neutral);
}

#[test]
fn test_intervals_on_cold_day() {
    let calc = calculator();
    let effective = calc.calculate(8.0, 0.0, Some(ActivityType::Intervals));
    assert!((effective - 13.0).abs() < f64::EPSILON);
}

#[test]
fn test_non_finite_offset_is_ignored() {
    let calc = calculator();
    for offset in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let effective = calc.calculate(5.0, offset, Some(ActivityType::Easy));
        assert!((effective - 5.0).abs() < f64::EPSILON, "offset {offset}");
    }
}

#[test]
fn test_custom_adjustments() {
    let calc = EffectiveTemperatureCalculator::new(ActivityAdjustments {
        recovery: -3.0,
        easy: 0.0,
        tempo: 2.0,
        intervals: 6.0,
    });
    assert!((calc.calculate(0.0, 0.0, Some(ActivityType::Intervals)) - 6.0).abs() < f64::EPSILON);
    assert!((calc.adjustments().recovery + 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_activity_type_parsing() {
    assert_eq!("Tempo".parse::<ActivityType>().unwrap(), ActivityType::Tempo);
    assert_eq!(" intervals ".parse::<ActivityType>().unwrap(), ActivityType::Intervals);
    assert_eq!("endurance".parse::<ActivityType>().unwrap(), ActivityType::Easy);
    assert!("sprint".parse::<ActivityType>().is_err());
    assert_eq!(ActivityType::parse_lenient("sprint"), None);
    assert_eq!(ActivityType::or_default(None), ActivityType::Easy);
}
