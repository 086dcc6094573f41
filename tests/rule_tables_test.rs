// ABOUTME: Tests for rule table well-formedness, domain containment, and monotonic warming
// ABOUTME: Sweeps every slot across temperature grids and checks the consistency checker on broken tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use outfit_core::errors::ErrorCode;
use outfit_core::garments::{GarmentSlot, HandWear, HeadGear, LegWear, NeckWear};
use outfit_core::models::{OutfitRecommendation, WeatherConditions};
use outfit_engine::zone_engine::select_rule;
use outfit_engine::{
    check_rule_tables, ensure_rule_tables, DefectKind, Rule, RuleContext, RuleTableSet,
};

const UNORDERED_HEAD: &[Rule<HeadGear>] = &[
    Rule::up_to(10.0, HeadGear::Headband),
    Rule::up_to(5.0, HeadGear::ThermalCap),
    Rule::catch_all(HeadGear::None),
];

const BOUNDED_LEGS: &[Rule<LegWear>] = &[
    Rule::up_to(5.0, LegWear::ThermalBibTights),
    Rule::up_to(30.0, LegWear::BibShorts),
];

const CONSTRAINED_NECK: &[Rule<NeckWear>] = &[
    Rule::up_to(0.0, NeckWear::ThermalNeckGaiter),
    Rule::catch_all(NeckWear::None).with_min_wind(10.0),
];

const NAN_HANDS: &[Rule<HandWear>] = &[
    Rule::up_to(f64::NAN, HandWear::WinterGloves),
    Rule::catch_all(HandWear::FingerlessGloves),
];

/// Warmth rank of a slot value: position in the slot's domain, `none` = 0
fn warmth(slot: GarmentSlot, value: &str) -> usize {
    slot.accepted_values()
        .iter()
        .position(|accepted| *accepted == value)
        .unwrap()
}

#[test]
fn test_standard_tables_are_well_formed() {
    common::init_test_logging();
    let defects = check_rule_tables(&RuleTableSet::standard());
    assert!(defects.is_empty(), "unexpected defects: {defects:?}");
    ensure_rule_tables(&RuleTableSet::standard()).unwrap();
}

#[test]
fn test_every_table_ends_with_unconstrained_catch_all() {
    for table in RuleTableSet::standard().summaries() {
        let last = table.rows.last().unwrap();
        assert!(last.max_temp.is_none(), "{} has a bounded last row", table.slot);
        assert!(!last.constrained, "{} has a constrained last row", table.slot);
    }
}

#[test]
fn test_thresholds_are_non_decreasing() {
    for table in RuleTableSet::standard().summaries() {
        let bounds: Vec<f64> = table.rows.iter().filter_map(|row| row.max_temp).collect();
        assert!(
            bounds.windows(2).all(|pair| pair[0] <= pair[1]),
            "{} is not ordered: {bounds:?}",
            table.slot
        );
    }
}

#[test]
fn test_every_table_value_is_in_validator_domain() {
    let tables = RuleTableSet::standard().summaries();
    assert_eq!(tables.len(), GarmentSlot::ALL.len());
    for (table, slot) in tables.iter().zip(GarmentSlot::ALL) {
        assert_eq!(table.slot, slot);
        for row in &table.rows {
            assert_eq!(row.value_slot, slot);
            assert!(slot.accepts(row.value), "{slot} row {} value {}", row.index, row.value);
        }
    }
}

/// Threshold of the matched row for every slot; unbounded rows map to +inf
fn matched_thresholds(tables: &RuleTableSet, effective: f64, ctx: &RuleContext) -> Vec<f64> {
    let bound = |max_temp: Option<f64>| max_temp.unwrap_or(f64::INFINITY);
    vec![
        bound(select_rule(tables.head, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.torso_base, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.torso_mid, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.torso_outer, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.arms, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.hands, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.legs, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.feet_socks, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.feet_covers, effective, ctx).unwrap().1.max_temp),
        bound(select_rule(tables.neck, effective, ctx).unwrap().1.max_temp),
    ]
}

#[test]
fn test_matched_threshold_is_monotonic_in_temperature() {
    common::init_test_logging();
    let tables = RuleTableSet::standard();
    for activity in common::activity_contexts() {
        for profile in common::rider_profiles() {
            for wind in common::WIND_SPEEDS_KMH {
                let weather = WeatherConditions::new(0.0, wind, 0.0);
                let ctx = RuleContext::from_inputs(&weather, &activity, &profile);
                let mut previous: Option<Vec<f64>> = None;
                for effective in common::temperature_grid() {
                    let current = matched_thresholds(&tables, effective, &ctx);
                    if let Some(previous) = &previous {
                        for (index, (before, after)) in previous.iter().zip(&current).enumerate() {
                            assert!(
                                after >= before,
                                "slot {} threshold dropped at {effective} (ctx {ctx:?})",
                                GarmentSlot::ALL[index]
                            );
                        }
                    }
                    previous = Some(current);
                }
            }
        }
    }
}

#[test]
fn test_warmth_never_increases_as_temperature_rises() {
    let assembler = common::default_assembler();
    for activity in common::activity_contexts() {
        for profile in common::rider_profiles() {
            for wind in common::WIND_SPEEDS_KMH {
                let mut previous: Option<OutfitRecommendation> = None;
                for temperature in common::temperature_grid() {
                    let weather = common::dry(temperature, wind);
                    let outfit = assembler.recommend(&weather, &activity, Some(&profile));
                    if let Some(previous) = previous {
                        for slot in GarmentSlot::ALL {
                            let before = warmth(slot, previous.slot_value(slot));
                            let after = warmth(slot, outfit.slot_value(slot));
                            assert!(
                                after <= before,
                                "{slot} got warmer at {temperature} C (wind {wind}, {activity:?}, {profile:?})"
                            );
                        }
                    }
                    previous = Some(outfit);
                }
            }
        }
    }
}

#[test]
fn test_order_violation_is_reported() {
    let tables = RuleTableSet {
        head: UNORDERED_HEAD,
        ..RuleTableSet::standard()
    };
    let defects = check_rule_tables(&tables);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].slot, GarmentSlot::Head);
    assert_eq!(defects[0].row, Some(1));
    assert!(matches!(
        defects[0].kind,
        DefectKind::OrderViolation { max_temp, previous_max_temp }
            if (max_temp - 5.0).abs() < f64::EPSILON
                && (previous_max_temp - 10.0).abs() < f64::EPSILON
    ));
}

#[test]
fn test_missing_catch_all_is_reported() {
    let tables = RuleTableSet {
        legs: BOUNDED_LEGS,
        ..RuleTableSet::standard()
    };
    let defects = check_rule_tables(&tables);
    assert!(defects
        .iter()
        .any(|d| d.slot == GarmentSlot::Legs && d.kind == DefectKind::MissingCatchAll));
}

#[test]
fn test_constrained_catch_all_is_reported() {
    let tables = RuleTableSet {
        neck: CONSTRAINED_NECK,
        ..RuleTableSet::standard()
    };
    let defects = check_rule_tables(&tables);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].kind, DefectKind::ConstrainedCatchAll);
    assert_eq!(defects[0].row, Some(1));
}

#[test]
fn test_non_finite_threshold_is_reported() {
    let tables = RuleTableSet {
        hands: NAN_HANDS,
        ..RuleTableSet::standard()
    };
    let defects = check_rule_tables(&tables);
    assert!(defects
        .iter()
        .any(|d| d.slot == GarmentSlot::Hands && d.kind == DefectKind::NonFiniteThreshold));
}

#[test]
fn test_empty_table_is_reported_and_ensure_fails() {
    common::init_test_logging();
    let tables = RuleTableSet {
        arms: &[],
        ..RuleTableSet::standard()
    };
    let defects = check_rule_tables(&tables);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].kind, DefectKind::EmptyTable);
    assert_eq!(defects[0].row, None);

    let error = ensure_rule_tables(&tables).unwrap_err();
    assert_eq!(error.code, ErrorCode::RuleTableDefect);
    assert!(error.message.contains("arms"));
    assert_eq!(error.details["defects"].as_array().unwrap().len(), 1);
}

#[test]
fn test_defect_display_names_slot_and_row() {
    let tables = RuleTableSet {
        head: UNORDERED_HEAD,
        ..RuleTableSet::standard()
    };
    let rendered = check_rule_tables(&tables)[0].to_string();
    assert!(rendered.starts_with("head row 1"), "{rendered}");
}
