// ABOUTME: Declarative rule rows and the per-slot rule table set read by the zone engine
// ABOUTME: A row matches at or below its maximum temperature, subject to optional constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rule Tables
//!
//! Each garment slot is decided by an ordered table of [`Rule`] rows. Rows
//! are ordered by non-decreasing maximum temperature and every table ends
//! with an unbounded, unconstrained catch-all row. Adjusting a threshold is a
//! data change in [`tables`]; the matcher in `zone_engine` never changes.

/// The standard rule tables
pub mod tables;

use outfit_core::garments::{
    ArmCoverage, BaseLayer, GarmentDomain, GarmentSlot, HandWear, HeadGear, LegWear, MidLayer,
    NeckWear, OuterLayer, ShoeCover, SockType,
};
use outfit_core::models::ActivityType;
use serde::Serialize;

/// One row of a slot's decision table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule<G: 'static> {
    /// Highest effective temperature this row covers; `None` means no limit
    pub max_temp: Option<f64>,
    /// Garment selected when the row matches
    pub value: G,
    /// Row only matches when wind is at least this strong (km/h)
    pub min_wind_kmh: Option<f64>,
    /// Row only matches for these activity types
    pub activities: Option<&'static [ActivityType]>,
    /// Row only matches when the cold-hands flag has this value
    pub cold_hands: Option<bool>,
    /// Row only matches when the cold-feet flag has this value
    pub cold_feet: Option<bool>,
}

impl<G: Copy + 'static> Rule<G> {
    /// Row covering effective temperatures up to and including `max_temp`
    #[must_use]
    pub const fn up_to(max_temp: f64, value: G) -> Self {
        Self {
            max_temp: Some(max_temp),
            value,
            min_wind_kmh: None,
            activities: None,
            cold_hands: None,
            cold_feet: None,
        }
    }

    /// Unbounded, unconstrained final row
    #[must_use]
    pub const fn catch_all(value: G) -> Self {
        Self {
            max_temp: None,
            value,
            min_wind_kmh: None,
            activities: None,
            cold_hands: None,
            cold_feet: None,
        }
    }

    /// Require a minimum wind speed
    #[must_use]
    pub const fn with_min_wind(mut self, min_wind_kmh: f64) -> Self {
        self.min_wind_kmh = Some(min_wind_kmh);
        self
    }

    /// Restrict to an activity allow-list
    #[must_use]
    pub const fn for_activities(mut self, activities: &'static [ActivityType]) -> Self {
        self.activities = Some(activities);
        self
    }

    /// Require a cold-hands flag value
    #[must_use]
    pub const fn when_cold_hands(mut self, cold_hands: bool) -> Self {
        self.cold_hands = Some(cold_hands);
        self
    }

    /// Require a cold-feet flag value
    #[must_use]
    pub const fn when_cold_feet(mut self, cold_feet: bool) -> Self {
        self.cold_feet = Some(cold_feet);
        self
    }

    /// Whether the row carries any constraint besides its temperature bound
    #[must_use]
    pub const fn is_constrained(&self) -> bool {
        self.min_wind_kmh.is_some()
            || self.activities.is_some()
            || self.cold_hands.is_some()
            || self.cold_feet.is_some()
    }
}

/// Type-erased view of a rule row, used by the consistency check and reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    /// Row position within its table
    pub index: usize,
    /// Maximum temperature (`None` = unbounded)
    pub max_temp: Option<f64>,
    /// Wire string of the row's garment
    pub value: &'static str,
    /// Slot the row's garment type belongs to
    pub value_slot: GarmentSlot,
    /// Whether the row carries extra constraints
    pub constrained: bool,
}

/// Type-erased view of one slot's table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    /// Slot the table is wired to
    pub slot: GarmentSlot,
    /// Rows in evaluation order
    pub rows: Vec<RowSummary>,
}

fn summarize<G: GarmentDomain>(slot: GarmentSlot, table: &[Rule<G>]) -> TableSummary {
    TableSummary {
        slot,
        rows: table
            .iter()
            .enumerate()
            .map(|(index, rule)| RowSummary {
                index,
                max_temp: rule.max_temp,
                value: rule.value.as_str(),
                value_slot: G::SLOT,
                constrained: rule.is_constrained(),
            })
            .collect(),
    }
}

/// The ten rule tables the assembler consults, one per slot
#[derive(Debug, Clone, Copy)]
pub struct RuleTableSet {
    /// Head covering
    pub head: &'static [Rule<HeadGear>],
    /// Torso base layer
    pub torso_base: &'static [Rule<BaseLayer>],
    /// Torso mid layer
    pub torso_mid: &'static [Rule<MidLayer>],
    /// Torso outer layer (below the rain override)
    pub torso_outer: &'static [Rule<OuterLayer>],
    /// Arm coverage
    pub arms: &'static [Rule<ArmCoverage>],
    /// Gloves
    pub hands: &'static [Rule<HandWear>],
    /// Leg coverage
    pub legs: &'static [Rule<LegWear>],
    /// Socks
    pub feet_socks: &'static [Rule<SockType>],
    /// Shoe covers (below the waterproof override)
    pub feet_covers: &'static [Rule<ShoeCover>],
    /// Neck covering
    pub neck: &'static [Rule<NeckWear>],
}

impl RuleTableSet {
    /// The standard production tables
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            head: tables::HEAD_RULES,
            torso_base: tables::TORSO_BASE_RULES,
            torso_mid: tables::TORSO_MID_RULES,
            torso_outer: tables::TORSO_OUTER_RULES,
            arms: tables::ARMS_RULES,
            hands: tables::HANDS_RULES,
            legs: tables::LEGS_RULES,
            feet_socks: tables::FEET_SOCKS_RULES,
            feet_covers: tables::FEET_COVERS_RULES,
            neck: tables::NECK_RULES,
        }
    }

    /// Type-erased summaries of all ten tables in slot order
    #[must_use]
    pub fn summaries(&self) -> Vec<TableSummary> {
        vec![
            summarize(GarmentSlot::Head, self.head),
            summarize(GarmentSlot::TorsoBase, self.torso_base),
            summarize(GarmentSlot::TorsoMid, self.torso_mid),
            summarize(GarmentSlot::TorsoOuter, self.torso_outer),
            summarize(GarmentSlot::Arms, self.arms),
            summarize(GarmentSlot::Hands, self.hands),
            summarize(GarmentSlot::Legs, self.legs),
            summarize(GarmentSlot::FeetSocks, self.feet_socks),
            summarize(GarmentSlot::FeetCovers, self.feet_covers),
            summarize(GarmentSlot::Neck, self.neck),
        ]
    }
}

impl Default for RuleTableSet {
    fn default() -> Self {
        Self::standard()
    }
}
