// ABOUTME: Effective temperature calculation from raw reading, rider offset, and ride intensity
// ABOUTME: Produces the single number every slot's rule table is keyed on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Effective temperature
//!
//! `effective = raw + personalization_offset + activity_adjustment`.
//! No rounding is applied; rule tables compare against the real value.

use outfit_core::models::ActivityType;
use tracing::warn;

use crate::config::ActivityAdjustments;

/// Combines raw temperature, personalization offset, and activity adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EffectiveTemperatureCalculator {
    adjustments: ActivityAdjustments,
}

impl EffectiveTemperatureCalculator {
    /// Create a calculator with explicit activity adjustments
    #[must_use]
    pub const fn new(adjustments: ActivityAdjustments) -> Self {
        Self { adjustments }
    }

    /// Activity adjustments in use
    #[must_use]
    pub const fn adjustments(&self) -> &ActivityAdjustments {
        &self.adjustments
    }

    /// Compute the effective temperature
    ///
    /// An absent activity uses the easy adjustment. A non-finite offset is
    /// ignored so one corrupt snapshot cannot poison every slot.
    #[must_use]
    pub fn calculate(
        &self,
        raw_temperature: f64,
        personalization_offset: f64,
        activity: Option<ActivityType>,
    ) -> f64 {
        let offset = if personalization_offset.is_finite() {
            personalization_offset
        } else {
            warn!(
                personalization_offset,
                "Ignoring non-finite personalization offset"
            );
            0.0
        };
        let adjustment = self
            .adjustments
            .for_activity(ActivityType::or_default(activity));

        raw_temperature + offset + adjustment
    }
}
