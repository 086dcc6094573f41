// ABOUTME: Personalization offset policy: recompute trigger and bounded-average aggregation
// ABOUTME: Turns post-ride comfort feedback into a versioned PersonalizationSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Personalization
//!
//! The recommender only consumes a [`PersonalizationSnapshot`]; it never
//! reads feedback. This module is the policy a collaborator uses to produce
//! that snapshot:
//!
//! - the offset is recomputed whenever the feedback count crosses a positive
//!   multiple of the configured interval, including batch imports that skip
//!   past one
//! - each rating maps to a felt temperature delta, and the offset is the mean
//!   delta over the most recent window, clamped and rounded to 0.1 °C
//!
//! Feeling colder than expected yields a negative offset, which lowers the
//! effective temperature and selects warmer garments.

use chrono::{DateTime, Utc};
use outfit_core::errors::AppError;
use outfit_core::models::PersonalizationSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::config::PersonalizationPolicy;

/// Post-ride comfort rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortRating {
    /// Much colder than comfortable
    TooCold,
    /// A little cold
    SlightlyCold,
    /// Dressed right
    Comfortable,
    /// A little warm
    SlightlyWarm,
    /// Much warmer than comfortable
    TooWarm,
}

impl ComfortRating {
    /// Felt temperature delta in degrees Celsius
    #[must_use]
    pub const fn felt_delta_celsius(self) -> f64 {
        match self {
            Self::TooCold => -2.0,
            Self::SlightlyCold => -1.0,
            Self::Comfortable => 0.0,
            Self::SlightlyWarm => 1.0,
            Self::TooWarm => 2.0,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooCold => "too_cold",
            Self::SlightlyCold => "slightly_cold",
            Self::Comfortable => "comfortable",
            Self::SlightlyWarm => "slightly_warm",
            Self::TooWarm => "too_warm",
        }
    }
}

impl fmt::Display for ComfortRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComfortRating {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "too_cold" => Ok(Self::TooCold),
            "slightly_cold" => Ok(Self::SlightlyCold),
            "comfortable" => Ok(Self::Comfortable),
            "slightly_warm" => Ok(Self::SlightlyWarm),
            "too_warm" => Ok(Self::TooWarm),
            other => Err(AppError::invalid_input(format!(
                "Unknown comfort rating: '{other}'. Valid options: too_cold, slightly_cold, comfortable, slightly_warm, too_warm"
            ))),
        }
    }
}

/// One piece of post-ride feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// How the ride felt
    pub rating: ComfortRating,
    /// When the feedback was recorded
    pub recorded_at: DateTime<Utc>,
}

impl FeedbackEntry {
    /// Feedback recorded at `recorded_at`
    #[must_use]
    pub const fn new(rating: ComfortRating, recorded_at: DateTime<Utc>) -> Self {
        Self {
            rating,
            recorded_at,
        }
    }
}

/// Whether growing from `previous_count` to `new_count` entries crossed a
/// multiple of the recompute interval
///
/// Single appends fire exactly on multiples (4 to 5); a batch from 4 to 6
/// fires too. A count that did not grow never fires.
#[must_use]
pub const fn should_recompute(
    policy: &PersonalizationPolicy,
    previous_count: u32,
    new_count: u32,
) -> bool {
    let interval = policy.recompute_interval;
    interval > 0 && new_count > previous_count && new_count / interval > previous_count / interval
}

/// Offset from the most recent `feedback_window` entries
///
/// Entries are expected in chronological order. The mean delta is clamped to
/// `±max_abs_offset_celsius` and rounded to one decimal; no entries gives 0.
#[must_use]
pub fn compute_offset(policy: &PersonalizationPolicy, entries: &[FeedbackEntry]) -> f64 {
    let start = entries.len().saturating_sub(policy.feedback_window);
    let recent = &entries[start..];
    if recent.is_empty() {
        return 0.0;
    }

    let total: f64 = recent
        .iter()
        .map(|entry| entry.rating.felt_delta_celsius())
        .sum();
    // Window sizes are small; the usize to f64 conversion is exact
    #[allow(clippy::cast_precision_loss)]
    let mean = total / recent.len() as f64;
    let limit = policy.max_abs_offset_celsius;

    (mean.clamp(-limit, limit) * 10.0).round() / 10.0
}

/// Build the next snapshot from all feedback recorded so far
#[must_use]
pub fn compute_snapshot(
    policy: &PersonalizationPolicy,
    entries: &[FeedbackEntry],
    previous: Option<&PersonalizationSnapshot>,
    computed_at: DateTime<Utc>,
) -> PersonalizationSnapshot {
    let offset_celsius = compute_offset(policy, entries);
    let version = previous.map_or(1, |snapshot| snapshot.version.saturating_add(1));
    let feedback_count = u32::try_from(entries.len()).unwrap_or(u32::MAX);

    debug!(
        offset_celsius,
        version, feedback_count, "Computed personalization snapshot"
    );

    PersonalizationSnapshot {
        offset_celsius,
        version,
        feedback_count,
        computed_at,
    }
}

/// Recompute the snapshot only when the feedback count has crossed a
/// recompute interval since `previous` was computed
///
/// Returns `None` when no recomputation is due, leaving the previous snapshot in force.
#[must_use]
pub fn refresh_if_due(
    policy: &PersonalizationPolicy,
    entries: &[FeedbackEntry],
    previous: Option<&PersonalizationSnapshot>,
    now: DateTime<Utc>,
) -> Option<PersonalizationSnapshot> {
    let previous_count = previous.map_or(0, |snapshot| snapshot.feedback_count);
    let feedback_count = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    should_recompute(policy, previous_count, feedback_count)
        .then(|| compute_snapshot(policy, entries, previous, now))
}
