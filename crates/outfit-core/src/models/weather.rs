// ABOUTME: Weather reading model used as outfit recommendation input
// ABOUTME: Temperature, feels-like, wind, humidity, and precipitation with edge validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::weather_bounds::{MAX_HUMIDITY_PERCENT, MIN_HUMIDITY_PERCENT};
use crate::errors::{AppError, AppResult};

/// Weather snapshot for one recommendation request
///
/// The engine consumes `temperature_celsius`, `wind_speed_kmh` and
/// `precipitation_mm`. Feels-like temperature and humidity are carried for
/// callers and logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// Apparent temperature in Celsius
    pub feels_like_celsius: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_percent: f64,
    /// Precipitation in millimetres
    pub precipitation_mm: f64,
}

impl WeatherConditions {
    /// Create a reading with feels-like equal to air temperature, 50% humidity
    #[must_use]
    pub const fn new(temperature_celsius: f64, wind_speed_kmh: f64, precipitation_mm: f64) -> Self {
        Self {
            temperature_celsius,
            feels_like_celsius: temperature_celsius,
            wind_speed_kmh,
            humidity_percent: 50.0,
            precipitation_mm,
        }
    }

    /// Calm, dry conditions at the given temperature
    #[must_use]
    pub const fn calm(temperature_celsius: f64) -> Self {
        Self::new(temperature_celsius, 0.0, 0.0)
    }

    /// Override the feels-like temperature
    #[must_use]
    pub const fn with_feels_like(mut self, feels_like_celsius: f64) -> Self {
        self.feels_like_celsius = feels_like_celsius;
        self
    }

    /// Override the humidity
    #[must_use]
    pub const fn with_humidity(mut self, humidity_percent: f64) -> Self {
        self.humidity_percent = humidity_percent;
        self
    }

    /// Check that every reading lies in its physical domain
    ///
    /// The engine never calls this; it is for callers that accept readings
    /// from untrusted sources.
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `InvalidInput` for non-finite numbers and
    /// `ValueOutOfRange` for negative wind or precipitation and humidity
    /// outside 0-100.
    pub fn validate(&self) -> AppResult<()> {
        let readings = [
            ("temperature_celsius", self.temperature_celsius),
            ("feels_like_celsius", self.feels_like_celsius),
            ("wind_speed_kmh", self.wind_speed_kmh),
            ("humidity_percent", self.humidity_percent),
            ("precipitation_mm", self.precipitation_mm),
        ];
        if let Some((name, _)) = readings.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AppError::invalid_input(format!(
                "{name} must be a finite number"
            )));
        }

        if self.wind_speed_kmh < 0.0 {
            return Err(AppError::out_of_range(format!(
                "wind_speed_kmh must be >= 0, got {}",
                self.wind_speed_kmh
            )));
        }
        if self.precipitation_mm < 0.0 {
            return Err(AppError::out_of_range(format!(
                "precipitation_mm must be >= 0, got {}",
                self.precipitation_mm
            )));
        }
        if !(MIN_HUMIDITY_PERCENT..=MAX_HUMIDITY_PERCENT).contains(&self.humidity_percent) {
            return Err(AppError::out_of_range(format!(
                "humidity_percent must be between 0 and 100, got {}",
                self.humidity_percent
            )));
        }

        Ok(())
    }
}
