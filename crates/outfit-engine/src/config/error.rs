// ABOUTME: Configuration error types for outfit engine configuration validation
// ABOUTME: Defines error variants for invalid ranges, ordering violations, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for outfit engine validation.

use outfit_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., negative precipitation threshold)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Values that must be ordered are not
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::InvalidOrdering(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
