// ABOUTME: Configuration error types for nutrition formula validation
// ABOUTME: Defines error variants for invalid ranges, macro splits, and environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for nutrition formula validation.

use nutrition_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., calorie adjustment above 1000 kcal)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access or parse error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Macro percentages don't sum to 100
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidRange(_) | ConfigError::InvalidWeights(_) => {
                Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
            }
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => {
                Self::config(error.to_string()).with_source(error)
            }
        }
    }
}
