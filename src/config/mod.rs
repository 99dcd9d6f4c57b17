// ABOUTME: Configuration management module for nutrition formula settings
// ABOUTME: Re-exports nutrition target configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Nutrition**: BMR coefficients, goal calorie offsets, and macro splits
//! - **Error**: Validation and environment parsing failures

/// Configuration error types
pub mod error;
/// Nutrition target configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    BmrConfig, GoalAdjustmentConfig, MacroDistribution, MacroSplitConfig, NutritionConfig,
};
