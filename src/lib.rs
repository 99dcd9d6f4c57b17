// ABOUTME: Main library entry point for the nutrition tracking engine
// ABOUTME: Computes calorie/macro targets and daily/weekly intake progress from logged meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Tracker
//!
//! Nutrition computation and aggregation engine. Given a user profile and the
//! dishes logged per meal and per date, it derives personalised calorie and
//! macronutrient targets and reports progress against them.
//!
//! ## Architecture
//!
//! - **Models** (`nutrition-core`): dishes, meal records, nutrition sums, statistics
//! - **Intelligence**: pure target calculation, meal aggregation, and statistics
//! - **Store**: async contract for the external profile and meal store
//! - **Services**: fetch-then-compute orchestration over a store
//! - **Config / Logging**: formula configuration and structured logging
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use nutrition_tracker::config::NutritionConfig;
//! use nutrition_tracker::intelligence::{calculate_macro_nutrients, calculate_target_calories};
//! use nutrition_tracker::models::{ActivityLevel, Gender, Goal, User};
//! use uuid::Uuid;
//!
//! let user = User {
//!     id: Uuid::new_v4(),
//!     goal: Goal::Lose,
//!     current_weight: Some(80.0),
//!     height: Some(180.0),
//!     gender: Gender::Male,
//!     birth_date: NaiveDate::from_ymd_opt(1994, 6, 15),
//!     activity_level: ActivityLevel::Sedentary,
//!     target_calories: None,
//! };
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
//! let config = NutritionConfig::default();
//!
//! assert_eq!(calculate_target_calories(&user, today, &config), Some(1836));
//! assert_eq!(calculate_macro_nutrients(&user, today, &config).proteins, 137);
//! ```

/// Nutrition formula configuration
pub mod config;

/// Pure nutrition computation engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain services over a meal store
pub mod services;

/// External profile and meal store contract
pub mod store;

/// Domain models re-exported from `nutrition-core`
pub use nutrition_core::models;

/// Error types re-exported from `nutrition-core`
pub use nutrition_core::errors;

/// Constants re-exported from `nutrition-core`
pub use nutrition_core::constants;
