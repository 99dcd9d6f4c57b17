// ABOUTME: Pure nutrition computation engine
// ABOUTME: Target calculation, meal aggregation, and progress statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Stateless, deterministic transforms over immutable snapshots of profile and
//! meal data. Nothing here performs I/O or holds state between calls.

/// Dish, meal, and day nutrition totals
pub mod meal_aggregator;
/// Daily and weekly progress reports
pub mod statistics;
/// Calorie and macronutrient targets from profile biometrics
pub mod target_calculator;

pub use meal_aggregator::{aggregate, aggregate_day, day_total};
pub use statistics::{build_daily_statistics, build_weekly_statistics, week_dates, week_start};
pub use target_calculator::{
    calculate_age, calculate_bmr, calculate_macro_nutrients, calculate_macros_for_target,
    calculate_maintenance_calories, calculate_target_calories, refresh_profile_targets,
};
