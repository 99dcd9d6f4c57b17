// ABOUTME: Domain models for nutrition tracking
// ABOUTME: Re-exports dishes, meal records, nutrition sums, user profiles, and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Logged dishes and measurement units
pub mod dish;
/// Meal slots and per-date meal records
pub mod meal;
/// Additive nutrition value objects
pub mod nutrition;
/// Daily and weekly progress reports
pub mod statistics;
/// User profile and biometric enums
pub mod user;

pub use dish::{Dish, UnitType};
pub use meal::{DailyMeals, MealType};
pub use nutrition::{MacroNutrients, MealNutritionData, NutritionData};
pub use statistics::{
    DailyNutritionStatistics, DayStatistics, MealStatistics, WeeklyNutritionStatistics,
};
pub use user::{ActivityLevel, Gender, Goal, User};
