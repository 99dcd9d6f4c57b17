// ABOUTME: Computed progress reports consumed by presentation layers
// ABOUTME: Daily per-meal breakdowns and fixed seven-day weekly calorie series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealType;
use super::nutrition::NutritionData;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One meal slot's share of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealStatistics {
    /// Meal slot
    pub meal_type: MealType,
    /// Energy in kcal
    pub calories: u32,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fat in grams
    pub fat: f64,
    /// Share of the day's calories, 0-100
    pub percentage: f64,
}

/// A day's intake measured against the calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutritionStatistics {
    /// Calendar date
    pub date: NaiveDate,
    /// Calories consumed
    pub total_calories: u32,
    /// Daily calorie target
    pub target_calories: u32,
    /// `total_calories / target_calories`, 0 when the target is 0
    pub progress: f64,
    /// Consumed macronutrient totals
    pub total: NutritionData,
    /// One entry per meal type, canonical order
    pub meal_statistics: Vec<MealStatistics>,
}

impl DailyNutritionStatistics {
    /// Calories left before reaching the target
    #[must_use]
    pub const fn remaining_calories(&self) -> u32 {
        self.target_calories.saturating_sub(self.total_calories)
    }

    /// Statistics for a single meal slot
    #[must_use]
    pub fn meal(&self, meal_type: MealType) -> Option<&MealStatistics> {
        self.meal_statistics
            .iter()
            .find(|stats| stats.meal_type == meal_type)
    }
}

/// One point in a weekly calorie series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatistics {
    /// Calendar date
    pub date: NaiveDate,
    /// Calories consumed that day
    pub calories: u32,
}

/// Seven consecutive days starting on a Monday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyNutritionStatistics {
    /// Daily calorie target
    pub target_calories: u32,
    /// Exactly seven days, ascending from `week_start`
    pub day_statistics: Vec<DayStatistics>,
    /// Monday anchoring the week
    pub week_start: NaiveDate,
}

impl WeeklyNutritionStatistics {
    /// Calories consumed over the week
    #[must_use]
    pub fn total_calories(&self) -> u64 {
        self.day_statistics
            .iter()
            .map(|day| u64::from(day.calories))
            .sum()
    }

    /// Mean calories per calendar day of the week
    #[must_use]
    pub fn average_daily_calories(&self) -> f64 {
        if self.day_statistics.is_empty() {
            return 0.0;
        }
        self.total_calories() as f64 / self.day_statistics.len() as f64
    }

    /// Number of days with any calories logged
    #[must_use]
    pub fn days_logged(&self) -> usize {
        self.day_statistics
            .iter()
            .filter(|day| day.calories > 0)
            .count()
    }

    /// Weekly intake relative to seven times the daily target
    #[must_use]
    pub fn progress(&self) -> f64 {
        let weekly_target = u64::from(self.target_calories) * self.day_statistics.len() as u64;
        if weekly_target == 0 {
            return 0.0;
        }
        self.total_calories() as f64 / weekly_target as f64
    }
}
