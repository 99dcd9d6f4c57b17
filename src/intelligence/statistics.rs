// ABOUTME: Daily and weekly progress reports built from aggregated meal data
// ABOUTME: Per-meal calorie shares, progress against target, and gap-free Monday-based weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Statistics Engine
//!
//! Both builders are pure: they read already-fetched meal records and never
//! divide by zero. Every meal type appears in a daily report (empty slots are
//! zero-filled) and every weekly report holds exactly seven days.

use super::meal_aggregator::{aggregate_day, day_total};
use chrono::{Datelike, Days, NaiveDate};
use nutrition_core::constants::calendar::DAYS_PER_WEEK;
use nutrition_core::models::{
    DailyMeals, DailyNutritionStatistics, DayStatistics, MealStatistics, MealType,
    WeeklyNutritionStatistics,
};
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::debug;

/// Build the progress report for one day
#[must_use]
pub fn build_daily_statistics(
    daily_meals: &DailyMeals,
    target_calories: u32,
) -> DailyNutritionStatistics {
    let per_meal = aggregate_day(daily_meals);
    let total = per_meal.total();
    let total_calories = total.calories;

    let meal_statistics = MealType::ALL
        .into_iter()
        .map(|meal_type| {
            let meal = per_meal.get(meal_type);
            MealStatistics {
                meal_type,
                calories: meal.calories,
                carbs: meal.carb,
                protein: meal.protein,
                fat: meal.fat,
                percentage: percentage_of(meal.calories, total_calories),
            }
        })
        .collect();

    let progress = ratio(total_calories, target_calories);
    debug!(
        date = %daily_meals.date,
        total_calories,
        target_calories,
        progress,
        "Built daily statistics"
    );

    DailyNutritionStatistics {
        date: daily_meals.date,
        total_calories,
        target_calories,
        progress,
        total,
        meal_statistics,
    }
}

/// Monday on or before `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// The seven dates of the Monday-based week containing `date`, ascending
#[must_use]
pub fn week_dates(date: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let start = week_start(date);
    std::array::from_fn(|offset| {
        start
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Build the calorie series for the week containing `anchor`
///
/// `meals_by_date` may be sparse and arrive in any order; days missing from it
/// count as days with no meals.
#[must_use]
pub fn build_weekly_statistics<S: BuildHasher>(
    anchor: NaiveDate,
    target_calories: u32,
    meals_by_date: &HashMap<NaiveDate, DailyMeals, S>,
) -> WeeklyNutritionStatistics {
    let dates = week_dates(anchor);

    let day_statistics: Vec<DayStatistics> = dates
        .iter()
        .map(|&date| DayStatistics {
            date,
            calories: meals_by_date
                .get(&date)
                .map_or(0, |meals| day_total(meals).calories),
        })
        .collect();

    debug!(
        week_start = %dates[0],
        logged_days = meals_by_date.len(),
        "Built weekly statistics"
    );

    WeeklyNutritionStatistics {
        target_calories,
        day_statistics,
        week_start: dates[0],
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    f64::from(numerator) / f64::from(denominator)
}

fn percentage_of(part: u32, whole: u32) -> f64 {
    ratio(part, whole) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_week_start_is_monday_on_or_before() {
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(week_start(sunday), monday);
        assert_eq!(week_start(monday), monday);
        assert_eq!(week_start(monday).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_dates_cross_month_boundary() {
        let dates = week_dates(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert!(ratio(500, 0).abs() < f64::EPSILON);
        assert!(percentage_of(0, 0).abs() < f64::EPSILON);
        assert!((percentage_of(50, 200) - 25.0).abs() < f64::EPSILON);
    }
}
