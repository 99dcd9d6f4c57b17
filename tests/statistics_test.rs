// ABOUTME: Integration tests for daily and weekly progress statistics
// ABOUTME: Covers zero-filled meal slots, percentage shares, progress ratios, and gap-free weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Datelike, Days, Weekday};
use nutrition_tracker::intelligence::{build_daily_statistics, build_weekly_statistics, week_dates};
use nutrition_tracker::models::{DailyMeals, MealType};
use std::collections::HashMap;

mod common;

use common::{date, day_with, dish};

// ============================================================================
// DAILY STATISTICS
// ============================================================================

#[test]
fn test_daily_report_for_single_breakfast() {
    common::init_test_logging();
    let day = day_with(
        date(2024, 6, 12),
        &[(MealType::Breakfast, dish("toast", 200, 10.0, 5.0, 3.0))],
    );

    let stats = build_daily_statistics(&day, 1836);

    assert_eq!(stats.date, date(2024, 6, 12));
    assert_eq!(stats.total_calories, 200);
    assert_eq!(stats.target_calories, 1836);
    assert!((stats.progress - 200.0 / 1836.0).abs() < 1e-12);
    assert!((stats.progress - 0.109).abs() < 1e-3);
    assert_eq!(stats.remaining_calories(), 1636);

    let breakfast = stats.meal(MealType::Breakfast).unwrap();
    assert_eq!(breakfast.calories, 200);
    assert!((breakfast.percentage - 100.0).abs() < 1e-9);
    assert!((breakfast.carbs - 10.0).abs() < 1e-9);
    assert!((breakfast.protein - 5.0).abs() < 1e-9);
    assert!((breakfast.fat - 3.0).abs() < 1e-9);

    for meal_type in [MealType::Lunch, MealType::Dinner, MealType::Snacks] {
        let meal = stats.meal(meal_type).unwrap();
        assert_eq!(meal.calories, 0);
        assert!(meal.percentage.abs() < f64::EPSILON);
    }
}

#[test]
fn test_daily_report_lists_meal_types_in_canonical_order() {
    let stats = build_daily_statistics(&DailyMeals::new(date(2024, 6, 12)), 2000);
    let order: Vec<MealType> = stats.meal_statistics.iter().map(|m| m.meal_type).collect();
    assert_eq!(order, MealType::ALL.to_vec());
}

#[test]
fn test_empty_day_has_zero_shares_and_progress() {
    let stats = build_daily_statistics(&DailyMeals::new(date(2024, 6, 12)), 2000);
    assert_eq!(stats.total_calories, 0);
    assert!(stats.progress.abs() < f64::EPSILON);
    assert!(stats
        .meal_statistics
        .iter()
        .all(|meal| meal.percentage.abs() < f64::EPSILON));
}

#[test]
fn test_zero_target_gives_zero_progress() {
    let day = day_with(
        date(2024, 6, 12),
        &[(MealType::Dinner, dish("pasta", 600, 80.0, 20.0, 15.0))],
    );
    let stats = build_daily_statistics(&day, 0);
    assert!(stats.progress.abs() < f64::EPSILON);
    assert!(stats.progress.is_finite());
}

#[test]
fn test_percentages_sum_to_100_when_anything_logged() {
    let day = day_with(
        date(2024, 6, 12),
        &[
            (MealType::Breakfast, dish("oats", 333, 50.0, 10.0, 8.0)),
            (MealType::Lunch, dish("salad", 271, 12.0, 9.0, 20.0)),
            (MealType::Dinner, dish("steak", 517, 0.0, 45.0, 36.0)),
            (MealType::Snacks, dish("nuts", 89, 3.0, 3.0, 8.0)),
        ],
    );

    let stats = build_daily_statistics(&day, 2000);
    let sum: f64 = stats.meal_statistics.iter().map(|m| m.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9, "shares sum to {sum}");
    assert_eq!(stats.total_calories, 1210);
}

#[test]
fn test_progress_can_exceed_one() {
    let day = day_with(
        date(2024, 6, 12),
        &[(MealType::Dinner, dish("feast", 3000, 300.0, 100.0, 150.0))],
    );
    let stats = build_daily_statistics(&day, 1500);
    assert!((stats.progress - 2.0).abs() < 1e-12);
    assert_eq!(stats.remaining_calories(), 0);
}

// ============================================================================
// WEEKLY STATISTICS
// ============================================================================

#[test]
fn test_week_dates_start_monday_and_ascend() {
    // 2024-06-12 is a Wednesday
    let dates = week_dates(date(2024, 6, 12));
    assert_eq!(dates[0], date(2024, 6, 10));
    assert_eq!(dates[0].weekday(), Weekday::Mon);
    for pair in dates.windows(2) {
        assert_eq!(pair[0].checked_add_days(Days::new(1)), Some(pair[1]));
    }
}

#[test]
fn test_weekly_report_on_empty_map() {
    let meals: HashMap<_, DailyMeals> = HashMap::new();
    let stats = build_weekly_statistics(date(2024, 6, 16), 2000, &meals);

    assert_eq!(stats.week_start, date(2024, 6, 10));
    assert_eq!(stats.day_statistics.len(), 7);
    assert!(stats.day_statistics.iter().all(|day| day.calories == 0));
    assert_eq!(stats.total_calories(), 0);
    assert_eq!(stats.days_logged(), 0);
}

#[test]
fn test_weekly_report_fills_gaps_in_sparse_map() {
    let wednesday = date(2024, 6, 12);
    let saturday = date(2024, 6, 15);
    let outside = date(2024, 6, 17);

    let mut meals = HashMap::new();
    meals.insert(
        saturday,
        day_with(saturday, &[(MealType::Lunch, dish("burger", 700, 40.0, 30.0, 40.0))]),
    );
    meals.insert(
        wednesday,
        day_with(wednesday, &[(MealType::Snacks, dish("bar", 250, 30.0, 10.0, 9.0))]),
    );
    meals.insert(
        outside,
        day_with(outside, &[(MealType::Lunch, dish("ignored", 999, 1.0, 1.0, 1.0))]),
    );

    let stats = build_weekly_statistics(wednesday, 1836, &meals);

    assert_eq!(stats.target_calories, 1836);
    assert_eq!(stats.week_start, date(2024, 6, 10));
    let calories: Vec<u32> = stats.day_statistics.iter().map(|d| d.calories).collect();
    assert_eq!(calories, vec![0, 0, 250, 0, 0, 700, 0]);

    let dates: Vec<_> = stats.day_statistics.iter().map(|d| d.date).collect();
    assert_eq!(dates, week_dates(wednesday).to_vec());

    assert_eq!(stats.total_calories(), 950);
    assert_eq!(stats.days_logged(), 2);
    assert!((stats.average_daily_calories() - 950.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_weekly_report_same_for_any_anchor_in_week() {
    let monday = date(2024, 6, 10);
    let mut meals = HashMap::new();
    meals.insert(
        monday,
        day_with(monday, &[(MealType::Breakfast, dish("eggs", 300, 2.0, 20.0, 22.0))]),
    );

    let reports: Vec<_> = (10..=16)
        .map(|day| build_weekly_statistics(date(2024, 6, day), 2000, &meals))
        .collect();
    assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_weekly_progress_against_seven_day_target() {
    let monday = date(2024, 6, 10);
    let mut meals = HashMap::new();
    meals.insert(
        monday,
        day_with(monday, &[(MealType::Dinner, dish("big", 7000, 0.0, 0.0, 0.0))]),
    );

    let stats = build_weekly_statistics(monday, 2000, &meals);
    assert!((stats.progress() - 0.5).abs() < 1e-12);

    let no_target = build_weekly_statistics(monday, 0, &meals);
    assert!(no_target.progress().abs() < f64::EPSILON);
}
