// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus profile, dish, and meal-day builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_tracker`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::NaiveDate;
use nutrition_tracker::models::{
    ActivityLevel, DailyMeals, Dish, Gender, Goal, MealType, UnitType, User,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Evaluation date of the reference profile (exactly 30 years after its birth date)
pub fn reference_today() -> NaiveDate {
    date(2024, 6, 15)
}

/// 30-year-old sedentary male, 80 kg, 180 cm, losing weight: target 1836 kcal
pub fn reference_user() -> User {
    User {
        id: Uuid::new_v4(),
        goal: Goal::Lose,
        current_weight: Some(80.0),
        height: Some(180.0),
        gender: Gender::Male,
        birth_date: Some(date(1994, 6, 15)),
        activity_level: ActivityLevel::Sedentary,
        target_calories: None,
    }
}

/// A dish with the given energy and macro grams
pub fn dish(title: &str, kcal: u32, carb: f64, protein: f64, fats: f64) -> Dish {
    Dish {
        id: format!("dish-{title}"),
        title: title.to_owned(),
        kcal,
        carb,
        protein,
        fats,
        amount: 100.0,
        unit: UnitType::Gram,
    }
}

/// A day holding one dish per listed meal slot
pub fn day_with(date: NaiveDate, entries: &[(MealType, Dish)]) -> DailyMeals {
    entries
        .iter()
        .cloned()
        .fold(DailyMeals::new(date), |day, (meal_type, dish)| {
            day.with_dish(meal_type, dish)
        })
}
