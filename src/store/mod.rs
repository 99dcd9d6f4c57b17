// ABOUTME: Meal and profile store abstraction consumed by the progress service
// ABOUTME: Read-only async contract for profiles, single days, and date ranges of meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON snapshot import
pub mod import;
/// Concurrent in-memory store
pub mod memory;

pub use import::{read_meal_log, read_profile};
pub use memory::InMemoryMealStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use nutrition_core::errors::AppResult;
use nutrition_core::models::{DailyMeals, User};
use std::collections::HashMap;
use uuid::Uuid;

/// Source of user profiles and logged meals
///
/// Implementations own persistence, retries, and timeouts. Failures are
/// returned to the caller unchanged.
#[async_trait]
pub trait MealStore: Send + Sync {
    /// Get a user profile
    async fn get_user_profile(&self, user_id: Uuid) -> AppResult<User>;

    /// Get the meals logged on one date
    async fn get_meals_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyMeals>;

    /// Get meals for an inclusive date range
    ///
    /// Days without logged meals may be absent from the returned map.
    async fn get_meals_for_date_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<HashMap<NaiveDate, DailyMeals>>;
}
