// ABOUTME: In-memory meal store backed by concurrent maps
// ABOUTME: Holds profiles and per-date meal records for tests and the command-line front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MealStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{DailyMeals, User};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Meal store kept entirely in memory
///
/// Uses `DashMap` for sharded locking; clones share the same underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealStore {
    users: Arc<DashMap<Uuid, User>>,
    meals: Arc<DashMap<(Uuid, NaiveDate), DailyMeals>>,
}

impl InMemoryMealStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user profile
    pub fn upsert_user(&self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Insert or replace the meal record of one date
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if any dish carries a negative or non-finite quantity
    pub fn put_meals(&self, user_id: Uuid, daily_meals: DailyMeals) -> AppResult<()> {
        daily_meals
            .validate()
            .map_err(|e| e.with_user_id(user_id))?;
        debug!(%user_id, date = %daily_meals.date, "Storing meal record");
        self.meals.insert((user_id, daily_meals.date), daily_meals);
        Ok(())
    }
}

#[async_trait]
impl MealStore for InMemoryMealStore {
    async fn get_user_profile(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found("User profile").with_user_id(user_id))
    }

    async fn get_meals_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyMeals> {
        Ok(self
            .meals
            .get(&(user_id, date))
            .map_or_else(|| DailyMeals::new(date), |entry| entry.value().clone()))
    }

    async fn get_meals_for_date_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<HashMap<NaiveDate, DailyMeals>> {
        if start_date > end_date {
            return Err(AppError::invalid_input(format!(
                "Range start {start_date} is after end {end_date}"
            ))
            .with_user_id(user_id));
        }

        Ok(self
            .meals
            .iter()
            .filter(|entry| {
                let (owner, date) = *entry.key();
                owner == user_id && (start_date..=end_date).contains(&date)
            })
            .map(|entry| (entry.key().1, entry.value().clone()))
            .collect())
    }
}
