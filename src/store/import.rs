// ABOUTME: JSON snapshot import for the in-memory meal store
// ABOUTME: Reads a profile file and a meal log file into validated domain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::InMemoryMealStore;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{DailyMeals, User};
use std::path::Path;
use tracing::debug;

/// Read one `User` profile from a JSON file
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `SerializationError` if it is not a profile
pub async fn read_profile(path: &Path) -> AppResult<User> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let user: User = serde_json::from_str(&content)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    debug!(user_id = %user.id, path = %path.display(), "Loaded profile");
    Ok(user)
}

/// Read a JSON array of `DailyMeals` records
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `SerializationError` if it is malformed
pub async fn read_meal_log(path: &Path) -> AppResult<Vec<DailyMeals>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let days: Vec<DailyMeals> = serde_json::from_str(&content)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    debug!(days = days.len(), path = %path.display(), "Loaded meal log");
    Ok(days)
}

impl InMemoryMealStore {
    /// Build a store holding one profile and its meal log
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if any logged dish fails validation
    pub fn from_snapshot(user: User, days: Vec<DailyMeals>) -> AppResult<Self> {
        let store = Self::new();
        let user_id = user.id;
        store.upsert_user(user);
        for daily_meals in days {
            store.put_meals(user_id, daily_meals)?;
        }
        Ok(store)
    }
}
