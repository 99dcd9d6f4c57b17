// ABOUTME: Snapshot loading for nutrition-cli
// ABOUTME: Builds an in-memory store and progress service from profile and meal files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_tracker::errors::AppResult;
use nutrition_tracker::services::ProgressService;
use nutrition_tracker::store::{read_meal_log, read_profile, InMemoryMealStore};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Load both files and wrap them in a service using the global configuration
///
/// Returns the service together with the id of the loaded profile.
pub async fn load_service(
    profile_path: &Path,
    meals_path: Option<&Path>,
) -> AppResult<(ProgressService<InMemoryMealStore>, Uuid)> {
    let user = read_profile(profile_path).await?;
    let days = match meals_path {
        Some(path) => read_meal_log(path).await?,
        None => Vec::new(),
    };

    let user_id = user.id;
    info!(%user_id, days = days.len(), "Snapshot loaded");
    let store = InMemoryMealStore::from_snapshot(user, days)?;
    Ok((ProgressService::with_global_config(store), user_id))
}
