// ABOUTME: Target command for nutrition-cli
// ABOUTME: Prints calorie and macronutrient targets derived from a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nutrition_tracker::errors::AppResult;
use nutrition_tracker::models::MacroNutrients;
use serde::Serialize;
use std::path::Path;
use tracing::warn;
use uuid::Uuid;

use crate::helpers::display::print_json;
use crate::helpers::snapshot::load_service;

#[derive(Serialize)]
struct TargetsReport {
    user_id: Uuid,
    target_calories: Option<u32>,
    macros: MacroNutrients,
}

/// Print the targets of the profile stored at `profile`
pub async fn show(profile: &Path, today: NaiveDate) -> AppResult<()> {
    let (service, user_id) = load_service(profile, None).await?;

    let target_calories = service.target_calories(user_id, today).await?;
    if target_calories.is_none() {
        warn!(%user_id, "Profile lacks weight, height, or birth date; no target computed");
    }
    let macros = service.macro_targets(user_id, today).await?;

    print_json(&TargetsReport {
        user_id,
        target_calories,
        macros,
    })
}
