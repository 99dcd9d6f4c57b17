// ABOUTME: Progress commands for nutrition-cli
// ABOUTME: Prints daily and weekly intake reports for a profile and meal log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nutrition_tracker::errors::AppResult;
use std::path::Path;

use crate::helpers::display::print_json;
use crate::helpers::snapshot::load_service;

/// Print the progress report of `date`
pub async fn daily(
    profile: &Path,
    meals: &Path,
    date: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    let (service, user_id) = load_service(profile, Some(meals)).await?;
    let statistics = service.daily_statistics(user_id, date, today).await?;
    print_json(&statistics)
}

/// Print the calorie series of the week containing `anchor`
pub async fn weekly(
    profile: &Path,
    meals: &Path,
    anchor: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    let (service, user_id) = load_service(profile, Some(meals)).await?;
    let statistics = service.weekly_statistics(user_id, anchor, today).await?;
    print_json(&statistics)
}
