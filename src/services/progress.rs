// ABOUTME: Nutrition progress orchestration over a meal store
// ABOUTME: Fetches profiles and meals, then hands resolved snapshots to the pure engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use crate::intelligence::{
    build_daily_statistics, build_weekly_statistics, calculate_macro_nutrients,
    calculate_target_calories, week_dates,
};
use crate::store::MealStore;
use chrono::NaiveDate;
use nutrition_core::errors::AppResult;
use nutrition_core::models::{
    DailyNutritionStatistics, MacroNutrients, User, WeeklyNutritionStatistics,
};
use tracing::{info, instrument};
use uuid::Uuid;

/// Computes targets and progress reports for users of a meal store
///
/// Store failures propagate unchanged; the engine only runs once every fetch
/// has succeeded.
pub struct ProgressService<S> {
    store: S,
    config: NutritionConfig,
}

impl<S: MealStore> ProgressService<S> {
    /// Create a service with an explicit configuration
    #[must_use]
    pub const fn new(store: S, config: NutritionConfig) -> Self {
        Self { store, config }
    }

    /// Create a service using the global configuration
    #[must_use]
    pub fn with_global_config(store: S) -> Self {
        Self::new(store, NutritionConfig::global().clone())
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Calorie target recomputed from the stored profile
    ///
    /// # Errors
    ///
    /// Returns the store error if the profile cannot be fetched
    #[instrument(skip(self))]
    pub async fn target_calories(&self, user_id: Uuid, today: NaiveDate) -> AppResult<Option<u32>> {
        let user = self.store.get_user_profile(user_id).await?;
        Ok(calculate_target_calories(&user, today, &self.config))
    }

    /// Macronutrient targets for the stored profile
    ///
    /// # Errors
    ///
    /// Returns the store error if the profile cannot be fetched
    #[instrument(skip(self))]
    pub async fn macro_targets(&self, user_id: Uuid, today: NaiveDate) -> AppResult<MacroNutrients> {
        let user = self.store.get_user_profile(user_id).await?;
        Ok(calculate_macro_nutrients(&user, today, &self.config))
    }

    /// Progress report for one date
    ///
    /// # Errors
    ///
    /// Returns the store error if the profile or the day's meals cannot be fetched
    #[instrument(skip(self))]
    pub async fn daily_statistics(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<DailyNutritionStatistics> {
        let user = self.store.get_user_profile(user_id).await?;
        let daily_meals = self.store.get_meals_for_date(user_id, date).await?;

        let target = self.effective_target(&user, today);
        let statistics = build_daily_statistics(&daily_meals, target);
        info!(%user_id, %date, total_calories = statistics.total_calories, "Daily statistics ready");
        Ok(statistics)
    }

    /// Calorie series for the Monday-based week containing `anchor`
    ///
    /// # Errors
    ///
    /// Returns the store error if the profile or the week's meals cannot be fetched
    #[instrument(skip(self))]
    pub async fn weekly_statistics(
        &self,
        user_id: Uuid,
        anchor: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<WeeklyNutritionStatistics> {
        let user = self.store.get_user_profile(user_id).await?;
        let dates = week_dates(anchor);
        let meals_by_date = self
            .store
            .get_meals_for_date_range(user_id, dates[0], dates[dates.len() - 1])
            .await?;

        let target = self.effective_target(&user, today);
        let statistics = build_weekly_statistics(anchor, target, &meals_by_date);
        info!(
            %user_id,
            week_start = %statistics.week_start,
            total_calories = statistics.total_calories(),
            "Weekly statistics ready"
        );
        Ok(statistics)
    }

    /// Freshly computed target, else the stored one, else zero
    fn effective_target(&self, user: &User, today: NaiveDate) -> u32 {
        calculate_target_calories(user, today, &self.config)
            .or(user.target_calories)
            .unwrap_or(0)
    }
}
