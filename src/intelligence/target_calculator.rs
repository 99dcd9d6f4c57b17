// ABOUTME: Daily calorie and macronutrient targets derived from a user profile
// ABOUTME: Mifflin-St Jeor BMR, activity multiplier, goal offset, and truncated macro grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Target Calculator
//!
//! Turns biometric profile data into a daily calorie target and a macronutrient
//! split in whole grams. An incomplete profile is not an error: the calorie
//! target is simply absent and the macro targets degrade to zero.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{BmrConfig, MacroDistribution, NutritionConfig};
use chrono::NaiveDate;
use nutrition_core::constants::energy::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use nutrition_core::models::{ActivityLevel, Gender, MacroNutrients, User};
use tracing::{debug, warn};

/// Whole years between `birth_date` and `today`
///
/// Returns `None` when the birth date lies after `today`.
#[must_use]
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth_date)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Maintenance calories: BMR x activity factor
#[must_use]
pub fn calculate_maintenance_calories(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// Daily calorie target for a profile, evaluated on `today`
///
/// Requires weight, height, and birth date. Any of them missing (or a weight,
/// height, or birth date that cannot describe a person) yields `None`. The
/// goal-adjusted maintenance value is truncated toward zero and never negative.
#[must_use]
pub fn calculate_target_calories(
    user: &User,
    today: NaiveDate,
    config: &NutritionConfig,
) -> Option<u32> {
    let (Some(weight_kg), Some(height_cm), Some(birth_date)) =
        (user.current_weight, user.height, user.birth_date)
    else {
        debug!(user_id = %user.id, "Profile incomplete, no calorie target");
        return None;
    };

    if !is_positive(weight_kg) || !is_positive(height_cm) {
        warn!(user_id = %user.id, weight_kg, height_cm, "Unusable biometrics, no calorie target");
        return None;
    }

    let Some(age) = calculate_age(birth_date, today) else {
        warn!(user_id = %user.id, %birth_date, %today, "Birth date after evaluation date");
        return None;
    };

    let bmr = calculate_bmr(weight_kg, height_cm, age, user.gender, &config.bmr);
    let maintenance = calculate_maintenance_calories(bmr, user.activity_level);
    let target = maintenance + config.goal_adjustment.offset_for(user.goal);

    debug!(
        user_id = %user.id,
        age,
        bmr,
        maintenance,
        target,
        "Computed calorie target"
    );

    Some(target.max(0.0).trunc() as u32)
}

/// Macronutrient grams for a known calorie target
///
/// Each macro is truncated independently, so the grams converted back to
/// calories may fall a few kcal short of `target_calories`.
#[must_use]
pub fn calculate_macros_for_target(
    target_calories: u32,
    split: MacroDistribution,
) -> MacroNutrients {
    MacroNutrients {
        proteins: grams_for_share(target_calories, split.protein_pct, PROTEIN_KCAL_PER_GRAM),
        carbs: grams_for_share(target_calories, split.carbs_pct, CARBS_KCAL_PER_GRAM),
        fats: grams_for_share(target_calories, split.fat_pct, FAT_KCAL_PER_GRAM),
    }
}

/// Macronutrient targets for a profile, all zero when the calorie target is absent
#[must_use]
pub fn calculate_macro_nutrients(
    user: &User,
    today: NaiveDate,
    config: &NutritionConfig,
) -> MacroNutrients {
    calculate_target_calories(user, today, config).map_or_else(MacroNutrients::default, |target| {
        calculate_macros_for_target(target, config.macro_splits.for_goal(user.goal))
    })
}

/// Replace the profile record with one whose calorie target matches its biometrics
#[must_use]
pub fn refresh_profile_targets(user: User, today: NaiveDate, config: &NutritionConfig) -> User {
    let target_calories = calculate_target_calories(&user, today, config);
    User {
        target_calories,
        ..user
    }
}

// Integer arithmetic keeps the truncation exact: floor(target * pct / 100 / kcal_per_gram)
fn grams_for_share(target_calories: u32, percent: u8, kcal_per_gram: u32) -> u32 {
    let numerator = u64::from(target_calories) * u64::from(percent);
    let denominator = 100 * u64::from(kcal_per_gram);
    (numerator / denominator) as u32
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
