// ABOUTME: Reduces logged dishes into nutrition totals per meal slot and per day
// ABOUTME: Order-independent fold over NutritionData starting from the zero value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_core::models::{DailyMeals, Dish, MealNutritionData, MealType, NutritionData};

/// Sum the nutrition of any sequence of dishes
///
/// The result does not depend on dish order or on how the sequence was
/// chunked, so lists assembled from paginated or concurrent fetches aggregate
/// identically.
#[must_use]
pub fn aggregate<'a, I>(dishes: I) -> NutritionData
where
    I: IntoIterator<Item = &'a Dish>,
{
    dishes.into_iter().map(NutritionData::from).sum()
}

/// Totals for each of the four meal slots of a day
#[must_use]
pub fn aggregate_day(daily_meals: &DailyMeals) -> MealNutritionData {
    MealNutritionData {
        breakfast: aggregate(daily_meals.dishes(MealType::Breakfast)),
        lunch: aggregate(daily_meals.dishes(MealType::Lunch)),
        dinner: aggregate(daily_meals.dishes(MealType::Dinner)),
        snacks: aggregate(daily_meals.dishes(MealType::Snacks)),
    }
}

/// Total nutrition of a day across all meal slots
#[must_use]
pub fn day_total(daily_meals: &DailyMeals) -> NutritionData {
    aggregate_day(daily_meals).total()
}
