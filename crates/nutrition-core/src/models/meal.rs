// ABOUTME: Meal slot types and the per-date record of logged dishes
// ABOUTME: MealType case-insensitive lookup and the DailyMeals four-slot container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::dish::Dish;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snacks between meals
    Snacks,
}

impl MealType {
    /// All meal types in canonical order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Canonical name
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }

    /// Case-insensitive lookup by canonical name
    ///
    /// Returns `None` for unknown names; callers decide how to handle them.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|meal_type| meal_type.value().eq_ignore_ascii_case(value))
    }
}

/// Dishes logged by one user on one calendar date, bucketed by meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMeals {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Breakfast dishes in logging order
    #[serde(default)]
    pub breakfast: Vec<Dish>,
    /// Lunch dishes in logging order
    #[serde(default)]
    pub lunch: Vec<Dish>,
    /// Dinner dishes in logging order
    #[serde(default)]
    pub dinner: Vec<Dish>,
    /// Snack dishes in logging order
    #[serde(default)]
    pub snacks: Vec<Dish>,
}

impl DailyMeals {
    /// A day with no dishes logged
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            breakfast: Vec::new(),
            lunch: Vec::new(),
            dinner: Vec::new(),
            snacks: Vec::new(),
        }
    }

    /// Return a copy of this record with `dish` appended to the given slot
    #[must_use]
    pub fn with_dish(mut self, meal_type: MealType, dish: Dish) -> Self {
        self.slot_mut(meal_type).push(dish);
        self
    }

    /// Dishes logged for one meal slot
    #[must_use]
    pub fn dishes(&self, meal_type: MealType) -> &[Dish] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }

    /// Every dish of the day, slot by slot in canonical order
    pub fn all_dishes(&self) -> impl Iterator<Item = &Dish> {
        MealType::ALL
            .into_iter()
            .flat_map(move |meal_type| self.dishes(meal_type).iter())
    }

    /// True when no slot holds a dish
    #[must_use]
    pub fn is_empty(&self) -> bool {
        MealType::ALL
            .into_iter()
            .all(|meal_type| self.dishes(meal_type).is_empty())
    }

    /// Validate every dish of the day
    ///
    /// # Errors
    ///
    /// Returns the first dish validation failure
    pub fn validate(&self) -> AppResult<()> {
        self.all_dishes().try_for_each(Dish::validate)
    }

    fn slot_mut(&mut self, meal_type: MealType) -> &mut Vec<Dish> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitType;

    fn dish(id: &str, kcal: u32) -> Dish {
        Dish {
            id: id.to_owned(),
            title: id.to_owned(),
            kcal,
            carb: 1.0,
            protein: 1.0,
            fats: 1.0,
            amount: 100.0,
            unit: UnitType::Gram,
        }
    }

    #[test]
    fn test_meal_type_lookup_is_case_insensitive() {
        assert_eq!(MealType::from_value("Breakfast"), Some(MealType::Breakfast));
        assert_eq!(MealType::from_value("LUNCH"), Some(MealType::Lunch));
        assert_eq!(MealType::from_value("dinner"), Some(MealType::Dinner));
        assert_eq!(MealType::from_value("sNaCkS"), Some(MealType::Snacks));
    }

    #[test]
    fn test_meal_type_lookup_unknown_is_none() {
        assert_eq!(MealType::from_value("brunch"), None);
        assert_eq!(MealType::from_value("snack"), None);
        assert_eq!(MealType::from_value(""), None);
    }

    #[test]
    fn test_with_dish_and_all_dishes_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let meals = DailyMeals::new(date)
            .with_dish(MealType::Snacks, dish("s", 10))
            .with_dish(MealType::Breakfast, dish("b", 20))
            .with_dish(MealType::Dinner, dish("d", 30));

        let ids: Vec<&str> = meals.all_dishes().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "s"]);
        assert!(meals.dishes(MealType::Lunch).is_empty());
        assert!(!meals.is_empty());
        assert!(DailyMeals::new(date).is_empty());
    }

    #[test]
    fn test_missing_slots_deserialize_empty() {
        let meals: DailyMeals = serde_json::from_str(r#"{"date":"2024-03-04"}"#).unwrap();
        assert!(meals.is_empty());
    }
}
