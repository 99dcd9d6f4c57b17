// ABOUTME: Nutrition value objects used as the additive algebra of aggregation
// ABOUTME: NutritionData sums, per-meal breakdowns, and macronutrient gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::dish::Dish;
use super::meal::MealType;
use crate::constants::energy::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Summed nutrition of any number of dishes
///
/// The all-zero value is the identity for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionData {
    /// Energy in kcal
    pub calories: u32,
    /// Carbohydrates in grams
    pub carb: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionData {
    /// Additive identity
    pub const ZERO: Self = Self {
        calories: 0,
        carb: 0.0,
        protein: 0.0,
        fat: 0.0,
    };
}

/// Snap a gram quantity onto the microgram grid
///
/// Gram totals live on this grid so that summation order and chunking never
/// change an aggregate.
fn quantize(grams: f64) -> f64 {
    (grams * GRID_PER_GRAM).round() / GRID_PER_GRAM
}

const GRID_PER_GRAM: f64 = 1_000_000.0;

impl From<&Dish> for NutritionData {
    fn from(dish: &Dish) -> Self {
        Self {
            calories: dish.kcal,
            carb: quantize(dish.carb),
            protein: quantize(dish.protein),
            fat: quantize(dish.fats),
        }
    }
}

impl Add for NutritionData {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories.saturating_add(other.calories),
            carb: quantize(self.carb + other.carb),
            protein: quantize(self.protein + other.protein),
            fat: quantize(self.fat + other.fat),
        }
    }
}

impl AddAssign for NutritionData {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for NutritionData {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Nutrition totals broken down by meal slot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MealNutritionData {
    /// Breakfast totals
    pub breakfast: NutritionData,
    /// Lunch totals
    pub lunch: NutritionData,
    /// Dinner totals
    pub dinner: NutritionData,
    /// Snack totals
    pub snacks: NutritionData,
}

impl MealNutritionData {
    /// Totals for one meal slot
    #[must_use]
    pub const fn get(&self, meal_type: MealType) -> NutritionData {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snacks => self.snacks,
        }
    }

    /// Sum of the four slots
    #[must_use]
    pub fn total(&self) -> NutritionData {
        MealType::ALL
            .into_iter()
            .map(|meal_type| self.get(meal_type))
            .sum()
    }
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroNutrients {
    /// Protein grams
    pub proteins: u32,
    /// Carbohydrate grams
    pub carbs: u32,
    /// Fat grams
    pub fats: u32,
}

impl MacroNutrients {
    /// Energy represented by these grams (4/4/9 kcal per gram)
    #[must_use]
    pub const fn calories(&self) -> u32 {
        self.proteins * PROTEIN_KCAL_PER_GRAM
            + self.carbs * CARBS_KCAL_PER_GRAM
            + self.fats * FAT_KCAL_PER_GRAM
    }
}
