// ABOUTME: User profile model with the biometric inputs of target calculation
// ABOUTME: Goal, Gender, and ActivityLevel enums with strict canonical-value lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weight goal driving calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// All goals
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Canonical value
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }

    /// Exact lookup by canonical value; `None` when nothing matches
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.value() == value)
    }
}

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Canonical value
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Exact lookup by canonical value; `None` when nothing matches
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        [Self::Male, Self::Female]
            .into_iter()
            .find(|gender| gender.value() == value)
    }
}

/// Activity level for the maintenance multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    Active,
    /// Hard exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::Active,
        Self::VeryActive,
    ];

    /// Canonical value
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Multiplier applied to BMR to obtain maintenance calories
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::Active => 1.55,
            Self::VeryActive => 1.725,
        }
    }

    /// Exact lookup by canonical value; `None` when nothing matches
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

/// User profile
///
/// Profile edits replace the whole record. `target_calories` is derived data
/// and is recomputed whenever the biometric inputs change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Weight goal
    pub goal: Goal,
    /// Current body weight in kilograms
    pub current_weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Biological sex for BMR
    pub gender: Gender,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Last computed daily calorie target
    pub target_calories: Option<u32>,
}
