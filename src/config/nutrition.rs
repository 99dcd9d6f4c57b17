// ABOUTME: Nutrition formula configuration for calorie and macronutrient targets
// ABOUTME: Configures Mifflin-St Jeor coefficients, goal calorie offsets, and macro splits per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! Defaults reproduce the standard formulas exactly; environment variables may
//! override any coefficient for experimentation.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use super::error::ConfigError;
use nutrition_core::models::Goal;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Nutrition target configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Calorie offsets applied for weight goals
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macronutrient split per goal
    pub macro_splits: MacroSplitConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Calorie offsets relative to maintenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Subtracted for `Goal::Lose` (kcal)
    pub deficit_kcal: f64,
    /// Added for `Goal::Gain` (kcal)
    pub surplus_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 300.0,
            surplus_kcal: 300.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Signed offset for a goal
    #[must_use]
    pub fn offset_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => -self.deficit_kcal,
            Goal::Maintain => 0.0,
            Goal::Gain => self.surplus_kcal,
        }
    }
}

/// Macro distribution (protein%, carbs%, fat%) in whole percents
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total_pct(&self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct)
    }

    /// Shares of total calories as fractions (protein, carbs, fat)
    #[must_use]
    pub fn fractions(&self) -> (f64, f64, f64) {
        (
            f64::from(self.protein_pct) / 100.0,
            f64::from(self.carbs_pct) / 100.0,
            f64::from(self.fat_pct) / 100.0,
        )
    }

    /// Parse the `P/C/F` notation used by environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` unless the value is three `/`-separated integers in 0-100
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let parts: Vec<u8> = value
            .split('/')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|e| ConfigError::Parse(format!("Invalid macro split '{value}': {e}")))?;

        match parts.as_slice() {
            &[protein, carbs, fat] => Ok(Self::new(protein, carbs, fat)),
            _ => Err(ConfigError::Parse(format!(
                "Macro split '{value}' must have exactly three parts"
            ))),
        }
    }
}

/// Macro split for each goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Weight loss: 30/40/30
    pub lose: MacroDistribution,
    /// Maintenance: 20/50/30
    pub maintain: MacroDistribution,
    /// Weight gain: 25/50/25
    pub gain: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            lose: MacroDistribution::new(30, 40, 30),
            maintain: MacroDistribution::new(20, 50, 30),
            gain: MacroDistribution::new(25, 50, 25),
        }
    }
}

impl MacroSplitConfig {
    /// Distribution for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::Lose => self.lose,
            Goal::Maintain => self.maintain,
            Goal::Gain => self.gain,
        }
    }
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a coefficient, offset, or macro split is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let adjustment_range = 0.0..=MAX_GOAL_ADJUSTMENT_KCAL;
        if !adjustment_range.contains(&self.goal_adjustment.deficit_kcal) {
            return Err(ConfigError::InvalidRange(
                "calorie deficit must be between 0 and 1000 kcal",
            ));
        }
        if !adjustment_range.contains(&self.goal_adjustment.surplus_kcal) {
            return Err(ConfigError::InvalidRange(
                "calorie surplus must be between 0 and 1000 kcal",
            ));
        }

        for (name, split) in [
            ("lose", self.macro_splits.lose),
            ("maintain", self.macro_splits.maintain),
            ("gain", self.macro_splits.gain),
        ] {
            if split.total_pct() != 100 {
                tracing::warn!(goal = name, total = split.total_pct(), "Macro split rejected");
                return Err(ConfigError::InvalidWeights(
                    "macro split percentages must sum to 100",
                ));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("NUTRITION_BMR_WEIGHT_COEF")? {
            self.bmr.msj_weight_coef = parse_f64("NUTRITION_BMR_WEIGHT_COEF", &val)?;
        }
        if let Some(val) = env_override("NUTRITION_BMR_HEIGHT_COEF")? {
            self.bmr.msj_height_coef = parse_f64("NUTRITION_BMR_HEIGHT_COEF", &val)?;
        }
        if let Some(val) = env_override("NUTRITION_BMR_AGE_COEF")? {
            self.bmr.msj_age_coef = parse_f64("NUTRITION_BMR_AGE_COEF", &val)?;
        }
        if let Some(val) = env_override("NUTRITION_BMR_MALE_CONSTANT")? {
            self.bmr.msj_male_constant = parse_f64("NUTRITION_BMR_MALE_CONSTANT", &val)?;
        }
        if let Some(val) = env_override("NUTRITION_BMR_FEMALE_CONSTANT")? {
            self.bmr.msj_female_constant = parse_f64("NUTRITION_BMR_FEMALE_CONSTANT", &val)?;
        }

        if let Some(val) = env_override("NUTRITION_CALORIE_DEFICIT")? {
            self.goal_adjustment.deficit_kcal = parse_f64("NUTRITION_CALORIE_DEFICIT", &val)?;
        }
        if let Some(val) = env_override("NUTRITION_CALORIE_SURPLUS")? {
            self.goal_adjustment.surplus_kcal = parse_f64("NUTRITION_CALORIE_SURPLUS", &val)?;
        }

        if let Some(val) = env_override("NUTRITION_MACROS_LOSE")? {
            self.macro_splits.lose = MacroDistribution::parse(&val)?;
        }
        if let Some(val) = env_override("NUTRITION_MACROS_MAINTAIN")? {
            self.macro_splits.maintain = MacroDistribution::parse(&val)?;
        }
        if let Some(val) = env_override("NUTRITION_MACROS_GAIN")? {
            self.macro_splits.gain = MacroDistribution::parse(&val)?;
        }

        Ok(self)
    }
}

const MAX_GOAL_ADJUSTMENT_KCAL: f64 = 1000.0;

/// Read an override; unset variables are not an error, non-UTF-8 values are
fn env_override(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn parse_f64(key: &str, val: &str) -> Result<f64, ConfigError> {
    val.trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("Invalid {key}")))
}
