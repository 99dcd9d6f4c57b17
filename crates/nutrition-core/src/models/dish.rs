// ABOUTME: Logged dish value object with its measurement unit
// ABOUTME: UnitType lookup with gram fallback and non-negativity validation for dishes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Measurement unit of a logged dish amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitType {
    /// Grams
    #[default]
    Gram,
    /// Milliliters
    Milliliter,
    /// Liters
    Liter,
    /// Whole pieces (slices, eggs, bars)
    Piece,
}

impl UnitType {
    /// Canonical short code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milliliter => "ml",
            Self::Liter => "l",
            Self::Piece => "pcs",
        }
    }

    /// Resolve a short code, falling back to grams for anything unknown
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "g" => Self::Gram,
            "ml" => Self::Milliliter,
            "l" => Self::Liter,
            "pcs" => Self::Piece,
            other => {
                tracing::debug!(code = other, "Unknown unit code, falling back to grams");
                Self::Gram
            }
        }
    }
}

impl Serialize for UnitType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

// Unit codes never fail to deserialize; unknown codes become grams
impl<'de> Deserialize<'de> for UnitType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// A single logged food item
///
/// Dishes are immutable once logged; edits replace the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Identifier assigned by the meal store
    pub id: String,
    /// Display name
    pub title: String,
    /// Energy in kcal
    pub kcal: u32,
    /// Carbohydrates in grams
    pub carb: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fat in grams
    pub fats: f64,
    /// Portion size, expressed in `unit`
    pub amount: f64,
    /// Unit of `amount`
    #[serde(default)]
    pub unit: UnitType,
}

impl Dish {
    /// Check that every nutrition quantity is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        let quantities = [
            ("carb", self.carb),
            ("protein", self.protein),
            ("fats", self.fats),
            ("amount", self.amount),
        ];

        for (field, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::value_out_of_range(format!(
                    "Dish '{}' has invalid {field}: {value}",
                    self.title
                ))
                .with_resource_id(self.id.clone())
                .with_details(serde_json::json!({ "field": field })));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(carb: f64) -> Dish {
        Dish {
            id: "d1".to_owned(),
            title: "Oatmeal".to_owned(),
            kcal: 150,
            carb,
            protein: 5.0,
            fats: 3.0,
            amount: 40.0,
            unit: UnitType::Gram,
        }
    }

    #[test]
    fn test_unit_code_round_trip() {
        for unit in [
            UnitType::Gram,
            UnitType::Milliliter,
            UnitType::Liter,
            UnitType::Piece,
        ] {
            assert_eq!(UnitType::from_code(unit.code()), unit);
        }
    }

    #[test]
    fn test_unknown_unit_falls_back_to_gram() {
        assert_eq!(UnitType::from_code("cup"), UnitType::Gram);
        assert_eq!(UnitType::from_code(""), UnitType::Gram);
        assert_eq!(UnitType::from_code("ML"), UnitType::Gram);
    }

    #[test]
    fn test_unknown_unit_deserializes_as_gram() {
        let unit: UnitType = serde_json::from_str("\"tbsp\"").unwrap();
        assert_eq!(unit, UnitType::Gram);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(dish(10.0).validate().is_ok());
        assert!(dish(-0.5).validate().is_err());
        assert!(dish(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_error_names_field() {
        let err = dish(-1.0).validate().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.resource_id.as_deref(), Some("d1"));
        assert_eq!(err.context.details["field"], "carb");
    }
}
