// ABOUTME: Physiological constants shared by target calculation and aggregation
// ABOUTME: Energy density per macronutrient gram and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_GRAM: u32 = 4;
    /// Carbohydrate: 4 kcal/g
    pub const CARBS_KCAL_PER_GRAM: u32 = 4;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_GRAM: u32 = 9;
}

/// Calendar constants
pub mod calendar {
    /// Days in a statistics week
    pub const DAYS_PER_WEEK: usize = 7;
}

/// Service names used in structured logging
pub mod service_names {
    /// Command-line front end
    pub const NUTRITION_CLI: &str = "nutrition-cli";
}
