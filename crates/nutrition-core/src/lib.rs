// ABOUTME: Core types and constants for the nutrition tracking engine
// ABOUTME: Foundation crate with error handling, domain models, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! tracking engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy density and unit constants
//! - **models**: Dishes, daily meal records, user profiles, and computed statistics

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological and unit constants
pub mod constants;

/// Core data models (Dish, `DailyMeals`, User, statistics)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
