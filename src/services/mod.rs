// ABOUTME: Domain service layer combining the meal store with the nutrition engine
// ABOUTME: Provides front-end agnostic target and progress operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services fetch snapshots from a [`crate::store::MealStore`] and pass them to
//! the pure functions in [`crate::intelligence`].

/// Targets and daily/weekly progress reports
pub mod progress;

pub use progress::ProgressService;
