// ABOUTME: Re-exports helper modules for nutrition-cli
// ABOUTME: Provides access to snapshot loading and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod snapshot;
