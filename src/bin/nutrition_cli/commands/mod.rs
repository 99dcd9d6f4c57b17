// ABOUTME: Re-exports command modules for nutrition-cli
// ABOUTME: Provides access to target and progress report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod progress;
pub mod targets;
