// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors
// ABOUTME: Re-exports command modules for nutriscreen-cli
// ABOUTME: Provides access to screen, batch and lookup commands

pub mod batch;
pub mod lookup;
pub mod screen;
