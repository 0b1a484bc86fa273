// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors
// ABOUTME: Helper modules for nutriscreen-cli
// ABOUTME: Provides report and batch summary display functions

pub mod display;
