// ABOUTME: Core types and constants for the NutriScreen malnutrition screening engine
// ABOUTME: Foundation crate with error handling, anthropometric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

#![deny(unsafe_code)]

//! # NutriScreen Core
//!
//! Foundation crate providing shared types and constants for the NutriScreen
//! growth screening engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ScreeningError`
//! - **constants**: Screening constants organized by domain (units, ages, limits)
//! - **models**: Measurements, indicators, categories, and classification results

/// Unified error handling system with standard error codes
pub mod errors;

/// Screening constants organized by domain
pub mod constants;

/// Core data models (`Measurement`, `Sex`, `Indicator`, `Category`, etc.)
pub mod models;
