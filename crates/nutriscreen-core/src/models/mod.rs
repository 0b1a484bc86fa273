// ABOUTME: Core data models for anthropometric screening
// ABOUTME: Re-exports Measurement, Sex, DietPattern, Indicator, Category and results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Data Models
//!
//! - `Measurement`: one screening event (weight, height, MUAC, dates, sex, diet)
//! - `Indicator`: the growth indicators the engine evaluates
//! - `Category`: classification labels with an attached `Severity`
//! - `ClassificationResult`: per-indicator outcome with lookup provenance

mod classification;
mod measurement;

pub use classification::{Category, ClassificationResult, Indicator, Severity};
pub use measurement::{DietPattern, Measurement, Sex};
