// ABOUTME: Growth-standard classification and malnutrition risk scoring for NutriScreen
// ABOUTME: Reference tables, age resolution, validation, classifiers, risk and assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

#![deny(unsafe_code)]

//! # NutriScreen Growth
//!
//! Pure, synchronous building blocks of a screening:
//!
//! ```text
//! Measurement -> ValidationGate -> AgeResolver -> IndicatorPanel -> RiskScoreAggregator
//!                                                      |
//!                                       NutritionalAssessment
//! ```
//!
//! The reference store is built once and is read-only afterwards, so every
//! component can be shared across threads without locking.

/// Age in completed months
pub mod age;
/// Overall nutritional risk and recommendations
pub mod assessment;
/// Indicator classifiers
pub mod classifiers;
/// Screening configuration
pub mod config;
/// Multi-indicator evaluation
pub mod panel;
/// Reference tables
pub mod reference;
/// Risk score aggregation
pub mod risk;
/// Input validation
pub mod validation;

pub use age::{AgeMonths, AgeResolver};
pub use assessment::{NutritionalAssessment, NutritionalRisk};
pub use classifiers::{
    AdultAdolescentClassifier, GrowthClassifier, IndicatorClassifier, MuacClassifier,
};
pub use config::{ClassificationMode, ScreeningConfig};
pub use panel::{IndicatorOutcome, IndicatorPanel};
pub use reference::{Band, ReferenceEntry, ReferenceTableStore, TableMatch};
pub use risk::{RiskBand, RiskBasis, RiskScore, RiskScoreAggregator};
pub use validation::ValidationGate;
