// ABOUTME: Indicator classifiers mapping one measurement value to a category
// ABOUTME: Table-driven growth classifiers plus threshold classifiers for MUAC and older ages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Indicator Classifiers
//!
//! Every classifier has the same shape: `classify(value, index, sex)`. They
//! differ only in which measurement feeds `value` and how the category is found:
//!
//! - `GrowthClassifier` consults the reference tables (weight-for-age,
//!   height-for-age, weight-for-height, BMI-for-age) in table or z-score mode
//! - `AdultAdolescentClassifier` applies BMI and MUAC threshold bands from 72 months
//! - `MuacClassifier` applies the pediatric MUAC cut-offs and defers to the
//!   adult/adolescent bands for older subjects

/// Adult and adolescent threshold classification
pub mod adult;
/// MUAC classification
pub mod muac;
/// Table-driven growth classification
pub mod reference;
/// Z-score estimation from tabulated cut points
pub mod zscore;

pub use adult::AdultAdolescentClassifier;
pub use muac::MuacClassifier;
pub use reference::GrowthClassifier;

use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{Category, ClassificationResult, Indicator, Sex};

/// Common interface of every indicator classifier
pub trait IndicatorClassifier: Send + Sync {
    /// Indicator produced by this classifier
    fn indicator(&self) -> Indicator;

    /// Classify `value` at `index` (age in months or height in cm)
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` when `index` is outside the classifier's coverage
    fn classify(
        &self,
        value: f64,
        index: f64,
        sex: Sex,
    ) -> Result<ClassificationResult, ScreeningError>;
}

/// Category of the first cut-off that `value` falls below, else `otherwise`
///
/// Cut-offs are ordered most severe first with ascending values.
#[must_use]
pub fn threshold_category(value: f64, cut_offs: &[(f64, Category)], otherwise: Category) -> Category {
    cut_offs
        .iter()
        .find(|(cut_off, _)| value < *cut_off)
        .map_or(otherwise, |(_, category)| *category)
}
