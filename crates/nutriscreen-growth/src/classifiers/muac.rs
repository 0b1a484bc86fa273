// ABOUTME: Mid-upper arm circumference classification across all ages from 6 months
// ABOUTME: Pediatric SAM/MAM cut-offs, deferring to adolescent and adult bands from 72 months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use nutriscreen_core::constants::age;
use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{Category, ClassificationResult, Indicator, Sex};

use super::{threshold_category, AdultAdolescentClassifier, IndicatorClassifier};
use crate::age::AgeMonths;
use crate::config::MuacThresholds;

/// MUAC classifier
///
/// MUAC is not validated below 6 months, so those ages are out of domain.
#[derive(Debug, Clone, Default)]
pub struct MuacClassifier {
    thresholds: MuacThresholds,
    older: AdultAdolescentClassifier,
}

impl MuacClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new(thresholds: MuacThresholds, older: AdultAdolescentClassifier) -> Self {
        Self { thresholds, older }
    }

    /// Classify a MUAC reading in centimeters
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` for ages below 6 months
    pub fn classify_at(
        &self,
        muac_cm: f64,
        age: AgeMonths,
    ) -> Result<ClassificationResult, ScreeningError> {
        if age.months() < age::MUAC_MIN_MONTHS {
            return Err(ScreeningError::out_of_domain(
                Indicator::Muac,
                age.as_index(),
                f64::from(age::MUAC_MIN_MONTHS),
                f64::INFINITY,
            ));
        }
        if AdultAdolescentClassifier::applies_to(age) {
            return self.older.classify_muac(muac_cm, age);
        }

        let category = threshold_category(
            muac_cm,
            &[
                (
                    self.thresholds.child_severe_cm,
                    Category::SevereAcuteMalnutrition,
                ),
                (
                    self.thresholds.child_moderate_cm,
                    Category::ModerateAcuteMalnutrition,
                ),
            ],
            Category::Normal,
        );
        Ok(ClassificationResult::new(
            Indicator::Muac,
            category,
            age.as_index(),
            false,
        ))
    }
}

impl IndicatorClassifier for MuacClassifier {
    fn indicator(&self) -> Indicator {
        Indicator::Muac
    }

    fn classify(
        &self,
        value: f64,
        index: f64,
        _sex: Sex,
    ) -> Result<ClassificationResult, ScreeningError> {
        if !index.is_finite() || index < 0.0 {
            return Err(ScreeningError::out_of_domain(
                Indicator::Muac,
                index,
                f64::from(age::MUAC_MIN_MONTHS),
                f64::INFINITY,
            ));
        }
        self.classify_at(value, AgeMonths::new(index.floor() as u32))
    }
}
