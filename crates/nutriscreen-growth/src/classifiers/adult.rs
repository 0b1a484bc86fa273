// ABOUTME: BMI and MUAC threshold classification for subjects aged 72 months and older
// ABOUTME: Separate adolescent (72-239 months) and adult (240+ months) threshold sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use nutriscreen_core::constants::age;
use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{Category, ClassificationResult, Indicator, Sex};

use super::{threshold_category, IndicatorClassifier};
use crate::age::AgeMonths;
use crate::config::{BmiThresholds, MuacThresholds};

/// Threshold classifier for ages outside the pediatric tables
///
/// BMI bands:
///
/// - adolescent (72-239 months): `< 15` severe thinness, `< 17` moderate
///   thinness, `< 18.5` mild thinness, else normal
/// - adult (240+ months): `< 16.5` severe thinness, `< 18.5` moderate thinness,
///   `>= 30` obese, `>= 25` overweight, else normal
#[derive(Debug, Clone, Default)]
pub struct AdultAdolescentClassifier {
    bmi: BmiThresholds,
    muac: MuacThresholds,
}

impl AdultAdolescentClassifier {
    /// Create a classifier with the given thresholds
    #[must_use]
    pub const fn new(bmi: BmiThresholds, muac: MuacThresholds) -> Self {
        Self { bmi, muac }
    }

    /// Whether this classifier handles the given age
    #[must_use]
    pub const fn applies_to(age: AgeMonths) -> bool {
        age.months() >= age::ADOLESCENT_MIN_MONTHS
    }

    /// Classify BMI for an adolescent or adult
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` for ages below 72 months
    pub fn classify_bmi(
        &self,
        bmi: f64,
        age: AgeMonths,
    ) -> Result<ClassificationResult, ScreeningError> {
        Self::ensure_applies(Indicator::BmiForAge, age)?;
        let (category, group) = if age.is_adult() {
            (self.adult_bmi_category(bmi), "adult")
        } else {
            (self.adolescent_bmi_category(bmi), "adolescent")
        };
        Ok(
            ClassificationResult::new(Indicator::BmiForAge, category, age.as_index(), false)
                .with_note(format!("{group} BMI thresholds")),
        )
    }

    /// Classify MUAC for an adolescent or adult
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` for ages below 72 months
    pub fn classify_muac(
        &self,
        muac_cm: f64,
        age: AgeMonths,
    ) -> Result<ClassificationResult, ScreeningError> {
        Self::ensure_applies(Indicator::Muac, age)?;
        let (severe, moderate, group) = if age.is_adult() {
            (self.muac.adult_severe_cm, self.muac.adult_moderate_cm, "adult")
        } else {
            (
                self.muac.adolescent_severe_cm,
                self.muac.adolescent_moderate_cm,
                "adolescent",
            )
        };
        let category = threshold_category(
            muac_cm,
            &[
                (severe, Category::SevereAcuteMalnutrition),
                (moderate, Category::ModerateAcuteMalnutrition),
            ],
            Category::Normal,
        );
        Ok(
            ClassificationResult::new(Indicator::Muac, category, age.as_index(), false)
                .with_note(format!("{group} MUAC thresholds")),
        )
    }

    fn adolescent_bmi_category(&self, bmi: f64) -> Category {
        threshold_category(
            bmi,
            &[
                (self.bmi.adolescent_severe, Category::SevereThinness),
                (self.bmi.adolescent_moderate, Category::ModerateThinness),
                (self.bmi.adolescent_mild, Category::MildThinness),
            ],
            Category::Normal,
        )
    }

    fn adult_bmi_category(&self, bmi: f64) -> Category {
        if bmi >= self.bmi.adult_obese {
            return Category::Obese;
        }
        if bmi >= self.bmi.adult_overweight {
            return Category::Overweight;
        }
        threshold_category(
            bmi,
            &[
                (self.bmi.adult_severe, Category::SevereThinness),
                (self.bmi.adult_moderate, Category::ModerateThinness),
            ],
            Category::Normal,
        )
    }

    fn ensure_applies(indicator: Indicator, age: AgeMonths) -> Result<(), ScreeningError> {
        if Self::applies_to(age) {
            return Ok(());
        }
        Err(ScreeningError::out_of_domain(
            indicator,
            age.as_index(),
            f64::from(age::ADOLESCENT_MIN_MONTHS),
            f64::INFINITY,
        ))
    }
}

impl IndicatorClassifier for AdultAdolescentClassifier {
    fn indicator(&self) -> Indicator {
        Indicator::BmiForAge
    }

    /// `value` is BMI and `index` is age in whole months
    fn classify(
        &self,
        value: f64,
        index: f64,
        _sex: Sex,
    ) -> Result<ClassificationResult, ScreeningError> {
        if !index.is_finite() || index < 0.0 {
            return Err(ScreeningError::out_of_domain(
                Indicator::BmiForAge,
                index,
                f64::from(age::ADOLESCENT_MIN_MONTHS),
                f64::INFINITY,
            ));
        }
        self.classify_bmi(value, AgeMonths::new(index.floor() as u32))
    }
}
