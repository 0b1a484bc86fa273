// ABOUTME: Evaluates every applicable indicator for one measurement
// ABOUTME: Out-of-domain indicators carry their own error instead of failing the screening
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{ClassificationResult, Indicator, Measurement};
use tracing::debug;

use crate::age::AgeMonths;
use crate::classifiers::{
    AdultAdolescentClassifier, GrowthClassifier, IndicatorClassifier, MuacClassifier,
};
use crate::config::ScreeningConfig;
use crate::reference::ReferenceTableStore;
use crate::validation::ValidationGate;

/// Result of one indicator: a classification or an indicator-scoped error
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutcome {
    /// Indicator was classified
    Classified(ClassificationResult),
    /// Indicator could not be evaluated
    Failed {
        /// Indicator affected
        indicator: Indicator,
        /// Why it could not be evaluated
        error: ScreeningError,
    },
}

impl IndicatorOutcome {
    /// Indicator this outcome belongs to
    #[must_use]
    pub const fn indicator(&self) -> Indicator {
        match self {
            Self::Classified(result) => result.indicator,
            Self::Failed { indicator, .. } => *indicator,
        }
    }

    /// Classification, when successful
    #[must_use]
    pub const fn result(&self) -> Option<&ClassificationResult> {
        match self {
            Self::Classified(result) => Some(result),
            Self::Failed { .. } => None,
        }
    }

    fn from_result(indicator: Indicator, result: Result<ClassificationResult, ScreeningError>) -> Self {
        match result {
            Ok(result) => Self::Classified(result),
            Err(error) => Self::Failed { indicator, error },
        }
    }
}

/// Runs every indicator classifier for a validated measurement
#[derive(Debug, Clone, Copy)]
pub struct IndicatorPanel<'a> {
    store: &'a ReferenceTableStore,
    config: &'a ScreeningConfig,
}

impl<'a> IndicatorPanel<'a> {
    /// Create a panel over a store and configuration
    #[must_use]
    pub const fn new(store: &'a ReferenceTableStore, config: &'a ScreeningConfig) -> Self {
        Self { store, config }
    }

    /// Classify every applicable indicator in report order
    ///
    /// MUAC is only included when it was measured.
    #[must_use]
    pub fn evaluate(&self, measurement: &Measurement, age: AgeMonths) -> Vec<IndicatorOutcome> {
        let gate = ValidationGate::new(self.config.validation.clone());
        let older = AdultAdolescentClassifier::new(self.config.bmi.clone(), self.config.muac.clone());

        Indicator::ALL
            .into_iter()
            .filter(|indicator| *indicator != Indicator::Muac || measurement.muac().is_some())
            .map(|indicator| {
                let outcome = gate
                    .check_domain(self.store, indicator, measurement.sex, age, measurement.height_cm)
                    .and_then(|()| self.classify(indicator, measurement, age, &older));
                IndicatorOutcome::from_result(indicator, outcome)
            })
            .inspect(|outcome| {
                if let IndicatorOutcome::Failed { indicator, error } = outcome {
                    debug!(indicator = indicator.name(), %error, "Indicator skipped");
                }
            })
            .collect()
    }

    fn classify(
        &self,
        indicator: Indicator,
        measurement: &Measurement,
        age: AgeMonths,
        older: &AdultAdolescentClassifier,
    ) -> Result<ClassificationResult, ScreeningError> {
        let mode = self.config.classification.mode;
        let sex = measurement.sex;
        match indicator {
            Indicator::WeightForAge => GrowthClassifier::weight_for_age(mode, self.store).classify(
                measurement.weight_kg,
                age.as_index(),
                sex,
            ),
            Indicator::HeightForAge => GrowthClassifier::height_for_age(mode, self.store).classify(
                measurement.height_cm,
                age.as_index(),
                sex,
            ),
            Indicator::WeightForHeight => GrowthClassifier::weight_for_height(mode, self.store)
                .classify(measurement.weight_kg, measurement.height_cm, sex),
            Indicator::BmiForAge if AdultAdolescentClassifier::applies_to(age) => {
                older.classify_bmi(measurement.bmi(), age)
            }
            Indicator::BmiForAge => GrowthClassifier::bmi_for_age(mode, self.store).classify(
                measurement.bmi(),
                age.as_index(),
                sex,
            ),
            Indicator::Muac => {
                let muac_cm = measurement.muac().ok_or_else(|| {
                    ScreeningError::invalid_input("muac_cm", "MUAC was not measured")
                })?;
                MuacClassifier::new(self.config.muac.clone(), older.clone())
                    .classify_at(muac_cm, age)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Months, NaiveDate};
    use nutriscreen_core::models::{Category, Sex};

    use super::*;

    fn measurement(weight_kg: f64, height_cm: f64, months_old: u32) -> (Measurement, AgeMonths) {
        let observed = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let born = observed
            .checked_sub_months(Months::new(months_old))
            .unwrap();
        (
            Measurement::new(weight_kg, height_cm, born, observed, Sex::Male),
            AgeMonths::new(months_old),
        )
    }

    #[test]
    fn test_pediatric_measurement_classifies_four_indicators() {
        let store = ReferenceTableStore::build().unwrap();
        let config = ScreeningConfig::default();
        let panel = IndicatorPanel::new(&store, &config);
        let (record, age) = measurement(12.2, 87.1, 24);

        let outcomes = panel.evaluate(&record, age);
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|outcome| outcome.result().is_some()));
        assert_eq!(
            outcomes[0].result().unwrap().category,
            Category::Normal
        );
    }

    #[test]
    fn test_older_subject_isolates_out_of_domain_indicators() {
        let store = ReferenceTableStore::build().unwrap();
        let config = ScreeningConfig::default();
        let panel = IndicatorPanel::new(&store, &config);
        let (record, age) = measurement(29.0, 125.0, 90);

        let outcomes = panel.evaluate(&record, age);
        let failed: Vec<Indicator> = outcomes
            .iter()
            .filter(|outcome| outcome.result().is_none())
            .map(IndicatorOutcome::indicator)
            .collect();
        assert_eq!(
            failed,
            vec![
                Indicator::WeightForAge,
                Indicator::HeightForAge,
                Indicator::WeightForHeight
            ]
        );
        let bmi = outcomes[3].result().unwrap();
        assert_eq!(bmi.indicator, Indicator::BmiForAge);
        assert_eq!(bmi.category, Category::Normal);
    }

    #[test]
    fn test_measured_muac_is_included() {
        let store = ReferenceTableStore::build().unwrap();
        let config = ScreeningConfig::default();
        let panel = IndicatorPanel::new(&store, &config);
        let (record, age) = measurement(11.0, 85.0, 30);

        let outcomes = panel.evaluate(&record.with_muac(11.0), age);
        let muac = outcomes.last().unwrap().result().unwrap();
        assert_eq!(muac.indicator, Indicator::Muac);
        assert_eq!(muac.category, Category::SevereAcuteMalnutrition);
    }
}
