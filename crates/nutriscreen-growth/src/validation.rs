// ABOUTME: Validation gate run before any classification
// ABOUTME: Rejects invalid measurements and flags indicators outside reference coverage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Validation Gate
//!
//! Two kinds of checks with different blast radius:
//!
//! - `validate` fails the whole screening (non-positive or implausible numbers,
//!   observation before birth). Nothing is computed.
//! - `check_domain` is scoped to one indicator. An indicator outside its
//!   reference coverage is reported with an error while the others proceed.

use nutriscreen_core::constants::age;
use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{Indicator, Measurement, Sex};
use tracing::debug;

use crate::age::AgeMonths;
use crate::config::ValidationLimits;
use crate::reference::ReferenceTableStore;

/// Input validation and indicator domain checks
#[derive(Debug, Clone)]
pub struct ValidationGate {
    limits: ValidationLimits,
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new(ValidationLimits::default())
    }
}

impl ValidationGate {
    /// Create a gate with the given plausibility limits
    #[must_use]
    pub const fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Reject measurements that cannot be screened at all
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite or non-positive weight/height, a
    /// negative MUAC or an observation date before the birth date, and
    /// `ImplausibleValue` for values above the plausibility limits
    pub fn validate(&self, measurement: &Measurement) -> Result<(), ScreeningError> {
        check_positive("weight_kg", measurement.weight_kg)?;
        check_positive("height_cm", measurement.height_cm)?;
        check_limit("weight_kg", measurement.weight_kg, self.limits.max_weight_kg)?;
        check_limit("height_cm", measurement.height_cm, self.limits.max_height_cm)?;

        if let Some(muac_cm) = measurement.muac_cm {
            if !muac_cm.is_finite() || muac_cm < 0.0 {
                return Err(ScreeningError::invalid_input(
                    "muac_cm",
                    format!("must be zero or a positive number, got {muac_cm}"),
                ));
            }
            check_limit("muac_cm", muac_cm, self.limits.max_muac_cm)?;
        }

        if measurement.observation_date < measurement.birth_date {
            return Err(ScreeningError::invalid_input(
                "observation_date",
                format!(
                    "observation date {} is before birth date {}",
                    measurement.observation_date, measurement.birth_date
                ),
            ));
        }

        Ok(())
    }

    /// Check whether an indicator can be evaluated for this age and height
    ///
    /// BMI-for-age past the pediatric range is always in domain because it is
    /// classified with adult/adolescent thresholds instead of a table.
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` when the indicator's index lies outside coverage,
    /// or a configuration error when the indicator's table is missing
    pub fn check_domain(
        &self,
        store: &ReferenceTableStore,
        indicator: Indicator,
        sex: Sex,
        age: AgeMonths,
        height_cm: f64,
    ) -> Result<(), ScreeningError> {
        let index = match indicator {
            Indicator::BmiForAge if !age.is_pediatric() => return Ok(()),
            Indicator::Muac => return check_muac_domain(age),
            Indicator::WeightForHeight => height_cm,
            Indicator::WeightForAge | Indicator::HeightForAge | Indicator::BmiForAge => {
                age.as_index()
            }
        };

        let (min, max) = store.table(indicator, sex)?.coverage();
        if index < min || index > max {
            debug!(
                indicator = indicator.name(),
                index, min, max, "Indicator outside reference coverage"
            );
            return Err(ScreeningError::out_of_domain(indicator, index, min, max));
        }
        Ok(())
    }
}

fn check_muac_domain(age: AgeMonths) -> Result<(), ScreeningError> {
    if age.months() < age::MUAC_MIN_MONTHS {
        return Err(ScreeningError::out_of_domain(
            Indicator::Muac,
            age.as_index(),
            f64::from(age::MUAC_MIN_MONTHS),
            f64::INFINITY,
        ));
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ScreeningError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScreeningError::invalid_input(
            field,
            format!("must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

fn check_limit(field: &'static str, value: f64, limit: f64) -> Result<(), ScreeningError> {
    if value > limit {
        return Err(ScreeningError::implausible(field, value, limit));
    }
    Ok(())
}
