// ABOUTME: Wire contract of the screening engine: measurement input and screening report
// ABOUTME: Serde types exchanged with callers, the CLI and JSON-lines batch files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use chrono::NaiveDate;
use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{Category, DietPattern, Indicator, Measurement, Severity, Sex};
use nutriscreen_growth::{
    ClassificationMode, IndicatorOutcome, NutritionalRisk, RiskBand, RiskBasis,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw measurement record as received from callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Caller-supplied record reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height or length in centimeters
    pub height_cm: f64,
    /// MUAC in centimeters; zero means not measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muac_cm: Option<f64>,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// `male` or `female`
    pub sex: String,
    /// Observation date, today when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_date: Option<NaiveDate>,
    /// Diet pattern tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_pattern: Option<String>,
    /// Explicit allergy flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_allergy: Option<bool>,
    /// Free-text allergy list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

impl MeasurementInput {
    /// Build a validated-shape `Measurement`, defaulting the observation date to `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the sex is not recognized
    pub fn to_measurement(&self, today: NaiveDate) -> Result<Measurement, ScreeningError> {
        let sex: Sex = self.sex.parse()?;
        let mut measurement = Measurement::new(
            self.weight_kg,
            self.height_cm,
            self.birth_date,
            self.observation_date.unwrap_or(today),
            sex,
        );
        measurement.muac_cm = self.muac_cm;
        measurement.diet = self.diet_pattern.as_deref().map(DietPattern::parse);
        measurement.has_allergy = self.has_allergy;
        measurement.allergies.clone_from(&self.allergies);
        Ok(measurement)
    }
}

/// One indicator in a report: a classification or an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Indicator name
    pub indicator_name: Indicator,
    /// Category assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Severity of the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Reference index actually used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_used: Option<f64>,
    /// Whether a nearest row stood in for the requested index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximated: Option<bool>,
    /// Z-score (z-score mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
    /// Diagnostic note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Why the indicator could not be evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IndicatorReport {
    /// Whether the indicator was classified
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}

impl From<&IndicatorOutcome> for IndicatorReport {
    fn from(outcome: &IndicatorOutcome) -> Self {
        match outcome {
            IndicatorOutcome::Classified(result) => Self {
                indicator_name: result.indicator,
                category: Some(result.category),
                severity: Some(result.severity()),
                index_used: Some(result.index_used),
                approximated: Some(result.approximated),
                z_score: result.z_score,
                note: result.note.clone(),
                error: None,
            },
            IndicatorOutcome::Failed { indicator, error } => Self {
                indicator_name: *indicator,
                category: None,
                severity: None,
                index_used: None,
                approximated: None,
                z_score: None,
                note: None,
                error: Some(error.to_string()),
            },
        }
    }
}

/// Complete output of one screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Correlation identifier
    pub screening_id: Uuid,
    /// Caller-supplied record reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Age in completed months
    pub age_months: u32,
    /// Body mass index, two decimals
    pub bmi: f64,
    /// One entry per applicable indicator
    pub indicators: Vec<IndicatorReport>,
    /// Risk score, 0-100
    pub risk_score: u8,
    /// Risk score band
    pub risk_band: RiskBand,
    /// Primary indicator behind the risk score
    pub risk_basis: RiskBasis,
    /// Needs immediate attention
    pub critical_alert: bool,
    /// Approximations applied (nearest rows, MUAC fallback)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
    /// Overall nutritional risk level
    pub nutritional_risk: NutritionalRisk,
    /// Findings behind the nutritional risk level
    pub risk_factors: Vec<String>,
    /// Follow-up actions
    pub recommendations: Vec<String>,
    /// Classification mode used for tabulated indicators
    pub classification_mode: ClassificationMode,
    /// Reference data version
    pub reference_version: String,
}

impl ScreeningReport {
    /// Report entry for an indicator
    #[must_use]
    pub fn indicator(&self, indicator: Indicator) -> Option<&IndicatorReport> {
        self.indicators
            .iter()
            .find(|report| report.indicator_name == indicator)
    }

    /// Number of indicators that could not be evaluated
    #[must_use]
    pub fn failed_indicators(&self) -> usize {
        self.indicators
            .iter()
            .filter(|report| !report.is_classified())
            .count()
    }
}
