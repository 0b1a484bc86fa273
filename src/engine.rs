// ABOUTME: Screening engine wiring validation, age resolution, classifiers and risk scoring
// ABOUTME: Screens single measurements and parallel batches over an immutable reference store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Screening Engine
//!
//! ```text
//! MeasurementInput -> Measurement -> ValidationGate -> AgeResolver
//!     -> IndicatorPanel -> RiskScoreAggregator -> NutritionalAssessment -> ScreeningReport
//! ```
//!
//! The engine holds no mutable state. A single engine can screen from many
//! threads at once, and `screen_batch` does exactly that with rayon.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use nutriscreen_core::errors::{AppError, AppResult, ScreeningError};
use nutriscreen_core::models::Measurement;
use nutriscreen_growth::{
    AgeResolver, IndicatorOutcome, IndicatorPanel, NutritionalAssessment, ReferenceTableStore,
    RiskBand, RiskScoreAggregator, ScreeningConfig, ValidationGate,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::logging::ScreeningLogger;
use crate::report::{IndicatorReport, MeasurementInput, ScreeningReport};

/// Decimal places kept for the reported BMI
const BMI_DECIMALS: i32 = 2;

/// Malnutrition screening engine
#[derive(Debug, Clone)]
pub struct ScreeningEngine<'a> {
    store: &'a ReferenceTableStore,
    config: ScreeningConfig,
    gate: ValidationGate,
    resolver: AgeResolver,
    aggregator: RiskScoreAggregator,
}

impl ScreeningEngine<'static> {
    /// Engine over the process-wide reference store and configuration
    #[must_use]
    pub fn global() -> Self {
        Self::new(ReferenceTableStore::global(), ScreeningConfig::global().clone())
    }
}

impl<'a> ScreeningEngine<'a> {
    /// Create an engine over a store and configuration
    #[must_use]
    pub fn new(store: &'a ReferenceTableStore, config: ScreeningConfig) -> Self {
        debug!(
            mode = config.classification.mode.name(),
            reference_version = store.version(),
            "Screening engine ready"
        );
        Self {
            store,
            gate: ValidationGate::new(config.validation.clone()),
            resolver: AgeResolver::new(config.age.days_per_month),
            aggregator: RiskScoreAggregator::new(config.risk.clone()),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Reference store in use
    #[must_use]
    pub const fn store(&self) -> &'a ReferenceTableStore {
        self.store
    }

    /// Screen one measurement
    ///
    /// Invalid input fails the whole screening. Indicators outside their
    /// reference coverage are reported individually and skipped by the
    /// assessment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `ImplausibleValue` when the measurement is rejected
    pub fn screen(&self, measurement: &Measurement) -> Result<ScreeningReport, ScreeningError> {
        self.screen_as(Uuid::new_v4(), measurement)
    }

    fn screen_as(
        &self,
        screening_id: Uuid,
        measurement: &Measurement,
    ) -> Result<ScreeningReport, ScreeningError> {
        let started = Instant::now();

        self.gate.validate(measurement)?;
        let age = self
            .resolver
            .resolve(measurement.birth_date, measurement.observation_date)?;

        let outcomes = IndicatorPanel::new(self.store, &self.config).evaluate(measurement, age);
        let risk = self.aggregator.aggregate(measurement, age);
        let assessment =
            NutritionalAssessment::assess(outcomes.iter().filter_map(IndicatorOutcome::result));

        let mut notices: Vec<String> = outcomes
            .iter()
            .filter_map(IndicatorOutcome::result)
            .filter(|result| result.approximated)
            .filter_map(|result| {
                result
                    .note
                    .as_ref()
                    .map(|note| format!("{}: {note}", result.indicator.label()))
            })
            .collect();
        notices.extend(risk.approximation_notice());

        let report = ScreeningReport {
            screening_id,
            record_id: None,
            age_months: age.months(),
            bmi: round_to(measurement.bmi(), BMI_DECIMALS),
            indicators: outcomes.iter().map(IndicatorReport::from).collect(),
            risk_score: risk.value,
            risk_band: risk.band,
            risk_basis: risk.basis,
            critical_alert: risk.critical_alert,
            notices,
            nutritional_risk: assessment.risk,
            risk_factors: assessment.risk_factors,
            recommendations: assessment.recommendations,
            classification_mode: self.config.classification.mode,
            reference_version: self.store.version().to_owned(),
        };

        ScreeningLogger::log_screening(&report, started.elapsed());
        Ok(report)
    }

    /// Screen a raw input record
    ///
    /// # Errors
    ///
    /// Returns an `AppError` carrying the screening id and the record id when
    /// the input is rejected
    pub fn screen_input(
        &self,
        input: &MeasurementInput,
        today: NaiveDate,
    ) -> AppResult<ScreeningReport> {
        let screening_id = Uuid::new_v4();
        let attach_record = |error: ScreeningError| {
            let app_error = AppError::from(error).with_screening_id(screening_id);
            match &input.record_id {
                Some(record_id) => app_error.with_record_id(record_id.clone()),
                None => app_error,
            }
        };

        let measurement = input.to_measurement(today).map_err(attach_record)?;
        let mut report = self
            .screen_as(screening_id, &measurement)
            .map_err(attach_record)?;
        report.record_id.clone_from(&input.record_id);
        Ok(report)
    }

    /// Screen many records in parallel
    ///
    /// Results keep the input order. A rejected record yields its own error and
    /// never affects the others.
    #[must_use]
    pub fn screen_batch(&self, inputs: &[MeasurementInput]) -> BatchOutcome {
        let started = Instant::now();
        let today = Utc::now().date_naive();
        let results: Vec<AppResult<ScreeningReport>> = inputs
            .par_iter()
            .map(|input| self.screen_input(input, today))
            .collect();

        let summary = BatchSummary::from_results(&results);
        for error in results.iter().filter_map(|result| result.as_ref().err()) {
            ScreeningLogger::log_rejection(error);
        }
        ScreeningLogger::log_batch_summary(&summary, started.elapsed());
        BatchOutcome { results, summary }
    }
}

/// Results of a batch screening
#[derive(Debug)]
pub struct BatchOutcome {
    /// One result per input, in input order
    pub results: Vec<AppResult<ScreeningReport>>,
    /// Aggregate counts
    pub summary: BatchSummary,
}

/// Aggregate counts over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Records received
    pub total: usize,
    /// Records screened
    pub screened: usize,
    /// Records rejected
    pub failed: usize,
    /// Screened records per risk band
    pub by_risk_band: BTreeMap<RiskBand, usize>,
    /// Screened records with a critical alert
    pub critical_alerts: usize,
    /// Screened records with at least one out-of-domain indicator
    pub partial_results: usize,
}

impl BatchSummary {
    /// Summarize batch results
    #[must_use]
    pub fn from_results(results: &[AppResult<ScreeningReport>]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            match result {
                Ok(report) => {
                    summary.screened += 1;
                    *summary.by_risk_band.entry(report.risk_band).or_insert(0) += 1;
                    if report.critical_alert {
                        summary.critical_alerts += 1;
                    }
                    if report.failed_indicators() > 0 {
                        summary.partial_results += 1;
                    }
                }
                Err(_) => summary.failed += 1,
            }
        }
        debug!(?summary, "Batch summarized");
        summary
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
