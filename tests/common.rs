// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, engines and measurement builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriscreen`

use std::env;
use std::sync::Once;

use chrono::{Months, NaiveDate};
use nutriscreen::engine::ScreeningEngine;
use nutriscreen::growth::{ClassificationMode, ReferenceTableStore, ScreeningConfig};
use nutriscreen::models::{Measurement, Sex};
use nutriscreen::report::MeasurementInput;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Observation date used by every fixture
pub const OBSERVED: (i32, u32, u32) = (2024, 6, 1);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixed observation date
pub fn observed() -> NaiveDate {
    let (year, month, day) = OBSERVED;
    date(year, month, day)
}

/// Birth date exactly `months` before the observation date
pub fn born_months_ago(months: u32) -> NaiveDate {
    observed().checked_sub_months(Months::new(months)).unwrap()
}

/// Measurement observed on the fixed date for a subject `months` old
pub fn measurement(weight_kg: f64, height_cm: f64, months: u32, sex: Sex) -> Measurement {
    Measurement::new(weight_kg, height_cm, born_months_ago(months), observed(), sex)
}

/// Wire input for a subject `months` old
pub fn input(record_id: &str, weight_kg: f64, height_cm: f64, months: u32, sex: &str) -> MeasurementInput {
    MeasurementInput {
        record_id: Some(record_id.to_owned()),
        weight_kg,
        height_cm,
        muac_cm: None,
        birth_date: born_months_ago(months),
        sex: sex.to_owned(),
        observation_date: Some(observed()),
        diet_pattern: None,
        has_allergy: None,
        allergies: None,
    }
}

/// Freshly built and validated reference store
pub fn store() -> ReferenceTableStore {
    init_test_logging();
    ReferenceTableStore::build().unwrap()
}

/// Engine over the given store in table mode
pub fn engine(store: &ReferenceTableStore) -> ScreeningEngine<'_> {
    ScreeningEngine::new(store, ScreeningConfig::default())
}

/// Engine over the given store in z-score mode
pub fn zscore_engine(store: &ReferenceTableStore) -> ScreeningEngine<'_> {
    ScreeningEngine::new(
        store,
        ScreeningConfig::default().with_mode(ClassificationMode::ZScore),
    )
}
