// ABOUTME: Tests for environment-driven screening configuration
// ABOUTME: Validates NUTRISCREEN_* overrides, parse failures and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use nutriscreen::engine::ScreeningEngine;
use nutriscreen::growth::config::ConfigError;
use nutriscreen::growth::{ClassificationMode, ScreeningConfig};
use nutriscreen::models::{Category, Indicator, Sex};
use serial_test::serial;

const VARS: [&str; 12] = [
    "NUTRISCREEN_CLASSIFICATION_MODE",
    "NUTRISCREEN_DAYS_PER_MONTH",
    "NUTRISCREEN_MAX_WEIGHT_KG",
    "NUTRISCREEN_MAX_HEIGHT_CM",
    "NUTRISCREEN_MAX_MUAC_CM",
    "NUTRISCREEN_MUAC_SEVERE_CM",
    "NUTRISCREEN_MUAC_MODERATE_CM",
    "NUTRISCREEN_ALLERGY_POINTS",
    "NUTRISCREEN_RESTRICTED_DIET_POINTS",
    "NUTRISCREEN_SEVERE_RISK_SCORE",
    "NUTRISCREEN_HIGH_RISK_SCORE",
    "NUTRISCREEN_MODERATE_RISK_SCORE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ScreeningConfig::load().unwrap();
    assert_eq!(config.classification.mode, ClassificationMode::Table);
    assert!((config.age.days_per_month - 30.44).abs() < f64::EPSILON);
    assert_eq!(config.risk.modifiers.allergy_points, 5);
    assert_eq!(config.risk.bands.high_score, 50);
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    clear_env();
    env::set_var("NUTRISCREEN_CLASSIFICATION_MODE", "zscore");
    env::set_var("NUTRISCREEN_DAYS_PER_MONTH", "30.4375");
    env::set_var("NUTRISCREEN_MAX_WEIGHT_KG", "150");
    env::set_var("NUTRISCREEN_ALLERGY_POINTS", "10");
    env::set_var("NUTRISCREEN_MODERATE_RISK_SCORE", "20");

    let config = ScreeningConfig::load();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.classification.mode, ClassificationMode::ZScore);
    assert!((config.age.days_per_month - 30.4375).abs() < f64::EPSILON);
    assert!((config.validation.max_weight_kg - 150.0).abs() < f64::EPSILON);
    assert_eq!(config.risk.modifiers.allergy_points, 10);
    assert_eq!(config.risk.bands.moderate_score, 20);
}

#[test]
#[serial]
fn test_unparseable_value_is_a_parse_error() {
    clear_env();
    env::set_var("NUTRISCREEN_DAYS_PER_MONTH", "thirty");
    let result = ScreeningConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_unknown_mode_is_rejected() {
    clear_env();
    env::set_var("NUTRISCREEN_CLASSIFICATION_MODE", "percentile");
    let result = ScreeningConfig::load();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_inverted_muac_overrides_fail_validation() {
    clear_env();
    env::set_var("NUTRISCREEN_MUAC_SEVERE_CM", "13.0");
    env::set_var("NUTRISCREEN_MUAC_MODERATE_CM", "12.0");
    let result = ScreeningConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_muac_overrides_change_classification_only() {
    clear_env();
    env::set_var("NUTRISCREEN_MUAC_SEVERE_CM", "12.0");
    env::set_var("NUTRISCREEN_MUAC_MODERATE_CM", "13.0");
    let config = ScreeningConfig::load();
    clear_env();
    let config = config.unwrap();

    let store = common::store();
    let engine = ScreeningEngine::new(&store, config);
    let measurement = common::measurement(13.0, 90.0, 30, Sex::Male).with_muac(11.8);
    let report = engine.screen(&measurement).unwrap();

    let muac = report.indicator(Indicator::Muac).unwrap();
    assert_eq!(muac.category, Some(Category::SevereAcuteMalnutrition));
    // Risk tiers keep the 11.5 / 12.5 policy cut-offs
    assert_eq!(report.risk_score, 25);
}

#[test]
#[serial]
fn test_inverted_risk_bands_fail_validation() {
    clear_env();
    env::set_var("NUTRISCREEN_HIGH_RISK_SCORE", "90");
    let result = ScreeningConfig::load();
    clear_env();
    assert!(result.is_err());
}
