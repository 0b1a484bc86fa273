// ABOUTME: Single-measurement screening command for nutriscreen-cli
// ABOUTME: Builds a MeasurementInput from flags and prints the screening report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use nutriscreen::engine::ScreeningEngine;
use nutriscreen::report::MeasurementInput;
use tracing::info;

use crate::helpers::display::{display_report, print_json};

/// Flags of the `screen` command
pub struct ScreenArgs {
    pub weight: f64,
    pub height: f64,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub observation_date: Option<NaiveDate>,
    pub muac: Option<f64>,
    pub diet: Option<String>,
    pub allergy: Option<String>,
}

impl ScreenArgs {
    fn to_input(&self) -> MeasurementInput {
        MeasurementInput {
            record_id: None,
            weight_kg: self.weight,
            height_cm: self.height,
            muac_cm: self.muac,
            birth_date: self.birth_date,
            sex: self.sex.clone(),
            observation_date: self.observation_date,
            diet_pattern: self.diet.clone(),
            has_allergy: None,
            allergies: self.allergy.clone(),
        }
    }
}

/// Screen one measurement
pub fn run(args: &ScreenArgs, summary: bool) -> Result<()> {
    let engine = ScreeningEngine::global();
    let report = engine.screen_input(&args.to_input(), Utc::now().date_naive())?;
    info!(screening_id = %report.screening_id, "Report ready");

    if summary {
        display_report(&report);
    } else {
        print_json(&report)?;
    }
    Ok(())
}
