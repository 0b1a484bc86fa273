// ABOUTME: Benchmark fixtures generating deterministic measurement batches
// ABOUTME: Spreads ages, sexes and anthropometrics across the pediatric and adult ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Deterministic measurement generators for reproducible performance measurements.

use chrono::{Months, NaiveDate};
use nutriscreen::report::MeasurementInput;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small batch (100 records), a clinic day
    Small,
    /// Large batch (10 000 records), a survey round
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Large => 10_000,
        }
    }
}

/// Fixed observation date so results do not drift with the calendar
#[must_use]
pub fn observation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

/// Generate `count` plausible measurement records
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_inputs(count: usize) -> Vec<MeasurementInput> {
    let observed = observation_date();
    (0..count)
        .map(|index| {
            // Mostly under-fives, with some school-age children and adults
            let months = match index % 10 {
                0 => 90 + (index % 60) as u32,
                1 => 240 + (index % 300) as u32,
                _ => (index % 60) as u32,
            };
            let height_cm = if months >= 240 {
                150.0 + (index % 40) as f64
            } else {
                50.0 + f64::from(months.min(120)) * 0.6 + (index % 7) as f64
            };
            let weight_kg = if months >= 240 {
                45.0 + (index % 50) as f64
            } else {
                3.0 + f64::from(months.min(120)) * 0.2 + (index % 5) as f64 * 0.4
            };

            MeasurementInput {
                record_id: Some(format!("bench-{index}")),
                weight_kg,
                height_cm,
                muac_cm: (index % 3 != 0).then(|| 11.0 + (index % 40) as f64 / 10.0),
                birth_date: observed
                    .checked_sub_months(Months::new(months))
                    .unwrap_or(observed),
                sex: if index % 2 == 0 { "male" } else { "female" }.to_owned(),
                observation_date: Some(observed),
                diet_pattern: (index % 11 == 0).then(|| "vegetarian".to_owned()),
                has_allergy: Some(index % 13 == 0),
                allergies: None,
            }
        })
        .collect()
}
