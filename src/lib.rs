// ABOUTME: Main library entry point for the NutriScreen malnutrition screening engine
// ABOUTME: Wires growth-standard classification, risk scoring, batch I/O and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

#![deny(unsafe_code)]

//! # NutriScreen
//!
//! Child growth and malnutrition screening against the WHO 2006 growth
//! standards. A screening takes one anthropometric measurement and produces:
//!
//! - **Indicator classifications**: weight-for-age, height-for-age,
//!   weight-for-height, BMI-for-age and MUAC, each either classified or
//!   reported as out of its reference domain
//! - **Risk score**: a 0-100 malnutrition risk score with band and critical alert
//! - **Assessment**: overall nutritional risk, risk factors and recommendations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use nutriscreen::engine::ScreeningEngine;
//! use nutriscreen::models::{Measurement, Sex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let birth = NaiveDate::from_ymd_opt(2022, 3, 15).ok_or("date")?;
//! let observed = NaiveDate::from_ymd_opt(2024, 3, 15).ok_or("date")?;
//! let measurement = Measurement::new(12.2, 87.1, birth, observed, Sex::Male);
//!
//! let report = ScreeningEngine::global().screen(&measurement)?;
//! println!("risk score {} ({})", report.risk_score, report.risk_band);
//! # Ok(())
//! # }
//! ```

/// JSON-lines batch screening
pub mod batch;

/// Screening pipeline
pub mod engine;

/// Logging configuration and structured screening events
pub mod logging;

/// Input and report wire types
pub mod report;

pub use nutriscreen_core::{constants, errors, models};
pub use nutriscreen_growth as growth;

pub use engine::{BatchOutcome, BatchSummary, ScreeningEngine};
pub use report::{IndicatorReport, MeasurementInput, ScreeningReport};
