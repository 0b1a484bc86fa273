// ABOUTME: Classification mode, age conversion and plausibility limit configuration
// ABOUTME: Selects nearest-row table lookup or interpolated z-score classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use std::str::FromStr;

use nutriscreen_core::constants::{limits, units};
use nutriscreen_core::errors::ScreeningError;
use serde::{Deserialize, Serialize};

/// How tabulated indicators are classified
///
/// - `Table`: pick the nearest reference row and scan its bands. Fast and
///   exactly reproduces the published lookup charts, but ages/heights between
///   rows are approximated by the closest row.
/// - `ZScore`: interpolate the reference row linearly between its neighbours and
///   compute a z-score against the interpolated median. Categories come from the
///   z-score cut-offs, and the z-score is reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Nearest-row band lookup
    #[default]
    Table,
    /// Interpolated z-score classification
    ZScore,
}

impl ClassificationMode {
    /// Mode name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::ZScore => "zscore",
        }
    }

    /// Mode description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Table => "Table: nearest reference row, band scan (approximates between rows)",
            Self::ZScore => "Z-score: interpolated reference row, z-score cut-offs",
        }
    }
}

impl FromStr for ClassificationMode {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "lookup" => Ok(Self::Table),
            "zscore" | "z_score" | "z-score" => Ok(Self::ZScore),
            other => Err(ScreeningError::invalid_input(
                "classification_mode",
                format!("unknown mode '{other}'. Valid options: table, zscore"),
            )),
        }
    }
}

/// Classifier settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Classification mode for tabulated indicators
    pub mode: ClassificationMode,
}

/// Age conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeConfig {
    /// Average days per month used to convert elapsed days
    pub days_per_month: f64,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            days_per_month: units::AVERAGE_DAYS_PER_MONTH,
        }
    }
}

/// Physiological plausibility limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Maximum plausible weight (kg)
    pub max_weight_kg: f64,
    /// Maximum plausible height or length (cm)
    pub max_height_cm: f64,
    /// Maximum plausible MUAC (cm)
    pub max_muac_cm: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_weight_kg: limits::MAX_WEIGHT_KG,
            max_height_cm: limits::MAX_HEIGHT_CM,
            max_muac_cm: limits::MAX_MUAC_CM,
        }
    }
}
