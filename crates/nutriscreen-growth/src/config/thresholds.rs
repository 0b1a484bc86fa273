// ABOUTME: MUAC and adult/adolescent BMI classification thresholds
// ABOUTME: Threshold bands for ages outside the pediatric reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Classification thresholds that are not table lookups.
//!
//! Each struct holds strictly ascending cut-offs; a value below a cut-off falls
//! into the more severe category.

use nutriscreen_core::constants::thresholds;
use serde::{Deserialize, Serialize};

/// MUAC cut-offs per age group (cm)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuacThresholds {
    /// Child (6-71 months) severe acute malnutrition cut-off
    pub child_severe_cm: f64,
    /// Child (6-71 months) moderate acute malnutrition cut-off
    pub child_moderate_cm: f64,
    /// Adolescent severe cut-off
    pub adolescent_severe_cm: f64,
    /// Adolescent moderate cut-off
    pub adolescent_moderate_cm: f64,
    /// Adult severe cut-off
    pub adult_severe_cm: f64,
    /// Adult moderate cut-off
    pub adult_moderate_cm: f64,
}

impl Default for MuacThresholds {
    fn default() -> Self {
        Self {
            child_severe_cm: thresholds::MUAC_SAM_CM,
            child_moderate_cm: thresholds::MUAC_MAM_CM,
            adolescent_severe_cm: thresholds::MUAC_ADOLESCENT_SEVERE_CM,
            adolescent_moderate_cm: thresholds::MUAC_ADOLESCENT_MODERATE_CM,
            adult_severe_cm: thresholds::MUAC_ADULT_SEVERE_CM,
            adult_moderate_cm: thresholds::MUAC_ADULT_MODERATE_CM,
        }
    }
}

/// BMI cut-offs for adolescents (72-239 months) and adults (240+ months)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Adolescent severe thinness
    pub adolescent_severe: f64,
    /// Adolescent moderate thinness
    pub adolescent_moderate: f64,
    /// Adolescent mild thinness
    pub adolescent_mild: f64,
    /// Adult severe thinness
    pub adult_severe: f64,
    /// Adult moderate thinness
    pub adult_moderate: f64,
    /// Adult overweight
    pub adult_overweight: f64,
    /// Adult obesity
    pub adult_obese: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            adolescent_severe: thresholds::BMI_ADOLESCENT_SEVERE,
            adolescent_moderate: thresholds::BMI_ADOLESCENT_MODERATE,
            adolescent_mild: thresholds::BMI_ADOLESCENT_MILD,
            adult_severe: thresholds::BMI_ADULT_SEVERE,
            adult_moderate: thresholds::BMI_ADULT_MODERATE,
            adult_overweight: thresholds::BMI_ADULT_OVERWEIGHT,
            adult_obese: thresholds::BMI_ADULT_OBESE,
        }
    }
}
