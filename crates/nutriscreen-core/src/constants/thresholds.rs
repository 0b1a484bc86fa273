// ABOUTME: Default MUAC, BMI and risk-score thresholds used by the screening pipeline
// ABOUTME: Published WHO cut-offs plus the screening program's risk point weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

/// Pediatric MUAC below this is severe acute malnutrition (cm)
pub const MUAC_SAM_CM: f64 = 11.5;
/// Pediatric MUAC below this is moderate acute malnutrition (cm)
pub const MUAC_MAM_CM: f64 = 12.5;
/// Adolescent MUAC severe cut-off (cm)
pub const MUAC_ADOLESCENT_SEVERE_CM: f64 = 16.0;
/// Adolescent MUAC moderate cut-off (cm)
pub const MUAC_ADOLESCENT_MODERATE_CM: f64 = 18.5;
/// Adult MUAC severe cut-off (cm)
pub const MUAC_ADULT_SEVERE_CM: f64 = 18.5;
/// Adult MUAC moderate cut-off (cm)
pub const MUAC_ADULT_MODERATE_CM: f64 = 21.0;

/// Adolescent BMI severe thinness cut-off
pub const BMI_ADOLESCENT_SEVERE: f64 = 15.0;
/// Adolescent BMI moderate thinness cut-off
pub const BMI_ADOLESCENT_MODERATE: f64 = 17.0;
/// Adolescent BMI mild thinness cut-off
pub const BMI_ADOLESCENT_MILD: f64 = 18.5;
/// Adult BMI severe thinness cut-off
pub const BMI_ADULT_SEVERE: f64 = 16.5;
/// Adult BMI moderate thinness / underweight cut-off
pub const BMI_ADULT_MODERATE: f64 = 18.5;
/// Adult BMI overweight cut-off
pub const BMI_ADULT_OVERWEIGHT: f64 = 25.0;
/// Adult BMI obesity cut-off
pub const BMI_ADULT_OBESE: f64 = 30.0;

/// Weight (kg) to height (m) ratio below which the MUAC fallback scores severe
pub const WEIGHT_HEIGHT_RATIO_SEVERE: f64 = 0.8;
/// Weight (kg) to height (m) ratio below which the MUAC fallback scores moderate
pub const WEIGHT_HEIGHT_RATIO_MODERATE: f64 = 0.9;

/// Risk points for a severe primary indicator
pub const RISK_POINTS_SEVERE: u8 = 40;
/// Risk points for a moderate adolescent BMI
pub const RISK_POINTS_ADOLESCENT_MODERATE: u8 = 30;
/// Risk points for a moderate MUAC or adult BMI
pub const RISK_POINTS_MODERATE: u8 = 25;
/// Risk points for a mild adolescent BMI
pub const RISK_POINTS_MILD: u8 = 20;
/// Modifier points for a declared food allergy
pub const RISK_POINTS_ALLERGY: u8 = 5;
/// Modifier points for a vegan or vegetarian diet
pub const RISK_POINTS_RESTRICTED_DIET: u8 = 3;
/// Upper bound of the risk score
pub const RISK_SCORE_MAX: u8 = 100;

/// Score at or above which the risk band is severe
pub const RISK_BAND_SEVERE: u8 = 75;
/// Score at or above which the risk band is high
pub const RISK_BAND_HIGH: u8 = 50;
/// Score at or above which the risk band is moderate
pub const RISK_BAND_MODERATE: u8 = 25;
/// BMI below which a high score raises a critical alert
pub const ALERT_BMI: f64 = 16.0;
