// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, age boundaries, plausibility limits and screening thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Thresholds that operators may tune are mirrored as defaults in the growth crate's
//! `ScreeningConfig`; the values here are the published WHO/program defaults.

/// Default screening thresholds (MUAC, BMI, risk points)
pub mod thresholds;

/// Unit conversion constants
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Average days per month used to convert elapsed days to months
    pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;
    /// Months per year
    pub const MONTHS_PER_YEAR: u32 = 12;
}

/// Age boundaries in completed months
pub mod age {
    /// Last month covered by the pediatric age-indexed tables
    pub const PEDIATRIC_MAX_MONTHS: u32 = 71;
    /// First month handled by the adult/adolescent classifier
    pub const ADOLESCENT_MIN_MONTHS: u32 = 72;
    /// First month treated as adult
    pub const ADULT_MIN_MONTHS: u32 = 240;
    /// First month where pediatric MUAC cut-offs apply
    pub const MUAC_MIN_MONTHS: u32 = 6;
    /// Last month of the MUAC-based risk window
    pub const MUAC_RISK_MAX_MONTHS: u32 = 59;
}

/// Physiological plausibility limits applied by the validation gate
pub mod limits {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 200.0;
    /// Maximum plausible height or length (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Maximum plausible mid-upper arm circumference (cm)
    pub const MAX_MUAC_CM: f64 = 60.0;
}

/// Reference data identification
pub mod reference {
    /// Version tag of the bundled growth reference tables
    pub const TABLE_VERSION: &str = "WHO-2006";
}
