// ABOUTME: Screening configuration with environment overrides and validation
// ABOUTME: Orchestrates classification, threshold and risk policy configs behind a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Screening Configuration Module
//!
//! Configuration is environment-only: defaults, then `NUTRISCREEN_*` overrides,
//! then validation. `ScreeningConfig::global()` caches a validated instance for
//! the process and falls back to defaults (with a warning) when the environment
//! holds invalid values.
//!
//! # Module Structure
//!
//! - `classification` - Classification mode, age conversion, plausibility limits
//! - `thresholds` - MUAC and adult/adolescent BMI cut-offs
//! - `risk` - Risk score policies and banding
//! - `error` - Configuration errors

pub mod classification;
pub mod error;
pub mod risk;
pub mod thresholds;

pub use classification::{AgeConfig, ClassificationConfig, ClassificationMode, ValidationLimits};
pub use error::ConfigError;
pub use risk::{
    AdolescentBmiRiskPolicy, AdultBmiRiskPolicy, ModifierPolicy, MuacRiskPolicy, RiskBandPolicy,
    RiskPolicies, RiskTier,
};
pub use thresholds::{BmiThresholds, MuacThresholds};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use nutriscreen_core::constants::thresholds::RISK_SCORE_MAX;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Global configuration singleton
static SCREENING_CONFIG: OnceLock<ScreeningConfig> = OnceLock::new();

/// Main screening configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Classification mode for tabulated indicators
    pub classification: ClassificationConfig,
    /// Age conversion
    pub age: AgeConfig,
    /// Plausibility limits for the validation gate
    pub validation: ValidationLimits,
    /// MUAC classification cut-offs
    pub muac: MuacThresholds,
    /// Adult/adolescent BMI classification cut-offs
    pub bmi: BmiThresholds,
    /// Risk score policies
    pub risk: RiskPolicies,
}

impl ScreeningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCREENING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load screening config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            mode = config.classification.mode.name(),
            days_per_month = config.age.days_per_month,
            "Screening configuration loaded"
        );
        Ok(config)
    }

    /// Return a copy using the given classification mode
    #[must_use]
    pub fn with_mode(mut self, mode: ClassificationMode) -> Self {
        self.classification.mode = mode;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when thresholds are out of order or values are outside valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(28.0..=31.5).contains(&self.age.days_per_month) {
            return Err(ConfigError::ValueOutOfRange(
                "days_per_month must be between 28 and 31.5",
            ));
        }

        let limits = &self.validation;
        if [limits.max_weight_kg, limits.max_height_cm, limits.max_muac_cm]
            .iter()
            .any(|limit| !limit.is_finite() || *limit <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "plausibility limits must be positive and finite",
            ));
        }

        let muac = &self.muac;
        if muac.child_severe_cm >= muac.child_moderate_cm
            || muac.adolescent_severe_cm >= muac.adolescent_moderate_cm
            || muac.adult_severe_cm >= muac.adult_moderate_cm
        {
            return Err(ConfigError::InvalidRange(
                "MUAC severe cut-offs must be < moderate cut-offs",
            ));
        }

        let bmi = &self.bmi;
        if !is_strictly_ascending(&[
            bmi.adolescent_severe,
            bmi.adolescent_moderate,
            bmi.adolescent_mild,
        ]) {
            return Err(ConfigError::InvalidRange(
                "adolescent BMI cut-offs must be ascending (severe < moderate < mild)",
            ));
        }
        if !is_strictly_ascending(&[
            bmi.adult_severe,
            bmi.adult_moderate,
            bmi.adult_overweight,
            bmi.adult_obese,
        ]) {
            return Err(ConfigError::InvalidRange(
                "adult BMI cut-offs must be ascending (severe < moderate < overweight < obese)",
            ));
        }

        self.validate_risk()
    }

    fn validate_risk(&self) -> Result<(), ConfigError> {
        let risk = &self.risk;
        if risk.muac.min_age_months > risk.muac.max_age_months {
            return Err(ConfigError::InvalidRange(
                "MUAC risk window: min_age_months must be <= max_age_months",
            ));
        }

        for tiers in [
            &risk.muac.muac_tiers,
            &risk.muac.fallback_ratio_tiers,
            &risk.adolescent_bmi.tiers,
            &risk.adult_bmi.tiers,
        ] {
            let cut_offs: Vec<f64> = tiers.iter().map(|tier| tier.below).collect();
            if !is_strictly_ascending(&cut_offs) {
                return Err(ConfigError::InvalidRange(
                    "risk tiers must be ordered most severe first with ascending cut-offs",
                ));
            }
            if tiers.iter().any(|tier| tier.points > RISK_SCORE_MAX) {
                return Err(ConfigError::ValueOutOfRange(
                    "risk tier points must be <= 100",
                ));
            }
        }

        let bands = &risk.bands;
        if bands.moderate_score >= bands.high_score
            || bands.high_score >= bands.severe_score
            || bands.severe_score > RISK_SCORE_MAX
        {
            return Err(ConfigError::InvalidRange(
                "risk bands must satisfy moderate < high < severe <= 100",
            ));
        }

        Ok(())
    }

    /// Apply a single environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRISCREEN_CLASSIFICATION_MODE",
            &mut self.classification.mode,
        )?;
        Self::apply_env_var("NUTRISCREEN_DAYS_PER_MONTH", &mut self.age.days_per_month)?;

        // Plausibility limits
        Self::apply_env_var(
            "NUTRISCREEN_MAX_WEIGHT_KG",
            &mut self.validation.max_weight_kg,
        )?;
        Self::apply_env_var(
            "NUTRISCREEN_MAX_HEIGHT_CM",
            &mut self.validation.max_height_cm,
        )?;
        Self::apply_env_var("NUTRISCREEN_MAX_MUAC_CM", &mut self.validation.max_muac_cm)?;

        // Pediatric MUAC classification cut-offs
        Self::apply_env_var("NUTRISCREEN_MUAC_SEVERE_CM", &mut self.muac.child_severe_cm)?;
        Self::apply_env_var(
            "NUTRISCREEN_MUAC_MODERATE_CM",
            &mut self.muac.child_moderate_cm,
        )?;

        // Risk modifiers and bands
        Self::apply_env_var(
            "NUTRISCREEN_ALLERGY_POINTS",
            &mut self.risk.modifiers.allergy_points,
        )?;
        Self::apply_env_var(
            "NUTRISCREEN_RESTRICTED_DIET_POINTS",
            &mut self.risk.modifiers.restricted_diet_points,
        )?;
        Self::apply_env_var(
            "NUTRISCREEN_SEVERE_RISK_SCORE",
            &mut self.risk.bands.severe_score,
        )?;
        Self::apply_env_var(
            "NUTRISCREEN_HIGH_RISK_SCORE",
            &mut self.risk.bands.high_score,
        )?;
        Self::apply_env_var(
            "NUTRISCREEN_MODERATE_RISK_SCORE",
            &mut self.risk.bands.moderate_score,
        )?;

        Ok(self)
    }
}

fn is_strictly_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
