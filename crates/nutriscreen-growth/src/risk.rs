// ABOUTME: Risk score aggregation from the primary indicator and additive modifiers
// ABOUTME: Produces a bounded 0-100 score with its basis, band and critical alert flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Risk Score Aggregator
//!
//! The primary indicator depends on age, checked in priority order:
//!
//! 1. 6-59 months: MUAC tiers, or the weight (kg) / height (m) ratio when MUAC
//!    was not measured (flagged as an approximation)
//! 2. under 240 months: child/adolescent BMI tiers
//! 3. adults: adult BMI tiers
//!
//! Allergy and diet modifiers are added independently of the primary path and
//! the total is clamped to 0-100. No reference table is consulted; every cut-off
//! comes from the named policies in `config::risk`.

use std::fmt;

use nutriscreen_core::constants::thresholds::RISK_SCORE_MAX;
use nutriscreen_core::models::Measurement;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::AgeMonths;
use crate::config::risk::tier_points;
use crate::config::{RiskBandPolicy, RiskPolicies};

/// Which measurement drove the base score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskBasis {
    /// MUAC reading (6-59 months)
    Muac,
    /// Weight/height ratio standing in for a missing MUAC
    WeightHeightRatio,
    /// Child/adolescent BMI tiers
    AdolescentBmi,
    /// Adult BMI tiers
    AdultBmi,
}

impl RiskBasis {
    /// Basis name for logging and output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Muac => "muac",
            Self::WeightHeightRatio => "weight_height_ratio",
            Self::AdolescentBmi => "adolescent_bmi",
            Self::AdultBmi => "adult_bmi",
        }
    }
}

/// Coarse band of a risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// Below the moderate threshold
    Low,
    /// Moderate risk
    Moderate,
    /// High risk
    High,
    /// Severe risk
    Severe,
}

impl RiskBand {
    /// Band for a score under the given policy
    #[must_use]
    pub const fn from_score(score: u8, policy: &RiskBandPolicy) -> Self {
        if score >= policy.severe_score {
            Self::Severe
        } else if score >= policy.high_score {
            Self::High
        } else if score >= policy.moderate_score {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Band name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable risk score computed from one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Final score, 0-100
    pub value: u8,
    /// Primary indicator used
    pub basis: RiskBasis,
    /// Points from the primary indicator
    pub base_points: u8,
    /// Points from allergy and diet modifiers
    pub modifier_points: u8,
    /// True when the weight/height ratio replaced MUAC
    pub approximated: bool,
    /// Score band
    pub band: RiskBand,
    /// Needs immediate attention
    pub critical_alert: bool,
}

impl RiskScore {
    /// Notice describing an approximated basis
    #[must_use]
    pub fn approximation_notice(&self) -> Option<String> {
        self.approximated.then(|| {
            "MUAC not measured; risk score uses the weight/height ratio fallback".to_owned()
        })
    }
}

/// Computes risk scores from named policies
#[derive(Debug, Clone, Default)]
pub struct RiskScoreAggregator {
    policies: RiskPolicies,
}

impl RiskScoreAggregator {
    /// Create an aggregator
    #[must_use]
    pub const fn new(policies: RiskPolicies) -> Self {
        Self { policies }
    }

    /// Compute the risk score for a measurement at the given age
    #[must_use]
    pub fn aggregate(&self, measurement: &Measurement, age: AgeMonths) -> RiskScore {
        let (basis, base_points) = self.base_score(measurement, age);
        let modifier_points = self.modifier_points(measurement);
        let total = u16::from(base_points) + u16::from(modifier_points);
        let value = u8::try_from(total.min(u16::from(RISK_SCORE_MAX))).unwrap_or(RISK_SCORE_MAX);

        let bands = &self.policies.bands;
        let band = RiskBand::from_score(value, bands);
        let critical_alert = value >= bands.severe_score
            || (value >= bands.high_score
                && (measurement
                    .muac()
                    .is_some_and(|muac| muac < bands.alert_muac_cm)
                    || measurement.bmi() < bands.alert_bmi));

        debug!(
            basis = basis.name(),
            base_points,
            modifier_points,
            value,
            band = band.as_str(),
            critical_alert,
            "Risk score aggregated"
        );

        RiskScore {
            value,
            basis,
            base_points,
            modifier_points,
            approximated: basis == RiskBasis::WeightHeightRatio,
            band,
            critical_alert,
        }
    }

    fn base_score(&self, measurement: &Measurement, age: AgeMonths) -> (RiskBasis, u8) {
        let muac_policy = &self.policies.muac;
        let months = age.months();

        if (muac_policy.min_age_months..=muac_policy.max_age_months).contains(&months) {
            return measurement.muac().map_or_else(
                || {
                    let ratio = measurement.weight_kg / measurement.height_m();
                    (
                        RiskBasis::WeightHeightRatio,
                        tier_points(&muac_policy.fallback_ratio_tiers, ratio),
                    )
                },
                |muac| (RiskBasis::Muac, tier_points(&muac_policy.muac_tiers, muac)),
            );
        }

        let bmi = measurement.bmi();
        if months < self.policies.adolescent_bmi.adult_min_age_months {
            (
                RiskBasis::AdolescentBmi,
                tier_points(&self.policies.adolescent_bmi.tiers, bmi),
            )
        } else {
            (
                RiskBasis::AdultBmi,
                tier_points(&self.policies.adult_bmi.tiers, bmi),
            )
        }
    }

    fn modifier_points(&self, measurement: &Measurement) -> u8 {
        let modifiers = &self.policies.modifiers;
        let allergy = if measurement.declares_food_allergy() {
            modifiers.allergy_points
        } else {
            0
        };
        let diet = if measurement.follows_restricted_diet() {
            modifiers.restricted_diet_points
        } else {
            0
        };
        allergy.saturating_add(diet)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Months, NaiveDate};
    use nutriscreen_core::models::{DietPattern, Sex};

    use super::*;

    fn measurement(weight_kg: f64, height_cm: f64, months_old: u32) -> (Measurement, AgeMonths) {
        let observed = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let born = observed
            .checked_sub_months(Months::new(months_old))
            .unwrap();
        (
            Measurement::new(weight_kg, height_cm, born, observed, Sex::Female),
            AgeMonths::new(months_old),
        )
    }

    #[test]
    fn test_muac_severe_without_modifiers() {
        let aggregator = RiskScoreAggregator::default();
        let (record, age) = measurement(10.0, 85.0, 30);
        let score = aggregator.aggregate(&record.with_muac(11.0), age);
        assert_eq!(score.value, 40);
        assert_eq!(score.basis, RiskBasis::Muac);
        assert!(!score.approximated);
        assert_eq!(score.band, RiskBand::Moderate);
    }

    #[test]
    fn test_muac_fallback_is_flagged() {
        let aggregator = RiskScoreAggregator::default();
        // 7.5 kg / 0.9 m = 8.3, far above the ratio tiers
        let (record, age) = measurement(7.5, 90.0, 30);
        let score = aggregator.aggregate(&record, age);
        assert_eq!(score.basis, RiskBasis::WeightHeightRatio);
        assert!(score.approximated);
        assert!(score.approximation_notice().is_some());
        assert_eq!(score.base_points, 0);
    }

    #[test]
    fn test_zero_muac_counts_as_missing() {
        let aggregator = RiskScoreAggregator::default();
        let (record, age) = measurement(10.0, 85.0, 30);
        let score = aggregator.aggregate(&record.with_muac(0.0), age);
        assert_eq!(score.basis, RiskBasis::WeightHeightRatio);
    }

    #[test]
    fn test_adult_bmi_with_vegan_modifier() {
        let aggregator = RiskScoreAggregator::default();
        // 68 kg at 2.00 m gives BMI 17.0
        let (record, age) = measurement(68.0, 200.0, 300);
        let score = aggregator.aggregate(&record.with_diet(DietPattern::Vegan), age);
        assert_eq!(score.basis, RiskBasis::AdultBmi);
        assert_eq!(score.base_points, 25);
        assert_eq!(score.modifier_points, 3);
        assert_eq!(score.value, 28);
    }

    #[test]
    fn test_adolescent_bmi_tiers_outside_muac_window() {
        let aggregator = RiskScoreAggregator::default();
        // 60 months is past the MUAC window: BMI 14.0 scores 40
        let (record, age) = measurement(14.0, 100.0, 60);
        let score = aggregator.aggregate(&record.with_muac(11.0), age);
        assert_eq!(score.basis, RiskBasis::AdolescentBmi);
        assert_eq!(score.base_points, 40);
    }

    #[test]
    fn test_allergy_text_none_is_ignored() {
        let aggregator = RiskScoreAggregator::default();
        let (record, age) = measurement(68.0, 200.0, 300);
        let none = aggregator.aggregate(&record.clone().with_allergies("None"), age);
        assert_eq!(none.modifier_points, 0);
        let peanuts = aggregator.aggregate(&record.with_allergies("peanuts"), age);
        assert_eq!(peanuts.modifier_points, 5);
    }

    #[test]
    fn test_critical_alert_rules() {
        let mut policies = RiskPolicies::default();
        policies.modifiers.allergy_points = 20;
        let aggregator = RiskScoreAggregator::new(policies);

        // 40 + 20 = 60 (high) with MUAC below 11.5 cm
        let (record, age) = measurement(10.0, 85.0, 30);
        let score = aggregator.aggregate(&record.with_muac(11.0).with_allergy_flag(true), age);
        assert_eq!(score.value, 60);
        assert_eq!(score.band, RiskBand::High);
        assert!(score.critical_alert);

        // 25 + 20 = 45 stays below the high band
        let (record, age) = measurement(10.0, 85.0, 30);
        let score = aggregator.aggregate(&record.with_muac(12.0).with_allergy_flag(true), age);
        assert_eq!(score.band, RiskBand::Moderate);
        assert!(!score.critical_alert);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        let mut policies = RiskPolicies::default();
        policies.modifiers.allergy_points = 90;
        policies.modifiers.restricted_diet_points = 90;
        let aggregator = RiskScoreAggregator::new(policies);
        let (record, age) = measurement(68.0, 200.0, 300);
        let score = aggregator.aggregate(
            &record
                .with_diet(DietPattern::Vegetarian)
                .with_allergy_flag(true),
            age,
        );
        assert_eq!(score.value, 100);
        assert_eq!(score.band, RiskBand::Severe);
        assert!(score.critical_alert);
    }
}
