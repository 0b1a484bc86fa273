// ABOUTME: Named risk-score policies for the primary indicator and auxiliary modifiers
// ABOUTME: Kept apart from classifier thresholds because the two sets intentionally differ
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Risk Score Policies
//!
//! The risk score uses its own cut-offs. Several of them deliberately differ from
//! the classifier thresholds (for example the adolescent BMI tiers score 30 points
//! at BMI < 17 although the classifier only calls that moderate thinness), so each
//! policy is a separately named struct instead of reusing `BmiThresholds`.

use nutriscreen_core::constants::{age, thresholds};
use serde::{Deserialize, Serialize};

/// One "value below cut-off scores N points" tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskTier {
    /// Values strictly below this score the tier's points
    pub below: f64,
    /// Points awarded
    pub points: u8,
}

impl RiskTier {
    /// Create a tier
    #[must_use]
    pub const fn new(below: f64, points: u8) -> Self {
        Self { below, points }
    }
}

/// Points for the first matching tier; tiers are ordered most severe first
#[must_use]
pub fn tier_points(tiers: &[RiskTier], value: f64) -> u8 {
    tiers
        .iter()
        .find(|tier| value < tier.below)
        .map_or(0, |tier| tier.points)
}

/// MUAC-based scoring for ages 6-59 months
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuacRiskPolicy {
    /// First month of the MUAC window
    pub min_age_months: u32,
    /// Last month of the MUAC window
    pub max_age_months: u32,
    /// MUAC tiers (cm)
    pub muac_tiers: Vec<RiskTier>,
    /// Weight (kg) / height (m) tiers used when MUAC is absent
    pub fallback_ratio_tiers: Vec<RiskTier>,
}

impl Default for MuacRiskPolicy {
    fn default() -> Self {
        Self {
            min_age_months: age::MUAC_MIN_MONTHS,
            max_age_months: age::MUAC_RISK_MAX_MONTHS,
            muac_tiers: vec![
                RiskTier::new(thresholds::MUAC_SAM_CM, thresholds::RISK_POINTS_SEVERE),
                RiskTier::new(thresholds::MUAC_MAM_CM, thresholds::RISK_POINTS_MODERATE),
            ],
            fallback_ratio_tiers: vec![
                RiskTier::new(
                    thresholds::WEIGHT_HEIGHT_RATIO_SEVERE,
                    thresholds::RISK_POINTS_SEVERE,
                ),
                RiskTier::new(
                    thresholds::WEIGHT_HEIGHT_RATIO_MODERATE,
                    thresholds::RISK_POINTS_MODERATE,
                ),
            ],
        }
    }
}

/// BMI scoring for everyone under the adult age outside the MUAC window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdolescentBmiRiskPolicy {
    /// First month scored with the adult policy
    pub adult_min_age_months: u32,
    /// BMI tiers
    pub tiers: Vec<RiskTier>,
}

impl Default for AdolescentBmiRiskPolicy {
    fn default() -> Self {
        Self {
            adult_min_age_months: age::ADULT_MIN_MONTHS,
            tiers: vec![
                RiskTier::new(
                    thresholds::BMI_ADOLESCENT_SEVERE,
                    thresholds::RISK_POINTS_SEVERE,
                ),
                RiskTier::new(
                    thresholds::BMI_ADOLESCENT_MODERATE,
                    thresholds::RISK_POINTS_ADOLESCENT_MODERATE,
                ),
                RiskTier::new(thresholds::BMI_ADOLESCENT_MILD, thresholds::RISK_POINTS_MILD),
            ],
        }
    }
}

/// BMI scoring for adults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdultBmiRiskPolicy {
    /// BMI tiers
    pub tiers: Vec<RiskTier>,
}

impl Default for AdultBmiRiskPolicy {
    fn default() -> Self {
        Self {
            tiers: vec![
                RiskTier::new(thresholds::BMI_ADULT_SEVERE, thresholds::RISK_POINTS_SEVERE),
                RiskTier::new(
                    thresholds::BMI_ADULT_MODERATE,
                    thresholds::RISK_POINTS_MODERATE,
                ),
            ],
        }
    }
}

/// Additive modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierPolicy {
    /// Points for a declared food allergy
    pub allergy_points: u8,
    /// Points for a vegan or vegetarian diet
    pub restricted_diet_points: u8,
}

impl Default for ModifierPolicy {
    fn default() -> Self {
        Self {
            allergy_points: thresholds::RISK_POINTS_ALLERGY,
            restricted_diet_points: thresholds::RISK_POINTS_RESTRICTED_DIET,
        }
    }
}

/// Score banding and critical alert rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBandPolicy {
    /// Minimum score of the severe band
    pub severe_score: u8,
    /// Minimum score of the high band
    pub high_score: u8,
    /// Minimum score of the moderate band
    pub moderate_score: u8,
    /// MUAC below which a high score becomes a critical alert (cm)
    pub alert_muac_cm: f64,
    /// BMI below which a high score becomes a critical alert
    pub alert_bmi: f64,
}

impl Default for RiskBandPolicy {
    fn default() -> Self {
        Self {
            severe_score: thresholds::RISK_BAND_SEVERE,
            high_score: thresholds::RISK_BAND_HIGH,
            moderate_score: thresholds::RISK_BAND_MODERATE,
            alert_muac_cm: thresholds::MUAC_SAM_CM,
            alert_bmi: thresholds::ALERT_BMI,
        }
    }
}

/// All risk policies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskPolicies {
    /// MUAC window policy
    pub muac: MuacRiskPolicy,
    /// Child/adolescent BMI policy
    pub adolescent_bmi: AdolescentBmiRiskPolicy,
    /// Adult BMI policy
    pub adult_bmi: AdultBmiRiskPolicy,
    /// Diet and allergy modifiers
    pub modifiers: ModifierPolicy,
    /// Banding and alerts
    pub bands: RiskBandPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_points_uses_first_matching_tier() {
        let tiers = AdolescentBmiRiskPolicy::default().tiers;
        assert_eq!(tier_points(&tiers, 14.9), 40);
        assert_eq!(tier_points(&tiers, 15.0), 30);
        assert_eq!(tier_points(&tiers, 18.4), 20);
        assert_eq!(tier_points(&tiers, 18.5), 0);
    }
}
