// ABOUTME: Overall nutritional risk level, risk factors and recommendations
// ABOUTME: Derived from the severities of the successfully classified indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use std::fmt;

use nutriscreen_core::models::{Category, ClassificationResult, Indicator, Severity};
use serde::{Deserialize, Serialize};

/// Overall nutritional risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionalRisk {
    /// No indicator outside the healthy range
    Low,
    /// At least one moderate, mild or excess indicator
    Moderate,
    /// At least one severe indicator
    Severe,
}

impl NutritionalRisk {
    /// Level name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for NutritionalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assessment summarizing all classified indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalAssessment {
    /// Overall risk level
    pub risk: NutritionalRisk,
    /// Findings that raised the risk level
    pub risk_factors: Vec<String>,
    /// Follow-up actions
    pub recommendations: Vec<String>,
}

impl NutritionalAssessment {
    /// Assess the successful classifications of one screening
    #[must_use]
    pub fn assess<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ClassificationResult>,
    {
        let results: Vec<&ClassificationResult> = results.into_iter().collect();
        let severities: Vec<Severity> = results.iter().map(|result| result.severity()).collect();

        let has_severe = severities.contains(&Severity::Severe);
        let has_under = severities
            .iter()
            .any(|severity| matches!(severity, Severity::Moderate | Severity::Mild));
        let has_excess = severities.contains(&Severity::Excess);

        let risk = if has_severe {
            NutritionalRisk::Severe
        } else if has_under || has_excess {
            NutritionalRisk::Moderate
        } else {
            NutritionalRisk::Low
        };

        let mut risk_factors = Vec::new();
        if has_severe {
            risk_factors.push("Severe malnutrition detected".to_owned());
        }
        if has_under {
            risk_factors.push("Underweight indicators present".to_owned());
        }
        if has_excess {
            risk_factors.push("Overweight indicators present".to_owned());
        }

        Self {
            risk,
            risk_factors,
            recommendations: recommendations(risk, &results),
        }
    }
}

fn recommendations(risk: NutritionalRisk, results: &[&ClassificationResult]) -> Vec<String> {
    let tiered: &[&str] = match risk {
        NutritionalRisk::Severe => &[
            "Immediate medical attention required",
            "Refer to pediatric nutritionist",
            "Consider hospitalization for severe malnutrition",
        ],
        NutritionalRisk::Moderate => &[
            "Schedule follow-up within 2 weeks",
            "Provide nutritional counseling",
            "Monitor growth closely",
        ],
        NutritionalRisk::Low => &[
            "Continue regular monitoring",
            "Maintain healthy diet and lifestyle",
        ],
    };

    let category_of = |indicator: Indicator| {
        results
            .iter()
            .find(|result| result.indicator == indicator)
            .map(|result| result.category)
    };

    let mut advice: Vec<String> = tiered.iter().map(|line| (*line).to_owned()).collect();
    if category_of(Indicator::WeightForAge) == Some(Category::Underweight) {
        advice.push("Focus on weight gain strategies".to_owned());
    }
    if category_of(Indicator::HeightForAge) == Some(Category::Stunted) {
        advice.push("Address stunting concerns".to_owned());
    }
    if category_of(Indicator::BmiForAge) == Some(Category::Overweight) {
        advice.push("Implement healthy weight management".to_owned());
    }
    advice
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn result(indicator: Indicator, category: Category) -> ClassificationResult {
        ClassificationResult::new(indicator, category, 24.0, false)
    }

    #[test]
    fn test_all_normal_is_low_risk() {
        let results = [
            result(Indicator::WeightForAge, Category::Normal),
            result(Indicator::HeightForAge, Category::Tall),
        ];
        let assessment = NutritionalAssessment::assess(&results);
        assert_eq!(assessment.risk, NutritionalRisk::Low);
        assert!(assessment.risk_factors.is_empty());
        assert_eq!(
            assessment.recommendations,
            vec![
                "Continue regular monitoring".to_owned(),
                "Maintain healthy diet and lifestyle".to_owned()
            ]
        );
    }

    #[test]
    fn test_any_severe_indicator_is_severe() {
        let results = [
            result(Indicator::WeightForAge, Category::Underweight),
            result(Indicator::WeightForHeight, Category::SeverelyWasted),
        ];
        let assessment = NutritionalAssessment::assess(&results);
        assert_eq!(assessment.risk, NutritionalRisk::Severe);
        assert_eq!(
            assessment.risk_factors,
            vec![
                "Severe malnutrition detected".to_owned(),
                "Underweight indicators present".to_owned()
            ]
        );
        assert_eq!(assessment.recommendations.len(), 4);
        assert_eq!(
            assessment.recommendations.last().map(String::as_str),
            Some("Focus on weight gain strategies")
        );
    }

    #[test]
    fn test_overweight_is_moderate_with_weight_management() {
        let results = [result(Indicator::BmiForAge, Category::Overweight)];
        let assessment = NutritionalAssessment::assess(&results);
        assert_eq!(assessment.risk, NutritionalRisk::Moderate);
        assert_eq!(
            assessment.risk_factors,
            vec!["Overweight indicators present".to_owned()]
        );
        assert!(assessment
            .recommendations
            .contains(&"Implement healthy weight management".to_owned()));
    }

    #[test]
    fn test_stunting_advice() {
        let results = [result(Indicator::HeightForAge, Category::Stunted)];
        let assessment = NutritionalAssessment::assess(&results);
        assert!(assessment
            .recommendations
            .contains(&"Address stunting concerns".to_owned()));
    }
}
