// ABOUTME: Growth indicators, classification categories and per-indicator results
// ABOUTME: Category severity drives risk assessment without string matching on labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScreeningError;

/// Growth indicator evaluated by the screening engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Weight indexed by age in months
    WeightForAge,
    /// Height or length indexed by age in months
    HeightForAge,
    /// Weight indexed by height or length in centimeters
    WeightForHeight,
    /// Body mass index indexed by age in months
    BmiForAge,
    /// Mid-upper arm circumference, age-banded cut-offs
    Muac,
}

impl Indicator {
    /// All indicators in report order
    pub const ALL: [Self; 5] = [
        Self::WeightForAge,
        Self::HeightForAge,
        Self::WeightForHeight,
        Self::BmiForAge,
        Self::Muac,
    ];

    /// Indicators backed by reference tables
    pub const TABULATED: [Self; 4] = [
        Self::WeightForAge,
        Self::HeightForAge,
        Self::WeightForHeight,
        Self::BmiForAge,
    ];

    /// Machine name used in serialized output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WeightForAge => "weight_for_age",
            Self::HeightForAge => "height_for_age",
            Self::WeightForHeight => "weight_for_height",
            Self::BmiForAge => "bmi_for_age",
            Self::Muac => "muac",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightForAge => "Weight-for-Age",
            Self::HeightForAge => "Height-for-Age",
            Self::WeightForHeight => "Weight-for-Height",
            Self::BmiForAge => "BMI-for-Age",
            Self::Muac => "MUAC",
        }
    }

    /// Unit of the lookup index
    #[must_use]
    pub const fn index_unit(&self) -> &'static str {
        match self {
            Self::WeightForHeight => "cm",
            Self::WeightForAge | Self::HeightForAge | Self::BmiForAge | Self::Muac => "months",
        }
    }

    /// Whether the lookup index is age rather than height
    #[must_use]
    pub const fn is_age_indexed(&self) -> bool {
        !matches!(self, Self::WeightForHeight)
    }

    /// Ordered categories of the pediatric reference table, lowest band first
    #[must_use]
    pub const fn table_categories(&self) -> &'static [Category] {
        match self {
            Self::WeightForAge => &[
                Category::SeverelyUnderweight,
                Category::Underweight,
                Category::Normal,
                Category::Overweight,
            ],
            Self::HeightForAge => &[
                Category::SeverelyStunted,
                Category::Stunted,
                Category::Normal,
                Category::Tall,
            ],
            Self::WeightForHeight => &[
                Category::SeverelyWasted,
                Category::Wasted,
                Category::Normal,
                Category::Overweight,
                Category::Obese,
            ],
            Self::BmiForAge => &[
                Category::SeverelyUnderweight,
                Category::Underweight,
                Category::Normal,
                Category::Overweight,
                Category::Obese,
            ],
            Self::Muac => &[
                Category::SevereAcuteMalnutrition,
                Category::ModerateAcuteMalnutrition,
                Category::Normal,
            ],
        }
    }

    /// Z-score lower bound of each non-first table category
    #[must_use]
    pub const fn category_z_bounds(&self) -> &'static [f64] {
        match self {
            Self::WeightForAge | Self::HeightForAge => &[-3.0, -2.0, 2.0],
            Self::WeightForHeight => &[-3.0, -2.0, 2.0, 3.0],
            Self::BmiForAge => &[-3.0, -2.0, 1.0, 2.0],
            Self::Muac => &[],
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indicator {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_for_age" | "wfa" => Ok(Self::WeightForAge),
            "height_for_age" | "length_for_age" | "hfa" | "lfa" => Ok(Self::HeightForAge),
            "weight_for_height" | "weight_for_length" | "wfh" | "wfl" => {
                Ok(Self::WeightForHeight)
            }
            "bmi_for_age" | "bfa" | "bmi" => Ok(Self::BmiForAge),
            "muac" => Ok(Self::Muac),
            other => Err(ScreeningError::invalid_input(
                "indicator",
                format!(
                    "unknown indicator '{other}'. Valid options: weight_for_age, height_for_age, weight_for_height, bmi_for_age, muac"
                ),
            )),
        }
    }
}

/// How far a category departs from the healthy range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Within the healthy range
    Normal,
    /// Above the healthy range
    Excess,
    /// Mild undernutrition
    Mild,
    /// Moderate undernutrition
    Moderate,
    /// Severe undernutrition
    Severe,
}

/// Classification label produced by any classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Below -3 SD weight-for-age or BMI-for-age
    SeverelyUnderweight,
    /// Between -3 SD and -2 SD weight-for-age or BMI-for-age
    Underweight,
    /// Below -3 SD height-for-age
    SeverelyStunted,
    /// Between -3 SD and -2 SD height-for-age
    Stunted,
    /// Below -3 SD weight-for-height
    SeverelyWasted,
    /// Between -3 SD and -2 SD weight-for-height
    Wasted,
    /// Healthy range
    Normal,
    /// Above +2 SD height-for-age
    Tall,
    /// Above the overweight cut-off
    Overweight,
    /// Above the obesity cut-off
    Obese,
    /// Adult/adolescent BMI severe thinness
    SevereThinness,
    /// Adult/adolescent BMI moderate thinness
    ModerateThinness,
    /// Adolescent BMI mild thinness
    MildThinness,
    /// MUAC severe acute malnutrition (SAM)
    SevereAcuteMalnutrition,
    /// MUAC moderate acute malnutrition (MAM)
    ModerateAcuteMalnutrition,
}

impl Category {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "Severely Underweight",
            Self::Underweight => "Underweight",
            Self::SeverelyStunted => "Severely Stunted",
            Self::Stunted => "Stunted",
            Self::SeverelyWasted => "Severely Wasted",
            Self::Wasted => "Wasted",
            Self::Normal => "Normal",
            Self::Tall => "Tall",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::SevereThinness => "Severe Thinness",
            Self::ModerateThinness => "Moderate Thinness",
            Self::MildThinness => "Mild Thinness",
            Self::SevereAcuteMalnutrition => "Severe Acute Malnutrition",
            Self::ModerateAcuteMalnutrition => "Moderate Acute Malnutrition",
        }
    }

    /// Severity used by the nutritional risk assessment
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::SeverelyUnderweight
            | Self::SeverelyStunted
            | Self::SeverelyWasted
            | Self::SevereThinness
            | Self::SevereAcuteMalnutrition => Severity::Severe,
            Self::Underweight
            | Self::Stunted
            | Self::Wasted
            | Self::ModerateThinness
            | Self::ModerateAcuteMalnutrition => Severity::Moderate,
            Self::MildThinness => Severity::Mild,
            Self::Overweight | Self::Obese => Severity::Excess,
            Self::Normal | Self::Tall => Severity::Normal,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one indicator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    /// Indicator classified
    pub indicator: Indicator,
    /// Category assigned
    pub category: Category,
    /// Index value of the reference row actually used (age months or height cm)
    pub index_used: f64,
    /// True when the row index differs from the requested index
    pub approximated: bool,
    /// Z-score when computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
    /// Diagnostic note (nearest-match distance, classifier path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ClassificationResult {
    /// Create a result without z-score or note
    #[must_use]
    pub const fn new(
        indicator: Indicator,
        category: Category,
        index_used: f64,
        approximated: bool,
    ) -> Self {
        Self {
            indicator,
            category,
            index_used,
            approximated,
            z_score: None,
            note: None,
        }
    }

    /// Attach a z-score
    #[must_use]
    pub fn with_z_score(mut self, z_score: f64) -> Self {
        self.z_score = Some(z_score);
        self
    }

    /// Attach a diagnostic note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Severity of the assigned category
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.category.severity()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_table_categories_match_z_bounds() {
        for indicator in Indicator::TABULATED {
            assert_eq!(
                indicator.table_categories().len(),
                indicator.category_z_bounds().len() + 1,
                "{indicator}"
            );
        }
    }

    #[test]
    fn test_indicator_parsing_accepts_abbreviations() {
        assert_eq!("WFA".parse::<Indicator>().unwrap(), Indicator::WeightForAge);
        assert_eq!(
            "weight-for-length".parse::<Indicator>().unwrap(),
            Indicator::WeightForHeight
        );
        assert!("height".parse::<Indicator>().is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Severe > Severity::Moderate);
        assert!(Severity::Moderate > Severity::Mild);
        assert_eq!(Category::Obese.severity(), Severity::Excess);
        assert_eq!(Category::Tall.severity(), Severity::Normal);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::SevereAcuteMalnutrition).unwrap();
        assert_eq!(json, "\"severe_acute_malnutrition\"");
    }
}
