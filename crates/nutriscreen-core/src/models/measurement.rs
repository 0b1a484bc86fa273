// ABOUTME: Anthropometric measurement model for a single screening event
// ABOUTME: Defines Sex, DietPattern and Measurement with derived BMI and modifier flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::units::CM_PER_METER;
use crate::errors::ScreeningError;

/// Biological sex used to select reference tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male reference tables
    Male,
    /// Female reference tables
    Female,
}

impl Sex {
    /// Lowercase tag used in logs and serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Self::Male),
            "female" | "f" | "girl" => Ok(Self::Female),
            other => Err(ScreeningError::invalid_input(
                "sex",
                format!("unrecognized value '{other}', expected male or female"),
            )),
        }
    }
}

/// Self-reported diet pattern
///
/// Parsing is lossy: unknown tags are kept verbatim as `Other` so that
/// free-text survey answers never reject a screening.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum DietPattern {
    /// Eats meat, fish and plant foods
    Omnivore,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Fish but no other meat
    Pescatarian,
    /// Anything else, as reported
    Other(String),
}

impl DietPattern {
    /// Parse a free-text diet tag
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "omnivore" | "omnivorous" | "mixed" => Self::Omnivore,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            "pescatarian" | "pescetarian" => Self::Pescatarian,
            _ => Self::Other(tag.trim().to_owned()),
        }
    }

    /// Vegan and vegetarian diets add risk points
    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        matches!(self, Self::Vegan | Self::Vegetarian)
    }

    /// Tag used in serialized output
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for DietPattern {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<DietPattern> for String {
    fn from(diet: DietPattern) -> Self {
        diet.as_str().to_owned()
    }
}

/// One anthropometric screening event
///
/// Built fresh per screening and never mutated afterwards; every derived
/// quantity (age, BMI, scores) is recomputed from these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height (standing) or length (recumbent) in centimeters
    pub height_cm: f64,
    /// Mid-upper arm circumference in centimeters, when measured
    pub muac_cm: Option<f64>,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date the measurement was taken
    pub observation_date: NaiveDate,
    /// Biological sex
    pub sex: Sex,
    /// Self-reported diet pattern
    pub diet: Option<DietPattern>,
    /// Explicit food allergy flag
    pub has_allergy: Option<bool>,
    /// Free-text allergy list
    pub allergies: Option<String>,
}

impl Measurement {
    /// Create a measurement with the required fields only
    #[must_use]
    pub const fn new(
        weight_kg: f64,
        height_cm: f64,
        birth_date: NaiveDate,
        observation_date: NaiveDate,
        sex: Sex,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            muac_cm: None,
            birth_date,
            observation_date,
            sex,
            diet: None,
            has_allergy: None,
            allergies: None,
        }
    }

    /// Set the MUAC reading
    #[must_use]
    pub fn with_muac(mut self, muac_cm: f64) -> Self {
        self.muac_cm = Some(muac_cm);
        self
    }

    /// Set the diet pattern
    #[must_use]
    pub fn with_diet(mut self, diet: DietPattern) -> Self {
        self.diet = Some(diet);
        self
    }

    /// Set the explicit allergy flag
    #[must_use]
    pub fn with_allergy_flag(mut self, has_allergy: bool) -> Self {
        self.has_allergy = Some(has_allergy);
        self
    }

    /// Set the free-text allergy list
    #[must_use]
    pub fn with_allergies(mut self, allergies: impl Into<String>) -> Self {
        self.allergies = Some(allergies.into());
        self
    }

    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / CM_PER_METER
    }

    /// Body mass index (kg/m^2)
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_m();
        self.weight_kg / (height_m * height_m)
    }

    /// MUAC when actually measured; a recorded zero means "not measured"
    #[must_use]
    pub fn muac(&self) -> Option<f64> {
        self.muac_cm.filter(|muac| *muac > 0.0)
    }

    /// Whether a food allergy was declared by flag or free text
    #[must_use]
    pub fn declares_food_allergy(&self) -> bool {
        if self.has_allergy == Some(true) {
            return true;
        }
        self.allergies.as_deref().is_some_and(|text| {
            let text = text.trim();
            !text.is_empty() && !text.eq_ignore_ascii_case("none")
        })
    }

    /// Whether the reported diet is vegan or vegetarian
    #[must_use]
    pub fn follows_restricted_diet(&self) -> bool {
        self.diet.as_ref().is_some_and(DietPattern::is_restricted)
    }
}
