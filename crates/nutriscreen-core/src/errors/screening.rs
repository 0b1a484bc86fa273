// ABOUTME: Screening-specific error types raised by validation and classification
// ABOUTME: Separates request-level input failures from indicator-scoped domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Screening Error Types
//!
//! - `InvalidInput` and `ImplausibleValue` fail the whole screening request.
//! - `OutOfDomain` is scoped to a single indicator; the other indicators of the
//!   same request are still reported.
//! - `Configuration` covers reference data or thresholds that failed validation.

use serde_json::{json, Value};
use thiserror::Error;

use super::ErrorCode;
use crate::models::Indicator;

/// Errors raised while validating or classifying a measurement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreeningError {
    /// A field is missing, non-positive, malformed or logically impossible
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A value is well-formed but outside physiological plausibility limits
    #[error("{field} of {value} exceeds the plausible limit of {limit}")]
    ImplausibleValue {
        /// Name of the offending input field
        field: &'static str,
        /// Value supplied
        value: f64,
        /// Upper plausibility limit
        limit: f64,
    },

    /// The lookup index falls outside the indicator's reference coverage
    #[error("{} index {index} is outside the reference range {min}-{max} {}", indicator.label(), indicator.index_unit())]
    OutOfDomain {
        /// Indicator that cannot be evaluated
        indicator: Indicator,
        /// Index value requested (age in months or height in cm)
        index: f64,
        /// Lowest covered index
        min: f64,
        /// Highest covered index
        max: f64,
    },

    /// Reference data or thresholds are inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ScreeningError {
    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Create an "implausible value" error
    #[must_use]
    pub const fn implausible(field: &'static str, value: f64, limit: f64) -> Self {
        Self::ImplausibleValue {
            field,
            value,
            limit,
        }
    }

    /// Create an "out of domain" error
    #[must_use]
    pub const fn out_of_domain(indicator: Indicator, index: f64, min: f64, max: f64) -> Self {
        Self::OutOfDomain {
            indicator,
            index,
            min,
            max,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error only invalidates one indicator rather than the request
    #[must_use]
    pub const fn is_indicator_scoped(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }

    /// Error code used when converting to `AppError`
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::ImplausibleValue { .. } => ErrorCode::ValueOutOfRange,
            Self::OutOfDomain { .. } => ErrorCode::OutOfDomain,
            Self::Configuration(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Structured details for error responses
    #[must_use]
    pub fn details(&self) -> Value {
        match self {
            Self::InvalidInput { field, reason } => json!({ "field": field, "reason": reason }),
            Self::ImplausibleValue {
                field,
                value,
                limit,
            } => json!({ "field": field, "value": value, "limit": limit }),
            Self::OutOfDomain {
                indicator,
                index,
                min,
                max,
            } => json!({
                "indicator": indicator.name(),
                "index": index,
                "min": min,
                "max": max,
            }),
            Self::Configuration(message) => json!({ "message": message }),
        }
    }
}
