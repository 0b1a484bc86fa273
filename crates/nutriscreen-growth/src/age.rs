// ABOUTME: Converts a birth date and an as-of date into age in completed months
// ABOUTME: Average-month conversion with a calendar anniversary correction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use std::fmt;

use chrono::{Datelike, NaiveDate};
use nutriscreen_core::constants::{age, units};
use nutriscreen_core::errors::ScreeningError;
use serde::{Deserialize, Serialize};

/// Age in completed months, always derived from dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeMonths(u32);

impl AgeMonths {
    /// Wrap a completed-month count
    #[must_use]
    pub const fn new(months: u32) -> Self {
        Self(months)
    }

    /// Completed months
    #[must_use]
    pub const fn months(self) -> u32 {
        self.0
    }

    /// Months as a table index value
    #[must_use]
    pub fn as_index(self) -> f64 {
        f64::from(self.0)
    }

    /// Covered by the pediatric reference tables (0-71 months)
    #[must_use]
    pub const fn is_pediatric(self) -> bool {
        self.0 <= age::PEDIATRIC_MAX_MONTHS
    }

    /// 240 months or older
    #[must_use]
    pub const fn is_adult(self) -> bool {
        self.0 >= age::ADULT_MIN_MONTHS
    }

    /// Completed years
    #[must_use]
    pub const fn years(self) -> u32 {
        self.0 / units::MONTHS_PER_YEAR
    }
}

impl fmt::Display for AgeMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

impl From<u32> for AgeMonths {
    fn from(months: u32) -> Self {
        Self(months)
    }
}

/// Resolves age in completed months
#[derive(Debug, Clone, Copy)]
pub struct AgeResolver {
    days_per_month: f64,
}

impl Default for AgeResolver {
    fn default() -> Self {
        Self::new(units::AVERAGE_DAYS_PER_MONTH)
    }
}

impl AgeResolver {
    /// Create a resolver using the given average month length
    #[must_use]
    pub const fn new(days_per_month: f64) -> Self {
        Self { days_per_month }
    }

    /// Age in completed months at `as_of`
    ///
    /// Elapsed days are divided by the average month length and truncated. When
    /// that lands exactly one month short of the completed calendar months (a
    /// birthday anniversary spanning non-leap years), the calendar count wins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `as_of` is before `birth_date`
    pub fn resolve(
        &self,
        birth_date: NaiveDate,
        as_of: NaiveDate,
    ) -> Result<AgeMonths, ScreeningError> {
        if as_of < birth_date {
            return Err(ScreeningError::invalid_input(
                "observation_date",
                format!("observation date {as_of} is before birth date {birth_date}"),
            ));
        }

        let elapsed_days = (as_of - birth_date).num_days();
        let approximate = (elapsed_days as f64 / self.days_per_month).floor() as u32;
        let calendar = completed_calendar_months(birth_date, as_of);

        if calendar == approximate + 1 {
            Ok(AgeMonths(calendar))
        } else {
            Ok(AgeMonths(approximate))
        }
    }
}

fn completed_calendar_months(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let years = i64::from(as_of.year()) - i64::from(birth_date.year());
    let months = i64::from(as_of.month()) - i64::from(birth_date.month());
    let partial = i64::from(as_of.day() < birth_date.day());
    let total = years * i64::from(units::MONTHS_PER_YEAR) + months - partial;
    u32::try_from(total).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_same_day_is_zero_months() {
        let resolver = AgeResolver::default();
        let age = resolver
            .resolve(date(2024, 3, 1), date(2024, 3, 1))
            .unwrap();
        assert_eq!(age.months(), 0);
    }

    #[test]
    fn test_two_year_anniversary_across_non_leap_years() {
        let resolver = AgeResolver::default();
        // 730 days / 30.44 = 23.98
        let age = resolver
            .resolve(date(2021, 2, 1), date(2023, 2, 1))
            .unwrap();
        assert_eq!(age.months(), 24);
    }

    #[test]
    fn test_day_before_anniversary_is_not_rounded_up() {
        let resolver = AgeResolver::default();
        let age = resolver
            .resolve(date(2021, 2, 1), date(2023, 1, 31))
            .unwrap();
        assert_eq!(age.months(), 23);
    }

    #[test]
    fn test_average_month_truncation() {
        let resolver = AgeResolver::default();
        // 45 days / 30.44 = 1.48
        let age = resolver
            .resolve(date(2024, 1, 1), date(2024, 2, 15))
            .unwrap();
        assert_eq!(age.months(), 1);
    }

    #[test]
    fn test_observation_before_birth_is_invalid() {
        let resolver = AgeResolver::default();
        let error = resolver
            .resolve(date(2024, 3, 2), date(2024, 3, 1))
            .unwrap_err();
        assert!(matches!(error, ScreeningError::InvalidInput { .. }));
    }

    #[test]
    fn test_age_groups() {
        assert!(AgeMonths::new(71).is_pediatric());
        assert!(!AgeMonths::new(72).is_pediatric());
        assert!(!AgeMonths::new(239).is_adult());
        assert!(AgeMonths::new(240).is_adult());
        assert_eq!(AgeMonths::new(300).years(), 25);
    }
}
