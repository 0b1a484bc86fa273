// ABOUTME: Integration tests for age resolution in completed months
// ABOUTME: Covers anniversaries, leap years, partial months and invalid date order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Months};
use common::date;
use nutriscreen::errors::ScreeningError;
use nutriscreen::growth::{AgeMonths, AgeResolver};
use proptest::prelude::*;

#[test]
fn test_known_ages() {
    let resolver = AgeResolver::default();
    let cases = [
        ((2022, 6, 1), (2024, 6, 1), 24),
        ((2021, 2, 1), (2023, 2, 1), 24),
        ((2023, 1, 31), (2024, 12, 31), 23),
        ((2024, 1, 1), (2024, 2, 15), 1),
        ((2024, 1, 1), (2024, 1, 30), 0),
        ((1999, 6, 1), (2024, 6, 1), 300),
    ];
    for ((by, bm, bd), (oy, om, od), expected) in cases {
        let age = resolver.resolve(date(by, bm, bd), date(oy, om, od)).unwrap();
        assert_eq!(age.months(), expected, "born {by}-{bm}-{bd}, seen {oy}-{om}-{od}");
    }
}

#[test]
fn test_observation_before_birth_is_invalid() {
    let resolver = AgeResolver::default();
    let error = resolver
        .resolve(date(2024, 6, 2), date(2024, 6, 1))
        .unwrap_err();
    assert!(matches!(
        error,
        ScreeningError::InvalidInput {
            field: "observation_date",
            ..
        }
    ));
}

#[test]
fn test_age_bands() {
    assert!(AgeMonths::new(71).is_pediatric());
    assert!(!AgeMonths::new(72).is_pediatric());
    assert!(!AgeMonths::new(239).is_adult());
    assert!(AgeMonths::new(240).is_adult());
    assert_eq!(AgeMonths::new(300).years(), 25);
}

proptest! {
    #[test]
    fn prop_whole_month_spans_resolve_exactly(
        year in 1950_i32..2030,
        month in 1_u32..=12,
        day in 1_u32..=28,
        months in 0_u32..600,
    ) {
        let birth = date(year, month, day);
        let observed = birth.checked_add_months(Months::new(months)).unwrap();
        let age = AgeResolver::default().resolve(birth, observed).unwrap();
        prop_assert_eq!(age.months(), months);
    }

    #[test]
    fn prop_age_never_decreases(extra_days in 0_i64..20_000) {
        let birth = date(2001, 3, 17);
        let resolver = AgeResolver::default();
        let today = birth + Duration::days(extra_days);
        let tomorrow = today + Duration::days(1);
        let age_today = resolver.resolve(birth, today).unwrap();
        let age_tomorrow = resolver.resolve(birth, tomorrow).unwrap();
        prop_assert!(age_tomorrow >= age_today);
    }
}
