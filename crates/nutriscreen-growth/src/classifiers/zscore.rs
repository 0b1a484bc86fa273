// ABOUTME: Piecewise-linear z-score estimation from tabulated SD cut points
// ABOUTME: Maps a value to a z-score through the median and the entry's SD anchors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Z-score estimation without LMS parameters.
//!
//! Each reference entry gives a handful of (z, value) anchors: the SD cut points
//! of its categories plus the median at z = 0. The z-score of a measurement is
//! read off the piecewise-linear curve through those anchors, so the spacing
//! below the median and above it is used independently (growth distributions are
//! skewed). Values beyond the outermost anchors extrapolate along the edge
//! segment.

use nutriscreen_core::models::{Category, Indicator};

use crate::reference::ReferenceEntry;

/// Reported z-scores are rounded to this many decimals
const Z_SCORE_DECIMALS: i32 = 2;

/// (z, value) anchors of an entry in ascending order
#[must_use]
pub fn anchors(entry: &ReferenceEntry) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = entry
        .indicator
        .category_z_bounds()
        .iter()
        .copied()
        .zip(entry.cuts())
        .collect();
    points.push((0.0, entry.median));
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

/// Z-score of `value` against the entry
#[must_use]
pub fn z_score(entry: &ReferenceEntry, value: f64) -> f64 {
    let points = anchors(entry);
    if points.len() < 2 {
        return 0.0;
    }

    let segment = points
        .windows(2)
        .position(|pair| value < pair[1].1)
        .unwrap_or(points.len() - 2);
    let (z_low, value_low) = points[segment];
    let (z_high, value_high) = points[segment + 1];
    let span = value_high - value_low;
    if span <= 0.0 {
        return z_low;
    }

    let fraction = (value - value_low) / span;
    fraction.mul_add(z_high - z_low, z_low)
}

/// Category whose z lower bound is the highest one not above `z`
#[must_use]
pub fn category_for(indicator: Indicator, z: f64) -> Category {
    let categories = indicator.table_categories();
    let position = indicator
        .category_z_bounds()
        .iter()
        .rposition(|bound| z >= *bound)
        .map_or(0, |bound_position| bound_position + 1);
    categories
        .get(position)
        .or_else(|| categories.last())
        .copied()
        .unwrap_or(Category::Normal)
}

/// Round a z-score for reporting
#[must_use]
pub fn round_z(z: f64) -> f64 {
    let factor = 10_f64.powi(Z_SCORE_DECIMALS);
    (z * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use nutriscreen_core::models::Sex;

    use super::*;

    fn entry() -> ReferenceEntry {
        // Boys weight-for-age at birth
        ReferenceEntry::from_cuts(Indicator::WeightForAge, Sex::Male, 0.0, 3.3, &[2.1, 2.5, 4.5])
            .unwrap()
    }

    #[test]
    fn test_median_is_zero() {
        assert!(z_score(&entry(), 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_cut_points_map_to_their_bounds() {
        let entry = entry();
        assert!((z_score(&entry, 2.1) + 3.0).abs() < 1e-12);
        assert!((z_score(&entry, 2.5) + 2.0).abs() < 1e-12);
        assert!((z_score(&entry, 4.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_skewed_sides_are_scaled_independently() {
        let entry = entry();
        // Halfway between -2 SD (2.5) and the median (3.3)
        assert!((z_score(&entry, 2.9) + 1.0).abs() < 1e-9);
        // Halfway between the median (3.3) and +2 SD (4.5)
        assert!((z_score(&entry, 3.9) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extrapolation_beyond_anchors() {
        let entry = entry();
        // Edge segment below -3 SD has slope 1 SD per 0.4 kg
        assert!((z_score(&entry, 1.7) + 4.0).abs() < 1e-9);
        assert!(z_score(&entry, 6.0) > 2.0);
    }

    #[test]
    fn test_category_for_z() {
        assert_eq!(
            category_for(Indicator::WeightForAge, -3.5),
            Category::SeverelyUnderweight
        );
        assert_eq!(
            category_for(Indicator::WeightForAge, -3.0),
            Category::Underweight
        );
        assert_eq!(category_for(Indicator::WeightForAge, 0.0), Category::Normal);
        assert_eq!(
            category_for(Indicator::WeightForAge, 2.0),
            Category::Overweight
        );
        assert_eq!(category_for(Indicator::BmiForAge, 1.5), Category::Overweight);
        assert_eq!(category_for(Indicator::WeightForHeight, 3.2), Category::Obese);
    }

    #[test]
    fn test_round_z() {
        assert_eq!(round_z(-1.23456), -1.23);
        assert_eq!(round_z(2.005_1), 2.01);
    }
}
