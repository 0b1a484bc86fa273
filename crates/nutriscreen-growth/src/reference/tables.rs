// ABOUTME: Static WHO growth reference rows for the pediatric classification tables
// ABOUTME: Each row holds the index, the median and the lower bound of every non-first band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! WHO 2006 Child Growth Standards reference rows.
//!
//! Rows are sparse: ages 0-12, 15, 18, 21, 24, 30, 36, 48, 60 and 71 months, or
//! lengths/heights 45-120 cm in 5 cm steps. `cuts` lists, in ascending order, the
//! lowest value (0.1 precision) that belongs to each category after the first:
//!
//! - weight/height-for-age: -3 SD, -2 SD, first value above +2 SD
//! - weight-for-height: -3 SD, -2 SD, first values above +2 SD and +3 SD
//! - BMI-for-age: -3 SD, -2 SD, first values above +1 SD and +2 SD
//!
//! The first category always starts at zero.

use nutriscreen_core::models::{Indicator, Sex};

/// One tabulated reference row
#[derive(Debug, Clone, Copy)]
pub struct TableRow {
    /// Age in months or length/height in cm
    pub index: f64,
    /// Reference median
    pub median: f64,
    /// Lower bound of each non-first category, ascending
    pub cuts: &'static [f64],
}

const fn row(index: f64, median: f64, cuts: &'static [f64]) -> TableRow {
    TableRow {
        index,
        median,
        cuts,
    }
}

/// Rows for one (indicator, sex) pair
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Indicator covered
    pub indicator: Indicator,
    /// Sex covered
    pub sex: Sex,
    /// Rows in ascending index order
    pub rows: &'static [TableRow],
}

/// Every bundled table
pub static TABLE_SPECS: [TableSpec; 8] = [
    TableSpec {
        indicator: Indicator::WeightForAge,
        sex: Sex::Male,
        rows: WEIGHT_FOR_AGE_BOYS,
    },
    TableSpec {
        indicator: Indicator::WeightForAge,
        sex: Sex::Female,
        rows: WEIGHT_FOR_AGE_GIRLS,
    },
    TableSpec {
        indicator: Indicator::HeightForAge,
        sex: Sex::Male,
        rows: HEIGHT_FOR_AGE_BOYS,
    },
    TableSpec {
        indicator: Indicator::HeightForAge,
        sex: Sex::Female,
        rows: HEIGHT_FOR_AGE_GIRLS,
    },
    TableSpec {
        indicator: Indicator::WeightForHeight,
        sex: Sex::Male,
        rows: WEIGHT_FOR_HEIGHT_BOYS,
    },
    TableSpec {
        indicator: Indicator::WeightForHeight,
        sex: Sex::Female,
        rows: WEIGHT_FOR_HEIGHT_GIRLS,
    },
    TableSpec {
        indicator: Indicator::BmiForAge,
        sex: Sex::Male,
        rows: BMI_FOR_AGE_BOYS,
    },
    TableSpec {
        indicator: Indicator::BmiForAge,
        sex: Sex::Female,
        rows: BMI_FOR_AGE_GIRLS,
    },
];

/// Weight-for-age, boys (kg by age in months)
pub const WEIGHT_FOR_AGE_BOYS: &[TableRow] = &[
    row(0.0, 3.3, &[2.1, 2.5, 4.5]),
    row(1.0, 4.5, &[3.0, 3.5, 5.5]),
    row(2.0, 5.6, &[3.9, 4.4, 6.4]),
    row(3.0, 6.4, &[4.5, 5.1, 7.2]),
    row(4.0, 7.0, &[5.0, 5.6, 7.9]),
    row(5.0, 7.5, &[5.4, 6.0, 8.5]),
    row(6.0, 7.9, &[5.8, 6.4, 9.0]),
    row(7.0, 8.3, &[6.1, 6.7, 9.4]),
    row(8.0, 8.6, &[6.4, 7.0, 9.8]),
    row(9.0, 8.9, &[6.6, 7.2, 10.1]),
    row(10.0, 9.2, &[6.8, 7.4, 10.4]),
    row(11.0, 9.4, &[7.0, 7.6, 10.6]),
    row(12.0, 9.6, &[6.9, 7.7, 12.1]),
    row(15.0, 10.3, &[7.6, 8.3, 13.2]),
    row(18.0, 10.9, &[7.8, 8.6, 13.3]),
    row(21.0, 11.5, &[8.3, 9.2, 14.6]),
    row(24.0, 12.2, &[8.7, 9.5, 14.7]),
    row(30.0, 13.3, &[9.5, 10.3, 16.0]),
    row(36.0, 14.3, &[10.0, 10.8, 18.4]),
    row(48.0, 16.3, &[11.3, 12.9, 19.2]),
    row(60.0, 18.3, &[12.7, 14.3, 20.4]),
    row(71.0, 20.2, &[13.9, 15.7, 22.2]),
];

/// Weight-for-age, girls (kg by age in months)
pub const WEIGHT_FOR_AGE_GIRLS: &[TableRow] = &[
    row(0.0, 3.2, &[2.0, 2.4, 4.3]),
    row(1.0, 4.2, &[2.7, 3.2, 5.6]),
    row(2.0, 5.1, &[3.4, 3.9, 6.7]),
    row(3.0, 5.8, &[4.0, 4.5, 7.6]),
    row(4.0, 6.4, &[4.4, 5.0, 8.3]),
    row(5.0, 6.9, &[4.8, 5.4, 8.9]),
    row(6.0, 7.3, &[5.1, 5.7, 9.4]),
    row(7.0, 7.6, &[5.3, 6.0, 9.9]),
    row(8.0, 7.9, &[5.6, 6.3, 10.3]),
    row(9.0, 8.2, &[5.8, 6.5, 10.6]),
    row(10.0, 8.5, &[5.9, 6.7, 11.0]),
    row(11.0, 8.7, &[6.1, 6.9, 11.3]),
    row(12.0, 8.9, &[6.3, 7.0, 11.6]),
    row(15.0, 9.6, &[6.7, 7.6, 12.5]),
    row(18.0, 10.2, &[7.2, 8.1, 13.3]),
    row(21.0, 10.9, &[7.6, 8.6, 14.1]),
    row(24.0, 11.5, &[8.1, 9.0, 14.9]),
    row(30.0, 12.7, &[8.8, 10.0, 16.6]),
    row(36.0, 13.9, &[9.6, 10.8, 18.2]),
    row(48.0, 16.1, &[11.0, 12.3, 21.6]),
    row(60.0, 18.2, &[12.1, 13.7, 25.0]),
    row(71.0, 20.0, &[13.2, 14.9, 27.9]),
];

/// Length/height-for-age, boys (cm by age in months)
pub const HEIGHT_FOR_AGE_BOYS: &[TableRow] = &[
    row(0.0, 49.9, &[44.2, 46.1, 53.8]),
    row(1.0, 54.7, &[48.9, 50.8, 58.7]),
    row(2.0, 58.4, &[52.4, 54.4, 62.5]),
    row(3.0, 61.4, &[55.3, 57.3, 65.6]),
    row(4.0, 63.9, &[57.6, 59.7, 68.1]),
    row(5.0, 65.9, &[59.6, 61.7, 70.2]),
    row(6.0, 67.6, &[61.2, 63.3, 72.0]),
    row(7.0, 69.2, &[62.7, 64.8, 73.6]),
    row(8.0, 70.6, &[64.0, 66.2, 75.1]),
    row(9.0, 72.0, &[65.2, 67.5, 76.6]),
    row(10.0, 73.3, &[66.4, 68.7, 78.0]),
    row(11.0, 74.5, &[67.6, 69.9, 79.3]),
    row(12.0, 75.7, &[68.6, 71.0, 80.6]),
    row(15.0, 79.1, &[71.6, 74.1, 84.3]),
    row(18.0, 82.3, &[74.2, 76.9, 87.8]),
    row(21.0, 85.1, &[76.5, 79.4, 91.0]),
    row(24.0, 87.1, &[78.0, 81.0, 93.3]),
    row(30.0, 91.9, &[82.4, 85.5, 98.4]),
    row(36.0, 96.1, &[85.0, 88.7, 103.6]),
    row(48.0, 103.3, &[90.7, 94.9, 111.8]),
    row(60.0, 110.0, &[96.1, 100.7, 119.3]),
    row(71.0, 115.5, &[100.8, 105.7, 125.4]),
];

/// Length/height-for-age, girls (cm by age in months)
pub const HEIGHT_FOR_AGE_GIRLS: &[TableRow] = &[
    row(0.0, 49.1, &[43.6, 45.4, 53.0]),
    row(1.0, 53.7, &[47.8, 49.8, 57.7]),
    row(2.0, 57.1, &[51.0, 53.0, 61.2]),
    row(3.0, 59.8, &[53.5, 55.6, 64.1]),
    row(4.0, 62.1, &[55.6, 57.8, 66.5]),
    row(5.0, 64.0, &[57.4, 59.6, 68.6]),
    row(6.0, 65.7, &[58.9, 61.2, 70.4]),
    row(7.0, 67.3, &[60.3, 62.7, 72.0]),
    row(8.0, 68.7, &[61.7, 64.0, 73.6]),
    row(9.0, 70.1, &[62.9, 65.3, 75.1]),
    row(10.0, 71.5, &[64.1, 66.5, 76.5]),
    row(11.0, 72.8, &[65.2, 67.7, 77.9]),
    row(12.0, 74.0, &[66.3, 68.9, 79.3]),
    row(15.0, 77.5, &[69.3, 72.0, 83.1]),
    row(18.0, 80.7, &[72.0, 74.9, 86.6]),
    row(21.0, 83.7, &[74.5, 77.5, 89.9]),
    row(24.0, 85.7, &[76.0, 79.3, 92.3]),
    row(30.0, 90.7, &[80.1, 83.6, 97.8]),
    row(36.0, 95.1, &[83.6, 87.4, 102.8]),
    row(48.0, 102.7, &[89.8, 94.1, 111.4]),
    row(60.0, 109.4, &[95.2, 99.9, 119.0]),
    row(71.0, 114.6, &[99.9, 104.8, 124.5]),
];

/// Weight-for-length/height, boys (kg by cm)
pub const WEIGHT_FOR_HEIGHT_BOYS: &[TableRow] = &[
    row(45.0, 2.4, &[1.9, 2.0, 3.1, 3.4]),
    row(50.0, 3.3, &[2.6, 2.8, 4.1, 4.5]),
    row(55.0, 4.5, &[3.6, 3.8, 5.4, 5.9]),
    row(60.0, 5.9, &[4.7, 5.0, 7.0, 7.6]),
    row(65.0, 7.4, &[5.9, 6.3, 8.9, 9.7]),
    row(70.0, 8.6, &[6.8, 7.3, 10.1, 11.0]),
    row(75.0, 9.5, &[7.6, 8.0, 10.9, 11.9]),
    row(80.0, 10.4, &[8.2, 8.7, 11.8, 12.9]),
    row(85.0, 11.5, &[9.1, 9.7, 13.1, 14.3]),
    row(90.0, 12.5, &[9.9, 10.6, 14.3, 15.6]),
    row(95.0, 13.7, &[10.8, 11.5, 15.5, 17.0]),
    row(100.0, 15.0, &[11.7, 12.5, 16.8, 18.5]),
    row(105.0, 16.2, &[12.7, 13.5, 18.3, 20.2]),
    row(110.0, 17.7, &[13.8, 14.7, 19.9, 22.1]),
    row(115.0, 19.2, &[15.0, 16.0, 21.8, 24.3]),
    row(120.0, 20.7, &[16.1, 17.3, 23.8, 26.7]),
];

/// Weight-for-length/height, girls (kg by cm)
pub const WEIGHT_FOR_HEIGHT_GIRLS: &[TableRow] = &[
    row(45.0, 2.5, &[1.9, 2.1, 3.1, 3.4]),
    row(50.0, 3.4, &[2.6, 2.8, 4.1, 4.6]),
    row(55.0, 4.5, &[3.5, 3.8, 5.5, 6.0]),
    row(60.0, 6.0, &[4.6, 5.1, 7.3, 8.1]),
    row(65.0, 7.1, &[5.5, 6.1, 8.8, 9.8]),
    row(70.0, 8.3, &[6.5, 7.1, 10.0, 11.2]),
    row(75.0, 9.4, &[7.5, 8.1, 11.2, 12.6]),
    row(80.0, 10.5, &[8.5, 9.1, 12.4, 14.0]),
    row(85.0, 11.6, &[9.5, 10.1, 13.6, 15.4]),
    row(90.0, 12.4, &[9.7, 10.5, 14.9, 16.4]),
    row(95.0, 13.6, &[10.7, 11.5, 16.2, 17.9]),
    row(100.0, 14.7, &[11.7, 12.5, 17.5, 19.4]),
    row(105.0, 15.9, &[12.7, 13.5, 18.8, 20.9]),
    row(110.0, 17.0, &[13.7, 14.5, 20.1, 22.4]),
    row(115.0, 18.1, &[14.7, 15.5, 21.4, 23.9]),
    row(120.0, 19.3, &[15.7, 16.5, 22.7, 25.4]),
];

/// BMI-for-age, boys (kg/m2 by age in months)
pub const BMI_FOR_AGE_BOYS: &[TableRow] = &[
    row(0.0, 13.4, &[10.2, 11.1, 14.9, 16.4]),
    row(1.0, 14.9, &[11.3, 12.4, 16.4, 17.9]),
    row(2.0, 16.3, &[12.5, 13.7, 17.9, 19.5]),
    row(3.0, 16.9, &[13.1, 14.3, 18.5, 20.1]),
    row(4.0, 17.2, &[13.4, 14.5, 18.8, 20.4]),
    row(5.0, 17.3, &[13.5, 14.7, 18.9, 20.6]),
    row(6.0, 17.3, &[13.6, 14.7, 18.9, 20.6]),
    row(7.0, 17.3, &[13.7, 14.8, 18.9, 20.6]),
    row(8.0, 17.3, &[13.6, 14.7, 18.8, 20.5]),
    row(9.0, 17.2, &[13.6, 14.7, 18.7, 20.4]),
    row(10.0, 17.0, &[13.5, 14.6, 18.6, 20.2]),
    row(11.0, 16.9, &[13.4, 14.5, 18.5, 20.1]),
    row(12.0, 16.8, &[13.4, 14.4, 18.3, 19.9]),
    row(15.0, 16.4, &[13.1, 14.2, 17.9, 19.5]),
    row(18.0, 16.1, &[12.9, 14.0, 17.6, 19.1]),
    row(21.0, 15.9, &[12.8, 13.8, 17.3, 18.8]),
    row(24.0, 16.0, &[12.9, 13.8, 17.4, 19.0]),
    row(30.0, 15.7, &[12.6, 13.7, 17.1, 18.6]),
    row(36.0, 15.6, &[12.4, 13.4, 17.0, 18.5]),
    row(48.0, 15.3, &[12.1, 13.1, 16.8, 18.3]),
    row(60.0, 15.2, &[12.1, 13.0, 16.7, 18.4]),
    row(71.0, 15.3, &[12.1, 13.0, 16.8, 18.5]),
];

/// BMI-for-age, girls (kg/m2 by age in months)
pub const BMI_FOR_AGE_GIRLS: &[TableRow] = &[
    row(0.0, 13.3, &[10.1, 11.1, 14.7, 16.2]),
    row(1.0, 14.6, &[10.8, 12.0, 16.1, 17.6]),
    row(2.0, 15.8, &[11.8, 13.0, 17.4, 19.1]),
    row(3.0, 16.4, &[12.4, 13.6, 18.0, 19.8]),
    row(4.0, 16.7, &[12.7, 13.9, 18.4, 20.1]),
    row(5.0, 16.8, &[12.9, 14.1, 18.5, 20.3]),
    row(6.0, 16.9, &[13.0, 14.1, 18.6, 20.4]),
    row(7.0, 16.9, &[13.0, 14.2, 18.6, 20.4]),
    row(8.0, 16.8, &[13.0, 14.1, 18.5, 20.3]),
    row(9.0, 16.7, &[12.9, 14.1, 18.4, 20.2]),
    row(10.0, 16.6, &[12.9, 14.0, 18.3, 20.0]),
    row(11.0, 16.5, &[12.8, 13.9, 18.1, 19.9]),
    row(12.0, 16.4, &[12.7, 13.8, 18.0, 19.7]),
    row(15.0, 16.0, &[12.5, 13.5, 17.6, 19.3]),
    row(18.0, 15.7, &[12.2, 13.3, 17.3, 18.9]),
    row(21.0, 15.5, &[12.1, 13.2, 17.0, 18.7]),
    row(24.0, 15.7, &[12.4, 13.3, 17.2, 18.8]),
    row(30.0, 15.5, &[12.3, 13.3, 17.0, 18.6]),
    row(36.0, 15.4, &[12.2, 13.1, 16.9, 18.5]),
    row(48.0, 15.3, &[11.9, 12.9, 16.9, 18.6]),
    row(60.0, 15.2, &[11.8, 12.7, 17.0, 19.0]),
    row(71.0, 15.3, &[11.8, 12.7, 17.1, 19.2]),
];
