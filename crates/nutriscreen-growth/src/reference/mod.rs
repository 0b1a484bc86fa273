// ABOUTME: Immutable, versioned store of growth reference tables with nearest-match lookup
// ABOUTME: Builds contiguous category bands from static rows and validates them once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! # Reference Table Store
//!
//! Holds one `ReferenceTable` per (indicator, sex). Every `ReferenceEntry` owns an
//! ordered list of category bands that:
//!
//! - start at zero and end at positive infinity (exhaustive)
//! - touch without overlapping: each band's `max` is the next band's `min`
//! - use half-open containment, `min <= value < max`
//!
//! Lookups pick the row with the smallest absolute distance to the requested
//! index, preferring the lower index on ties. The store is read-only after
//! construction and shared freely across threads.

/// Static reference rows
pub mod tables;

use std::collections::HashMap;
use std::iter;
use std::sync::OnceLock;

use nutriscreen_core::constants::reference::TABLE_VERSION;
use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{Category, Indicator, Sex};
use serde::Serialize;
use tracing::{debug, error};

use tables::{TableRow, TableSpec, TABLE_SPECS};

/// Global store singleton
static REFERENCE_STORE: OnceLock<ReferenceTableStore> = OnceLock::new();

/// One category band of a reference entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    /// Category assigned to values in this band
    pub category: Category,
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound (`f64::INFINITY` for the last band)
    #[serde(serialize_with = "serialize_bound")]
    pub max: f64,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // Signature required by serde serialize_with
fn serialize_bound<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

impl Band {
    /// Half-open containment test
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// One row of a reference table with its category bands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceEntry {
    /// Indicator this entry belongs to
    pub indicator: Indicator,
    /// Sex this entry belongs to
    pub sex: Sex,
    /// Age in months or height in cm
    pub index: f64,
    /// Reference median
    pub median: f64,
    bands: Vec<Band>,
}

impl ReferenceEntry {
    /// Build an entry from ascending lower bounds of the non-first categories
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the number of cut points does not match
    /// the indicator's categories, or cut points are not positive, finite and
    /// strictly ascending.
    pub fn from_cuts(
        indicator: Indicator,
        sex: Sex,
        index: f64,
        median: f64,
        cuts: &[f64],
    ) -> Result<Self, ScreeningError> {
        let categories = indicator.table_categories();
        if cuts.len() + 1 != categories.len() {
            return Err(ScreeningError::configuration(format!(
                "{indicator} {sex} row {index}: expected {} cut points, found {}",
                categories.len() - 1,
                cuts.len()
            )));
        }
        if cuts.iter().any(|cut| !cut.is_finite() || *cut <= 0.0) {
            return Err(ScreeningError::configuration(format!(
                "{indicator} {sex} row {index}: cut points must be positive and finite"
            )));
        }
        if cuts.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ScreeningError::configuration(format!(
                "{indicator} {sex} row {index}: cut points must be strictly ascending"
            )));
        }

        let lower_bounds = iter::once(0.0).chain(cuts.iter().copied());
        let upper_bounds = cuts.iter().copied().chain(iter::once(f64::INFINITY));
        let bands = categories
            .iter()
            .zip(lower_bounds.zip(upper_bounds))
            .map(|(category, (min, max))| Band {
                category: *category,
                min,
                max,
            })
            .collect();

        Ok(Self {
            indicator,
            sex,
            index,
            median,
            bands,
        })
    }

    /// Ordered, contiguous bands (lowest first)
    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Lower bounds of every band after the first
    pub fn cuts(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().skip(1).map(|band| band.min)
    }

    /// Band containing `value`
    ///
    /// Exactly one band matches any value >= 0. Values below the first band
    /// (or NaN) clamp to the first band, values past the last clamp to the last.
    #[must_use]
    pub fn band_for(&self, value: f64) -> &Band {
        let position = self
            .bands
            .iter()
            .rposition(|band| value >= band.min)
            .unwrap_or(0);
        &self.bands[position]
    }
}

/// Result of a table lookup
#[derive(Debug, Clone, Copy)]
pub struct TableMatch<'a> {
    /// Selected entry
    pub entry: &'a ReferenceEntry,
    /// Index value that was requested
    pub requested: f64,
}

impl TableMatch<'_> {
    /// Whether the selected row differs from the requested index
    #[must_use]
    pub fn approximated(&self) -> bool {
        (self.entry.index - self.requested).abs() > f64::EPSILON
    }
}

/// All entries of one (indicator, sex) pair in ascending index order
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    indicator: Indicator,
    sex: Sex,
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    fn from_spec(spec: &TableSpec) -> Result<Self, ScreeningError> {
        if spec.rows.is_empty() {
            return Err(ScreeningError::configuration(format!(
                "{} {} table has no rows",
                spec.indicator, spec.sex
            )));
        }
        if spec.rows.windows(2).any(|pair| pair[0].index >= pair[1].index) {
            return Err(ScreeningError::configuration(format!(
                "{} {} table indices must be strictly ascending",
                spec.indicator, spec.sex
            )));
        }

        let entries = spec
            .rows
            .iter()
            .map(|row: &TableRow| {
                ReferenceEntry::from_cuts(spec.indicator, spec.sex, row.index, row.median, row.cuts)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for entry in &entries {
            let cuts: Vec<f64> = entry.cuts().collect();
            let below = cuts.get(1).copied().unwrap_or(0.0);
            let above = cuts.get(2).copied().unwrap_or(f64::INFINITY);
            if entry.median <= below || entry.median >= above {
                return Err(ScreeningError::configuration(format!(
                    "{} {} row {}: median {} must lie inside the normal band",
                    spec.indicator, spec.sex, entry.index, entry.median
                )));
            }
        }

        Ok(Self {
            indicator: spec.indicator,
            sex: spec.sex,
            entries,
        })
    }

    /// Covered index range `(first, last)`
    #[must_use]
    pub fn coverage(&self) -> (f64, f64) {
        let first = self.entries.first().map_or(0.0, |entry| entry.index);
        let last = self.entries.last().map_or(0.0, |entry| entry.index);
        (first, last)
    }

    /// Entries in ascending index order
    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    fn ensure_covered(&self, index: f64) -> Result<(), ScreeningError> {
        let (min, max) = self.coverage();
        if !index.is_finite() || index < min || index > max {
            return Err(ScreeningError::out_of_domain(
                self.indicator,
                index,
                min,
                max,
            ));
        }
        Ok(())
    }

    /// Nearest entry; ties prefer the lower index
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` when `index` lies outside the table's coverage
    pub fn nearest(&self, index: f64) -> Result<TableMatch<'_>, ScreeningError> {
        self.ensure_covered(index)?;
        let mut best: Option<(&ReferenceEntry, f64)> = None;
        for entry in &self.entries {
            let distance = (entry.index - index).abs();
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((entry, distance));
            }
        }
        best.map(|(entry, _)| TableMatch {
            entry,
            requested: index,
        })
        .ok_or_else(|| {
            ScreeningError::configuration(format!(
                "{} {} table has no rows",
                self.indicator, self.sex
            ))
        })
    }

    /// Synthetic entry linearly interpolated between the bracketing rows
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` when `index` lies outside the table's coverage
    pub fn interpolate(&self, index: f64) -> Result<ReferenceEntry, ScreeningError> {
        self.ensure_covered(index)?;
        let upper_position = self
            .entries
            .iter()
            .position(|entry| entry.index >= index)
            .unwrap_or(self.entries.len().saturating_sub(1));
        let upper = &self.entries[upper_position];
        if upper_position == 0 || (upper.index - index).abs() <= f64::EPSILON {
            return Ok(upper.clone());
        }
        let lower = &self.entries[upper_position - 1];

        let fraction = (index - lower.index) / (upper.index - lower.index);
        let lerp = |low: f64, high: f64| (high - low).mul_add(fraction, low);
        let cuts: Vec<f64> = lower
            .cuts()
            .zip(upper.cuts())
            .map(|(low, high)| lerp(low, high))
            .collect();

        ReferenceEntry::from_cuts(
            self.indicator,
            self.sex,
            index,
            lerp(lower.median, upper.median),
            &cuts,
        )
    }
}

/// Immutable store of every bundled reference table
#[derive(Debug, Clone)]
pub struct ReferenceTableStore {
    version: &'static str,
    tables: HashMap<(Indicator, Sex), ReferenceTable>,
}

impl ReferenceTableStore {
    /// Get the process-wide store
    ///
    /// The bundled tables are validated by the test suite; if validation ever
    /// fails at runtime the store is empty and every lookup reports a
    /// configuration error instead of panicking.
    pub fn global() -> &'static Self {
        REFERENCE_STORE.get_or_init(|| {
            Self::build().unwrap_or_else(|e| {
                error!("Failed to build reference tables: {e}, lookups will fail");
                Self::empty()
            })
        })
    }

    /// Build and validate the bundled tables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when any bundled row is inconsistent
    pub fn build() -> Result<Self, ScreeningError> {
        Self::from_specs(&TABLE_SPECS)
    }

    /// Build a store from arbitrary table specifications
    ///
    /// # Errors
    ///
    /// Returns a configuration error when any row is inconsistent
    pub fn from_specs(specs: &[TableSpec]) -> Result<Self, ScreeningError> {
        let mut tables = HashMap::with_capacity(specs.len());
        for spec in specs {
            let table = ReferenceTable::from_spec(spec)?;
            tables.insert((spec.indicator, spec.sex), table);
        }
        debug!(
            version = TABLE_VERSION,
            tables = tables.len(),
            "Reference tables loaded"
        );
        Ok(Self {
            version: TABLE_VERSION,
            tables,
        })
    }

    fn empty() -> Self {
        Self {
            version: TABLE_VERSION,
            tables: HashMap::new(),
        }
    }

    /// Version tag of the reference data
    #[must_use]
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Table for an indicator and sex
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no table is bundled for the pair
    pub fn table(&self, indicator: Indicator, sex: Sex) -> Result<&ReferenceTable, ScreeningError> {
        self.tables.get(&(indicator, sex)).ok_or_else(|| {
            ScreeningError::configuration(format!("no {indicator} reference table for {sex}"))
        })
    }

    /// Nearest-match lookup
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` outside the table coverage, or a configuration error
    /// when the table is missing
    pub fn lookup(
        &self,
        indicator: Indicator,
        sex: Sex,
        index: f64,
    ) -> Result<TableMatch<'_>, ScreeningError> {
        let table_match = self.table(indicator, sex)?.nearest(index)?;
        debug!(
            indicator = indicator.name(),
            sex = sex.as_str(),
            requested = index,
            used = table_match.entry.index,
            "Reference lookup"
        );
        Ok(table_match)
    }

    /// Linearly interpolated entry
    ///
    /// # Errors
    ///
    /// Returns `OutOfDomain` outside the table coverage, or a configuration error
    /// when the table is missing
    pub fn interpolate(
        &self,
        indicator: Indicator,
        sex: Sex,
        index: f64,
    ) -> Result<ReferenceEntry, ScreeningError> {
        self.table(indicator, sex)?.interpolate(index)
    }

    /// Covered index range for an indicator and sex
    #[must_use]
    pub fn coverage(&self, indicator: Indicator, sex: Sex) -> Option<(f64, f64)> {
        self.tables.get(&(indicator, sex)).map(ReferenceTable::coverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ReferenceTableStore {
        ReferenceTableStore::build().unwrap()
    }

    #[test]
    fn test_bundled_tables_are_valid() {
        let store = store();
        for indicator in Indicator::TABULATED {
            for sex in [Sex::Male, Sex::Female] {
                assert!(store.table(indicator, sex).is_ok(), "{indicator} {sex}");
            }
        }
        assert_eq!(store.version(), "WHO-2006");
    }

    #[test]
    fn test_bands_touch_and_cover_zero_to_infinity() {
        let store = store();
        let entry = store
            .lookup(Indicator::WeightForHeight, Sex::Female, 65.0)
            .unwrap()
            .entry;
        let bands = entry.bands();
        assert_eq!(bands.first().unwrap().min, 0.0);
        assert!(bands.last().unwrap().max.is_infinite());
        for pair in bands.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
        }
    }

    #[test]
    fn test_nearest_prefers_lower_index_on_ties() {
        let store = store();
        // 13.5 months sits 1.5 from both 12 and 15
        let table_match = store
            .lookup(Indicator::WeightForAge, Sex::Male, 13.5)
            .unwrap();
        assert_eq!(table_match.entry.index, 12.0);
        assert!(table_match.approximated());
    }

    #[test]
    fn test_exact_lookup_is_not_approximated() {
        let store = store();
        let table_match = store
            .lookup(Indicator::HeightForAge, Sex::Female, 24.0)
            .unwrap();
        assert_eq!(table_match.entry.index, 24.0);
        assert!(!table_match.approximated());
    }

    #[test]
    fn test_lookup_outside_coverage_is_out_of_domain() {
        let store = store();
        let error = store
            .lookup(Indicator::WeightForAge, Sex::Female, 72.0)
            .unwrap_err();
        assert!(error.is_indicator_scoped());
        assert!(store
            .lookup(Indicator::WeightForHeight, Sex::Male, 44.9)
            .is_err());
        assert!(store
            .lookup(Indicator::WeightForHeight, Sex::Male, 120.5)
            .is_err());
    }

    #[test]
    fn test_band_for_clamps_extremes() {
        let store = store();
        let entry = store
            .lookup(Indicator::WeightForAge, Sex::Male, 0.0)
            .unwrap()
            .entry;
        assert_eq!(entry.band_for(-1.0).category, Category::SeverelyUnderweight);
        assert_eq!(entry.band_for(500.0).category, Category::Overweight);
    }

    #[test]
    fn test_interpolation_between_rows() {
        let store = store();
        let entry = store
            .interpolate(Indicator::WeightForHeight, Sex::Female, 67.5)
            .unwrap();
        assert!((entry.median - 7.7).abs() < 1e-9);
        let cuts: Vec<f64> = entry.cuts().collect();
        assert!((cuts[0] - 6.0).abs() < 1e-9);
        assert!((cuts[3] - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_interpolation_at_row_returns_row() {
        let store = store();
        let entry = store
            .interpolate(Indicator::BmiForAge, Sex::Male, 24.0)
            .unwrap();
        assert_eq!(entry.index, 24.0);
        assert_eq!(entry.median, 16.0);
    }

    #[test]
    fn test_inconsistent_rows_are_rejected() {
        const BAD_ROWS: &[TableRow] = &[TableRow {
            index: 0.0,
            median: 3.0,
            cuts: &[2.5, 2.1, 4.5],
        }];
        let specs = [TableSpec {
            indicator: Indicator::WeightForAge,
            sex: Sex::Male,
            rows: BAD_ROWS,
        }];
        assert!(ReferenceTableStore::from_specs(&specs).is_err());
    }
}
