// ABOUTME: Growth classifier backed by the reference table store
// ABOUTME: Table mode scans the nearest row's bands, z-score mode interpolates and scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use nutriscreen_core::errors::ScreeningError;
use nutriscreen_core::models::{ClassificationResult, Indicator, Sex};
use tracing::debug;

use super::{zscore, IndicatorClassifier};
use crate::config::ClassificationMode;
use crate::reference::ReferenceTableStore;

/// Classifier for one tabulated indicator
///
/// Table mode picks the nearest reference row and returns the band containing
/// the value, clamping extremes into the outermost categories. Z-score mode
/// interpolates the row at the exact index and derives the category from the
/// value's z-score.
#[derive(Debug, Clone, Copy)]
pub struct GrowthClassifier<'a> {
    indicator: Indicator,
    mode: ClassificationMode,
    store: &'a ReferenceTableStore,
}

impl<'a> GrowthClassifier<'a> {
    /// Create a classifier for a tabulated indicator
    #[must_use]
    pub const fn new(
        indicator: Indicator,
        mode: ClassificationMode,
        store: &'a ReferenceTableStore,
    ) -> Self {
        Self {
            indicator,
            mode,
            store,
        }
    }

    /// Weight-for-age classifier
    #[must_use]
    pub const fn weight_for_age(mode: ClassificationMode, store: &'a ReferenceTableStore) -> Self {
        Self::new(Indicator::WeightForAge, mode, store)
    }

    /// Height/length-for-age classifier
    #[must_use]
    pub const fn height_for_age(mode: ClassificationMode, store: &'a ReferenceTableStore) -> Self {
        Self::new(Indicator::HeightForAge, mode, store)
    }

    /// Weight-for-height/length classifier
    #[must_use]
    pub const fn weight_for_height(
        mode: ClassificationMode,
        store: &'a ReferenceTableStore,
    ) -> Self {
        Self::new(Indicator::WeightForHeight, mode, store)
    }

    /// BMI-for-age classifier (pediatric range only)
    #[must_use]
    pub const fn bmi_for_age(mode: ClassificationMode, store: &'a ReferenceTableStore) -> Self {
        Self::new(Indicator::BmiForAge, mode, store)
    }

    fn classify_table(
        &self,
        value: f64,
        index: f64,
        sex: Sex,
    ) -> Result<ClassificationResult, ScreeningError> {
        let table_match = self.store.lookup(self.indicator, sex, index)?;
        let entry = table_match.entry;
        let category = entry.band_for(value).category;
        let result = ClassificationResult::new(
            self.indicator,
            category,
            entry.index,
            table_match.approximated(),
        );

        if table_match.approximated() {
            Ok(result.with_note(format!(
                "nearest reference row {} {} used for {} {}",
                entry.index,
                self.indicator.index_unit(),
                index,
                self.indicator.index_unit()
            )))
        } else {
            Ok(result)
        }
    }

    fn classify_z_score(
        &self,
        value: f64,
        index: f64,
        sex: Sex,
    ) -> Result<ClassificationResult, ScreeningError> {
        let entry = self.store.interpolate(self.indicator, sex, index)?;
        let z = zscore::z_score(&entry, value);
        let category = zscore::category_for(self.indicator, z);
        Ok(
            ClassificationResult::new(self.indicator, category, index, false)
                .with_z_score(zscore::round_z(z)),
        )
    }
}

impl IndicatorClassifier for GrowthClassifier<'_> {
    fn indicator(&self) -> Indicator {
        self.indicator
    }

    fn classify(
        &self,
        value: f64,
        index: f64,
        sex: Sex,
    ) -> Result<ClassificationResult, ScreeningError> {
        let result = match self.mode {
            ClassificationMode::Table => self.classify_table(value, index, sex)?,
            ClassificationMode::ZScore => self.classify_z_score(value, index, sex)?,
        };
        debug!(
            indicator = self.indicator.name(),
            mode = self.mode.name(),
            value,
            index,
            category = result.category.label(),
            "Indicator classified"
        );
        Ok(result)
    }
}
