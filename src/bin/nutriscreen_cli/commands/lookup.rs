// ABOUTME: Reference table lookup command for nutriscreen-cli
// ABOUTME: Prints the nearest reference entry and its bands for an indicator, sex and index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use anyhow::Result;
use nutriscreen::growth::ReferenceTableStore;
use nutriscreen::models::{Indicator, Sex};
use serde_json::json;

use crate::helpers::display::print_json;

/// Print the reference entry used for a lookup
pub fn run(indicator: &str, sex: &str, index: f64) -> Result<()> {
    let indicator: Indicator = indicator.parse()?;
    let sex: Sex = sex.parse()?;

    let table_match = ReferenceTableStore::global().lookup(indicator, sex, index)?;
    print_json(&json!({
        "requested_index": table_match.requested,
        "approximated": table_match.approximated(),
        "entry": table_match.entry,
    }))?;
    Ok(())
}
