// ABOUTME: JSON-lines batch screening command for nutriscreen-cli
// ABOUTME: Streams an input file through the engine and writes one result line per record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use anyhow::Result;
use nutriscreen::batch::run_batch;
use nutriscreen::engine::ScreeningEngine;
use tracing::info;

use crate::helpers::display::display_batch_summary;

/// Screen a JSON-lines file
pub fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    info!("Screening batch file: {}", input.display());
    let engine = ScreeningEngine::global();
    let reader = BufReader::new(File::open(input)?);

    let summary = match output {
        Some(path) => run_batch(&engine, reader, BufWriter::new(File::create(path)?))?,
        None => run_batch(&engine, reader, io::stdout().lock())?,
    };

    display_batch_summary(&summary);
    Ok(())
}
