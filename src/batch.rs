// ABOUTME: JSON-lines batch screening over arbitrary readers and writers
// ABOUTME: Parses one measurement per line, screens in parallel and writes one result per line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Batch files hold one `MeasurementInput` JSON object per line. Each output
//! line is either a `ScreeningReport` or an `ErrorResponse`; both carry the
//! record id, which defaults to `line-<n>` when the input omits it.

use std::io::{BufRead, Write};
use std::time::Instant;

use chrono::Utc;
use nutriscreen_core::errors::{AppError, AppResult, ErrorResponse};
use rayon::prelude::*;
use tracing::debug;

use crate::engine::{BatchSummary, ScreeningEngine};
use crate::logging::ScreeningLogger;
use crate::report::{MeasurementInput, ScreeningReport};

/// Parse JSON-lines input
///
/// Blank lines are skipped. A malformed line becomes an error entry carrying
/// its line record id so the rest of the file is still screened.
///
/// # Errors
///
/// Returns a storage error when the reader fails
pub fn read_records<R: BufRead>(reader: R) -> AppResult<Vec<AppResult<MeasurementInput>>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_id = format!("line-{}", index + 1);
        let record = serde_json::from_str::<MeasurementInput>(&line)
            .map(|mut input| {
                if input.record_id.is_none() {
                    input.record_id = Some(line_id.clone());
                }
                input
            })
            .map_err(|e| AppError::from(e).with_record_id(line_id));
        records.push(record);
    }
    debug!(records = records.len(), "Batch input parsed");
    Ok(records)
}

/// Write one JSON line per result
///
/// # Errors
///
/// Returns an error when serialization or the writer fails
pub fn write_results<W: Write>(
    mut writer: W,
    results: &[AppResult<ScreeningReport>],
) -> AppResult<()> {
    for result in results {
        match result {
            Ok(report) => serde_json::to_writer(&mut writer, report)?,
            Err(error) => serde_json::to_writer(&mut writer, &ErrorResponse::from(error))?,
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Screen a JSON-lines stream and write the results
///
/// # Errors
///
/// Returns an error when reading or writing fails. Rejected records never
/// fail the batch.
pub fn run_batch<R: BufRead, W: Write>(
    engine: &ScreeningEngine<'_>,
    reader: R,
    writer: W,
) -> AppResult<BatchSummary> {
    let started = Instant::now();
    let today = Utc::now().date_naive();

    let results: Vec<AppResult<ScreeningReport>> = read_records(reader)?
        .into_par_iter()
        .map(|record| record.and_then(|input| engine.screen_input(&input, today)))
        .collect();

    for error in results.iter().filter_map(|result| result.as_ref().err()) {
        ScreeningLogger::log_rejection(error);
    }
    write_results(writer, &results)?;

    let summary = BatchSummary::from_results(&results);
    let elapsed = started.elapsed();
    ScreeningLogger::log_batch_summary(&summary, elapsed);
    if summary.total > 0 && !elapsed.is_zero() {
        ScreeningLogger::log_performance_metric(
            "batch_throughput",
            summary.total as f64 / elapsed.as_secs_f64(),
            "records/s",
        );
    }
    Ok(summary)
}
