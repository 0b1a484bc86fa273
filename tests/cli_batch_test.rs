// ABOUTME: Tests for JSON-lines batch screening through files
// ABOUTME: Validates per-line reports, error lines with record ids and batch summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::PathBuf;

use nutriscreen::batch::run_batch;
use nutriscreen::errors::ErrorResponse;
use nutriscreen::growth::RiskBand;
use nutriscreen::report::ScreeningReport;
use serde_json::Value;
use tempfile::TempDir;

const INPUT: &str = r#"{"record_id": "child-1", "weight_kg": 12.2, "height_cm": 87.1, "muac_cm": 14.0, "birth_date": "2022-06-01", "sex": "male", "observation_date": "2024-06-01"}
{"record_id": "child-2", "weight_kg": 9.0, "height_cm": 85.0, "muac_cm": 11.0, "birth_date": "2021-12-01", "sex": "female", "observation_date": "2024-06-01", "diet_pattern": "vegetarian"}

{"record_id": "child-3", "weight_kg": -4.0, "height_cm": 85.0, "birth_date": "2021-12-01", "sex": "female", "observation_date": "2024-06-01"}
this is not json
{"weight_kg": 29.0, "height_cm": 125.0, "birth_date": "2016-12-01", "sex": "m", "observation_date": "2024-06-01"}
"#;

fn write_input(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("visits.jsonl");
    let mut file = File::create(&path).unwrap();
    file.write_all(INPUT.as_bytes()).unwrap();
    path
}

#[test]
fn test_batch_file_round_trip() {
    let store = common::store();
    let engine = common::engine(&store);
    let dir = TempDir::new().unwrap();
    let input_path = write_input(&dir);
    let output_path = dir.path().join("reports.jsonl");

    let summary = run_batch(
        &engine,
        BufReader::new(File::open(&input_path).unwrap()),
        File::create(&output_path).unwrap(),
    )
    .unwrap();

    assert_eq!(summary.total, 5);
    assert_eq!(summary.screened, 3);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.partial_results, 1);
    assert_eq!(summary.by_risk_band.get(&RiskBand::Low), Some(&2));
    assert_eq!(summary.by_risk_band.get(&RiskBand::Moderate), Some(&1));

    let output = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);

    let first: ScreeningReport = serde_json::from_value(lines[0].clone()).unwrap();
    assert_eq!(first.record_id.as_deref(), Some("child-1"));
    assert_eq!(first.risk_score, 0);

    let second: ScreeningReport = serde_json::from_value(lines[1].clone()).unwrap();
    assert_eq!(second.record_id.as_deref(), Some("child-2"));
    // 40 (MUAC < 11.5) + 3 (vegetarian)
    assert_eq!(second.risk_score, 43);

    let rejected: ErrorResponse = serde_json::from_value(lines[2].clone()).unwrap();
    assert_eq!(rejected.error.record_id.as_deref(), Some("child-3"));
    assert_eq!(lines[2]["error"]["code"], "INVALID_INPUT");
    assert!(rejected.error.screening_id.is_some());

    let malformed: ErrorResponse = serde_json::from_value(lines[3].clone()).unwrap();
    assert_eq!(malformed.error.record_id.as_deref(), Some("line-5"));

    let partial: ScreeningReport = serde_json::from_value(lines[4].clone()).unwrap();
    assert_eq!(partial.record_id.as_deref(), Some("line-6"));
    assert_eq!(partial.failed_indicators(), 3);
}

#[test]
fn test_empty_input_produces_empty_output() {
    let store = common::store();
    let engine = common::engine(&store);
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("empty.jsonl");
    File::create(&input_path).unwrap();
    let output_path = dir.path().join("out.jsonl");

    let summary = run_batch(
        &engine,
        BufReader::new(File::open(&input_path).unwrap()),
        File::create(&output_path).unwrap(),
    )
    .unwrap();

    assert_eq!(summary.total, 0);
    assert!(fs::read_to_string(&output_path).unwrap().is_empty());
}
