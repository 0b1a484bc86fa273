// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors
// ABOUTME: Output formatting helpers for nutriscreen-cli
// ABOUTME: Provides JSON output and human-readable report and batch summaries

use anyhow::Result;
use nutriscreen::engine::BatchSummary;
use nutriscreen::report::ScreeningReport;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a screening report for a terminal
pub fn display_report(report: &ScreeningReport) {
    println!("\nScreening {}", report.screening_id);
    println!("{}", "=".repeat(60));
    println!("   Age: {} months", report.age_months);
    println!("   BMI: {:.2}", report.bmi);

    println!("\nINDICATORS:");
    for indicator in &report.indicators {
        match (&indicator.category, &indicator.error) {
            (Some(category), _) => {
                let marker = if indicator.approximated == Some(true) {
                    " (approx.)"
                } else {
                    ""
                };
                println!(
                    "   {:<20} {}{marker}",
                    indicator.indicator_name.label(),
                    category.label()
                );
            }
            (None, Some(error)) => {
                println!("   {:<20} n/a: {error}", indicator.indicator_name.label());
            }
            (None, None) => {}
        }
    }

    println!("\nRISK:");
    println!(
        "   Score: {}/100 ({}, based on {})",
        report.risk_score,
        report.risk_band,
        report.risk_basis.name()
    );
    if report.critical_alert {
        println!("   CRITICAL: immediate attention required");
    }
    println!("   Nutritional risk: {}", report.nutritional_risk);
    for factor in &report.risk_factors {
        println!("   - {factor}");
    }

    if !report.notices.is_empty() {
        println!("\nNOTICES:");
        for notice in &report.notices {
            println!("   - {notice}");
        }
    }

    println!("\nRECOMMENDATIONS:");
    for (position, recommendation) in report.recommendations.iter().enumerate() {
        println!("{}. {recommendation}", position + 1);
    }
}

/// Display batch totals on stderr so stdout stays valid JSON lines
pub fn display_batch_summary(summary: &BatchSummary) {
    eprintln!("\nBatch complete: {} records", summary.total);
    eprintln!("   Screened: {}", summary.screened);
    eprintln!("   Rejected: {}", summary.failed);
    eprintln!("   Partial results: {}", summary.partial_results);
    eprintln!("   Critical alerts: {}", summary.critical_alerts);
    for (band, count) in &summary.by_risk_band {
        eprintln!("   Risk {band}: {count}");
    }
}
