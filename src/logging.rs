// ABOUTME: Logging configuration and structured logging setup for screening runs
// ABOUTME: Configures log levels, formatters and structured screening event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Structured logging for the screening engine and CLI

use std::env;
use std::io;
use std::time::Duration;

use anyhow::Result;
use nutriscreen_core::errors::AppError;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::engine::BatchSummary;
use crate::report::ScreeningReport;

/// Default service name in structured logs
pub const SERVICE_NAME: &str = "nutriscreen";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals and batch runs
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level (CLI `--verbose`)
    ///
    /// An explicit level replaces whatever `RUST_LOG` held.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter from the configured level
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            // Rayon worker noise stays out of screening logs
            .add_directive("rayon=warn".parse().unwrap_or_else(|_| LevelFilter::WARN.into()))
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so JSON reports on stdout stay machine-readable.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "NutriScreen starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

/// Screening-specific logging utilities
pub struct ScreeningLogger;

impl ScreeningLogger {
    /// Log a completed screening
    pub fn log_screening(report: &ScreeningReport, duration: Duration) {
        info!(
            screening.id = %report.screening_id,
            screening.record = report.record_id.as_deref().unwrap_or("-"),
            screening.age_months = report.age_months,
            screening.risk_score = report.risk_score,
            screening.risk_band = %report.risk_band,
            screening.nutritional_risk = %report.nutritional_risk,
            screening.failed_indicators = report.failed_indicators(),
            screening.duration_us = duration.as_micros() as u64,
            "Screening completed"
        );
        if report.critical_alert {
            Self::log_critical_alert(report);
        }
    }

    /// Log a critical alert
    pub fn log_critical_alert(report: &ScreeningReport) {
        warn!(
            screening.id = %report.screening_id,
            screening.record = report.record_id.as_deref().unwrap_or("-"),
            screening.risk_score = report.risk_score,
            screening.risk_basis = ?report.risk_basis,
            "Critical malnutrition alert"
        );
    }

    /// Log a record rejected during batch screening
    pub fn log_rejection(error: &AppError) {
        warn!(
            record_id = error.context.record_id.as_deref().unwrap_or("-"),
            screening_id = ?error.context.screening_id,
            code = ?error.code,
            "Record rejected: {}",
            error.message
        );
    }

    /// Log a batch summary
    pub fn log_batch_summary(summary: &BatchSummary, duration: Duration) {
        info!(
            batch.total = summary.total,
            batch.screened = summary.screened,
            batch.failed = summary.failed,
            batch.critical_alerts = summary.critical_alerts,
            batch.partial_results = summary.partial_results,
            batch.duration_ms = duration.as_millis() as u64,
            "Batch screening completed"
        );
    }

    /// Log a performance metric
    pub fn log_performance_metric(metric_name: &str, value: f64, unit: &str) {
        info!(
            metric.name = %metric_name,
            metric.value = %value,
            metric.unit = %unit,
            "Performance metric"
        );
    }
}
