// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and on-disk source documents for session tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `cardioload`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use cardioload_core::models::{ActivityKind, BiologicalSex, MetricKind, Sample};
use cardioload_sources::{SourceDocument, SyntheticSource};
use chrono::{DateTime, Duration, TimeZone, Utc};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Exclusive end of the reference day, 2025-03-02T00:00Z
pub fn day_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap()
}

/// 07:00 on the reference day
pub fn morning() -> DateTime<Utc> {
    day_end() - Duration::hours(17)
}

/// Chest strap document: 60 minutes at 150 bpm plus resting heart rates ending at 60 bpm
pub fn reference_document(sex: Option<BiologicalSex>) -> SourceDocument {
    let mut samples: Vec<Sample> =
        SyntheticSource::steady_session(ActivityKind::Running, morning(), 60, 150.0);
    samples.extend(SyntheticSource::resting_heart_rates(
        day_end(),
        &[62.0, 61.0, 60.0],
    ));
    SourceDocument {
        name: "chest-strap".into(),
        activities: vec![
            ActivityKind::Running,
            ActivityKind::Cycling,
            ActivityKind::General,
        ],
        metrics: vec![MetricKind::HeartRate, MetricKind::RestingHeartRate],
        biological_sex: sex,
        date_of_birth: None,
        samples,
    }
}

/// Write `document` as JSON into `dir` and return its path
pub fn write_document(dir: &Path, file_name: &str, document: &SourceDocument) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    path
}
