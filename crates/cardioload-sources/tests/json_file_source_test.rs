// ABOUTME: Integration tests for the JSON file data source
// ABOUTME: Writes documents to temporary files and reads them back through the DataSource trait
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use cardioload_core::models::{ActivityKind, ActivityKinds, BiologicalSex, MetricKind, MetricKinds, Season};
use cardioload_sources::{DataSource, JsonFileSource, SourceDocument, SourceError, SyntheticSource};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

fn season() -> Season {
    let end = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();
    Season::ending_at(end, Duration::days(1))
}

#[tokio::test]
async fn test_load_document_and_fetch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strap.json");
    let document = SourceDocument {
        name: "strap".to_owned(),
        activities: vec![ActivityKind::Running, ActivityKind::Cycling],
        metrics: vec![MetricKind::HeartRate],
        biological_sex: Some(BiologicalSex::Female),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
        samples: SyntheticSource::steady_session(
            ActivityKind::Cycling,
            season().start() + Duration::hours(18),
            45,
            135.0,
        ),
    };
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

    let source = JsonFileSource::load(&path).await.unwrap();
    assert_eq!(source.name(), "strap");
    assert!(source.is_available().await);
    assert!(source
        .capabilities()
        .supports(ActivityKinds::high_intensity(), MetricKinds::HEART_RATE));
    assert_eq!(
        source.biological_sex().await.unwrap(),
        Some(BiologicalSex::Female)
    );

    let samples = source
        .fetch(ActivityKind::Cycling, MetricKind::HeartRate, &season())
        .await
        .unwrap();
    assert_eq!(samples.len(), 46);
}

#[tokio::test]
async fn test_minimal_document_without_sample_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    fs::write(
        &path,
        r#"{
            "name": "minimal",
            "activities": ["running"],
            "metrics": ["heart_rate"],
            "samples": [{
                "activity": "running",
                "metric": "heart_rate",
                "start_date": "2025-03-01T07:00:00Z",
                "end_date": "2025-03-01T07:00:00Z",
                "measurement": { "value": 142.0, "unit": "beats_per_minute" }
            }]
        }"#,
    )
    .unwrap();

    let source = JsonFileSource::load(&path).await.unwrap();
    assert_eq!(source.biological_sex().await.unwrap(), None);
    let samples = source
        .fetch(ActivityKind::Running, MetricKind::HeartRate, &season())
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn test_missing_and_malformed_documents() {
    let dir = TempDir::new().unwrap();
    let missing = JsonFileSource::load(dir.path().join("nope.json")).await;
    assert!(matches!(missing, Err(SourceError::Io { .. })));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let broken = JsonFileSource::load(&path).await;
    assert!(matches!(broken, Err(SourceError::Parse { .. })));
}
