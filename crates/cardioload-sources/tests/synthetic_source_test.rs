// ABOUTME: Integration tests for the synthetic data source and the sample query builder
// ABOUTME: Covers capability filtering, failure injection, and sequential source ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use cardioload_core::models::{ActivityKind, ActivityKinds, MetricKind, MetricKinds, Season};
use cardioload_sources::{
    AuthorizationStatus, DataSource, SampleQuery, SourceCapabilities, SourceError, SyntheticSource,
};
use chrono::{Duration, TimeZone, Utc};

fn season() -> Season {
    let end = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();
    Season::ending_at(end, Duration::days(1))
}

fn heart_rate_source(name: &str, bpm: f64) -> SyntheticSource {
    SyntheticSource::new(name).with_samples(SyntheticSource::steady_session(
        ActivityKind::Running,
        season().start() + Duration::hours(7),
        30,
        bpm,
    ))
}

#[tokio::test]
async fn test_fetch_filters_by_activity_metric_and_season() {
    let source = heart_rate_source("watch", 140.0);
    source
        .add_samples(SyntheticSource::steady_session(
            ActivityKind::Running,
            season().end() + Duration::hours(1),
            10,
            150.0,
        ))
        .unwrap();

    let running = source
        .fetch(ActivityKind::Running, MetricKind::HeartRate, &season())
        .await
        .unwrap();
    assert_eq!(running.len(), 31);

    let cycling = source
        .fetch(ActivityKind::Cycling, MetricKind::HeartRate, &season())
        .await
        .unwrap();
    assert!(cycling.is_empty());
    assert_eq!(source.sample_count().unwrap(), 42);
}

#[tokio::test]
async fn test_failure_injection_and_recovery() {
    let source = heart_rate_source("watch", 140.0).failing("bluetooth dropped");
    let err = source
        .fetch(ActivityKind::Running, MetricKind::HeartRate, &season())
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::FetchFailed { .. }));
    assert!(err.is_transient());

    source.set_failure(None).unwrap();
    assert!(source
        .fetch(ActivityKind::Running, MetricKind::HeartRate, &season())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_unavailable_source() {
    let source = heart_rate_source("watch", 140.0);
    source.set_available(false).unwrap();
    assert!(!source.is_available().await);
    assert!(matches!(
        source.request_authorization(MetricKinds::HEART_RATE).await,
        Err(SourceError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn test_authorization_handshake() {
    let source = SyntheticSource::new("scale").with_capabilities(SourceCapabilities::new(
        ActivityKinds::GENERAL,
        MetricKinds::BODY_MASS,
    ));
    assert_eq!(
        source
            .request_authorization(MetricKinds::BODY_MASS)
            .await
            .unwrap(),
        AuthorizationStatus::Authorized
    );
    assert_eq!(
        source
            .request_authorization(MetricKinds::HEART_RATE)
            .await
            .unwrap(),
        AuthorizationStatus::Denied
    );

    source.set_authorization(AuthorizationStatus::Denied).unwrap();
    let err = source
        .fetch(ActivityKind::General, MetricKind::BodyMass, &season())
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_default_units_follow_capabilities() {
    let source = SyntheticSource::new("watch");
    let units = source.default_units();
    assert_eq!(
        units.get(&MetricKind::HeartRate),
        Some(&MetricKind::HeartRate.canonical_unit())
    );
    assert!(!units.contains_key(&MetricKind::TrainingLoad));
}

#[tokio::test]
async fn test_query_selects_qualifying_sources_in_order() {
    let running_only = Arc::new(heart_rate_source("running-only", 120.0).with_capabilities(
        SourceCapabilities::new(ActivityKinds::RUNNING, MetricKinds::HEART_RATE),
    ));
    let first = Arc::new(heart_rate_source("first", 130.0));
    let second = Arc::new(heart_rate_source("second", 150.0));
    let sources: Vec<Arc<dyn DataSource>> = vec![running_only, first.clone(), second.clone()];

    let query = SampleQuery::new(MetricKind::HeartRate, season())
        .with_activities(ActivityKinds::high_intensity());
    let qualifying = query.qualifying(&sources);
    let names: Vec<&str> = qualifying.iter().map(|source| source.name()).collect();
    assert_eq!(names, vec!["first", "second"]);

    let series = query.collect_strict(&qualifying).await.unwrap();
    assert_eq!(series.len(), 62);
    assert_eq!(
        first.fetch_log().unwrap(),
        vec![
            (ActivityKind::Running, MetricKind::HeartRate),
            (ActivityKind::Cycling, MetricKind::HeartRate),
        ]
    );
    assert_eq!(second.fetch_log().unwrap().len(), 2);
}

#[tokio::test]
async fn test_strict_collection_propagates_and_lenient_swallows() {
    let healthy = heart_rate_source("healthy", 140.0);
    let broken = heart_rate_source("broken", 160.0).failing("timeout");
    let sources: Vec<&dyn DataSource> = vec![&broken, &healthy];

    let query = SampleQuery::new(MetricKind::HeartRate, season())
        .with_activities(ActivityKinds::RUNNING);
    assert!(query.collect_strict(&sources).await.is_err());

    let series = query.collect_lenient(&sources).await;
    assert_eq!(series.len(), 31);
}

#[tokio::test]
async fn test_any_activity_query_fetches_declared_kinds_and_general() {
    let source = SyntheticSource::new("strap").with_capabilities(SourceCapabilities::new(
        ActivityKinds::RUNNING | ActivityKinds::CYCLING,
        MetricKinds::RESTING_HEART_RATE,
    ));
    let query = SampleQuery::any_activity(MetricKind::RestingHeartRate, season());

    query.fetch_from(&source).await.unwrap();

    assert_eq!(
        source.fetch_log().unwrap(),
        vec![
            (ActivityKind::Running, MetricKind::RestingHeartRate),
            (ActivityKind::Cycling, MetricKind::RestingHeartRate),
            (ActivityKind::General, MetricKind::RestingHeartRate),
        ]
    );
}
