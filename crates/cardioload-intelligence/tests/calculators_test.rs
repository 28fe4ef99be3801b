// ABOUTME: Integration tests for the training load calculators over synthetic data sources
// ABOUTME: Covers reference sessions, gating order, parameter failures, and daily degradation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use cardioload_core::errors::ErrorCode;
use cardioload_core::models::{
    ActivityKind, ActivityKinds, BiologicalSex, LoadDetails, LoadMethod, MetricKinds, Season,
};
use cardioload_core::units::UnitId;
use cardioload_intelligence::calculators::{
    AcuteChronicCalculator, BanisterCalculator, EdwardsCalculator, LoadCalculator, LuciaCalculator,
};
use cardioload_intelligence::config::WorkloadConfig;
use cardioload_intelligence::profile::AthleteProfile;
use cardioload_sources::{DataSource, SourceCapabilities, SyntheticSource};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn day_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap()
}

fn one_day() -> Season {
    Season::ending_at(day_end(), Duration::days(1))
}

fn morning() -> DateTime<Utc> {
    one_day().start() + Duration::hours(7)
}

fn as_sources(source: SyntheticSource) -> Vec<Arc<dyn DataSource>> {
    vec![Arc::new(source)]
}

fn profile(sources: &[Arc<dyn DataSource>], age: u32) -> Arc<AthleteProfile> {
    Arc::new(AthleteProfile::new("Test Athlete", sources.to_vec()).with_age(age))
}

/// 60 minutes at 150 bpm with a 60 bpm resting heart rate
fn reference_source() -> SyntheticSource {
    SyntheticSource::new("watch")
        .with_samples(SyntheticSource::steady_session(
            ActivityKind::Running,
            morning(),
            60,
            150.0,
        ))
        .with_samples(SyntheticSource::resting_heart_rates(day_end(), &[62.0, 61.0, 60.0]))
}

fn running_only() -> SourceCapabilities {
    SourceCapabilities::new(ActivityKinds::RUNNING, MetricKinds::HEART_RATE)
}

#[tokio::test]
async fn test_banister_reference_session_male() {
    let sources = as_sources(reference_source());
    let athlete = AthleteProfile::new("Test Athlete", sources.clone())
        .with_age(40)
        .with_biological_sex(BiologicalSex::Male);
    let calculator = BanisterCalculator::new(Arc::new(athlete));

    let result = calculator.compute(&sources, &one_day()).await.unwrap();

    assert_eq!(result.unit(), UnitId::BanisterTrimp);
    assert!((result.value() - 121.6).abs() < 0.1, "got {}", result.value());
    assert_eq!(result.start_date, one_day().start());
    assert_eq!(result.end_date, one_day().end());
    match result.details {
        LoadDetails::Banister {
            duration_minutes,
            heart_rate_reserve,
            resting_heart_rate,
            max_heart_rate,
            ..
        } => {
            assert!((duration_minutes - 60.0).abs() < 1e-9);
            assert!((heart_rate_reserve - 0.75).abs() < 1e-9);
            assert!((resting_heart_rate - 60.0).abs() < 1e-9);
            assert!((max_heart_rate - 180.0).abs() < 1e-9);
        }
        other => panic!("unexpected details {other:?}"),
    }
}

#[tokio::test]
async fn test_banister_reference_session_female_from_source() {
    let sources = as_sources(reference_source().with_biological_sex(BiologicalSex::Female));
    let calculator = BanisterCalculator::new(profile(&sources, 40));

    let result = calculator.compute(&sources, &one_day()).await.unwrap();

    assert!((result.value() - 135.3).abs() < 0.2, "got {}", result.value());
}

#[tokio::test]
async fn test_banister_without_resting_heart_rate() {
    let sources = as_sources(SyntheticSource::new("watch").with_samples(
        SyntheticSource::steady_session(ActivityKind::Cycling, morning(), 45, 140.0),
    ));
    let calculator = BanisterCalculator::new(profile(&sources, 40));

    let error = calculator.compute(&sources, &one_day()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredParameter);
}

#[tokio::test]
async fn test_banister_mean_below_resting_is_rejected() {
    let source = SyntheticSource::new("watch")
        .with_samples(SyntheticSource::steady_session(
            ActivityKind::Running,
            morning(),
            30,
            55.0,
        ))
        .with_samples(SyntheticSource::resting_heart_rates(day_end(), &[60.0]));
    let sources = as_sources(source);
    let calculator = BanisterCalculator::new(profile(&sources, 40));

    let error = calculator.compute(&sources, &one_day()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredParameter);
}

#[tokio::test]
async fn test_edwards_reference_distribution() {
    let segments = [(10.0, 110.0), (15.0, 130.0), (20.0, 150.0), (10.0, 170.0), (5.0, 190.0)];
    let sources = as_sources(SyntheticSource::new("watch").with_samples(
        SyntheticSource::segmented_session(ActivityKind::Cycling, morning(), &segments),
    ));
    let calculator = EdwardsCalculator::new(profile(&sources, 20));

    let result = calculator.compute(&sources, &one_day()).await.unwrap();

    assert_eq!(result.unit(), UnitId::EdwardsTrimp);
    assert!((result.value() - 165.0).abs() < 1e-6, "got {}", result.value());
}

#[tokio::test]
async fn test_edwards_skips_time_outside_zones() {
    let segments = [(30.0, 80.0), (10.0, 150.0)];
    let sources = as_sources(SyntheticSource::new("watch").with_samples(
        SyntheticSource::segmented_session(ActivityKind::Running, morning(), &segments),
    ));
    let calculator = EdwardsCalculator::new(profile(&sources, 20));

    let result = calculator.compute(&sources, &one_day()).await.unwrap();

    assert!((result.value() - 30.0).abs() < 1e-6);
    let LoadDetails::Edwards {
        skipped_minutes, ..
    } = result.details
    else {
        panic!("unexpected details");
    };
    assert!((skipped_minutes - 30.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_edwards_invariant_under_segment_reordering() {
    let forward = [(10.0, 110.0), (15.0, 150.0), (5.0, 115.0), (20.0, 155.0)];
    let shuffled = [(20.0, 155.0), (5.0, 115.0), (15.0, 150.0), (10.0, 110.0)];
    let mut values = Vec::new();
    for segments in [forward, shuffled] {
        let sources = as_sources(SyntheticSource::new("watch").with_samples(
            SyntheticSource::segmented_session(ActivityKind::Running, morning(), &segments),
        ));
        let calculator = EdwardsCalculator::new(profile(&sources, 20));
        values.push(calculator.compute(&sources, &one_day()).await.unwrap().value());
    }
    assert!((values[0] - values[1]).abs() < 1e-6);
}

#[tokio::test]
async fn test_edwards_without_any_max_heart_rate() {
    let end = day_end();
    let season = Season::ending_at(end, Duration::days(365));
    let old_session = end - Duration::days(300);
    let sources = as_sources(SyntheticSource::new("watch").with_samples(
        SyntheticSource::steady_session(ActivityKind::Running, old_session, 30, 150.0),
    ));
    let athlete = Arc::new(AthleteProfile::new("No Age", sources.clone()));

    let error = EdwardsCalculator::new(athlete)
        .compute(&sources, &season)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredParameter);
}

#[tokio::test]
async fn test_lucia_reference_distribution() {
    let segments = [(20.0, 130.0), (25.0, 160.0), (15.0, 180.0)];
    let sources = as_sources(SyntheticSource::new("watch").with_samples(
        SyntheticSource::segmented_session(ActivityKind::Running, morning(), &segments),
    ));
    let calculator = LuciaCalculator::with_thresholds(150.0, 170.0);

    let result = calculator.compute(&sources, &one_day()).await.unwrap();

    assert_eq!(result.unit(), UnitId::LuciaTrimp);
    assert!((result.value() - 115.0).abs() < 1e-6, "got {}", result.value());
}

#[tokio::test]
async fn test_lucia_invariant_under_segment_reordering() {
    let forward = [(10.0, 130.0), (15.0, 160.0), (5.0, 180.0), (20.0, 140.0)];
    let shuffled = [(5.0, 180.0), (20.0, 140.0), (10.0, 130.0), (15.0, 160.0)];
    let calculator = LuciaCalculator::with_thresholds(150.0, 170.0);
    let mut values = Vec::new();
    for segments in [forward, shuffled] {
        let sources = as_sources(SyntheticSource::new("watch").with_samples(
            SyntheticSource::segmented_session(ActivityKind::Running, morning(), &segments),
        ));
        values.push(calculator.compute(&sources, &one_day()).await.unwrap().value());
    }
    // 30 min zone 1, 15 min zone 2, 5 min zone 3
    assert!((values[0] - 75.0).abs() < 1e-6, "got {}", values[0]);
    assert!((values[0] - values[1]).abs() < 1e-6);
}

#[tokio::test]
async fn test_lucia_threshold_failures() {
    let sources = as_sources(reference_source());

    let missing = LuciaCalculator::new(None)
        .compute(&sources, &one_day())
        .await
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::MissingRequiredParameter);

    let inverted = LuciaCalculator::with_thresholds(170.0, 150.0)
        .compute(&sources, &one_day())
        .await
        .unwrap_err();
    assert_eq!(inverted.code, ErrorCode::MissingRequiredParameter);
}

#[tokio::test]
async fn test_lucia_checks_sources_before_thresholds() {
    let sources = as_sources(SyntheticSource::new("watch").with_capabilities(running_only()));
    let error = LuciaCalculator::new(None)
        .compute(&sources, &one_day())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::NoSupportedActivities);
}

#[tokio::test]
async fn test_every_calculator_requires_a_qualifying_source() {
    let unqualified = SyntheticSource::new("run-only")
        .with_capabilities(running_only())
        .with_samples(SyntheticSource::steady_session(
            ActivityKind::Running,
            morning(),
            30,
            150.0,
        ));
    let sources = as_sources(unqualified);
    let athlete = profile(&sources, 40);
    let banister = BanisterCalculator::new(athlete.clone());

    let calculators: Vec<Box<dyn LoadCalculator>> = vec![
        Box::new(banister.clone()),
        Box::new(EdwardsCalculator::new(athlete)),
        Box::new(LuciaCalculator::with_thresholds(150.0, 170.0)),
        Box::new(AcuteChronicCalculator::new(banister)),
    ];
    for calculator in calculators {
        let error = calculator.compute(&sources, &one_day()).await.unwrap_err();
        assert_eq!(
            error.code,
            ErrorCode::NoSupportedActivities,
            "{}",
            calculator.method()
        );
    }
}

#[tokio::test]
async fn test_no_samples_gives_no_supported_metrics() {
    let sources = as_sources(SyntheticSource::new("empty"));
    let athlete = profile(&sources, 40);

    let calculators: Vec<Box<dyn LoadCalculator>> = vec![
        Box::new(BanisterCalculator::new(athlete.clone())),
        Box::new(EdwardsCalculator::new(athlete)),
        Box::new(LuciaCalculator::with_thresholds(150.0, 170.0)),
    ];
    for calculator in calculators {
        let error = calculator.compute(&sources, &one_day()).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::NoSupportedMetrics, "{}", calculator.method());
    }
}

#[tokio::test]
async fn test_failing_qualifying_source_gates_single_session_methods() {
    let sources = as_sources(reference_source().failing("sync error"));
    let error = LuciaCalculator::with_thresholds(150.0, 170.0)
        .compute(&sources, &one_day())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::SourceUnavailable);
}

fn sessions_only(end: DateTime<Utc>, minutes: impl Fn(i64) -> u32) -> SyntheticSource {
    let source = SyntheticSource::new("watch");
    for day in 0..28 {
        let start = end - Duration::days(28 - day) + Duration::hours(7);
        source
            .add_samples(SyntheticSource::steady_session(
                ActivityKind::Running,
                start,
                minutes(day),
                150.0,
            ))
            .unwrap();
    }
    source
}

fn training_block(end: DateTime<Utc>, minutes: impl Fn(i64) -> u32) -> SyntheticSource {
    sessions_only(end, minutes).with_samples(SyntheticSource::resting_heart_rates(end, &[60.0; 60]))
}

fn block_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 29, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn test_acute_chronic_ramp() {
    let sources = as_sources(training_block(block_end(), |day| if day < 21 { 40 } else { 60 }));
    let calculator = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&sources, 40)));
    let season = Season::ending_at(block_end(), Duration::days(7));

    let result = calculator.compute(&sources, &season).await.unwrap();

    assert_eq!(result.method, LoadMethod::AcuteChronic);
    assert_eq!(result.unit(), UnitId::AcuteChronicRatio);
    assert!((result.value() - 4.0 / 3.0).abs() < 1e-3, "got {}", result.value());
    assert_eq!(result.start_date, block_end() - Duration::days(28));
    let LoadDetails::AcuteChronic {
        daily_loads,
        failed_days,
        ..
    } = result.details
    else {
        panic!("unexpected details");
    };
    assert_eq!(daily_loads.len(), 28);
    assert_eq!(failed_days, 0);
}

#[tokio::test]
#[allow(clippy::float_cmp)]
async fn test_acute_chronic_equal_days() {
    let sources = as_sources(training_block(block_end(), |_| 45));
    let calculator = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&sources, 40)));
    let season = Season::ending_at(block_end(), Duration::days(1));

    let load = calculator.daily_loads(&sources, &season).await.unwrap();

    assert_eq!(load.ratio, 1.0);
    assert_eq!(load.acute, load.chronic);
    assert!(load.daily_loads.iter().all(|value| *value > 0.0));
}

#[tokio::test]
async fn test_acute_chronic_rest_days_and_failures_count_as_zero() {
    let idle = as_sources(SyntheticSource::new("idle"));
    let calculator = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&idle, 40)));
    let season = Season::ending_at(block_end(), Duration::days(1));

    let rest = calculator.daily_loads(&idle, &season).await.unwrap();
    assert!(rest.ratio.abs() < f64::EPSILON);
    assert_eq!(rest.failed_days, 0);

    let no_resting = as_sources(sessions_only(block_end(), |_| 45));
    let calculator = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&no_resting, 40)));
    let failed = calculator.daily_loads(&no_resting, &season).await.unwrap();
    assert!(failed.ratio.abs() < f64::EPSILON);
    assert!(failed.daily_loads.iter().all(|value| *value == 0.0));
    assert_eq!(failed.failed_days, 28);
}

#[tokio::test]
async fn test_acute_chronic_failing_source_alone_is_no_data() {
    let broken = as_sources(training_block(block_end(), |_| 45).failing("token expired"));
    let calculator = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&broken, 40)));
    let season = Season::ending_at(block_end(), Duration::days(1));

    let load = calculator.daily_loads(&broken, &season).await.unwrap();

    assert!(load.ratio.abs() < f64::EPSILON);
    assert_eq!(load.failed_days, 0);
}

#[tokio::test]
async fn test_acute_chronic_failing_source_does_not_discard_healthy_data() {
    let season = Season::ending_at(block_end(), Duration::days(1));
    let minutes = |day: i64| if day < 21 { 40 } else { 60 };

    let healthy = as_sources(training_block(block_end(), minutes));
    let alone = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&healthy, 40)))
        .daily_loads(&healthy, &season)
        .await
        .unwrap();

    let mixed: Vec<Arc<dyn DataSource>> = vec![
        Arc::new(training_block(block_end(), minutes)),
        Arc::new(SyntheticSource::new("broken").failing("sync error")),
    ];
    let together = AcuteChronicCalculator::new(BanisterCalculator::new(profile(&mixed, 40)))
        .daily_loads(&mixed, &season)
        .await
        .unwrap();

    assert_eq!(together.failed_days, 0);
    assert_eq!(together.daily_loads, alone.daily_loads);
    assert!((together.chronic - alone.chronic).abs() < 1e-9);
    assert!((together.ratio - alone.ratio).abs() < 1e-9);
    assert!((together.ratio - 4.0 / 3.0).abs() < 1e-3);
}

#[tokio::test]
async fn test_acute_chronic_custom_windows() {
    let sources = as_sources(training_block(block_end(), |day| if day < 21 { 40 } else { 60 }));
    let workload = WorkloadConfig {
        acute_window_days: 7,
        chronic_window_days: 14,
    };
    let calculator = AcuteChronicCalculator::with_workload(
        BanisterCalculator::new(profile(&sources, 40)),
        workload,
    );
    let season = Season::ending_at(block_end(), Duration::days(1));

    let load = calculator.daily_loads(&sources, &season).await.unwrap();

    assert_eq!(load.daily_loads.len(), 14);
    assert!((load.ratio - 60.0 / 50.0).abs() < 1e-3);
}
