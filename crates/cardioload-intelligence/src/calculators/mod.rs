// ABOUTME: Training load calculator trait and the heart rate collection shared by every method
// ABOUTME: Gates on source capabilities, then sample presence, before any method-specific work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Load Calculators
//!
//! Every calculator pulls heart rate samples for running and cycling from the
//! sources that declare both, then applies its method:
//!
//! | Method | Inputs beyond samples |
//! |---|---|
//! | Banister | resting HR, max HR, biological sex |
//! | Edwards | max HR |
//! | Lucia | lactate thresholds VT1 and VT2 |
//! | Acute:chronic | daily Banister loads over 28 days |
//!
//! Gating failures come first and in a fixed order: no qualifying source gives
//! `NoSupportedActivities`, no samples gives `NoSupportedMetrics`, and a missing
//! or invalid physiological input gives `MissingRequiredParameter`.

/// Acute:chronic workload ratio
pub mod acute_chronic;
/// Banister exponential TRIMP
pub mod banister;
/// Edwards five-zone TRIMP
pub mod edwards;
/// Lucia three-zone TRIMP
pub mod lucia;

use std::sync::Arc;

use async_trait::async_trait;
use cardioload_core::errors::{AppError, AppResult};
use cardioload_core::models::{
    duration_minutes, ActivityKinds, LoadMethod, LoadResult, MetricKind, SampleSeries, Season,
};
use cardioload_core::units::UnitError;
use cardioload_sources::{DataSource, SampleQuery};
use tracing::debug;

pub use acute_chronic::{acute_chronic_load, AcuteChronicCalculator, AcuteChronicLoad, LoadStatus};
pub use banister::{banister_trimp, heart_rate_reserve, BanisterCalculator};
pub use edwards::{edwards_trimp, EdwardsCalculator};
pub use lucia::{lucia_trimp, LactateThresholds, LuciaCalculator};

/// Activity kinds every calculator draws heart rate from
pub const LOAD_ACTIVITIES: ActivityKinds = ActivityKinds::high_intensity();

/// A training load method over a set of data sources
#[async_trait]
pub trait LoadCalculator: Send + Sync {
    /// Method implemented by this calculator
    fn method(&self) -> LoadMethod;

    /// Compute the load for `season` from `sources`
    ///
    /// # Errors
    ///
    /// - `NoSupportedActivities` if no source declares running, cycling, and heart rate
    /// - `NoSupportedMetrics` if the qualifying sources return no samples
    /// - `MissingRequiredParameter` if a physiological input is unavailable or invalid
    async fn compute(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<LoadResult>;
}

/// Fail with `NoSupportedActivities` unless some source qualifies for heart rate loads
///
/// # Errors
///
/// Returns `ErrorCode::NoSupportedActivities` when no source qualifies
pub fn ensure_qualifying_sources(
    sources: &[Arc<dyn DataSource>],
    season: &Season,
    method: LoadMethod,
) -> AppResult<()> {
    let query = heart_rate_query(season);
    if query.qualifying(sources).is_empty() {
        return Err(AppError::no_supported_activities(format!(
            "{method}: no data source supports heart rate for {LOAD_ACTIVITIES:?}"
        )));
    }
    Ok(())
}

/// How a collection treats a qualifying source whose fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// The first failing source fails the whole collection
    Strict,
    /// A failing source contributes no samples
    Lenient,
}

/// Qualifying-source heart rate samples over `season`, in start order
///
/// # Errors
///
/// Returns `NoSupportedActivities` without qualifying sources, the source's
/// error when a fetch fails, and `NoSupportedMetrics` when no samples come back
pub async fn collect_heart_rate(
    sources: &[Arc<dyn DataSource>],
    season: &Season,
    method: LoadMethod,
) -> AppResult<SampleSeries> {
    collect_heart_rate_with(sources, season, method, FetchPolicy::Strict).await
}

/// Qualifying-source heart rate samples over `season` under `policy`
///
/// # Errors
///
/// Returns `NoSupportedActivities` without qualifying sources and
/// `NoSupportedMetrics` when no samples come back. Under `FetchPolicy::Strict`
/// a failing fetch returns the source's error.
pub async fn collect_heart_rate_with(
    sources: &[Arc<dyn DataSource>],
    season: &Season,
    method: LoadMethod,
    policy: FetchPolicy,
) -> AppResult<SampleSeries> {
    let query = heart_rate_query(season);
    let qualifying = query.qualifying(sources);
    if qualifying.is_empty() {
        return Err(AppError::no_supported_activities(format!(
            "{method}: no data source supports heart rate for {LOAD_ACTIVITIES:?}"
        )));
    }
    let series = match policy {
        FetchPolicy::Strict => query.collect_strict(&qualifying).await?,
        FetchPolicy::Lenient => query.collect_lenient(&qualifying).await,
    };
    if series.is_empty() {
        return Err(AppError::no_supported_metrics(format!(
            "{method}: no heart rate samples in {season}"
        )));
    }
    debug!(
        method = %method,
        policy = ?policy,
        sources = qualifying.len(),
        samples = series.len(),
        "Collected heart rate samples"
    );
    Ok(series)
}

fn heart_rate_query(season: &Season) -> SampleQuery {
    SampleQuery::new(MetricKind::HeartRate, *season).with_activities(LOAD_ACTIVITIES)
}

/// Minutes spent in each of `N` zones, plus minutes no zone claimed
///
/// Each consecutive sample pair contributes the time between their start dates
/// to the zone of the earlier sample's heart rate.
///
/// # Errors
///
/// Returns `UnitError::IncompatibleQuantity` if a sample is not a heart rate
pub fn time_in_zones<const N: usize>(
    series: &SampleSeries,
    classify: impl Fn(f64) -> Option<usize>,
) -> Result<([f64; N], f64), UnitError> {
    let unit = MetricKind::HeartRate.canonical_unit();
    let mut minutes = [0.0; N];
    let mut skipped = 0.0;
    for (earlier, later) in series.consecutive_pairs() {
        let elapsed = duration_minutes(later.start_date - earlier.start_date);
        let bpm = earlier.value_in(unit)?;
        match classify(bpm).and_then(|zone| minutes.get_mut(zone)) {
            Some(slot) => *slot += elapsed,
            None => skipped += elapsed,
        }
    }
    Ok((minutes, skipped))
}

/// `Σ minutes[i] × weights[i]`
#[must_use]
pub fn weighted_minutes<const N: usize>(minutes: &[f64; N], weights: &[f64; N]) -> f64 {
    minutes
        .iter()
        .zip(weights)
        .map(|(minutes, weight)| minutes * weight)
        .sum()
}
