// ABOUTME: In-memory synthetic data source for development, testing, and demonstrations
// ABOUTME: Supports sample injection, failure injection, availability toggling, and session generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// RwLock poisoning errors are converted to SourceError::ConfigurationError
// for proper error propagation through the calculators

//! # Synthetic Data Source
//!
//! A deterministic source that needs no platform integration:
//!
//! - Holds samples in memory and filters them per fetch
//! - Can be told to fail every fetch, to exercise degraded paths
//! - Can be switched unavailable or denied authorization
//! - Generates heart-rate sessions with known time-in-zone
//!
//! ## Thread Safety
//!
//! All mutable state is protected by `RwLock`; a shared instance can be used
//! from several tasks.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use cardioload_core::models::{
    ActivityKind, BiologicalSex, MetricKind, MetricKinds, Sample, Season,
};
use cardioload_core::units::Measurement;
use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::capabilities::{AuthorizationStatus, SourceCapabilities};
use crate::errors::SourceError;
use crate::source::{select_samples, DataSource};

#[derive(Debug, Default)]
struct SyntheticState {
    samples: Vec<Sample>,
    available: bool,
    authorization: AuthorizationStatus,
    failure: Option<String>,
    fetch_log: Vec<(ActivityKind, MetricKind)>,
}

/// Synthetic data source backed by in-memory samples
///
/// ```rust,no_run
/// # use cardioload_core::models::{ActivityKind, ActivityKinds, MetricKinds};
/// # use cardioload_sources::{SourceCapabilities, SyntheticSource};
/// # use chrono::Utc;
/// let start = Utc::now();
/// let source = SyntheticSource::new("watch")
///     .with_capabilities(SourceCapabilities::new(
///         ActivityKinds::high_intensity(),
///         MetricKinds::HEART_RATE,
///     ))
///     .with_samples(SyntheticSource::steady_session(ActivityKind::Running, start, 60, 150.0));
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    name: String,
    capabilities: SourceCapabilities,
    biological_sex: Option<BiologicalSex>,
    date_of_birth: Option<NaiveDate>,
    state: Arc<RwLock<SyntheticState>>,
}

impl SyntheticSource {
    /// Create an empty, available, authorized source with wearable capabilities
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: SourceCapabilities::wearable(),
            biological_sex: None,
            date_of_birth: None,
            state: Arc::new(RwLock::new(SyntheticState {
                available: true,
                authorization: AuthorizationStatus::Authorized,
                ..SyntheticState::default()
            })),
        }
    }

    /// Replace declared capabilities
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: SourceCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Record a biological sex
    #[must_use]
    pub const fn with_biological_sex(mut self, sex: BiologicalSex) -> Self {
        self.biological_sex = Some(sex);
        self
    }

    /// Record a date of birth
    #[must_use]
    pub const fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Pre-load samples
    #[must_use]
    pub fn with_samples(self, samples: Vec<Sample>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.samples.extend(samples);
        }
        self
    }

    /// Make every fetch fail with `details`
    #[must_use]
    pub fn failing(self, details: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.failure = Some(details.into());
        }
        self
    }

    fn poisoned(&self) -> SourceError {
        SourceError::ConfigurationError {
            source_name: self.name.clone(),
            details: "RwLock poisoned: synthetic state lock".to_owned(),
        }
    }

    /// Append samples
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn add_samples(&self, samples: Vec<Sample>) -> Result<(), SourceError> {
        self.state
            .write()
            .map_err(|_| self.poisoned())?
            .samples
            .extend(samples);
        Ok(())
    }

    /// Switch availability on or off
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_available(&self, available: bool) -> Result<(), SourceError> {
        self.state.write().map_err(|_| self.poisoned())?.available = available;
        Ok(())
    }

    /// Set the status returned by the next authorization handshake
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_authorization(&self, status: AuthorizationStatus) -> Result<(), SourceError> {
        self.state.write().map_err(|_| self.poisoned())?.authorization = status;
        Ok(())
    }

    /// Inject (or clear with `None`) a fetch failure
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_failure(&self, details: Option<String>) -> Result<(), SourceError> {
        self.state.write().map_err(|_| self.poisoned())?.failure = details;
        Ok(())
    }

    /// Number of stored samples
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn sample_count(&self) -> Result<usize, SourceError> {
        Ok(self.state.read().map_err(|_| self.poisoned())?.samples.len())
    }

    /// Every `(activity, metric)` pair fetched so far, in call order
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn fetch_log(&self) -> Result<Vec<(ActivityKind, MetricKind)>, SourceError> {
        Ok(self
            .state
            .read()
            .map_err(|_| self.poisoned())?
            .fetch_log
            .clone())
    }

    /// Heart-rate samples built from `(minutes, bpm)` segments
    ///
    /// Each segment starts a sample at the running offset from `start`; a final
    /// closing sample repeats the last heart rate, so consecutive-pair
    /// algorithms see exactly `minutes` at `bpm` per segment.
    #[must_use]
    pub fn segmented_session(
        activity: ActivityKind,
        start: DateTime<Utc>,
        segments: &[(f64, f64)],
    ) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(segments.len() + 1);
        let mut offset_ms: i64 = 0;
        for (minutes, bpm) in segments {
            samples.push(Sample::heart_rate(
                activity,
                start + Duration::milliseconds(offset_ms),
                *bpm,
            ));
            offset_ms += (minutes * 60_000.0).round() as i64;
        }
        if let Some((_, bpm)) = segments.last() {
            samples.push(Sample::heart_rate(
                activity,
                start + Duration::milliseconds(offset_ms),
                *bpm,
            ));
        }
        samples
    }

    /// One heart-rate sample per minute for `minutes` minutes at a constant `bpm`
    ///
    /// Produces `minutes + 1` samples spanning exactly `minutes`.
    #[must_use]
    pub fn steady_session(
        activity: ActivityKind,
        start: DateTime<Utc>,
        minutes: u32,
        bpm: f64,
    ) -> Vec<Sample> {
        (0..=minutes)
            .map(|minute| {
                Sample::heart_rate(activity, start + Duration::minutes(i64::from(minute)), bpm)
            })
            .collect()
    }

    /// One resting heart rate sample per day before `end`, oldest first, the last one day before `end`
    #[must_use]
    pub fn resting_heart_rates(end: DateTime<Utc>, values: &[f64]) -> Vec<Sample> {
        let days = values.len() as i64;
        values
            .iter()
            .enumerate()
            .map(|(index, bpm)| {
                let at = end - Duration::days(days - index as i64);
                Sample::instant(
                    ActivityKind::General,
                    MetricKind::RestingHeartRate,
                    at,
                    Measurement::bpm(*bpm),
                )
            })
            .collect()
    }
}

#[async_trait]
impl DataSource for SyntheticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> SourceCapabilities {
        self.capabilities
    }

    async fn is_available(&self) -> bool {
        self.state.read().is_ok_and(|state| state.available)
    }

    async fn request_authorization(
        &self,
        metrics: MetricKinds,
    ) -> Result<AuthorizationStatus, SourceError> {
        let state = self.state.read().map_err(|_| self.poisoned())?;
        if !state.available {
            return Err(SourceError::unavailable(self.name.clone()));
        }
        if !self.capabilities.supports_metrics(metrics) {
            return Ok(AuthorizationStatus::Denied);
        }
        Ok(state.authorization)
    }

    async fn fetch(
        &self,
        activity: ActivityKind,
        metric: MetricKind,
        season: &Season,
    ) -> Result<Vec<Sample>, SourceError> {
        let mut state = self.state.write().map_err(|_| self.poisoned())?;
        state.fetch_log.push((activity, metric));
        if !state.available {
            return Err(SourceError::unavailable(self.name.clone()));
        }
        if let Some(details) = &state.failure {
            return Err(SourceError::fetch_failed(self.name.clone(), details.clone()));
        }
        if !state.authorization.is_authorized() {
            return Err(SourceError::Unauthorized {
                source_name: self.name.clone(),
                metric,
            });
        }
        Ok(select_samples(&state.samples, activity, metric, season))
    }

    async fn biological_sex(&self) -> Result<Option<BiologicalSex>, SourceError> {
        Ok(self.biological_sex)
    }

    async fn date_of_birth(&self) -> Result<Option<NaiveDate>, SourceError> {
        Ok(self.date_of_birth)
    }
}
