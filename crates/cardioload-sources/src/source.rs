// ABOUTME: Data source trait consumed by the athlete profile and load calculators
// ABOUTME: Declares capabilities, authorization, and async sample fetches over a season
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use async_trait::async_trait;
use cardioload_core::models::{ActivityKind, BiologicalSex, MetricKind, MetricKinds, Sample, Season};
use cardioload_core::units::UnitId;
use chrono::NaiveDate;

use crate::capabilities::{AuthorizationStatus, SourceCapabilities};
use crate::errors::SourceError;

/// Provider of physiological samples
///
/// Implementations must only return samples for the requested activity and
/// metric whose start date falls inside the requested season. Calculators
/// consult [`DataSource::capabilities`] before calling [`DataSource::fetch`].
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Activity and metric kinds this source serves
    fn capabilities(&self) -> SourceCapabilities;

    /// Unit each supported metric is reported in
    fn default_units(&self) -> BTreeMap<MetricKind, UnitId> {
        self.capabilities()
            .metrics
            .kinds()
            .map(|metric| (metric, metric.canonical_unit()))
            .collect()
    }

    /// Whether the source can currently serve requests
    async fn is_available(&self) -> bool;

    /// Ask for read access to `metrics`
    async fn request_authorization(
        &self,
        metrics: MetricKinds,
    ) -> Result<AuthorizationStatus, SourceError>;

    /// Samples of `metric` recorded during `activity` within `season`
    async fn fetch(
        &self,
        activity: ActivityKind,
        metric: MetricKind,
        season: &Season,
    ) -> Result<Vec<Sample>, SourceError>;

    /// Biological sex recorded by the source, if any
    async fn biological_sex(&self) -> Result<Option<BiologicalSex>, SourceError> {
        Ok(None)
    }

    /// Date of birth recorded by the source, if any
    async fn date_of_birth(&self) -> Result<Option<NaiveDate>, SourceError> {
        Ok(None)
    }
}

/// Samples from `samples` matching `activity`, `metric`, and starting within `season`
#[must_use]
pub fn select_samples(
    samples: &[Sample],
    activity: ActivityKind,
    metric: MetricKind,
    season: &Season,
) -> Vec<Sample> {
    samples
        .iter()
        .filter(|sample| {
            sample.activity == activity
                && sample.metric == metric
                && season.contains(sample.start_date)
        })
        .cloned()
        .collect()
}
