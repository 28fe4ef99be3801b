// ABOUTME: Immutable sample query builder selecting qualifying sources and collecting their samples
// ABOUTME: Fetches run sequentially in source-list order; strict and lenient collection modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use cardioload_core::models::{ActivityKinds, MetricKind, Sample, SampleSeries, Season};
use tracing::{debug, warn};

use crate::errors::SourceError;
use crate::source::DataSource;

/// Query for one metric over a season across a set of activity kinds
///
/// A source qualifies when its declared capabilities contain every requested
/// activity kind and the metric.
///
/// ```rust,no_run
/// # use cardioload_core::models::{ActivityKinds, MetricKind, Season};
/// # use cardioload_sources::SampleQuery;
/// # fn example(season: Season) {
/// let query = SampleQuery::new(MetricKind::HeartRate, season)
///     .with_activities(ActivityKinds::high_intensity());
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleQuery {
    activities: ActivityKinds,
    metric: MetricKind,
    season: Season,
}

impl SampleQuery {
    /// Query `metric` over `season` for non-workout (`GENERAL`) samples
    #[must_use]
    pub const fn new(metric: MetricKind, season: Season) -> Self {
        Self {
            activities: ActivityKinds::GENERAL,
            metric,
            season,
        }
    }

    /// Same query for a different set of activity kinds
    #[must_use]
    pub const fn with_activities(self, activities: ActivityKinds) -> Self {
        Self { activities, ..self }
    }

    /// Query `metric` over `season` wherever a source records it
    ///
    /// Fetches every activity kind a source declares plus `GENERAL`, which
    /// suits metric-only lookups such as resting heart rate or body mass.
    #[must_use]
    pub const fn any_activity(metric: MetricKind, season: Season) -> Self {
        Self {
            activities: ActivityKinds::all(),
            metric,
            season,
        }
    }

    /// Requested activity kinds
    #[must_use]
    pub const fn activities(&self) -> ActivityKinds {
        self.activities
    }

    /// Requested metric
    #[must_use]
    pub const fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Requested season
    #[must_use]
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Whether `source` declares support for this query
    #[must_use]
    pub fn qualifies(&self, source: &dyn DataSource) -> bool {
        source
            .capabilities()
            .supports(self.activities, self.metric.flag())
    }

    /// Sources qualifying for this query, in input order
    #[must_use]
    pub fn qualifying<'a>(&self, sources: &'a [Arc<dyn DataSource>]) -> Vec<&'a dyn DataSource> {
        sources
            .iter()
            .map(AsRef::as_ref)
            .filter(|source| self.qualifies(*source))
            .collect()
    }

    /// Sources declaring the metric, regardless of activity kinds, in input order
    #[must_use]
    pub fn supporting_metric<'a>(
        &self,
        sources: &'a [Arc<dyn DataSource>],
    ) -> Vec<&'a dyn DataSource> {
        sources
            .iter()
            .map(AsRef::as_ref)
            .filter(|source| source.capabilities().supports_metrics(self.metric.flag()))
            .collect()
    }

    /// Fetch every requested activity kind the source declares
    ///
    /// A requested `GENERAL` is always fetched: non-workout samples are not
    /// tied to a declared activity kind.
    ///
    /// # Errors
    ///
    /// Returns the first `SourceError` the source reports
    pub async fn fetch_from(&self, source: &dyn DataSource) -> Result<Vec<Sample>, SourceError> {
        let declared = source.capabilities().activities | ActivityKinds::GENERAL;
        let activities = self.activities & declared;
        let mut samples = Vec::new();
        for activity in activities.kinds() {
            let batch = source.fetch(activity, self.metric, &self.season).await?;
            debug!(
                source = source.name(),
                activity = %activity,
                metric = %self.metric,
                count = batch.len(),
                "Fetched samples"
            );
            samples.extend(batch);
        }
        Ok(samples)
    }

    /// Collect samples from every source, failing on the first fetch error
    ///
    /// # Errors
    ///
    /// Returns the first `SourceError` any source reports
    pub async fn collect_strict(&self, sources: &[&dyn DataSource]) -> Result<SampleSeries, SourceError> {
        let mut samples = Vec::new();
        for source in sources {
            samples.extend(self.fetch_from(*source).await?);
        }
        Ok(self.series(samples))
    }

    /// Collect samples from every source, treating a failed source as returning nothing
    pub async fn collect_lenient(&self, sources: &[&dyn DataSource]) -> SampleSeries {
        let mut samples = Vec::new();
        for source in sources {
            match self.fetch_from(*source).await {
                Ok(batch) => samples.extend(batch),
                Err(error) => warn!(
                    source = source.name(),
                    metric = %self.metric,
                    error = %error,
                    "Source fetch failed, treating as no data"
                ),
            }
        }
        self.series(samples)
    }

    fn series(&self, samples: Vec<Sample>) -> SampleSeries {
        SampleSeries::new(self.activities, self.metric, self.season, samples)
    }
}
