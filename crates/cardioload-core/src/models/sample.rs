// ABOUTME: Timestamped physiological samples and start-ordered sample series
// ABOUTME: Series sort on construction so duration and pairwise algorithms can rely on order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::activity::{ActivityKind, ActivityKinds, MetricKind};
use super::season::Season;
use crate::units::{Measurement, UnitError, UnitId};

/// One timestamped measurement of a metric during an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Unique sample identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Activity the sample was recorded during
    pub activity: ActivityKind,
    /// Metric the sample measures
    pub metric: MetricKind,
    /// When the measurement window started
    pub start_date: DateTime<Utc>,
    /// When the measurement window ended
    pub end_date: DateTime<Utc>,
    /// Measured value and unit
    pub measurement: Measurement,
}

impl Sample {
    /// Create a sample spanning `[start_date, end_date]`
    #[must_use]
    pub fn new(
        activity: ActivityKind,
        metric: MetricKind,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        measurement: Measurement,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity,
            metric,
            start_date,
            end_date,
            measurement,
        }
    }

    /// Create a point-in-time sample (start and end coincide)
    #[must_use]
    pub fn instant(
        activity: ActivityKind,
        metric: MetricKind,
        at: DateTime<Utc>,
        measurement: Measurement,
    ) -> Self {
        Self::new(activity, metric, at, at, measurement)
    }

    /// Heart rate sample in beats per minute
    #[must_use]
    pub fn heart_rate(activity: ActivityKind, at: DateTime<Utc>, bpm: f64) -> Self {
        Self::instant(activity, MetricKind::HeartRate, at, Measurement::bpm(bpm))
    }

    /// Measured value converted to `unit`
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleQuantity` if `unit` measures another quantity
    pub fn value_in(&self, unit: UnitId) -> Result<f64, UnitError> {
        self.measurement.value_in(unit)
    }
}

/// Samples for one metric over a season, ordered by `start_date` ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    activities: ActivityKinds,
    metric: MetricKind,
    season: Season,
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Build a series, sorting samples by start date
    ///
    /// The sort is stable, so samples with equal start dates keep the order in
    /// which the sources returned them.
    #[must_use]
    pub fn new(
        activities: ActivityKinds,
        metric: MetricKind,
        season: Season,
        mut samples: Vec<Sample>,
    ) -> Self {
        samples.sort_by_key(|sample| sample.start_date);
        Self {
            activities,
            metric,
            season,
            samples,
        }
    }

    /// Activity kinds the series was collected for
    #[must_use]
    pub const fn activities(&self) -> ActivityKinds {
        self.activities
    }

    /// Metric carried by every sample
    #[must_use]
    pub const fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Season the samples were selected from
    #[must_use]
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Ordered samples
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample with the latest start date
    #[must_use]
    pub fn most_recent(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Time between the earliest start and the latest end of any sample
    #[must_use]
    pub fn span(&self) -> Duration {
        let Some(first) = self.samples.first() else {
            return Duration::zero();
        };
        let last_end = self
            .samples
            .iter()
            .map(|sample| sample.end_date)
            .max()
            .unwrap_or(first.end_date);
        (last_end - first.start_date).max(Duration::zero())
    }

    /// Span in fractional minutes
    #[must_use]
    pub fn span_minutes(&self) -> f64 {
        duration_minutes(self.span())
    }

    /// All values converted to `unit`, in series order
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleQuantity` if any sample measures another quantity
    pub fn values_in(&self, unit: UnitId) -> Result<Vec<f64>, UnitError> {
        self.samples
            .iter()
            .map(|sample| sample.value_in(unit))
            .collect()
    }

    /// Arithmetic mean of all values in `unit`, `None` for an empty series
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleQuantity` if any sample measures another quantity
    pub fn mean_in(&self, unit: UnitId) -> Result<Option<f64>, UnitError> {
        let values = self.values_in(unit)?;
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some(values.iter().sum::<f64>() / values.len() as f64))
    }

    /// Largest value in `unit`, `None` for an empty series
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleQuantity` if any sample measures another quantity
    pub fn max_in(&self, unit: UnitId) -> Result<Option<f64>, UnitError> {
        Ok(self.values_in(unit)?.into_iter().reduce(f64::max))
    }

    /// Consecutive `(earlier, later)` sample pairs
    pub fn consecutive_pairs(&self) -> impl Iterator<Item = (&Sample, &Sample)> {
        self.samples.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Convert a chrono duration to fractional minutes
#[must_use]
pub fn duration_minutes(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 60_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn season() -> Season {
        let end = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();
        Season::ending_at(end, Duration::days(1))
    }

    #[test]
    fn test_series_sorts_by_start_date() {
        let base = season().start();
        let samples = vec![
            Sample::heart_rate(ActivityKind::Running, base + Duration::minutes(10), 150.0),
            Sample::heart_rate(ActivityKind::Running, base, 120.0),
            Sample::heart_rate(ActivityKind::Running, base + Duration::minutes(5), 140.0),
        ];
        let series = SampleSeries::new(
            ActivityKinds::RUNNING,
            MetricKind::HeartRate,
            season(),
            samples,
        );

        let values = series.values_in(UnitId::BeatsPerMinute).unwrap();
        assert_eq!(values, vec![120.0, 140.0, 150.0]);
        assert!((series.span_minutes() - 10.0).abs() < 1e-9);
        assert_eq!(series.consecutive_pairs().count(), 2);
    }

    #[test]
    fn test_mean_and_max_convert_units() {
        let base = season().start();
        let samples = vec![
            Sample::instant(
                ActivityKind::Cycling,
                MetricKind::HeartRate,
                base,
                Measurement::new(2.0, UnitId::Hertz),
            ),
            Sample::heart_rate(ActivityKind::Cycling, base + Duration::minutes(1), 140.0),
        ];
        let series = SampleSeries::new(
            ActivityKinds::CYCLING,
            MetricKind::HeartRate,
            season(),
            samples,
        );

        let mean = series.mean_in(UnitId::BeatsPerMinute).unwrap().unwrap();
        assert!((mean - 130.0).abs() < 1e-9);
        let max = series.max_in(UnitId::BeatsPerMinute).unwrap().unwrap();
        assert!((max - 140.0).abs() < 1e-9);
        assert!(series.values_in(UnitId::Kilogram).is_err());
    }

    #[test]
    fn test_empty_series() {
        let series = SampleSeries::new(
            ActivityKinds::RUNNING,
            MetricKind::HeartRate,
            season(),
            Vec::new(),
        );
        assert!(series.is_empty());
        assert_eq!(series.span(), Duration::zero());
        assert_eq!(series.mean_in(UnitId::BeatsPerMinute).unwrap(), None);
    }
}
