// ABOUTME: Load result returned by every calculator plus its calculation breakdown
// ABOUTME: The measurement unit identifies the producing method for later conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activity::{ActivityKinds, MetricKind};
use super::athlete::BiologicalSex;
use super::method::LoadMethod;
use super::season::Season;
use crate::units::{Measurement, UnitId};

/// Intermediate values a calculator derived on the way to its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum LoadDetails {
    /// Banister inputs
    Banister {
        /// Span between first and last sample, minutes
        duration_minutes: f64,
        /// Mean heart rate, bpm
        mean_heart_rate: f64,
        /// Resting heart rate used, bpm
        resting_heart_rate: f64,
        /// Maximum heart rate used, bpm
        max_heart_rate: f64,
        /// Heart rate reserve fraction in [0, 1]
        heart_rate_reserve: f64,
        /// Sex the coefficients were chosen for (`None` when unresolved)
        sex: Option<BiologicalSex>,
        /// Number of samples aggregated
        sample_count: usize,
    },
    /// Edwards time in zone
    Edwards {
        /// Maximum heart rate used, bpm
        max_heart_rate: f64,
        /// Minutes per zone, zone 1 first
        zone_minutes: [f64; 5],
        /// Minutes whose heart rate fell outside 50-100 % of max
        skipped_minutes: f64,
    },
    /// Lucia time in zone
    Lucia {
        /// First lactate threshold, bpm
        vt1: f64,
        /// Second lactate threshold, bpm
        vt2: f64,
        /// Minutes per zone, below VT1 first
        zone_minutes: [f64; 3],
    },
    /// Acute:chronic breakdown
    AcuteChronic {
        /// Mean of the acute window
        acute: f64,
        /// Mean of the chronic window
        chronic: f64,
        /// Daily Banister loads, oldest first
        daily_loads: Vec<f64>,
        /// Days whose Banister computation failed and counted as zero
        failed_days: usize,
    },
}

/// Output of a load calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Method that produced the score
    pub method: LoadMethod,
    /// Activity kinds the score covers
    pub activities: ActivityKinds,
    /// Always `MetricKind::TrainingLoad`
    pub metric: MetricKind,
    /// Start of the season the score covers
    pub start_date: DateTime<Utc>,
    /// End of the season the score covers
    pub end_date: DateTime<Utc>,
    /// Score in the method's native unit
    pub measurement: Measurement,
    /// Calculation breakdown
    pub details: LoadDetails,
}

impl LoadResult {
    /// Build a result in `method`'s native unit
    #[must_use]
    pub fn new(
        method: LoadMethod,
        activities: ActivityKinds,
        season: &Season,
        value: f64,
        details: LoadDetails,
    ) -> Self {
        Self {
            method,
            activities,
            metric: MetricKind::TrainingLoad,
            start_date: season.start(),
            end_date: season.end(),
            measurement: Measurement::new(value, method.native_unit()),
            details,
        }
    }

    /// Score value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.measurement.value
    }

    /// Score unit
    #[must_use]
    pub const fn unit(&self) -> UnitId {
        self.measurement.unit
    }
}
