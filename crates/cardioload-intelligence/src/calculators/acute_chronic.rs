// ABOUTME: Acute:chronic workload ratio over daily Banister loads
// ABOUTME: Failing sources count as no data per day; a failed day contributes zero to the means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cardioload_core::constants::workload::{HIGH_RISK_RATIO, OPTIMAL_RATIO_HIGH, OPTIMAL_RATIO_LOW};
use cardioload_core::errors::{AppResult, ErrorCode};
use cardioload_core::models::{LoadDetails, LoadMethod, LoadResult, Season};
use cardioload_sources::DataSource;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{ensure_qualifying_sources, BanisterCalculator, LoadCalculator, LOAD_ACTIVITIES};
use crate::config::WorkloadConfig;

/// Where a ratio sits relative to the informational optimal band
///
/// Classification only; no calculator rejects a ratio outside the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Ratio below 0.8
    Undertraining,
    /// Ratio within [0.8, 1.3]
    Optimal,
    /// Ratio above 1.3 up to 1.5
    Overreaching,
    /// Ratio above 1.5
    HighRisk,
}

impl LoadStatus {
    /// Classify a workload ratio
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < OPTIMAL_RATIO_LOW {
            Self::Undertraining
        } else if ratio <= OPTIMAL_RATIO_HIGH {
            Self::Optimal
        } else if ratio <= HIGH_RISK_RATIO {
            Self::Overreaching
        } else {
            Self::HighRisk
        }
    }

    /// Get status name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Undertraining => "undertraining",
            Self::Optimal => "optimal",
            Self::Overreaching => "overreaching",
            Self::HighRisk => "high_risk",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Acute and chronic means of a daily load series and their ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcuteChronicLoad {
    /// Mean of the most recent acute-window days
    pub acute: f64,
    /// Mean of every day in the series
    pub chronic: f64,
    /// `acute / chronic`, or 0 when `chronic <= 0`
    pub ratio: f64,
    /// Daily loads, oldest first
    pub daily_loads: Vec<f64>,
    /// Days whose load could not be computed and counted as zero
    pub failed_days: usize,
}

impl AcuteChronicLoad {
    /// Band the ratio falls into
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        LoadStatus::from_ratio(self.ratio)
    }
}

/// Arithmetic mean; identical values return that value without rounding
fn mean(values: &[f64]) -> f64 {
    match values {
        [] => 0.0,
        [first, rest @ ..] if rest.iter().all(|value| value.to_bits() == first.to_bits()) => {
            *first
        }
        _ => values.iter().sum::<f64>() / values.len() as f64,
    }
}

/// Acute:chronic workload over `daily_loads` (oldest first)
///
/// The acute mean covers the last `acute_days` entries (or all of them when
/// fewer exist); the chronic mean covers every entry.
#[must_use]
pub fn acute_chronic_load(daily_loads: &[f64], acute_days: usize) -> AcuteChronicLoad {
    let acute_start = daily_loads.len().saturating_sub(acute_days);
    let acute = mean(&daily_loads[acute_start..]);
    let chronic = mean(daily_loads);
    let ratio = if chronic > 0.0 { acute / chronic } else { 0.0 };
    AcuteChronicLoad {
        acute,
        chronic,
        ratio,
        daily_loads: daily_loads.to_vec(),
        failed_days: 0,
    }
}

/// Acute:chronic calculator computing one Banister load per day of the chronic window
#[derive(Debug, Clone)]
pub struct AcuteChronicCalculator {
    banister: BanisterCalculator,
    workload: WorkloadConfig,
}

impl AcuteChronicCalculator {
    /// Create a calculator with the default 7/28-day windows
    #[must_use]
    pub fn new(banister: BanisterCalculator) -> Self {
        Self::with_workload(banister, WorkloadConfig::default())
    }

    /// Create a calculator with custom windows
    #[must_use]
    pub const fn with_workload(banister: BanisterCalculator, workload: WorkloadConfig) -> Self {
        Self { banister, workload }
    }

    /// Daily Banister loads for each day of the chronic window ending at `season.end()`
    ///
    /// Each day collects leniently: a source whose fetch fails is treated as
    /// having no samples that day. Days with no samples contribute zero. Days
    /// that fail for any other reason also contribute zero and are counted in
    /// `failed_days`.
    ///
    /// # Errors
    ///
    /// Returns `NoSupportedActivities` when no source qualifies
    pub async fn daily_loads(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<AcuteChronicLoad> {
        ensure_qualifying_sources(sources, season, LoadMethod::AcuteChronic)?;

        let days = season.trailing_days(self.workload.chronic_window_days);
        let mut loads = Vec::with_capacity(days.len());
        let mut failed_days = 0;
        for day in &days {
            match self.banister.compute_lenient(sources, day).await {
                Ok(result) => loads.push(result.value()),
                Err(error) if error.code == ErrorCode::NoSupportedMetrics => {
                    debug!(day = %day, "No heart rate samples, counting day as rest");
                    loads.push(0.0);
                }
                Err(error) => {
                    warn!(day = %day, error = %error.message, "Daily load failed, counting as zero");
                    failed_days += 1;
                    loads.push(0.0);
                }
            }
        }

        let mut load = acute_chronic_load(&loads, self.workload.acute_window_days as usize);
        load.failed_days = failed_days;
        Ok(load)
    }
}

#[async_trait]
impl LoadCalculator for AcuteChronicCalculator {
    fn method(&self) -> LoadMethod {
        LoadMethod::AcuteChronic
    }

    async fn compute(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<LoadResult> {
        let load = self.daily_loads(sources, season).await?;
        let window = Season::ending_at(
            season.end(),
            Duration::days(i64::from(self.workload.chronic_window_days)),
        );
        info!(
            profile = self.banister.profile().name(),
            window = %window,
            acute = load.acute,
            chronic = load.chronic,
            ratio = load.ratio,
            status = %load.status(),
            failed_days = load.failed_days,
            "Computed acute:chronic workload ratio"
        );
        Ok(LoadResult::new(
            LoadMethod::AcuteChronic,
            LOAD_ACTIVITIES,
            &window,
            load.ratio,
            LoadDetails::AcuteChronic {
                acute: load.acute,
                chronic: load.chronic,
                daily_loads: load.daily_loads,
                failed_days: load.failed_days,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ramp() {
        let mut daily = vec![100.0; 21];
        daily.extend([150.0; 7]);
        let load = acute_chronic_load(&daily, 7);

        assert!((load.chronic - 112.5).abs() < 1e-9);
        assert!((load.acute - 150.0).abs() < 1e-9);
        assert!((load.ratio - 4.0 / 3.0).abs() < 1e-3);
        assert_eq!(load.status(), LoadStatus::Overreaching);
    }

    #[test]
    fn test_equal_days_give_unit_ratio() {
        let load = acute_chronic_load(&[100.0; 28], 7);
        assert!((load.ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(load.status(), LoadStatus::Optimal);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_equal_fractional_days_give_exact_unit_ratio() {
        let load = acute_chronic_load(&[91.17; 28], 7);
        assert_eq!(load.acute, 91.17);
        assert_eq!(load.chronic, 91.17);
        assert_eq!(load.ratio, 1.0);
    }

    #[test]
    fn test_zero_chronic_gives_zero_ratio() {
        let load = acute_chronic_load(&[0.0; 28], 7);
        assert!(load.ratio.abs() < f64::EPSILON);
        assert_eq!(load.status(), LoadStatus::Undertraining);
    }

    #[test]
    fn test_acute_window_longer_than_series() {
        let load = acute_chronic_load(&[50.0, 150.0], 7);
        assert!((load.acute - 100.0).abs() < 1e-9);
        assert!((load.ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_band_edges() {
        assert_eq!(LoadStatus::from_ratio(0.79), LoadStatus::Undertraining);
        assert_eq!(LoadStatus::from_ratio(0.8), LoadStatus::Optimal);
        assert_eq!(LoadStatus::from_ratio(1.3), LoadStatus::Optimal);
        assert_eq!(LoadStatus::from_ratio(1.5), LoadStatus::Overreaching);
        assert_eq!(LoadStatus::from_ratio(1.51), LoadStatus::HighRisk);
    }
}
