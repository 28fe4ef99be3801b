// ABOUTME: Edwards zone-weighted TRIMP from time spent in five percent-of-max heart rate zones
// ABOUTME: Consecutive sample pairs assign elapsed minutes to the zone of the earlier sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use cardioload_core::constants::edwards::ZONE_MULTIPLIERS;
use cardioload_core::errors::{AppError, AppResult};
use cardioload_core::models::{LoadDetails, LoadMethod, LoadResult, Season};
use cardioload_sources::DataSource;
use tracing::info;

use super::{collect_heart_rate, time_in_zones, weighted_minutes, LoadCalculator, LOAD_ACTIVITIES};
use crate::profile::{AthleteProfile, HeartRateZones};

/// `Σ zone_minutes[i] × (i + 1)` for the five Edwards zones
#[must_use]
pub fn edwards_trimp(zone_minutes: &[f64; 5]) -> f64 {
    weighted_minutes(zone_minutes, &ZONE_MULTIPLIERS)
}

/// Edwards calculator bound to an athlete profile
///
/// Maximum heart rate is resolved as of the season end.
#[derive(Debug, Clone)]
pub struct EdwardsCalculator {
    profile: Arc<AthleteProfile>,
}

impl EdwardsCalculator {
    /// Create a calculator for `profile`
    #[must_use]
    pub const fn new(profile: Arc<AthleteProfile>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl LoadCalculator for EdwardsCalculator {
    fn method(&self) -> LoadMethod {
        LoadMethod::Edwards
    }

    async fn compute(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<LoadResult> {
        let series = collect_heart_rate(sources, season, LoadMethod::Edwards).await?;
        let max = self
            .profile
            .resolve_max_heart_rate(season.end())
            .await
            .ok_or_else(|| AppError::missing_parameter("Maximum heart rate unavailable"))?;
        if !max.is_finite() || max <= 0.0 {
            return Err(AppError::missing_parameter(format!(
                "Maximum heart rate {max} is not positive"
            )));
        }

        let zones = HeartRateZones::from_max(max);
        let (zone_minutes, skipped) = time_in_zones::<5>(&series, |bpm| zones.zone_index(bpm))?;
        let trimp = edwards_trimp(&zone_minutes);
        info!(
            profile = self.profile.name(),
            season = %season,
            max_heart_rate = max,
            skipped_minutes = skipped,
            trimp,
            "Computed Edwards TRIMP"
        );
        Ok(LoadResult::new(
            LoadMethod::Edwards,
            LOAD_ACTIVITIES,
            season,
            trimp,
            LoadDetails::Edwards {
                max_heart_rate: max,
                zone_minutes,
                skipped_minutes: skipped,
            },
        ))
    }
}
