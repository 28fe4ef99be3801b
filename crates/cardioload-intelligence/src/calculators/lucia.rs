// ABOUTME: Lucia threshold-zone TRIMP from time spent below, between, and above lactate thresholds
// ABOUTME: Thresholds are supplied by the caller and validated after the source gates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use cardioload_core::constants::lucia::ZONE_MULTIPLIERS;
use cardioload_core::errors::{AppError, AppResult};
use cardioload_core::models::{LoadDetails, LoadMethod, LoadResult, Season};
use cardioload_sources::DataSource;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{collect_heart_rate, time_in_zones, weighted_minutes, LoadCalculator, LOAD_ACTIVITIES};

/// First and second lactate (ventilatory) thresholds in bpm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LactateThresholds {
    /// First threshold (VT1)
    pub vt1: f64,
    /// Second threshold (VT2)
    pub vt2: f64,
}

impl LactateThresholds {
    /// Create thresholds
    #[must_use]
    pub const fn new(vt1: f64, vt2: f64) -> Self {
        Self { vt1, vt2 }
    }

    /// Check both thresholds are positive and `vt1 < vt2`
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredParameter` for inconsistent thresholds
    pub fn validate(&self) -> AppResult<()> {
        if !self.vt1.is_finite() || !self.vt2.is_finite() || self.vt1 <= 0.0 {
            return Err(AppError::missing_parameter(format!(
                "Lactate thresholds must be positive bpm values (VT1 {}, VT2 {})",
                self.vt1, self.vt2
            )));
        }
        if self.vt1 >= self.vt2 {
            return Err(AppError::missing_parameter(format!(
                "VT1 ({}) must be below VT2 ({})",
                self.vt1, self.vt2
            )));
        }
        Ok(())
    }

    /// Zero-based Lucia zone for `bpm`: below VT1, VT1 through VT2, above VT2
    #[must_use]
    pub fn zone_index(&self, bpm: f64) -> usize {
        if bpm < self.vt1 {
            0
        } else if bpm <= self.vt2 {
            1
        } else {
            2
        }
    }
}

/// `Σ zone_minutes[i] × (i + 1)` for the three Lucia zones
#[must_use]
pub fn lucia_trimp(zone_minutes: &[f64; 3]) -> f64 {
    weighted_minutes(zone_minutes, &ZONE_MULTIPLIERS)
}

/// Lucia calculator with caller-supplied thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct LuciaCalculator {
    thresholds: Option<LactateThresholds>,
}

impl LuciaCalculator {
    /// Create a calculator; `None` thresholds fail every computation
    #[must_use]
    pub const fn new(thresholds: Option<LactateThresholds>) -> Self {
        Self { thresholds }
    }

    /// Create a calculator with known thresholds
    #[must_use]
    pub const fn with_thresholds(vt1: f64, vt2: f64) -> Self {
        Self::new(Some(LactateThresholds::new(vt1, vt2)))
    }
}

#[async_trait]
impl LoadCalculator for LuciaCalculator {
    fn method(&self) -> LoadMethod {
        LoadMethod::Lucia
    }

    async fn compute(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<LoadResult> {
        let series = collect_heart_rate(sources, season, LoadMethod::Lucia).await?;
        let thresholds = self
            .thresholds
            .ok_or_else(|| AppError::missing_parameter("Lactate thresholds unavailable"))?;
        thresholds.validate()?;

        let (zone_minutes, _) =
            time_in_zones::<3>(&series, |bpm| Some(thresholds.zone_index(bpm)))?;
        let trimp = lucia_trimp(&zone_minutes);
        info!(
            season = %season,
            vt1 = thresholds.vt1,
            vt2 = thresholds.vt2,
            trimp,
            "Computed Lucia TRIMP"
        );
        Ok(LoadResult::new(
            LoadMethod::Lucia,
            LOAD_ACTIVITIES,
            season,
            trimp,
            LoadDetails::Lucia {
                vt1: thresholds.vt1,
                vt2: thresholds.vt2,
                zone_minutes,
            },
        ))
    }
}
