// ABOUTME: Banister exponential TRIMP over a season of heart rate samples
// ABOUTME: Uses heart rate reserve with sex-specific coefficients; never clamps an invalid reserve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use cardioload_core::constants::banister::{
    FEMALE_EXPONENT, FEMALE_MULTIPLIER, MALE_EXPONENT, MALE_MULTIPLIER,
};
use cardioload_core::errors::{AppError, AppResult};
use cardioload_core::models::{BiologicalSex, LoadDetails, LoadMethod, LoadResult, MetricKind, Season};
use cardioload_sources::DataSource;
use tracing::info;

use super::{collect_heart_rate_with, FetchPolicy, LoadCalculator, LOAD_ACTIVITIES};
use crate::profile::AthleteProfile;

/// Fraction of heart rate reserve used: `(mean - rest) / (max - rest)`
///
/// # Errors
///
/// Returns `MissingRequiredParameter` if `max <= rest` or the fraction falls
/// outside `[0, 1]`
pub fn heart_rate_reserve(mean: f64, resting: f64, max: f64) -> AppResult<f64> {
    let reserve = max - resting;
    if reserve.is_nan() || reserve <= 0.0 {
        return Err(AppError::missing_parameter(format!(
            "Maximum heart rate {max} must exceed resting heart rate {resting}"
        )));
    }
    let fraction = (mean - resting) / reserve;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(AppError::missing_parameter(format!(
            "Heart rate reserve {fraction:.3} outside [0, 1] (mean {mean}, rest {resting}, max {max})"
        )));
    }
    Ok(fraction)
}

/// `duration × HRr × k × e^(c × HRr)`
///
/// Female uses `k = 0.86, c = 1.67`; male, other, and unknown use `k = 0.64, c = 1.92`.
#[must_use]
pub fn banister_trimp(duration_minutes: f64, reserve: f64, sex: Option<BiologicalSex>) -> f64 {
    let (multiplier, exponent) = match sex {
        Some(BiologicalSex::Female) => (FEMALE_MULTIPLIER, FEMALE_EXPONENT),
        Some(BiologicalSex::Male | BiologicalSex::Other) | None => (MALE_MULTIPLIER, MALE_EXPONENT),
    };
    duration_minutes * reserve * multiplier * (exponent * reserve).exp()
}

/// Banister calculator bound to an athlete profile
///
/// Resting and maximum heart rate are resolved as of the season end.
#[derive(Debug, Clone)]
pub struct BanisterCalculator {
    profile: Arc<AthleteProfile>,
}

impl BanisterCalculator {
    /// Create a calculator for `profile`
    #[must_use]
    pub const fn new(profile: Arc<AthleteProfile>) -> Self {
        Self { profile }
    }

    /// Athlete profile used for physiological parameters
    #[must_use]
    pub fn profile(&self) -> &AthleteProfile {
        &self.profile
    }

    /// Banister load for `season`, treating a failing source as having no samples
    ///
    /// # Errors
    ///
    /// Same gating as `LoadCalculator::compute`, except that a source fetch
    /// error never fails the computation on its own
    pub async fn compute_lenient(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<LoadResult> {
        self.compute_with(sources, season, FetchPolicy::Lenient).await
    }

    async fn compute_with(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
        policy: FetchPolicy,
    ) -> AppResult<LoadResult> {
        let series = collect_heart_rate_with(sources, season, LoadMethod::Banister, policy).await?;
        let unit = MetricKind::HeartRate.canonical_unit();
        let mean = series.mean_in(unit)?.ok_or_else(|| {
            AppError::no_supported_metrics(format!("banister: no heart rate samples in {season}"))
        })?;
        let duration = series.span_minutes();

        let as_of = season.end();
        let resting = self
            .profile
            .resolve_resting_heart_rate(as_of)
            .await
            .ok_or_else(|| AppError::missing_parameter("Resting heart rate unavailable"))?;
        let max = self
            .profile
            .resolve_max_heart_rate(as_of)
            .await
            .ok_or_else(|| AppError::missing_parameter("Maximum heart rate unavailable"))?;
        let reserve = heart_rate_reserve(mean, resting, max)?;
        let sex = self.profile.resolve_biological_sex().await;

        let trimp = banister_trimp(duration, reserve, sex);
        info!(
            profile = self.profile.name(),
            season = %season,
            duration_minutes = duration,
            heart_rate_reserve = reserve,
            trimp,
            "Computed Banister TRIMP"
        );
        Ok(LoadResult::new(
            LoadMethod::Banister,
            LOAD_ACTIVITIES,
            season,
            trimp,
            LoadDetails::Banister {
                duration_minutes: duration,
                mean_heart_rate: mean,
                resting_heart_rate: resting,
                max_heart_rate: max,
                heart_rate_reserve: reserve,
                sex,
                sample_count: series.len(),
            },
        ))
    }
}

#[async_trait]
impl LoadCalculator for BanisterCalculator {
    fn method(&self) -> LoadMethod {
        LoadMethod::Banister
    }

    async fn compute(
        &self,
        sources: &[Arc<dyn DataSource>],
        season: &Season,
    ) -> AppResult<LoadResult> {
        self.compute_with(sources, season, FetchPolicy::Strict).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_session_male_and_female() {
        let reserve = heart_rate_reserve(150.0, 60.0, 180.0).unwrap();
        assert!((reserve - 0.75).abs() < 1e-12);

        let male = banister_trimp(60.0, reserve, Some(BiologicalSex::Male));
        assert!((male - 121.6).abs() < 0.1, "male {male}");

        let female = banister_trimp(60.0, reserve, Some(BiologicalSex::Female));
        assert!((female - 135.3).abs() < 0.2, "female {female}");
    }

    #[test]
    fn test_unknown_and_other_use_male_coefficients() {
        let male = banister_trimp(45.0, 0.6, Some(BiologicalSex::Male));
        assert!((banister_trimp(45.0, 0.6, None) - male).abs() < f64::EPSILON);
        assert!((banister_trimp(45.0, 0.6, Some(BiologicalSex::Other)) - male).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monotonic_in_duration_and_reserve() {
        let mut previous = 0.0;
        for step in 1..=10 {
            let reserve = f64::from(step) / 10.0;
            let trimp = banister_trimp(60.0, reserve, None);
            assert!(trimp > previous);
            previous = trimp;
        }
        assert!(banister_trimp(90.0, 0.7, None) > banister_trimp(60.0, 0.7, None));
    }

    #[test]
    fn test_invalid_reserve_is_not_clamped() {
        let below = heart_rate_reserve(55.0, 60.0, 180.0).unwrap_err();
        assert_eq!(below.code, cardioload_core::errors::ErrorCode::MissingRequiredParameter);
        assert!(heart_rate_reserve(185.0, 60.0, 180.0).is_err());
        assert!(heart_rate_reserve(150.0, 180.0, 180.0).is_err());
    }
}
