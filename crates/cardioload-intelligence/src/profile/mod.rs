// ABOUTME: Athlete profile with explicit attributes and on-demand resolution from data sources
// ABOUTME: Resolves sex, age, body metrics, resting and maximum heart rate, BMI, and training zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Athlete Profile
//!
//! A profile is built once per analysis session. Attributes set explicitly on
//! the profile win; anything left unset is resolved from the profile's data
//! sources on every call, with no caching. A source whose fetch fails counts as
//! a source with no data.
//!
//! Resolution is anchored at an `as_of` instant so that calculators working on
//! historical seasons see the parameters that applied at the time.

/// Heart rate training zones
pub mod zones;

use std::fmt;
use std::sync::Arc;

use cardioload_core::constants::heart_rate::FOX_MAX_HR_INTERCEPT;
use cardioload_core::models::{
    ActivityKinds, BiologicalSex, BmiCategory, MetricKind, SampleSeries, Season,
};
use cardioload_sources::{DataSource, SampleQuery};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::LookbackConfig;
pub use zones::{HeartRateZone, HeartRateZones};

/// Body mass index from weight (kg) and height (m)
///
/// `None` when height is not positive.
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_m: f64) -> Option<f64> {
    if height_m > 0.0 {
        Some(weight_kg / (height_m * height_m))
    } else {
        None
    }
}

/// Age-predicted maximum heart rate (Fox: 220 - age)
#[must_use]
pub fn estimated_max_heart_rate(age_years: u32) -> f64 {
    FOX_MAX_HR_INTERCEPT - f64::from(age_years)
}

/// Whole years between `date_of_birth` and `on`
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> Option<u32> {
    let mut years = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Athlete identity, explicit attributes, and the sources used to resolve the rest
#[derive(Clone)]
pub struct AthleteProfile {
    id: Uuid,
    name: String,
    biological_sex: Option<BiologicalSex>,
    date_of_birth: Option<NaiveDate>,
    age: Option<u32>,
    height_m: Option<f64>,
    weight_kg: Option<f64>,
    sources: Vec<Arc<dyn DataSource>>,
    lookback: LookbackConfig,
}

impl fmt::Debug for AthleteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AthleteProfile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("biological_sex", &self.biological_sex)
            .field("date_of_birth", &self.date_of_birth)
            .field("age", &self.age)
            .field("height_m", &self.height_m)
            .field("weight_kg", &self.weight_kg)
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl AthleteProfile {
    /// Profile with a fresh identity and no explicit attributes
    #[must_use]
    pub fn new(name: impl Into<String>, sources: Vec<Arc<dyn DataSource>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            biological_sex: None,
            date_of_birth: None,
            age: None,
            height_m: None,
            weight_kg: None,
            sources,
            lookback: LookbackConfig::default(),
        }
    }

    /// Set biological sex explicitly
    #[must_use]
    pub const fn with_biological_sex(mut self, sex: BiologicalSex) -> Self {
        self.biological_sex = Some(sex);
        self
    }

    /// Set date of birth explicitly
    #[must_use]
    pub const fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Set age explicitly; takes precedence over any date of birth
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set height in meters explicitly
    #[must_use]
    pub const fn with_height(mut self, height_m: f64) -> Self {
        self.height_m = Some(height_m);
        self
    }

    /// Set weight in kilograms explicitly
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Replace lookback windows
    #[must_use]
    pub const fn with_lookback(mut self, lookback: LookbackConfig) -> Self {
        self.lookback = lookback;
        self
    }

    /// Profile identity
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sources consulted for unset attributes
    #[must_use]
    pub fn sources(&self) -> &[Arc<dyn DataSource>] {
        &self.sources
    }

    /// Explicit biological sex, else the first source that reports one
    pub async fn resolve_biological_sex(&self) -> Option<BiologicalSex> {
        if self.biological_sex.is_some() {
            return self.biological_sex;
        }
        for source in &self.sources {
            match source.biological_sex().await {
                Ok(Some(sex)) => return Some(sex),
                Ok(None) => {}
                Err(error) => warn!(
                    source = source.name(),
                    error = %error,
                    "Biological sex lookup failed, treating as no data"
                ),
            }
        }
        None
    }

    /// Explicit date of birth, else the first source that reports one
    pub async fn resolve_date_of_birth(&self) -> Option<NaiveDate> {
        if self.date_of_birth.is_some() {
            return self.date_of_birth;
        }
        for source in &self.sources {
            match source.date_of_birth().await {
                Ok(Some(date)) => return Some(date),
                Ok(None) => {}
                Err(error) => warn!(
                    source = source.name(),
                    error = %error,
                    "Date of birth lookup failed, treating as no data"
                ),
            }
        }
        None
    }

    /// Explicit age, else age derived from the resolved date of birth on `as_of`
    pub async fn resolve_age(&self, as_of: DateTime<Utc>) -> Option<u32> {
        if self.age.is_some() {
            return self.age;
        }
        let date_of_birth = self.resolve_date_of_birth().await?;
        age_on(date_of_birth, as_of.date_naive())
    }

    /// Height in meters: explicit, else the most recent height sample within the lookback
    pub async fn resolve_height(&self, as_of: DateTime<Utc>) -> Option<f64> {
        if self.height_m.is_some() {
            return self.height_m;
        }
        self.most_recent_body_metric(MetricKind::Height, as_of).await
    }

    /// Weight in kilograms: explicit, else the most recent body mass sample within the lookback
    pub async fn resolve_weight(&self, as_of: DateTime<Utc>) -> Option<f64> {
        if self.weight_kg.is_some() {
            return self.weight_kg;
        }
        self.most_recent_body_metric(MetricKind::BodyMass, as_of).await
    }

    /// Body mass index, `None` if weight or a positive height is unavailable
    pub async fn resolve_bmi(&self, as_of: DateTime<Utc>) -> Option<f64> {
        let weight = self.resolve_weight(as_of).await?;
        let height = self.resolve_height(as_of).await?;
        body_mass_index(weight, height)
    }

    /// BMI category, `None` if BMI is unavailable
    pub async fn resolve_bmi_category(&self, as_of: DateTime<Utc>) -> Option<BmiCategory> {
        self.resolve_bmi(as_of).await.map(BmiCategory::from_bmi)
    }

    /// `220 - age`, `None` without an age
    pub async fn resolve_estimated_max_heart_rate(&self, as_of: DateTime<Utc>) -> Option<f64> {
        self.resolve_age(as_of).await.map(estimated_max_heart_rate)
    }

    /// Most recent resting heart rate (bpm) within the lookback ending at `as_of`
    pub async fn resolve_resting_heart_rate(&self, as_of: DateTime<Utc>) -> Option<f64> {
        let season = Season::ending_at(
            as_of,
            Duration::days(i64::from(self.lookback.resting_heart_rate_days)),
        );
        let query = SampleQuery::any_activity(MetricKind::RestingHeartRate, season);
        let series = query
            .collect_lenient(&query.supporting_metric(&self.sources))
            .await;
        let resting = latest_value(&series);
        debug!(profile = %self.name, resting_heart_rate = ?resting, "Resolved resting heart rate");
        resting
    }

    /// Maximum heart rate (bpm): the larger of the highest running or cycling heart
    /// rate observed within the lookback and the age estimate, whichever exist
    pub async fn resolve_max_heart_rate(&self, as_of: DateTime<Utc>) -> Option<f64> {
        let observed = self.observed_max_heart_rate(as_of).await;
        let estimated = self.resolve_estimated_max_heart_rate(as_of).await;
        let max = match (observed, estimated) {
            (Some(observed), Some(estimated)) => Some(observed.max(estimated)),
            (observed, estimated) => observed.or(estimated),
        };
        debug!(
            profile = %self.name,
            observed = ?observed,
            estimated = ?estimated,
            max_heart_rate = ?max,
            "Resolved max heart rate"
        );
        max
    }

    /// Training zones from the resolved maximum heart rate
    pub async fn resolve_heart_rate_zones(&self, as_of: DateTime<Utc>) -> Option<HeartRateZones> {
        self.resolve_max_heart_rate(as_of)
            .await
            .map(HeartRateZones::from_max)
    }

    async fn observed_max_heart_rate(&self, as_of: DateTime<Utc>) -> Option<f64> {
        let start = as_of
            .checked_sub_months(Months::new(self.lookback.max_heart_rate_months))
            .unwrap_or(as_of);
        let season = Season::ending_at(as_of, as_of - start);
        let query = SampleQuery::new(MetricKind::HeartRate, season)
            .with_activities(ActivityKinds::high_intensity());
        let series = query
            .collect_lenient(&query.supporting_metric(&self.sources))
            .await;
        match series.max_in(MetricKind::HeartRate.canonical_unit()) {
            Ok(max) => max,
            Err(error) => {
                warn!(error = %error, "Heart rate samples carry a non-frequency unit, ignoring");
                None
            }
        }
    }

    async fn most_recent_body_metric(&self, metric: MetricKind, as_of: DateTime<Utc>) -> Option<f64> {
        let season = Season::ending_at(
            as_of,
            Duration::days(i64::from(self.lookback.body_metrics_days)),
        );
        let query = SampleQuery::any_activity(metric, season);
        let series = query
            .collect_lenient(&query.supporting_metric(&self.sources))
            .await;
        latest_value(&series)
    }
}

/// Value of the most recent sample in the metric's canonical unit
fn latest_value(series: &SampleSeries) -> Option<f64> {
    let sample = series.most_recent()?;
    match sample.value_in(series.metric().canonical_unit()) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(metric = %series.metric(), error = %error, "Ignoring sample with incompatible unit");
            None
        }
    }
}
