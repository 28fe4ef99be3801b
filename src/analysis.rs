// ABOUTME: Analysis session tying sources, an athlete profile, and configuration to the calculators
// ABOUTME: Selects a calculator per method and converts results through the unit network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use cardioload_core::errors::AppResult;
use cardioload_core::models::{LoadMethod, LoadResult, Season};
use cardioload_core::units::{Measurement, UnitId, UnitRegistry};
use cardioload_intelligence::calculators::{
    AcuteChronicCalculator, BanisterCalculator, EdwardsCalculator, LactateThresholds,
    LoadCalculator, LuciaCalculator,
};
use cardioload_intelligence::config::IntelligenceConfig;
use cardioload_intelligence::profile::AthleteProfile;
use cardioload_sources::DataSource;
use tracing::info;

/// One athlete, one set of sources, one configuration
///
/// The profile is built once per session; its lookbacks come from the session
/// configuration.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    config: IntelligenceConfig,
    profile: Arc<AthleteProfile>,
    thresholds: Option<LactateThresholds>,
    registry: UnitRegistry,
}

impl AnalysisSession {
    /// Create a session; the profile's sources are the ones every calculator reads
    #[must_use]
    pub fn new(profile: AthleteProfile, config: IntelligenceConfig) -> Self {
        Self {
            profile: Arc::new(profile.with_lookback(config.lookback)),
            registry: config.unit_registry(),
            thresholds: None,
            config,
        }
    }

    /// Provide lactate thresholds for the Lucia method
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: LactateThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Replace the conversion network, e.g. with calibrated polynomial converters
    #[must_use]
    pub fn with_registry(mut self, registry: UnitRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Athlete profile
    #[must_use]
    pub fn profile(&self) -> &AthleteProfile {
        &self.profile
    }

    /// Sources every calculator reads
    #[must_use]
    pub fn sources(&self) -> &[Arc<dyn DataSource>] {
        self.profile.sources()
    }

    /// Conversion network used by [`Self::convert`]
    #[must_use]
    pub const fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Calculator implementing `method`
    #[must_use]
    pub fn calculator(&self, method: LoadMethod) -> Box<dyn LoadCalculator> {
        let banister = BanisterCalculator::new(Arc::clone(&self.profile));
        match method {
            LoadMethod::Banister => Box::new(banister),
            LoadMethod::Edwards => Box::new(EdwardsCalculator::new(Arc::clone(&self.profile))),
            LoadMethod::Lucia => Box::new(LuciaCalculator::new(self.thresholds)),
            LoadMethod::AcuteChronic => Box::new(AcuteChronicCalculator::with_workload(
                banister,
                self.config.workload,
            )),
        }
    }

    /// Compute `method` over `season`
    ///
    /// # Errors
    ///
    /// Returns the calculator's gating or parameter error
    pub async fn compute(&self, method: LoadMethod, season: &Season) -> AppResult<LoadResult> {
        let result = self
            .calculator(method)
            .compute(self.sources(), season)
            .await?;
        info!(
            method = %method,
            value = result.value(),
            unit = %result.unit(),
            "Load computed"
        );
        Ok(result)
    }

    /// Express a result in another training load unit
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleUnits` if `target` is not a training load unit
    pub fn convert(&self, result: &LoadResult, target: UnitId) -> AppResult<Measurement> {
        Ok(self.registry.convert(result.measurement, target)?)
    }
}
