// ABOUTME: Training load calculators, athlete profile resolution, and calculator configuration
// ABOUTME: Banister, Edwards, Lucia, and acute:chronic methods over cardioload data sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cardioload Intelligence
//!
//! Computes training load scores from heart rate samples.
//!
//! ## Modules
//!
//! - **calculators**: `LoadCalculator` trait and the four load methods
//! - **profile**: `AthleteProfile` with lazily resolved physiology, heart rate zones
//! - **config**: `IntelligenceConfig` loaded from `CARDIOLOAD_*` environment variables
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cardioload_core::models::Season;
//! use cardioload_intelligence::calculators::{EdwardsCalculator, LoadCalculator};
//! use cardioload_intelligence::profile::AthleteProfile;
//! use cardioload_sources::{DataSource, SyntheticSource};
//!
//! # async fn example(season: Season) -> cardioload_core::errors::AppResult<()> {
//! let sources: Vec<Arc<dyn DataSource>> = vec![Arc::new(SyntheticSource::new("watch"))];
//! let profile = Arc::new(AthleteProfile::new("Ada", sources.clone()).with_age(35));
//! let result = EdwardsCalculator::new(profile).compute(&sources, &season).await?;
//! println!("{} {}", result.value(), result.unit());
//! # Ok(())
//! # }
//! ```

/// Training load calculators
pub mod calculators;

/// Environment-driven calculator configuration
pub mod config;

/// Athlete profile and heart rate zones
pub mod profile;

pub use calculators::{
    AcuteChronicCalculator, BanisterCalculator, EdwardsCalculator, LactateThresholds,
    LoadCalculator, LoadStatus, LuciaCalculator,
};
pub use config::{ConfigError, IntelligenceConfig, LookbackConfig, WorkloadConfig};
pub use profile::{AthleteProfile, HeartRateZone, HeartRateZones};
