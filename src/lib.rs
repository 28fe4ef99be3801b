// ABOUTME: Main library entry point for cardioload heart-rate training load scores
// ABOUTME: Re-exports the workspace crates and adds sessions, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cardioload
//!
//! Standardized training load scores from heart rate samples, with conversion
//! between the scales of competing methods.
//!
//! ## Features
//!
//! - **Banister**: exponential heart-rate-reserve TRIMP
//! - **Edwards**: time in five %max-HR zones weighted 1..5
//! - **Lucia**: time in three lactate-threshold zones weighted 1..3
//! - **Acute:chronic**: 7-day over 28-day mean of daily Banister loads
//! - **Unit network**: linear, method-normalization, and polynomial converters
//!
//! ## Architecture
//!
//! - **`cardioload_core`**: errors, units, samples, seasons
//! - **`cardioload_sources`**: `DataSource` trait, synthetic and JSON file sources
//! - **`cardioload_intelligence`**: calculators, athlete profile, configuration
//! - **analysis**: `AnalysisSession` selecting a calculator per method
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cardioload::analysis::AnalysisSession;
//! use cardioload::config::AppConfig;
//! use cardioload_core::models::{LoadMethod, Season};
//! use cardioload_core::units::UnitId;
//! use cardioload_intelligence::profile::AthleteProfile;
//! use cardioload_sources::{DataSource, JsonFileSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env();
//!     let strap: Arc<dyn DataSource> = Arc::new(JsonFileSource::load("strap.json").await?);
//!     let profile = AthleteProfile::new("Ada", vec![strap]).with_age(35);
//!     let session = AnalysisSession::new(profile, config.intelligence);
//!
//!     let season = Season::ending_at(chrono::Utc::now(), chrono::Duration::days(1));
//!     let banister = session.compute(LoadMethod::Banister, &season).await?;
//!     let edwards = session.convert(&banister, UnitId::EdwardsTrimp)?;
//!     println!("{} ~ {}", banister.measurement, edwards);
//!     Ok(())
//! }
//! ```

/// Analysis sessions selecting calculators per method
pub mod analysis;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use cardioload_core;
pub use cardioload_intelligence;
pub use cardioload_sources;

pub use analysis::AnalysisSession;
pub use config::AppConfig;
pub use logging::{LogFormat, LoggingConfig};
