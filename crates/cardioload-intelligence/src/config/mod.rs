// ABOUTME: Environment-driven configuration for calculators, profile lookbacks, and unit normalization
// ABOUTME: Every value defaults to the physiological constants and can be overridden with CARDIOLOAD_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Configuration
//!
//! Environment-only configuration. `from_env` falls back to the default for
//! any unset or unparsable variable; `try_from_env` reports unparsable values.
//!
//! | Variable | Default |
//! |---|---|
//! | `CARDIOLOAD_BANISTER_DIVISOR` | 3.0 |
//! | `CARDIOLOAD_EDWARDS_DIVISOR` | 2.5 |
//! | `CARDIOLOAD_LUCIA_DIVISOR` | 2.0 |
//! | `CARDIOLOAD_AVERAGE_INTENSITY` | 0.65 |
//! | `CARDIOLOAD_WEEKLY_BASELINE_MINUTES` | 300 |
//! | `CARDIOLOAD_RESTING_HR_LOOKBACK_DAYS` | 30 |
//! | `CARDIOLOAD_MAX_HR_LOOKBACK_MONTHS` | 6 |
//! | `CARDIOLOAD_BODY_METRICS_LOOKBACK_DAYS` | 365 |
//! | `CARDIOLOAD_ACUTE_WINDOW_DAYS` | 7 |
//! | `CARDIOLOAD_CHRONIC_WINDOW_DAYS` | 28 |

/// Configuration error types
pub mod error;

use std::env;
use std::str::FromStr;

use cardioload_core::constants::{lookback, workload};
use cardioload_core::units::{NormalizationCalibration, UnitRegistry};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

const BANISTER_DIVISOR: &str = "CARDIOLOAD_BANISTER_DIVISOR";
const EDWARDS_DIVISOR: &str = "CARDIOLOAD_EDWARDS_DIVISOR";
const LUCIA_DIVISOR: &str = "CARDIOLOAD_LUCIA_DIVISOR";
const AVERAGE_INTENSITY: &str = "CARDIOLOAD_AVERAGE_INTENSITY";
const WEEKLY_BASELINE_MINUTES: &str = "CARDIOLOAD_WEEKLY_BASELINE_MINUTES";
const RESTING_HR_LOOKBACK_DAYS: &str = "CARDIOLOAD_RESTING_HR_LOOKBACK_DAYS";
const MAX_HR_LOOKBACK_MONTHS: &str = "CARDIOLOAD_MAX_HR_LOOKBACK_MONTHS";
const BODY_METRICS_LOOKBACK_DAYS: &str = "CARDIOLOAD_BODY_METRICS_LOOKBACK_DAYS";
const ACUTE_WINDOW_DAYS: &str = "CARDIOLOAD_ACUTE_WINDOW_DAYS";
const CHRONIC_WINDOW_DAYS: &str = "CARDIOLOAD_CHRONIC_WINDOW_DAYS";

/// How far back the athlete profile looks for each resolved parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackConfig {
    /// Resting heart rate window, days
    pub resting_heart_rate_days: u32,
    /// Observed maximum heart rate window, months
    pub max_heart_rate_months: u32,
    /// Height and body mass window, days
    pub body_metrics_days: u32,
}

impl Default for LookbackConfig {
    fn default() -> Self {
        Self {
            resting_heart_rate_days: lookback::RESTING_HR_DAYS,
            max_heart_rate_months: lookback::MAX_HR_MONTHS,
            body_metrics_days: lookback::BODY_METRICS_DAYS,
        }
    }
}

/// Acute and chronic window lengths for the workload ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Acute window, days
    pub acute_window_days: u32,
    /// Chronic window, days
    pub chronic_window_days: u32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            acute_window_days: workload::ACUTE_WINDOW_DAYS,
            chronic_window_days: workload::CHRONIC_WINDOW_DAYS,
        }
    }
}

/// Complete calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Method normalization constants for unit conversion
    pub normalization: NormalizationCalibration,
    /// Athlete profile lookbacks
    pub lookback: LookbackConfig,
    /// Workload ratio windows
    pub workload: WorkloadConfig,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{key}='{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(error) => Err(error.into()),
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl IntelligenceConfig {
    /// Load configuration from environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            normalization: NormalizationCalibration {
                banister_divisor: env_or(BANISTER_DIVISOR, defaults.normalization.banister_divisor),
                edwards_divisor: env_or(EDWARDS_DIVISOR, defaults.normalization.edwards_divisor),
                lucia_divisor: env_or(LUCIA_DIVISOR, defaults.normalization.lucia_divisor),
                average_intensity: env_or(
                    AVERAGE_INTENSITY,
                    defaults.normalization.average_intensity,
                ),
                weekly_baseline_minutes: env_or(
                    WEEKLY_BASELINE_MINUTES,
                    defaults.normalization.weekly_baseline_minutes,
                ),
            },
            lookback: LookbackConfig {
                resting_heart_rate_days: env_or(
                    RESTING_HR_LOOKBACK_DAYS,
                    defaults.lookback.resting_heart_rate_days,
                ),
                max_heart_rate_months: env_or(
                    MAX_HR_LOOKBACK_MONTHS,
                    defaults.lookback.max_heart_rate_months,
                ),
                body_metrics_days: env_or(
                    BODY_METRICS_LOOKBACK_DAYS,
                    defaults.lookback.body_metrics_days,
                ),
            },
            workload: WorkloadConfig {
                acute_window_days: env_or(ACUTE_WINDOW_DAYS, defaults.workload.acute_window_days),
                chronic_window_days: env_or(
                    CHRONIC_WINDOW_DAYS,
                    defaults.workload.chronic_window_days,
                ),
            },
        }
    }

    /// Load configuration from environment, rejecting unparsable values, then validate it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for a value that does not parse,
    /// `ConfigError::EnvVar` for a non-unicode value, or any `validate` error
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            normalization: NormalizationCalibration {
                banister_divisor: parse_env(BANISTER_DIVISOR, defaults.normalization.banister_divisor)?,
                edwards_divisor: parse_env(EDWARDS_DIVISOR, defaults.normalization.edwards_divisor)?,
                lucia_divisor: parse_env(LUCIA_DIVISOR, defaults.normalization.lucia_divisor)?,
                average_intensity: parse_env(
                    AVERAGE_INTENSITY,
                    defaults.normalization.average_intensity,
                )?,
                weekly_baseline_minutes: parse_env(
                    WEEKLY_BASELINE_MINUTES,
                    defaults.normalization.weekly_baseline_minutes,
                )?,
            },
            lookback: LookbackConfig {
                resting_heart_rate_days: parse_env(
                    RESTING_HR_LOOKBACK_DAYS,
                    defaults.lookback.resting_heart_rate_days,
                )?,
                max_heart_rate_months: parse_env(
                    MAX_HR_LOOKBACK_MONTHS,
                    defaults.lookback.max_heart_rate_months,
                )?,
                body_metrics_days: parse_env(
                    BODY_METRICS_LOOKBACK_DAYS,
                    defaults.lookback.body_metrics_days,
                )?,
            },
            workload: WorkloadConfig {
                acute_window_days: parse_env(
                    ACUTE_WINDOW_DAYS,
                    defaults.workload.acute_window_days,
                )?,
                chronic_window_days: parse_env(
                    CHRONIC_WINDOW_DAYS,
                    defaults.workload.chronic_window_days,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive divisors, baselines,
    /// windows or lookbacks and for an intensity outside (0, 1], and
    /// `ConfigError::InvalidRange` if the acute window exceeds the chronic window
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.normalization;
        for divisor in [n.banister_divisor, n.edwards_divisor, n.lucia_divisor] {
            if !is_positive(divisor) {
                return Err(ConfigError::ValueOutOfRange(
                    "normalization divisors must be positive",
                ));
            }
        }
        if !is_positive(n.average_intensity) || n.average_intensity > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "average intensity must be in (0, 1]",
            ));
        }
        if !is_positive(n.weekly_baseline_minutes) {
            return Err(ConfigError::ValueOutOfRange(
                "weekly baseline minutes must be positive",
            ));
        }

        let l = &self.lookback;
        if l.resting_heart_rate_days == 0 || l.max_heart_rate_months == 0 || l.body_metrics_days == 0 {
            return Err(ConfigError::ValueOutOfRange("lookbacks must be at least 1"));
        }

        let w = &self.workload;
        if w.acute_window_days == 0 || w.chronic_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "workload windows must be at least 1 day",
            ));
        }
        if w.acute_window_days > w.chronic_window_days {
            return Err(ConfigError::InvalidRange(
                "acute window must not exceed chronic window",
            ));
        }
        Ok(())
    }

    /// Unit conversion network using this configuration's normalization constants
    #[must_use]
    pub fn unit_registry(&self) -> UnitRegistry {
        UnitRegistry::new(self.normalization)
    }
}
