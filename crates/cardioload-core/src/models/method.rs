// ABOUTME: Training load method catalogue with native units, descriptions, and formulas
// ABOUTME: Banister exponential, Edwards zone-weighted, Lucia threshold-zone, acute:chronic ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::units::UnitId;

/// Training load method selection
///
/// - `Banister`: exponential heart-rate-reserve weighting
/// - `Edwards`: time in five %max-HR zones, weighted 1..5
/// - `Lucia`: time in three lactate-threshold zones, weighted 1..3
/// - `AcuteChronic`: 7-day over 28-day mean of daily Banister loads
///
/// # Scientific References
///
/// - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
/// - Edwards, S. (1993). "The Heart Rate Monitor Book." Polar Electro Oy.
/// - Lucia, A. et al. (2003). "Tour de France versus Vuelta a Espana." *Br J Sports Med*, 37(1), 50-55.
/// - Gabbett, T.J. (2016). "The training-injury prevention paradox." *Br J Sports Med*, 50(5), 273-280.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMethod {
    /// Banister exponential TRIMP
    ///
    /// Formula: `duration × HRr × k × exp(c × HRr)` with sex-specific `k`, `c`
    Banister,

    /// Edwards zone-weighted TRIMP
    ///
    /// Formula: `Σ(zone_minutes × zone_number)` for zones 1-5 (50-100 % max HR)
    Edwards,

    /// Lucia threshold-zone TRIMP
    ///
    /// Formula: `Σ(zone_minutes × zone_number)` for zones split at VT1 and VT2
    Lucia,

    /// Acute:chronic workload ratio
    ///
    /// Formula: `mean(last 7 daily loads) / mean(last 28 daily loads)`
    AcuteChronic,
}

impl LoadMethod {
    /// Every method, in declaration order
    pub const ALL: [Self; 4] = [Self::Banister, Self::Edwards, Self::Lucia, Self::AcuteChronic];

    /// Unit results of this method are expressed in
    #[must_use]
    pub const fn native_unit(&self) -> UnitId {
        match self {
            Self::Banister => UnitId::BanisterTrimp,
            Self::Edwards => UnitId::EdwardsTrimp,
            Self::Lucia => UnitId::LuciaTrimp,
            Self::AcuteChronic => UnitId::AcuteChronicRatio,
        }
    }

    /// Get method name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Banister => "banister",
            Self::Edwards => "edwards",
            Self::Lucia => "lucia",
            Self::AcuteChronic => "acute_chronic",
        }
    }

    /// Get method description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Banister => "Banister TRIMP (exponential, requires resting and max HR)",
            Self::Edwards => "Edwards TRIMP (5 zones of max HR, linear weights)",
            Self::Lucia => "Lucia TRIMP (3 zones split at lactate thresholds VT1/VT2)",
            Self::AcuteChronic => "Acute:chronic workload ratio of daily Banister loads",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Banister => "duration × HRr × k × exp(c × HRr), male k=0.64 c=1.92, female k=0.86 c=1.67",
            Self::Edwards => "Σ(zone_minutes × zone_number) for zones 1-5",
            Self::Lucia => "Σ(zone_minutes × zone_number) for zones <VT1, VT1-VT2, >VT2",
            Self::AcuteChronic => "mean(7-day daily load) / mean(28-day daily load)",
        }
    }
}

impl fmt::Display for LoadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoadMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banister" | "bannister" | "trimp" => Ok(Self::Banister),
            "edwards" | "zones" => Ok(Self::Edwards),
            "lucia" => Ok(Self::Lucia),
            "acute_chronic" | "acwr" | "training_load" | "ratio" => Ok(Self::AcuteChronic),
            other => Err(AppError::invalid_input(format!(
                "Unknown training load method: '{other}'. Valid options: banister, edwards, lucia, acute_chronic"
            ))),
        }
    }
}
