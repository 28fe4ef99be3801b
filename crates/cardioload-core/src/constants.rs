// ABOUTME: Physiological and algorithm constants for training load calculations
// ABOUTME: Banister coefficients, zone bounds, lookback windows, and normalization defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on sports science research.
//!
//! Values that are empirical placeholders rather than published coefficients
//! live in [`normalization`] and are overridable through configuration.

/// Heart rate constants
///
/// References:
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
pub mod heart_rate {
    /// Intercept of the age-predicted maximum heart rate formula (220 - age)
    pub const FOX_MAX_HR_INTERCEPT: f64 = 220.0;

    /// Lower bound of the zone model as a fraction of max HR
    pub const ZONE_FLOOR_FRACTION: f64 = 0.50;

    /// Width of each heart rate zone as a fraction of max HR
    pub const ZONE_WIDTH_FRACTION: f64 = 0.10;

    /// Number of heart rate zones
    pub const ZONE_COUNT: usize = 5;
}

/// Banister TRIMP coefficients
///
/// Reference: Banister, E.W. (1991). "Modeling elite athletic performance."
/// *Physiological Testing of Elite Athletes*.
pub mod banister {
    /// Male weighting multiplier
    pub const MALE_MULTIPLIER: f64 = 0.64;
    /// Male exponential factor
    pub const MALE_EXPONENT: f64 = 1.92;
    /// Female weighting multiplier
    pub const FEMALE_MULTIPLIER: f64 = 0.86;
    /// Female exponential factor
    pub const FEMALE_EXPONENT: f64 = 1.67;
}

/// Edwards zone multipliers, zone 1 (50-60 % max HR) through zone 5 (90-100 %)
///
/// Reference: Edwards, S. (1993). "The Heart Rate Monitor Book." Polar Electro Oy.
pub mod edwards {
    /// Weight applied to minutes in each zone
    pub const ZONE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
}

/// Lucia three-zone multipliers (below VT1, VT1-VT2, above VT2)
///
/// Reference: Lucia, A. et al. (2003). "Tour de France versus Vuelta a Espana."
/// *Br J Sports Med*, 37(1), 50-55.
pub mod lucia {
    /// Weight applied to minutes in each zone
    pub const ZONE_MULTIPLIERS: [f64; 3] = [1.0, 2.0, 3.0];
}

/// Acute:chronic workload ratio windows and bands
///
/// Reference: Gabbett, T.J. (2016). "The training-injury prevention paradox."
/// *Br J Sports Med*, 50(5), 273-280.
pub mod workload {
    /// Chronic window length in days
    pub const CHRONIC_WINDOW_DAYS: u32 = 28;
    /// Acute window length in days
    pub const ACUTE_WINDOW_DAYS: u32 = 7;
    /// Lower edge of the informational "optimal" ratio band
    pub const OPTIMAL_RATIO_LOW: f64 = 0.8;
    /// Upper edge of the informational "optimal" ratio band
    pub const OPTIMAL_RATIO_HIGH: f64 = 1.3;
    /// Ratios above this are flagged as high risk
    pub const HIGH_RISK_RATIO: f64 = 1.5;
}

/// Lookback windows used when resolving athlete parameters from data sources
pub mod lookback {
    /// Resting heart rate search window in days
    pub const RESTING_HR_DAYS: u32 = 30;
    /// Observed maximum heart rate search window in months
    pub const MAX_HR_MONTHS: u32 = 6;
    /// Height and body mass search window in days
    pub const BODY_METRICS_DAYS: u32 = 365;
}

/// Body mass index category thresholds (kg/m²), WHO classification
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value: normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value: overweight; at or above: obese
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Method-normalization defaults for the intensity-weighted-minutes base unit
///
/// These are uncalibrated approximations, not physiological law.
pub mod normalization {
    /// Banister TRIMP divisor
    pub const BANISTER_DIVISOR: f64 = 3.0;
    /// Edwards TRIMP divisor
    pub const EDWARDS_DIVISOR: f64 = 2.5;
    /// Lucia TRIMP divisor
    pub const LUCIA_DIVISOR: f64 = 2.0;
    /// Assumed average intensity of a session
    pub const AVERAGE_INTENSITY: f64 = 0.65;
    /// Weekly training volume a ratio of 1.0 corresponds to, in minutes
    pub const WEEKLY_BASELINE_MINUTES: f64 = 300.0;
}

/// Newton-Raphson settings for inverting empirical polynomial converters
pub mod newton {
    /// Maximum number of iterations
    pub const MAX_ITERATIONS: u32 = 100;
    /// Residual and derivative magnitude below which iteration stops
    pub const TOLERANCE: f64 = 1e-6;
}
