// ABOUTME: Zones command for cardioload-cli
// ABOUTME: Prints the five heart rate zones for a measured or age-estimated maximum heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use cardioload_intelligence::profile::{estimated_max_heart_rate, HeartRateZones};

use crate::helpers::display;

/// Show zones for `max_hr`, or for `220 - age`
pub fn run(max_hr: Option<f64>, age: Option<u32>, as_json: bool) -> Result<()> {
    let max = match (max_hr, age) {
        (Some(max), _) => max,
        (None, Some(age)) => estimated_max_heart_rate(age),
        (None, None) => bail!("either --max-hr or --age is required"),
    };
    if !max.is_finite() || max <= 0.0 {
        bail!("maximum heart rate must be positive, got {max}");
    }

    let zones = HeartRateZones::from_max(max);
    if as_json {
        display::print_json(&zones)
    } else {
        display::display_zones(&zones);
        Ok(())
    }
}
