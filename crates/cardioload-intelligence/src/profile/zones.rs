// ABOUTME: Five-band heart rate training zones derived from maximum heart rate
// ABOUTME: Contiguous 10% bands from 50% to 100% of max; the top band includes max itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cardioload_core::constants::heart_rate::{ZONE_COUNT, ZONE_FLOOR_FRACTION, ZONE_WIDTH_FRACTION};
use serde::{Deserialize, Serialize};

const ZONE_NAMES: [&str; ZONE_COUNT] = ["Very light", "Light", "Moderate", "Hard", "Maximum"];

/// One heart rate band `[lower_bpm, upper_bpm)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Zone number, 1 (easiest) to 5
    pub number: u8,
    /// Display name
    pub name: String,
    /// Inclusive lower bound, bpm
    pub lower_bpm: f64,
    /// Upper bound, bpm (exclusive except for the top zone)
    pub upper_bpm: f64,
}

impl HeartRateZone {
    /// Whether `bpm` falls in this zone, treating the upper bound as inclusive when `closed`
    fn holds(&self, bpm: f64, closed: bool) -> bool {
        bpm >= self.lower_bpm && (bpm < self.upper_bpm || (closed && bpm <= self.upper_bpm))
    }
}

/// Heart rate training zones for one maximum heart rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZones {
    max_heart_rate: f64,
    zones: Vec<HeartRateZone>,
}

impl HeartRateZones {
    /// Zones for `max_heart_rate` (bpm)
    #[must_use]
    pub fn from_max(max_heart_rate: f64) -> Self {
        // Shared bounds keep neighbouring zones exactly contiguous
        let bound = |index: usize| {
            if index == ZONE_COUNT {
                max_heart_rate
            } else {
                max_heart_rate * (index as f64).mul_add(ZONE_WIDTH_FRACTION, ZONE_FLOOR_FRACTION)
            }
        };
        let zones = ZONE_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| HeartRateZone {
                number: (index + 1) as u8,
                name: (*name).to_owned(),
                lower_bpm: bound(index),
                upper_bpm: bound(index + 1),
            })
            .collect();
        Self {
            max_heart_rate,
            zones,
        }
    }

    /// Maximum heart rate the zones derive from
    #[must_use]
    pub const fn max_heart_rate(&self) -> f64 {
        self.max_heart_rate
    }

    /// Zones, easiest first
    #[must_use]
    pub fn zones(&self) -> &[HeartRateZone] {
        &self.zones
    }

    /// The only zone containing `bpm`, or `None` outside `[0.5 × max, max]`
    #[must_use]
    pub fn zone_for(&self, bpm: f64) -> Option<&HeartRateZone> {
        if bpm > self.max_heart_rate {
            return None;
        }
        let last = self.zones.len().saturating_sub(1);
        self.zones
            .iter()
            .enumerate()
            .find(|(index, zone)| zone.holds(bpm, *index == last))
            .map(|(_, zone)| zone)
    }

    /// Zero-based index of the zone containing `bpm`
    #[must_use]
    pub fn zone_index(&self, bpm: f64) -> Option<usize> {
        self.zone_for(bpm)
            .map(|zone| usize::from(zone.number.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zones_are_contiguous() {
        let zones = HeartRateZones::from_max(200.0);
        assert_eq!(zones.zones().len(), 5);
        assert!((zones.zones()[0].lower_bpm - 100.0).abs() < 1e-9);
        assert!((zones.zones()[4].upper_bpm - 200.0).abs() < 1e-9);
        for pair in zones.zones().windows(2) {
            assert!((pair[0].upper_bpm - pair[1].lower_bpm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zone_for_boundaries() {
        let zones = HeartRateZones::from_max(200.0);
        assert_eq!(zones.zone_for(99.9).map(|z| z.number), None);
        assert_eq!(zones.zone_for(100.0).map(|z| z.number), Some(1));
        assert_eq!(zones.zone_for(155.0).map(|z| z.number), Some(3));
        assert_eq!(zones.zone_for(200.0).map(|z| z.number), Some(5));
        assert_eq!(zones.zone_for(200.1).map(|z| z.number), None);
    }

    #[test]
    fn test_every_in_range_value_has_exactly_one_zone() {
        let zones = HeartRateZones::from_max(190.0);
        let mut bpm = 95.0;
        while bpm <= 190.0 {
            let hits = zones
                .zones()
                .iter()
                .enumerate()
                .filter(|(index, zone)| zone.holds(bpm, *index == 4))
                .count();
            assert_eq!(hits, 1, "bpm {bpm}");
            bpm += 0.25;
        }
    }
}
