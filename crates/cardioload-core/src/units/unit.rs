// ABOUTME: Unit identifiers grouped into quantity families with per-family base units
// ABOUTME: Declares each unit's default converter to its base unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::converter::{NormalizationCalibration, UnitConverter};
use crate::errors::AppError;
use crate::models::LoadMethod;

/// Physical (or pseudo-physical) quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityFamily {
    /// Heart rate and other rates
    Frequency,
    /// Body mass
    Mass,
    /// Height and distance
    Length,
    /// Training load scores
    TrainingLoad,
}

impl QuantityFamily {
    /// Unit every other unit of this family converts through
    #[must_use]
    pub const fn base_unit(&self) -> UnitId {
        match self {
            Self::Frequency => UnitId::BeatsPerMinute,
            Self::Mass => UnitId::Kilogram,
            Self::Length => UnitId::Meter,
            Self::TrainingLoad => UnitId::IntensityWeightedMinutes,
        }
    }
}

impl fmt::Display for QuantityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Frequency => "frequency",
            Self::Mass => "mass",
            Self::Length => "length",
            Self::TrainingLoad => "training load",
        };
        f.write_str(name)
    }
}

/// Known units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitId {
    /// Beats per minute (frequency base)
    BeatsPerMinute,
    /// Cycles per second
    Hertz,
    /// Kilogram (mass base)
    Kilogram,
    /// Gram
    Gram,
    /// Avoirdupois pound
    Pound,
    /// Meter (length base)
    Meter,
    /// Centimeter
    Centimeter,
    /// Inch
    Inch,
    /// Foot
    Foot,
    /// Normalized training load (training-load base)
    IntensityWeightedMinutes,
    /// Banister exponential TRIMP score
    BanisterTrimp,
    /// Edwards zone-weighted TRIMP score
    EdwardsTrimp,
    /// Lucia threshold-zone TRIMP score
    LuciaTrimp,
    /// Acute:chronic workload ratio
    AcuteChronicRatio,
}

impl UnitId {
    /// Every unit, grouped by family
    pub const ALL: [Self; 14] = [
        Self::BeatsPerMinute,
        Self::Hertz,
        Self::Kilogram,
        Self::Gram,
        Self::Pound,
        Self::Meter,
        Self::Centimeter,
        Self::Inch,
        Self::Foot,
        Self::IntensityWeightedMinutes,
        Self::BanisterTrimp,
        Self::EdwardsTrimp,
        Self::LuciaTrimp,
        Self::AcuteChronicRatio,
    ];

    /// Quantity family this unit measures
    #[must_use]
    pub const fn family(&self) -> QuantityFamily {
        match self {
            Self::BeatsPerMinute | Self::Hertz => QuantityFamily::Frequency,
            Self::Kilogram | Self::Gram | Self::Pound => QuantityFamily::Mass,
            Self::Meter | Self::Centimeter | Self::Inch | Self::Foot => QuantityFamily::Length,
            Self::IntensityWeightedMinutes
            | Self::BanisterTrimp
            | Self::EdwardsTrimp
            | Self::LuciaTrimp
            | Self::AcuteChronicRatio => QuantityFamily::TrainingLoad,
        }
    }

    /// Whether this is its family's base unit
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.family().base_unit() == *self
    }

    /// Display symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BeatsPerMinute => "bpm",
            Self::Hertz => "Hz",
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Pound => "lb",
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::IntensityWeightedMinutes => "iwm",
            Self::BanisterTrimp => "trimp_banister",
            Self::EdwardsTrimp => "trimp_edwards",
            Self::LuciaTrimp => "trimp_lucia",
            Self::AcuteChronicRatio => "acwr",
        }
    }

    /// Method whose scores are expressed in this unit
    #[must_use]
    pub const fn load_method(&self) -> Option<LoadMethod> {
        match self {
            Self::BanisterTrimp => Some(LoadMethod::Banister),
            Self::EdwardsTrimp => Some(LoadMethod::Edwards),
            Self::LuciaTrimp => Some(LoadMethod::Lucia),
            Self::AcuteChronicRatio => Some(LoadMethod::AcuteChronic),
            _ => None,
        }
    }

    /// Converter this unit declares to its family's base unit
    #[must_use]
    pub fn default_converter(&self, calibration: &NormalizationCalibration) -> UnitConverter {
        if let Some(method) = self.load_method() {
            return UnitConverter::MethodNormalization {
                method,
                calibration: *calibration,
            };
        }
        match self {
            Self::Hertz => UnitConverter::Linear { factor: 60.0 },
            Self::Gram => UnitConverter::Linear { factor: 0.001 },
            Self::Pound => UnitConverter::Linear {
                factor: 0.453_592_37,
            },
            Self::Centimeter => UnitConverter::Linear { factor: 0.01 },
            Self::Inch => UnitConverter::Linear { factor: 0.0254 },
            Self::Foot => UnitConverter::Linear { factor: 0.3048 },
            _ => UnitConverter::Identity,
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        if let Some(unit) = Self::ALL
            .iter()
            .find(|unit| unit.symbol().eq_ignore_ascii_case(&lowered))
        {
            return Ok(*unit);
        }
        match lowered.as_str() {
            "beats_per_minute" => Ok(Self::BeatsPerMinute),
            "hertz" => Ok(Self::Hertz),
            "kilogram" | "kilograms" => Ok(Self::Kilogram),
            "gram" | "grams" => Ok(Self::Gram),
            "pound" | "pounds" | "lbs" => Ok(Self::Pound),
            "meter" | "meters" => Ok(Self::Meter),
            "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "inch" | "inches" => Ok(Self::Inch),
            "foot" | "feet" => Ok(Self::Foot),
            "intensity_weighted_minutes" => Ok(Self::IntensityWeightedMinutes),
            "banister" => Ok(Self::BanisterTrimp),
            "edwards" => Ok(Self::EdwardsTrimp),
            "lucia" => Ok(Self::LuciaTrimp),
            "acute_chronic" | "ratio" => Ok(Self::AcuteChronicRatio),
            other => Err(AppError::invalid_input(format!("Unknown unit: '{other}'"))),
        }
    }
}
