// ABOUTME: Biological attributes used by gender-specific formulas and body metrics
// ABOUTME: BiologicalSex parsing and WHO body mass index categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::bmi;
use crate::errors::AppError;

/// Biological sex as reported by a data source or set on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Female
    Female,
    /// Male
    Male,
    /// Other or not disclosed
    Other,
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        })
    }
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" => Ok(Self::Female),
            "male" | "m" => Ok(Self::Male),
            "other" | "unknown" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown biological sex: '{other}'. Valid options: female, male, other"
            ))),
        }
    }
}

/// Body mass index category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Classify a body mass index value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}
