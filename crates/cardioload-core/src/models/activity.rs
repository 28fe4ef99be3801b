// ABOUTME: Activity and metric kind enums with bitflag capability sets
// ABOUTME: Data sources declare support through these sets; calculators test containment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::units::UnitId;

/// Kind of activity a sample was recorded during
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Running (road, trail, treadmill)
    Running,
    /// Cycling (outdoor or indoor)
    Cycling,
    /// Walking
    Walking,
    /// Swimming
    Swimming,
    /// Rowing
    Rowing,
    /// Hiking
    Hiking,
    /// Any other workout type
    Other,
    /// Not tied to a workout (daily resting heart rate, body mass, height)
    General,
}

impl ActivityKind {
    /// Every activity kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Running,
        Self::Cycling,
        Self::Walking,
        Self::Swimming,
        Self::Rowing,
        Self::Hiking,
        Self::Other,
        Self::General,
    ];

    /// Capability flag for this kind
    #[must_use]
    pub const fn flag(self) -> ActivityKinds {
        match self {
            Self::Running => ActivityKinds::RUNNING,
            Self::Cycling => ActivityKinds::CYCLING,
            Self::Walking => ActivityKinds::WALKING,
            Self::Swimming => ActivityKinds::SWIMMING,
            Self::Rowing => ActivityKinds::ROWING,
            Self::Hiking => ActivityKinds::HIKING,
            Self::Other => ActivityKinds::OTHER,
            Self::General => ActivityKinds::GENERAL,
        }
    }

    /// Stable lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Walking => "walking",
            Self::Swimming => "swimming",
            Self::Rowing => "rowing",
            Self::Hiking => "hiking",
            Self::Other => "other",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" | "run" => Ok(Self::Running),
            "cycling" | "ride" | "bike" => Ok(Self::Cycling),
            "walking" | "walk" => Ok(Self::Walking),
            "swimming" | "swim" => Ok(Self::Swimming),
            "rowing" | "row" => Ok(Self::Rowing),
            "hiking" | "hike" => Ok(Self::Hiking),
            "other" => Ok(Self::Other),
            "general" => Ok(Self::General),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity kind: '{other}'"
            ))),
        }
    }
}

bitflags::bitflags! {
    /// Set of activity kinds, used for capability declarations
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ActivityKinds: u16 {
        /// Running
        const RUNNING = 0b0000_0001;
        /// Cycling
        const CYCLING = 0b0000_0010;
        /// Walking
        const WALKING = 0b0000_0100;
        /// Swimming
        const SWIMMING = 0b0000_1000;
        /// Rowing
        const ROWING = 0b0001_0000;
        /// Hiking
        const HIKING = 0b0010_0000;
        /// Other workouts
        const OTHER = 0b0100_0000;
        /// Not tied to a workout
        const GENERAL = 0b1000_0000;
    }
}

impl ActivityKinds {
    /// Activity kinds that reliably push heart rate towards its maximum
    #[must_use]
    pub const fn high_intensity() -> Self {
        Self::RUNNING.union(Self::CYCLING)
    }

    /// Whether the set contains the given kind
    #[must_use]
    pub const fn includes(self, kind: ActivityKind) -> bool {
        self.contains(kind.flag())
    }

    /// Kinds in this set, in `ActivityKind::ALL` order
    pub fn kinds(self) -> impl Iterator<Item = ActivityKind> {
        ActivityKind::ALL
            .into_iter()
            .filter(move |kind| self.includes(*kind))
    }
}

impl From<ActivityKind> for ActivityKinds {
    fn from(kind: ActivityKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<ActivityKind> for ActivityKinds {
    fn from_iter<I: IntoIterator<Item = ActivityKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set.union(kind.flag()))
    }
}

/// Kind of physiological metric carried by a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Instantaneous heart rate
    HeartRate,
    /// Daily resting heart rate
    RestingHeartRate,
    /// Body mass
    BodyMass,
    /// Body height
    Height,
    /// Computed training load
    TrainingLoad,
}

impl MetricKind {
    /// Every metric kind, in declaration order
    pub const ALL: [Self; 5] = [
        Self::HeartRate,
        Self::RestingHeartRate,
        Self::BodyMass,
        Self::Height,
        Self::TrainingLoad,
    ];

    /// Capability flag for this metric
    #[must_use]
    pub const fn flag(self) -> MetricKinds {
        match self {
            Self::HeartRate => MetricKinds::HEART_RATE,
            Self::RestingHeartRate => MetricKinds::RESTING_HEART_RATE,
            Self::BodyMass => MetricKinds::BODY_MASS,
            Self::Height => MetricKinds::HEIGHT,
            Self::TrainingLoad => MetricKinds::TRAINING_LOAD,
        }
    }

    /// Unit algorithms expect this metric in
    #[must_use]
    pub const fn canonical_unit(self) -> UnitId {
        match self {
            Self::HeartRate | Self::RestingHeartRate => UnitId::BeatsPerMinute,
            Self::BodyMass => UnitId::Kilogram,
            Self::Height => UnitId::Meter,
            Self::TrainingLoad => UnitId::IntensityWeightedMinutes,
        }
    }

    /// Stable snake_case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeartRate => "heart_rate",
            Self::RestingHeartRate => "resting_heart_rate",
            Self::BodyMass => "body_mass",
            Self::Height => "height",
            Self::TrainingLoad => "training_load",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of metric kinds, used for capability declarations
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MetricKinds: u8 {
        /// Instantaneous heart rate
        const HEART_RATE = 0b0000_0001;
        /// Daily resting heart rate
        const RESTING_HEART_RATE = 0b0000_0010;
        /// Body mass
        const BODY_MASS = 0b0000_0100;
        /// Body height
        const HEIGHT = 0b0000_1000;
        /// Computed training load
        const TRAINING_LOAD = 0b0001_0000;
    }
}

impl MetricKinds {
    /// Whether the set contains the given metric
    #[must_use]
    pub const fn includes(self, metric: MetricKind) -> bool {
        self.contains(metric.flag())
    }

    /// Metrics in this set, in `MetricKind::ALL` order
    pub fn kinds(self) -> impl Iterator<Item = MetricKind> {
        MetricKind::ALL
            .into_iter()
            .filter(move |metric| self.includes(*metric))
    }
}

impl From<MetricKind> for MetricKinds {
    fn from(metric: MetricKind) -> Self {
        metric.flag()
    }
}

impl FromIterator<MetricKind> for MetricKinds {
    fn from_iter<I: IntoIterator<Item = MetricKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, metric| set.union(metric.flag()))
    }
}
