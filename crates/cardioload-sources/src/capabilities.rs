// ABOUTME: Capability declarations and authorization status for data sources
// ABOUTME: Calculators filter sources by containment before fetching anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use cardioload_core::models::{ActivityKinds, MetricKinds};
use serde::{Deserialize, Serialize};

/// Activity and metric kinds a source can serve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCapabilities {
    /// Supported activity kinds
    pub activities: ActivityKinds,
    /// Supported metric kinds
    pub metrics: MetricKinds,
}

impl SourceCapabilities {
    /// Declare capabilities
    #[must_use]
    pub const fn new(activities: ActivityKinds, metrics: MetricKinds) -> Self {
        Self {
            activities,
            metrics,
        }
    }

    /// Typical wearable: workouts with heart rate plus daily body metrics
    #[must_use]
    pub const fn wearable() -> Self {
        Self::new(
            ActivityKinds::high_intensity()
                .union(ActivityKinds::WALKING)
                .union(ActivityKinds::GENERAL),
            MetricKinds::HEART_RATE
                .union(MetricKinds::RESTING_HEART_RATE)
                .union(MetricKinds::BODY_MASS)
                .union(MetricKinds::HEIGHT),
        )
    }

    /// Whether every activity in `activities` and every metric in `metrics` is supported
    #[must_use]
    pub const fn supports(&self, activities: ActivityKinds, metrics: MetricKinds) -> bool {
        self.activities.contains(activities) && self.metrics.contains(metrics)
    }

    /// Whether `metrics` is supported regardless of activity
    #[must_use]
    pub const fn supports_metrics(&self, metrics: MetricKinds) -> bool {
        self.metrics.contains(metrics)
    }
}

/// Outcome of an authorization handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    #[default]
    NotDetermined,
    /// Access granted
    Authorized,
    /// Access refused
    Denied,
}

impl AuthorizationStatus {
    /// Whether reads are allowed
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotDetermined => "not_determined",
            Self::Authorized => "authorized",
            Self::Denied => "denied",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_requires_containment() {
        let running_only = SourceCapabilities::new(ActivityKinds::RUNNING, MetricKinds::HEART_RATE);
        assert!(running_only.supports(ActivityKinds::RUNNING, MetricKinds::HEART_RATE));
        assert!(!running_only.supports(ActivityKinds::high_intensity(), MetricKinds::HEART_RATE));
        assert!(!running_only.supports_metrics(MetricKinds::RESTING_HEART_RATE));
    }

    #[test]
    fn test_wearable_covers_high_intensity_heart_rate() {
        assert!(SourceCapabilities::wearable()
            .supports(ActivityKinds::high_intensity(), MetricKinds::HEART_RATE));
    }
}
