// ABOUTME: Training season (half-open date range) used to scope sample fetches
// ABOUTME: Provides single-day windows and trailing daily windows for rolling ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Half-open date range `[start, end)` over which samples are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Season {
    /// Create a season
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `start` is after `end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "Season start {start} is after its end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Season covering `length` immediately before `end`
    ///
    /// Negative lengths are treated as zero.
    #[must_use]
    pub fn ending_at(end: DateTime<Utc>, length: Duration) -> Self {
        let length = length.max(Duration::zero());
        Self {
            start: end - length,
            end,
        }
    }

    /// Season covering one calendar day (UTC midnight to midnight)
    #[must_use]
    pub fn single_day(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// Start of the season (inclusive)
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End of the season (exclusive)
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the season
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `instant` falls inside the season
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// `days` consecutive 24-hour windows ending at this season's end, oldest first
    ///
    /// The last window ends exactly at `self.end()`.
    #[must_use]
    pub fn trailing_days(&self, days: u32) -> Vec<Self> {
        let days = i64::from(days);
        (0..days)
            .map(|index| {
                let end = self.end - Duration::days(days - 1 - index);
                Self::ending_at(end, Duration::days(1))
            })
            .collect()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
