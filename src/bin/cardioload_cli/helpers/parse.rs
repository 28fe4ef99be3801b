// ABOUTME: Argument parsing helpers for cardioload-cli
// ABOUTME: Dates, seasons, and polynomial converter overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Context, Result};
use cardioload_core::models::Season;
use cardioload_core::units::{PolynomialConverter, UnitConverter, UnitId};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date (UTC midnight)
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("'{raw}' is neither RFC 3339 nor YYYY-MM-DD"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Season from optional bounds; the start defaults to `days` before the end
pub fn season(start: Option<&str>, end: Option<&str>, days: u32, now: DateTime<Utc>) -> Result<Season> {
    let end = end.map(parse_instant).transpose()?.unwrap_or(now);
    match start {
        Some(raw) => Ok(Season::new(parse_instant(raw)?, end)?),
        None => Ok(Season::ending_at(end, Duration::days(i64::from(days)))),
    }
}

/// Parse `UNIT=c0,c1,...` into a polynomial override
pub fn parse_polynomial(raw: &str) -> Result<(UnitId, UnitConverter)> {
    let (unit, coefficients) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected UNIT=c0,c1,..., got '{raw}'"))?;
    let unit: UnitId = unit.trim().parse()?;
    let coefficients = coefficients
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid coefficient '{c}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    let polynomial = PolynomialConverter::new(coefficients)?;
    Ok((unit, UnitConverter::Polynomial(polynomial)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_instant_formats() {
        let date = parse_instant("2025-03-02").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap());
        let instant = parse_instant("2025-03-02T07:30:00+02:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 3, 2, 5, 30, 0).unwrap());
        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn test_season_defaults() {
        let now = Utc.with_ymd_and_hms(2025, 3, 29, 0, 0, 0).unwrap();
        let season = season(None, None, 7, now).unwrap();
        assert_eq!(season.end(), now);
        assert_eq!(season.duration(), Duration::days(7));
        assert!(super::season(Some("2025-04-01"), Some("2025-03-01"), 1, now).is_err());
    }

    #[test]
    fn test_parse_polynomial() {
        let (unit, converter) = parse_polynomial("edwards=0, 2.5").unwrap();
        assert_eq!(unit, UnitId::EdwardsTrimp);
        assert!((converter.to_base(10.0) - 25.0).abs() < 1e-9);
        assert!(parse_polynomial("edwards").is_err());
        assert!(parse_polynomial("edwards=a,b").is_err());
    }
}
