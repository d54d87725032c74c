//! Parsing and validation of user-supplied dates, times and coordinates.
//!
//! Dates are written `dd.mm.yyyy`, times `HH:MM`. A date without a time is
//! taken at noon.

use crate::ephemeris::GeoLocation;
use crate::error::OracleError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Parse a `dd.mm.yyyy` calendar date, rejecting impossible days.
pub fn parse_date(input: &str) -> Result<NaiveDate, OracleError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(OracleError::invalid_date(input, "expected dd.mm.yyyy"));
    }

    let number = |s: &str, what: &str| {
        s.parse::<u32>()
            .map_err(|_| OracleError::invalid_date(input, format!("{what} is not a number")))
    };
    let day = number(parts[0], "day")?;
    let month = number(parts[1], "month")?;
    let year = number(parts[2], "year")?;

    if !(1..=12).contains(&month) {
        return Err(OracleError::invalid_date(input, "month must be within 1..12"));
    }
    if year == 0 {
        return Err(OracleError::invalid_date(input, "year must be positive"));
    }
    let year = i32::try_from(year)
        .ok()
        .filter(|&y| y <= NaiveDate::MAX.year())
        .ok_or_else(|| OracleError::invalid_date(input, "year out of range"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| OracleError::invalid_date(input, "no such day in that month"))
}

/// Parse an `HH:MM` time of day.
pub fn parse_time(input: &str) -> Result<NaiveTime, OracleError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|e| OracleError::invalid_date(input, format!("expected HH:MM ({e})")))
}

/// Parse `dd.mm.yyyy` or `dd.mm.yyyy HH:MM`, defaulting to noon.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, OracleError> {
    let mut parts = input.split_whitespace();
    let date = parts
        .next()
        .ok_or_else(|| OracleError::invalid_date(input, "empty input"))?;
    let date = parse_date(date)?;
    let time = match parts.next() {
        Some(t) => parse_time(t)?,
        None => default_time(),
    };
    if parts.next().is_some() {
        return Err(OracleError::invalid_date(input, "unexpected trailing text"));
    }
    Ok(date.and_time(time))
}

/// Local civil time is treated as UTC; time zones are resolved by the caller.
pub fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&naive)
}

pub fn validate_location(location: &GeoLocation) -> Result<(), OracleError> {
    let lat_ok = location.lat.is_finite() && (-90.0..=90.0).contains(&location.lat);
    let lon_ok = location.lon.is_finite() && (-180.0..=180.0).contains(&location.lon);
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(OracleError::InvalidLocation {
            lat: location.lat,
            lon: location.lon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("15.03.1990").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
        assert_eq!(parse_date(" 1.1.2000 ").unwrap(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for bad in ["31.02.1990", "29.02.2023", "00.01.2000", "15.13.1990", "15.03", "a.b.c", "", "01.01.4294967295"] {
            assert!(
                matches!(parse_date(bad), Err(OracleError::InvalidDate { .. })),
                "{bad} should be rejected"
            );
        }
        assert!(parse_date("29.02.2024").is_ok());
    }

    #[test]
    fn test_rejects_years_beyond_calendar() {
        for bad in ["01.01.4294967295", "01.01.3000000000", "01.01.2147483648", "01.01.999999"] {
            match parse_date(bad) {
                Err(OracleError::InvalidDate { reason, .. }) => {
                    assert_eq!(reason, "year out of range", "{bad}")
                }
                other => panic!("{bad} should be rejected, got {other:?}"),
            }
        }
        assert!(parse_date("31.12.9999").is_ok());
    }

    #[test]
    fn test_parse_date_time_defaults_to_noon() {
        let dt = parse_date_time("15.03.1990").unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);

        let dt = parse_date_time("15.03.1990 14:30").unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);

        assert!(parse_date_time("15.03.1990 25:00").is_err());
        assert!(parse_date_time("15.03.1990 14:30 Moscow").is_err());
    }

    #[test]
    fn test_validate_location() {
        assert!(validate_location(&GeoLocation { lat: 55.75, lon: 37.62 }).is_ok());
        assert!(validate_location(&GeoLocation { lat: 91.0, lon: 0.0 }).is_err());
        assert!(validate_location(&GeoLocation { lat: 0.0, lon: -180.5 }).is_err());
        assert!(validate_location(&GeoLocation { lat: f64::NAN, lon: 0.0 }).is_err());
    }
}
