use chrono::{DateTime, Utc};
#[cfg(feature = "swiss-ephemeris")]
use chrono::{Datelike, Timelike};
#[cfg(feature = "swiss-ephemeris")]
use swisseph::swe::julday;

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00 UT.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert UTC datetime to Julian Day (UT)
#[cfg(feature = "swiss-ephemeris")]
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;

    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}

/// Convert UTC datetime to Julian Day (UT) without the ephemeris library.
#[cfg(not(feature = "swiss-ephemeris"))]
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    const SECONDS_PER_DAY: f64 = 86_400.0;

    UNIX_EPOCH_JD + dt.timestamp() as f64 / SECONDS_PER_DAY
}
