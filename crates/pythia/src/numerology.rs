//! Digit reduction and Sucai numerology.
//!
//! Every reduction in the engine (destiny matrix arcana, compatibility,
//! numerology numbers) goes through [`reduce`]: the decimal digits of a
//! number are summed repeatedly until the value falls at or below a target.

use crate::error::OracleError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Smallest target that every value can be reduced to. Below it, a single
/// digit above the target is a fixed point of digit summation.
pub const MIN_TARGET: u64 = 9;

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Every value visited while reducing `n`, starting with `n` itself and
/// ending with the reduced result.
pub fn reduction_chain(n: i64, max_inclusive: u64) -> Result<Vec<u64>, OracleError> {
    if n < 0 {
        return Err(OracleError::NegativeNumber(n));
    }

    let mut current = n as u64;
    let mut chain = vec![current];
    while current > max_inclusive {
        if current < 10 {
            return Err(OracleError::UnreachableTarget { max: max_inclusive });
        }
        current = digit_sum(current);
        chain.push(current);
    }
    Ok(chain)
}

/// Reduce `n` by repeated digit summation until it is `<= max_inclusive`.
///
/// Targets below [`MIN_TARGET`] work only for values whose reduction reaches
/// them; a single digit left above the target is `UnreachableTarget`.
pub fn reduce(n: i64, max_inclusive: u64) -> Result<u64, OracleError> {
    if n < 0 {
        return Err(OracleError::NegativeNumber(n));
    }

    let mut current = n as u64;
    while current > max_inclusive {
        if current < 10 {
            return Err(OracleError::UnreachableTarget { max: max_inclusive });
        }
        current = digit_sum(current);
    }
    Ok(current)
}

/// Reduction of a value that is non-negative by construction (calendar
/// fields and sums of them) with a target of at least [`MIN_TARGET`].
pub(crate) fn reduce_unsigned(mut n: u64, max_inclusive: u64) -> u64 {
    debug_assert!(max_inclusive >= MIN_TARGET);
    while n > max_inclusive {
        n = digit_sum(n);
    }
    n
}

/// Sucai numbers derived from a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub birth_date: NaiveDate,
    /// Day of month reduced to a single digit.
    pub consciousness: u8,
    /// All digits of dd.mm.yyyy reduced to a single digit.
    pub mission: u8,
}

impl NumerologyProfile {
    pub fn from_date(birth_date: NaiveDate) -> Self {
        let day = u64::from(birth_date.day());
        let all_digits = digit_sum(day)
            + digit_sum(u64::from(birth_date.month()))
            + digit_sum(birth_date.year().unsigned_abs() as u64);

        Self {
            birth_date,
            consciousness: reduce_unsigned(day, 9) as u8,
            mission: reduce_unsigned(all_digits, 9) as u8,
        }
    }
}

impl fmt::Display for NumerologyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sucai numerology for {}", self.birth_date.format("%d.%m.%Y"))?;
        writeln!(f, "Consciousness number: {}", self.consciousness)?;
        write!(f, "Mission number: {}", self.mission)
    }
}
