//! Pairwise compatibility of two birth dates.
//!
//! The biorhythm term is simulated: it is a deterministic pseudo-random draw
//! seeded from the two dates and predicts nothing.

use crate::numerology::reduce_unsigned;
use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

const BAR_CELLS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    Ideal,
    Excellent,
    Karmic,
}

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        if score > 85 {
            CompatibilityTier::Ideal
        } else if score > 65 {
            CompatibilityTier::Excellent
        } else {
            CompatibilityTier::Karmic
        }
    }

    pub fn report(self) -> &'static str {
        match self {
            CompatibilityTier::Ideal => "🔥 Ideal pair! You understand each other without words. Your energies resonate at the highest level.",
            CompatibilityTier::Excellent => "✨ Excellent compatibility. There is work to do, but the foundation is strong. Respect each other's differences.",
            CompatibilityTier::Karmic => "🌪 Karmic union. Lessons and trials lie ahead. Staying together takes a lot of patience and wisdom.",
        }
    }
}

/// Day of month reduced to one digit for each date: equal 90, a difference
/// of 3, 4 or 6 scores 85, anything else 65.
pub fn numerological_score(first: NaiveDate, second: NaiveDate) -> u8 {
    let a = reduce_unsigned(u64::from(first.day()), 9);
    let b = reduce_unsigned(u64::from(second.day()), 9);
    match a.abs_diff(b) {
        0 => 90,
        3 | 4 | 6 => 85,
        _ => 65,
    }
}

/// Under a year apart 95; within a month of a whole number of years 80;
/// otherwise 70.
pub fn matrix_score(first: NaiveDate, second: NaiveDate) -> u8 {
    let days = (first - second).num_days().abs();
    if days < 365 {
        95
    } else if days % 365 < 30 {
        80
    } else {
        70
    }
}

/// Simulated draw in 50..=100 seeded by the sum of both dates' day numbers
/// counted from 1 January of year 1.
pub fn biorhythm_score(first: NaiveDate, second: NaiveDate) -> u8 {
    let seed = i64::from(first.num_days_from_ce()) + i64::from(second.num_days_from_ce());
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    rng.gen_range(50..=100)
}

/// `round(0.3 a + 0.3 b + 0.4 c)` with halves rounded up, in integers.
pub fn weighted_total(numerological: u8, matrix: u8, biorhythm: u8) -> u8 {
    let tenths = 3 * u32::from(numerological) + 3 * u32::from(matrix) + 4 * u32::from(biorhythm);
    ((tenths + 5) / 10) as u8
}

/// Ten-cell bar with a traffic-light marker, e.g. `🟢 [████████░░] 84%`.
pub fn render_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = BAR_CELLS * u32::from(percent) / 100;
    let marker = if percent < 40 {
        "🔴"
    } else if percent < 70 {
        "🟡"
    } else {
        "🟢"
    };
    format!(
        "{} [{}{}] {}%",
        marker,
        "█".repeat(filled as usize),
        "░".repeat((BAR_CELLS - filled) as usize),
        percent
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub first: NaiveDate,
    pub second: NaiveDate,
    pub numerological: u8,
    pub matrix: u8,
    pub biorhythm: u8,
    pub total: u8,
    pub tier: CompatibilityTier,
    pub bar: String,
    pub report: &'static str,
}

impl Compatibility {
    pub fn score(first: NaiveDate, second: NaiveDate) -> Self {
        let numerological = numerological_score(first, second);
        let matrix = matrix_score(first, second);
        let biorhythm = biorhythm_score(first, second);
        let total = weighted_total(numerological, matrix, biorhythm);
        let tier = CompatibilityTier::from_score(total);
        log::debug!(
            "Compatibility {} / {}: {} {} {} -> {}",
            first,
            second,
            numerological,
            matrix,
            biorhythm,
            total
        );

        Compatibility {
            first,
            second,
            numerological,
            matrix,
            biorhythm,
            total,
            tier,
            bar: render_bar(total),
            report: tier.report(),
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Compatibility of {} and {}",
            self.first.format("%d.%m.%Y"),
            self.second.format("%d.%m.%Y")
        )?;
        writeln!(f, "{}", self.bar)?;
        writeln!(f, "Numerology: {}", self.numerological)?;
        writeln!(f, "Matrix: {}", self.matrix)?;
        writeln!(f, "Biorhythm (simulated): {}", self.biorhythm)?;
        write!(f, "{}", self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_identical_dates() {
        let d = date(15, 3, 1990);
        let c = Compatibility::score(d, d);
        assert_eq!(c.numerological, 90);
        assert_eq!(c.matrix, 95);
        assert!((50..=100).contains(&c.biorhythm));
    }

    #[test]
    fn test_numerological_harmony() {
        // 1 and 4 differ by 3
        assert_eq!(numerological_score(date(1, 1, 2000), date(13, 5, 1980)), 85);
        // 29 -> 11 -> 2 equals 2
        assert_eq!(numerological_score(date(29, 1, 2000), date(2, 5, 1980)), 90);
        // 1 and 3
        assert_eq!(numerological_score(date(1, 1, 2000), date(3, 5, 1980)), 65);
    }

    #[test]
    fn test_matrix_score_bands() {
        assert_eq!(matrix_score(date(1, 1, 2000), date(30, 12, 2000)), 95);
        // 2000 is a leap year: 366 days, 366 % 365 = 1
        assert_eq!(matrix_score(date(1, 1, 2000), date(1, 1, 2001)), 80);
        assert_eq!(matrix_score(date(1, 1, 2000), date(1, 7, 2001)), 70);
    }

    #[test]
    fn test_biorhythm_is_deterministic() {
        let a = date(7, 11, 1985);
        let b = date(21, 6, 1992);
        assert_eq!(biorhythm_score(a, b), biorhythm_score(a, b));
        // Seed is a sum, so order does not matter
        assert_eq!(biorhythm_score(a, b), biorhythm_score(b, a));
    }

    #[test]
    fn test_total_always_within_range() {
        let base = date(1, 1, 1950);
        for i in 0..400 {
            let first = base + chrono::Duration::days(i * 53);
            let second = base + chrono::Duration::days(i * 17 + 3);
            let c = Compatibility::score(first, second);
            assert!((50..=100).contains(&c.total), "{:?}", c);
        }
        for a in [65u8, 85, 90] {
            for b in [70u8, 80, 95] {
                for bio in 50u8..=100 {
                    assert!((50..=100).contains(&weighted_total(a, b, bio)));
                }
            }
        }
    }

    #[test]
    fn test_rounding() {
        // 19.5 + 21 + 34 = 74.5
        assert_eq!(weighted_total(65, 70, 85), 75);
        assert_eq!(weighted_total(90, 95, 100), 96);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(CompatibilityTier::from_score(86), CompatibilityTier::Ideal);
        assert_eq!(CompatibilityTier::from_score(85), CompatibilityTier::Excellent);
        assert_eq!(CompatibilityTier::from_score(66), CompatibilityTier::Excellent);
        assert_eq!(CompatibilityTier::from_score(65), CompatibilityTier::Karmic);
    }

    #[test]
    fn test_bar() {
        assert_eq!(render_bar(84), "🟢 [████████░░] 84%");
        assert_eq!(render_bar(39), "🔴 [███░░░░░░░] 39%");
        assert_eq!(render_bar(69), "🟡 [██████░░░░] 69%");
        assert_eq!(render_bar(100), "🟢 [██████████] 100%");
    }
}
