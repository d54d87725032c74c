//! Question charts cast for the moment a question is asked.

use crate::chart::data::Chart;
use crate::chart::engine::ChartEngine;
use crate::chart::settings::HORARY_BODIES;
use crate::ephemeris::{Body, EphemerisProvider, GeoLocation};
use crate::error::OracleError;
use crate::western::{Element, Sign};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct HoraryReading {
    pub chart: Chart,
    pub ascendant_sign: Option<Sign>,
    pub midheaven_sign: Option<Sign>,
    pub moon_sign: Option<Sign>,
    pub moon_house: Option<u8>,
    /// Moon in Cancer, Scorpio or Pisces
    pub moon_in_water_sign: bool,
    pub retrograde: Vec<Body>,
}

impl HoraryReading {
    pub fn from_chart(chart: Chart) -> Self {
        let moon = chart.body(Body::Moon);
        let moon_sign = moon.map(|m| m.sign);
        HoraryReading {
            ascendant_sign: chart.ascendant().map(Sign::from_longitude),
            midheaven_sign: chart.midheaven().map(Sign::from_longitude),
            moon_sign,
            moon_house: moon.and_then(|m| m.house),
            moon_in_water_sign: moon_sign.map_or(false, |s| s.element() == Element::Water),
            retrograde: chart.retrograde_bodies(),
            chart,
        }
    }
}

impl<P: EphemerisProvider> ChartEngine<P> {
    /// Question chart for `at`. Horary charts carry no element or quality
    /// classification.
    pub fn horary(
        &self,
        at: DateTime<Utc>,
        location: Option<GeoLocation>,
    ) -> Result<HoraryReading, OracleError> {
        let chart = self.compute(at, location, &HORARY_BODIES, false)?;
        Ok(HoraryReading::from_chart(chart))
    }
}

impl fmt::Display for HoraryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.chart)?;
        writeln!(f)?;
        if let Some(sign) = self.ascendant_sign {
            writeln!(f, "Ascendant in {}: how you approach the question.", sign)?;
        }
        if let Some(sign) = self.midheaven_sign {
            writeln!(f, "MC in {}: the goal or outcome of the matter.", sign)?;
        }
        if let Some(sign) = self.moon_sign {
            write!(f, "Moon in {}", sign)?;
            if let Some(house) = self.moon_house {
                write!(f, ", house {}", house)?;
            }
            let tone = if self.moon_in_water_sign {
                "emotional involvement"
            } else {
                "a rational approach"
            };
            writeln!(f, ": the course of the situation points to {}.", tone)?;
        }
        if !self.retrograde.is_empty() {
            let names: Vec<&str> = self.retrograde.iter().map(|b| b.name()).collect();
            writeln!(f, "Retrograde: {}", names.join(", "))?;
            write!(f, "Retrograde bodies call for review or delay in their areas.")?;
        }
        Ok(())
    }
}
