use crate::aspects::Aspect;
use crate::ephemeris::{Body, GeoLocation, HousePositions};
use crate::western::{format_position, Element, Quality, Sign};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One tracked body placed in a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyReading {
    pub body: Body,
    /// Ecliptic longitude in [0, 360)
    pub longitude: f64,
    /// Degrees per day
    pub speed: f64,
    pub sign: Sign,
    /// 1..12, absent when the chart has no house frame
    pub house: Option<u8>,
    pub degree: u8,
    pub minute: u8,
    pub retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
}

/// A computed chart. Bodies the provider could not place are listed in
/// `missing` instead of appearing in `bodies`.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub timestamp: DateTime<Utc>,
    pub location: GeoLocation,
    pub houses: Option<HousePositions>,
    pub bodies: BTreeMap<Body, BodyReading>,
    pub missing: Vec<Body>,
    pub aspects: Vec<Aspect>,
}

impl Chart {
    pub fn body(&self, body: Body) -> Option<&BodyReading> {
        self.bodies.get(&body)
    }

    pub fn ascendant(&self) -> Option<f64> {
        self.houses.as_ref().map(|h| h.ascendant)
    }

    pub fn midheaven(&self) -> Option<f64> {
        self.houses.as_ref().map(|h| h.midheaven)
    }

    /// Every requested body is placed and houses are known.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.houses.is_some()
    }

    pub fn retrograde_bodies(&self) -> Vec<Body> {
        self.bodies
            .values()
            .filter(|r| r.retrograde)
            .map(|r| r.body)
            .collect()
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Chart for {} at lat {:.2}, lon {:.2}",
            self.timestamp.format("%Y-%m-%d %H:%M UTC"),
            self.location.lat,
            self.location.lon
        )?;
        match &self.houses {
            Some(h) => {
                writeln!(f, "Ascendant: {}", format_position(h.ascendant))?;
                writeln!(f, "Midheaven: {}", format_position(h.midheaven))?;
            }
            None => writeln!(f, "Houses: unavailable")?,
        }

        writeln!(f, "Bodies:")?;
        for reading in self.bodies.values() {
            write!(f, "  {}: {}", reading.body, format_position(reading.longitude))?;
            if let Some(house) = reading.house {
                write!(f, ", house {}", house)?;
            }
            if reading.retrograde {
                write!(f, " ℞")?;
            }
            writeln!(f)?;
        }
        if !self.missing.is_empty() {
            let names: Vec<&str> = self.missing.iter().map(|b| b.name()).collect();
            writeln!(f, "Not computed: {}", names.join(", "))?;
        }

        write!(f, "Aspects:")?;
        if self.aspects.is_empty() {
            write!(f, " none")?;
        }
        for aspect in &self.aspects {
            write!(f, "\n  {}", aspect)?;
        }
        Ok(())
    }
}
