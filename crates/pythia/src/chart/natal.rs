//! Birth chart extension: element and quality balance plus overall shape.

use crate::chart::data::Chart;
use crate::chart::engine::ChartEngine;
use crate::chart::settings::NATAL_BODIES;
use crate::ephemeris::{Body, EphemerisProvider, GeoLocation};
use crate::error::OracleError;
use crate::western::{format_position, Element, Quality, Sign};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Gap above which the occupied part of the zodiac fits in one half.
pub const BOWL_GAP: f64 = 180.0;
/// Gap above which the bodies leave an empty third of the zodiac.
pub const BUCKET_GAP: f64 = 120.0;

/// Distribution class of the bodies around the zodiac
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartShape {
    Bowl,
    Bucket,
    Bundle,
}

impl ChartShape {
    /// Classify by the widest empty arc between consecutive bodies.
    pub fn from_longitudes(longitudes: &[f64]) -> ChartShape {
        match largest_gap(longitudes) {
            Some(gap) if gap > BOWL_GAP => ChartShape::Bowl,
            Some(gap) if gap > BUCKET_GAP => ChartShape::Bucket,
            _ => ChartShape::Bundle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartShape::Bowl => "Bowl",
            ChartShape::Bucket => "Bucket",
            ChartShape::Bundle => "Bundle",
        }
    }
}

impl fmt::Display for ChartShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Widest arc between neighbouring longitudes, including the arc that closes
/// the circle from the last body back to the first. `None` below two bodies.
pub fn largest_gap(longitudes: &[f64]) -> Option<f64> {
    if longitudes.len() < 2 {
        return None;
    }
    let mut sorted: Vec<f64> = longitudes.iter().map(|l| l.rem_euclid(360.0)).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    (0..n)
        .map(|i| (sorted[(i + 1) % n] - sorted[i]).rem_euclid(360.0))
        .max_by(|a, b| a.total_cmp(b))
}

/// Element with the highest count. Ties go to the earlier entry of
/// `Element::ALL` (fire, earth, air, water).
pub fn dominant_element(balance: &BTreeMap<Element, u8>) -> Option<Element> {
    let mut best: Option<(Element, u8)> = None;
    for element in Element::ALL {
        let count = balance.get(&element).copied().unwrap_or(0);
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((element, count));
        }
    }
    best.map(|(e, _)| e)
}

#[derive(Debug, Clone, Serialize)]
pub struct NatalChart {
    pub chart: Chart,
    pub place: Option<String>,
    pub elements: BTreeMap<Element, u8>,
    pub qualities: BTreeMap<Quality, u8>,
    pub dominant_element: Option<Element>,
    /// The Sun's sign
    pub dominant_sign: Option<Sign>,
    pub sun_sign: Option<Sign>,
    pub moon_sign: Option<Sign>,
    pub rising_sign: Option<Sign>,
    pub descendant: Option<f64>,
    pub imum_coeli: Option<f64>,
    pub shape: ChartShape,
}

impl NatalChart {
    pub fn from_chart(chart: Chart, place: Option<String>) -> Self {
        let mut elements: BTreeMap<Element, u8> = Element::ALL.iter().map(|&e| (e, 0)).collect();
        let mut qualities: BTreeMap<Quality, u8> = Quality::ALL.iter().map(|&q| (q, 0)).collect();
        for reading in chart.bodies.values() {
            *elements.entry(reading.sign.element()).or_insert(0) += 1;
            *qualities.entry(reading.sign.quality()).or_insert(0) += 1;
        }

        let longitudes: Vec<f64> = chart.bodies.values().map(|r| r.longitude).collect();
        let sun_sign = chart.body(Body::Sun).map(|r| r.sign);

        NatalChart {
            dominant_element: dominant_element(&elements),
            dominant_sign: sun_sign,
            sun_sign,
            moon_sign: chart.body(Body::Moon).map(|r| r.sign),
            rising_sign: chart.ascendant().map(Sign::from_longitude),
            descendant: chart.houses.as_ref().map(|h| h.descendant()),
            imum_coeli: chart.houses.as_ref().map(|h| h.imum_coeli()),
            shape: ChartShape::from_longitudes(&longitudes),
            elements,
            qualities,
            place,
            chart,
        }
    }
}

impl<P: EphemerisProvider> ChartEngine<P> {
    /// Birth chart over the full natal roster.
    pub fn natal(
        &self,
        birth: DateTime<Utc>,
        location: Option<GeoLocation>,
        place: Option<String>,
    ) -> Result<NatalChart, OracleError> {
        let chart = self.compute(birth, location, &NATAL_BODIES, true)?;
        let natal = NatalChart::from_chart(chart, place);
        log::debug!(
            "Natal chart for {}: shape {}, dominant element {:?}",
            birth,
            natal.shape,
            natal.dominant_element
        );
        Ok(natal)
    }
}

fn sign_or_unknown(sign: Option<Sign>) -> &'static str {
    sign.map_or("unknown", |s| s.name())
}

impl fmt::Display for NatalChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(place) = &self.place {
            writeln!(f, "Place: {}", place)?;
        }
        writeln!(f, "Sun: {}", sign_or_unknown(self.sun_sign))?;
        writeln!(f, "Moon: {}", sign_or_unknown(self.moon_sign))?;
        writeln!(f, "Rising: {}", sign_or_unknown(self.rising_sign))?;
        if let (Some(dsc), Some(ic)) = (self.descendant, self.imum_coeli) {
            writeln!(f, "Descendant: {}", format_position(dsc))?;
            writeln!(f, "IC: {}", format_position(ic))?;
        }

        let elements: Vec<String> = self
            .elements
            .iter()
            .map(|(e, n)| format!("{} {}", e.name(), n))
            .collect();
        writeln!(f, "Elements: {}", elements.join(", "))?;
        let qualities: Vec<String> = self
            .qualities
            .iter()
            .map(|(q, n)| format!("{} {}", q.name(), n))
            .collect();
        writeln!(f, "Qualities: {}", qualities.join(", "))?;
        if let Some(element) = self.dominant_element {
            writeln!(f, "Dominant element: {}", element.name())?;
        }
        writeln!(f, "Shape: {}", self.shape)?;
        write!(f, "{}", self.chart)
    }
}
