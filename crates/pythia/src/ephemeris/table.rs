use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::types::{
    Body, BodyPosition, EphemerisError, GeoLocation, HousePositions, HouseSystem,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Provider backed by a fixed set of positions, independent of time and
/// place. Bodies that were never set fail the way a real provider would.
#[derive(Debug, Clone, Default)]
pub struct TableEphemeris {
    bodies: BTreeMap<Body, BodyPosition>,
    houses: Option<([f64; 12], f64, f64)>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Body, lon: f64, speed_lon: f64) -> Self {
        self.bodies.insert(
            body,
            BodyPosition {
                lon: lon.rem_euclid(360.0),
                speed_lon,
            },
        );
        self
    }

    pub fn with_houses(mut self, cusps: [f64; 12], ascendant: f64, midheaven: f64) -> Self {
        self.houses = Some((cusps, ascendant, midheaven));
        self
    }

    /// Equal 30 degree houses starting at the ascendant.
    pub fn with_equal_houses(self, ascendant: f64) -> Self {
        let cusps: [f64; 12] =
            std::array::from_fn(|i| (ascendant + 30.0 * i as f64).rem_euclid(360.0));
        let midheaven = (ascendant + 270.0).rem_euclid(360.0);
        self.with_houses(cusps, ascendant, midheaven)
    }
}

impl EphemerisProvider for TableEphemeris {
    fn position(&self, at: DateTime<Utc>, body: Body) -> Result<BodyPosition, EphemerisError> {
        self.bodies
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                datetime: at,
                message: "no tabulated position".to_string(),
            })
    }

    fn houses(
        &self,
        _at: DateTime<Utc>,
        _location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        let (cusps, ascendant, midheaven) =
            self.houses.ok_or_else(|| EphemerisError::HouseCalculationFailed {
                message: "no tabulated house frame".to_string(),
            })?;
        Ok(HousePositions {
            system,
            cusps,
            ascendant,
            midheaven,
        })
    }
}
