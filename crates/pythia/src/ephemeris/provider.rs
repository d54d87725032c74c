use crate::ephemeris::types::{Body, BodyPosition, EphemerisError, GeoLocation, HousePositions, HouseSystem};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Source of ecliptic longitudes, angular velocities and house frames.
///
/// Implementations are blocking and may fail on any call. The chart engine
/// keeps whatever succeeds.
pub trait EphemerisProvider: Send + Sync {
    fn position(&self, at: DateTime<Utc>, body: Body) -> Result<BodyPosition, EphemerisError>;

    fn houses(
        &self,
        at: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError>;

    /// Positions for a roster, with per-body failures kept apart.
    fn positions(&self, at: DateTime<Utc>, bodies: &[Body]) -> BodyPositions {
        let mut result = BodyPositions::default();
        for &body in bodies {
            match self.position(at, body) {
                Ok(pos) => {
                    result.found.insert(body, pos);
                }
                Err(e) => {
                    result.failed.insert(body, e);
                }
            }
        }
        result
    }
}

#[derive(Debug, Default)]
pub struct BodyPositions {
    pub found: BTreeMap<Body, BodyPosition>,
    pub failed: BTreeMap<Body, EphemerisError>,
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn position(&self, at: DateTime<Utc>, body: Body) -> Result<BodyPosition, EphemerisError> {
        (**self).position(at, body)
    }

    fn houses(
        &self,
        at: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        (**self).houses(at, location, system)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn position(&self, at: DateTime<Utc>, body: Body) -> Result<BodyPosition, EphemerisError> {
        (**self).position(at, body)
    }

    fn houses(
        &self,
        at: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        (**self).houses(at, location, system)
    }
}
