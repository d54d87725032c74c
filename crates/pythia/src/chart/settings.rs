use crate::ephemeris::{Body, GeoLocation, HouseSystem};
use serde::{Deserialize, Serialize};

/// Bodies cast for a question chart.
pub const HORARY_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Bodies cast for a birth chart.
pub const NATAL_BODIES: [Body; 12] = Body::ALL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    pub house_system: HouseSystem,
    /// Used whenever a request carries no location
    pub default_location: GeoLocation,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus,
            default_location: GeoLocation::REFERENCE,
        }
    }
}
