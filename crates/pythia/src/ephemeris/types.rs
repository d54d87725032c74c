use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Ephemeris provider unavailable: {message}")]
    Unavailable { message: String },
}

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    /// Moscow, the reference location used when a chart has no place.
    pub const REFERENCE: GeoLocation = GeoLocation { lat: 55.75, lon: 37.62 };
}

/// Bodies the engine knows how to ask a provider about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Chiron,
}

impl Body {
    pub const ALL: [Body; 12] = [
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
        Body::NorthNode,
        Body::Chiron,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::NorthNode => "north_node",
            Body::Chiron => "chiron",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::NorthNode => "North Node",
            Body::Chiron => "Chiron",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '-'], "_");
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.id() == wanted)
            .ok_or_else(|| format!("Unknown body: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 8] = [
        HouseSystem::Placidus,
        HouseSystem::WholeSign,
        HouseSystem::Koch,
        HouseSystem::Equal,
        HouseSystem::Regiomontanus,
        HouseSystem::Campanus,
        HouseSystem::Alcabitius,
        HouseSystem::Morinus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::WholeSign => "whole_sign",
            HouseSystem::Koch => "koch",
            HouseSystem::Equal => "equal",
            HouseSystem::Regiomontanus => "regiomontanus",
            HouseSystem::Campanus => "campanus",
            HouseSystem::Alcabitius => "alcabitius",
            HouseSystem::Morinus => "morinus",
        }
    }

    /// Single-letter code understood by the Swiss Ephemeris.
    pub fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Campanus => b'C',
            HouseSystem::Alcabitius => b'A',
            HouseSystem::Morinus => b'M',
        }
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HouseSystem::ALL
            .iter()
            .copied()
            .find(|system| system.name() == wanted)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HouseSystem::ALL.iter().map(|h| h.name().to_string()).collect(),
            })
    }
}

/// Position of one body as reported by a provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

impl BodyPosition {
    pub fn retrograde(&self) -> bool {
        self.speed_lon < 0.0
    }
}

/// House cusps and angles for one moment and place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    pub system: HouseSystem,
    /// Cusps of houses 1..12, in order
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

impl HousePositions {
    pub fn descendant(&self) -> f64 {
        (self.ascendant + 180.0) % 360.0
    }

    pub fn imum_coeli(&self) -> f64 {
        (self.midheaven + 180.0) % 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_system_parsing() {
        assert_eq!("Placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("whole_sign".parse::<HouseSystem>().unwrap().code(), b'W');
        let err = "topocentric".parse::<HouseSystem>().unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidHouseSystem { .. }));
    }

    #[test]
    fn test_every_house_system_has_name_and_code() {
        let mut codes: Vec<u8> = HouseSystem::ALL.iter().map(|h| h.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), HouseSystem::ALL.len());
        for system in HouseSystem::ALL {
            assert_eq!(system.name().parse::<HouseSystem>().unwrap(), system);
        }
    }

    #[test]
    fn test_body_parsing() {
        assert_eq!("north node".parse::<Body>().unwrap(), Body::NorthNode);
        assert_eq!("Moon".parse::<Body>().unwrap(), Body::Moon);
        assert!("vulcan".parse::<Body>().is_err());
    }

    #[test]
    fn test_derived_angles() {
        let houses = HousePositions {
            system: HouseSystem::Placidus,
            cusps: [0.0; 12],
            ascendant: 200.0,
            midheaven: 100.0,
        };
        assert_eq!(houses.descendant(), 20.0);
        assert_eq!(houses.imum_coeli(), 280.0);
    }
}
