//! Divination computation engine.
//!
//! Turns calendar and astronomical inputs into typed readings: I Ching
//! hexagrams, tarot draws, birth and question charts, the destiny matrix,
//! Sucai numerology and pairwise compatibility. Readings implement
//! `Display` for plain text and `Serialize` for JSON.

pub mod arcana;
pub mod aspects;
pub mod chart;
pub mod compatibility;
pub mod ephemeris;
pub mod error;
pub mod iching;
pub mod input;
pub mod matrix;
pub mod numerology;
pub mod tarot;
pub mod western;

pub use chart::{Chart, ChartEngine, ChartSettings, HoraryReading, NatalChart};
pub use compatibility::Compatibility;
pub use ephemeris::{Body, EphemerisError, EphemerisProvider, GeoLocation, HouseSystem};
pub use error::{ErrorCategory, OracleError};
pub use iching::{Casting, Hexagram, Numbering};
pub use matrix::DestinyMatrix;
pub use numerology::{reduce, NumerologyProfile};
pub use tarot::TarotCard;
