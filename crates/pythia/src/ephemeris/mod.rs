#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;
pub mod provider;
pub mod table;
pub mod time;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{BodyPositions, EphemerisProvider};
pub use table::TableEphemeris;
pub use time::julian_day;
pub use types::{
    Body, BodyPosition, EphemerisError, GeoLocation, HousePositions, HouseSystem,
};
