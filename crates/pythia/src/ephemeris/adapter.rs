use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::time::julian_day;
use crate::ephemeris::types::{
    Body, BodyPosition, EphemerisError, GeoLocation, HousePositions, HouseSystem,
};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: i32 = 2 | 256;
// FLG_SWIEPH
const HOUSE_FLAGS: i32 = 2;

lazy_static! {
    // The C library keeps global state; one call at a time.
    static ref SWE_LOCK: Mutex<()> = Mutex::new(());
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        log::debug!("Swiss Ephemeris data at {}", path.display());
        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Swiss Ephemeris planet ID
    fn body_code(body: Body) -> u32 {
        match body {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
            // TRUE_NODE
            Body::NorthNode => 11,
            Body::Chiron => 15,
        }
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn position(&self, at: DateTime<Utc>, body: Body) -> Result<BodyPosition, EphemerisError> {
        let jd = julian_day(at);
        let _guard = SWE_LOCK.lock().map_err(|_| EphemerisError::Unavailable {
            message: "Swiss Ephemeris lock poisoned".to_string(),
        })?;

        let result = calc_ut(jd, Self::body_code(body), CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                datetime: at,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(BodyPosition {
            lon: out[0].rem_euclid(360.0),
            speed_lon: out[3],
        })
    }

    fn houses(
        &self,
        at: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        let jd = julian_day(at);
        let _guard = SWE_LOCK.lock().map_err(|_| EphemerisError::Unavailable {
            message: "Swiss Ephemeris lock poisoned".to_string(),
        })?;

        let (c, a) = houses_ex(jd, HOUSE_FLAGS, location.lat, location.lon, system.code() as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} cusps undefined at lat {:.2} on {}",
                    system.name(),
                    location.lat,
                    at
                ),
            });
        }

        Ok(HousePositions {
            system,
            cusps: values.map(|v| v.rem_euclid(360.0)),
            ascendant: ascmc.ascendant.rem_euclid(360.0),
            midheaven: ascmc.mc.rem_euclid(360.0),
        })
    }
}
