use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PYTHIA_CONFIG";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq)]
pub struct LocationSettings {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PythiaSettings {
    pub log_level: String,
    /// Swiss Ephemeris data directory; `None` leaves the choice to the adapter
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: String,
    pub location: LocationSettings,
    pub numbering: String,
}

impl Default for PythiaSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            ephemeris_path: None,
            house_system: default_house_system(),
            location: LocationSettings {
                lat: default_lat(),
                lon: default_lon(),
                label: default_label(),
            },
            numbering: default_numbering(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    house_system: String,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    #[serde(default = "default_lat")]
    lat: f64,
    #[serde(default = "default_lon")]
    lon: f64,
    #[serde(default = "default_label")]
    label: String,
}

#[derive(Debug, Clone, Deserialize)]
struct IchingToml {
    #[serde(default = "default_numbering")]
    numbering: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    location: Option<LocationToml>,
    #[serde(default)]
    iching: Option<IchingToml>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_lat() -> f64 {
    55.75
}

fn default_lon() -> f64 {
    37.62
}

fn default_label() -> String {
    "Moscow".to_string()
}

fn default_numbering() -> String {
    "king_wen".to_string()
}

/// Locate the config file: `PYTHIA_CONFIG` first, then the usual relative
/// `configs/pythia.toml` paths. `None` when nothing is found.
pub fn find_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    ["configs/pythia.toml", "../../configs/pythia.toml"]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

pub fn parse_settings(text: &str) -> anyhow::Result<PythiaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse pythia.toml: {e}"))?;

    let defaults = PythiaSettings::default();
    let ephemeris = root.ephemeris.unwrap_or_else(|| EphemerisToml {
        path: None,
        house_system: default_house_system(),
    });
    let location = root
        .location
        .map(|l| LocationSettings {
            lat: l.lat,
            lon: l.lon,
            label: l.label,
        })
        .unwrap_or(defaults.location);

    let settings = PythiaSettings {
        log_level: root.log_level.to_lowercase(),
        ephemeris_path: ephemeris.path,
        house_system: ephemeris.house_system,
        location,
        numbering: root
            .iching
            .map(|i| i.numbering)
            .unwrap_or(defaults.numbering),
    };
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &PythiaSettings) -> anyhow::Result<()> {
    if !LOG_LEVELS.contains(&settings.log_level.as_str()) {
        anyhow::bail!(
            "log_level must be one of {:?}, got '{}'",
            LOG_LEVELS,
            settings.log_level
        );
    }
    let LocationSettings { lat, lon, .. } = settings.location;
    if !(-90.0..=90.0).contains(&lat) {
        anyhow::bail!("location.lat must be within [-90, 90], got {lat}");
    }
    if !(-180.0..=180.0).contains(&lon) {
        anyhow::bail!("location.lon must be within [-180, 180], got {lon}");
    }
    if let Some(path) = &settings.ephemeris_path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("ephemeris.path is set but empty");
        }
    }
    Ok(())
}

/// Load settings from `explicit` when given (it must exist), otherwise from
/// [`find_config_path`], falling back to built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<PythiaSettings> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match find_config_path() {
            Some(p) => p,
            None => return Ok(PythiaSettings::default()),
        },
    };
    let text = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_settings(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), PythiaSettings::default());
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            log_level = "DEBUG"

            [ephemeris]
            path = "/opt/swisseph"
            house_system = "koch"

            [location]
            lat = 48.85
            lon = 2.35
            label = "Paris"

            [iching]
            numbering = "binary"
        "#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/opt/swisseph")));
        assert_eq!(settings.house_system, "koch");
        assert_eq!(settings.location.label, "Paris");
        assert_eq!(settings.numbering, "binary");
    }

    #[test]
    fn test_partial_location_keeps_defaults() {
        let settings = parse_settings("[location]\nlabel = \"Home\"\n").unwrap();
        assert_eq!(settings.location.lat, 55.75);
        assert_eq!(settings.location.label, "Home");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[location]\nlat = 91.0\n").is_err());
        assert!(parse_settings("[location]\nlon = -181.0\n").is_err());
        assert!(parse_settings("log_level = \"loud\"\n").is_err());
        assert!(parse_settings("log_level = 3\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = load_settings(Some(Path::new("/nonexistent/pythia.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pythia.toml"));
    }
}
