use crate::aspects::AspectCalculator;
use crate::chart::data::{BodyReading, Chart};
use crate::chart::houses::house_of;
use crate::chart::settings::ChartSettings;
use crate::ephemeris::{Body, EphemerisProvider, GeoLocation};
use crate::error::OracleError;
use crate::input::validate_location;
use crate::western::{degree_minute_in_sign, normalize_degrees, Sign};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Turns provider positions into charts.
pub struct ChartEngine<P> {
    provider: P,
    settings: ChartSettings,
    aspects: AspectCalculator,
}

impl<P: EphemerisProvider> ChartEngine<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, ChartSettings::default())
    }

    pub fn with_settings(provider: P, settings: ChartSettings) -> Self {
        Self {
            provider,
            settings,
            aspects: AspectCalculator::new(),
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Compute a chart for `roster`. Bodies the provider fails on are
    /// omitted; a failed house calculation leaves the chart without houses.
    /// Element and quality are attached when `classify` is set.
    pub fn compute(
        &self,
        at: DateTime<Utc>,
        location: Option<GeoLocation>,
        roster: &[Body],
        classify: bool,
    ) -> Result<Chart, OracleError> {
        let location = location.unwrap_or(self.settings.default_location);
        validate_location(&location)?;

        let positions = self.provider.positions(at, roster);
        for (body, err) in &positions.failed {
            log::warn!("Omitting {} from chart at {}: {}", body, at, err);
        }

        let houses = match self.provider.houses(at, location, self.settings.house_system) {
            Ok(h) => Some(h),
            Err(e) => {
                log::warn!("Houses unavailable at {}, charting bodies only: {}", at, e);
                None
            }
        };

        let bodies: BTreeMap<Body, BodyReading> = positions
            .found
            .iter()
            .map(|(&body, pos)| {
                let longitude = normalize_degrees(pos.lon);
                let sign = Sign::from_longitude(longitude);
                let (degree, minute) = degree_minute_in_sign(longitude);
                let reading = BodyReading {
                    body,
                    longitude,
                    speed: pos.speed_lon,
                    sign,
                    house: houses.as_ref().map(|h| house_of(longitude, &h.cusps)),
                    degree,
                    minute,
                    retrograde: pos.retrograde(),
                    element: classify.then(|| sign.element()),
                    quality: classify.then(|| sign.quality()),
                };
                (body, reading)
            })
            .collect();

        let aspects = self.aspects.compute_aspects(&positions.found);
        log::debug!(
            "Chart at {}: {} bodies, {} aspects, houses {}",
            at,
            bodies.len(),
            aspects.len(),
            if houses.is_some() { "present" } else { "missing" }
        );

        Ok(Chart {
            timestamp: at,
            location,
            houses,
            bodies,
            missing: positions.failed.into_keys().collect(),
            aspects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::AspectKind;
    use crate::ephemeris::TableEphemeris;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 3, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_full_chart() {
        let table = TableEphemeris::new()
            .with_body(Body::Sun, 354.5, 1.0)
            .with_body(Body::Moon, 84.5, 13.2)
            .with_body(Body::Mars, 305.0, -0.3)
            .with_equal_houses(340.0);
        let engine = ChartEngine::new(table);
        let chart = engine
            .compute(at(), None, &[Body::Sun, Body::Moon, Body::Mars], true)
            .unwrap();

        assert!(chart.is_complete());
        assert_eq!(chart.location, GeoLocation::REFERENCE);

        let sun = chart.body(Body::Sun).unwrap();
        assert_eq!(sun.sign, Sign::Pisces);
        assert_eq!(sun.house, Some(1));
        assert_eq!((sun.degree, sun.minute), (24, 30));

        let mars = chart.body(Body::Mars).unwrap();
        assert!(mars.retrograde);
        assert_eq!(mars.house, Some(11));

        // Sun-Moon separation is exactly 90 degrees
        assert_eq!(chart.aspects.len(), 1);
        assert_eq!(chart.aspects[0].first, Body::Sun);
        assert_eq!(chart.aspects[0].second, Body::Moon);
        assert_eq!(chart.aspects[0].core.kind, AspectKind::Square);
        assert_eq!(chart.retrograde_bodies(), vec![Body::Mars]);
    }

    #[test]
    fn test_missing_body_is_omitted() {
        let table = TableEphemeris::new()
            .with_body(Body::Sun, 10.0, 1.0)
            .with_equal_houses(0.0);
        let chart = ChartEngine::new(table)
            .compute(at(), None, &[Body::Sun, Body::Moon], false)
            .unwrap();
        assert_eq!(chart.bodies.len(), 1);
        assert_eq!(chart.missing, vec![Body::Moon]);
        assert!(!chart.is_complete());
        assert_eq!(chart.body(Body::Sun).unwrap().element, None);
    }

    #[test]
    fn test_house_failure_degrades_to_bodies_only() {
        let table = TableEphemeris::new().with_body(Body::Sun, 10.0, 1.0);
        let chart = ChartEngine::new(table)
            .compute(at(), None, &[Body::Sun], false)
            .unwrap();
        assert!(chart.houses.is_none());
        assert_eq!(chart.body(Body::Sun).unwrap().house, None);
        assert_eq!(chart.ascendant(), None);
    }

    #[test]
    fn test_invalid_location_rejected() {
        let engine = ChartEngine::new(TableEphemeris::new());
        let err = engine
            .compute(at(), Some(GeoLocation { lat: 120.0, lon: 0.0 }), &[Body::Sun], false)
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidLocation { .. }));
    }
}
