use chrono::{TimeZone, Utc};
use pythia::chart::{horary_off_thread, natal_off_thread, ChartEngine, ChartShape};
use pythia::ephemeris::{Body, GeoLocation, TableEphemeris};
use pythia::western::Sign;
use std::sync::Arc;

fn engine() -> Arc<ChartEngine<TableEphemeris>> {
    let table = TableEphemeris::new()
        .with_body(Body::Sun, 4.0, 0.98) // Aries
        .with_body(Body::Moon, 184.0, 12.9) // Libra, opposite the Sun
        .with_body(Body::Mercury, 350.0, -0.6)
        .with_body(Body::Venus, 34.0, 1.1)
        .with_body(Body::Mars, 94.0, 0.7)
        .with_body(Body::Jupiter, 274.0, 0.2)
        .with_houses(
            [
                12.0, 40.0, 66.0, 92.0, 120.0, 150.0, 192.0, 220.0, 246.0, 272.0, 300.0, 330.0,
            ],
            12.0,
            272.0,
        );
    Arc::new(ChartEngine::new(table))
}

#[tokio::test]
async fn test_natal_off_thread() {
    let birth = Utc.with_ymd_and_hms(1990, 3, 24, 9, 0, 0).unwrap();
    let natal = natal_off_thread(engine(), birth, None, Some("Moscow".into()))
        .await
        .unwrap();

    assert_eq!(natal.sun_sign, Some(Sign::Aries));
    assert_eq!(natal.rising_sign, Some(Sign::Aries));
    assert_eq!(natal.chart.location, GeoLocation::REFERENCE);
    // Six bodies spaced at most 90 degrees apart
    assert_eq!(natal.shape, ChartShape::Bundle);

    let sun = natal.chart.body(Body::Sun).unwrap();
    // 4 degrees lies before the first cusp at 12, so in the twelfth house
    assert_eq!(sun.house, Some(12));
    assert!(natal
        .chart
        .aspects
        .iter()
        .any(|a| a.first == Body::Sun && a.second == Body::Moon));
}

#[tokio::test]
async fn test_horary_off_thread_with_location() {
    let at = Utc.with_ymd_and_hms(2024, 10, 1, 18, 45, 0).unwrap();
    let location = GeoLocation { lat: 48.85, lon: 2.35 };
    let reading = horary_off_thread(engine(), at, Some(location)).await.unwrap();

    assert_eq!(reading.chart.location, location);
    assert_eq!(reading.moon_sign, Some(Sign::Libra));
    assert_eq!(reading.moon_house, Some(6));
    assert!(!reading.moon_in_water_sign);
    assert_eq!(reading.retrograde, vec![Body::Mercury]);
    assert_eq!(reading.midheaven_sign, Some(Sign::Capricorn));
}

#[tokio::test]
async fn test_invalid_location_surfaces_from_worker() {
    let at = Utc.with_ymd_and_hms(2024, 10, 1, 18, 45, 0).unwrap();
    let err = horary_off_thread(engine(), at, Some(GeoLocation { lat: 0.0, lon: 200.0 }))
        .await
        .unwrap_err();
    assert_eq!(err.category(), pythia::ErrorCategory::Input);
}

#[test]
fn test_serialized_natal_chart() {
    let birth = Utc.with_ymd_and_hms(1990, 3, 24, 9, 0, 0).unwrap();
    let natal = engine().natal(birth, None, None).unwrap();
    let json = serde_json::to_value(&natal).unwrap();

    assert_eq!(json["sun_sign"], "aries");
    assert_eq!(json["shape"], "bundle");
    assert!(json["chart"]["bodies"]["sun"]["house"].is_number());
}
