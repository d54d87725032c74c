use chrono::{TimeZone, Utc};
use pythia::ephemeris::{
    julian_day, Body, EphemerisError, EphemerisProvider, GeoLocation, HouseSystem, TableEphemeris,
};

#[cfg(feature = "swiss-ephemeris")]
#[tokio::test]
#[ignore] // Requires Swiss Ephemeris files
async fn test_swiss_positions_basic() {
    use pythia::ephemeris::SwissEphemerisAdapter;

    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();

    let positions = adapter.positions(at, &Body::ALL);
    assert!(positions.failed.is_empty(), "{:?}", positions.failed);

    // The Sun sits near 280 degrees on J2000
    let sun = positions.found[&Body::Sun];
    assert!((sun.lon - 280.4).abs() < 0.5);
    assert!(sun.speed_lon > 0.9);

    let houses = adapter
        .houses(at, GeoLocation::REFERENCE, HouseSystem::Placidus)
        .unwrap();
    assert!((houses.cusps[0] - houses.ascendant).abs() < 1e-6);
}

#[test]
fn test_house_system_parsing() {
    assert_eq!("placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
    assert_eq!("whole_sign".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
    assert_eq!(HouseSystem::default(), HouseSystem::Placidus);

    let err = "topocentric-ish".parse::<HouseSystem>().unwrap_err();
    assert!(matches!(err, EphemerisError::InvalidHouseSystem { .. }));
}

#[test]
fn test_table_provider_reports_failures_per_body() {
    let table = TableEphemeris::new().with_body(Body::Venus, 45.0, 1.2);
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let positions = table.positions(at, &[Body::Venus, Body::Mars]);
    assert_eq!(positions.found.len(), 1);
    assert!(positions.failed.contains_key(&Body::Mars));
    assert!(table
        .houses(at, GeoLocation::REFERENCE, HouseSystem::Placidus)
        .is_err());
}

#[test]
fn test_julian_day_epoch() {
    let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert!((julian_day(j2000) - 2_451_545.0).abs() < 1e-9);
}
