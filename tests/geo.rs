//! 지역 매칭 회귀 테스트.
use std::io;
use std::sync::{Arc, Mutex};

use rainwater_feasibility::location::{
    haversine_km, GeoMatcher, LocationError, LocationQuery, LocationRecord, LocationTable,
    SoilType, WaterQuality,
};

fn data_file() -> String {
    format!("{}/data/locations.toml", env!("CARGO_MANIFEST_DIR"))
}

fn csv_data_file() -> String {
    format!("{}/data/locations.csv", env!("CARGO_MANIFEST_DIR"))
}

/// 로그 출력을 모으는 버퍼
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

fn load_with_captured_log(path: &std::path::Path) -> (GeoMatcher, String) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let matcher =
        tracing::subscriber::with_default(subscriber, || GeoMatcher::load_or_unavailable(path));
    (matcher, logs.contents())
}

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn point(name: &str, lat: f64, lon: f64) -> LocationRecord {
    LocationRecord {
        latitude: lat,
        longitude: lon,
        ..LocationRecord::ad_hoc(name, 900.0)
    }
}

#[test]
fn haversine_is_symmetric_and_zero_on_self() {
    let (delhi, mumbai) = ((28.6139, 77.2090), (19.0760, 72.8777));
    let ab = haversine_km(delhi.0, delhi.1, mumbai.0, mumbai.1);
    let ba = haversine_km(mumbai.0, mumbai.1, delhi.0, delhi.1);
    assert_close("symmetry", ab, ba, 1e-12);
    assert_close("Delhi-Mumbai", ab, 1148.09, 1e-3);
    assert_eq!(haversine_km(delhi.0, delhi.1, delhi.0, delhi.1), 0.0);
}

#[test]
fn nearest_picks_closest_record_with_distance() {
    let matcher = GeoMatcher::new(LocationTable::built_in());
    // Chennai 공항 부근
    let m = matcher.nearest_by_coordinate(12.99, 80.17).expect("nearest");
    assert_eq!(m.record.region_name, "Chennai");
    assert_close("airport distance", m.distance_km, 15.01, 1e-2);
}

#[test]
fn nearest_ties_go_to_first_record_in_table_order() {
    let matcher = GeoMatcher::new(LocationTable::new(vec![
        point("East", 0.0, 1.0),
        point("West", 0.0, -1.0),
    ]));
    let m = matcher.nearest_by_coordinate(0.0, 0.0).expect("nearest");
    assert_eq!(m.record.region_name, "East");
}

#[test]
fn by_name_matches_region_inside_query_text() {
    let matcher = GeoMatcher::new(LocationTable::built_in());
    let m = matcher.by_name("Sector 12, New DELHI").expect("substring match");
    assert_eq!(m.record.region_name, "Delhi");
    assert_eq!(m.distance_km, 0.0);

    let exact = matcher.by_name("pune").expect("case-insensitive");
    assert_eq!(exact.record.region_name, "Pune");
}

#[test]
fn unknown_name_is_not_found() {
    let matcher = GeoMatcher::new(LocationTable::built_in());
    let err = matcher.by_name("Atlantis").unwrap_err();
    assert!(matches!(err, LocationError::LocationNotFound(_)));
}

#[test]
fn empty_table_has_no_nearest() {
    let matcher = GeoMatcher::new(LocationTable::default());
    assert!(matches!(
        matcher.nearest_by_coordinate(10.0, 10.0),
        Err(LocationError::LocationNotFound(_))
    ));
}

#[test]
fn resolve_prefers_coordinates_over_name() {
    let matcher = GeoMatcher::new(LocationTable::built_in());
    let query = LocationQuery {
        name: Some("Delhi".into()),
        latitude: Some(19.07),
        longitude: Some(72.88),
    };
    let m = matcher.resolve(&query).expect("resolve");
    assert_eq!(m.record.region_name, "Mumbai");

    let by_name = matcher.resolve(&LocationQuery::by_name("Jaipur")).expect("resolve");
    assert_eq!(by_name.distance_km, 0.0);
}

#[test]
fn missing_reference_file_makes_every_lookup_unavailable() {
    let matcher = GeoMatcher::load_or_unavailable("does/not/exist.toml");
    assert!(!matcher.is_available());
    assert!(matches!(
        matcher.by_name("Delhi"),
        Err(LocationError::ReferenceDataUnavailable { .. })
    ));
    assert!(matches!(
        matcher.nearest_by_coordinate(28.6, 77.2),
        Err(LocationError::ReferenceDataUnavailable { .. })
    ));
    assert!(matches!(
        matcher.resolve(&LocationQuery::default()),
        Err(LocationError::ReferenceDataUnavailable { .. })
    ));
}

#[test]
fn data_file_loads_with_optional_columns() {
    let table = LocationTable::load(data_file()).expect("load data file");
    assert_eq!(table.len(), 5);

    let kolkata = &table.records()[3];
    assert_eq!(kolkata.soil_type, Some(SoilType::Clay));
    assert_eq!(kolkata.water_quality, Some(WaterQuality::Poor));

    let pune = &table.records()[4];
    assert_eq!(pune.region_name, "Pune");
    assert_eq!(pune.runoff_coefficient, None);
    assert_eq!(pune.soil_type, None);
    assert_eq!(pune.remarks, None);
}

#[test]
fn malformed_toml_is_reported_as_unavailable() {
    let path = std::env::temp_dir().join(format!("rwh_bad_{}.toml", std::process::id()));
    std::fs::write(&path, "[[location]]\nRegion_Name = 5\n").expect("write temp file");
    let err = LocationTable::load(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, LocationError::ReferenceDataUnavailable { .. }));
}

#[test]
fn unknown_soil_text_is_preserved() {
    let soil = SoilType::parse("Laterite");
    assert_eq!(soil, SoilType::Other("Laterite".into()));
    assert_eq!(soil.to_string(), "Laterite");
    assert!(SoilType::parse(" SANDY ").is_permeable());
}

#[test]
fn dataset_csv_loads_with_blank_and_omitted_columns() {
    let table = LocationTable::load(csv_data_file()).expect("load csv data file");
    assert_eq!(table.len(), 5);

    let kolkata = &table.records()[3];
    assert_eq!(kolkata.region_name, "Kolkata");
    assert_eq!(kolkata.runoff_coefficient, Some(0.85));
    assert_eq!(kolkata.soil_type, Some(SoilType::Clay));
    assert_eq!(kolkata.water_quality, Some(WaterQuality::Poor));
    // Remarks 컬럼 자체가 없다
    assert_eq!(kolkata.remarks, None);

    let pune = &table.records()[4];
    assert_eq!(pune.rainfall_mm, 720.0);
    assert_eq!(pune.runoff_coefficient, None);
    assert_eq!(pune.soil_type, None);
    assert_eq!(pune.groundwater_depth_m, None);
    assert_eq!(pune.water_quality, None);
}

#[test]
fn csv_with_only_required_columns_is_accepted() {
    let table =
        LocationTable::from_csv_str("Region_Name,Latitude,Longitude,Rainfall_mm\nDelhi,28.6,77.2,790\n")
            .expect("minimal csv");
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].region_name, "Delhi");
    assert_eq!(table.records()[0].rainfall_mm, 790.0);
    assert_eq!(table.records()[0].infiltration_rate_mm_per_hr, None);
}

#[test]
fn csv_reference_file_serves_lookups() {
    let matcher = GeoMatcher::load_or_unavailable(csv_data_file());
    assert!(matcher.is_available());
    let m = matcher.nearest_by_coordinate(22.6, 88.4).expect("nearest");
    assert_eq!(m.record.region_name, "Kolkata");
}

#[test]
fn every_load_failure_is_logged_as_error() {
    let (matcher, log) = load_with_captured_log(std::path::Path::new("does/not/exist.csv"));
    assert!(!matcher.is_available());
    assert!(log.contains("ERROR"), "{log}");
    assert!(log.contains("location data could not be loaded"), "{log}");

    let path = std::env::temp_dir().join(format!("rwh_bad_{}.csv", std::process::id()));
    std::fs::write(&path, "Region_Name,Latitude,Longitude,Rainfall_mm\nDelhi,north,77.2,790\n")
        .expect("write temp file");
    let (matcher, log) = load_with_captured_log(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        matcher.by_name("Delhi"),
        Err(LocationError::ReferenceDataUnavailable { .. })
    ));
    assert!(log.contains("location data could not be loaded"), "{log}");
}
