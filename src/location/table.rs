use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::record::{LocationRecord, SoilType, WaterQuality};
use super::LocationError;

/// 읽기 전용 지역 기준 테이블. 로드 이후 변경되지 않으며 순서가 매칭 우선순위가 된다.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    records: Vec<LocationRecord>,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(rename = "location", default)]
    locations: Vec<LocationRecord>,
}

impl LocationTable {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// 기준 데이터 파일을 읽는다. 확장자가 `.csv`이면 데이터셋 CSV, 그 외에는 TOML `[[location]]` 테이블 배열로 해석한다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocationError> {
        let path = path.as_ref();
        let unavailable = |reason: String| LocationError::ReferenceDataUnavailable {
            path: path.to_path_buf(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::from_csv_str(&content).map_err(|e| unavailable(e.to_string()))
        } else {
            Self::from_toml_str(&content).map_err(|e| unavailable(e.to_string()))
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        let file: TableFile = toml::from_str(src)?;
        Ok(Self::new(file.locations))
    }

    /// 헤더 행이 데이터셋 컬럼명인 CSV를 읽는다. 빈 칸이나 없는 선택 컬럼은 `None`이 된다.
    pub fn from_csv_str(src: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(src.as_bytes());
        let records = reader
            .deserialize::<LocationRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records))
    }

    /// 데이터 파일 없이도 동작하도록 내장된 참고용 테이블.
    pub fn built_in() -> Self {
        Self::new(vec![
            loc("Delhi", 28.6139, 77.2090, 790.0, 0.80, "Loamy", 18.5, 12.0, "Moderate", "Overexploited blocks in parts of the NCT"),
            loc("Mumbai", 19.0760, 72.8777, 2400.0, 0.85, "Clay", 6.0, 4.0, "Good", "Coastal aquifer; recharge encouraged"),
            loc("Chennai", 13.0827, 80.2707, 1400.0, 0.80, "Sandy", 7.5, 25.0, "Good", "Mandatory RWH under state law"),
            loc("Bengaluru", 12.9716, 77.5946, 970.0, 0.80, "Loamy", 12.0, 15.0, "Good", "Hard rock aquifer"),
            loc("Kolkata", 22.5726, 88.3639, 1600.0, 0.85, "Clay", 4.5, 3.5, "Poor", "Arsenic-affected pockets"),
            loc("Hyderabad", 17.3850, 78.4867, 810.0, 0.80, "Sandy", 9.0, 20.0, "Good", "Semi-critical"),
            loc("Jaipur", 26.9124, 75.7873, 650.0, 0.75, "Sandy", 35.0, 30.0, "Moderate", "Overexploited; extraction restricted"),
            loc("Pune", 18.5204, 73.8567, 720.0, 0.80, "Loamy", 8.0, 14.0, "Good", "Safe"),
            loc("Ahmedabad", 23.0225, 72.5714, 780.0, 0.80, "Sandy", 25.0, 28.0, "Moderate", "Critical"),
            loc("Lucknow", 26.8467, 80.9462, 1000.0, 0.80, "Loamy", 16.0, 10.0, "Good", "Semi-critical"),
            loc("Guwahati", 26.1445, 91.7362, 1720.0, 0.85, "Clay", 2.5, 6.0, "Good", "High water table"),
            loc("Thiruvananthapuram", 8.5241, 76.9366, 1830.0, 0.85, "Loamy", 5.5, 18.0, "Good", "Safe"),
        ])
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn loc(
    name: &str,
    latitude: f64,
    longitude: f64,
    rainfall_mm: f64,
    runoff_coefficient: f64,
    soil: &str,
    groundwater_depth_m: f64,
    infiltration_rate_mm_per_hr: f64,
    quality: &str,
    remarks: &str,
) -> LocationRecord {
    LocationRecord {
        region_name: name.to_string(),
        latitude,
        longitude,
        rainfall_mm,
        runoff_coefficient: Some(runoff_coefficient),
        soil_type: Some(SoilType::parse(soil)),
        groundwater_depth_m: Some(groundwater_depth_m),
        infiltration_rate_mm_per_hr: Some(infiltration_rate_mm_per_hr),
        water_quality: Some(WaterQuality::parse(quality)),
        remarks: Some(remarks.to_string()),
    }
}

// NOTE:
// - 내장 값은 IMD 평년 강수량과 CGWB 보고서 수준의 대략치이며 설계 검토용이 아니다.
