use std::fmt;

use serde::{Deserialize, Serialize};

/// 토양 종류. 알 수 없는 문자열은 `Other`로 보존한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    Silty,
    Rocky,
    Other(String),
}

impl SoilType {
    /// 대소문자를 구분하지 않고 파싱한다.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "sandy" => SoilType::Sandy,
            "loamy" => SoilType::Loamy,
            "clay" => SoilType::Clay,
            "silty" => SoilType::Silty,
            "rocky" => SoilType::Rocky,
            _ => SoilType::Other(text.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Silty => "Silty",
            SoilType::Rocky => "Rocky",
            SoilType::Other(s) => s,
        }
    }

    /// 소형 함양정(카테고리 2)에 적합한 투수성 토양인지 여부.
    ///
    /// `Other`로 들어온 문자열도 이름이 같으면 동일하게 취급한다.
    pub fn is_permeable(&self) -> bool {
        matches!(self.as_str().to_lowercase().as_str(), "sandy" | "loamy")
    }
}

impl From<String> for SoilType {
    fn from(value: String) -> Self {
        SoilType::parse(&value)
    }
}

impl From<SoilType> for String {
    fn from(value: SoilType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 지하수 수질 등급.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WaterQuality {
    Good,
    Moderate,
    Poor,
    Contaminated,
    Other(String),
}

impl WaterQuality {
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "good" => WaterQuality::Good,
            "moderate" => WaterQuality::Moderate,
            "poor" => WaterQuality::Poor,
            "contaminated" => WaterQuality::Contaminated,
            _ => WaterQuality::Other(text.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WaterQuality::Good => "Good",
            WaterQuality::Moderate => "Moderate",
            WaterQuality::Poor => "Poor",
            WaterQuality::Contaminated => "Contaminated",
            WaterQuality::Other(s) => s,
        }
    }

    /// 인공 함양 시 오염을 악화시킬 수 있는 수질인지 여부.
    pub fn is_degraded(&self) -> bool {
        matches!(self, WaterQuality::Poor | WaterQuality::Contaminated)
    }
}

impl From<String> for WaterQuality {
    fn from(value: String) -> Self {
        WaterQuality::parse(&value)
    }
}

impl From<WaterQuality> for String {
    fn from(value: WaterQuality) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WaterQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 지역별 기후/토양 기준 레코드.
///
/// 필드명은 기준 데이터셋의 컬럼명과 동일하게 직렬화된다. 선택 컬럼이 비어 있으면
/// 평가 단계에서 [`SiteDefaults`](crate::harvest::SiteDefaults)가 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "Region_Name")]
    pub region_name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// 연간 강수량 [mm]
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    /// 유출 계수 (0~1)
    #[serde(rename = "Runoff_Coefficient", default, skip_serializing_if = "Option::is_none")]
    pub runoff_coefficient: Option<f64>,
    #[serde(rename = "Soil_Type", default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<SoilType>,
    /// 지하수위 깊이 [m]
    #[serde(rename = "Groundwater_Depth_m", default, skip_serializing_if = "Option::is_none")]
    pub groundwater_depth_m: Option<f64>,
    /// 침투율 [mm/hr]
    #[serde(
        rename = "Infiltration_Rate_mm_per_hr",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub infiltration_rate_mm_per_hr: Option<f64>,
    #[serde(rename = "Water_Quality", default, skip_serializing_if = "Option::is_none")]
    pub water_quality: Option<WaterQuality>,
    /// 규제 관련 비고 (자유 텍스트)
    #[serde(rename = "Remarks", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl LocationRecord {
    /// 강수량만 아는 임의 지점 레코드를 만든다. 나머지 속성은 비워 둔다.
    pub fn ad_hoc(region_name: impl Into<String>, rainfall_mm: f64) -> Self {
        Self {
            region_name: region_name.into(),
            latitude: 0.0,
            longitude: 0.0,
            rainfall_mm,
            runoff_coefficient: None,
            soil_type: None,
            groundwater_depth_m: None,
            infiltration_rate_mm_per_hr: None,
            water_quality: None,
            remarks: None,
        }
    }
}
