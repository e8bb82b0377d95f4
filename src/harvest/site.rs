use serde::{Deserialize, Serialize};

use crate::location::{LocationRecord, SoilType, WaterQuality};

/// 기준 레코드에 값이 없을 때 대신 쓰는 현장 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    pub runoff_coefficient: f64,
    pub soil_type: SoilType,
    pub groundwater_depth_m: f64,
    pub infiltration_rate_mm_per_hr: f64,
    pub water_quality: WaterQuality,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            runoff_coefficient: 0.8,
            soil_type: SoilType::Loamy,
            groundwater_depth_m: 10.0,
            infiltration_rate_mm_per_hr: 15.0,
            water_quality: WaterQuality::Good,
        }
    }
}

/// 기본값 치환이 끝난 현장 조건. 평가 단계는 이 값만 본다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConditions {
    pub rainfall_mm: f64,
    pub runoff_coefficient: f64,
    pub soil_type: SoilType,
    pub groundwater_depth_m: f64,
    pub infiltration_rate_mm_per_hr: f64,
    pub water_quality: WaterQuality,
    pub remarks: String,
}

impl SiteDefaults {
    pub fn resolve(&self, record: &LocationRecord) -> SiteConditions {
        SiteConditions {
            rainfall_mm: record.rainfall_mm,
            runoff_coefficient: record.runoff_coefficient.unwrap_or(self.runoff_coefficient),
            soil_type: record
                .soil_type
                .clone()
                .unwrap_or_else(|| self.soil_type.clone()),
            groundwater_depth_m: record.groundwater_depth_m.unwrap_or(self.groundwater_depth_m),
            infiltration_rate_mm_per_hr: record
                .infiltration_rate_mm_per_hr
                .unwrap_or(self.infiltration_rate_mm_per_hr),
            water_quality: record
                .water_quality
                .clone()
                .unwrap_or_else(|| self.water_quality.clone()),
            remarks: record.remarks.clone().unwrap_or_default(),
        }
    }
}
