use serde::{Deserialize, Serialize};

use crate::location::{LocationRecord, SoilType, WaterQuality};

use super::feasibility::{assess_with, EngineSettings, FeasibilityResult};
use super::household::HouseholdInput;

/// 빠른 계산 시 고정되는 유출 계수
pub const QUICK_RUNOFF_COEFFICIENT: f64 = 0.8;

/// 기준 테이블 없이 현장 값을 직접 넣는 빠른 계산 요청. 빈 값은 대표값으로 채운다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickRequest {
    pub rainfall_mm: Option<f64>,
    pub groundwater_depth_m: Option<f64>,
    pub soil_type: Option<String>,
    pub infiltration_rate_mm_per_hr: Option<f64>,
    pub water_quality: Option<String>,
    pub roof_area_m2: Option<f64>,
    pub open_space_m2: Option<f64>,
    pub household_size: Option<u32>,
    pub roof_type: Option<String>,
    pub intended_use: Option<String>,
}

impl QuickRequest {
    pub fn location(&self) -> LocationRecord {
        LocationRecord {
            runoff_coefficient: Some(QUICK_RUNOFF_COEFFICIENT),
            groundwater_depth_m: Some(self.groundwater_depth_m.unwrap_or(10.0)),
            soil_type: Some(SoilType::parse(self.soil_type.as_deref().unwrap_or("Loamy"))),
            infiltration_rate_mm_per_hr: Some(self.infiltration_rate_mm_per_hr.unwrap_or(15.0)),
            water_quality: Some(WaterQuality::parse(
                self.water_quality.as_deref().unwrap_or("Good"),
            )),
            ..LocationRecord::ad_hoc("Custom site", self.rainfall_mm.unwrap_or(800.0))
        }
    }

    pub fn household(&self) -> HouseholdInput {
        HouseholdInput {
            name: "Quick estimate".to_string(),
            household_size: self.household_size.unwrap_or(4),
            rooftop_area_m2: self.roof_area_m2.unwrap_or(100.0),
            open_space_area_m2: self.open_space_m2.unwrap_or(50.0),
            roof_type: Some(self.roof_type.clone().unwrap_or_else(|| "Concrete".to_string())),
            intended_use: Some(
                self.intended_use
                    .clone()
                    .unwrap_or_else(|| "general".to_string()),
            ),
            ..HouseholdInput::default()
        }
    }
}

/// 저장 없이 바로 평가한다.
pub fn quick_assess(request: &QuickRequest, settings: &EngineSettings) -> FeasibilityResult {
    assess_with(&request.location(), &request.household(), settings)
}
