use serde::{Deserialize, Serialize};

use crate::location::LocationQuery;

/// 1인당 일일 물 수요 [L/인/일]
pub const DAILY_DEMAND_PER_PERSON_LITERS: f64 = 135.0;
/// 용도 미입력 시 사용
pub const DEFAULT_INTENDED_USE: &str = "general";

/// 가구 입력 한 건. 요청 단위로 만들어지고 엔진은 읽기만 한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HouseholdInput {
    pub name: String,
    #[serde(default)]
    pub location: LocationQuery,
    pub household_size: u32,
    /// 지붕 면적 [m²]
    pub rooftop_area_m2: f64,
    /// 가용 공지 면적 [m²]
    #[serde(default)]
    pub open_space_area_m2: f64,
    pub roof_type: Option<String>,
    pub property_type: Option<String>,
    pub existing_water_sources: Option<String>,
    pub budget_preference: Option<String>,
    pub intended_use: Option<String>,
}

impl HouseholdInput {
    /// 빈 문자열도 미입력으로 본다. 입력 값은 다듬지 않고 그대로 넘긴다.
    pub fn intended_use_or_default(&self) -> &str {
        self.intended_use
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_INTENDED_USE)
    }
}
