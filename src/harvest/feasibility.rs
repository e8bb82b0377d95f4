use serde::{Deserialize, Serialize};

use crate::location::LocationRecord;

use super::category::{classify, CategoryInfo, CategoryInput};
use super::economics::{
    estimate_cost_and_payback, CostAnalysis, StructureKind, DEFAULT_WATER_COST_PER_LITER,
};
use super::household::{HouseholdInput, DAILY_DEMAND_PER_PERSON_LITERS};
use super::purification::{plan_purification, PurificationPlan};
use super::recharge_safety::{validate_recharge, SafetyVerdict};
use super::runoff::{estimate_runoff, RunoffEstimate};
use super::site::{SiteConditions, SiteDefaults};
use super::structures::{size_structures, StructureDimensions};

/// 평가 엔진 파라미터. 설정 파일의 `[engine]` 절에서 덮어쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// 1인당 일일 수요 [L]
    pub daily_demand_per_person_liters: f64,
    /// 상수도 단가 [₹/L]
    pub water_cost_per_liter: f64,
    pub site_defaults: SiteDefaults,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            daily_demand_per_person_liters: DAILY_DEMAND_PER_PERSON_LITERS,
            water_cost_per_liter: DEFAULT_WATER_COST_PER_LITER,
            site_defaults: SiteDefaults::default(),
        }
    }
}

/// 수요 대비 공급 비율에 따른 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeasibilityStatus {
    FullyFeasible,
    PartiallyFeasible,
    LimitedFeasible,
    NotFeasible,
}

impl FeasibilityStatus {
    /// 높은 구간부터 평가한다.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            FeasibilityStatus::FullyFeasible
        } else if pct >= 50.0 {
            FeasibilityStatus::PartiallyFeasible
        } else if pct >= 20.0 {
            FeasibilityStatus::LimitedFeasible
        } else {
            FeasibilityStatus::NotFeasible
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeasibilityStatus::FullyFeasible => "Fully Feasible",
            FeasibilityStatus::PartiallyFeasible => "Partially Feasible",
            FeasibilityStatus::LimitedFeasible => "Limited Feasible",
            FeasibilityStatus::NotFeasible => "Not Feasible",
        }
    }
}

/// 종합 타당성 평가 결과. 호출할 때마다 새로 만들어지며 엔진이 보관하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityResult {
    pub site: SiteConditions,
    pub runoff: RunoffEstimate,
    pub safety: SafetyVerdict,
    pub category: CategoryInfo,
    pub structures: StructureDimensions,
    pub cost: CostAnalysis,
    pub purification: PurificationPlan,
    /// 연간 가구 수요 [L]
    pub annual_demand_liters: f64,
    /// 0~100, 소수 첫째 자리 반올림
    pub feasibility_percentage: f64,
    pub feasibility_status: FeasibilityStatus,
}

/// 기본 설정으로 평가한다.
pub fn assess(location: &LocationRecord, household: &HouseholdInput) -> FeasibilityResult {
    assess_with(location, household, &EngineSettings::default())
}

/// 유출량 → 안전성 → 카테고리 → 구조물 → 비용 → 정수 순으로 계산하고 수요와 비교한다.
pub fn assess_with(
    location: &LocationRecord,
    household: &HouseholdInput,
    settings: &EngineSettings,
) -> FeasibilityResult {
    let site = settings.site_defaults.resolve(location);
    let roof_area = household.rooftop_area_m2;
    let open_space = household.open_space_area_m2;

    let runoff = estimate_runoff(roof_area, site.rainfall_mm, site.runoff_coefficient);
    tracing::debug!(
        region = %location.region_name,
        annual_liters = runoff.annual_liters,
        "runoff estimated"
    );

    let safety = validate_recharge(&site);
    if !safety.is_safe {
        tracing::warn!(
            region = %location.region_name,
            issues = safety.issues.len(),
            "artificial recharge not advised"
        );
    }

    let category = classify(&CategoryInput {
        roof_area_m2: roof_area,
        open_space_m2: open_space,
        rainfall_mm: site.rainfall_mm,
        soil_type: site.soil_type.clone(),
        groundwater_depth_m: site.groundwater_depth_m,
        infiltration_rate_mm_per_hr: site.infiltration_rate_mm_per_hr,
    });
    tracing::debug!(category = category.number, name = category.name, "category assigned");

    let structures = size_structures(
        runoff.annual_liters,
        site.infiltration_rate_mm_per_hr,
        open_space,
    );

    // 함양정/트렌치 비용표가 있지만 회수기간은 저류조 기준으로만 산정한다.
    let cost = estimate_cost_and_payback(
        StructureKind::StorageTank,
        &structures,
        runoff.annual_liters,
        settings.water_cost_per_liter,
    );

    let purification = plan_purification(
        household.intended_use_or_default(),
        household.roof_type.as_deref(),
        &site,
    );

    let daily_demand = household.household_size as f64 * settings.daily_demand_per_person_liters;
    let annual_demand_liters = daily_demand * 365.0;
    let raw_percentage = feasibility_percentage(runoff.annual_liters, annual_demand_liters);
    let feasibility_status = FeasibilityStatus::from_percentage(raw_percentage);
    tracing::debug!(
        percentage = raw_percentage,
        status = feasibility_status.label(),
        "feasibility computed"
    );

    FeasibilityResult {
        site,
        runoff,
        safety,
        category,
        structures,
        cost,
        purification,
        annual_demand_liters,
        feasibility_percentage: (raw_percentage * 10.0).round() / 10.0,
        feasibility_status,
    }
}

/// 연간 유출량이 수요를 얼마나 충족하는지 [%]. 수요가 0이면 0으로 정의한다.
pub fn feasibility_percentage(annual_runoff_liters: f64, annual_demand_liters: f64) -> f64 {
    if annual_demand_liters > 0.0 {
        (annual_runoff_liters / annual_demand_liters * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
