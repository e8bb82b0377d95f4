use serde::Serialize;

use super::structures::StructureDimensions;

/// 기본 상수도 단가 [₹/L]
pub const DEFAULT_WATER_COST_PER_LITER: f64 = 0.16;
/// 저류조 단가 [₹/L]
const STORAGE_COST_PER_LITER: f64 = 15.0;

/// 비용 산정 대상 구조물.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    StorageTank,
    RechargePit,
    RechargeTrench,
}

impl StructureKind {
    /// 키 문자열을 해석한다. 알 수 없는 키는 저류조로 취급한다.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "recharge_pit" => StructureKind::RechargePit,
            "recharge_trench" => StructureKind::RechargeTrench,
            _ => StructureKind::StorageTank,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            StructureKind::StorageTank => "storage_tank",
            StructureKind::RechargePit => "recharge_pit",
            StructureKind::RechargeTrench => "recharge_trench",
        }
    }
}

/// 구조물별 비용 항목 [₹].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSchedule {
    pub base_cost: f64,
    pub installation: f64,
    pub maintenance_annual: f64,
}

/// 구조물 종류별 고정 비용표. 저류조 본체비는 산정된 용량에 비례한다.
pub fn cost_schedule(kind: StructureKind, dimensions: &StructureDimensions) -> CostSchedule {
    match kind {
        StructureKind::StorageTank => CostSchedule {
            base_cost: dimensions.storage.capacity_liters as f64 * STORAGE_COST_PER_LITER,
            installation: 5_000.0,
            maintenance_annual: 2_000.0,
        },
        StructureKind::RechargePit => CostSchedule {
            base_cost: 15_000.0,
            installation: 8_000.0,
            maintenance_annual: 3_000.0,
        },
        StructureKind::RechargeTrench => CostSchedule {
            base_cost: 25_000.0,
            installation: 12_000.0,
            maintenance_annual: 4_000.0,
        },
    }
}

/// 공사비와 회수기간 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysis {
    pub structure: StructureKind,
    /// 1회성 공사비 (유지비 제외) [₹]
    pub total_construction_cost: f64,
    /// 연간 절감 수도요금 [₹/년]
    pub annual_water_value: f64,
    /// 유지비 차감 후 순절감액 [₹/년]
    pub annual_net_savings: f64,
    /// 단순 회수기간 [년]. 순절감액이 0 이하이면 무한대 (JSON에서는 null)
    pub payback_years: f64,
    /// 회수가 가능한지 여부. JSON 소비자가 null 회수기간을 해석할 때 쓴다.
    pub pays_back: bool,
    pub roi_percentage: f64,
}

/// 공사비, 연간 절감액, 단순 회수기간, ROI를 계산한다.
pub fn estimate_cost_and_payback(
    kind: StructureKind,
    dimensions: &StructureDimensions,
    annual_runoff_liters: f64,
    water_cost_per_liter: f64,
) -> CostAnalysis {
    let schedule = cost_schedule(kind, dimensions);
    let total_construction_cost = schedule.base_cost + schedule.installation;
    let annual_water_value = annual_runoff_liters * water_cost_per_liter;
    let annual_net_savings = annual_water_value - schedule.maintenance_annual;

    let payback_years = if annual_net_savings > 0.0 {
        total_construction_cost / annual_net_savings
    } else {
        f64::INFINITY
    };
    let roi_percentage = if total_construction_cost > 0.0 {
        annual_net_savings / total_construction_cost * 100.0
    } else {
        0.0
    };

    CostAnalysis {
        structure: kind,
        total_construction_cost,
        annual_water_value,
        annual_net_savings,
        payback_years,
        pays_back: payback_years.is_finite(),
        roi_percentage,
    }
}
