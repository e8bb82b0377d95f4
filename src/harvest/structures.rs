use std::fmt;

use serde::Serialize;

/// 소형 함양정 상한 [L]
pub const SMALL_PIT_MAX_LITERS: f64 = 50_000.0;
/// 대형 함양정 상한 [L]. 이를 넘으면 정형 치수를 제시하지 않는다.
pub const LARGE_PIT_MAX_LITERS: f64 = 150_000.0;
/// 트렌치를 추가하는 최소 공지 면적 [m²]
pub const TRENCH_MIN_SPACE_M2: f64 = 50.0;
/// 트렌치를 추가하는 최소 연간 유출량 [L]
pub const TRENCH_MIN_RUNOFF_LITERS: f64 = 100_000.0;
/// 저류조 최대 용량 [L]
pub const STORAGE_MAX_LITERS: f64 = 25_000.0;
/// 연간 유출량 중 저류조로 받는 비율
pub const STORAGE_SHARE: f64 = 0.3;

/// 자재비 범위 [₹].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostRange {
    pub min_inr: u64,
    pub max_inr: u64,
}

impl CostRange {
    pub const fn new(min_inr: u64, max_inr: u64) -> Self {
        Self { min_inr, max_inr }
    }
}

impl fmt::Display for CostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "₹{}-{}",
            group_thousands(self.min_inr),
            group_thousands(self.max_inr)
        )
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 함양정 치수.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RechargePit {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub material_cost: CostRange,
}

/// 함양정 사이징 결과. 정형 등급을 벗어나면 별도 설계가 필요함을 명시한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PitSizing {
    Sized(RechargePit),
    /// 연간 유출량이 150,000 L를 넘어 정형 치수가 없음
    NeedsCustomDesign { runoff_liters: f64 },
}

impl PitSizing {
    pub fn pit(&self) -> Option<&RechargePit> {
        match self {
            PitSizing::Sized(pit) => Some(pit),
            PitSizing::NeedsCustomDesign { .. } => None,
        }
    }
}

/// 함양 트렌치 치수.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RechargeTrench {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub material_cost: CostRange,
}

/// 원통형 저류조 치수.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageTank {
    pub capacity_liters: u64,
    /// 소수 첫째 자리 반올림
    pub diameter_m: f64,
    pub material_cost: CostRange,
}

/// 구조물 치수 묶음. 저류조는 항상 있고 함양정/트렌치는 조건부이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureDimensions {
    pub pit: PitSizing,
    pub trench: Option<RechargeTrench>,
    pub storage: StorageTank,
}

/// 연간 유출량과 가용 공지로 함양정, 트렌치, 저류조 치수를 산정한다.
///
/// 침투율은 현재 사이징 식에 반영되지 않는다.
pub fn size_structures(
    annual_runoff_liters: f64,
    _infiltration_rate_mm_per_hr: f64,
    available_space_m2: f64,
) -> StructureDimensions {
    StructureDimensions {
        pit: size_pit(annual_runoff_liters),
        trench: size_trench(annual_runoff_liters, available_space_m2),
        storage: size_storage(annual_runoff_liters),
    }
}

fn size_pit(runoff_liters: f64) -> PitSizing {
    if runoff_liters <= SMALL_PIT_MAX_LITERS {
        PitSizing::Sized(RechargePit {
            length_m: 1.5,
            width_m: 1.5,
            depth_m: 2.5,
            volume_m3: 5.6,
            material_cost: CostRange::new(8_000, 15_000),
        })
    } else if runoff_liters <= LARGE_PIT_MAX_LITERS {
        PitSizing::Sized(RechargePit {
            length_m: 2.0,
            width_m: 2.0,
            depth_m: 3.0,
            volume_m3: 12.0,
            material_cost: CostRange::new(15_000, 25_000),
        })
    } else {
        tracing::warn!(runoff_liters, "runoff exceeds standard pit tiers; custom design needed");
        PitSizing::NeedsCustomDesign { runoff_liters }
    }
}

fn size_trench(runoff_liters: f64, available_space_m2: f64) -> Option<RechargeTrench> {
    if available_space_m2 <= TRENCH_MIN_SPACE_M2 || runoff_liters <= TRENCH_MIN_RUNOFF_LITERS {
        return None;
    }
    let length_m = (available_space_m2 * 0.3).min(runoff_liters / 5000.0);
    Some(RechargeTrench {
        length_m,
        width_m: 1.0,
        depth_m: 2.0,
        volume_m3: length_m * 2.0,
        material_cost: CostRange::new((length_m * 2000.0) as u64, (length_m * 3500.0) as u64),
    })
}

fn size_storage(runoff_liters: f64) -> StorageTank {
    let capacity = (runoff_liters * STORAGE_SHARE).min(STORAGE_MAX_LITERS);
    // 높이 ≈ 지름 비례를 가정한 원통 체적 역산
    let diameter = (capacity / 1000.0 / std::f64::consts::PI * 4.0 / 3.0).cbrt();
    StorageTank {
        capacity_liters: capacity as u64,
        diameter_m: (diameter * 10.0).round() / 10.0,
        material_cost: CostRange::new((capacity * 12.0) as u64, (capacity * 18.0) as u64),
    }
}
