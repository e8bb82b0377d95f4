use serde::Serialize;

use super::site::SiteConditions;

const BASE_SEQUENCE: [&str; 3] = [
    "Gutter mesh/screen - Remove leaves, twigs, debris",
    "First-flush diverter - Discard initial dirty runoff (5-10 min)",
    "Silt trap chamber - Allow heavy particles to settle",
];

pub const QUALITY_POTABLE: &str = "Potable";
pub const QUALITY_NON_POTABLE: &str = "Non-potable suitable";

/// 용도 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UseClass {
    /// drinking, potable, cooking
    Potable,
    /// gardening, toilet, non-potable
    NonPotable,
    General,
}

impl UseClass {
    /// 대소문자만 무시하고 용도 문자열 전체가 일치하는지로 분류한다. 앞뒤 공백이 있으면 general이다.
    pub fn classify(intended_use: &str) -> Self {
        match intended_use.to_lowercase().as_str() {
            "drinking" | "potable" | "cooking" => UseClass::Potable,
            "gardening" | "toilet" | "non-potable" => UseClass::NonPotable,
            _ => UseClass::General,
        }
    }
}

/// 정수 처리 계획.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurificationPlan {
    pub use_class: UseClass,
    pub treatment_sequence: Vec<String>,
    pub maintenance_schedule: &'static str,
    pub estimated_cost: &'static str,
    pub expected_quality: &'static str,
}

/// 용도에 맞는 처리 순서와 유지관리 주기를 제시한다.
///
/// 지붕 재질과 현장 조건은 현재 처리 순서에 영향을 주지 않는다.
pub fn plan_purification(
    intended_use: &str,
    _roof_type: Option<&str>,
    _site: &SiteConditions,
) -> PurificationPlan {
    let use_class = UseClass::classify(intended_use);
    let mut sequence: Vec<String> = BASE_SEQUENCE.iter().map(|s| s.to_string()).collect();

    let (extra, maintenance_schedule, estimated_cost, expected_quality): (
        &[&str],
        &'static str,
        &'static str,
        &'static str,
    ) = match use_class {
        UseClass::Potable => (
            &[
                "Multi-layer filter - Sand, gravel, activated charcoal",
                "UV disinfection or chlorination",
                "Optional: RO system for drinking water",
            ],
            "Monthly filter cleaning, quarterly media replacement",
            "₹15,000-30,000 for complete treatment",
            QUALITY_POTABLE,
        ),
        UseClass::NonPotable => (
            &["Simple sand-gravel filter", "Mesh filter for final screening"],
            "Quarterly cleaning, annual media check",
            "₹5,000-12,000 for basic treatment",
            QUALITY_NON_POTABLE,
        ),
        UseClass::General => (
            &["Sand-gravel-charcoal filter"],
            "Bi-monthly cleaning",
            "₹8,000-18,000 for standard treatment",
            // "drinking and gardening"처럼 섞인 용도
            if intended_use.to_lowercase().contains("drinking") {
                QUALITY_POTABLE
            } else {
                QUALITY_NON_POTABLE
            },
        ),
    };
    sequence.extend(extra.iter().map(|s| s.to_string()));

    PurificationPlan {
        use_class,
        treatment_sequence: sequence,
        maintenance_schedule,
        estimated_cost,
        expected_quality,
    }
}
