use serde::Serialize;

use super::site::SiteConditions;

/// 이보다 얕은 지하수위에서는 침수/오염 위험이 있다 [m]
pub const MIN_GROUNDWATER_DEPTH_M: f64 = 3.0;
/// 이보다 낮은 침투율에서는 물이 정체된다 [mm/hr]
pub const MIN_INFILTRATION_MM_PER_HR: f64 = 5.0;

pub const ISSUE_SHALLOW_GROUNDWATER: &str =
    "Shallow groundwater (<3m) - Risk of waterlogging and contamination";
pub const ISSUE_POOR_QUALITY: &str = "Poor groundwater quality - Recharge may worsen contamination";
pub const ISSUE_LOW_INFILTRATION: &str = "Low soil infiltration (<5mm/hr) - Water will stagnate";
pub const ISSUE_REGULATORY: &str = "Regulatory restrictions - Check CGWA guidelines";

const RESTRICTED_KEYWORDS: [&str; 2] = ["overexploited", "prohibited"];

const ALTERNATIVES: [&str; 3] = [
    "Storage tank only",
    "Community structures",
    "Water conservation",
];

/// 인공 함양 안전성 판정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyVerdict {
    pub is_safe: bool,
    /// 검사 순서대로 쌓인 문제 목록
    pub issues: Vec<String>,
    /// 안전하지 않을 때만 채워진다
    pub alternatives: Vec<String>,
}

/// 지하수위, 수질, 침투율, 규제 비고를 모두 검사해 인공 함양 가능 여부를 판정한다.
///
/// 네 검사는 단락 없이 모두 수행되므로 문제가 여러 개 보고될 수 있다.
pub fn validate_recharge(site: &SiteConditions) -> SafetyVerdict {
    let mut issues = Vec::new();

    if site.groundwater_depth_m < MIN_GROUNDWATER_DEPTH_M {
        issues.push(ISSUE_SHALLOW_GROUNDWATER.to_string());
    }
    if site.water_quality.is_degraded() {
        issues.push(ISSUE_POOR_QUALITY.to_string());
    }
    if site.infiltration_rate_mm_per_hr < MIN_INFILTRATION_MM_PER_HR {
        issues.push(ISSUE_LOW_INFILTRATION.to_string());
    }
    let remarks = site.remarks.to_lowercase();
    if RESTRICTED_KEYWORDS.iter().any(|k| remarks.contains(k)) {
        issues.push(ISSUE_REGULATORY.to_string());
    }

    let is_safe = issues.is_empty();
    let alternatives = if is_safe {
        Vec::new()
    } else {
        ALTERNATIVES.iter().map(|s| s.to_string()).collect()
    };
    SafetyVerdict {
        is_safe,
        issues,
        alternatives,
    }
}
