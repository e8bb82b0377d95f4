//! 유출량 계산과 인공 함양 안전성 검사.
use approx::assert_relative_eq;
use rainwater_feasibility::harvest::recharge_safety::{
    ISSUE_LOW_INFILTRATION, ISSUE_POOR_QUALITY, ISSUE_REGULATORY, ISSUE_SHALLOW_GROUNDWATER,
};
use rainwater_feasibility::harvest::{estimate_runoff, validate_recharge, SiteConditions};
use rainwater_feasibility::location::{SoilType, WaterQuality};

fn site() -> SiteConditions {
    SiteConditions {
        rainfall_mm: 800.0,
        runoff_coefficient: 0.8,
        soil_type: SoilType::Loamy,
        groundwater_depth_m: 10.0,
        infiltration_rate_mm_per_hr: 15.0,
        water_quality: WaterQuality::Good,
        remarks: String::new(),
    }
}

#[test]
fn runoff_is_area_times_rainfall_times_coefficient() {
    let r = estimate_runoff(100.0, 800.0, 0.8);
    assert_eq!(r.annual_liters, 100.0 * 800.0 * 0.8);
    assert_relative_eq!(r.peak_monthly_liters, 25_600.0, epsilon = 1e-9);
    assert_relative_eq!(r.daily_average_liters * 365.0, r.annual_liters, epsilon = 1e-6);
}

#[test]
fn runoff_over_a_grid_keeps_daily_average_consistent() {
    for area in [0.0, 12.5, 100.0, 1500.0] {
        for rain in [0.0, 550.0, 1234.5] {
            for coeff in [0.0, 0.35, 1.0] {
                let r = estimate_runoff(area, rain, coeff);
                assert_eq!(r.annual_liters, area * rain * coeff);
                assert_relative_eq!(
                    r.daily_average_liters * 365.0,
                    r.annual_liters,
                    max_relative = 1e-12
                );
            }
        }
    }
}

#[test]
fn good_site_is_safe_without_alternatives() {
    let v = validate_recharge(&site());
    assert!(v.is_safe);
    assert!(v.issues.is_empty());
    assert!(v.alternatives.is_empty());
}

#[test]
fn shallow_groundwater_is_unsafe_regardless_of_other_factors() {
    let s = SiteConditions {
        groundwater_depth_m: 2.0,
        ..site()
    };
    let v = validate_recharge(&s);
    assert!(!v.is_safe);
    assert_eq!(v.issues, vec![ISSUE_SHALLOW_GROUNDWATER.to_string()]);
    assert_eq!(
        v.alternatives,
        vec!["Storage tank only", "Community structures", "Water conservation"]
    );
}

#[test]
fn all_checks_run_in_fixed_order() {
    let s = SiteConditions {
        groundwater_depth_m: 1.0,
        water_quality: WaterQuality::Contaminated,
        infiltration_rate_mm_per_hr: 2.0,
        remarks: "Block notified as OVEREXPLOITED by CGWB".into(),
        ..site()
    };
    let v = validate_recharge(&s);
    assert_eq!(
        v.issues,
        vec![
            ISSUE_SHALLOW_GROUNDWATER,
            ISSUE_POOR_QUALITY,
            ISSUE_LOW_INFILTRATION,
            ISSUE_REGULATORY
        ]
    );
}

#[test]
fn thresholds_are_exclusive() {
    let s = SiteConditions {
        groundwater_depth_m: 3.0,
        infiltration_rate_mm_per_hr: 5.0,
        water_quality: WaterQuality::Moderate,
        ..site()
    };
    assert!(validate_recharge(&s).is_safe);
}

#[test]
fn prohibited_remark_is_case_insensitive() {
    let s = SiteConditions {
        remarks: "Recharge Prohibited near landfill".into(),
        ..site()
    };
    let v = validate_recharge(&s);
    assert_eq!(v.issues, vec![ISSUE_REGULATORY]);
}

#[test]
fn safe_flag_matches_empty_issue_list() {
    for depth in [0.5, 3.0, 20.0] {
        for quality in [WaterQuality::Good, WaterQuality::Poor] {
            for infiltration in [1.0, 5.0, 30.0] {
                for remarks in ["", "prohibited"] {
                    let s = SiteConditions {
                        groundwater_depth_m: depth,
                        water_quality: quality.clone(),
                        infiltration_rate_mm_per_hr: infiltration,
                        remarks: remarks.to_string(),
                        ..site()
                    };
                    let v = validate_recharge(&s);
                    assert_eq!(v.is_safe, v.issues.is_empty());
                    assert_eq!(v.is_safe, v.alternatives.is_empty());
                }
            }
        }
    }
}
