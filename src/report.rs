//! 평가 결과를 사람이 읽는 텍스트 보고서로 만든다. 엔진은 형식에 관여하지 않는다.

use std::fmt::Write as _;

use crate::harvest::structures::group_thousands;
use crate::harvest::{FeasibilityResult, HouseholdInput, PitSizing};
use crate::i18n::{keys, Translator};
use crate::location::MatchedLocation;
use crate::units::{convert_volume, VolumeUnit};

const KEY_WIDTH: usize = 22;

/// 보고서 렌더링 옵션.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub volume_unit: VolumeUnit,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            volume_unit: VolumeUnit::Liter,
        }
    }
}

struct Writer<'a> {
    out: String,
    tr: &'a Translator,
}

impl Writer<'_> {
    fn section(&mut self, key: &str) {
        let title = self.tr.t(key);
        let _ = writeln!(self.out, "\n{title}");
        let _ = writeln!(self.out, "{}", "-".repeat(title.chars().count().max(8)));
    }

    fn row(&mut self, key: &str, value: impl std::fmt::Display) {
        let label = self.tr.t(key);
        let _ = writeln!(self.out, "{label:<width$} {value}", width = KEY_WIDTH);
    }

    fn bullet(&mut self, value: &str) {
        let _ = writeln!(self.out, "  - {value}");
    }
}

/// 1234.5 -> "1,235"
fn whole(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

fn volume(value_liters: f64, unit: VolumeUnit) -> String {
    let v = convert_volume(value_liters, VolumeUnit::Liter, unit);
    match unit {
        VolumeUnit::CubicMeter => format!("{v:.1} {}", unit.symbol()),
        _ => format!("{} {}", whole(v), unit.symbol()),
    }
}

/// 사용자 정보, 타당성 판정, 세부 계산 결과를 순서대로 적은 보고서를 만든다.
pub fn render_text(
    household: &HouseholdInput,
    matched: Option<&MatchedLocation>,
    result: &FeasibilityResult,
    tr: &Translator,
    options: ReportOptions,
) -> String {
    let unit = options.volume_unit;
    let mut w = Writer {
        out: String::new(),
        tr,
    };
    let _ = writeln!(w.out, "{}", tr.t(keys::REPORT_TITLE));
    let _ = writeln!(w.out, "{}", "=".repeat(tr.t(keys::REPORT_TITLE).chars().count()));

    w.section(keys::SECTION_USER);
    w.row(keys::LABEL_NAME, &household.name);
    if let Some(m) = matched {
        w.row(keys::LABEL_LOCATION, &m.record.region_name);
        if m.distance_km > 0.0 {
            w.row(keys::LABEL_DISTANCE, format!("{:.1} km", m.distance_km));
        }
    }
    w.row(keys::LABEL_ROOF_AREA, format!("{:.1} m²", household.rooftop_area_m2));
    w.row(keys::LABEL_OPEN_SPACE, format!("{:.1} m²", household.open_space_area_m2));
    w.row(
        keys::LABEL_HOUSEHOLD_SIZE,
        format!("{} {}", household.household_size, tr.t(keys::LABEL_PEOPLE)),
    );
    if let Some(p) = household.property_type.as_deref() {
        w.row(keys::LABEL_PROPERTY_TYPE, p);
    }

    w.section(keys::SECTION_FEASIBILITY);
    let per_year = tr.t(keys::LABEL_PER_YEAR);
    w.row(
        keys::LABEL_HARVEST_POTENTIAL,
        format!("{}{per_year}", volume(result.runoff.annual_liters, unit)),
    );
    w.row(keys::LABEL_PEAK_MONTH, volume(result.runoff.peak_monthly_liters, unit));
    w.row(keys::LABEL_DAILY_AVERAGE, volume(result.runoff.daily_average_liters, unit));
    w.row(
        keys::LABEL_DEMAND,
        format!("{}{per_year}", volume(result.annual_demand_liters, unit)),
    );
    w.row(
        keys::LABEL_STATUS,
        format!(
            "{} ({}%)",
            result.feasibility_status.label(),
            result.feasibility_percentage
        ),
    );

    w.section(keys::SECTION_SITE);
    let site = &result.site;
    w.row(keys::LABEL_RAINFALL, format!("{} mm", whole(site.rainfall_mm)));
    w.row(keys::LABEL_SOIL, &site.soil_type);
    w.row(keys::LABEL_GROUNDWATER, format!("{:.1} m", site.groundwater_depth_m));
    w.row(
        keys::LABEL_INFILTRATION,
        format!("{:.1} mm/hr", site.infiltration_rate_mm_per_hr),
    );
    w.row(keys::LABEL_WATER_QUALITY, &site.water_quality);

    w.section(keys::SECTION_SAFETY);
    let yes_no = if result.safety.is_safe {
        tr.t(keys::LABEL_YES)
    } else {
        tr.t(keys::LABEL_NO)
    };
    w.row(keys::LABEL_RECHARGE_SAFE, yes_no);
    if !result.safety.issues.is_empty() {
        w.row(keys::LABEL_ISSUES, "");
        for issue in &result.safety.issues {
            w.bullet(issue);
        }
        w.row(keys::LABEL_ALTERNATIVES, result.safety.alternatives.join(", "));
    }

    w.section(keys::SECTION_CATEGORY);
    let _ = writeln!(
        w.out,
        "[{}] {} - {}",
        result.category.number, result.category.name, result.category.description
    );
    w.row(keys::LABEL_RECOMMENDED, "");
    for s in result.category.recommended_structures {
        w.bullet(s);
    }

    w.section(keys::SECTION_STRUCTURES);
    match &result.structures.pit {
        PitSizing::Sized(pit) => w.row(
            keys::LABEL_PIT,
            format!(
                "{}×{}×{} m ({} m³), {}",
                pit.length_m, pit.width_m, pit.depth_m, pit.volume_m3, pit.material_cost
            ),
        ),
        PitSizing::NeedsCustomDesign { .. } => {
            let custom = tr.t(keys::LABEL_PIT_CUSTOM);
            w.row(keys::LABEL_PIT, custom)
        }
    }
    if let Some(trench) = &result.structures.trench {
        w.row(
            keys::LABEL_TRENCH,
            format!(
                "{:.1}×{}×{} m ({:.1} m³), {}",
                trench.length_m,
                trench.width_m,
                trench.depth_m,
                trench.volume_m3,
                trench.material_cost
            ),
        );
    }
    let storage = &result.structures.storage;
    w.row(
        keys::LABEL_STORAGE,
        format!(
            "{} L, Ø {} m, {}",
            group_thousands(storage.capacity_liters),
            storage.diameter_m,
            storage.material_cost
        ),
    );

    w.section(keys::SECTION_COST);
    let cost = &result.cost;
    w.row(
        keys::LABEL_CONSTRUCTION_COST,
        format!("₹{}", whole(cost.total_construction_cost)),
    );
    w.row(
        keys::LABEL_WATER_VALUE,
        format!("₹{}{per_year}", whole(cost.annual_water_value)),
    );
    w.row(
        keys::LABEL_NET_SAVINGS,
        format!("₹{}{per_year}", whole(cost.annual_net_savings)),
    );
    let payback = if cost.pays_back {
        format!("{:.1} {}", cost.payback_years, tr.t(keys::LABEL_YEARS))
    } else {
        tr.t(keys::LABEL_NO_PAYBACK).to_string()
    };
    w.row(keys::LABEL_PAYBACK, payback);
    w.row(keys::LABEL_ROI, format!("{:.1}%", cost.roi_percentage));

    w.section(keys::SECTION_PURIFICATION);
    for (i, step) in result.purification.treatment_sequence.iter().enumerate() {
        let _ = writeln!(w.out, "  {}. {step}", i + 1);
    }
    w.row(keys::LABEL_MAINTENANCE, result.purification.maintenance_schedule);
    w.row(keys::LABEL_TREATMENT_COST, result.purification.estimated_cost);
    w.row(keys::LABEL_EXPECTED_QUALITY, result.purification.expected_quality);

    w.out
}
