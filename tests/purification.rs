use rainwater_feasibility::harvest::purification::{QUALITY_NON_POTABLE, QUALITY_POTABLE};
use rainwater_feasibility::harvest::{plan_purification, SiteConditions, SiteDefaults, UseClass};
use rainwater_feasibility::location::LocationRecord;

fn site() -> SiteConditions {
    SiteDefaults::default().resolve(&LocationRecord::ad_hoc("Test", 800.0))
}

#[test]
fn use_text_is_bucketed_by_whole_string() {
    assert_eq!(UseClass::classify("Drinking"), UseClass::Potable);
    assert_eq!(UseClass::classify("COOKING"), UseClass::Potable);
    assert_eq!(UseClass::classify("potable"), UseClass::Potable);
    assert_eq!(UseClass::classify("TOILET"), UseClass::NonPotable);
    assert_eq!(UseClass::classify("non-potable"), UseClass::NonPotable);
    assert_eq!(UseClass::classify("gardening"), UseClass::NonPotable);
    // 부분 일치는 general
    assert_eq!(UseClass::classify("drinking and gardening"), UseClass::General);
    assert_eq!(UseClass::classify(""), UseClass::General);
}

#[test]
fn potable_plan_adds_disinfection_steps() {
    let plan = plan_purification("cooking", Some("Concrete"), &site());
    assert_eq!(plan.treatment_sequence.len(), 6);
    assert!(plan.treatment_sequence[0].starts_with("Gutter mesh"));
    assert!(plan.treatment_sequence[1].starts_with("First-flush diverter"));
    assert!(plan.treatment_sequence[2].starts_with("Silt trap"));
    assert_eq!(plan.treatment_sequence[4], "UV disinfection or chlorination");
    assert_eq!(plan.expected_quality, QUALITY_POTABLE);
}

#[test]
fn non_potable_plan_is_basic() {
    let plan = plan_purification("gardening", None, &site());
    assert_eq!(plan.use_class, UseClass::NonPotable);
    assert_eq!(plan.treatment_sequence.len(), 5);
    assert_eq!(plan.maintenance_schedule, "Quarterly cleaning, annual media check");
    assert_eq!(plan.expected_quality, QUALITY_NON_POTABLE);
}

#[test]
fn general_quality_depends_on_drinking_mention() {
    let mixed = plan_purification("Drinking and gardening", None, &site());
    assert_eq!(mixed.use_class, UseClass::General);
    assert_eq!(mixed.treatment_sequence.len(), 4);
    assert_eq!(mixed.expected_quality, QUALITY_POTABLE);

    let general = plan_purification("general", None, &site());
    assert_eq!(general.expected_quality, QUALITY_NON_POTABLE);
    assert_eq!(general.estimated_cost, "₹8,000-18,000 for standard treatment");
}

#[test]
fn roof_type_does_not_change_plan() {
    let a = plan_purification("toilet", Some("Asbestos"), &site());
    let b = plan_purification("toilet", Some("Tiled"), &site());
    assert_eq!(a, b);
}

#[test]
fn padded_use_text_is_not_bucketed_as_potable() {
    assert_eq!(UseClass::classify(" cooking "), UseClass::General);
    let plan = plan_purification(" drinking ", None, &site());
    assert_eq!(plan.use_class, UseClass::General);
    assert_eq!(plan.treatment_sequence.len(), 4);
    assert_eq!(plan.maintenance_schedule, "Bi-monthly cleaning");
    // 품질 판정은 부분 문자열 검사
    assert_eq!(plan.expected_quality, QUALITY_POTABLE);
}
