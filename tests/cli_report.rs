//! CLI 인자 해석, 대화형 입력, 보고서 출력, 세션 오류 코드.
use std::io::Cursor;

use clap::Parser;
use rainwater_feasibility::app::{self, Session};
use rainwater_feasibility::cli::{Cli, Command};
use rainwater_feasibility::config::Config;
use rainwater_feasibility::harvest::{quick_assess, EngineSettings, HouseholdInput, QuickRequest};
use rainwater_feasibility::i18n::Translator;
use rainwater_feasibility::report::{render_text, ReportOptions};
use rainwater_feasibility::ui_cli::read_household;
use rainwater_feasibility::units::{AreaUnit, VolumeUnit};

fn session_for(args: &[&str]) -> (Cli, Session) {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let session = Session::new(&cli, Config::default(), Translator::new("en"));
    (cli, session)
}

fn household_from(cli: &Cli) -> HouseholdInput {
    match &cli.command {
        Some(Command::Assess(args)) => args.to_household(AreaUnit::SquareMeter),
        other => panic!("expected assess, got {other:?}"),
    }
}

#[test]
fn assess_requires_location_or_both_coordinates() {
    let base = ["rwh_feasibility", "assess", "--household-size", "4", "--roof-area", "100"];
    assert!(Cli::try_parse_from(base).is_err());

    let mut lat_only = base.to_vec();
    lat_only.extend(["--lat", "28.6"]);
    assert!(Cli::try_parse_from(lat_only).is_err());

    let mut coords = base.to_vec();
    coords.extend(["--lat", "-22.9", "--lon", "-43.2"]);
    let cli = Cli::try_parse_from(coords).expect("coordinates are enough");
    let hh = household_from(&cli);
    assert_eq!(hh.location.latitude, Some(-22.9));
    assert_eq!(hh.location.longitude, Some(-43.2));
    assert_eq!(hh.location.name, None);
}

#[test]
fn assess_converts_square_feet() {
    let cli = Cli::try_parse_from([
        "rwh_feasibility",
        "assess",
        "--location",
        "Pune",
        "--household-size",
        "3",
        "--roof-area",
        "1000",
    ])
    .expect("valid arguments");
    let Some(Command::Assess(args)) = &cli.command else {
        panic!("expected assess");
    };
    let hh = args.to_household(AreaUnit::SquareFoot);
    assert!((hh.rooftop_area_m2 - 92.903).abs() < 1e-9);
    assert_eq!(hh.open_space_area_m2, 0.0);
}

#[test]
fn interactive_form_reads_coordinates_when_name_is_blank() {
    let mut input = Cursor::new("Asha\n\n28.6\n77.2\nfour\n4\n100\n50\nConcrete\n\n\n\ndrinking\n");
    let mut out = Vec::new();
    let tr = Translator::new("en");
    let hh = read_household(&mut input, &mut out, &tr, AreaUnit::SquareMeter).expect("form");

    assert_eq!(hh.name, "Asha");
    assert_eq!(hh.location.name, None);
    assert_eq!(hh.location.latitude, Some(28.6));
    assert_eq!(hh.location.longitude, Some(77.2));
    assert_eq!(hh.household_size, 4);
    assert_eq!(hh.rooftop_area_m2, 100.0);
    assert_eq!(hh.open_space_area_m2, 50.0);
    assert_eq!(hh.roof_type.as_deref(), Some("Concrete"));
    assert_eq!(hh.property_type, None);
    assert_eq!(hh.intended_use.as_deref(), Some("drinking"));

    let prompts = String::from_utf8(out).expect("utf8");
    assert!(prompts.contains("Please enter a number."));
    assert!(prompts.contains("Rooftop area [m²]: "));
}

#[test]
fn interactive_form_tolerates_early_end_of_input() {
    let mut input = Cursor::new("Ravi\nDelhi\n");
    let mut out = Vec::new();
    let tr = Translator::new("ko");
    let hh = read_household(&mut input, &mut out, &tr, AreaUnit::SquareMeter).expect("form");
    assert_eq!(hh.location.name.as_deref(), Some("Delhi"));
    assert_eq!(hh.household_size, 0);
    assert_eq!(hh.rooftop_area_m2, 0.0);
    assert_eq!(hh.intended_use, None);
}

#[test]
fn text_report_lists_sections_in_order() {
    let (cli, session) = session_for(&[
        "rwh_feasibility",
        "assess",
        "--location",
        "Delhi",
        "--name",
        "Asha",
        "--household-size",
        "4",
        "--roof-area",
        "100",
        "--open-space",
        "50",
    ]);
    let text = session
        .assess_household(&household_from(&cli))
        .expect("report");

    let order = [
        "Rooftop Rainwater Harvesting Report",
        "User Details",
        "Feasibility Assessment",
        "Site Conditions",
        "Artificial Recharge Safety",
        "Structure Category",
        "Structure Dimensions",
        "Cost & Payback",
        "Purification",
    ];
    let mut last = 0;
    for heading in order {
        let pos = text[last..]
            .find(heading)
            .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
        last += pos + heading.len();
    }
    assert!(text.contains("Asha"));
    assert!(text.contains("Delhi"));
    assert!(text.contains("Limited Feasible (32.1%)"));
}

#[test]
fn json_output_wraps_location_household_and_analysis() {
    let (cli, session) = session_for(&[
        "rwh_feasibility",
        "--format",
        "json",
        "assess",
        "--lat",
        "28.6",
        "--lon",
        "77.2",
        "--household-size",
        "4",
        "--roof-area",
        "100",
        "--open-space",
        "50",
    ]);
    let json = session
        .assess_household(&household_from(&cli))
        .expect("json");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(v["location"]["record"]["Region_Name"], "Delhi");
    assert!(v["location"]["distance_km"].as_f64().expect("distance") > 0.0);
    assert_eq!(v["household"]["household_size"], 4);
    assert_eq!(v["analysis"]["feasibility_status"], "LimitedFeasible");
    assert_eq!(v["analysis"]["category"]["number"], 6);
}

#[test]
fn unknown_location_exits_with_not_found_code() {
    let (cli, session) = session_for(&[
        "rwh_feasibility",
        "assess",
        "--location",
        "Atlantis",
        "--household-size",
        "4",
        "--roof-area",
        "100",
    ]);
    let err = session
        .assess_household(&household_from(&cli))
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        err.user_message(&session.tr),
        "Could not find data for your location."
    );
}

#[test]
fn missing_reference_file_exits_with_unavailable_code() {
    let (cli, session) = session_for(&[
        "rwh_feasibility",
        "--data",
        "/nonexistent/locations.toml",
        "assess",
        "--location",
        "Delhi",
        "--household-size",
        "4",
        "--roof-area",
        "100",
    ]);
    let err = session
        .assess_household(&household_from(&cli))
        .unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.user_message(&session.tr).contains("location data file"));

    let (cli, session) = session_for(&[
        "rwh_feasibility",
        "--data",
        "/nonexistent/locations.toml",
        "locations",
    ]);
    let err = app::run(&cli, &session).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn reference_file_from_cli_replaces_builtin_table() {
    let data = format!("{}/data/locations.toml", env!("CARGO_MANIFEST_DIR"));
    let (cli, session) = session_for(&[
        "rwh_feasibility",
        "--data",
        data.as_str(),
        "assess",
        "--location",
        "Mumbai",
        "--household-size",
        "4",
        "--roof-area",
        "100",
    ]);
    assert!(session.matcher.is_available());
    let err = session
        .assess_household(&household_from(&cli))
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn report_marks_missing_payback_and_custom_pit() {
    let tr = Translator::new("en");

    let tiny = QuickRequest {
        roof_area_m2: Some(10.0),
        ..QuickRequest::default()
    };
    let r = quick_assess(&tiny, &EngineSettings::default());
    let text = render_text(&tiny.household(), None, &r, &tr, ReportOptions::default());
    assert!(text.contains("no payback"));

    let big = QuickRequest {
        rainfall_mm: Some(1_200.0),
        roof_area_m2: Some(300.0),
        open_space_m2: Some(80.0),
        ..QuickRequest::default()
    };
    let r = quick_assess(&big, &EngineSettings::default());
    let text = render_text(&big.household(), None, &r, &tr, ReportOptions::default());
    assert!(text.contains("needs custom design"));
    assert!(text.contains("Recharge Trench"));
}

#[test]
fn report_honors_volume_unit_and_language() {
    let req = QuickRequest::default();
    let r = quick_assess(&req, &EngineSettings::default());
    let options = ReportOptions {
        volume_unit: VolumeUnit::CubicMeter,
    };
    let text = render_text(&req.household(), None, &r, &Translator::new("ko"), options);
    assert!(text.starts_with("지붕 빗물 집수 보고서"));
    assert!(text.contains("64.0 m³/년"));
}

#[test]
fn interactive_household_size_must_be_whole_number() {
    let mut input = Cursor::new("Asha\nDelhi\n2.7\n-3\n5\n80\n\n");
    let mut out = Vec::new();
    let tr = Translator::new("en");
    let hh = read_household(&mut input, &mut out, &tr, AreaUnit::SquareMeter).expect("form");
    assert_eq!(hh.household_size, 5);
    assert_eq!(hh.rooftop_area_m2, 80.0);

    let prompts = String::from_utf8(out).expect("utf8");
    assert_eq!(prompts.matches("Please enter a number.").count(), 2);
}

#[test]
fn json_marks_missing_payback_explicitly() {
    let args = |roof: &'static str| {
        [
            "rwh_feasibility",
            "--format",
            "json",
            "assess",
            "--location",
            "Delhi",
            "--household-size",
            "4",
            "--roof-area",
            roof,
            "--open-space",
            "50",
        ]
    };

    // 6320 L -> 연간 가치가 유지비보다 작다
    let (cli, session) = session_for(&args("10"));
    let json = session
        .assess_household(&household_from(&cli))
        .expect("json");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(v["analysis"]["cost"]["pays_back"], false);
    assert!(v["analysis"]["cost"]["payback_years"].is_null());

    let (cli, session) = session_for(&args("100"));
    let json = session
        .assess_household(&household_from(&cli))
        .expect("json");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(v["analysis"]["cost"]["pays_back"], true);
    assert!(v["analysis"]["cost"]["payback_years"].as_f64().expect("years") > 0.0);
}
