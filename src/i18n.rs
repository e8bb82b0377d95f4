use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const ERROR_LOCATION_NOT_FOUND: &str = "error.location_not_found";
    pub const ERROR_DATA_UNAVAILABLE: &str = "error.data_unavailable";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const FORM_TITLE: &str = "form.title";
    pub const PROMPT_NAME: &str = "prompt.name";
    pub const PROMPT_LOCATION: &str = "prompt.location";
    pub const PROMPT_LATITUDE: &str = "prompt.latitude";
    pub const PROMPT_LONGITUDE: &str = "prompt.longitude";
    pub const PROMPT_HOUSEHOLD_SIZE: &str = "prompt.household_size";
    pub const PROMPT_ROOF_AREA: &str = "prompt.roof_area";
    pub const PROMPT_OPEN_SPACE: &str = "prompt.open_space";
    pub const PROMPT_ROOF_TYPE: &str = "prompt.roof_type";
    pub const PROMPT_PROPERTY_TYPE: &str = "prompt.property_type";
    pub const PROMPT_WATER_SOURCES: &str = "prompt.water_sources";
    pub const PROMPT_BUDGET: &str = "prompt.budget";
    pub const PROMPT_INTENDED_USE: &str = "prompt.intended_use";

    pub const REPORT_TITLE: &str = "report.title";
    pub const SECTION_USER: &str = "report.section_user";
    pub const SECTION_FEASIBILITY: &str = "report.section_feasibility";
    pub const SECTION_SITE: &str = "report.section_site";
    pub const SECTION_SAFETY: &str = "report.section_safety";
    pub const SECTION_CATEGORY: &str = "report.section_category";
    pub const SECTION_STRUCTURES: &str = "report.section_structures";
    pub const SECTION_COST: &str = "report.section_cost";
    pub const SECTION_PURIFICATION: &str = "report.section_purification";

    pub const LABEL_NAME: &str = "label.name";
    pub const LABEL_LOCATION: &str = "label.location";
    pub const LABEL_DISTANCE: &str = "label.distance";
    pub const LABEL_ROOF_AREA: &str = "label.roof_area";
    pub const LABEL_OPEN_SPACE: &str = "label.open_space";
    pub const LABEL_HOUSEHOLD_SIZE: &str = "label.household_size";
    pub const LABEL_PROPERTY_TYPE: &str = "label.property_type";
    pub const LABEL_HARVEST_POTENTIAL: &str = "label.harvest_potential";
    pub const LABEL_PEAK_MONTH: &str = "label.peak_month";
    pub const LABEL_DAILY_AVERAGE: &str = "label.daily_average";
    pub const LABEL_DEMAND: &str = "label.demand";
    pub const LABEL_STATUS: &str = "label.status";
    pub const LABEL_RAINFALL: &str = "label.rainfall";
    pub const LABEL_SOIL: &str = "label.soil";
    pub const LABEL_GROUNDWATER: &str = "label.groundwater";
    pub const LABEL_INFILTRATION: &str = "label.infiltration";
    pub const LABEL_WATER_QUALITY: &str = "label.water_quality";
    pub const LABEL_RECHARGE_SAFE: &str = "label.recharge_safe";
    pub const LABEL_ISSUES: &str = "label.issues";
    pub const LABEL_ALTERNATIVES: &str = "label.alternatives";
    pub const LABEL_RECOMMENDED: &str = "label.recommended";
    pub const LABEL_PIT: &str = "label.pit";
    pub const LABEL_PIT_CUSTOM: &str = "label.pit_custom";
    pub const LABEL_TRENCH: &str = "label.trench";
    pub const LABEL_STORAGE: &str = "label.storage";
    pub const LABEL_CONSTRUCTION_COST: &str = "label.construction_cost";
    pub const LABEL_WATER_VALUE: &str = "label.water_value";
    pub const LABEL_NET_SAVINGS: &str = "label.net_savings";
    pub const LABEL_PAYBACK: &str = "label.payback";
    pub const LABEL_NO_PAYBACK: &str = "label.no_payback";
    pub const LABEL_ROI: &str = "label.roi";
    pub const LABEL_MAINTENANCE: &str = "label.maintenance";
    pub const LABEL_TREATMENT_COST: &str = "label.treatment_cost";
    pub const LABEL_EXPECTED_QUALITY: &str = "label.expected_quality";
    pub const LABEL_YES: &str = "label.yes";
    pub const LABEL_NO: &str = "label.no";
    pub const LABEL_YEARS: &str = "label.years";
    pub const LABEL_PEOPLE: &str = "label.people";
    pub const LABEL_PER_YEAR: &str = "label.per_year";

    pub const LOCATIONS_HEADER: &str = "locations.header";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 한국어에 없으면 영어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!(path = %path.display(), "language pack ignored: not a string table");
    }
    map
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        ERROR_LOCATION_NOT_FOUND => "입력한 위치에 해당하는 지역 데이터를 찾을 수 없습니다.",
        ERROR_DATA_UNAVAILABLE => "서버 설정 오류: 지역 기준 데이터 파일을 읽을 수 없습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        FORM_TITLE => "\n=== 지붕 빗물 집수 타당성 평가 ===",
        PROMPT_NAME => "이름: ",
        PROMPT_LOCATION => "지역명 (좌표 입력 시 엔터): ",
        PROMPT_LATITUDE => "위도 (없으면 엔터): ",
        PROMPT_LONGITUDE => "경도: ",
        PROMPT_HOUSEHOLD_SIZE => "가구원 수: ",
        PROMPT_ROOF_AREA => "지붕 면적",
        PROMPT_OPEN_SPACE => "가용 공지 면적",
        PROMPT_ROOF_TYPE => "지붕 종류 (예: Concrete): ",
        PROMPT_PROPERTY_TYPE => "건물 유형: ",
        PROMPT_WATER_SOURCES => "기존 수원: ",
        PROMPT_BUDGET => "예산 선호: ",
        PROMPT_INTENDED_USE => "용도 (drinking/gardening/general): ",
        REPORT_TITLE => "지붕 빗물 집수 보고서",
        SECTION_USER => "사용자 정보",
        SECTION_FEASIBILITY => "타당성 평가",
        SECTION_SITE => "현장 조건",
        SECTION_SAFETY => "인공 함양 안전성",
        SECTION_CATEGORY => "구조물 카테고리",
        SECTION_STRUCTURES => "구조물 치수",
        SECTION_COST => "비용 및 회수기간",
        SECTION_PURIFICATION => "정수 처리",
        LABEL_NAME => "이름",
        LABEL_LOCATION => "지역",
        LABEL_DISTANCE => "거리",
        LABEL_ROOF_AREA => "지붕 면적",
        LABEL_OPEN_SPACE => "공지 면적",
        LABEL_HOUSEHOLD_SIZE => "가구원 수",
        LABEL_PROPERTY_TYPE => "건물 유형",
        LABEL_HARVEST_POTENTIAL => "집수 가능량",
        LABEL_PEAK_MONTH => "최다우월",
        LABEL_DAILY_AVERAGE => "일평균",
        LABEL_DEMAND => "가구 수요",
        LABEL_STATUS => "판정",
        LABEL_RAINFALL => "연강수량",
        LABEL_SOIL => "토양",
        LABEL_GROUNDWATER => "지하수위",
        LABEL_INFILTRATION => "침투율",
        LABEL_WATER_QUALITY => "수질",
        LABEL_RECHARGE_SAFE => "함양 가능",
        LABEL_ISSUES => "문제",
        LABEL_ALTERNATIVES => "대안",
        LABEL_RECOMMENDED => "추천 구조물",
        LABEL_PIT => "함양정",
        LABEL_PIT_CUSTOM => "정형 치수 없음 (별도 설계 필요)",
        LABEL_TRENCH => "트렌치",
        LABEL_STORAGE => "저류조",
        LABEL_CONSTRUCTION_COST => "공사비",
        LABEL_WATER_VALUE => "연간 수도요금 절감",
        LABEL_NET_SAVINGS => "연간 순절감",
        LABEL_PAYBACK => "회수기간",
        LABEL_NO_PAYBACK => "회수 불가",
        LABEL_ROI => "ROI",
        LABEL_MAINTENANCE => "유지관리",
        LABEL_TREATMENT_COST => "처리 비용",
        LABEL_EXPECTED_QUALITY => "예상 수질",
        LABEL_YES => "예",
        LABEL_NO => "아니오",
        LABEL_YEARS => "년",
        LABEL_PEOPLE => "명",
        LABEL_PER_YEAR => "/년",
        LOCATIONS_HEADER => "지역 | 위도 | 경도 | 강수량[mm] | 토양 | 지하수위[m]",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        ERROR_LOCATION_NOT_FOUND => "Could not find data for your location.",
        ERROR_DATA_UNAVAILABLE => {
            "Server configuration error: The location data file could not be found."
        }
        ERROR_INVALID_NUMBER => "Please enter a number.",
        FORM_TITLE => "\n=== Rooftop Rainwater Harvesting Feasibility ===",
        PROMPT_NAME => "Name: ",
        PROMPT_LOCATION => "Location name (enter to use coordinates): ",
        PROMPT_LATITUDE => "Latitude (enter to skip): ",
        PROMPT_LONGITUDE => "Longitude: ",
        PROMPT_HOUSEHOLD_SIZE => "Household size: ",
        PROMPT_ROOF_AREA => "Rooftop area",
        PROMPT_OPEN_SPACE => "Open space area",
        PROMPT_ROOF_TYPE => "Roof type (e.g. Concrete): ",
        PROMPT_PROPERTY_TYPE => "Property type: ",
        PROMPT_WATER_SOURCES => "Existing water sources: ",
        PROMPT_BUDGET => "Budget preference: ",
        PROMPT_INTENDED_USE => "Intended use (drinking/gardening/general): ",
        REPORT_TITLE => "Rooftop Rainwater Harvesting Report",
        SECTION_USER => "User Details",
        SECTION_FEASIBILITY => "Feasibility Assessment",
        SECTION_SITE => "Site Conditions",
        SECTION_SAFETY => "Artificial Recharge Safety",
        SECTION_CATEGORY => "Structure Category",
        SECTION_STRUCTURES => "Structure Dimensions",
        SECTION_COST => "Cost & Payback",
        SECTION_PURIFICATION => "Purification",
        LABEL_NAME => "Name",
        LABEL_LOCATION => "Location",
        LABEL_DISTANCE => "Distance",
        LABEL_ROOF_AREA => "Rooftop Area",
        LABEL_OPEN_SPACE => "Open Space Area",
        LABEL_HOUSEHOLD_SIZE => "Household Size",
        LABEL_PROPERTY_TYPE => "Property Type",
        LABEL_HARVEST_POTENTIAL => "Harvest Potential",
        LABEL_PEAK_MONTH => "Peak Month",
        LABEL_DAILY_AVERAGE => "Daily Average",
        LABEL_DEMAND => "Household Demand",
        LABEL_STATUS => "Feasibility Status",
        LABEL_RAINFALL => "Annual Rainfall",
        LABEL_SOIL => "Soil Type",
        LABEL_GROUNDWATER => "Groundwater Depth",
        LABEL_INFILTRATION => "Infiltration Rate",
        LABEL_WATER_QUALITY => "Water Quality",
        LABEL_RECHARGE_SAFE => "Recharge Safe",
        LABEL_ISSUES => "Issues",
        LABEL_ALTERNATIVES => "Alternatives",
        LABEL_RECOMMENDED => "Recommended",
        LABEL_PIT => "Recharge Pit",
        LABEL_PIT_CUSTOM => "no standard size (needs custom design)",
        LABEL_TRENCH => "Recharge Trench",
        LABEL_STORAGE => "Storage Tank",
        LABEL_CONSTRUCTION_COST => "Construction Cost",
        LABEL_WATER_VALUE => "Annual Water Value",
        LABEL_NET_SAVINGS => "Annual Net Savings",
        LABEL_PAYBACK => "Payback",
        LABEL_NO_PAYBACK => "no payback",
        LABEL_ROI => "ROI",
        LABEL_MAINTENANCE => "Maintenance",
        LABEL_TREATMENT_COST => "Treatment Cost",
        LABEL_EXPECTED_QUALITY => "Expected Quality",
        LABEL_YES => "yes",
        LABEL_NO => "no",
        LABEL_YEARS => "years",
        LABEL_PEOPLE => "people",
        LABEL_PER_YEAR => "/year",
        LOCATIONS_HEADER => "Region | Lat | Lon | Rainfall[mm] | Soil | Groundwater[m]",
        _ => "[missing translation]",
    }
}
