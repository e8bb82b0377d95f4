use serde::Serialize;

use crate::location::SoilType;

/// 구조물 카테고리 분류 입력.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    /// 지붕 면적 [m²]
    pub roof_area_m2: f64,
    /// 대지 내 가용 공지 [m²]
    pub open_space_m2: f64,
    /// 연간 강수량 [mm]
    pub rainfall_mm: f64,
    pub soil_type: SoilType,
    /// 지하수위 깊이 [m]
    pub groundwater_depth_m: f64,
    /// 침투율 [mm/hr]
    pub infiltration_rate_mm_per_hr: f64,
}

/// 여섯 단계 구조물 카테고리. 번호 순으로 우선순위가 정해져 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    StorageTankOnly = 1,
    StorageWithSmallPit = 2,
    PitTrenchWithStorage = 3,
    ShaftOrBorewell = 4,
    PondOrCommunity = 5,
    SupplementaryOnly = 6,
}

/// 카테고리 설명 정보.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    /// 1~6
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended_structures: &'static [&'static str],
    pub recharge_feasible: bool,
}

type Rule = (Category, fn(&CategoryInput) -> bool);

/// 위에서부터 평가해 처음 만족하는 규칙이 이긴다. 범위가 겹치는 구간은 순서로 해소된다.
const RULES: [Rule; 5] = [
    (Category::StorageTankOnly, storage_only),
    (Category::StorageWithSmallPit, small_pit),
    (Category::PitTrenchWithStorage, pit_trench),
    (Category::ShaftOrBorewell, shaft_borewell),
    (Category::PondOrCommunity, pond_community),
];

fn storage_only(i: &CategoryInput) -> bool {
    i.roof_area_m2 < 50.0
        || i.open_space_m2 < 10.0
        || i.rainfall_mm < 600.0
        || i.groundwater_depth_m < 3.0
        || i.infiltration_rate_mm_per_hr < 5.0
}

fn small_pit(i: &CategoryInput) -> bool {
    (50.0..=150.0).contains(&i.roof_area_m2)
        && (10.0..=25.0).contains(&i.open_space_m2)
        && (600.0..=1000.0).contains(&i.rainfall_mm)
        && (3.0..=8.0).contains(&i.groundwater_depth_m)
        && i.soil_type.is_permeable()
}

fn pit_trench(i: &CategoryInput) -> bool {
    (150.0..=400.0).contains(&i.roof_area_m2)
        && (25.0..=100.0).contains(&i.open_space_m2)
        && (1000.0..=1400.0).contains(&i.rainfall_mm)
        && (5.0..=15.0).contains(&i.groundwater_depth_m)
}

fn shaft_borewell(i: &CategoryInput) -> bool {
    (400.0..=1000.0).contains(&i.roof_area_m2)
        && i.open_space_m2 >= 50.0
        && i.rainfall_mm > 1000.0
        && i.groundwater_depth_m > 15.0
}

fn pond_community(i: &CategoryInput) -> bool {
    i.roof_area_m2 > 1000.0 && i.open_space_m2 > 200.0 && i.rainfall_mm > 800.0
}

/// 현장 조건을 여섯 카테고리 중 정확히 하나로 분류한다.
pub fn classify(input: &CategoryInput) -> CategoryInfo {
    let category = RULES
        .iter()
        .find(|(_, matches)| matches(input))
        .map(|(category, _)| *category)
        .unwrap_or(Category::SupplementaryOnly);
    category.info()
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::StorageTankOnly,
        Category::StorageWithSmallPit,
        Category::PitTrenchWithStorage,
        Category::ShaftOrBorewell,
        Category::PondOrCommunity,
        Category::SupplementaryOnly,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn info(self) -> CategoryInfo {
        let (name, description, recommended_structures, recharge_feasible): (
            &'static str,
            &'static str,
            &'static [&'static str],
            bool,
        ) = match self {
            Category::StorageTankOnly => (
                "Storage Tank Only",
                "Small urban homes, apartments with limited space/rainfall",
                &[
                    "Above-ground storage tank (1,000-5,000L)",
                    "First flush diverter",
                ],
                false,
            ),
            Category::StorageWithSmallPit => (
                "Storage + Small Recharge Pit",
                "Small/medium homes with limited yard space",
                &[
                    "Storage tank (3,000-8,000L)",
                    "Recharge pit (1×1×2m)",
                    "Sand-gravel-boulder filter",
                ],
                true,
            ),
            Category::PitTrenchWithStorage => (
                "Recharge Pit/Trench + Storage Tank",
                "Medium houses with good space and rainfall",
                &[
                    "Storage tank (5,000-15,000L)",
                    "Multiple recharge pits",
                    "Trench system (10-20m)",
                ],
                true,
            ),
            Category::ShaftOrBorewell => (
                "Recharge Shaft / Borewell Recharge",
                "Large homes, multi-story buildings",
                &[
                    "Storage tank (10,000-25,000L)",
                    "Recharge shaft (25-30m deep)",
                    "Injection well",
                ],
                true,
            ),
            Category::PondOrCommunity => (
                "Recharge Pond / Community Structures",
                "Institutions, farms, large plots, apartments",
                &[
                    "Large storage (25,000-100,000L)",
                    "Percolation pond (10×10×2-3m)",
                    "Check dams",
                ],
                true,
            ),
            Category::SupplementaryOnly => (
                "Supplementary Only",
                "Very small homes, low rainfall zones",
                &[
                    "Small tank (500-2,000L)",
                    "Community systems",
                    "Water efficiency focus",
                ],
                false,
            ),
        };
        CategoryInfo {
            category: self,
            number: self.number(),
            name,
            description,
            recommended_structures,
            recharge_feasible,
        }
    }
}
