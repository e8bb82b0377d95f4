use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::harvest::{HouseholdInput, QuickRequest};
use crate::location::LocationQuery;
use crate::units::{convert_area, AreaUnit, VolumeUnit};

/// 지붕 빗물 집수 타당성 평가 도구.
#[derive(Debug, Parser)]
#[command(name = "rwh_feasibility", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 지역 기준 데이터(TOML) 경로. 설정 값보다 우선한다.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
    /// auto / ko / en
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// 입력 면적 단위 (설정 값보다 우선)
    #[arg(long, global = true, value_enum)]
    pub area_unit: Option<AreaUnit>,
    /// 결과 물량 표시 단위 (설정 값보다 우선)
    #[arg(long, global = true, value_enum)]
    pub volume_unit: Option<VolumeUnit>,
    /// debug 로그 출력
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 기준 테이블의 지역으로 가구 타당성을 평가한다
    Assess(AssessArgs),
    /// 기준 테이블 없이 현장 값을 직접 넣어 평가한다
    Quick(QuickArgs),
    /// 기준 테이블의 지역 목록을 출력한다
    Locations,
    /// 질문에 답하며 입력한다 (기본)
    Interactive,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// 지역명 (좌표가 없을 때 사용)
    #[arg(long, required_unless_present_all = ["lat", "lon"])]
    pub location: Option<String>,
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long)]
    pub household_size: u32,
    #[arg(long)]
    pub roof_area: f64,
    #[arg(long, default_value_t = 0.0)]
    pub open_space: f64,
    #[arg(long)]
    pub roof_type: Option<String>,
    #[arg(long)]
    pub property_type: Option<String>,
    #[arg(long)]
    pub water_sources: Option<String>,
    #[arg(long)]
    pub budget: Option<String>,
    #[arg(long)]
    pub intended_use: Option<String>,
}

impl AssessArgs {
    /// 면적을 m²로 환산해 가구 입력을 만든다.
    pub fn to_household(&self, area_unit: AreaUnit) -> HouseholdInput {
        let location = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => LocationQuery {
                name: self.location.clone(),
                latitude: Some(lat),
                longitude: Some(lon),
            },
            _ => LocationQuery {
                name: self.location.clone(),
                ..LocationQuery::default()
            },
        };
        HouseholdInput {
            name: self.name.clone(),
            location,
            household_size: self.household_size,
            rooftop_area_m2: convert_area(self.roof_area, area_unit, AreaUnit::SquareMeter),
            open_space_area_m2: convert_area(self.open_space, area_unit, AreaUnit::SquareMeter),
            roof_type: self.roof_type.clone(),
            property_type: self.property_type.clone(),
            existing_water_sources: self.water_sources.clone(),
            budget_preference: self.budget.clone(),
            intended_use: self.intended_use.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct QuickArgs {
    #[arg(long)]
    pub rainfall: Option<f64>,
    #[arg(long)]
    pub gw_depth: Option<f64>,
    #[arg(long)]
    pub soil_type: Option<String>,
    #[arg(long)]
    pub infiltration: Option<f64>,
    #[arg(long)]
    pub water_quality: Option<String>,
    #[arg(long)]
    pub roof_area: Option<f64>,
    #[arg(long)]
    pub open_space: Option<f64>,
    #[arg(long)]
    pub household_size: Option<u32>,
    #[arg(long)]
    pub roof_type: Option<String>,
    #[arg(long)]
    pub intended_use: Option<String>,
}

impl QuickArgs {
    pub fn to_request(&self, area_unit: AreaUnit) -> QuickRequest {
        let to_m2 = |v: f64| convert_area(v, area_unit, AreaUnit::SquareMeter);
        QuickRequest {
            rainfall_mm: self.rainfall,
            groundwater_depth_m: self.gw_depth,
            soil_type: self.soil_type.clone(),
            infiltration_rate_mm_per_hr: self.infiltration,
            water_quality: self.water_quality.clone(),
            roof_area_m2: self.roof_area.map(to_m2),
            open_space_m2: self.open_space.map(to_m2),
            household_size: self.household_size,
            roof_type: self.roof_type.clone(),
            intended_use: self.intended_use.clone(),
        }
    }
}
