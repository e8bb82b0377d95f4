use std::path::PathBuf;

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::{Config, ConfigError};
use crate::harvest::{assess_with, quick_assess, HouseholdInput};
use crate::i18n::{keys, Translator};
use crate::location::{GeoMatcher, LocationError, LocationTable, MatchedLocation};
use crate::report::{self, ReportOptions};
use crate::ui_cli;
use crate::units::{AreaUnit, VolumeUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/표준입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 지역 조회 오류
    #[error(transparent)]
    Location(#[from] LocationError),
    /// JSON 직렬화 오류
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 프로세스 종료 코드. 위치 미발견과 기준 데이터 부재를 구분한다.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Location(LocationError::LocationNotFound(_)) => 2,
            AppError::Location(LocationError::ReferenceDataUnavailable { .. }) => 3,
            _ => 1,
        }
    }

    /// 사용자에게 보여줄 현지화된 메시지.
    pub fn user_message(&self, tr: &Translator) -> String {
        match self {
            AppError::Location(LocationError::LocationNotFound(_)) => {
                tr.t(keys::ERROR_LOCATION_NOT_FOUND).to_string()
            }
            AppError::Location(LocationError::ReferenceDataUnavailable { .. }) => {
                tr.t(keys::ERROR_DATA_UNAVAILABLE).to_string()
            }
            other => other.to_string(),
        }
    }
}

/// 한 번의 실행 동안 공유하는 읽기 전용 상태.
pub struct Session {
    pub config: Config,
    pub tr: Translator,
    pub matcher: GeoMatcher,
    pub format: OutputFormat,
    pub area_unit: AreaUnit,
    pub volume_unit: VolumeUnit,
}

impl Session {
    pub fn new(cli: &Cli, config: Config, tr: Translator) -> Self {
        let data_path: Option<PathBuf> = cli.data.clone().or_else(|| config.reference_data.clone());
        let matcher = match data_path {
            Some(path) => GeoMatcher::load_or_unavailable(path),
            None => GeoMatcher::new(LocationTable::built_in()),
        };
        Self {
            area_unit: cli.area_unit.unwrap_or(config.area_unit),
            volume_unit: cli.volume_unit.unwrap_or(config.volume_unit),
            format: cli.format,
            config,
            tr,
            matcher,
        }
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            volume_unit: self.volume_unit,
        }
    }

    /// 가구 입력의 위치를 찾아 평가하고 결과를 출력 문자열로 만든다.
    pub fn assess_household(&self, household: &HouseholdInput) -> Result<String, AppError> {
        let matched = self.matcher.resolve(&household.location)?;
        tracing::info!(
            region = %matched.record.region_name,
            distance_km = matched.distance_km,
            "location matched"
        );
        let result = assess_with(&matched.record, household, &self.config.engine);
        tracing::info!(
            status = result.feasibility_status.label(),
            percentage = result.feasibility_percentage,
            "assessment complete"
        );
        self.render(household, Some(&matched), &result)
    }

    fn render(
        &self,
        household: &HouseholdInput,
        matched: Option<&MatchedLocation>,
        result: &crate::harvest::FeasibilityResult,
    ) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "location": matched,
                "household": household,
                "analysis": result,
            }))?),
            OutputFormat::Text => Ok(report::render_text(
                household,
                matched,
                result,
                &self.tr,
                self.report_options(),
            )),
        }
    }

    fn list_locations(&self) -> Result<String, AppError> {
        let table = self.matcher.table()?;
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(table.records())?),
            OutputFormat::Text => {
                let mut out = format!("{}\n", self.tr.t(keys::LOCATIONS_HEADER));
                for r in table.records() {
                    out.push_str(&format!(
                        "{} | {:.4} | {:.4} | {} | {} | {}\n",
                        r.region_name,
                        r.latitude,
                        r.longitude,
                        r.rainfall_mm,
                        r.soil_type.as_ref().map(|s| s.as_str()).unwrap_or("-"),
                        r.groundwater_depth_m
                            .map(|d| format!("{d:.1}"))
                            .unwrap_or_else(|| "-".to_string()),
                    ));
                }
                Ok(out)
            }
        }
    }
}

/// 서브커맨드를 실행한다. 결과는 stdout, 로그는 stderr로 나간다.
pub fn run(cli: &Cli, session: &Session) -> Result<(), AppError> {
    let output = match &cli.command {
        Some(Command::Assess(args)) => {
            let household = args.to_household(session.area_unit);
            session.assess_household(&household)?
        }
        Some(Command::Quick(args)) => {
            let request = args.to_request(session.area_unit);
            let result = quick_assess(&request, &session.config.engine);
            session.render(&request.household(), None, &result)?
        }
        Some(Command::Locations) => session.list_locations()?,
        Some(Command::Interactive) | None => {
            let household = ui_cli::prompt_household(&session.tr, session.area_unit)?;
            session.assess_household(&household)?
        }
    };
    println!("{output}");
    Ok(())
}
