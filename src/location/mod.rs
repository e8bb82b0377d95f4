//! 지역 기준 데이터와 위치 매칭 모듈 모음.

pub mod geo;
pub mod record;
pub mod table;

pub use geo::{haversine_km, GeoMatcher, LocationQuery, MatchedLocation, EARTH_RADIUS_KM};
pub use record::{LocationRecord, SoilType, WaterQuality};
pub use table::LocationTable;

use std::path::PathBuf;

/// 위치 조회 시 발생 가능한 오류.
///
/// 호출 측(CLI, 웹 등)이 404/500 응답을 구분할 수 있도록 두 경우를 분리한다.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// 기준 데이터를 읽지 못함
    #[error("location data unavailable ({}): {reason}", path.display())]
    ReferenceDataUnavailable { path: PathBuf, reason: String },
    /// 이름/좌표에 해당하는 지역이 없음
    #[error("no location matches '{0}'")]
    LocationNotFound(String),
}
