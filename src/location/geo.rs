use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::record::LocationRecord;
use super::table::LocationTable;
use super::LocationError;

/// 지구 반지름 [km] (구면 근사)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine 식으로 두 좌표 사이의 대권 거리 [km]를 계산한다.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // 부동소수 오차로 a가 1을 약간 넘는 경우 asin이 NaN이 되지 않도록 자른다.
    let c = 2.0 * a.sqrt().min(1.0).asin();
    c * EARTH_RADIUS_KM
}

/// 사용자가 입력한 위치 정보. 좌표가 둘 다 있으면 좌표가 우선한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationQuery {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_coordinate(latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// 매칭된 기준 레코드와 질의 지점까지의 거리.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedLocation {
    pub record: LocationRecord,
    /// 이름으로 매칭된 경우 0
    pub distance_km: f64,
}

#[derive(Debug, Clone)]
enum TableState {
    Ready(Arc<LocationTable>),
    Unavailable { path: PathBuf, reason: String },
}

/// 기준 테이블을 받아 좌표/이름으로 지역을 찾는다.
///
/// 테이블은 생성 시점에 주입되며 이후 읽기 전용이다. 복제 비용이 낮아 요청마다 공유해도 된다.
#[derive(Debug, Clone)]
pub struct GeoMatcher {
    state: TableState,
}

impl GeoMatcher {
    pub fn new(table: LocationTable) -> Self {
        Self {
            state: TableState::Ready(Arc::new(table)),
        }
    }

    /// 기준 데이터를 읽지 못한 상태의 매처. 모든 조회가 `ReferenceDataUnavailable`을 반환한다.
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            state: TableState::Unavailable {
                path: path.into(),
                reason: reason.into(),
            },
        }
    }

    /// 파일에서 테이블을 읽는다. 실패해도 프로세스를 멈추지 않고 사용 불가 상태로 만든다.
    pub fn load_or_unavailable(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match LocationTable::load(path) {
            Ok(table) => {
                tracing::info!(path = %path.display(), records = table.len(), "location table loaded");
                Self::new(table)
            }
            Err(err) => {
                let reason = match err {
                    LocationError::ReferenceDataUnavailable { reason, .. } => reason,
                    other => other.to_string(),
                };
                tracing::error!(
                    path = %path.display(),
                    %reason,
                    "location data could not be loaded; location-based analysis is unavailable"
                );
                Self::unavailable(path, reason)
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, TableState::Ready(_))
    }

    pub fn table(&self) -> Result<&LocationTable, LocationError> {
        match &self.state {
            TableState::Ready(table) => Ok(table.as_ref()),
            TableState::Unavailable { path, reason } => {
                Err(LocationError::ReferenceDataUnavailable {
                    path: path.clone(),
                    reason: reason.clone(),
                })
            }
        }
    }

    /// 모든 레코드와의 거리를 계산해 가장 가까운 지역을 반환한다.
    /// 거리가 같으면 테이블 순서상 먼저 나온 레코드가 이긴다.
    pub fn nearest_by_coordinate(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MatchedLocation, LocationError> {
        let table = self.table()?;
        let mut best: Option<(&LocationRecord, f64)> = None;
        for record in table.records() {
            let d = haversine_km(latitude, longitude, record.latitude, record.longitude);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ if d.is_nan() => {}
                _ => best = Some((record, d)),
            }
        }
        best.map(|(record, distance_km)| MatchedLocation {
            record: record.clone(),
            distance_km,
        })
        .ok_or_else(|| LocationError::LocationNotFound(format!("({latitude}, {longitude})")))
    }

    /// 지역명이 질의 문자열에 포함되는 첫 레코드를 찾고, 없으면 대소문자 무시 일치로 재시도한다.
    pub fn by_name(&self, query: &str) -> Result<MatchedLocation, LocationError> {
        let table = self.table()?;
        let needle = query.to_lowercase();
        let found = table
            .records()
            .iter()
            .find(|r| needle.contains(&r.region_name.to_lowercase()))
            .or_else(|| {
                table
                    .records()
                    .iter()
                    .find(|r| r.region_name.to_lowercase() == needle)
            });
        found
            .map(|record| MatchedLocation {
                record: record.clone(),
                distance_km: 0.0,
            })
            .ok_or_else(|| LocationError::LocationNotFound(query.to_string()))
    }

    /// 좌표가 모두 주어지면 최근접 검색, 아니면 이름 검색을 수행한다.
    pub fn resolve(&self, query: &LocationQuery) -> Result<MatchedLocation, LocationError> {
        match (query.latitude, query.longitude) {
            (Some(lat), Some(lon)) => self.nearest_by_coordinate(lat, lon),
            _ => match query.name.as_deref() {
                Some(name) => self.by_name(name),
                None => {
                    // 테이블 자체가 없으면 not-found보다 unavailable을 먼저 알린다.
                    self.table()?;
                    Err(LocationError::LocationNotFound(String::new()))
                }
            },
        }
    }
}
