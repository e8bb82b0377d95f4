use serde::Serialize;

/// 몬순 최다우월에 연간 유출량이 집중되는 비율
pub const PEAK_MONTH_SHARE: f64 = 0.4;

/// 지붕 유출량 결과. 1 mm × 1 m² = 1 L로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunoffEstimate {
    /// 연간 유출량 [L]
    pub annual_liters: f64,
    /// 최다우월 유출량 [L]
    pub peak_monthly_liters: f64,
    /// 일평균 유출량 [L]
    pub daily_average_liters: f64,
}

/// 지붕 면적, 강수량, 유출 계수로 집수 가능한 유출량을 계산한다.
pub fn estimate_runoff(
    roof_area_m2: f64,
    rainfall_mm: f64,
    runoff_coefficient: f64,
) -> RunoffEstimate {
    let annual_liters = roof_area_m2 * rainfall_mm * runoff_coefficient;
    RunoffEstimate {
        annual_liters,
        peak_monthly_liters: annual_liters * PEAK_MONTH_SHARE,
        daily_average_liters: annual_liters / 365.0,
    }
}
