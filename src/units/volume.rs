use serde::{Deserialize, Serialize};

/// 물량 표시 단위. 엔진 결과는 리터 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum VolumeUnit {
    #[value(name = "l")]
    Liter,
    #[value(name = "m3")]
    CubicMeter,
    #[value(name = "gal")]
    UsGallon,
}

impl VolumeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::UsGallon => "gal",
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::UsGallon => value * 3.785_411_784,
    }
}

fn from_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value / 1000.0,
        VolumeUnit::UsGallon => value / 3.785_411_784,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let liters = to_liter(value, from);
    from_liter(liters, to)
}
