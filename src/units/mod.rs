//! 입력 면적과 표시 물량의 단위 변환.

pub mod area;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use volume::{convert_volume, VolumeUnit};
