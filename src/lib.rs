//! 지붕 빗물 집수 타당성 평가 엔진. 계산 로직을 라이브러리로 분리해 CLI 외의 호출 측(웹, 보고서)도 그대로 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod harvest;
pub mod i18n;
pub mod location;
pub mod logging;
pub mod report;
pub mod ui_cli;
pub mod units;
