use tracing_subscriber::{fmt, EnvFilter};

/// stderr로 출력하는 tracing 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 그 값을 따르고, 없으면 `verbose` 여부에 따라 info/debug를 쓴다.
/// 이미 설치된 경우(테스트 등)는 조용히 넘어간다.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
