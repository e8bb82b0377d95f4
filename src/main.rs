use std::process::ExitCode;

use clap::Parser;
use rainwater_feasibility::app::{self, AppError, Session};
use rainwater_feasibility::cli::Cli;
use rainwater_feasibility::i18n::{self, keys, Translator};
use rainwater_feasibility::{config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(error = %err, "config unusable; falling back to defaults");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());
    let session = Session::new(&cli, cfg, tr);

    match app::run(&cli, &session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err, &session.tr),
    }
}

fn report_error(err: &AppError, tr: &Translator) -> ExitCode {
    tracing::error!(error = %err, "request failed");
    eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), err.user_message(tr));
    ExitCode::from(err.exit_code())
}
