use clap::Parser;
use fleet_pricing_simulator::{app, cli::Cli, i18n};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요금제 비교 결과를 출력한다.
fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match app::run(&cli) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            let lang = i18n::resolve_language(cli.lang.as_deref(), None);
            let tr = i18n::Translator::new(&lang);
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            std::process::exit(1);
        }
    }
}
