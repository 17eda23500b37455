use thiserror::Error;

use crate::cli::Cli;
use crate::config::{self, ConfigError};
use crate::i18n::{self, Translator};
use crate::report;
use crate::scenario::ScenarioError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 파일 로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 시나리오 검증 오류
    #[error("invalid configuration: {0}")]
    Scenario(#[from] ScenarioError),
}

/// 설정을 읽어 계산하고 출력할 보고서를 돌려준다.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    cli.apply_overrides(&mut cfg);

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);

    let scenario = cfg.to_scenario()?;
    let evaluation = scenario.evaluate()?;
    tracing::info!(
        months = scenario.contract.contract_months,
        models = evaluation.summary.models.len(),
        "scenario evaluated"
    );

    let mut out = report::render_summary(&tr, &scenario, cfg.unit_of_measure, &evaluation);
    if cli.monthly {
        out.push_str(&report::render_monthly(
            &tr,
            cfg.unit_of_measure,
            &evaluation.table,
        ));
    }
    Ok(out)
}
