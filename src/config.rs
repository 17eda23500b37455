use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::contract::ContractConfig;
use crate::pricing::{FlatFeeBasis, PricingModel, TierSchedule};
use crate::scenario::{Scenario, ScenarioError};

/// 별도 경로가 없을 때 읽는 시나리오 파일.
pub const DEFAULT_SCENARIO_FILE: &str = "scenario.toml";

/// 과금 단위. 표시 라벨에만 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfMeasure {
    Vessel,
    Voyage,
    MtBunker,
}

impl UnitOfMeasure {
    pub fn label(&self) -> &'static str {
        match self {
            UnitOfMeasure::Vessel => "Vessel",
            UnitOfMeasure::Voyage => "Voyage",
            UnitOfMeasure::MtBunker => "MT Bunker",
        }
    }

    /// 복수형 라벨. MT Bunker는 그대로 쓴다.
    pub fn plural(&self) -> String {
        match self {
            UnitOfMeasure::MtBunker => self.label().to_string(),
            other => format!("{}s", other.label()),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "vessel" | "vessels" => Some(UnitOfMeasure::Vessel),
            "voyage" | "voyages" => Some(UnitOfMeasure::Voyage),
            "mt_bunker" | "bunker" => Some(UnitOfMeasure::MtBunker),
            _ => None,
        }
    }
}

/// unit 단가 요금제 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerUnitSection {
    pub price_per_unit_per_month: f64,
}

/// 스케줄 요금제 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSection {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub tiers: TierSchedule,
}

fn enabled_by_default() -> bool {
    true
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_unit() -> UnitOfMeasure {
    UnitOfMeasure::Vessel
}

/// 시나리오 파일 전체. 요금제 섹션은 각각 생략할 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_unit")]
    pub unit_of_measure: UnitOfMeasure,
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub per_unit: Option<PerUnitSection>,
    #[serde(default)]
    pub scheduled_flat_fee: Option<ScheduledSection>,
    #[serde(default)]
    pub single_flat_fee: Option<FlatFeeBasis>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            currency: default_currency(),
            unit_of_measure: default_unit(),
            contract: ContractConfig::default(),
            per_unit: Some(PerUnitSection {
                price_per_unit_per_month: 1_000.0,
            }),
            scheduled_flat_fee: Some(ScheduledSection {
                enabled: true,
                tiers: TierSchedule::default(),
            }),
            single_flat_fee: Some(FlatFeeBasis::MonthlyFee(35_000.0)),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 경로가 주어지면 해당 파일을, 아니면 scenario.toml을 읽는다.
/// 기본 파일이 없으면 내장 기본값을 쓴다. 파일을 쓰지는 않는다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => load(p),
        None => {
            let p = Path::new(DEFAULT_SCENARIO_FILE);
            if p.exists() {
                load(p)
            } else {
                tracing::debug!("no {DEFAULT_SCENARIO_FILE} found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "scenario loaded");
    Ok(cfg)
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

impl Config {
    /// 계산용 시나리오로 변환한다. 단일 고정 요금은 월 요금으로 환산된다.
    pub fn to_scenario(&self) -> Result<Scenario, ScenarioError> {
        let mut models = Vec::with_capacity(3);
        if let Some(per_unit) = self.per_unit {
            models.push(PricingModel::PerUnit {
                price_per_unit_per_month: per_unit.price_per_unit_per_month,
            });
        }
        if let Some(scheduled) = &self.scheduled_flat_fee {
            models.push(PricingModel::ScheduledFlatFee {
                tiers: scheduled.tiers.clone(),
                enabled: scheduled.enabled,
            });
        }
        if let Some(basis) = self.single_flat_fee {
            let price = self.per_unit.map(|p| p.price_per_unit_per_month);
            let monthly_fee = basis.monthly_fee(&self.contract, price)?;
            models.push(PricingModel::SingleFlatFee { monthly_fee });
        }
        Ok(Scenario {
            contract: self.contract,
            models,
            currency: self.currency.clone(),
        })
    }
}
