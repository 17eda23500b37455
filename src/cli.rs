use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, PerUnitSection, UnitOfMeasure};
use crate::pricing::FlatFeeBasis;

/// 요금제별 계약 비용을 월 단위로 비교한다.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fleet_pricing_simulator", version, about)]
pub struct Cli {
    /// 시나리오 파일 경로 (기본: ./scenario.toml, 없으면 내장 기본값)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 출력 언어: auto, en, ko
    #[arg(short = 'L', long)]
    pub lang: Option<String>,

    /// 전체 과금 대상 수
    #[arg(long)]
    pub total_units: Option<u32>,

    /// 계약 기간 [개월]
    #[arg(long)]
    pub contract_months: Option<u32>,

    /// 월별 온보딩 수
    #[arg(long)]
    pub units_per_month: Option<u32>,

    /// unit당 월 단가
    #[arg(long)]
    pub price_per_unit: Option<f64>,

    /// 단일 고정 요금 [월]
    #[arg(long)]
    pub flat_fee: Option<f64>,

    /// 표시용 통화 라벨
    #[arg(long)]
    pub currency: Option<String>,

    /// 과금 단위: vessel, voyage, mt-bunker
    #[arg(long, value_parser = parse_unit)]
    pub unit: Option<UnitOfMeasure>,

    /// 구간별 고정 요금제를 비교에서 제외
    #[arg(long)]
    pub disable_scheduled: bool,

    /// 월별 상세 표 출력
    #[arg(long)]
    pub monthly: bool,

    /// 디버그 로그 출력
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_unit(s: &str) -> Result<UnitOfMeasure, String> {
    UnitOfMeasure::from_name(s).ok_or_else(|| format!("unknown unit of measure: {s}"))
}

impl Cli {
    /// 명령행 값으로 파일 설정을 덮어쓴다.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(v) = self.total_units {
            cfg.contract.total_units = v;
        }
        if let Some(v) = self.contract_months {
            cfg.contract.contract_months = v;
        }
        if let Some(v) = self.units_per_month {
            cfg.contract.units_onboarded_per_month = v;
        }
        if let Some(v) = self.price_per_unit {
            cfg.per_unit = Some(PerUnitSection {
                price_per_unit_per_month: v,
            });
        }
        if let Some(v) = self.flat_fee {
            cfg.single_flat_fee = Some(FlatFeeBasis::MonthlyFee(v));
        }
        if let Some(v) = &self.currency {
            cfg.currency = v.clone();
        }
        if let Some(v) = self.unit {
            cfg.unit_of_measure = v;
        }
        if self.disable_scheduled {
            if let Some(s) = cfg.scheduled_flat_fee.as_mut() {
                s.enabled = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::parse_from([
            "fleet_pricing_simulator",
            "--total-units",
            "20",
            "--flat-fee",
            "12000",
            "--unit",
            "mt-bunker",
            "--disable-scheduled",
        ]);
        let mut cfg = Config::default();
        cli.apply_overrides(&mut cfg);
        assert_eq!(cfg.contract.total_units, 20);
        assert_eq!(cfg.contract.contract_months, 48);
        assert_eq!(cfg.single_flat_fee, Some(FlatFeeBasis::MonthlyFee(12_000.0)));
        assert_eq!(cfg.unit_of_measure, UnitOfMeasure::MtBunker);
        assert_eq!(cfg.scheduled_flat_fee.map(|s| s.enabled), Some(false));
    }
}
