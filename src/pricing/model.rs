use serde::{Deserialize, Serialize};

use crate::contract::ContractConfig;
use crate::pricing::tiers::TierSchedule;
use crate::scenario::ScenarioError;

/// 요금제 종류. 정렬 순서가 표/보고서의 열 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    PerUnit,
    ScheduledFlatFee,
    SingleFlatFee,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::PerUnit,
        ModelKind::ScheduledFlatFee,
        ModelKind::SingleFlatFee,
    ];
}

/// 비교 대상 요금제.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingModel {
    /// 활성 unit 수 × 단가
    PerUnit { price_per_unit_per_month: f64 },
    /// 매월 고정 요금
    SingleFlatFee { monthly_fee: f64 },
    /// 구간별 고정 요금. 비활성화되면 비용 0이며 비교에서 제외된다.
    ScheduledFlatFee { tiers: TierSchedule, enabled: bool },
}

impl PricingModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            PricingModel::PerUnit { .. } => ModelKind::PerUnit,
            PricingModel::SingleFlatFee { .. } => ModelKind::SingleFlatFee,
            PricingModel::ScheduledFlatFee { .. } => ModelKind::ScheduledFlatFee,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            PricingModel::ScheduledFlatFee { enabled, .. } => *enabled,
            _ => true,
        }
    }

    /// 해당 월의 비용. `month`는 1부터 시작한다.
    pub fn monthly_cost(&self, month: u32, onboarded_units: u32) -> f64 {
        match self {
            PricingModel::PerUnit {
                price_per_unit_per_month,
            } => price_per_unit_per_month * onboarded_units as f64,
            PricingModel::SingleFlatFee { monthly_fee } => *monthly_fee,
            PricingModel::ScheduledFlatFee { tiers, enabled } => {
                if *enabled {
                    tiers.fee_for_month(month)
                } else {
                    0.0
                }
            }
        }
    }

    /// 계약 기간에 대해 가격 입력값을 검증한다.
    pub fn validate(&self, contract: &ContractConfig) -> Result<(), ScenarioError> {
        match self {
            PricingModel::PerUnit {
                price_per_unit_per_month,
            } => check_amount("price_per_unit_per_month", *price_per_unit_per_month),
            PricingModel::SingleFlatFee { monthly_fee } => check_amount("monthly_fee", *monthly_fee),
            PricingModel::ScheduledFlatFee { tiers, enabled } => {
                if *enabled {
                    tiers.validate_within(contract.contract_months)
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidAmount { field, value })
    }
}

/// 단일 고정 요금의 입력 방식. 모두 월 요금으로 환산된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatFeeBasis {
    /// 월 요금 직접 입력
    MonthlyFee(f64),
    /// 계약 전체 TCO를 기간으로 균등 분할
    FixedTco(f64),
    /// 전체 선단 기준 unit 요금 대비 할인율(%)
    DiscountPercent(f64),
}

impl FlatFeeBasis {
    /// 월 요금으로 환산한다. 할인율 방식은 unit 단가가 있어야 한다.
    pub fn monthly_fee(
        &self,
        contract: &ContractConfig,
        price_per_unit_per_month: Option<f64>,
    ) -> Result<f64, ScenarioError> {
        let months = contract.contract_months;
        if months == 0 {
            return Err(ScenarioError::ZeroContractMonths);
        }
        match *self {
            FlatFeeBasis::MonthlyFee(fee) => {
                check_amount("monthly_fee", fee)?;
                Ok(fee)
            }
            FlatFeeBasis::FixedTco(tco) => {
                check_amount("fixed_tco", tco)?;
                Ok(tco / months as f64)
            }
            FlatFeeBasis::DiscountPercent(discount) => {
                if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
                    return Err(ScenarioError::DiscountOutOfRange(discount));
                }
                let price = price_per_unit_per_month.ok_or(ScenarioError::DiscountWithoutPerUnit)?;
                check_amount("price_per_unit_per_month", price)?;
                let full_fleet_tco = price
                    * contract.total_units as f64
                    * months as f64
                    * (1.0 - discount / 100.0);
                Ok(full_fleet_tco / months as f64)
            }
        }
    }
}
