use thiserror::Error;

use crate::contract::ContractConfig;
use crate::onboarding::{self, OnboardingProjection};
use crate::pricing::PricingModel;
use crate::projection::{self, CostTable};
use crate::summary::{self, SummaryMetrics};

/// 계산 전에 거부되는 설정 오류.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    #[error("total units must be at least 1")]
    ZeroTotalUnits,

    #[error("contract period must be at least 1 month")]
    ZeroContractMonths,

    #[error("units onboarded per month must be at least 1")]
    ZeroOnboardingRate,

    #[error("{field} must be a non-negative number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("scheduled flat fee needs at least one period")]
    NoTiers,

    #[error("scheduled flat fee allows at most {max} periods, got {count}")]
    TooManyTiers { count: usize, max: usize },

    #[error("period {index} has an invalid monthly fee {fee}")]
    InvalidTierFee { index: usize, fee: f64 },

    #[error("period start months must increase: {next} follows {previous}")]
    TierOrder { previous: u32, next: u32 },

    #[error("period start month {start_month} is outside the contract (1..={contract_months})")]
    TierOutOfRange {
        start_month: u32,
        contract_months: u32,
    },

    #[error("discount percent must be between 0 and 100, got {0}")]
    DiscountOutOfRange(f64),

    #[error("a discount-based flat fee needs a per-unit price to discount from")]
    DiscountWithoutPerUnit,

    #[error("at least one pricing model is required")]
    NoModels,

    #[error("at most {max} pricing models can be compared, got {count}")]
    TooManyModels { count: usize, max: usize },

    #[error("pricing model {0} is configured more than once")]
    DuplicateModel(&'static str),
}

/// 한 번의 계산에 필요한 모든 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub contract: ContractConfig,
    pub models: Vec<PricingModel>,
    /// 표시용 통화 라벨. 환산하지 않는다.
    pub currency: String,
}

/// 파이프라인 전체 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub onboarding: OnboardingProjection,
    pub table: CostTable,
    pub summary: SummaryMetrics,
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.contract.validate()?;
        if self.models.is_empty() {
            return Err(ScenarioError::NoModels);
        }
        let max = crate::pricing::ModelKind::ALL.len();
        if self.models.len() > max {
            return Err(ScenarioError::TooManyModels {
                count: self.models.len(),
                max,
            });
        }
        let mut seen = Vec::with_capacity(self.models.len());
        for model in &self.models {
            let kind = model.kind();
            if seen.contains(&kind) {
                return Err(ScenarioError::DuplicateModel(model_name(model)));
            }
            seen.push(kind);
            model.validate(&self.contract)?;
        }
        Ok(())
    }

    /// 검증 후 온보딩 → 비용표 → 요약 순으로 계산한다.
    pub fn evaluate(&self) -> Result<Evaluation, ScenarioError> {
        self.validate()?;
        let c = &self.contract;
        let onboarding = onboarding::project_onboarding(
            c.total_units,
            c.contract_months,
            c.units_onboarded_per_month,
        );
        let table = projection::project(&onboarding.series, c.contract_months, &self.models);
        let summary = summary::summarize(&table);
        Ok(Evaluation {
            onboarding,
            table,
            summary,
        })
    }
}

fn model_name(model: &PricingModel) -> &'static str {
    match model {
        PricingModel::PerUnit { .. } => "per_unit",
        PricingModel::SingleFlatFee { .. } => "single_flat_fee",
        PricingModel::ScheduledFlatFee { .. } => "scheduled_flat_fee",
    }
}
