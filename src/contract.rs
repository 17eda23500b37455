use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioError;

/// 계약 조건 입력. 모든 값은 1 이상이어야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// 전체 과금 대상 수 (예: 선박 척수)
    pub total_units: u32,
    /// 계약 기간 [개월]
    pub contract_months: u32,
    /// 월별 온보딩 수
    pub units_onboarded_per_month: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            total_units: 50,
            contract_months: 48,
            units_onboarded_per_month: 5,
        }
    }
}

impl ContractConfig {
    /// 0 값을 거부한다. 값을 보정하지 않는다.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.total_units == 0 {
            return Err(ScenarioError::ZeroTotalUnits);
        }
        if self.contract_months == 0 {
            return Err(ScenarioError::ZeroContractMonths);
        }
        if self.units_onboarded_per_month == 0 {
            return Err(ScenarioError::ZeroOnboardingRate);
        }
        Ok(())
    }
}
