use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioError;

/// 스케줄 요금제에 허용되는 최대 구간 수.
pub const MAX_TIERS: usize = 5;

/// 요금 구간 한 개. `start_month`부터 다음 구간 전까지 `monthly_fee`가 적용된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub start_month: u32,
    pub monthly_fee: f64,
}

impl Tier {
    pub fn new(start_month: u32, monthly_fee: f64) -> Self {
        Self {
            start_month,
            monthly_fee,
        }
    }
}

/// 검증된 요금 구간 목록. 시작 월이 엄격히 증가하며 1~5개로 제한된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierSchedule {
    tiers: Vec<Tier>,
}

impl TierSchedule {
    pub fn new(tiers: Vec<Tier>) -> Result<Self, ScenarioError> {
        if tiers.is_empty() {
            return Err(ScenarioError::NoTiers);
        }
        if tiers.len() > MAX_TIERS {
            return Err(ScenarioError::TooManyTiers {
                count: tiers.len(),
                max: MAX_TIERS,
            });
        }
        for (index, tier) in tiers.iter().enumerate() {
            if !tier.monthly_fee.is_finite() || tier.monthly_fee < 0.0 {
                return Err(ScenarioError::InvalidTierFee {
                    index,
                    fee: tier.monthly_fee,
                });
            }
        }
        for pair in tiers.windows(2) {
            if pair[1].start_month <= pair[0].start_month {
                return Err(ScenarioError::TierOrder {
                    previous: pair[0].start_month,
                    next: pair[1].start_month,
                });
            }
        }
        Ok(Self { tiers })
    }

    /// 모든 시작 월이 `[1, contract_months]` 범위 안에 있는지 확인한다.
    pub fn validate_within(&self, contract_months: u32) -> Result<(), ScenarioError> {
        match self
            .tiers
            .iter()
            .find(|t| t.start_month == 0 || t.start_month > contract_months)
        {
            Some(t) => Err(ScenarioError::TierOutOfRange {
                start_month: t.start_month,
                contract_months,
            }),
            None => Ok(()),
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn fee_for_month(&self, month: u32) -> f64 {
        fee_for_month(month, &self.tiers)
    }
}

impl Default for TierSchedule {
    /// 1개월차 15,000 → 6개월차 35,000 → 12개월차 45,000
    fn default() -> Self {
        Self {
            tiers: vec![
                Tier::new(1, 15_000.0),
                Tier::new(6, 35_000.0),
                Tier::new(12, 45_000.0),
            ],
        }
    }
}

impl TryFrom<Vec<Tier>> for TierSchedule {
    type Error = ScenarioError;

    fn try_from(value: Vec<Tier>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TierSchedule> for Vec<Tier> {
    fn from(value: TierSchedule) -> Self {
        value.tiers
    }
}

/// 해당 월에 적용되는 월 요금을 반환한다.
///
/// `start_month <= month` 인 구간 중 시작 월이 가장 큰 구간이 적용되고,
/// 해당 구간이 없으면 0이다. 시작 월이 중복되면 나중에 들어온 구간이 우선한다.
pub fn fee_for_month(month: u32, tiers: &[Tier]) -> f64 {
    let mut best: Option<&Tier> = None;
    for tier in tiers.iter().filter(|t| t.start_month <= month) {
        match best {
            Some(b) if tier.start_month < b.start_month => {}
            _ => best = Some(tier),
        }
    }
    best.map(|t| t.monthly_fee).unwrap_or(0.0)
}
