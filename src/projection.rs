use crate::pricing::{ModelKind, PricingModel};

/// 요금제 한 개의 월별/누적 비용 열.
#[derive(Debug, Clone, PartialEq)]
pub struct CostColumn {
    pub kind: ModelKind,
    /// 비활성 요금제는 비용이 모두 0이고 요약에서 제외된다.
    pub enabled: bool,
    pub monthly: Vec<f64>,
    pub cumulative: Vec<f64>,
}

impl CostColumn {
    /// 계약 기간 총비용(TCO).
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

/// 월 한 줄의 비용 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelCost {
    pub kind: ModelKind,
    pub monthly: f64,
    pub cumulative: f64,
}

/// 월별 비용 행.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCostRow {
    pub month: u32,
    pub onboarded_units: u32,
    /// 활성 요금제만 포함한다.
    pub costs: Vec<ModelCost>,
}

impl MonthlyCostRow {
    pub fn cost(&self, kind: ModelKind) -> Option<&ModelCost> {
        self.costs.iter().find(|c| c.kind == kind)
    }
}

/// 월별 비용표. 계산 때마다 새로 만들어지고 수정되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    pub onboarded_units: Vec<u32>,
    /// `ModelKind` 순서로 정렬된 열
    pub columns: Vec<CostColumn>,
}

impl CostTable {
    pub fn contract_months(&self) -> u32 {
        self.onboarded_units.len() as u32
    }

    pub fn column(&self, kind: ModelKind) -> Option<&CostColumn> {
        self.columns.iter().find(|c| c.kind == kind)
    }

    pub fn enabled_columns(&self) -> impl Iterator<Item = &CostColumn> {
        self.columns.iter().filter(|c| c.enabled)
    }

    pub fn unit_months(&self) -> u64 {
        self.onboarded_units.iter().map(|&u| u as u64).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = MonthlyCostRow> + '_ {
        self.onboarded_units
            .iter()
            .enumerate()
            .map(move |(i, &units)| MonthlyCostRow {
                month: i as u32 + 1,
                onboarded_units: units,
                costs: self
                    .enabled_columns()
                    .map(|c| ModelCost {
                        kind: c.kind,
                        monthly: c.monthly[i],
                        cumulative: c.cumulative[i],
                    })
                    .collect(),
            })
    }
}

/// 온보딩 시계열과 요금제 목록으로 월별 비용표를 만든다.
///
/// 시계열이 계약 기간보다 짧으면 남은 달은 마지막 값(없으면 0)으로 채운다.
pub fn project(
    onboarding_series: &[u32],
    contract_months: u32,
    models: &[PricingModel],
) -> CostTable {
    let onboarded_units: Vec<u32> = (0..contract_months as usize)
        .map(|i| {
            onboarding_series
                .get(i)
                .or_else(|| onboarding_series.last())
                .copied()
                .unwrap_or(0)
        })
        .collect();

    let mut columns: Vec<CostColumn> = models
        .iter()
        .map(|model| project_column(model, &onboarded_units))
        .collect();
    columns.sort_by_key(|c| c.kind);

    tracing::debug!(
        months = contract_months,
        columns = columns.len(),
        "cost table projected"
    );

    CostTable {
        onboarded_units,
        columns,
    }
}

fn project_column(model: &PricingModel, onboarded_units: &[u32]) -> CostColumn {
    let monthly: Vec<f64> = onboarded_units
        .iter()
        .enumerate()
        .map(|(i, &units)| model.monthly_cost(i as u32 + 1, units))
        .collect();
    let cumulative = monthly
        .iter()
        .scan(0.0, |acc, &cost| {
            *acc += cost;
            Some(*acc)
        })
        .collect();
    CostColumn {
        kind: model.kind(),
        enabled: model.is_enabled(),
        monthly,
        cumulative,
    }
}
