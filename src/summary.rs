use crate::pricing::ModelKind;
use crate::projection::CostTable;

/// 요금제별 요약 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSummary {
    pub kind: ModelKind,
    /// 계약 기간 총비용
    pub tco: f64,
    /// unit-month 당 평균 비용
    pub effective_price_per_unit: f64,
}

/// `cheaper`가 `baseline` 대비 절감하는 비율(%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    pub cheaper: ModelKind,
    pub baseline: ModelKind,
    pub percent: f64,
}

/// 비용표에서 파생된 요약 지표.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub unit_months: u64,
    pub models: Vec<ModelSummary>,
    pub savings: Vec<Saving>,
}

impl SummaryMetrics {
    pub fn model(&self, kind: ModelKind) -> Option<&ModelSummary> {
        self.models.iter().find(|m| m.kind == kind)
    }

    pub fn saving(&self, cheaper: ModelKind, baseline: ModelKind) -> Option<f64> {
        self.savings
            .iter()
            .find(|s| s.cheaper == cheaper && s.baseline == baseline)
            .map(|s| s.percent)
    }
}

/// `baseline` 대비 `candidate`의 절감률. `baseline > candidate > 0` 일 때만 값이 있다.
pub fn savings_percent(candidate: f64, baseline: f64) -> Option<f64> {
    if baseline > candidate && candidate > 0.0 {
        Some((baseline - candidate) / baseline * 100.0)
    } else {
        None
    }
}

/// 활성 요금제의 TCO, 실효 단가, 상호 절감률을 계산한다.
pub fn summarize(table: &CostTable) -> SummaryMetrics {
    let unit_months = table.unit_months();
    let models: Vec<ModelSummary> = table
        .enabled_columns()
        .map(|column| {
            let tco: f64 = column.monthly.iter().sum();
            let effective_price_per_unit = if unit_months > 0 {
                tco / unit_months as f64
            } else {
                0.0
            };
            tracing::debug!(model = ?column.kind, tco, effective_price_per_unit, "model summarized");
            ModelSummary {
                kind: column.kind,
                tco,
                effective_price_per_unit,
            }
        })
        .collect();

    let mut savings = Vec::new();
    for baseline in &models {
        for cheaper in &models {
            if cheaper.kind == baseline.kind {
                continue;
            }
            if let Some(percent) = savings_percent(cheaper.tco, baseline.tco) {
                savings.push(Saving {
                    cheaper: cheaper.kind,
                    baseline: baseline.kind,
                    percent,
                });
            }
        }
    }

    SummaryMetrics {
        unit_months,
        models,
        savings,
    }
}
