/// 온보딩 램프 계산 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingProjection {
    /// 월별 누적 온보딩 수. 인덱스 0이 1개월차.
    pub series: Vec<u32>,
    /// 전체 온보딩 완료까지 걸리는 기간 [개월]
    pub duration_months: u32,
}

impl OnboardingProjection {
    /// 계약 기간 내 과금된 unit-month 합계.
    pub fn unit_months(&self) -> u64 {
        self.series.iter().map(|&u| u as u64).sum()
    }

    /// 계약 종료 전에 전체 온보딩이 끝나는지 여부.
    pub fn completes_within_contract(&self) -> bool {
        self.duration_months as usize <= self.series.len()
    }
}

/// 월별 온보딩 수로 계약 기간 동안의 활성 수를 계산한다.
///
/// 마지막 달의 증가분은 전체 수를 넘지 않도록 잘린다. 증가가 없는 달에도 값을 기록한다.
/// `units_per_month`가 0이면 기간은 0, 시계열은 모두 0이다.
pub fn project_onboarding(
    total_units: u32,
    contract_months: u32,
    units_per_month: u32,
) -> OnboardingProjection {
    let duration_months = if units_per_month > 0 {
        total_units.div_ceil(units_per_month)
    } else {
        0
    };

    let mut series = Vec::with_capacity(contract_months as usize);
    let mut current = 0u32;
    for _ in 1..=contract_months {
        if current < total_units {
            current += units_per_month.min(total_units - current);
        }
        series.push(current);
    }

    if (duration_months as usize) > series.len() {
        tracing::warn!(
            duration_months,
            contract_months,
            "contract ends before onboarding completes"
        );
    }
    tracing::debug!(duration_months, total_units, units_per_month, "onboarding projected");

    OnboardingProjection {
        series,
        duration_months,
    }
}
