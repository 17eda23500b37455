//! 요금제 비교 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.
//!
//! 계산 흐름: 계약 조건 → 온보딩 램프 → 월별 비용표 → 요약 지표.

pub mod app;
pub mod cli;
pub mod config;
pub mod contract;
pub mod i18n;
pub mod onboarding;
pub mod pricing;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod summary;

pub use contract::ContractConfig;
pub use onboarding::{project_onboarding, OnboardingProjection};
pub use pricing::{fee_for_month, FlatFeeBasis, ModelKind, PricingModel, Tier, TierSchedule};
pub use projection::{project, CostColumn, CostTable, MonthlyCostRow};
pub use scenario::{Evaluation, Scenario, ScenarioError};
pub use summary::{savings_percent, summarize, SummaryMetrics};
