//! 요금제 정의와 구간 요금 계산.

pub mod model;
pub mod tiers;

pub use model::*;
pub use tiers::*;
