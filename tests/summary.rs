use fleet_pricing_simulator::{
    project, project_onboarding, savings_percent, summarize, ModelKind, PricingModel,
    TierSchedule,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn default_models(scheduled_enabled: bool) -> Vec<PricingModel> {
    vec![
        PricingModel::PerUnit {
            price_per_unit_per_month: 1_000.0,
        },
        PricingModel::ScheduledFlatFee {
            tiers: TierSchedule::default(),
            enabled: scheduled_enabled,
        },
        PricingModel::SingleFlatFee {
            monthly_fee: 35_000.0,
        },
    ]
}

#[test]
fn tco_and_savings_for_default_fleet() {
    let onboarding = project_onboarding(50, 48, 5);
    let table = project(&onboarding.series, 48, &default_models(true));
    let summary = summarize(&table);

    assert_eq!(summary.unit_months, 2_175);
    assert_eq!(summary.model(ModelKind::PerUnit).unwrap().tco, 2_175_000.0);
    assert_eq!(
        summary.model(ModelKind::ScheduledFlatFee).unwrap().tco,
        1_950_000.0
    );
    assert_eq!(summary.model(ModelKind::SingleFlatFee).unwrap().tco, 1_680_000.0);

    let flat_vs_unit = summary
        .saving(ModelKind::SingleFlatFee, ModelKind::PerUnit)
        .expect("flat fee undercuts per-unit");
    assert_close(flat_vs_unit, (2_175_000.0 - 1_680_000.0) / 2_175_000.0 * 100.0);
    let scheduled_vs_unit = summary
        .saving(ModelKind::ScheduledFlatFee, ModelKind::PerUnit)
        .unwrap();
    assert_close(scheduled_vs_unit, 225_000.0 / 2_175_000.0 * 100.0);
    let flat_vs_scheduled = summary
        .saving(ModelKind::SingleFlatFee, ModelKind::ScheduledFlatFee)
        .unwrap();
    assert_close(flat_vs_scheduled, 270_000.0 / 1_950_000.0 * 100.0);

    // 더 비싼 쪽으로는 절감률을 내지 않는다.
    assert!(summary
        .saving(ModelKind::PerUnit, ModelKind::SingleFlatFee)
        .is_none());
    assert_eq!(summary.savings.len(), 3);
}

#[test]
fn effective_price_divides_by_unit_months() {
    let onboarding = project_onboarding(50, 48, 5);
    let table = project(&onboarding.series, 48, &default_models(true));
    let summary = summarize(&table);
    assert_close(
        summary.model(ModelKind::PerUnit).unwrap().effective_price_per_unit,
        1_000.0,
    );
    assert_close(
        summary
            .model(ModelKind::SingleFlatFee)
            .unwrap()
            .effective_price_per_unit,
        1_680_000.0 / 2_175.0,
    );
}

#[test]
fn disabled_model_is_left_out_of_summary() {
    let table = project(&[5, 10, 15], 3, &default_models(false));
    let summary = summarize(&table);
    assert!(summary.model(ModelKind::ScheduledFlatFee).is_none());
    assert_eq!(summary.models.len(), 2);
    assert!(summary
        .savings
        .iter()
        .all(|s| s.cheaper != ModelKind::ScheduledFlatFee
            && s.baseline != ModelKind::ScheduledFlatFee));
}

#[test]
fn zero_unit_months_gives_zero_effective_price() {
    let table = project(&[0, 0, 0], 3, &default_models(true));
    let summary = summarize(&table);
    assert_eq!(summary.unit_months, 0);
    for m in &summary.models {
        assert_eq!(m.effective_price_per_unit, 0.0);
    }
}

#[test]
fn savings_only_reported_when_positive() {
    assert!(savings_percent(100.0, 100.0).is_none());
    assert!(savings_percent(120.0, 100.0).is_none());
    assert!(savings_percent(0.0, 100.0).is_none());
    assert!(savings_percent(50.0, 0.0).is_none());
    assert_close(savings_percent(75.0, 100.0).unwrap(), 25.0);
}

#[test]
fn free_model_does_not_claim_savings() {
    let models = vec![
        PricingModel::PerUnit {
            price_per_unit_per_month: 0.0,
        },
        PricingModel::SingleFlatFee {
            monthly_fee: 10.0,
        },
    ];
    let table = project(&[1, 2], 2, &models);
    assert!(summarize(&table).savings.is_empty());
}
