use fleet_pricing_simulator::{
    project, project_onboarding, ModelKind, PricingModel, Tier, TierSchedule,
};

fn models(scheduled_enabled: bool) -> Vec<PricingModel> {
    vec![
        PricingModel::SingleFlatFee {
            monthly_fee: 35_000.0,
        },
        PricingModel::PerUnit {
            price_per_unit_per_month: 1_000.0,
        },
        PricingModel::ScheduledFlatFee {
            tiers: TierSchedule::default(),
            enabled: scheduled_enabled,
        },
    ]
}

#[test]
fn per_unit_cost_follows_onboarding() {
    let onboarding = project_onboarding(50, 48, 5);
    let table = project(&onboarding.series, 48, &models(true));
    let per_unit = table.column(ModelKind::PerUnit).expect("per-unit column");
    assert_eq!(per_unit.monthly[0], 5_000.0);
    assert_eq!(per_unit.monthly[9], 50_000.0);
    assert_eq!(per_unit.monthly[47], 50_000.0);
    let expected: f64 = onboarding.series.iter().map(|&u| u as f64 * 1_000.0).sum();
    assert_eq!(per_unit.cumulative[47], expected);
    assert_eq!(per_unit.total(), 2_175_000.0);
}

#[test]
fn columns_are_ordered_by_model_kind() {
    let table = project(&[1, 2, 3], 3, &models(true));
    let kinds: Vec<ModelKind> = table.columns.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ModelKind::PerUnit,
            ModelKind::ScheduledFlatFee,
            ModelKind::SingleFlatFee
        ]
    );
}

#[test]
fn cumulative_is_running_sum() {
    let onboarding = project_onboarding(17, 24, 4);
    let table = project(&onboarding.series, 24, &models(true));
    for column in &table.columns {
        assert_eq!(column.cumulative[0], column.monthly[0]);
        for m in 1..column.monthly.len() {
            assert_eq!(
                column.cumulative[m],
                column.cumulative[m - 1] + column.monthly[m]
            );
        }
    }
}

#[test]
fn scheduled_fee_steps_at_tier_starts() {
    let table = project(&[1; 14], 14, &models(true));
    let scheduled = table.column(ModelKind::ScheduledFlatFee).unwrap();
    assert_eq!(scheduled.monthly[0], 15_000.0);
    assert_eq!(scheduled.monthly[4], 15_000.0);
    assert_eq!(scheduled.monthly[5], 35_000.0);
    assert_eq!(scheduled.monthly[10], 35_000.0);
    assert_eq!(scheduled.monthly[11], 45_000.0);
    assert_eq!(scheduled.monthly[13], 45_000.0);
}

#[test]
fn disabled_scheduled_model_costs_nothing() {
    let table = project(&[5, 10, 15], 3, &models(false));
    let scheduled = table.column(ModelKind::ScheduledFlatFee).unwrap();
    assert!(!scheduled.enabled);
    assert!(scheduled.monthly.iter().all(|&c| c == 0.0));
    assert!(scheduled.cumulative.iter().all(|&c| c == 0.0));
    assert_eq!(table.enabled_columns().count(), 2);
    for row in table.rows() {
        assert!(row.cost(ModelKind::ScheduledFlatFee).is_none());
    }
}

#[test]
fn rows_carry_month_and_units() {
    let table = project(&[5, 10], 2, &models(true));
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].month, 2);
    assert_eq!(rows[1].onboarded_units, 10);
    let per_unit = rows[1].cost(ModelKind::PerUnit).unwrap();
    assert_eq!(per_unit.monthly, 10_000.0);
    assert_eq!(per_unit.cumulative, 15_000.0);
}

#[test]
fn projecting_twice_gives_identical_tables() {
    let tiers = TierSchedule::new(vec![Tier::new(1, 100.0), Tier::new(3, 250.0)]).unwrap();
    let models = vec![PricingModel::ScheduledFlatFee {
        tiers,
        enabled: true,
    }];
    let onboarding = project_onboarding(9, 7, 2);
    let a = project(&onboarding.series, 7, &models);
    let b = project(&onboarding.series, 7, &models);
    assert_eq!(a, b);
}

#[test]
fn short_series_is_padded_with_last_value() {
    let table = project(&[2, 4], 4, &models(true));
    assert_eq!(table.onboarded_units, vec![2, 4, 4, 4]);
    assert_eq!(table.contract_months(), 4);
}
