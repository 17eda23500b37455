//! 계산 결과를 터미널용 텍스트로 만든다. 반올림은 여기서만 한다.

use std::fmt::Write;

use crate::config::UnitOfMeasure;
use crate::i18n::{keys, Translator};
use crate::pricing::ModelKind;
use crate::projection::CostTable;
use crate::scenario::{Evaluation, Scenario};

/// 천 단위 구분 기호를 넣고 소수점 없이 표시한다. 예: 1680000 → "1,680,000"
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {currency}", format_amount(value))
}

pub fn model_label(tr: &Translator, kind: ModelKind, unit: UnitOfMeasure) -> String {
    match kind {
        ModelKind::PerUnit => tr.fill(keys::MODEL_PER_UNIT, &[("unit", unit.label().into())]),
        ModelKind::ScheduledFlatFee => tr.t(keys::MODEL_SCHEDULED_FLAT_FEE).to_string(),
        ModelKind::SingleFlatFee => tr.t(keys::MODEL_SINGLE_FLAT_FEE).to_string(),
    }
}

/// 온보딩 기간, TCO, 실효 단가, 절감률 요약.
pub fn render_summary(
    tr: &Translator,
    scenario: &Scenario,
    unit: UnitOfMeasure,
    evaluation: &Evaluation,
) -> String {
    let c = &scenario.contract;
    let currency = scenario.currency.as_str();
    let mut out = String::new();

    let _ = writeln!(out, "=== {} ===", tr.t(keys::REPORT_TITLE));
    let _ = writeln!(
        out,
        "{}",
        tr.fill(
            keys::REPORT_CONTRACT,
            &[
                ("total", c.total_units.to_string()),
                ("units", unit.plural()),
                ("months", c.contract_months.to_string()),
                ("rate", c.units_onboarded_per_month.to_string()),
                ("currency", currency.to_string()),
            ],
        )
    );
    let _ = writeln!(
        out,
        "{}",
        tr.fill(
            keys::REPORT_ONBOARDING_DURATION,
            &[("months", evaluation.onboarding.duration_months.to_string())],
        )
    );
    if !evaluation.onboarding.completes_within_contract() {
        let _ = writeln!(out, "{}", tr.t(keys::REPORT_ONBOARDING_INCOMPLETE));
    }

    let summary = &evaluation.summary;
    let width = summary
        .models
        .iter()
        .map(|m| model_label(tr, m.kind, unit).chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "\n-- {} --", tr.t(keys::HEADING_TCO));
    for m in &summary.models {
        let label = model_label(tr, m.kind, unit);
        let _ = writeln!(out, "{label:<width$}  {:>18}", format_money(m.tco, currency));
    }

    let _ = writeln!(
        out,
        "\n-- {} --",
        tr.fill(keys::HEADING_EFFECTIVE_PRICE, &[("unit", unit.label().into())])
    );
    for m in &summary.models {
        let label = model_label(tr, m.kind, unit);
        let _ = writeln!(
            out,
            "{label:<width$}  {:>18}",
            format_money(m.effective_price_per_unit, currency)
        );
    }

    let _ = writeln!(out, "\n-- {} --", tr.t(keys::HEADING_SAVINGS));
    if summary.savings.is_empty() {
        let _ = writeln!(out, "{}", tr.t(keys::SAVINGS_NONE));
    }
    for s in &summary.savings {
        let _ = writeln!(
            out,
            "{}",
            tr.fill(
                keys::SAVING_LINE,
                &[
                    ("cheaper", model_label(tr, s.cheaper, unit)),
                    ("baseline", model_label(tr, s.baseline, unit)),
                    ("percent", format!("{:.1}", s.percent)),
                ],
            )
        );
    }
    out
}

/// 월별 상세 표. 비활성 요금제 열은 생략한다.
pub fn render_monthly(tr: &Translator, unit: UnitOfMeasure, table: &CostTable) -> String {
    let mut headers = vec![
        tr.t(keys::COLUMN_MONTH).to_string(),
        tr.fill(keys::COLUMN_ONBOARDED, &[("units", unit.plural())]),
    ];
    let kinds: Vec<ModelKind> = table.enabled_columns().map(|c| c.kind).collect();
    for &kind in &kinds {
        headers.push(model_label(tr, kind, unit));
    }
    for &kind in &kinds {
        headers.push(tr.fill(keys::COLUMN_CUMULATIVE, &[("model", model_label(tr, kind, unit))]));
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.onboarded_units.len());
    for row in table.rows() {
        let mut cells = vec![row.month.to_string(), row.onboarded_units.to_string()];
        cells.extend(row.costs.iter().map(|c| format_amount(c.monthly)));
        cells.extend(row.costs.iter().map(|c| format_amount(c.cumulative)));
        rows.push(cells);
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "\n-- {} --", tr.t(keys::HEADING_MONTHLY));
    push_line(&mut out, &headers, &widths);
    for r in &rows {
        push_line(&mut out, r, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:>w$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  "));
}
