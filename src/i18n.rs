use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_CONTRACT: &str = "report.contract";
    pub const REPORT_ONBOARDING_DURATION: &str = "report.onboarding_duration";
    pub const REPORT_ONBOARDING_INCOMPLETE: &str = "report.onboarding_incomplete";

    pub const MODEL_PER_UNIT: &str = "model.per_unit";
    pub const MODEL_SCHEDULED_FLAT_FEE: &str = "model.scheduled_flat_fee";
    pub const MODEL_SINGLE_FLAT_FEE: &str = "model.single_flat_fee";

    pub const HEADING_TCO: &str = "heading.tco";
    pub const HEADING_EFFECTIVE_PRICE: &str = "heading.effective_price";
    pub const HEADING_SAVINGS: &str = "heading.savings";
    pub const HEADING_MONTHLY: &str = "heading.monthly";

    pub const SAVING_LINE: &str = "savings.line";
    pub const SAVINGS_NONE: &str = "savings.none";

    pub const COLUMN_MONTH: &str = "column.month";
    pub const COLUMN_ONBOARDED: &str = "column.onboarded";
    pub const COLUMN_CUMULATIVE: &str = "column.cumulative";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(locales/ 등)의 `<code>.toml`로 내장 문자열을 덮어쓴다.
    /// 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역을 반환한다.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키를 점으로 이은 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        REPORT_TITLE => "Pricing Model Simulator",
        REPORT_CONTRACT => {
            "{total} {units} over {months} months, {rate} {units} added per month ({currency})"
        }
        REPORT_ONBOARDING_DURATION => "Calculated onboarding duration: {months} months",
        REPORT_ONBOARDING_INCOMPLETE => {
            "Onboarding does not complete within the contract period."
        }
        MODEL_PER_UNIT => "Pay-Per-{unit}",
        MODEL_SCHEDULED_FLAT_FEE => "Scheduled Flat Fee",
        MODEL_SINGLE_FLAT_FEE => "Single Flat Fee",
        HEADING_TCO => "Total Cost Through Contract",
        HEADING_EFFECTIVE_PRICE => "Effective Cost of Contract per {unit}",
        HEADING_SAVINGS => "Savings",
        HEADING_MONTHLY => "Detailed Data Breakdown",
        SAVING_LINE => "{cheaper} vs {baseline}: -{percent}%",
        SAVINGS_NONE => "No model undercuts another.",
        COLUMN_MONTH => "Month",
        COLUMN_ONBOARDED => "Onboarded {units}",
        COLUMN_CUMULATIVE => "Cumulative {model}",
        _ => "",
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        REPORT_TITLE => "요금제 시뮬레이터",
        REPORT_CONTRACT => "{total} {units}, 계약 {months}개월, 월 {rate} {units} 온보딩 ({currency})",
        REPORT_ONBOARDING_DURATION => "온보딩 소요 기간: {months}개월",
        REPORT_ONBOARDING_INCOMPLETE => "계약 기간 내에 온보딩이 끝나지 않습니다.",
        MODEL_SCHEDULED_FLAT_FEE => "구간별 고정 요금",
        MODEL_SINGLE_FLAT_FEE => "단일 고정 요금",
        HEADING_TCO => "계약 기간 총비용",
        HEADING_EFFECTIVE_PRICE => "{unit}당 실효 비용",
        HEADING_SAVINGS => "절감률",
        HEADING_MONTHLY => "월별 상세",
        SAVING_LINE => "{cheaper} / {baseline} 대비: -{percent}%",
        SAVINGS_NONE => "다른 요금제보다 저렴한 요금제가 없습니다.",
        COLUMN_MONTH => "월",
        COLUMN_ONBOARDED => "온보딩 {units}",
        COLUMN_CUMULATIVE => "누적 {model}",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::MODEL_PER_UNIT), "Pay-Per-{unit}");
        assert_eq!(tr.t(keys::HEADING_SAVINGS), "절감률");
    }

    #[test]
    fn fill_replaces_placeholders() {
        let tr = Translator::new("en");
        let s = tr.fill(keys::MODEL_PER_UNIT, &[("unit", "Vessel".into())]);
        assert_eq!(s, "Pay-Per-Vessel");
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn pack_overrides_nested_keys() {
        let map = parse_toml_to_map("[heading]\ntco = \"TCO\"\n").unwrap();
        assert_eq!(map.get("heading.tco").map(String::as_str), Some("TCO"));
    }
}
