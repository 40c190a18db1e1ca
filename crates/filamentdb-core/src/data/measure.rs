//! Lenient parsing of authored measurement strings.
//!
//! Datasheet values are kept exactly as authored ("26.6 kJ/m²",
//! "50 - 60 ℃, 6 - 12 hours", "/"). When a chart needs a number, the leading
//! numeric token is extracted; anything else is displayed as text.

use regex::Regex;
use std::sync::OnceLock;

/// Strings that mean "not applicable" or "not measured".
const NOT_APPLICABLE: &[&str] = &["n/a", "na", "/", "-", "—"];

fn leading_number_regex() -> &'static Regex {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    LEADING_NUMBER.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d+)?|\.\d+))").expect("invalid leading number regex")
    })
}

/// Whether the string is a not-applicable sentinel (or blank).
pub fn is_not_applicable(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || NOT_APPLICABLE
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
}

/// Parse the leading numeric portion of an authored value.
///
/// Locale-free, `.` decimal point. Returns `None` for sentinels and for
/// strings that do not start with a number (after leading whitespace).
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    if is_not_applicable(raw) {
        return None;
    }
    let caps = leading_number_regex().captures(raw)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}
