//! Grey market premium parsing.
//!
//! The backend packs the rupee premium and an optional percentage into one
//! string, e.g. `"150 (+45.5%)"`. Parsing never fails: anything unreadable
//! becomes a zero premium.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const RUPEE: char = '₹';
const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedGmp {
    pub amount: f64,
    pub amount_text: String,
    pub percent_text: Option<String>,
    pub is_positive: bool,
}

impl ParsedGmp {
    /// First signed decimal inside `percent_text`, `0.0` when there is none.
    pub fn percent_value(&self) -> f64 {
        self.percent_text
            .as_deref()
            .and_then(|text| percent_regex().find(text))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

pub fn parse_gmp(raw: Option<&str>) -> ParsedGmp {
    let raw = raw.unwrap_or("0").trim();
    let (amount_part, percent_part) = match raw.split_once('(') {
        Some((amount, percent)) => (amount, Some(percent)),
        None => (raw, None),
    };

    let amount = parse_leading_number(amount_part);
    let is_positive = amount >= 0.0;

    // Negative amounts get no sign at all; only `+` is ever prefixed.
    let amount_text = format!(
        "{}{}{}",
        if is_positive { "+" } else { "" },
        RUPEE,
        format_grouped(amount.abs())
    );

    let percent_text = percent_part
        .map(|part| part.trim().trim_end_matches(')').trim())
        .filter(|part| !part.is_empty())
        .map(|part| format!("({part})"));

    ParsedGmp {
        amount,
        amount_text,
        percent_text,
        is_positive,
    }
}

/// Keeps `[0-9.-]` and reads the longest numeric prefix of what is left.
fn parse_leading_number(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    amount_regex()
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// en-US grouping: `,` every three integer digits, up to three fraction
/// digits with trailing zeros dropped. Ties round away from zero.
pub fn format_grouped(value: f64) -> String {
    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)").expect("amount pattern is valid"))
}

fn percent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-+]?\d+(\.\d+)?").expect("percent pattern is valid"))
}
