//! Boundary types for the backend IPO feed.
//!
//! The backend serves loosely typed JSON: the same field may arrive as a
//! string, a number or `null` depending on the record. Everything is folded
//! into `Option<String>` here so downstream normalizers see one shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoRecord {
    #[serde(default, deserialize_with = "loose_name")]
    pub name: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub gmp: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub issue_open_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub issue_close_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub allotment_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub listing_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub price_band: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub lot_size: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub subscription: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub issue_size: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub company_description: Option<String>,
    #[serde(default, deserialize_with = "loose_ai_analysis")]
    pub ai_analysis: Option<AiAnalysis>,
}

impl IpoRecord {
    /// Record with only a name; the remaining fields are left for struct
    /// update syntax.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiRating {
    StrongBuy,
    Buy,
    Hold,
    Avoid,
    #[default]
    Unknown,
}

impl AiRating {
    pub fn from_label(raw: &str) -> Self {
        match label_key(raw).as_str() {
            "STRONG_BUY" => Self::StrongBuy,
            "BUY" => Self::Buy,
            "HOLD" => Self::Hold,
            "AVOID" => Self::Avoid,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl RiskLevel {
    pub fn from_label(raw: &str) -> Self {
        match label_key(raw).as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default)]
    pub rating: AiRating,
    #[serde(default, deserialize_with = "loose_number")]
    pub score: Option<f64>,
    #[serde(default)]
    pub risk: RiskLevel,
    #[serde(default, deserialize_with = "loose_number")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "loose_factors")]
    pub factors: BTreeMap<String, f64>,
}

// Unrecognized labels become `Unknown` instead of failing the record.
impl<'de> Deserialize<'de> for AiRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = value_to_text(Value::deserialize(deserializer)?);
        Ok(raw.as_deref().map(Self::from_label).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = value_to_text(Value::deserialize(deserializer)?);
        Ok(raw.as_deref().map(Self::from_label).unwrap_or_default())
    }
}

fn label_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn loose_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(loose_text(deserializer)?.unwrap_or_default())
}

fn loose_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(value_to_number(&Value::deserialize(deserializer)?))
}

fn loose_factors<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, f64>, D::Error> {
    let factors = match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| value_to_number(value).map(|score| (key.clone(), score)))
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(factors)
}

fn loose_ai_analysis<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<AiAnalysis>, D::Error> {
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}
