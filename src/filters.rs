//! Heat-map listing filters and sort orders.

use std::cmp::{Ordering, Reverse};
use std::sync::OnceLock;

use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classification::{record_category, record_status, Category, Status};
use crate::gmp::parse_gmp;
use crate::models::IpoRecord;
use crate::priority::{parse_issue_date, sort_ipos_by_priority};
use crate::sector::{matches_sector, Sector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceFilter {
    /// GMP percentage of 50 or more.
    Hot,
    /// Non-negative but below 50.
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Priority,
    GmpDesc,
    Name,
    IssueSizeDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapFilters {
    pub category: Option<Category>,
    pub status: Option<Status>,
    /// `YYYY-MM` of the issue open date.
    pub month: Option<String>,
    pub sector: Option<Sector>,
    pub performance: Option<PerformanceFilter>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl PerformanceFilter {
    pub fn matches(self, percent: f64) -> bool {
        match self {
            PerformanceFilter::Hot => percent >= 50.0,
            PerformanceFilter::Positive => (0.0..50.0).contains(&percent),
            PerformanceFilter::Negative => percent < 0.0,
        }
    }
}

pub fn parse_performance(input: &str) -> Option<PerformanceFilter> {
    match input.trim().to_ascii_lowercase().as_str() {
        "hot" => Some(PerformanceFilter::Hot),
        "positive" => Some(PerformanceFilter::Positive),
        "negative" => Some(PerformanceFilter::Negative),
        _ => None,
    }
}

pub fn parse_sort_order(input: &str) -> Option<SortOrder> {
    match input.trim().to_ascii_lowercase().as_str() {
        "priority" => Some(SortOrder::Priority),
        "gmp" | "gmp_desc" => Some(SortOrder::GmpDesc),
        "name" => Some(SortOrder::Name),
        "size" | "issue_size_desc" => Some(SortOrder::IssueSizeDesc),
        _ => None,
    }
}

/// `YYYY-MM` of the record's issue open date, if it parses.
pub fn month_key(record: &IpoRecord) -> Option<String> {
    record
        .issue_open_date
        .as_deref()
        .and_then(parse_issue_date)
        .map(|date| format!("{:04}-{:02}", date.year(), date.month()))
}

/// First number in the issue-size text (`"₹1,200.50 Cr"` -> 1200.5), 0 if none.
pub fn parse_issue_size(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let without_commas = raw.replace(',', "");
    size_regex()
        .find(&without_commas)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn percent_of(record: &IpoRecord) -> f64 {
    parse_gmp(record.gmp.as_deref()).percent_value()
}

fn keep(record: &IpoRecord, filters: &HeatmapFilters) -> bool {
    if let Some(category) = filters.category {
        if record_category(record) != category {
            return false;
        }
    }
    if let Some(status) = filters.status {
        if record_status(record) != status {
            return false;
        }
    }
    if let Some(month) = filters.month.as_deref() {
        if month_key(record).as_deref() != Some(month.trim()) {
            return false;
        }
    }
    if let Some(sector) = filters.sector {
        if !matches_sector(record, sector) {
            return false;
        }
    }
    if let Some(performance) = filters.performance {
        if !performance.matches(percent_of(record)) {
            return false;
        }
    }
    true
}

pub fn sort_records(records: &[IpoRecord], order: SortOrder) -> Vec<IpoRecord> {
    match order {
        SortOrder::Priority => sort_ipos_by_priority(records),
        SortOrder::GmpDesc => {
            let mut sorted = records.to_vec();
            sorted.sort_by(|a, b| {
                percent_of(b)
                    .partial_cmp(&percent_of(a))
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });
            sorted
        }
        SortOrder::Name => {
            let mut sorted = records.to_vec();
            sorted.sort_by_cached_key(|record| record.name.to_lowercase());
            sorted
        }
        SortOrder::IssueSizeDesc => {
            let mut sorted = records.to_vec();
            sorted.sort_by(|a, b| {
                parse_issue_size(b.issue_size.as_deref())
                    .partial_cmp(&parse_issue_size(a.issue_size.as_deref()))
                    .unwrap_or(Ordering::Equal)
            });
            sorted
        }
    }
}

pub fn apply_filters(records: &[IpoRecord], filters: &HeatmapFilters) -> Vec<IpoRecord> {
    let kept: Vec<IpoRecord> = records
        .iter()
        .filter(|record| keep(record, filters))
        .cloned()
        .collect();
    sort_records(&kept, filters.sort)
}

/// Distinct open-date months across `records`, newest first.
pub fn available_months(records: &[IpoRecord]) -> Vec<String> {
    let mut months: Vec<String> = records.iter().filter_map(month_key).collect();
    months.sort_by_key(|month| Reverse(month.clone()));
    months.dedup();
    months
}

fn size_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(\.\d+)?").expect("size pattern is valid"))
}
