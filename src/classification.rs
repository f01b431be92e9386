//! Category and status normalization for backend free text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::IpoRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mainboard,
    Sme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Upcoming,
    Ongoing,
    Closed,
    Listed,
    Allotted,
}

pub const ALL_CATEGORIES: [Category; 2] = [Category::Mainboard, Category::Sme];
pub const ALL_STATUSES: [Status; 5] = [
    Status::Upcoming,
    Status::Ongoing,
    Status::Closed,
    Status::Listed,
    Status::Allotted,
];

// Checked top to bottom; backend strings like "Closed and Listed" hit several.
const STATUS_MATCHERS: [(Status, &[&str]); 5] = [
    (Status::Listed, &["listed"]),
    (Status::Allotted, &["allot"]),
    (Status::Ongoing, &["open", "ongoing", "live"]),
    (Status::Closed, &["close"]),
    (Status::Upcoming, &["upcoming"]),
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mainboard => "mainboard",
            Category::Sme => "sme",
        }
    }
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Ongoing => "ongoing",
            Status::Closed => "closed",
            Status::Listed => "listed",
            Status::Allotted => "allotted",
        }
    }

    /// Closed, allotted and listed issues no longer take bids.
    pub fn is_settled(self) -> bool {
        matches!(self, Status::Closed | Status::Listed | Status::Allotted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn normalize_category(raw: Option<&str>) -> Category {
    let lowered = raw.unwrap_or_default().trim().to_lowercase();
    if lowered.contains("sme") {
        Category::Sme
    } else {
        Category::Mainboard
    }
}

pub fn normalize_status(raw: Option<&str>) -> Status {
    let lowered = raw.unwrap_or_default().trim().to_lowercase();
    STATUS_MATCHERS
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(status, _)| *status)
        .unwrap_or(Status::Upcoming)
}

pub fn record_category(record: &IpoRecord) -> Category {
    normalize_category(record.category.as_deref())
}

pub fn record_status(record: &IpoRecord) -> Status {
    normalize_status(record.status.as_deref())
}

pub fn ipos_by_category(records: &[IpoRecord], category: Category) -> Vec<IpoRecord> {
    records
        .iter()
        .filter(|record| record_category(record) == category)
        .cloned()
        .collect()
}

pub fn ipos_by_status(records: &[IpoRecord], status: Status) -> Vec<IpoRecord> {
    records
        .iter()
        .filter(|record| record_status(record) == status)
        .cloned()
        .collect()
}

pub fn parse_category(input: &str) -> Option<Category> {
    ALL_CATEGORIES
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(input.trim()))
}

pub fn parse_status(input: &str) -> Option<Status> {
    ALL_STATUSES
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(input.trim()))
}
