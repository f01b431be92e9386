//! Business-priority ordering of IPO listings.
//!
//! Ordering keys:
//! - status rank: ongoing, upcoming, closed, allotted, listed
//! - issue close date, most recent first; missing or unparseable dates count
//!   as the Unix epoch and therefore sink to the end of their status group

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::classification::{record_status, Status};
use crate::models::IpoRecord;

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d %b %Y",
    "%b %d, %Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d %b, %Y",
    "%Y/%m/%d",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

pub fn status_priority(status: Status) -> u32 {
    match status {
        Status::Ongoing => 1,
        Status::Upcoming => 2,
        Status::Closed => 3,
        Status::Allotted => 4,
        Status::Listed => 5,
    }
}

/// Lenient parse of the date strings the backend emits. Naive values are
/// taken as UTC.
pub fn parse_issue_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub fn parse_issue_date(raw: &str) -> Option<NaiveDate> {
    parse_issue_timestamp(raw).map(|dt| dt.date_naive())
}

fn close_ts_ms(record: &IpoRecord) -> i64 {
    record
        .issue_close_date
        .as_deref()
        .and_then(parse_issue_timestamp)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

pub fn sort_ipos_by_priority(records: &[IpoRecord]) -> Vec<IpoRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_cached_key(|record| {
        (
            status_priority(record_status(record)),
            Reverse(close_ts_ms(record)),
        )
    });
    sorted
}
