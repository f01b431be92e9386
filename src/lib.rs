//! IPO listing core crate.
//!
//! Current implemented scope:
//! - boundary decoding of the backend IPO feed
//! - slug, category, status and GMP normalization
//! - business-priority ordering
//! - heat-map tile buckets, sector inference, filters and snapshots

mod classification;
mod feed;
mod filters;
mod gmp;
mod heatmap;
mod models;
mod observability;
mod priority;
mod report;
mod sector;
mod slug;
mod snapshot;

pub use classification::{
    ipos_by_category, ipos_by_status, normalize_category, normalize_status, parse_category,
    parse_status, record_category, record_status, Category, Status, ALL_CATEGORIES, ALL_STATUSES,
};
pub use feed::{
    decode_feed, load_feed_file, FeedEnvelope, FeedError, FileIpoSource, InMemoryIpoSource,
    IpoSource, DEFAULT_REFRESH_INTERVAL_SECS,
};
pub use filters::{
    apply_filters, available_months, month_key, parse_issue_size, parse_performance,
    parse_sort_order, sort_records, HeatmapFilters, PerformanceFilter, SortOrder,
};
pub use gmp::{format_grouped, parse_gmp, ParsedGmp};
pub use heatmap::{
    bucket_for, classify_tile, tier_for_percent, HeatmapBucket, TileColor, TileSize, TileTier,
};
pub use models::{AiAnalysis, AiRating, IpoRecord, RiskLevel};
pub use observability::{
    init_logging, log_app_start, log_report_rendered, log_source_selected,
    logging_config_from_env, LogFormat, LoggingConfig, LoggingInitError,
};
pub use priority::{parse_issue_date, parse_issue_timestamp, sort_ipos_by_priority, status_priority};
pub use report::{render_text_report, ReportConfig, FEED_PATH_VAR};
pub use sector::{
    available_sectors, infer_sector, matches_sector, matching_sectors, parse_sector, Sector,
};
pub use slug::{find_by_slug, slugify, unique_slugs};
pub use snapshot::{build_heatmap, HeatmapSnapshot, HeatmapTile};
