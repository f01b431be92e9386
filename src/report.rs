//! Command line and text rendering for the `ipo_heatmap_report` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::classification::{
    parse_category, parse_status, Category, Status, ALL_CATEGORIES, ALL_STATUSES,
};
use crate::filters::{
    parse_performance, parse_sort_order, HeatmapFilters, PerformanceFilter, SortOrder,
};
use crate::sector::{parse_sector, Sector};
use crate::snapshot::HeatmapSnapshot;

pub const FEED_PATH_VAR: &str = "IPOGMP_FEED_PATH";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "ipo_heatmap_report",
    about = "Render the IPO grey market premium heat-map from a feed file",
    version
)]
pub struct ReportConfig {
    /// Backend feed envelope (JSON)
    #[arg(env = FEED_PATH_VAR, value_name = "FEED")]
    pub feed_path: PathBuf,

    /// Print the snapshot as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// mainboard or sme
    #[arg(long, value_parser = category_arg)]
    pub category: Option<Category>,

    /// upcoming, ongoing, closed, listed or allotted
    #[arg(long, value_parser = status_arg)]
    pub status: Option<Status>,

    /// Issue open month
    #[arg(long, value_name = "YYYY-MM", value_parser = month_arg)]
    pub month: Option<String>,

    /// Sector label, e.g. Technology or FMCG
    #[arg(long, value_parser = sector_arg)]
    pub sector: Option<Sector>,

    /// hot, positive or negative
    #[arg(long, value_parser = performance_arg)]
    pub performance: Option<PerformanceFilter>,

    /// priority, gmp, name or size
    #[arg(long, default_value = "priority", value_parser = sort_arg)]
    pub sort: SortOrder,
}

impl ReportConfig {
    pub fn filters(&self) -> HeatmapFilters {
        HeatmapFilters {
            category: self.category,
            status: self.status,
            month: self.month.clone(),
            sector: self.sector,
            performance: self.performance,
            sort: self.sort,
        }
    }
}

fn category_arg(raw: &str) -> Result<Category, String> {
    parse_category(raw).ok_or_else(|| {
        let names = ALL_CATEGORIES.map(Category::as_str);
        format!("expected one of: {}", names.join(", "))
    })
}

fn status_arg(raw: &str) -> Result<Status, String> {
    parse_status(raw).ok_or_else(|| {
        let names = ALL_STATUSES.map(Status::as_str);
        format!("expected one of: {}", names.join(", "))
    })
}

fn sector_arg(raw: &str) -> Result<Sector, String> {
    parse_sector(raw).ok_or_else(|| format!("unknown sector {raw:?}"))
}

fn performance_arg(raw: &str) -> Result<PerformanceFilter, String> {
    parse_performance(raw).ok_or_else(|| "expected one of: hot, positive, negative".to_string())
}

fn sort_arg(raw: &str) -> Result<SortOrder, String> {
    parse_sort_order(raw).ok_or_else(|| "expected one of: priority, gmp, name, size".to_string())
}

fn month_arg(raw: &str) -> Result<String, String> {
    let month = raw.trim();
    if is_month_key(month) {
        Ok(month.to_string())
    } else {
        Err("expected YYYY-MM".to_string())
    }
}

fn is_month_key(value: &str) -> bool {
    match value.split_once('-') {
        Some((year, month)) => {
            year.len() == 4
                && year.chars().all(|c| c.is_ascii_digit())
                && month.len() == 2
                && matches!(month.parse::<u32>(), Ok(1..=12))
        }
        None => false,
    }
}

pub fn render_text_report(snapshot: &HeatmapSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<32} {:<10} {:<14} {:<12} {}\n",
        "TIER", "NAME", "STATUS", "SECTOR", "GMP", "GMP %"
    ));

    for tile in &snapshot.tiles {
        out.push_str(&format!(
            "{:<8} {:<32} {:<10} {:<14} {:<12} {}\n",
            tile.bucket.tier.label(),
            truncate(&tile.name, 32),
            tile.status.as_str(),
            tile.sector.label(),
            tile.gmp_amount_text,
            tile.gmp_percent_text.as_deref().unwrap_or("-")
        ));
    }

    out.push_str(&format!("\nTiles: {}\n", snapshot.tiles.len()));
    let sectors: Vec<&str> = snapshot.sectors.iter().map(|s| s.label()).collect();
    out.push_str(&format!("Sectors: {}\n", sectors.join(", ")));
    out.push_str(&format!("Months: {}\n", snapshot.months.join(", ")));
    out
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    use clap::error::ErrorKind;

    static FEED_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn parse(args: &[&str]) -> Result<ReportConfig, clap::Error> {
        let argv = std::iter::once("ipo_heatmap_report").chain(args.iter().copied());
        ReportConfig::try_parse_from(argv)
    }

    #[test]
    fn parses_path_and_filters() {
        let cfg = parse(&[
            "feed.json",
            "--category",
            "SME",
            "--status",
            "ongoing",
            "--month",
            "2025-01",
            "--sector",
            "fmcg",
            "--performance",
            "hot",
            "--sort",
            "gmp",
            "--json",
        ])
        .unwrap();

        assert_eq!(cfg.feed_path, PathBuf::from("feed.json"));
        assert!(cfg.json);

        let filters = cfg.filters();
        assert_eq!(filters.category, Some(Category::Sme));
        assert_eq!(filters.status, Some(Status::Ongoing));
        assert_eq!(filters.month.as_deref(), Some("2025-01"));
        assert_eq!(filters.sector, Some(Sector::Fmcg));
        assert_eq!(filters.performance, Some(PerformanceFilter::Hot));
        assert_eq!(filters.sort, SortOrder::GmpDesc);
    }

    #[test]
    fn feed_path_falls_back_to_env() {
        let _guard = FEED_ENV_LOCK.lock().expect("env lock should not be poisoned");
        let previous = env::var(FEED_PATH_VAR).ok();

        env::set_var(FEED_PATH_VAR, "/tmp/ipos.json");
        let from_env = parse(&[]).unwrap();
        let positional = parse(&["local.json"]).unwrap();

        env::remove_var(FEED_PATH_VAR);
        let missing = parse(&[]).unwrap_err();

        if let Some(value) = previous {
            env::set_var(FEED_PATH_VAR, value);
        }

        assert_eq!(from_env.feed_path, PathBuf::from("/tmp/ipos.json"));
        assert_eq!(from_env.filters(), HeatmapFilters::default());
        assert_eq!(positional.feed_path, PathBuf::from("local.json"));
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_bad_values_and_unknown_flags() {
        for (flag, value) in [
            ("--month", "2025-13"),
            ("--month", "25-01"),
            ("--category", "bonds"),
            ("--status", "paused"),
            ("--sector", "mining"),
            ("--performance", "lukewarm"),
            ("--sort", "random"),
        ] {
            let err = parse(&["f.json", flag, value]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{flag} {value}");
        }

        assert_eq!(
            parse(&["f.json", "--verbose"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["f.json", "--status"]).is_err());
    }

    #[test]
    fn month_keys_are_strict() {
        assert!(is_month_key("2025-01"));
        assert!(is_month_key("1999-12"));
        assert!(!is_month_key("2025-1"));
        assert!(!is_month_key("2025-00"));
        assert!(!is_month_key("202501"));
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate("short", 32), "short");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
