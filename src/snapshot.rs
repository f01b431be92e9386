//! Render-ready heat-map snapshot: one tile per filtered record plus the
//! option lists for the filter controls.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classification::{record_category, record_status, Category, Status};
use crate::filters::{apply_filters, available_months, HeatmapFilters};
use crate::gmp::parse_gmp;
use crate::heatmap::{bucket_for, HeatmapBucket};
use crate::models::IpoRecord;
use crate::sector::{available_sectors, infer_sector, Sector};
use crate::slug::unique_slugs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapTile {
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub status: Status,
    pub sector: Sector,
    pub gmp_amount_text: String,
    pub gmp_percent_text: Option<String>,
    pub gmp_percent: f64,
    pub subscription: Option<String>,
    pub bucket: HeatmapBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSnapshot {
    pub tiles: Vec<HeatmapTile>,
    pub sectors: Vec<Sector>,
    pub months: Vec<String>,
}

impl HeatmapTile {
    pub fn from_record(record: &IpoRecord, slug: String) -> Self {
        let status = record_status(record);
        let gmp = parse_gmp(record.gmp.as_deref());
        let gmp_percent = gmp.percent_value();
        let bucket = bucket_for(status, &gmp);

        Self {
            slug,
            name: record.name.clone(),
            category: record_category(record),
            status,
            sector: infer_sector(record),
            gmp_amount_text: gmp.amount_text,
            gmp_percent_text: gmp.percent_text,
            gmp_percent,
            subscription: record.subscription.clone(),
            bucket,
        }
    }
}

pub fn build_heatmap(records: &[IpoRecord], filters: &HeatmapFilters) -> HeatmapSnapshot {
    let kept = apply_filters(records, filters);
    let names: Vec<&str> = kept.iter().map(|record| record.name.as_str()).collect();
    let tiles: Vec<HeatmapTile> = kept
        .iter()
        .zip(unique_slugs(&names))
        .map(|(record, slug)| HeatmapTile::from_record(record, slug))
        .collect();

    info!(
        component = "heatmap",
        event = "heatmap.built",
        input_records = records.len(),
        tiles = tiles.len()
    );

    HeatmapSnapshot {
        tiles,
        sectors: available_sectors(records),
        months: available_months(records),
    }
}
