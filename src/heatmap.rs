//! Heat-map tile buckets.
//!
//! Settled issues (closed, allotted, listed) always get the neutral tile.
//! Everything else is bucketed on the GMP percentage:
//!
//! | percent       | tier  | grid | colour      |
//! |---------------|-------|------|-------------|
//! | >= 100        | Tier1 | 3x3  | deep green  |
//! | [50, 100)     | Tier2 | 2x2  | green       |
//! | [20, 50)      | Tier3 | 2x1  | amber       |
//! | [0, 20)       | Tier4 | 1x1  | light amber |
//! | < 0           | Tier5 | 1x1  | red         |

use serde::{Deserialize, Serialize};

use crate::classification::{record_status, Status};
use crate::gmp::{parse_gmp, ParsedGmp};
use crate::models::IpoRecord;

const BASE_TILE_HEIGHT_PX: u32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileTier {
    Neutral,
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileColor {
    Gray,
    DeepGreen,
    Green,
    Amber,
    LightAmber,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSize {
    pub cols: u8,
    pub rows: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapBucket {
    pub tier: TileTier,
    pub size: TileSize,
    pub color: TileColor,
    pub min_height_px: u32,
}

impl TileTier {
    pub fn bucket(self) -> HeatmapBucket {
        let (cols, rows, color) = match self {
            TileTier::Neutral => (1, 1, TileColor::Gray),
            TileTier::Tier1 => (3, 3, TileColor::DeepGreen),
            TileTier::Tier2 => (2, 2, TileColor::Green),
            TileTier::Tier3 => (2, 1, TileColor::Amber),
            TileTier::Tier4 => (1, 1, TileColor::LightAmber),
            TileTier::Tier5 => (1, 1, TileColor::Red),
        };

        HeatmapBucket {
            tier: self,
            size: TileSize { cols, rows },
            color,
            min_height_px: BASE_TILE_HEIGHT_PX * u32::from(rows),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TileTier::Neutral => "neutral",
            TileTier::Tier1 => "tier1",
            TileTier::Tier2 => "tier2",
            TileTier::Tier3 => "tier3",
            TileTier::Tier4 => "tier4",
            TileTier::Tier5 => "tier5",
        }
    }
}

impl TileColor {
    pub fn css_class(self) -> &'static str {
        match self {
            TileColor::Gray => "bg-gray-300",
            TileColor::DeepGreen => "bg-emerald-700",
            TileColor::Green => "bg-emerald-500",
            TileColor::Amber => "bg-amber-500",
            TileColor::LightAmber => "bg-amber-200",
            TileColor::Red => "bg-red-500",
        }
    }
}

impl HeatmapBucket {
    pub fn size_class(&self) -> String {
        format!("col-span-{} row-span-{}", self.size.cols, self.size.rows)
    }

    pub fn color_class(&self) -> &'static str {
        self.color.css_class()
    }
}

pub fn tier_for_percent(percent: f64) -> TileTier {
    if percent >= 100.0 {
        TileTier::Tier1
    } else if percent >= 50.0 {
        TileTier::Tier2
    } else if percent >= 20.0 {
        TileTier::Tier3
    } else if percent >= 0.0 {
        TileTier::Tier4
    } else {
        TileTier::Tier5
    }
}

pub fn bucket_for(status: Status, gmp: &ParsedGmp) -> HeatmapBucket {
    if status.is_settled() {
        return TileTier::Neutral.bucket();
    }
    tier_for_percent(gmp.percent_value()).bucket()
}

pub fn classify_tile(record: &IpoRecord) -> HeatmapBucket {
    bucket_for(record_status(record), &parse_gmp(record.gmp.as_deref()))
}
