//! Keyword-based sector inference.
//!
//! This is a best-effort heuristic over the company description and name,
//! not authoritative sector data. Sets are scanned in declaration order and
//! the first hit wins for [`infer_sector`].

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::IpoRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Finance,
    Healthcare,
    #[serde(rename = "FMCG")]
    Fmcg,
    Energy,
    Infrastructure,
    Retail,
    Manufacturing,
    Logistics,
    Education,
    Automotive,
    Others,
}

const SECTOR_KEYWORDS: [(Sector, &[&str]); 11] = [
    (
        Sector::Technology,
        &[
            "technology",
            "tech",
            "software",
            "it services",
            "digital",
            "cloud",
            "saas",
            "semiconductor",
            "electronics",
            "internet",
        ],
    ),
    (
        Sector::Finance,
        &[
            "bank",
            "finance",
            "financial",
            "nbfc",
            "insurance",
            "lending",
            "loan",
            "capital",
            "investment",
        ],
    ),
    (
        Sector::Healthcare,
        &[
            "health",
            "hospital",
            "pharma",
            "medical",
            "diagnostic",
            "clinic",
            "biotech",
            "life sciences",
        ],
    ),
    (
        Sector::Fmcg,
        &[
            "fmcg",
            "consumer goods",
            "food",
            "beverage",
            "dairy",
            "snack",
            "personal care",
        ],
    ),
    (
        Sector::Energy,
        &[
            "energy",
            "power",
            "solar",
            "renewable",
            "oil",
            "gas",
            "petroleum",
            "wind",
        ],
    ),
    (
        Sector::Infrastructure,
        &[
            "infrastructure",
            "infra",
            "construction",
            "cement",
            "real estate",
            "realty",
            "epc",
            "highway",
        ],
    ),
    (
        Sector::Retail,
        &[
            "retail",
            "store",
            "e-commerce",
            "ecommerce",
            "fashion",
            "apparel",
            "jewel",
        ],
    ),
    (
        Sector::Manufacturing,
        &[
            "manufactur",
            "industrial",
            "steel",
            "chemical",
            "machinery",
            "metal",
            "textile",
        ],
    ),
    (
        Sector::Logistics,
        &[
            "logistics",
            "shipping",
            "transport",
            "warehous",
            "supply chain",
            "freight",
            "courier",
        ],
    ),
    (
        Sector::Education,
        &["education", "edtech", "school", "learning", "coaching"],
    ),
    (
        Sector::Automotive,
        &[
            "automotive",
            "automobile",
            "auto component",
            "vehicle",
            "tyre",
            "motor",
        ],
    ),
];

impl Sector {
    pub fn label(self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Finance => "Finance",
            Sector::Healthcare => "Healthcare",
            Sector::Fmcg => "FMCG",
            Sector::Energy => "Energy",
            Sector::Infrastructure => "Infrastructure",
            Sector::Retail => "Retail",
            Sector::Manufacturing => "Manufacturing",
            Sector::Logistics => "Logistics",
            Sector::Education => "Education",
            Sector::Automotive => "Automotive",
            Sector::Others => "Others",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        SECTOR_KEYWORDS
            .iter()
            .find(|(sector, _)| *sector == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn parse_sector(input: &str) -> Option<Sector> {
    let input = input.trim();
    SECTOR_KEYWORDS
        .iter()
        .map(|(sector, _)| *sector)
        .chain(std::iter::once(Sector::Others))
        .find(|sector| sector.label().eq_ignore_ascii_case(input))
}

fn haystack(record: &IpoRecord) -> String {
    format!(
        "{} {}",
        record.company_description.as_deref().unwrap_or_default(),
        record.name
    )
    .to_lowercase()
}

fn hits(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

pub fn infer_sector(record: &IpoRecord) -> Sector {
    let text = haystack(record);
    SECTOR_KEYWORDS
        .iter()
        .find(|(_, keywords)| hits(&text, keywords))
        .map(|(sector, _)| *sector)
        .unwrap_or(Sector::Others)
}

/// Every sector whose keywords appear, in declaration order; `[Others]` when
/// none do.
pub fn matching_sectors(record: &IpoRecord) -> Vec<Sector> {
    let text = haystack(record);
    let found: Vec<Sector> = SECTOR_KEYWORDS
        .iter()
        .filter(|(_, keywords)| hits(&text, keywords))
        .map(|(sector, _)| *sector)
        .collect();

    if found.is_empty() {
        vec![Sector::Others]
    } else {
        found
    }
}

pub fn matches_sector(record: &IpoRecord, sector: Sector) -> bool {
    let text = haystack(record);
    match sector {
        Sector::Others => !SECTOR_KEYWORDS
            .iter()
            .any(|(_, keywords)| hits(&text, keywords)),
        other => hits(&text, other.keywords()),
    }
}

/// Sector filter options for a listing: union of matches, in enum order.
pub fn available_sectors(records: &[IpoRecord]) -> Vec<Sector> {
    records
        .iter()
        .flat_map(matching_sectors)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipo(name: &str, description: &str) -> IpoRecord {
        IpoRecord {
            company_description: Some(description.to_string()),
            ..IpoRecord::named(name)
        }
    }

    #[test]
    fn first_matching_set_wins() {
        let record = ipo("Paytech Lending", "Digital lending platform for MSMEs");
        assert_eq!(infer_sector(&record), Sector::Technology);
        assert_eq!(
            matching_sectors(&record),
            vec![Sector::Technology, Sector::Finance]
        );
        assert!(matches_sector(&record, Sector::Finance));
        assert!(!matches_sector(&record, Sector::Others));
    }

    #[test]
    fn name_alone_can_classify() {
        let record = IpoRecord::named("Sunrise Hospitals Ltd");
        assert_eq!(infer_sector(&record), Sector::Healthcare);
    }

    #[test]
    fn no_hit_falls_back_to_others() {
        let record = ipo("Zeta Holdings", "Diversified holding company");
        assert_eq!(infer_sector(&record), Sector::Others);
        assert_eq!(matching_sectors(&record), vec![Sector::Others]);
        assert!(matches_sector(&record, Sector::Others));
        assert!(!matches_sector(&record, Sector::Energy));
    }

    #[test]
    fn available_sectors_are_deduplicated_and_ordered() {
        let records = vec![
            ipo("Green Watt", "Solar power developer"),
            ipo("Zeta Holdings", "Diversified holding company"),
            ipo("Volt Energy", "Wind energy"),
            ipo("ByteWorks", "Enterprise software"),
        ];

        assert_eq!(
            available_sectors(&records),
            vec![Sector::Technology, Sector::Energy, Sector::Others]
        );
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(parse_sector("fmcg"), Some(Sector::Fmcg));
        assert_eq!(parse_sector(" Others "), Some(Sector::Others));
        assert_eq!(parse_sector("Space"), None);
        assert_eq!(Sector::Fmcg.to_string(), "FMCG");
    }
}
