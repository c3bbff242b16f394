use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub province: Option<String>,
    pub district: Option<String>,
    // The geodatabase export names this column "legal_t".
    #[serde(alias = "legal_t")]
    pub legal_status: Option<String>,
    pub zone_code: Option<String>,
}

/// Construction legality classification. Anything the source does not spell
/// exactly as one of the four known values collapses to `Unknown`, which is
/// counted in `total` and in no other bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalStatus {
    Legal,
    Illegal,
    Existing,
    Demolished,
    Unknown,
}

impl LegalStatus {
    pub fn from_field(s: &str) -> Self {
        match s {
            "Legal" => LegalStatus::Legal,
            "Illegal" => LegalStatus::Illegal,
            "Existing" => LegalStatus::Existing,
            "Demolished" => LegalStatus::Demolished,
            _ => LegalStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub province: String,
    pub district: String,
    pub status: LegalStatus,
    pub zone_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NationalStats {
    pub total: usize,
    pub legal: usize,
    pub illegal: usize,
    pub existing: usize,
    pub demolished: usize,
    pub compliance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvinceStats {
    pub total: usize,
    pub legal: usize,
    pub illegal: usize,
    pub compliance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Tabled)]
pub struct DistrictStats {
    #[tabled(rename = "Province")]
    pub province: String,
    #[tabled(rename = "District")]
    pub district: String,
    #[tabled(rename = "Total")]
    pub total: usize,
    #[tabled(rename = "Legal")]
    pub legal: usize,
    #[tabled(rename = "Illegal")]
    pub illegal: usize,
    #[tabled(rename = "Compliance")]
    pub compliance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Tabled)]
pub struct ZoneStats {
    #[tabled(rename = "Zone")]
    pub code: String,
    #[tabled(rename = "Illegal")]
    pub illegal: usize,
    #[tabled(rename = "Color")]
    pub color: String,
}

/// The snapshot written for the dashboard. Field order here is the key order
/// in the JSON output; `provinces` is a `BTreeMap` so keys serialize sorted.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsReport {
    pub updated: String,
    pub national: NationalStats,
    pub provinces: BTreeMap<String, ProvinceStats>,
    pub districts: Vec<DistrictStats>,
    pub zoning: Vec<ZoneStats>,
}
