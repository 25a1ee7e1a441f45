use serde::{Deserialize, Serialize};

use super::MuseumObject;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsInfo {
    #[serde(rename = "totalrecordsperquery")]
    pub total_records_per_query: u64,
    #[serde(rename = "totalrecords")]
    pub total_records: u64,
    pub pages: u64,
    pub page: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultSet {
    pub info: ResultsInfo,
    pub records: Vec<MuseumObject>,
}
