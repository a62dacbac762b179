//! Catalog record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One video metadata entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub name: String,
    pub duration: i64,
    pub description: String,
    pub date_created: DateTime<Utc>,
    pub thumbnail: String,
    /// Hierarchy encoded as a delimited path, e.g. "Junior->English->Culture->USA"
    pub folder: String,
    pub tags: Vec<String>,
}
