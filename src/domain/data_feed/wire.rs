//! Wire types for data feed responses (REST).

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataFeedEntryResponse {
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub value: Option<String>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// REST response of `GET /api/v1/data_feeds/{name}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataFeedResponse {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub denomination: Option<String>,
    #[serde(default)]
    pub entries: Vec<DataFeedEntryResponse>,
}
