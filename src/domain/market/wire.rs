//! Wire types for market responses (REST).
//!
//! Field names are the camelized form of the backend's snake_case keys.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// REST response for a single market.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponse {
    pub uid: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub market_type: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub num_ticks: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub min_price: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub max_price: Option<String>,
    #[serde(default)]
    pub long_token: Option<String>,
    #[serde(default)]
    pub short_token: Option<String>,
    #[serde(default)]
    pub denomination: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub predicted_price: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub last_traded_price: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub final_value: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub ends_at: Option<DateTime<Utc>>,
}
