//! Wire types for orderbook responses (REST).

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One price level of `GET /markets/{slug}/{token}/bids|asks`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookEntryResponse {
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub price: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub token_amount: Option<String>,
}

/// One fill of `GET /markets/{slug}/{token}/order_fills`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderFillResponse {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub price: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub token_amount: Option<String>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub created_at: Option<DateTime<Utc>>,
}
