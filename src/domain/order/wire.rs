//! Wire types for order requests and responses (REST).

use super::SignedExchangeOrder;
use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// REST response for a single order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub uid: String,
    #[serde(default)]
    pub market_slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub token_amount: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub token_amount_filled: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub price: Option<String>,
    #[serde(default)]
    pub post_only: Option<bool>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v1/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest<'a> {
    pub order: &'a SignedExchangeOrder,
    pub quote_uid: &'a str,
    pub post_only: bool,
}
