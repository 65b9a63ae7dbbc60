//! Wire types for quote requests and responses (REST).

use crate::domain::market::Market;
use crate::domain::order::ExchangeOrder;
use crate::domain::quote::{normalize_amount, normalize_price, QuoteParams};
use crate::error::SdkError;
use crate::shared::{serde_util, Side, TokenType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/quotes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateQuoteRequest {
    pub market_slug: String,
    pub side: Side,
    pub token_type: TokenType,
    pub token_amount: String,
    pub price: String,
    #[serde(rename = "type")]
    pub order_type: String,
}

impl CreateQuoteRequest {
    /// Normalize `params` against `market`'s tick range.
    pub fn new(market: &Market, params: &QuoteParams) -> Result<Self, SdkError> {
        Ok(Self {
            market_slug: market.slug.clone(),
            side: params.side,
            token_type: params.token_type,
            token_amount: normalize_amount(params.amount, market.num_ticks)?,
            price: normalize_price(params.price, market.num_ticks)?,
            order_type: "limit".to_string(),
        })
    }
}

/// REST response for a created quote.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub uid: String,
    #[serde(default)]
    pub market_slug: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub token_amount: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub price: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub fee_amount: Option<String>,
    #[serde(default)]
    pub order: Option<ExchangeOrder>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub expires_at: Option<DateTime<Utc>>,
}
