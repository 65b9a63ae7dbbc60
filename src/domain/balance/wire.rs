//! Wire types for balance responses (REST).

use crate::shared::serde_util;
use serde::Deserialize;

/// REST response of `GET /api/v1/markets/{slug}/balances`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketBalancesResponse {
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub long_balance: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub short_balance: Option<String>,
    #[serde(default, with = "serde_util::option_string_or_number")]
    pub denomination_balance: Option<String>,
}
