//! Order domain: exchange orders, the signer seam, placed orders.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

#[cfg(feature = "http")]
pub use client::{OrderOptions, UserOrdersQuery};

use crate::error::SdkError;
use crate::shared::{serde_util, Side, TokenType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Server-side order lifecycle: `open → filled | canceled | expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Open,
    Filled,
    Canceled,
    Expired,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Filled => "filled",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Expired => "expired",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SdkError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(OrderStatus::Open),
            "filled" => Ok(OrderStatus::Filled),
            "canceled" | "cancelled" => Ok(OrderStatus::Canceled),
            "expired" => Ok(OrderStatus::Expired),
            other => Err(SdkError::Validation(format!("Unknown order status '{}'", other))),
        }
    }

    /// No further transitions happen from this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Open)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Exchange orders ─────────────────────────────────────────────────────────

/// The unsigned exchange order carried by a quote.
///
/// Opaque to the SDK: it is handed to the [`OrderSigner`] and sent back
/// unchanged. Amounts stay as the exact integer strings the server issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeOrder {
    pub maker_address: String,
    pub taker_address: String,
    pub fee_recipient_address: String,
    pub sender_address: String,
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub maker_asset_amount: String,
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub taker_asset_amount: String,
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub maker_fee: String,
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub taker_fee: String,
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub expiration_time_seconds: String,
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub salt: String,
    pub maker_asset_data: String,
    pub taker_asset_data: String,
    pub exchange_address: String,
}

/// An exchange order plus the maker's signature over its hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedExchangeOrder {
    #[serde(flatten)]
    pub order: ExchangeOrder,
    pub signature: String,
}

/// Exchange order hashing and signing.
///
/// The hash and signature scheme belong to the exchange contract; the SDK
/// only calls through this trait.
#[async_trait]
pub trait OrderSigner: Send + Sync {
    async fn sign_order(&self, order: &ExchangeOrder) -> Result<SignedExchangeOrder, SdkError>;
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A validated order as last observed from the server.
///
/// `token_amount`/`token_amount_filled` are share units; `price` is ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uid: String,
    pub market_slug: Option<String>,
    pub status: OrderStatus,
    pub side: Side,
    pub token_type: TokenType,
    pub token_amount: Decimal,
    pub token_amount_filled: Decimal,
    pub price: Decimal,
    pub post_only: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    /// Share units still unfilled.
    pub fn remaining(&self) -> Decimal {
        (self.token_amount - self.token_amount_filled).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_status_parse() {
        assert_eq!(OrderStatus::parse("open").unwrap(), OrderStatus::Open);
        assert_eq!(OrderStatus::parse("cancelled").unwrap(), OrderStatus::Canceled);
        assert!(OrderStatus::parse("pending").is_err());
        assert!(OrderStatus::Filled.is_terminal());
        assert!(!OrderStatus::Open.is_terminal());
    }

    #[test]
    fn test_exchange_order_accepts_numeric_amounts() {
        let order: ExchangeOrder = serde_json::from_value(json!({
            "makerAddress": "0xmaker",
            "takerAddress": "0x0000000000000000000000000000000000000000",
            "feeRecipientAddress": "0xfee",
            "senderAddress": "0x0000000000000000000000000000000000000000",
            "makerAssetAmount": 5000000000000000u64,
            "takerAssetAmount": "25000000000000000000",
            "makerFee": "0",
            "takerFee": 0,
            "expirationTimeSeconds": 1577836800,
            "salt": "73262838261946279430987356912649582347582373465",
            "makerAssetData": "0xf47261b0",
            "takerAssetData": "0xf47261b0",
            "exchangeAddress": "0xexchange"
        }))
        .unwrap();
        assert_eq!(order.maker_asset_amount, "5000000000000000");
        assert_eq!(order.taker_fee, "0");
        assert_eq!(order.salt, "73262838261946279430987356912649582347582373465");
    }

    #[test]
    fn test_signed_order_serializes_flat() {
        let signed = SignedExchangeOrder {
            order: ExchangeOrder {
                maker_address: "0xmaker".to_string(),
                salt: "42".to_string(),
                ..ExchangeOrder::default()
            },
            signature: "0xsig".to_string(),
        };
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["makerAddress"], "0xmaker");
        assert_eq!(json["salt"], "42");
        assert_eq!(json["signature"], "0xsig");
        assert!(json.get("order").is_none());
    }

    #[test]
    fn test_order_remaining() {
        let order = Order {
            uid: "o-1".to_string(),
            market_slug: None,
            status: OrderStatus::Open,
            side: Side::Buy,
            token_type: TokenType::Long,
            token_amount: Decimal::from(100),
            token_amount_filled: Decimal::from(40),
            price: Decimal::from(5000),
            post_only: false,
            created_at: None,
            expires_at: None,
        };
        assert_eq!(order.remaining(), Decimal::from(60));
        assert!(order.is_open());
    }
}
