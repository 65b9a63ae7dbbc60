//! Orderbook domain: price levels and fills of one outcome token.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Which half of the book to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSide {
    Bids,
    Asks,
}

impl BookSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookSide::Bids => "bids",
            BookSide::Asks => "asks",
        }
    }
}

/// An aggregated price level. `price` is ticks, `token_amount` share units.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry {
    pub price: Decimal,
    pub token_amount: Decimal,
}

/// A matched trade on a market token.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub uid: Option<String>,
    pub side: Side,
    pub price: Decimal,
    pub token_amount: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}

/// Best (highest) bid among `entries`.
pub fn best_bid(entries: &[BookEntry]) -> Option<&BookEntry> {
    entries.iter().max_by(|a, b| a.price.cmp(&b.price))
}

/// Best (lowest) ask among `entries`.
pub fn best_ask(entries: &[BookEntry]) -> Option<&BookEntry> {
    entries.iter().min_by(|a, b| a.price.cmp(&b.price))
}
