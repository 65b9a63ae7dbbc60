//! Market domain: market types, scalar ranges, validation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

#[cfg(feature = "http")]
pub use client::MarketsQuery;

use crate::error::SdkError;
use crate::shared::{from_base_units, from_share_units, to_share_units, Address, ScalingError, TokenType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

// ─── MarketType ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketType {
    /// Binary market; long pays out on "yes".
    YesNo,
    /// Market over a numeric range bounded by `minPrice`/`maxPrice`.
    Scalar,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::YesNo => "yesno",
            MarketType::Scalar => "scalar",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SdkError> {
        match s {
            "yesno" => Ok(MarketType::YesNo),
            "scalar" => Ok(MarketType::Scalar),
            other => Err(SdkError::Validation(format!("Unknown market type '{}'", other))),
        }
    }
}

// ─── MarketStatus ────────────────────────────────────────────────────────────

/// Listing filter for [`MarketsQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketStatus {
    Open,
    Resolved,
}

impl MarketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Open => "open",
            MarketStatus::Resolved => "resolved",
        }
    }
}

// ─── Market ──────────────────────────────────────────────────────────────────

/// A validated market.
///
/// Scaled values keep their wire meaning: `min_price`/`max_price` are base
/// units (`10^18`), `predicted_price`/`last_traded_price` are ticks in
/// `[0, num_ticks]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub uid: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub market_type: MarketType,
    pub channel: Option<String>,
    pub index: Option<String>,
    pub num_ticks: Decimal,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub long_token: Address,
    pub short_token: Address,
    pub denomination: Option<String>,
    pub predicted_price: Option<Decimal>,
    pub last_traded_price: Option<Decimal>,
    pub final_value: Option<String>,
    pub result: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl Market {
    pub fn is_scalar(&self) -> bool {
        self.market_type == MarketType::Scalar
    }

    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }

    /// Address of the long or short outcome token.
    pub fn token(&self, token_type: TokenType) -> &Address {
        match token_type {
            TokenType::Long => &self.long_token,
            TokenType::Short => &self.short_token,
        }
    }

    /// Decimal `[min, max]` bounds of a scalar market.
    ///
    /// Fails with [`SdkError::Validation`] when either bound is absent, i.e.
    /// the market is not a scalar market.
    pub fn scalar_range(&self) -> Result<ScalarRange, SdkError> {
        let (min, max) = match (&self.min_price, &self.max_price) {
            (Some(min), Some(max)) => (min, max),
            (min, _) => {
                let missing = if min.is_none() { "minPrice" } else { "maxPrice" };
                return Err(SdkError::Validation(format!(
                    "Market {} has no {}; not a scalar market",
                    self.slug, missing
                )));
            }
        };
        Ok(ScalarRange {
            min: from_base_units(min)?,
            max: from_base_units(max)?,
        })
    }

    /// Human token amount → share units for this market.
    pub fn to_share_units(&self, amount: Decimal) -> Result<String, ScalingError> {
        to_share_units(amount, self.num_ticks)
    }

    /// Share units → human token amount for this market.
    pub fn from_share_units(&self, amount: &str) -> Result<Decimal, ScalingError> {
        from_share_units(amount, self.num_ticks)
    }

    /// A tick price as a fraction of the tick range (`ticks / num_ticks`).
    pub fn price_fraction(&self, ticks: Decimal) -> Result<Decimal, ScalingError> {
        crate::shared::scaling::check_ticks(self.num_ticks)?;
        ticks
            .checked_div(self.num_ticks)
            .ok_or_else(|| ScalingError::Overflow {
                context: format!("{} / {}", ticks, self.num_ticks),
            })
    }
}

// ─── ScalarRange ─────────────────────────────────────────────────────────────

/// Human-scale bounds of a scalar market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ScalarRange {
    pub fn width(&self) -> Decimal {
        self.max - self.min
    }

    /// Map a scalar value onto `[0, 1]` of the range, for use as a human
    /// quote price. Values outside the range map outside `[0, 1]`; quote
    /// creation clamps them.
    pub fn to_fraction(&self, value: Decimal) -> Result<Decimal, SdkError> {
        let width = self.width();
        if width <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "Empty scalar range [{}, {}]",
                self.min, self.max
            )));
        }
        (value - self.min).checked_div(width).ok_or_else(|| {
            ScalingError::Overflow {
                context: format!("({} - {}) / {}", value, self.min, width),
            }
            .into()
        })
    }

    /// Inverse of [`ScalarRange::to_fraction`].
    pub fn from_fraction(&self, fraction: Decimal) -> Decimal {
        self.min + fraction * self.width()
    }
}
