//! Quote domain: priced trade intents and price/amount normalization.
//!
//! A quote request carries integer wire values only:
//!
//! ```text
//! token_amount = round(amount * 10^18 / numTicks)        (human amount)
//! price        = round(clamp(price * numTicks, 0, numTicks)) (human price)
//! ```
//!
//! A human price is a fraction of the tick range (`0.65` on a 10000-tick
//! market is `6500`). Scalar markets map values to that fraction through
//! [`ScalarRange::to_fraction`](crate::domain::market::ScalarRange::to_fraction).
//! Rounding is midpoint away from zero.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::order::ExchangeOrder;
use crate::shared::scaling::{check_ticks, integer_string, round_to_integer, share_units_exact};
use crate::shared::{ScalingError, Side, TokenType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

// ─── QuoteValue ──────────────────────────────────────────────────────────────

/// An amount or price as given by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteValue {
    /// Human scale; converted relative to the market's `numTicks`.
    Human(Decimal),
    /// Already in wire units (share units or ticks); only clamped/rounded.
    Scaled(Decimal),
}

impl From<Decimal> for QuoteValue {
    fn from(value: Decimal) -> Self {
        QuoteValue::Human(value)
    }
}

/// Token amount in share units, rounded to an integer string.
pub fn normalize_amount(amount: QuoteValue, num_ticks: Decimal) -> Result<String, ScalingError> {
    let exact = match amount {
        QuoteValue::Human(value) => share_units_exact(value, num_ticks)?,
        QuoteValue::Scaled(value) => value,
    };
    Ok(integer_string(round_to_integer(exact)))
}

/// Price in ticks, clamped into `[0, numTicks]` and rounded to an integer
/// string.
pub fn normalize_price(price: QuoteValue, num_ticks: Decimal) -> Result<String, ScalingError> {
    check_ticks(num_ticks)?;
    if !num_ticks.fract().is_zero() {
        return Err(ScalingError::InvalidTicks(num_ticks.to_string()));
    }

    let ticks = match price {
        // An out-of-range product clamps to the bound on its side.
        QuoteValue::Human(fraction) => match fraction.checked_mul(num_ticks) {
            Some(ticks) => ticks,
            None if fraction.is_sign_negative() => Decimal::ZERO,
            None => num_ticks,
        },
        QuoteValue::Scaled(ticks) => ticks,
    };
    let clamped = ticks.max(Decimal::ZERO).min(num_ticks);
    Ok(integer_string(round_to_integer(clamped)))
}

// ─── QuoteParams ─────────────────────────────────────────────────────────────

/// Input to [`Quotes::create`](client::Quotes::create).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteParams {
    pub side: Side,
    pub token_type: TokenType,
    pub amount: QuoteValue,
    pub price: QuoteValue,
}

impl QuoteParams {
    pub fn new(
        side: Side,
        token_type: TokenType,
        amount: impl Into<QuoteValue>,
        price: impl Into<QuoteValue>,
    ) -> Self {
        Self {
            side,
            token_type,
            amount: amount.into(),
            price: price.into(),
        }
    }

    pub fn buy(token_type: TokenType, amount: impl Into<QuoteValue>, price: impl Into<QuoteValue>) -> Self {
        Self::new(Side::Buy, token_type, amount, price)
    }

    pub fn sell(token_type: TokenType, amount: impl Into<QuoteValue>, price: impl Into<QuoteValue>) -> Self {
        Self::new(Side::Sell, token_type, amount, price)
    }
}

// ─── Quote ───────────────────────────────────────────────────────────────────

/// A server-priced trade proposal. Consumed by
/// [`Orders::create`](crate::domain::order::client::Orders::create).
///
/// `token_amount` is share units, `price` is ticks. The server stops
/// accepting the quote after `expires_at`; the SDK does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub uid: String,
    pub market_slug: Option<String>,
    pub side: Side,
    pub token_type: TokenType,
    pub token_amount: Decimal,
    pub price: Decimal,
    pub fee_amount: Option<Decimal>,
    pub order: ExchangeOrder,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at <= now).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_amount_human() {
        let n = dec("10000");
        assert_eq!(normalize_amount(QuoteValue::Human(dec("50")), n).unwrap(), "5000000000000000");
        assert_eq!(
            normalize_amount(QuoteValue::Human(dec("0.5")), n).unwrap(),
            "50000000000000"
        );
    }

    #[test]
    fn test_normalize_amount_scaled_rounds_half_up() {
        let n = dec("10000");
        assert_eq!(normalize_amount(QuoteValue::Scaled(dec("123.5")), n).unwrap(), "124");
        assert_eq!(normalize_amount(QuoteValue::Scaled(dec("123.4")), n).unwrap(), "123");
    }

    #[test]
    fn test_normalize_price_human_fraction() {
        let n = dec("10000");
        assert_eq!(normalize_price(QuoteValue::Human(dec("0.65")), n).unwrap(), "6500");
        assert_eq!(normalize_price(QuoteValue::Human(dec("0.00005")), n).unwrap(), "1");
    }

    #[test]
    fn test_normalize_price_clamps() {
        let n = dec("10000");
        assert_eq!(normalize_price(QuoteValue::Human(dec("1.2")), n).unwrap(), "10000");
        assert_eq!(normalize_price(QuoteValue::Human(dec("-0.3")), n).unwrap(), "0");
        assert_eq!(normalize_price(QuoteValue::Scaled(dec("10000.4")), n).unwrap(), "10000");
        assert_eq!(normalize_price(QuoteValue::Scaled(dec("-1")), n).unwrap(), "0");
    }

    #[test]
    fn test_normalize_price_saturates_on_overflow() {
        let n = dec("10000");
        assert_eq!(normalize_price(QuoteValue::Human(Decimal::MAX), n).unwrap(), "10000");
        assert_eq!(normalize_price(QuoteValue::Human(Decimal::MIN), n).unwrap(), "0");
        assert_eq!(normalize_price(QuoteValue::Scaled(Decimal::MAX), n).unwrap(), "10000");
        assert_eq!(normalize_price(QuoteValue::Scaled(Decimal::MIN), n).unwrap(), "0");
    }

    #[test]
    fn test_normalize_price_scaled_rounds_half_up() {
        let n = dec("10000");
        assert_eq!(normalize_price(QuoteValue::Scaled(dec("2500.5")), n).unwrap(), "2501");
        assert_eq!(normalize_price(QuoteValue::Scaled(dec("2500.49")), n).unwrap(), "2500");
    }

    #[test]
    fn test_normalize_price_rejects_bad_ticks() {
        assert!(matches!(
            normalize_price(QuoteValue::Human(Decimal::ONE), Decimal::ZERO),
            Err(ScalingError::InvalidTicks(_))
        ));
        assert!(matches!(
            normalize_price(QuoteValue::Human(Decimal::ONE), dec("10.5")),
            Err(ScalingError::InvalidTicks(_))
        ));
    }

    #[test]
    fn test_quote_expiry() {
        let now = Utc::now();
        let quote = Quote {
            uid: "q".to_string(),
            market_slug: None,
            side: Side::Buy,
            token_type: TokenType::Long,
            token_amount: Decimal::ONE,
            price: Decimal::ONE,
            fee_amount: None,
            order: ExchangeOrder::default(),
            created_at: None,
            expires_at: Some(now),
        };
        assert!(quote.is_expired_at(now));
        assert!(!quote.is_expired_at(now - chrono::Duration::seconds(1)));
    }

    proptest! {
        #[test]
        fn prop_price_always_within_tick_range(
            mantissa in any::<i64>(),
            scale in 0u32..=10,
            ticks in 1u32..=1_000_000,
            human in any::<bool>(),
        ) {
            let value = Decimal::new(mantissa, scale);
            let n = Decimal::from(ticks);
            let price = if human { QuoteValue::Human(value) } else { QuoteValue::Scaled(value) };

            let wire = normalize_price(price, n);
            prop_assert!(wire.is_ok(), "{:?} failed: {:?}", price, wire);
            let p = Decimal::from_str(&wire.unwrap()).unwrap();
            prop_assert!(p >= Decimal::ZERO && p <= n);
            prop_assert!(p.fract().is_zero());
        }
    }
}
