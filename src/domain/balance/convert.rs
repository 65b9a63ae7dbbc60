//! Conversion: MarketBalancesResponse → MarketBalances.

use super::wire;
use super::MarketBalances;
use crate::domain::{ValidationError, Validator};
use rust_decimal::Decimal;

/// The slug only labels validation errors.
impl<'a> TryFrom<(wire::MarketBalancesResponse, &'a str)> for MarketBalances {
    type Error = ValidationError;

    fn try_from(
        (source, slug): (wire::MarketBalancesResponse, &'a str),
    ) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        // A market the user never traded reports no token balances.
        let long = v
            .optional_decimal("longBalance", source.long_balance.as_deref())
            .unwrap_or(Decimal::ZERO);
        let short = v
            .optional_decimal("shortBalance", source.short_balance.as_deref())
            .unwrap_or(Decimal::ZERO);
        let denomination =
            v.optional_decimal("denominationBalance", source.denomination_balance.as_deref());

        v.finish("MarketBalances", slug)?;

        Ok(MarketBalances {
            long,
            short,
            denomination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_balances_default_to_zero() {
        let resp: wire::MarketBalancesResponse = serde_json::from_value(json!({})).unwrap();
        let balances = MarketBalances::try_from((resp, "btc")).unwrap();
        assert_eq!(balances.long, Decimal::ZERO);
        assert_eq!(balances.short, Decimal::ZERO);
        assert!(balances.denomination.is_none());
    }

    #[test]
    fn test_invalid_balance_names_market() {
        let resp: wire::MarketBalancesResponse =
            serde_json::from_value(json!({ "longBalance": "lots" })).unwrap();
        let err = MarketBalances::try_from((resp, "btc")).unwrap_err();
        assert_eq!(err.id, "btc");
    }
}
