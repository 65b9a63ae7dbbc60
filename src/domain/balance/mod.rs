//! Balance domain: a user's token balances in one market.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{from_base_units, from_share_units, ScalingError, TokenType};
use rust_decimal::Decimal;

/// Long/short balances are share units; `denomination` is base units.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBalances {
    pub long: Decimal,
    pub short: Decimal,
    pub denomination: Option<Decimal>,
}

impl MarketBalances {
    /// Share units held of one outcome token.
    pub fn token(&self, token_type: TokenType) -> Decimal {
        match token_type {
            TokenType::Long => self.long,
            TokenType::Short => self.short,
        }
    }

    /// Human token amount held of one outcome token.
    pub fn token_amount(
        &self,
        token_type: TokenType,
        num_ticks: Decimal,
    ) -> Result<Decimal, ScalingError> {
        from_share_units(&self.token(token_type).to_string(), num_ticks)
    }

    /// Human denomination balance, if the server reported one.
    pub fn denomination_amount(&self) -> Result<Option<Decimal>, ScalingError> {
        self.denomination
            .map(|units| from_base_units(&units.to_string()))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_human_amounts() {
        let balances = MarketBalances {
            long: Decimal::from_str("5000000000000000").unwrap(),
            short: Decimal::ZERO,
            denomination: Some(Decimal::from_str("12750000000000000000").unwrap()),
        };
        assert_eq!(
            balances.token_amount(TokenType::Long, Decimal::from(10000)).unwrap(),
            Decimal::from(50)
        );
        assert_eq!(
            balances.token_amount(TokenType::Short, Decimal::from(10000)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            balances.denomination_amount().unwrap(),
            Some(Decimal::from_str("12.75").unwrap())
        );
    }
}
