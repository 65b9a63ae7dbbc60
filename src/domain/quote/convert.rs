//! Conversion: QuoteResponse → Quote (TryFrom + validation).

use super::wire;
use super::Quote;
use crate::domain::{ValidationError, Validator};
use crate::shared::{Side, TokenType};

impl TryFrom<wire::QuoteResponse> for Quote {
    type Error = ValidationError;

    fn try_from(source: wire::QuoteResponse) -> Result<Self, Self::Error> {
        let mut v = Validator::new();

        let side = v.required_parse("side", source.side.as_deref(), Side::Buy, str::parse::<Side>);
        let token_type = v.required_parse(
            "tokenType",
            source.token_type.as_deref(),
            TokenType::Long,
            TokenType::parse,
        );
        let token_amount = v.required_decimal("tokenAmount", source.token_amount.as_deref());
        let price = v.required_decimal("price", source.price.as_deref());
        let fee_amount = v.optional_decimal("feeAmount", source.fee_amount.as_deref());
        let order = v.require("order", source.order);

        v.finish("Quote", &source.uid)?;

        Ok(Quote {
            uid: source.uid,
            market_slug: source.market_slug,
            side,
            token_type,
            token_amount,
            price,
            fee_amount,
            order,
            created_at: source.created_at,
            expires_at: source.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldError;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_quote_converts() {
        let resp: wire::QuoteResponse = serde_json::from_value(json!({
            "uid": "q-1",
            "marketSlug": "btc-100k",
            "side": "buy",
            "tokenType": "long",
            "tokenAmount": "5000000000000000",
            "price": 6500,
            "feeAmount": "0",
            "order": {
                "makerAddress": "0xmaker",
                "takerAddress": "0x0",
                "feeRecipientAddress": "0xfee",
                "senderAddress": "0x0",
                "makerAssetAmount": "3250000000000000000",
                "takerAssetAmount": "5000000000000000",
                "makerFee": "0",
                "takerFee": "0",
                "expirationTimeSeconds": "1577836800",
                "salt": "1",
                "makerAssetData": "0x",
                "takerAssetData": "0x",
                "exchangeAddress": "0xexchange"
            },
            "expiresAt": 1577836800000u64
        }))
        .unwrap();

        let quote = Quote::try_from(resp).unwrap();
        assert_eq!(quote.uid, "q-1");
        assert_eq!(quote.price, Decimal::from(6500));
        assert_eq!(quote.order.maker_asset_amount, "3250000000000000000");
        assert_eq!(quote.expires_at.unwrap().timestamp(), 1_577_836_800);
    }

    #[test]
    fn test_quote_without_order_fails() {
        let resp: wire::QuoteResponse = serde_json::from_value(json!({
            "uid": "q-2",
            "side": "buy",
            "tokenType": "long",
            "tokenAmount": "1",
            "price": "1"
        }))
        .unwrap();

        let err = Quote::try_from(resp).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::Missing("order")]);
    }
}
