//! Conversion: MarketResponse → Market (TryFrom + validation).

use super::wire;
use super::{Market, MarketType};
use crate::domain::{ValidationError, Validator};
use crate::shared::Address;
use rust_decimal::Decimal;

impl TryFrom<wire::MarketResponse> for Market {
    type Error = ValidationError;

    fn try_from(source: wire::MarketResponse) -> Result<Self, Self::Error> {
        let mut v = Validator::new();

        let slug = v.require("slug", source.slug);
        let name = v.require("name", source.name);
        let market_type = v.required_parse(
            "type",
            source.market_type.as_deref(),
            MarketType::YesNo,
            MarketType::parse,
        );

        let num_ticks = v.required_decimal("numTicks", source.num_ticks.as_deref());
        if let Some(raw) = source.num_ticks.as_deref() {
            if num_ticks <= Decimal::ZERO || !num_ticks.fract().is_zero() {
                v.invalid("numTicks", raw, "must be a positive integer");
            }
        }

        for (field, raw) in [("minPrice", &source.min_price), ("maxPrice", &source.max_price)] {
            if let Some(raw) = raw {
                v.decimal(field, raw);
            }
        }

        let long_token = Address::new(v.require("longToken", source.long_token));
        let short_token = Address::new(v.require("shortToken", source.short_token));
        let predicted_price = v.optional_decimal("predictedPrice", source.predicted_price.as_deref());
        let last_traded_price =
            v.optional_decimal("lastTradedPrice", source.last_traded_price.as_deref());

        v.finish("Market", &source.uid)?;

        Ok(Market {
            uid: source.uid,
            slug,
            name,
            description: source.description,
            market_type,
            channel: source.channel,
            index: source.index,
            num_ticks,
            min_price: source.min_price,
            max_price: source.max_price,
            long_token,
            short_token,
            denomination: source.denomination,
            predicted_price,
            last_traded_price,
            final_value: source.final_value,
            result: source.result,
            created_at: source.created_at,
            ends_at: source.ends_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldError;
    use serde_json::json;

    fn response(overrides: serde_json::Value) -> wire::MarketResponse {
        let mut base = json!({
            "uid": "4f1c",
            "slug": "eth-price-2019",
            "name": "ETH price at end of 2019",
            "type": "scalar",
            "channel": "crypto",
            "numTicks": 10000,
            "minPrice": "12750000000000000000",
            "maxPrice": "14980000000000000000",
            "longToken": "0x1111111111111111111111111111111111111111",
            "shortToken": "0x2222222222222222222222222222222222222222",
            "lastTradedPrice": "4200",
            "createdAt": 1546300800000u64,
            "endsAt": 1577836800000u64
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, val) in extra {
                base.insert(k.clone(), val.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_market_converts() {
        let market = Market::try_from(response(json!({}))).unwrap();
        assert_eq!(market.slug, "eth-price-2019");
        assert_eq!(market.market_type, MarketType::Scalar);
        assert_eq!(market.num_ticks, Decimal::from(10000));
        assert_eq!(market.last_traded_price, Some(Decimal::from(4200)));
        assert_eq!(market.min_price.as_deref(), Some("12750000000000000000"));
        assert_eq!(market.ends_at.unwrap().timestamp(), 1_577_836_800);
    }

    #[test]
    fn test_yesno_market_has_no_scalar_range() {
        let market = Market::try_from(response(json!({
            "type": "yesno",
            "minPrice": null,
            "maxPrice": null
        })))
        .unwrap();
        assert!(!market.is_scalar());
        assert!(market.scalar_range().is_err());
    }

    #[test]
    fn test_market_missing_fields_reported_together() {
        let err = Market::try_from(response(json!({
            "slug": null,
            "numTicks": null,
            "longToken": null
        })))
        .unwrap_err();
        assert_eq!(err.id, "4f1c");
        assert!(err.errors.contains(&FieldError::Missing("slug")));
        assert!(err.errors.contains(&FieldError::Missing("numTicks")));
        assert!(err.errors.contains(&FieldError::Missing("longToken")));
    }

    #[test]
    fn test_market_rejects_non_positive_ticks() {
        let err = Market::try_from(response(json!({ "numTicks": "0" }))).unwrap_err();
        assert!(err.to_string().contains("numTicks"));

        let err = Market::try_from(response(json!({ "numTicks": "10.5" }))).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_market_rejects_unknown_type() {
        let err = Market::try_from(response(json!({ "type": "categorical" }))).unwrap_err();
        assert!(err.to_string().contains("categorical"));
    }
}
