//! Conversions: orderbook wire types → BookEntry / Fill.

use super::wire;
use super::{BookEntry, Fill};
use crate::domain::{ValidationError, Validator};
use crate::shared::Side;

impl TryFrom<wire::OrderBookEntryResponse> for BookEntry {
    type Error = ValidationError;

    fn try_from(source: wire::OrderBookEntryResponse) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        let price = v.required_decimal("price", source.price.as_deref());
        let token_amount = v.required_decimal("tokenAmount", source.token_amount.as_deref());

        let id = source.price.as_deref().unwrap_or("?");
        v.finish("BookEntry", id)?;

        Ok(BookEntry {
            price,
            token_amount,
        })
    }
}

impl TryFrom<wire::OrderFillResponse> for Fill {
    type Error = ValidationError;

    fn try_from(source: wire::OrderFillResponse) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        let side = v.required_parse("side", source.side.as_deref(), Side::Buy, str::parse::<Side>);
        let price = v.required_decimal("price", source.price.as_deref());
        let token_amount = v.required_decimal("tokenAmount", source.token_amount.as_deref());

        v.finish("Fill", source.uid.as_deref().unwrap_or("?"))?;

        Ok(Fill {
            uid: source.uid,
            side,
            price,
            token_amount,
            created_at: source.created_at,
        })
    }
}
