//! Conversion: OrderResponse → Order (TryFrom + validation).

use super::wire;
use super::{Order, OrderStatus};
use crate::domain::{ValidationError, Validator};
use crate::shared::{Side, TokenType};
use rust_decimal::Decimal;

impl TryFrom<wire::OrderResponse> for Order {
    type Error = ValidationError;

    fn try_from(source: wire::OrderResponse) -> Result<Self, Self::Error> {
        let mut v = Validator::new();

        let status = v.required_parse(
            "status",
            source.status.as_deref(),
            OrderStatus::Open,
            OrderStatus::parse,
        );
        let side = v.required_parse("side", source.side.as_deref(), Side::Buy, str::parse::<Side>);
        let token_type = v.required_parse(
            "tokenType",
            source.token_type.as_deref(),
            TokenType::Long,
            TokenType::parse,
        );
        let token_amount = v.required_decimal("tokenAmount", source.token_amount.as_deref());
        let price = v.required_decimal("price", source.price.as_deref());
        let token_amount_filled = v
            .optional_decimal("tokenAmountFilled", source.token_amount_filled.as_deref())
            .unwrap_or(Decimal::ZERO);

        v.finish("Order", &source.uid)?;

        Ok(Order {
            uid: source.uid,
            market_slug: source.market_slug,
            status,
            side,
            token_type,
            token_amount,
            token_amount_filled,
            price,
            post_only: source.post_only.unwrap_or(false),
            created_at: source.created_at,
            expires_at: source.expires_at,
        })
    }
}
