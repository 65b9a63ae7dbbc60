//! Quotes sub-client: request a priced quote for a market.

use crate::client::PredictClient;
use crate::domain::market::Market;
use crate::domain::quote::wire::{CreateQuoteRequest, QuoteResponse};
use crate::domain::quote::{Quote, QuoteParams};
use crate::error::SdkError;

pub struct Quotes<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> Quotes<'a> {
    /// Create a limit quote on `market`.
    ///
    /// Amount and price are normalized against the market's `numTicks`
    /// before anything is sent (see [`crate::domain::quote`]).
    pub async fn create(&self, market: &Market, params: QuoteParams) -> Result<Quote, SdkError> {
        let request = CreateQuoteRequest::new(market, &params)?;
        tracing::debug!(
            market = %market.slug,
            side = %params.side,
            token_type = %params.token_type,
            token_amount = %request.token_amount,
            price = %request.price,
            "Creating quote"
        );
        let request = &request;

        let resp: QuoteResponse = self
            .client
            .authenticated(move |token| async move {
                self.client.http.post("/api/v1/quotes", request, Some(&token)).await
            })
            .await?;
        Ok(Quote::try_from(resp)?)
    }
}
