//! Orderbooks sub-client: public bids, asks and fills of a market token.

use crate::client::PredictClient;
use crate::domain::orderbook::wire::{OrderBookEntryResponse, OrderFillResponse};
use crate::domain::orderbook::{BookEntry, BookSide, Fill};
use crate::error::SdkError;
use crate::http::Query;
use crate::shared::{Page, TokenType};

/// Sub-client for orderbook reads. Always fresh, never cached.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> Orderbooks<'a> {
    pub async fn bids(
        &self,
        slug: &str,
        token_type: TokenType,
        page: Option<u32>,
    ) -> Result<Page<BookEntry>, SdkError> {
        self.levels(slug, token_type, BookSide::Bids, page).await
    }

    pub async fn asks(
        &self,
        slug: &str,
        token_type: TokenType,
        page: Option<u32>,
    ) -> Result<Page<BookEntry>, SdkError> {
        self.levels(slug, token_type, BookSide::Asks, page).await
    }

    /// Recent fills, newest first.
    pub async fn fills(
        &self,
        slug: &str,
        token_type: TokenType,
        page: Option<u32>,
    ) -> Result<Page<Fill>, SdkError> {
        let path = token_path(slug, token_type, "order_fills");
        let resp: Page<OrderFillResponse> = self
            .client
            .http
            .get(&path, &Query::new().set_opt("page", page), None)
            .await?;
        Ok(resp.try_map(Fill::try_from)?)
    }

    async fn levels(
        &self,
        slug: &str,
        token_type: TokenType,
        side: BookSide,
        page: Option<u32>,
    ) -> Result<Page<BookEntry>, SdkError> {
        let path = token_path(slug, token_type, side.as_str());
        let resp: Page<OrderBookEntryResponse> = self
            .client
            .http
            .get(&path, &Query::new().set_opt("page", page), None)
            .await?;
        Ok(resp.try_map(BookEntry::try_from)?)
    }
}

fn token_path(slug: &str, token_type: TokenType, resource: &str) -> String {
    format!(
        "/api/v1/markets/{}/{}/{}",
        urlencoding::encode(slug),
        token_type.as_str(),
        resource
    )
}
