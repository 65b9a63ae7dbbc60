//! Markets sub-client: lookup by slug, paginated listing.

use crate::client::PredictClient;
use crate::domain::market::wire::MarketResponse;
use crate::domain::market::{Market, MarketStatus};
use crate::error::SdkError;
use crate::http::client::not_found_as_none;
use crate::http::Query;
use crate::shared::Page;

/// Filters for [`Markets::list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketsQuery {
    pub channel: Option<String>,
    pub status: Option<MarketStatus>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl MarketsQuery {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .set_opt("channel", self.channel.as_deref())
            .set_opt("status", self.status.map(|s| s.as_str()))
            .set_opt("page", self.page)
            .set_opt("page_size", self.page_size)
    }
}

/// Sub-client for market operations. Markets are fetched on every call.
pub struct Markets<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> Markets<'a> {
    /// Get a market by slug.
    ///
    /// Fails with [`SdkError::NotFound`] when the server has no such market.
    pub async fn get(&self, slug: &str) -> Result<Market, SdkError> {
        let path = format!("/api/v1/markets/{}", urlencoding::encode(slug));
        let resp: Option<MarketResponse> =
            not_found_as_none(self.client.http.get(&path, &Query::new(), None).await)?;

        let resp = resp.ok_or_else(|| SdkError::NotFound(format!("Market not found: {}", slug)))?;
        Ok(Market::try_from(resp)?)
    }

    /// List markets, one page at a time.
    pub async fn list(&self, query: &MarketsQuery) -> Result<Page<Market>, SdkError> {
        let page: Page<MarketResponse> = self
            .client
            .http
            .get("/api/v1/markets", &query.to_query(), None)
            .await?;
        Ok(page.try_map(Market::try_from)?)
    }
}
