//! Balances sub-client: authenticated per-market balances.

use crate::client::PredictClient;
use crate::domain::balance::wire::MarketBalancesResponse;
use crate::domain::balance::MarketBalances;
use crate::error::SdkError;
use crate::http::Query;

pub struct Balances<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> Balances<'a> {
    /// The authenticated user's balances in market `slug`.
    pub async fn get(&self, slug: &str) -> Result<MarketBalances, SdkError> {
        let path = format!("/api/v1/markets/{}/balances", urlencoding::encode(slug));
        let path = path.as_str();
        let query = Query::new();
        let query = &query;

        let resp: MarketBalancesResponse = self
            .client
            .authenticated(move |token| async move {
                self.client.http.get(path, query, Some(&token)).await
            })
            .await?;
        Ok(MarketBalances::try_from((resp, slug))?)
    }
}
