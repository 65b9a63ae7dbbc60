//! Data feeds sub-client: public index feeds.

use crate::client::PredictClient;
use crate::domain::data_feed::wire::DataFeedResponse;
use crate::domain::data_feed::DataFeed;
use crate::error::SdkError;
use crate::http::client::not_found_as_none;
use crate::http::Query;

pub struct DataFeeds<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> DataFeeds<'a> {
    /// Get a feed by name (e.g. `"btc_usd"`).
    pub async fn get(&self, name: &str) -> Result<DataFeed, SdkError> {
        let path = format!("/api/v1/data_feeds/{}", urlencoding::encode(name));
        let resp: Option<DataFeedResponse> =
            not_found_as_none(self.client.http.get(&path, &Query::new(), None).await)?;

        let resp =
            resp.ok_or_else(|| SdkError::NotFound(format!("Data feed not found: {}", name)))?;
        Ok(DataFeed::try_from(resp)?)
    }
}
