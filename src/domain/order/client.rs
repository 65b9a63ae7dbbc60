//! Orders sub-client: create from a quote, cancel, query.
//!
//! Every call here is session-authenticated and goes through
//! [`PredictClient::authenticated`].

use crate::client::PredictClient;
use crate::domain::order::wire::{CreateOrderRequest, OrderResponse};
use crate::domain::order::{Order, OrderStatus};
use crate::domain::quote::Quote;
use crate::error::SdkError;
use crate::http::client::not_found_as_none;
use crate::http::Query;
use crate::shared::Page;

const ORDERS_PATH: &str = "/api/v1/orders";

/// Options for [`Orders::create`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Reject the order instead of matching immediately.
    pub post_only: bool,
}

/// Filters for [`Orders::list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserOrdersQuery {
    /// Market slug.
    pub market: Option<String>,
    pub status: Option<OrderStatus>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl UserOrdersQuery {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .set_opt("market", self.market.as_deref())
            .set_opt("status", self.status.map(|s| s.as_str()))
            .set_opt("page", self.page)
            .set_opt("page_size", self.page_size)
    }
}

pub struct Orders<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> Orders<'a> {
    /// Sign the quote's exchange order and submit it.
    ///
    /// Requires an order signer on the client. Not deduplicated: retrying
    /// after an ambiguous failure may place a second order.
    pub async fn create(&self, quote: &Quote, options: OrderOptions) -> Result<Order, SdkError> {
        let signer = self.client.order_signer.as_ref().ok_or_else(|| {
            SdkError::Configuration("creating an order requires an order signer".to_string())
        })?;

        let signed = signer.sign_order(&quote.order).await?;
        let request = CreateOrderRequest {
            order: &signed,
            quote_uid: &quote.uid,
            post_only: options.post_only,
        };
        let request = &request;

        tracing::debug!(quote = %quote.uid, post_only = options.post_only, "Submitting order");
        let resp: OrderResponse = self
            .client
            .authenticated(move |token| async move {
                self.client.http.post(ORDERS_PATH, request, Some(&token)).await
            })
            .await?;
        Ok(Order::try_from(resp)?)
    }

    /// Cancel an open order. Returns the order in its canceled state.
    pub async fn cancel(&self, uid: &str) -> Result<Order, SdkError> {
        let path = format!("{}/{}", ORDERS_PATH, urlencoding::encode(uid));
        let path = path.as_str();

        let resp: OrderResponse = self
            .client
            .authenticated(move |token| async move {
                self.client.http.delete(path, Some(&token)).await
            })
            .await?;
        Ok(Order::try_from(resp)?)
    }

    /// Get one of the user's orders by uid.
    pub async fn get(&self, uid: &str) -> Result<Order, SdkError> {
        let path = format!("{}/{}", ORDERS_PATH, urlencoding::encode(uid));
        let path = path.as_str();
        let query = Query::new();
        let query = &query;

        let resp: Option<OrderResponse> = not_found_as_none(
            self.client
                .authenticated(move |token| async move {
                    self.client.http.get(path, query, Some(&token)).await
                })
                .await,
        )?;

        let resp = resp.ok_or_else(|| SdkError::NotFound(format!("Order not found: {}", uid)))?;
        Ok(Order::try_from(resp)?)
    }

    /// List the user's orders, one page at a time.
    pub async fn list(&self, query: &UserOrdersQuery) -> Result<Page<Order>, SdkError> {
        let query = query.to_query();
        let query = &query;

        let page: Page<OrderResponse> = self
            .client
            .authenticated(move |token| async move {
                self.client.http.get(ORDERS_PATH, query, Some(&token)).await
            })
            .await?;
        Ok(page.try_map(Order::try_from)?)
    }
}
