//! High-level client: `PredictClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session holder and the single
//! authenticated-call wrapper every sub-client goes through.

use crate::auth::client::Auth;
use crate::auth::{MessageSigner, SessionStore, SigningIdentity};
use crate::domain::balance::client::Balances;
use crate::domain::data_feed::client::DataFeeds;
use crate::domain::market::client::Markets;
use crate::domain::order::client::Orders;
use crate::domain::order::OrderSigner;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::quote::client::Quotes;
use crate::error::SdkError;
use crate::http::{run_with_reauth, PredictHttp, RetryConfig};
use crate::shared::Address;

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::balance::client::Balances as BalancesClient;
pub use crate::domain::data_feed::client::DataFeeds as DataFeedsClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the predict SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.orders()`, etc.
///
/// Clones share one session holder; separately built clients never do
/// unless they are given the same [`SessionStore`].
#[derive(Clone)]
pub struct PredictClient {
    pub(crate) http: PredictHttp,
    pub(crate) session: Arc<SessionStore>,
    pub(crate) identity: Option<SigningIdentity>,
    pub(crate) order_signer: Option<Arc<dyn OrderSigner>>,
    pub(crate) retry: RetryConfig,
}

impl PredictClient {
    pub fn builder() -> PredictClientBuilder {
        PredictClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    pub fn data_feeds(&self) -> DataFeeds<'_> {
        DataFeeds { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// The session holder, for sharing with another client.
    pub fn session_store(&self) -> Arc<SessionStore> {
        self.session.clone()
    }

    // ── Authenticated calls ──────────────────────────────────────────────

    /// Run `op` with a bearer token, authenticating first if there is no
    /// session and re-authenticating on expiry per [`RetryConfig`].
    pub(crate) async fn authenticated<T, Op, Fut>(&self, op: Op) -> Result<T, SdkError>
    where
        Op: FnMut(String) -> Fut,
        Fut: Future<Output = Result<T, SdkError>>,
    {
        let auth = self.auth();
        let auth = &auth;
        let token = auth.current_or_new_token().await?;
        run_with_reauth(&self.retry, token, op, move || auth.fresh_token()).await
    }
}

impl fmt::Debug for PredictClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictClient")
            .field("base_url", &self.http.base_url())
            .field("identity", &self.identity)
            .field("order_signer", &self.order_signer.is_some())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PredictClientBuilder {
    base_url: String,
    timeout: Duration,
    identity: Option<SigningIdentity>,
    order_signer: Option<Arc<dyn OrderSigner>>,
    retry: RetryConfig,
    session_store: Option<Arc<SessionStore>>,
    session_token: Option<String>,
}

impl Default for PredictClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            identity: None,
            order_signer: None,
            retry: RetryConfig::default(),
            session_store: None,
            session_token: None,
        }
    }
}

impl PredictClientBuilder {
    /// Builder seeded from the environment.
    ///
    /// Reads `PREDICT_API_URL` for the base URL and, with the `native-auth`
    /// feature, `PREDICT_PRIVATE_KEY` for a local signing wallet. Unset
    /// variables keep the defaults.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(crate::network::API_URL_ENV) {
            if !url.trim().is_empty() {
                builder = builder.base_url(url.trim());
            }
        }

        #[cfg(feature = "native-auth")]
        if let Ok(key) = std::env::var(crate::network::PRIVATE_KEY_ENV) {
            if !key.trim().is_empty() {
                let wallet = crate::auth::native::LocalWallet::from_private_key(&key)?;
                builder = builder.wallet(wallet);
            }
        }

        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The wallet address to authenticate as and the signer for it.
    pub fn signing_identity(
        mut self,
        address: impl Into<Address>,
        signer: Arc<dyn MessageSigner>,
    ) -> Self {
        self.identity = Some(SigningIdentity::new(address, signer));
        self
    }

    /// Sign sessions with a local private-key wallet.
    #[cfg(feature = "native-auth")]
    pub fn wallet(mut self, wallet: crate::auth::native::LocalWallet) -> Self {
        self.identity = Some(wallet.into_identity());
        self
    }

    /// Exchange-order signer used by `orders().create(..)`.
    pub fn order_signer(mut self, signer: Arc<dyn OrderSigner>) -> Self {
        self.order_signer = Some(signer);
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Resume a previously established session.
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Use an existing session holder (e.g. shared with another client).
    pub fn session_store(mut self, store: Arc<SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn build(self) -> Result<PredictClient, SdkError> {
        let session = match (self.session_store, self.session_token) {
            (Some(_), Some(_)) => {
                return Err(SdkError::Configuration(
                    "session_token and session_store are mutually exclusive".to_string(),
                ))
            }
            (Some(store), None) => store,
            (None, Some(token)) => Arc::new(SessionStore::with_token(token)),
            (None, None) => Arc::new(SessionStore::new()),
        };

        Ok(PredictClient {
            http: PredictHttp::with_timeout(&self.base_url, self.timeout)?,
            session,
            identity: self.identity,
            order_signer: self.order_signer,
            retry: self.retry,
        })
    }
}
