//! # Predict SDK
//!
//! A Rust client for a session-authenticated prediction-market trading API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, fixed-point scaling, domain models
//! 2. **Auth**: Wallet signer seam, challenge/session exchange, session store
//! 3. **HTTP API**: `PredictHttp` transport and the re-authentication retry policy
//! 4. **High-Level Client**: `PredictClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use predict_sdk::prelude::*;
//!
//! let client = PredictClient::builder()
//!     .base_url("https://api.predict.markets")
//!     .wallet(LocalWallet::from_private_key(&key)?)
//!     .build()?;
//!
//! let market = client.markets().get("btc-price-2026").await?;
//! let quote = client
//!     .quotes()
//!     .create(&market, QuoteParams::buy(TokenType::Long, dec!(10), dec!(0.42)))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, scaling arithmetic and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API URL and environment variable constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: signer seam, session challenge exchange, session state.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP transport and re-authentication retry.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PredictClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + scaling
    pub use crate::shared::{
        from_base_units, from_share_units, to_base_units, to_share_units, Address, Page, Side,
        TokenType, BASE_UNIT_DECIMALS,
    };

    // Domain types: market
    pub use crate::domain::market::{Market, MarketStatus, MarketType, ScalarRange};

    // Domain types: quote
    pub use crate::domain::quote::{Quote, QuoteParams, QuoteValue};

    // Domain types: order
    pub use crate::domain::order::{
        ExchangeOrder, Order, OrderSigner, OrderStatus, SignedExchangeOrder,
    };

    // Domain types: orderbook, balances, data feeds
    pub use crate::domain::balance::MarketBalances;
    pub use crate::domain::data_feed::{DataFeed, DataFeedEntry};
    pub use crate::domain::orderbook::{BookEntry, BookSide, Fill};

    // Errors
    pub use crate::domain::{FieldError, ValidationError};
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL, PRIVATE_KEY_ENV};

    // Auth
    pub use crate::auth::{MessageSigner, SessionState, SigningIdentity};
    #[cfg(feature = "native-auth")]
    pub use crate::auth::native::LocalWallet;
    #[cfg(feature = "http")]
    pub use crate::auth::SessionStore;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, BalancesClient, DataFeedsClient, MarketsClient, OrderbooksClient,
        OrdersClient, PredictClient, PredictClientBuilder, QuotesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::market::MarketsQuery;
    #[cfg(feature = "http")]
    pub use crate::domain::order::{OrderOptions, UserOrdersQuery};
    #[cfg(feature = "http")]
    pub use crate::http::RetryConfig;
}
