//! Smoke tests against a live API deployment.
//!
//! All tests are `#[ignore]` because they require network access and a
//! configured environment (`.env` is honored):
//!
//! - `PREDICT_API_URL`: API base URL
//! - `PREDICT_MARKET_SLUG`: a market that exists on that deployment
//! - `PREDICT_PRIVATE_KEY`: wallet key, only for the authenticated test
//!
//! Run with:
//! ```bash
//! cargo test --features native --test live_integration -- --ignored
//! ```

use std::time::Duration;

use predict_sdk::prelude::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(15);

fn market_slug() -> String {
    dotenvy::dotenv().ok();
    std::env::var("PREDICT_MARKET_SLUG").expect("PREDICT_MARKET_SLUG must be set")
}

fn public_client() -> PredictClient {
    dotenvy::dotenv().ok();
    PredictClient::builder()
        .base_url(&std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
        .timeout(TEST_TIMEOUT)
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn test_live_market_and_orderbook() {
    let client = public_client();
    let slug = market_slug();

    let market = client.markets().get(&slug).await.expect("market lookup");
    assert_eq!(market.slug, slug);
    assert!(market.num_ticks > rust_decimal::Decimal::ZERO);
    if market.is_scalar() {
        let range = market.scalar_range().expect("scalar range");
        assert!(range.max > range.min);
    }

    let bids = client
        .orderbooks()
        .bids(&slug, TokenType::Long, None)
        .await
        .expect("bids");
    for entry in &bids.results {
        assert!(entry.price >= rust_decimal::Decimal::ZERO);
        assert!(entry.price <= market.num_ticks);
    }
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_market_is_not_found() {
    let client = public_client();
    let err = client
        .markets()
        .get("this-market-does-not-exist-0000")
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)), "{err:?}");
}

#[cfg(feature = "native-auth")]
#[tokio::test]
#[ignore]
async fn test_live_authenticated_balances() {
    dotenvy::dotenv().ok();
    let client = PredictClientBuilder::from_env()
        .expect("env config")
        .timeout(TEST_TIMEOUT)
        .build()
        .expect("client should build");
    let slug = market_slug();

    client.auth().authenticate().await.expect("authenticate");
    assert!(client.auth().is_authenticated().await);

    let balances = client.balances().get(&slug).await.expect("balances");
    assert!(balances.long >= rust_decimal::Decimal::ZERO);
    assert!(balances.short >= rust_decimal::Decimal::ZERO);

    client.auth().logout().await;
    assert_eq!(client.auth().state().await, SessionState::Unauthenticated);
}
