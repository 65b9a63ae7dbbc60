//! Network constants for the predict SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.predict.markets";

/// Environment variable that overrides the API base URL in
/// [`PredictClientBuilder::from_env`](crate::client::PredictClientBuilder::from_env).
pub const API_URL_ENV: &str = "PREDICT_API_URL";

/// Environment variable holding a hex private key for
/// [`LocalWallet`](crate::auth::native::LocalWallet) (`native-auth` only).
pub const PRIVATE_KEY_ENV: &str = "PREDICT_PRIVATE_KEY";
