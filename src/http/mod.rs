//! HTTP layer: `PredictHttp` transport and the re-authentication retry policy.

pub mod client;
pub mod retry;

pub use client::{decode_envelope, PredictHttp, Query};
pub use retry::{run_with_reauth, RetryConfig};
