//! Authentication: wallet signer seam, challenge/session exchange, session state.
//!
//! ## Flow
//!
//! 1. `POST /api/v1/session_challenges` returns a one-time challenge `uid`.
//! 2. The configured [`MessageSigner`] signs the UTF-8 bytes of that `uid`.
//! 3. `POST /api/v1/sessions` with `{challenge_uid, signature}` returns a
//!    bearer token, stored in the client's [`SessionStore`].
//!
//! ## Security Model
//!
//! - The token lives only inside the [`SessionStore`]. There is no public
//!   accessor and `Debug` output is redacted.
//! - The challenge is consumed immediately and never stored.
//! - The session has no client-visible expiry; expiry is detected from a
//!   failed request and answered with a fresh session (see `http::retry`).

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "native-auth")]
pub mod native;

#[cfg(feature = "http")]
pub mod session;

#[cfg(feature = "http")]
pub use session::SessionStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::SdkError;
use crate::shared::{serde_util, Address};

// ============================================================================
// Signer seam
// ============================================================================

/// Message-signing capability of a wallet.
///
/// The SDK only needs this one operation; key custody, hardware wallets and
/// browser providers all stay behind this trait.
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Sign `message` on behalf of `address`, returning a hex signature.
    async fn sign_message(&self, address: &Address, message: &[u8]) -> Result<String, SdkError>;
}

/// The wallet address the SDK authenticates as, plus its signer.
#[derive(Clone)]
pub struct SigningIdentity {
    pub address: Address,
    pub signer: Arc<dyn MessageSigner>,
}

impl SigningIdentity {
    pub fn new(address: impl Into<Address>, signer: Arc<dyn MessageSigner>) -> Self {
        Self {
            address: address.into(),
            signer,
        }
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Session state
// ============================================================================

/// Lifecycle of a client's session.
///
/// `Authenticated` goes back to `Authenticating` whenever a call hits an
/// expired session and re-authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// One-time challenge issued by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub uid: String,
    #[serde(default, with = "serde_util::option_timestamp_ms")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v1/sessions`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    pub challenge_uid: String,
    pub signature: String,
}

/// Response of `POST /api/v1/sessions`.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
}

impl fmt::Debug for SessionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionResponse")
            .field("token", &"<redacted>")
            .finish()
    }
}
