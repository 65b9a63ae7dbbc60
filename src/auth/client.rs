//! Auth sub-client: challenge/session exchange, session state, logout.

use chrono::{DateTime, Utc};

use crate::auth::session::Session;
use crate::auth::{Challenge, CreateSessionRequest, SessionResponse, SessionState, SigningIdentity};
use crate::client::PredictClient;
use crate::error::SdkError;
use crate::shared::Address;

const SESSION_CHALLENGES_PATH: &str = "/api/v1/session_challenges";
const SESSIONS_PATH: &str = "/api/v1/sessions";

/// Sub-client for session operations.
pub struct Auth<'a> {
    pub(crate) client: &'a PredictClient,
}

impl<'a> Auth<'a> {
    /// Establish a fresh session, replacing any current one.
    ///
    /// Requests a challenge, signs its `uid` with the configured signer and
    /// exchanges the signature for a bearer token. Safe to call repeatedly;
    /// concurrent calls each run to completion and the last stored session wins.
    pub async fn authenticate(&self) -> Result<(), SdkError> {
        self.fresh_token().await.map(|_| ())
    }

    /// Current lifecycle state of this client's session.
    pub async fn state(&self) -> SessionState {
        self.client.session.state().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await == SessionState::Authenticated
    }

    /// When the current session was established, if there is one.
    pub async fn session_established_at(&self) -> Option<DateTime<Utc>> {
        self.client.session.established_at().await
    }

    /// Forget the local session. The next authenticated call starts over.
    pub async fn logout(&self) {
        self.client.session.clear().await;
        tracing::debug!("Session cleared");
    }

    /// The address this client authenticates as.
    pub fn address(&self) -> Option<&Address> {
        self.client.identity.as_ref().map(|i| &i.address)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// The stored token, authenticating first when there is none.
    pub(crate) async fn current_or_new_token(&self) -> Result<String, SdkError> {
        match self.client.session.token().await {
            Some(token) => Ok(token),
            None => self.fresh_token().await,
        }
    }

    /// Run the challenge/session exchange and store the result.
    pub(crate) async fn fresh_token(&self) -> Result<String, SdkError> {
        let identity = self.identity()?;
        let _authenticating = self.client.session.begin_authenticating();

        let challenge: Challenge = self
            .client
            .http
            .post(SESSION_CHALLENGES_PATH, &serde_json::json!({}), None)
            .await?;

        let signature = identity
            .signer
            .sign_message(&identity.address, challenge.uid.as_bytes())
            .await?;

        let request = CreateSessionRequest {
            challenge_uid: challenge.uid,
            signature,
        };
        let response: SessionResponse = self
            .client
            .http
            .post(SESSIONS_PATH, &request, None)
            .await?;

        self.client
            .session
            .replace(Session::new(response.token.clone()))
            .await;
        tracing::info!(address = %identity.address, "Session established");

        Ok(response.token)
    }

    fn identity(&self) -> Result<&SigningIdentity, SdkError> {
        self.client.identity.as_ref().ok_or_else(|| {
            SdkError::Configuration(
                "authenticated operation requires a signing identity (address + signer)"
                    .to_string(),
            )
        })
    }
}
