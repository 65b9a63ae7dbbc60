//! Re-authentication retry policy for session-authenticated requests.
//!
//! Every authenticated operation goes through [`run_with_reauth`]: run the
//! operation with the current session token; if the server reports an
//! expired session, obtain a fresh token and try again, up to
//! [`RetryConfig::max_reauthentications`] times. Any other error is returned
//! immediately.

use std::future::Future;

use crate::error::SdkError;

/// Configuration for re-authentication on expired sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of re-authentications per call (not counting the
    /// initial attempt). `0` surfaces the first expiry as
    /// [`SdkError::SessionExpired`].
    pub max_reauthentications: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_reauthentications: 3,
        }
    }
}

impl RetryConfig {
    pub fn new(max_reauthentications: u32) -> Self {
        Self {
            max_reauthentications,
        }
    }

    /// Never re-authenticate.
    pub fn none() -> Self {
        Self::new(0)
    }
}

/// Run `op` with `token`, re-authenticating through `reauth` whenever the
/// server reports an expired session.
///
/// `reauth` must produce a brand-new token (it is called once per retry
/// cycle). When the limit is reached the last expiry is returned as
/// [`SdkError::SessionExpired`].
pub async fn run_with_reauth<T, Op, OpFut, Reauth, ReauthFut>(
    config: &RetryConfig,
    token: String,
    mut op: Op,
    mut reauth: Reauth,
) -> Result<T, SdkError>
where
    Op: FnMut(String) -> OpFut,
    OpFut: Future<Output = Result<T, SdkError>>,
    Reauth: FnMut() -> ReauthFut,
    ReauthFut: Future<Output = Result<String, SdkError>>,
{
    let mut token = token;
    let mut reauthentications = 0u32;

    loop {
        let err = match op(token.clone()).await {
            Ok(value) => return Ok(value),
            Err(SdkError::Request(e)) if e.is_session_expired() => e,
            Err(e) => return Err(e),
        };

        if reauthentications >= config.max_reauthentications {
            tracing::warn!(
                attempts = reauthentications + 1,
                url = %err.url,
                "Session still expired, giving up"
            );
            return Err(SdkError::SessionExpired {
                attempts: reauthentications + 1,
                last_error: err,
            });
        }

        reauthentications += 1;
        tracing::debug!(
            attempt = reauthentications,
            max = config.max_reauthentications,
            url = %err.url,
            "Session expired, re-authenticating"
        );
        token = reauth().await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiErrorItem, RequestError, TransportError};
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn expired() -> SdkError {
        RequestError::new(
            "https://api.test/api/v1/orders",
            vec![ApiErrorItem::from_value(json!({"message": "jwt expired"}))],
        )
        .into()
    }

    fn rejected() -> SdkError {
        RequestError::new(
            "https://api.test/api/v1/orders",
            vec![ApiErrorItem::from_value(json!({"message": "insufficient balance"}))],
        )
        .into()
    }

    #[test]
    fn test_retry_config_default_is_bounded() {
        assert_eq!(RetryConfig::default().max_reauthentications, 3);
        assert_eq!(RetryConfig::none().max_reauthentications, 0);
    }

    #[tokio::test]
    async fn test_success_without_reauth() {
        let reauths = AtomicU32::new(0);
        let reauths_ref = &reauths;
        let result = run_with_reauth(
            &RetryConfig::default(),
            "t0".to_string(),
            |token| async move { Ok::<_, SdkError>(token) },
            move || async move {
                reauths_ref.fetch_add(1, Ordering::SeqCst);
                Ok("t1".to_string())
            },
        )
        .await
        .unwrap();

        assert_eq!(result, "t0");
        assert_eq!(reauths.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_expired_then_success_reauths_once() {
        let calls = AtomicU32::new(0);
        let reauths = AtomicU32::new(0);
        let reauths_ref = &reauths;
        let seen = Mutex::new(Vec::new());

        let result = run_with_reauth(
            &RetryConfig::default(),
            "stale".to_string(),
            |token| {
                seen.lock().unwrap().push(token.clone());
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err(expired())
                    } else {
                        Ok(format!("ok with {token}"))
                    }
                }
            },
            move || async move {
                reauths_ref.fetch_add(1, Ordering::SeqCst);
                Ok("fresh".to_string())
            },
        )
        .await
        .unwrap();

        assert_eq!(result, "ok with fresh");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(reauths.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec!["stale", "fresh"]);
    }

    #[tokio::test]
    async fn test_non_expiry_error_not_retried() {
        let calls = AtomicU32::new(0);
        let reauths = AtomicU32::new(0);
        let reauths_ref = &reauths;

        let err = run_with_reauth(
            &RetryConfig::default(),
            "t0".to_string(),
            |_token| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(rejected()) }
            },
            move || async move {
                reauths_ref.fetch_add(1, Ordering::SeqCst);
                Ok("t1".to_string())
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Request(ref e) if !e.is_session_expired()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(reauths.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_error_not_retried() {
        let reauths = AtomicU32::new(0);
        let reauths_ref = &reauths;
        let err = run_with_reauth(
            &RetryConfig::default(),
            "t0".to_string(),
            |_token| async {
                Err::<(), _>(SdkError::from(TransportError::ServerError {
                    url: "u".to_string(),
                    status: 503,
                    body: String::new(),
                }))
            },
            move || async move {
                reauths_ref.fetch_add(1, Ordering::SeqCst);
                Ok("t1".to_string())
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Transport(_)));
        assert_eq!(reauths.load(Ordering::SeqCst), 0);
    }

    // Persistent expiry ends in SessionExpired rather than looping forever.
    #[tokio::test]
    async fn test_persistent_expiry_surfaces_terminal_error() {
        let calls = AtomicU32::new(0);
        let reauths = AtomicU32::new(0);
        let reauths_ref = &reauths;

        let err = run_with_reauth(
            &RetryConfig::new(3),
            "t0".to_string(),
            |_token| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(expired()) }
            },
            move || async move {
                reauths_ref.fetch_add(1, Ordering::SeqCst);
                Ok("again".to_string())
            },
        )
        .await
        .unwrap_err();

        match err {
            SdkError::SessionExpired {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 4);
                assert!(last_error.is_session_expired());
            }
            other => panic!("expected SessionExpired, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(reauths.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_reauth_failure_propagates() {
        let err = run_with_reauth(
            &RetryConfig::default(),
            "t0".to_string(),
            |_token| async { Err::<(), _>(expired()) },
            || async { Err(SdkError::Signing("wallet locked".to_string())) },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Signing(_)));
    }

    #[tokio::test]
    async fn test_zero_retries_surfaces_first_expiry() {
        let err = run_with_reauth(
            &RetryConfig::none(),
            "t0".to_string(),
            |_token| async { Err::<(), _>(expired()) },
            || async { Ok("t1".to_string()) },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::SessionExpired { attempts: 1, .. }));
    }
}
