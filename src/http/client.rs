//! Low-level HTTP client: `PredictHttp`.
//!
//! Serializes a request, attaches the bearer credential when one is given,
//! decodes the `{ data, errors }` envelope and surfaces failures uniformly.
//! Never retries; the session retry policy lives one layer up.

use crate::error::{ApiErrorItem, RequestError, SdkError, TransportError};
use crate::shared::camelize_keys;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─── Query ───────────────────────────────────────────────────────────────────

/// GET parameters. Backed by a `BTreeMap` so the encoded query string has a
/// stable key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// URL-encoded `k=v&…` string, keys in sorted order.
    pub fn encode(&self) -> Result<String, SdkError> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|e| SdkError::Validation(format!("Invalid query parameters: {}", e)))
    }
}

// ─── PredictHttp ─────────────────────────────────────────────────────────────

/// Low-level HTTP client for the trading REST API.
#[derive(Debug, Clone)]
pub struct PredictHttp {
    base_url: String,
    client: Client,
}

impl PredictHttp {
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SdkError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder
                .default_headers(headers)
                .build()
                .map_err(TransportError::from)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`/api/v1/...`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        bearer: Option<&str>,
    ) -> Result<T, SdkError> {
        let mut url = self.url(path);
        if !query.is_empty() {
            url = format!("{}?{}", url, query.encode()?);
        }
        self.send(Method::GET, &url, None, bearer).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, SdkError> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, &self.url(path), Some(body), bearer)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<T, SdkError> {
        self.send(Method::DELETE, &self.url(path), None, bearer)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        bearer: Option<&str>,
    ) -> Result<T, SdkError> {
        tracing::debug!(
            method = %method,
            url = %url,
            authenticated = bearer.is_some(),
            "API request"
        );

        let mut req = self.client.request(method, url);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        if let Some(bytes) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let resp = req.send().await.map_err(TransportError::from)?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(TransportError::from)?;

        decode_envelope(url, status, &bytes)
    }
}

// ─── Envelope decoding ───────────────────────────────────────────────────────

/// Treat a bare 404 like a `null` payload, for lookups that report a
/// missing entity either way.
pub(crate) fn not_found_as_none<T>(
    result: Result<Option<T>, SdkError>,
) -> Result<Option<T>, SdkError> {
    match result {
        Err(SdkError::Transport(TransportError::ServerError { status: 404, .. })) => Ok(None),
        other => other,
    }
}

/// Decode a `{ data?, errors? }` response envelope.
///
/// - non-empty `errors` (any status) → [`RequestError`]
/// - non-JSON body, or non-2xx without `errors` → [`TransportError`]
/// - otherwise `data` (missing = `null`) with keys camelized, decoded as `T`
pub fn decode_envelope<T: DeserializeOwned>(
    url: &str,
    status: u16,
    body: &[u8],
) -> Result<T, SdkError> {
    let success = (200..300).contains(&status);
    let transport_failure = |reason: String| -> SdkError {
        if success {
            TransportError::InvalidBody {
                url: url.to_string(),
                status,
                reason,
            }
            .into()
        } else {
            TransportError::ServerError {
                url: url.to_string(),
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            }
            .into()
        }
    };

    let envelope: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => return Err(transport_failure(e.to_string())),
    };
    let Value::Object(mut envelope) = envelope else {
        return Err(transport_failure("expected a JSON object envelope".to_string()));
    };

    if let Some(Value::Array(errors)) = envelope.remove("errors") {
        if !errors.is_empty() {
            let items = errors.into_iter().map(ApiErrorItem::from_value).collect();
            return Err(RequestError::new(url, items).into());
        }
    }

    if !success {
        return Err(transport_failure(format!("HTTP {}", status)));
    }

    let data = camelize_keys(envelope.remove("data").unwrap_or(Value::Null));
    serde_json::from_value(data).map_err(|e| {
        TransportError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
