//! Minimal JSON HTTP client used to talk to the remote browser service.
//!
//! - Anchored to a base URL, with bearer auth applied to every request
//! - Per-request timeout (client-wide default, overridable)
//! - Structured `tracing` events for request start, response, and errors;
//!   the bearer token is never logged
//! - Best-effort extraction of API error messages from JSON error bodies
//!
//! There is deliberately no retry logic here: a failed remote call means the
//! affected profile or batch is skipped, not replayed.

use reqwest::header::HeaderValue;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("client build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// JSON-over-HTTP client anchored to one service base URL.
#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    token: String,
    pub default_timeout: Duration,
}

impl HttpClient {
    /// Construct a client for `base`, authenticating every request with the
    /// given bearer token.
    pub fn new(base: &str, token: impl Into<String>) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let token = sanitize_token(token.into())?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            token,
            default_timeout: Duration::from_secs(60),
        })
    }

    /// Override the default per-request timeout.
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.request(Method::POST, path, Some(body)).await?;
        decode_json(&bytes)
    }

    /// GET a JSON response.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let bytes = self.request::<()>(Method::GET, path, None).await?;
        decode_json(&bytes)
    }

    /// DELETE a resource, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.request::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        let mut rb = self
            .inner
            .request(method.clone(), url.clone())
            .timeout(self.default_timeout)
            .bearer_auth(&self.token);
        if let Some(b) = body {
            rb = rb.json(b);
        }

        tracing::debug!(
            method = %method,
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            timeout_ms = self.default_timeout.as_millis() as u64,
            has_body = body.is_some(),
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = rb
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        tracing::debug!(
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            body_len = bytes.len(),
            "http.response"
        );

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let message = extract_error_message(&bytes);
        tracing::warn!(%status, message = %message, "http.error");
        Err(HttpError::Api { status, message })
    }
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    serde_json::from_slice(bytes).map_err(|e| HttpError::Decode(e.to_string(), snip_body(bytes)))
}

/// Pull a human-readable message out of common JSON error envelopes, falling
/// back to a truncated body snippet.
fn extract_error_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.detail.is_empty() {
            return m.detail;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}

fn sanitize_token(raw: String) -> Result<String, HttpError> {
    let mut s = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    s.retain(|ch| !ch.is_ascii_whitespace());

    if s.is_empty() {
        return Err(HttpError::Build("API key is empty".into()));
    }
    if !s.is_ascii() {
        return Err(HttpError::Build("API key contains non-ASCII bytes".into()));
    }
    // Validate the header value upfront for a clear error at construction.
    HeaderValue::from_str(&format!("Bearer {}", s))
        .map_err(|e| HttpError::Build(format!("invalid Authorization header: {e}")))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_quotes_and_whitespace() {
        let tok = sanitize_token("  \"sk-test 123\"\n".into()).unwrap();
        assert_eq!(tok, "sk-test123");
    }

    #[test]
    fn sanitize_rejects_empty() {
        assert!(matches!(
            sanitize_token("  ".into()),
            Err(HttpError::Build(_))
        ));
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(
            extract_error_message(br#"{"message":"bad key"}"#),
            "bad key"
        );
        assert_eq!(
            extract_error_message(br#"{"error":"nope"}"#),
            "nope"
        );
        assert_eq!(extract_error_message(b"plain text"), "plain text");
    }
}
