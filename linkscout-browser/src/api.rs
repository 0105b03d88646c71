//! Concrete REST client for the browser-automation service.
//!
//! Wire shapes follow the service's envelope convention: every 2xx response
//! wraps its payload in a `data` object.

use async_trait::async_trait;
use linkscout_http::HttpClient;
use serde::{Deserialize, Serialize};

use crate::{BrowserError, RemoteBrowser, SessionId, WindowId};

pub const DEFAULT_API_BASE: &str = "https://api.airtop.ai/api/v1/";

/// Minutes of inactivity before the service reclaims an abandoned session.
/// Sessions are terminated explicitly after each batch; this is the backstop.
const SESSION_TIMEOUT_MINUTES: u32 = 10;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionRequest {
    configuration: SessionConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionConfiguration {
    timeout_minutes: u32,
}

#[derive(Deserialize)]
struct SessionEnvelope {
    data: SessionData,
}

#[derive(Deserialize)]
struct SessionData {
    id: Option<String>,
}

#[derive(Deserialize)]
struct WindowEnvelope {
    data: WindowData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowData {
    window_id: Option<String>,
}

#[derive(Serialize)]
struct LoadUrlRequest<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct PageQueryRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct PageQueryEnvelope {
    data: PageQueryData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQueryData {
    #[serde(default)]
    model_response: String,
}

/// REST-backed [`RemoteBrowser`] implementation.
#[derive(Clone)]
pub struct BrowserApiClient {
    http: HttpClient,
}

impl BrowserApiClient {
    /// Build a client for `base`, authenticating with `api_key`.
    ///
    /// A missing trailing slash on `base` would make relative joins replace
    /// the last path segment, so one is appended when absent.
    pub fn new(base: &str, api_key: &str) -> Result<Self, BrowserError> {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let http = HttpClient::new(&base, api_key)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl RemoteBrowser for BrowserApiClient {
    async fn create_session(&self) -> Result<SessionId, BrowserError> {
        let req = CreateSessionRequest {
            configuration: SessionConfiguration {
                timeout_minutes: SESSION_TIMEOUT_MINUTES,
            },
        };
        let resp: SessionEnvelope = self.http.post_json("sessions", &req).await?;
        let id = resp.data.id.ok_or(BrowserError::MissingField("data.id"))?;
        tracing::debug!(session = %id, "browser.session.created");
        Ok(SessionId(id))
    }

    async fn create_window(&self, session: &SessionId) -> Result<WindowId, BrowserError> {
        let resp: WindowEnvelope = self
            .http
            .post_json(
                &format!("sessions/{session}/windows"),
                &serde_json::json!({}),
            )
            .await?;
        let id = resp
            .data
            .window_id
            .ok_or(BrowserError::MissingField("data.windowId"))?;
        tracing::debug!(%session, window = %id, "browser.window.created");
        Ok(WindowId(id))
    }

    async fn load_url(
        &self,
        session: &SessionId,
        window: &WindowId,
        url: &str,
    ) -> Result<(), BrowserError> {
        let _: serde_json::Value = self
            .http
            .post_json(
                &format!("sessions/{session}/windows/{window}/load-url"),
                &LoadUrlRequest { url },
            )
            .await?;
        tracing::debug!(%session, %window, %url, "browser.window.loaded");
        Ok(())
    }

    async fn page_query(
        &self,
        session: &SessionId,
        window: &WindowId,
        prompt: &str,
    ) -> Result<String, BrowserError> {
        let resp: PageQueryEnvelope = self
            .http
            .post_json(
                &format!("sessions/{session}/windows/{window}/page-query"),
                &PageQueryRequest { prompt },
            )
            .await?;
        tracing::debug!(
            %session,
            %window,
            response_len = resp.data.model_response.len(),
            "browser.window.queried"
        );
        Ok(resp.data.model_response)
    }

    async fn terminate_session(&self, session: &SessionId) -> Result<(), BrowserError> {
        self.http.delete(&format!("sessions/{session}")).await?;
        tracing::debug!(%session, "browser.session.terminated");
        Ok(())
    }
}
