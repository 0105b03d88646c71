//! Client for the remote browser-automation service.
//!
//! The service hosts cloud browser sessions. Each session can open windows,
//! load URLs into them, and answer natural-language questions about the
//! rendered page via a hosted model ("page query"). This crate exposes that
//! contract behind the [`RemoteBrowser`] trait, with [`api::BrowserApiClient`]
//! as the concrete REST implementation.
//!
//! Handles are opaque service-issued identifiers; callers own their
//! lifecycle. One window must only be driven by one caller at a time — the
//! service renders into shared window state, so concurrent queries against
//! the same window race.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod api;

/// Opaque identifier for one remote browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier for one window within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BrowserError {
    /// The HTTP transport or the service itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] linkscout_http::HttpError),

    /// The service answered 2xx but the payload was missing a required field.
    #[error("service response missing field: {0}")]
    MissingField(&'static str),
}

/// The remote browser-automation contract.
///
/// The trait is the seam for tests: the batch runner is written against
/// `&dyn RemoteBrowser` so call ordering and failure handling can be checked
/// with in-process doubles.
#[async_trait]
pub trait RemoteBrowser: Send + Sync {
    /// Create a fresh browser session.
    async fn create_session(&self) -> Result<SessionId, BrowserError>;

    /// Open a window inside an existing session.
    async fn create_window(&self, session: &SessionId) -> Result<WindowId, BrowserError>;

    /// Navigate a window to `url`, waiting for the page to settle.
    async fn load_url(
        &self,
        session: &SessionId,
        window: &WindowId,
        url: &str,
    ) -> Result<(), BrowserError>;

    /// Ask the hosted model a free-text question about the window's current
    /// page, returning its raw free-text reply.
    async fn page_query(
        &self,
        session: &SessionId,
        window: &WindowId,
        prompt: &str,
    ) -> Result<String, BrowserError>;

    /// Tear the session down, releasing its windows.
    async fn terminate_session(&self, session: &SessionId) -> Result<(), BrowserError>;
}
