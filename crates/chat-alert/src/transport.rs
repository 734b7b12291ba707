//! Outbound HTTP seam.
//!
//! Channels post through a [`WebhookTransport`] so tests can script the
//! webhook's answers without a network.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::ChannelError;

/// Status and body of a webhook response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues a single JSON POST and reports what came back.
///
/// Implementations must be safe to share between concurrent dispatches.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POST `body` to `url` with a JSON content type.
    ///
    /// Only failures to obtain a response are errors; any status code is
    /// returned as a [`WebhookResponse`].
    async fn post_json(&self, url: &str, body: String) -> Result<WebhookResponse, ChannelError>;
}

#[async_trait]
impl WebhookTransport for reqwest::Client {
    async fn post_json(&self, url: &str, body: String) -> Result<WebhookResponse, ChannelError> {
        let response = self
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(WebhookResponse { status, body })
    }
}
