//! Google Chat incoming-webhook alert provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::alert::{AlertDescriptor, AlertSettings, EndpointDescriptor, EvaluationResult};
use crate::channels::AlertProvider;
use crate::config::ProviderConfig;
use crate::error::ChannelError;
use crate::payload::build_request_body;
use crate::transport::WebhookTransport;

/// Google Chat webhook alert provider.
pub struct GoogleChatChannel {
    config: ProviderConfig,
    transport: Arc<dyn WebhookTransport>,
}

impl GoogleChatChannel {
    /// Create a channel posting through a fresh `reqwest::Client`.
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_transport(config, Arc::new(reqwest::Client::new()))
    }

    /// Create a channel posting through a shared transport.
    #[must_use]
    pub fn with_transport(config: ProviderConfig, transport: Arc<dyn WebhookTransport>) -> Self {
        Self { config, transport }
    }

    /// Create a channel from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProviderConfig::from_env())
    }

    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl AlertProvider for GoogleChatChannel {
    fn name(&self) -> &'static str {
        "googlechat"
    }

    fn is_valid(&self) -> bool {
        self.config.is_valid()
    }

    fn default_alert(&self) -> Option<&AlertSettings> {
        self.config.default_alert()
    }

    async fn send(
        &self,
        endpoint: &EndpointDescriptor,
        alert: &AlertDescriptor,
        result: &EvaluationResult,
        resolved: bool,
    ) -> Result<(), ChannelError> {
        let webhook_url = self.config.webhook_url_for_group(&endpoint.group);
        if webhook_url.is_empty() {
            return Err(ChannelError::NotConfigured(format!(
                "no Google Chat webhook for group '{}'",
                endpoint.group
            )));
        }

        let body = build_request_body(endpoint, alert, result, resolved);

        debug!(
            channel = "googlechat",
            endpoint = %endpoint.name,
            group = %endpoint.group,
            resolved,
            "Sending alert"
        );

        let response = self.transport.post_json(webhook_url, body).await?;

        if response.is_success() {
            debug!(channel = "googlechat", "Alert sent successfully");
            Ok(())
        } else {
            warn!(
                channel = "googlechat",
                status = response.status,
                body = %response.body,
                "Google Chat webhook request failed"
            );

            Err(ChannelError::Rejected {
                status: response.status,
                body: response.body,
            })
        }
    }
}
