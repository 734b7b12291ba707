//! Alert provider implementations.

pub mod googlechat;

use async_trait::async_trait;

use crate::alert::{AlertDescriptor, AlertSettings, EndpointDescriptor, EvaluationResult};
use crate::error::ChannelError;

/// Trait for alert providers (Google Chat, etc.).
#[async_trait]
pub trait AlertProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &'static str;

    /// Check if this provider's configuration is usable.
    fn is_valid(&self) -> bool;

    /// Provider-wide alert defaults, if configured.
    fn default_alert(&self) -> Option<&AlertSettings>;

    /// Deliver one alert for `endpoint`.
    ///
    /// `resolved` is true when the endpoint has recovered and false when the
    /// alert is being triggered.
    async fn send(
        &self,
        endpoint: &EndpointDescriptor,
        alert: &AlertDescriptor,
        result: &EvaluationResult,
        resolved: bool,
    ) -> Result<(), ChannelError>;
}
