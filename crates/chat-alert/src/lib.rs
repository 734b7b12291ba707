//! Google Chat alerting for endpoint health checks.
//!
//! This crate turns an evaluated health check into a Google Chat card and
//! delivers it to an incoming webhook. Probing, scheduling and deciding when
//! an alert fires or resolves happen elsewhere; callers hand over the
//! finished result.
//!
//! # Usage
//!
//! ```no_run
//! use chat_alert::{
//!     AlertDescriptor, AlertProvider, ConditionResult, EndpointDescriptor, EvaluationResult,
//!     GoogleChatChannel, ProviderConfig,
//! };
//!
//! # async fn run() -> Result<(), chat_alert::ChannelError> {
//! let config = ProviderConfig::new("https://chat.googleapis.com/v1/spaces/AAA/messages")
//!     .with_override("core", "https://chat.googleapis.com/v1/spaces/BBB/messages");
//! config.validate()?;
//!
//! let channel = GoogleChatChannel::new(config);
//! let endpoint = EndpointDescriptor::new("api", "core").with_url("https://api.example.com/health");
//! let result = EvaluationResult::new(vec![ConditionResult::new("[STATUS] == 200", false)]);
//!
//! channel
//!     .send(&endpoint, &AlertDescriptor::default(), &result, false)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! A provider is configured from a YAML block (see
//! [`ProviderConfig::from_yaml_str`]) or from the environment:
//!
//! - `GOOGLECHAT_WEBHOOK_URL`: default webhook URL
//!
//! # Architecture
//!
//! - [`ProviderConfig`] resolves the webhook for an endpoint group
//! - [`payload::build_request_body`] renders the card, with no I/O
//! - [`WebhookTransport`] is the outbound HTTP seam, implemented for `reqwest::Client`
//! - [`GoogleChatChannel`] implements [`AlertProvider`] on top of the three

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod channels;
pub mod config;
pub mod error;
pub mod payload;
pub mod transport;

pub use alert::{
    AlertDescriptor, AlertSettings, ConditionResult, EndpointDescriptor, EvaluationResult,
};
pub use channels::googlechat::GoogleChatChannel;
pub use channels::AlertProvider;
pub use config::{Override, ProviderConfig};
pub use error::ChannelError;
pub use payload::{build_request_body, AlertStatus};
pub use transport::{WebhookResponse, WebhookTransport};
