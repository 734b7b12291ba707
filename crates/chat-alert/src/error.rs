//! Error types for alert delivery.

use thiserror::Error;

/// Errors that can occur when validating a provider or delivering an alert.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Provider configuration failed validation
    #[error("Invalid provider configuration: {0}")]
    InvalidConfig(String),

    /// No destination could be resolved for the alert
    #[error("Channel not configured: {0}")]
    NotConfigured(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// The webhook answered with a non-success status
    #[error("Webhook returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Configuration text could not be parsed
    #[error("Failed to parse provider configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ChannelError {
    /// Whether the failure happened before a response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_))
    }

    /// HTTP status of an upstream rejection, if that is what this is.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
