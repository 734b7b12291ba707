//! Provider configuration: default webhook, per-group overrides and the
//! provider-wide default alert.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alert::AlertSettings;
use crate::error::ChannelError;

/// Environment variable for the default Google Chat webhook URL.
pub const ENV_GOOGLECHAT_WEBHOOK_URL: &str = "GOOGLECHAT_WEBHOOK_URL";

/// Routes alerts of one endpoint group to a dedicated webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Override {
    pub group: String,
    pub webhook_url: String,
}

impl Override {
    #[must_use]
    pub fn new(group: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            webhook_url: webhook_url.into(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.group.is_empty() && !self.webhook_url.is_empty()
    }
}

/// Google Chat provider configuration.
///
/// Overrides are kept as an ordered list: when several share a group, the
/// first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderConfig {
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<Override>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_alert: Option<AlertSettings>,
}

impl ProviderConfig {
    /// Create a configuration with only a default webhook.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Self::default()
        }
    }

    /// Append a group override. Earlier overrides take precedence.
    #[must_use]
    pub fn with_override(
        mut self,
        group: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Self {
        self.overrides.push(Override::new(group, webhook_url));
        self
    }

    #[must_use]
    pub fn with_default_alert(mut self, default_alert: AlertSettings) -> Self {
        self.default_alert = Some(default_alert);
        self
    }

    /// Build a configuration from environment variables.
    ///
    /// Only the default webhook is read; overrides need a config file.
    #[must_use]
    pub fn from_env() -> Self {
        let webhook_url = std::env::var(ENV_GOOGLECHAT_WEBHOOK_URL).unwrap_or_default();

        if webhook_url.is_empty() {
            debug!("Google Chat notifications disabled (GOOGLECHAT_WEBHOOK_URL not set)");
        } else {
            debug!("Google Chat notifications enabled");
        }

        Self::new(webhook_url)
    }

    /// Parse a YAML provider block and validate it.
    ///
    /// # Errors
    /// Returns [`ChannelError::Yaml`] for malformed text and
    /// [`ChannelError::InvalidConfig`] when validation fails.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ChannelError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether this configuration can be used to send alerts.
    ///
    /// A default webhook alone is enough. Without one, there must be at least
    /// one override and every override needs both a group and a webhook.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`ProviderConfig::is_valid`], but reports which rule failed.
    ///
    /// # Errors
    /// Returns [`ChannelError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ChannelError> {
        if !self.webhook_url.is_empty() {
            return Ok(());
        }
        if self.overrides.is_empty() {
            return Err(ChannelError::InvalidConfig(
                "webhook-url is required when no overrides are configured".to_string(),
            ));
        }
        if let Some(position) = self.overrides.iter().position(|o| !o.is_valid()) {
            return Err(ChannelError::InvalidConfig(format!(
                "override #{position} must have a non-empty group and webhook-url"
            )));
        }
        Ok(())
    }

    /// Webhook URL for alerts of the given endpoint group.
    ///
    /// Returns the first override matching `group` exactly, otherwise the
    /// default webhook (which may be empty).
    #[must_use]
    pub fn webhook_url_for_group(&self, group: &str) -> &str {
        if !group.is_empty() {
            if let Some(o) = self.overrides.iter().find(|o| o.group == group) {
                return &o.webhook_url;
            }
        }
        &self.webhook_url
    }

    #[must_use]
    pub const fn default_alert(&self) -> Option<&AlertSettings> {
        self.default_alert.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_webhook_validity() {
        assert!(!ProviderConfig::new("").is_valid());
        assert!(ProviderConfig::new("http://example.com").is_valid());
    }

    #[test]
    fn test_override_validity() {
        let empty_group = ProviderConfig::default().with_override("", "http://example.com");
        assert!(!empty_group.is_valid());

        let empty_url = ProviderConfig::default().with_override("group", "");
        assert!(!empty_url.is_valid());

        let only_overrides =
            ProviderConfig::default().with_override("group", "http://example.com");
        assert!(only_overrides.is_valid());

        let both = ProviderConfig::new("http://example.com")
            .with_override("group", "http://example.com");
        assert!(both.is_valid());
    }

    #[test]
    fn test_validate_names_the_broken_override() {
        let config = ProviderConfig::default()
            .with_override("a", "http://a.example.com")
            .with_override("b", "");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ChannelError::InvalidConfig(ref msg) if msg.contains("#1")));
    }

    #[test]
    fn test_webhook_url_for_group() {
        let no_overrides = ProviderConfig::new("http://example.com");
        assert_eq!(no_overrides.webhook_url_for_group(""), "http://example.com");
        assert_eq!(no_overrides.webhook_url_for_group("group"), "http://example.com");

        let with_override = ProviderConfig::new("http://example.com")
            .with_override("group", "http://example01.com");
        assert_eq!(with_override.webhook_url_for_group(""), "http://example.com");
        assert_eq!(with_override.webhook_url_for_group("group"), "http://example01.com");
        assert_eq!(with_override.webhook_url_for_group("other"), "http://example.com");
    }

    #[test]
    fn test_first_matching_override_wins() {
        let config = ProviderConfig::new("http://default.example.com")
            .with_override("g", "http://first.example.com")
            .with_override("g", "http://second.example.com");
        assert_eq!(config.webhook_url_for_group("g"), "http://first.example.com");
    }

    #[test]
    fn test_unset_default_without_match_is_empty() {
        let config = ProviderConfig::default().with_override("g", "http://g.example.com");
        assert_eq!(config.webhook_url_for_group("other"), "");
        assert_eq!(config.webhook_url_for_group(""), "");
    }

    #[test]
    fn test_default_alert_accessor() {
        let config = ProviderConfig::new("http://example.com");
        assert!(config.default_alert().is_none());

        let config = config.with_default_alert(AlertSettings::default());
        assert!(config.default_alert().is_some());
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
webhook-url: https://chat.googleapis.com/v1/spaces/default
overrides:
  - group: core
    webhook-url: https://chat.googleapis.com/v1/spaces/core
default-alert:
  enabled: true
  failure-threshold: 5
  send-on-resolved: true
";
        let config = ProviderConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.overrides.len(), 1);
        assert_eq!(
            config.webhook_url_for_group("core"),
            "https://chat.googleapis.com/v1/spaces/core"
        );
        let default_alert = config.default_alert().unwrap();
        assert_eq!(default_alert.failure_threshold, Some(5));
        assert_eq!(default_alert.success_threshold, None);
        assert_eq!(default_alert.send_on_resolved, Some(true));
    }

    #[test]
    fn test_from_yaml_str_rejects_invalid_config() {
        let yaml = "
overrides:
  - group: core
    webhook-url: ''
";
        let err = ProviderConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ChannelError::InvalidConfig(_)));

        let err = ProviderConfig::from_yaml_str("webhook-url: [").unwrap_err();
        assert!(matches!(err, ChannelError::Yaml(_)));
    }
}
