//! Inputs handed to a provider after each health check cycle.

use serde::{Deserialize, Serialize};

/// Failure threshold used when neither the endpoint nor the provider sets one.
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;

/// Success threshold used when neither the endpoint nor the provider sets one.
pub const DEFAULT_SUCCESS_THRESHOLD: u32 = 2;

/// The endpoint whose health check produced the alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub name: String,
    /// Routing key used to pick a webhook override. Empty means no group.
    #[serde(default)]
    pub group: String,
    /// Probed URL, linked from the alert card. Empty when unknown.
    #[serde(default)]
    pub url: String,
}

impl EndpointDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            url: String::new(),
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Title shown on the card, `"{name} [{group}]"`.
    ///
    /// The brackets are kept even when the group is empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} [{}]", self.name, self.group)
    }
}

/// A fully-resolved alert definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDescriptor {
    pub enabled: bool,
    pub description: Option<String>,
    pub failure_threshold: u32,
    pub success_threshold: u32,
    pub send_on_resolved: bool,
}

impl AlertDescriptor {
    /// Description, or the empty string when none is set.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, failure: u32, success: u32) -> Self {
        self.failure_threshold = failure;
        self.success_threshold = success;
        self
    }
}

impl Default for AlertDescriptor {
    fn default() -> Self {
        Self {
            enabled: true,
            description: None,
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
            send_on_resolved: false,
        }
    }
}

/// Alert settings as written in configuration, where every field is optional.
///
/// Used both for a provider's default alert and for an endpoint's own alert
/// block; [`AlertSettings::resolve`] layers the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AlertSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_on_resolved: Option<bool>,
}

impl AlertSettings {
    /// Build the effective alert, filling unset fields from `defaults`.
    ///
    /// A threshold of zero counts as unset.
    #[must_use]
    pub fn resolve(&self, defaults: Option<&Self>) -> AlertDescriptor {
        let fallback = Self::default();
        let defaults = defaults.unwrap_or(&fallback);
        let threshold = |own: Option<u32>, default: Option<u32>, hard: u32| {
            own.filter(|t| *t > 0)
                .or_else(|| default.filter(|t| *t > 0))
                .unwrap_or(hard)
        };

        AlertDescriptor {
            enabled: self.enabled.or(defaults.enabled).unwrap_or(false),
            description: self
                .description
                .clone()
                .or_else(|| defaults.description.clone()),
            failure_threshold: threshold(
                self.failure_threshold,
                defaults.failure_threshold,
                DEFAULT_FAILURE_THRESHOLD,
            ),
            success_threshold: threshold(
                self.success_threshold,
                defaults.success_threshold,
                DEFAULT_SUCCESS_THRESHOLD,
            ),
            send_on_resolved: self
                .send_on_resolved
                .or(defaults.send_on_resolved)
                .unwrap_or(false),
        }
    }
}

/// Outcome of a single condition evaluated by the probing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub condition: String,
    pub success: bool,
}

impl ConditionResult {
    #[must_use]
    pub fn new(condition: impl Into<String>, success: bool) -> Self {
        Self {
            condition: condition.into(),
            success,
        }
    }
}

/// Evaluated conditions of one health check, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub condition_results: Vec<ConditionResult>,
}

impl EvaluationResult {
    #[must_use]
    pub fn new(condition_results: Vec<ConditionResult>) -> Self {
        Self { condition_results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_keeps_empty_group_brackets() {
        assert_eq!(
            EndpointDescriptor::new("endpoint-name", "").display_name(),
            "endpoint-name []"
        );
        assert_eq!(
            EndpointDescriptor::new("api", "core").display_name(),
            "api [core]"
        );
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let alert = AlertDescriptor::default();
        assert_eq!(alert.description(), "");
        assert_eq!(alert.with_description("db down").description(), "db down");
    }

    #[test]
    fn test_resolve_without_defaults_uses_builtin_thresholds() {
        let alert = AlertSettings::default().resolve(None);
        assert!(!alert.enabled);
        assert_eq!(alert.failure_threshold, DEFAULT_FAILURE_THRESHOLD);
        assert_eq!(alert.success_threshold, DEFAULT_SUCCESS_THRESHOLD);
        assert!(!alert.send_on_resolved);
        assert_eq!(alert.description, None);
    }

    #[test]
    fn test_resolve_fills_unset_fields_from_defaults() {
        let defaults = AlertSettings {
            enabled: Some(true),
            description: Some("from provider".to_string()),
            failure_threshold: Some(10),
            success_threshold: Some(4),
            send_on_resolved: Some(true),
        };
        let own = AlertSettings {
            failure_threshold: Some(1),
            success_threshold: Some(0),
            ..AlertSettings::default()
        };

        let alert = own.resolve(Some(&defaults));
        assert!(alert.enabled);
        assert_eq!(alert.description(), "from provider");
        assert_eq!(alert.failure_threshold, 1);
        assert_eq!(alert.success_threshold, 4);
        assert!(alert.send_on_resolved);
    }

    #[test]
    fn test_resolve_prefers_endpoint_settings() {
        let defaults = AlertSettings {
            enabled: Some(true),
            description: Some("from provider".to_string()),
            ..AlertSettings::default()
        };
        let own = AlertSettings {
            enabled: Some(false),
            description: Some("from endpoint".to_string()),
            ..AlertSettings::default()
        };

        let alert = own.resolve(Some(&defaults));
        assert!(!alert.enabled);
        assert_eq!(alert.description(), "from endpoint");
    }
}
