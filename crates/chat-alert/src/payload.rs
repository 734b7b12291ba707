//! Google Chat card rendering.
//!
//! The body is produced from a fixed template rather than a serializer so
//! that the output, whitespace included, is identical for identical inputs.

use serde_json::Value;

use crate::alert::{AlertDescriptor, EndpointDescriptor, EvaluationResult};

/// Glyph prefixed to a condition that passed.
pub const SUCCESS_GLYPH: &str = "✅";

/// Glyph prefixed to a condition that failed.
pub const FAILURE_GLYPH: &str = "❌";

/// Whether the alert is firing or has recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    Triggered,
    Resolved,
}

impl AlertStatus {
    #[must_use]
    pub const fn from_resolved(resolved: bool) -> Self {
        if resolved {
            Self::Resolved
        } else {
            Self::Triggered
        }
    }

    /// Font color used for the status line.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Triggered => "#DD0000",
            Self::Resolved => "#36A64F",
        }
    }

    fn message(self, alert: &AlertDescriptor) -> String {
        match self {
            Self::Triggered => format!(
                "An alert has been triggered due to having failed {} time(s) in a row",
                alert.failure_threshold
            ),
            Self::Resolved => format!(
                "An alert has been resolved after passing successfully {} time(s) in a row",
                alert.success_threshold
            ),
        }
    }
}

/// Render the webhook body for an alert.
#[must_use]
pub fn build_request_body(
    endpoint: &EndpointDescriptor,
    alert: &AlertDescriptor,
    result: &EvaluationResult,
    resolved: bool,
) -> String {
    let status = AlertStatus::from_resolved(resolved);
    let status_line = format!(
        "<font color='{}'>{}</font>",
        status.color(),
        status.message(alert)
    );

    let mut results = String::new();
    for condition_result in &result.condition_results {
        let glyph = if condition_result.success {
            SUCCESS_GLYPH
        } else {
            FAILURE_GLYPH
        };
        results.push_str(glyph);
        results.push_str("   ");
        results.push_str(&escape_markup(&condition_result.condition));
        results.push_str("<br>");
    }

    let description = match alert.description() {
        "" => String::new(),
        d => format!(":: {d}"),
    };

    format!(
        r#"{{
    "cards": [
  {{
    "sections": [
      {{
        "widgets": [
          {{
            "keyValue": {{
              "topLabel": {title},
              "content": {status_line},
              "contentMultiline": "true",
              "bottomLabel": {description},
              "icon": "BOOKMARK"
            }}
          }},
          {{
            "keyValue": {{
              "topLabel": "Condition results",
              "content": {results},
              "contentMultiline": "true",
              "icon": "DESCRIPTION"
            }}
          }},
          {{
            "buttons": [
              {{
                "textButton": {{
                  "text": "URL",
                  "onClick": {{
                    "openLink": {{
                      "url": {url}
                    }}
                  }}
                }}
              }}
            ]
          }}
        ]
      }}
    ]
  }}
]
}}"#,
        title = json_string(&endpoint.display_name()),
        status_line = json_string(&status_line),
        description = json_string(&description),
        results = json_string(&results),
        url = json_string(&endpoint.url),
    )
}

/// Quote `s` as a JSON string literal.
fn json_string(s: &str) -> String {
    Value::from(s).to_string()
}

/// Entity-encode characters that Google Chat treats as markup in rich text.
fn escape_markup(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
