//! Integration Configuration
//!
//! Environment-derived settings with an explicit mode per integration, so
//! callers never inspect the environment themselves.

use std::fmt;

use mab_core::site::{DEFAULT_SITE_URL, SITE_EMAIL};
use reqwest::Url;

use crate::error::{LeadError, Result};

/// SendGrid API base used when `SENDGRID_ENDPOINT` is unset
pub const DEFAULT_SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com";

/// How leads leave the site
#[derive(Clone, PartialEq, Eq)]
pub enum LeadMode {
    /// Post each lead to the Webform3 endpoint
    Live { endpoint: Url, api_key: String },

    /// No endpoint or key configured: leads are accepted without a network call
    Development,
}

impl LeadMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live { .. } => "live",
            Self::Development => "development",
        }
    }
}

impl fmt::Debug for LeadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live { endpoint, .. } => f
                .debug_struct("Live")
                .field("endpoint", &endpoint.as_str())
                .field("api_key", &"<redacted>")
                .finish(),
            Self::Development => f.write_str("Development"),
        }
    }
}

/// Webform3 lead capture settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Webform3Config {
    pub mode: LeadMode,

    /// Inbox the lead service routes submissions to
    pub recipient: String,
}

impl Webform3Config {
    pub fn development() -> Self {
        Self {
            mode: LeadMode::Development,
            recipient: SITE_EMAIL.to_string(),
        }
    }

    pub fn live(endpoint: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            mode: LeadMode::Live {
                endpoint: parse_url("WEBFORM3_ENDPOINT", endpoint)?,
                api_key: api_key.into(),
            },
            recipient: SITE_EMAIL.to_string(),
        })
    }

    /// Read `WEBFORM3_ENDPOINT`, `WEBFORM3_API_KEY` and
    /// `WEBFORM3_RECIPIENT_EMAIL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Live mode needs both endpoint and key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let recipient = non_blank(&lookup, "WEBFORM3_RECIPIENT_EMAIL").unwrap_or_else(|| SITE_EMAIL.to_string());

        let mode = match (
            non_blank(&lookup, "WEBFORM3_ENDPOINT"),
            non_blank(&lookup, "WEBFORM3_API_KEY"),
        ) {
            (Some(endpoint), Some(api_key)) => LeadMode::Live {
                endpoint: parse_url("WEBFORM3_ENDPOINT", &endpoint)?,
                api_key,
            },
            _ => LeadMode::Development,
        };

        Ok(Self { mode, recipient })
    }
}

/// How notification emails are delivered
#[derive(Clone, PartialEq, Eq)]
pub enum MailMode {
    SendGrid { endpoint: Url, api_key: String },

    /// Write emails to the log instead of sending them
    Log,
}

impl MailMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SendGrid { .. } => "sendgrid",
            Self::Log => "log",
        }
    }
}

impl fmt::Debug for MailMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SendGrid { endpoint, .. } => f
                .debug_struct("SendGrid")
                .field("endpoint", &endpoint.as_str())
                .field("api_key", &"<redacted>")
                .finish(),
            Self::Log => f.write_str("Log"),
        }
    }
}

/// Notification email settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailConfig {
    pub mode: MailMode,

    /// Sender address on outgoing mail
    pub from: String,

    /// Team inbox for internal notifications
    pub team_recipient: String,

    /// Public site URL shown in email footers
    pub site_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            mode: MailMode::Log,
            from: SITE_EMAIL.to_string(),
            team_recipient: SITE_EMAIL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl MailConfig {
    /// Read `SENDGRID_API_KEY`, `SENDGRID_ENDPOINT`, `MAIL_FROM`,
    /// `WEBFORM3_RECIPIENT_EMAIL` and `APP_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let team_recipient = non_blank(&lookup, "WEBFORM3_RECIPIENT_EMAIL").unwrap_or_else(|| SITE_EMAIL.to_string());
        let from = non_blank(&lookup, "MAIL_FROM").unwrap_or_else(|| team_recipient.clone());
        let site_url = non_blank(&lookup, "APP_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        let mode = match non_blank(&lookup, "SENDGRID_API_KEY") {
            Some(api_key) => {
                let endpoint = non_blank(&lookup, "SENDGRID_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_SENDGRID_ENDPOINT.to_string());
                MailMode::SendGrid {
                    endpoint: parse_url("SENDGRID_ENDPOINT", &endpoint)?,
                    api_key,
                }
            }
            None => MailMode::Log,
        };

        Ok(Self {
            mode,
            from,
            team_recipient,
            site_url,
        })
    }
}

/// Look up a key, treating whitespace-only values as unset
pub fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_url(key: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| LeadError::Config(format!("{key} is not a valid URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_development_when_unconfigured() {
        let config = Webform3Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.mode, LeadMode::Development);
        assert_eq!(config.recipient, "mark@mabaistrategies.com");
    }

    #[test]
    fn test_development_when_only_key_set() {
        let config = Webform3Config::from_lookup(lookup(&[("WEBFORM3_API_KEY", "secret")])).unwrap();
        assert_eq!(config.mode.label(), "development");

        let config = Webform3Config::from_lookup(lookup(&[
            ("WEBFORM3_API_KEY", "secret"),
            ("WEBFORM3_ENDPOINT", "   "),
        ]))
        .unwrap();
        assert_eq!(config.mode, LeadMode::Development);
    }

    #[test]
    fn test_live_mode() {
        let config = Webform3Config::from_lookup(lookup(&[
            ("WEBFORM3_ENDPOINT", "https://api.webform3.example/leads"),
            ("WEBFORM3_API_KEY", "secret"),
            ("WEBFORM3_RECIPIENT_EMAIL", "team@example.com"),
        ]))
        .unwrap();

        assert_eq!(config.mode.label(), "live");
        assert_eq!(config.recipient, "team@example.com");
        assert!(!format!("{:?}", config.mode).contains("secret"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = Webform3Config::from_lookup(lookup(&[
            ("WEBFORM3_ENDPOINT", "not a url"),
            ("WEBFORM3_API_KEY", "secret"),
        ]));
        assert!(matches!(result, Err(LeadError::Config(_))));
    }

    #[test]
    fn test_mail_defaults() {
        let config = MailConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, MailConfig::default());
        assert_eq!(config.mode.label(), "log");
    }

    #[test]
    fn test_mail_sendgrid() {
        let config = MailConfig::from_lookup(lookup(&[
            ("SENDGRID_API_KEY", "SG.key"),
            ("WEBFORM3_RECIPIENT_EMAIL", "team@example.com"),
            ("APP_URL", "https://staging.mabaistrategies.com"),
        ]))
        .unwrap();

        assert_eq!(config.mode.label(), "sendgrid");
        assert_eq!(config.from, "team@example.com");
        assert_eq!(config.team_recipient, "team@example.com");
        assert_eq!(config.site_url, "https://staging.mabaistrategies.com");
    }
}
