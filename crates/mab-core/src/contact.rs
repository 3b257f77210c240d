//! Contact Form Models
//!
//! Wire types for `POST /api/contact`, shared by the server and the web
//! frontend.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Acknowledgement returned on every accepted submission
pub const ACKNOWLEDGEMENT: &str = "Thank you for contacting us! We will get back to you within 24 hours.";

/// Error text for a rejected submission
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Error text for anything that went wrong server-side
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// A contact form submission as sent by the browser.
///
/// Every field is optional on the wire; absent or `null` required fields
/// deserialize as empty strings and are caught by validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormData {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Service slug, e.g. `custom-agents`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Budget slug, e.g. `25k-50k`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,

    /// Page the form was submitted from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ContactFormData {
    /// Explicit `source` field when non-empty
    pub fn explicit_source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A submission enriched for the external lead service
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadData {
    #[serde(flatten)]
    pub contact: ContactFormData,

    /// Submission time, ISO-8601 with millisecond precision
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,

    pub source: String,
}

impl LeadData {
    pub fn new(form: &ContactFormData, source: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let mut contact = form.clone();
        // The resolved source below takes over the submitted one
        contact.source = None;

        Self {
            contact,
            timestamp,
            source: source.into(),
        }
    }
}

fn iso_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Response body of `POST /api/contact`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Field name → message, present on validation failure only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: Some(ACKNOWLEDGEMENT.into()),
            error: None,
            errors: None,
        }
    }

    pub fn validation_failed(errors: BTreeMap<String, String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(VALIDATION_FAILED.into()),
            errors: Some(errors),
        }
    }

    pub fn unexpected() -> Self {
        Self {
            success: false,
            message: None,
            error: Some(UNEXPECTED_ERROR.into()),
            errors: None,
        }
    }
}
