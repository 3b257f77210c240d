//! Contact Form Validation
//!
//! Every rule runs; all failures are collected rather than stopping at the
//! first one.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::contact::ContactFormData;

/// Minimum trimmed message length, in UTF-16 code units as browsers count it
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+()-]+$").expect("phone pattern compiles"));

/// Outcome of validating a submission
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,

    /// Field name → human-readable message
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Message for a single field, if it failed
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Check a submission against the contact form rules.
///
/// Total over any input: never panics, never short-circuits.
pub fn validate_contact_form(data: &ContactFormData) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if data.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }

    if data.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !EMAIL_PATTERN.is_match(&data.email) {
        errors.insert("email".to_string(), "Invalid email format".to_string());
    }

    let message = data.message.trim();
    if message.is_empty() {
        errors.insert("message".to_string(), "Message is required".to_string());
    } else if message.encode_utf16().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            "message".to_string(),
            format!("Message must be at least {MIN_MESSAGE_CHARS} characters"),
        );
    }

    if let Some(phone) = data.phone.as_deref() {
        if !phone.trim().is_empty() && !PHONE_PATTERN.is_match(phone) {
            errors.insert("phone".to_string(), "Invalid phone number format".to_string());
        }
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactFormData {
        ContactFormData {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "This is long enough.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form() {
        let result = validate_contact_form(&ContactFormData::default());

        assert!(!result.is_valid);
        let keys: Vec<&str> = result.errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["email", "message", "name"]);
        assert_eq!(result.error("name"), Some("Name is required"));
        assert_eq!(result.error("email"), Some("Email is required"));
        assert_eq!(result.error("message"), Some("Message is required"));
    }

    #[test]
    fn test_bad_email_and_short_message() {
        let form = ContactFormData {
            name: "A".into(),
            email: "bad".into(),
            message: "short".into(),
            ..Default::default()
        };
        let result = validate_contact_form(&form);

        assert_eq!(result.error("email"), Some("Invalid email format"));
        assert_eq!(result.error("message"), Some("Message must be at least 10 characters"));
        assert_eq!(result.error("name"), None);
    }

    #[test]
    fn test_bad_phone() {
        let form = ContactFormData {
            phone: Some("abc".into()),
            ..valid_form()
        };
        let result = validate_contact_form(&form);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error("phone"), Some("Invalid phone number format"));
    }

    #[test]
    fn test_valid_form_with_optional_fields() {
        let form = ContactFormData {
            phone: Some("+1 (555) 123-4567".into()),
            company: Some("Acme".into()),
            ..valid_form()
        };
        let result = validate_contact_form(&form);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_blank_phone_is_ignored() {
        let form = ContactFormData {
            phone: Some("   ".into()),
            ..valid_form()
        };
        assert!(validate_contact_form(&form).is_valid);
    }

    #[test]
    fn test_whitespace_only_fields_are_blank() {
        let form = ContactFormData {
            name: "   ".into(),
            email: " \t".into(),
            message: "\n  ".into(),
            ..Default::default()
        };
        let result = validate_contact_form(&form);

        assert_eq!(result.error("name"), Some("Name is required"));
        assert_eq!(result.error("email"), Some("Email is required"));
        assert_eq!(result.error("message"), Some("Message is required"));
    }

    #[test]
    fn test_message_length_counts_trimmed_chars() {
        let form = ContactFormData {
            message: "   123456789   ".into(),
            ..valid_form()
        };
        assert!(validate_contact_form(&form).error("message").is_some());

        let form = ContactFormData {
            message: "1234567890".into(),
            ..valid_form()
        };
        assert!(validate_contact_form(&form).is_valid);
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        // Each emoji is a surrogate pair, so five of them make ten units.
        let form = ContactFormData {
            message: "😀😀😀😀😀".into(),
            ..valid_form()
        };
        assert!(validate_contact_form(&form).is_valid);

        let form = ContactFormData {
            message: "😀😀😀😀".into(),
            ..valid_form()
        };
        assert_eq!(
            validate_contact_form(&form).error("message"),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_email_shapes() {
        for email in ["a@b.co", "first.last+tag@sub.example.org"] {
            let form = ContactFormData { email: email.into(), ..valid_form() };
            assert!(validate_contact_form(&form).is_valid, "{email} should pass");
        }
        for email in ["a@b", "a b@c.com", "@c.com", "a@@c.com"] {
            let form = ContactFormData { email: email.into(), ..valid_form() };
            assert_eq!(
                validate_contact_form(&form).error("email"),
                Some("Invalid email format"),
                "{email} should fail"
            );
        }
    }
}
