//! Notification Email
//!
//! Confirmation to the enquirer and a heads-up to the team. Delivery goes
//! through a [`Mailer`], chosen from [`MailConfig`].

mod sendgrid;
pub mod templates;

pub use sendgrid::SendGridMailer;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use mab_core::ContactFormData;

use crate::config::{MailConfig, MailMode};
use crate::error::Result;

/// A rendered email ready to send
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub to_name: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Email delivery backend
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<()>;

    /// Backend name for logs and health output
    fn name(&self) -> &'static str;
}

/// Mailer that only logs. Used until a provider is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        tracing::info!(to = %email.to, subject = %email.subject, "📧 Sending email");
        tracing::debug!(body = %email.text, "email body");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Renders and sends the two contact notifications
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    config: MailConfig,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, config: MailConfig) -> Self {
        Self { mailer, config }
    }

    /// Pick the mailer named by the config's mode
    pub fn from_config(config: MailConfig) -> Result<Self> {
        let mailer: Arc<dyn Mailer> = match &config.mode {
            MailMode::SendGrid { endpoint, api_key } => {
                Arc::new(SendGridMailer::new(endpoint.clone(), api_key.clone(), config.from.clone())?)
            }
            MailMode::Log => Arc::new(LogMailer),
        };
        Ok(Self::new(mailer, config))
    }

    pub fn mailer_name(&self) -> &'static str {
        self.mailer.name()
    }

    /// Thank the enquirer and set the response expectation
    pub async fn send_contact_confirmation(&self, form: &ContactFormData) -> Result<()> {
        let email = templates::contact_confirmation(form, &self.config, Utc::now().year());
        self.mailer.send(&email).await
    }

    /// Tell the team a new enquiry arrived from `source`
    pub async fn send_internal_notification(&self, form: &ContactFormData, source: &str) -> Result<()> {
        let email = templates::internal_notification(form, source, &self.config);
        self.mailer.send(&email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Outbox {
        sent: Mutex<Vec<Email>>,
    }

    #[async_trait]
    impl Mailer for Outbox {
        async fn send(&self, email: &Email) -> Result<()> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "outbox"
        }
    }

    fn form() -> ContactFormData {
        ContactFormData {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            message: "Tell me about agents.".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_confirmation_goes_to_enquirer() {
        let outbox = Arc::new(Outbox::default());
        let notifier = Notifier::new(outbox.clone(), MailConfig::default());

        notifier.send_contact_confirmation(&form()).await.unwrap();

        let sent = outbox.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "jane@example.com");
        assert_eq!(sent[0].subject, "Thank you for contacting MAB AI Strategies");
    }

    #[tokio::test]
    async fn test_internal_notification_goes_to_team() {
        let outbox = Arc::new(Outbox::default());
        let config = MailConfig {
            team_recipient: "team@example.com".into(),
            ..MailConfig::default()
        };
        let notifier = Notifier::new(outbox.clone(), config);

        notifier.send_internal_notification(&form(), "/contact").await.unwrap();

        let sent = outbox.sent.lock().unwrap();
        assert_eq!(sent[0].to, "team@example.com");
        assert_eq!(sent[0].subject, "New Contact Form Submission from Jane");
        assert!(sent[0].text.contains("Source: /contact\n"));
    }

    #[tokio::test]
    async fn test_log_mailer_is_default() {
        let notifier = Notifier::from_config(MailConfig::default()).unwrap();

        assert_eq!(notifier.mailer_name(), "log");
        notifier.send_contact_confirmation(&form()).await.unwrap();
    }
}
