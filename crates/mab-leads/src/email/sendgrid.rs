//! SendGrid v3 mail delivery

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::json;

use super::{Email, Mailer};
use crate::error::{LeadError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SendGridMailer {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    from: String,
}

impl SendGridMailer {
    pub fn new(endpoint: Url, api_key: String, from: String) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint,
            api_key,
            from,
        })
    }

    fn send_url(&self) -> Result<Url> {
        self.endpoint
            .join("/v3/mail/send")
            .map_err(|e| LeadError::Config(format!("Invalid SendGrid endpoint: {e}")))
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        let body = json!({
            "personalizations": [{
                "to": [{ "email": email.to, "name": email.to_name }],
            }],
            "from": { "email": self.from },
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text },
                { "type": "text/html", "value": email.html },
            ],
        });

        let response = self
            .http
            .post(self.send_url()?)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(to = %email.to, subject = %email.subject, "email accepted by SendGrid");
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(LeadError::MailRejected(format!("{status}: {detail}")))
        }
    }

    fn name(&self) -> &'static str {
        "sendgrid"
    }
}
